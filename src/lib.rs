//! kubeconf: a typed KUBECONFIG model and canonical YAML normalization.
//!
//! Two independent pieces:
//!
//! - [`yaml::normalize`] rewrites any YAML document into one canonical
//!   serialization, so output from different emitters compares equal.
//! - [`kubeconfig::KubeConfig`] loads, edits and persists KUBECONFIG files
//!   without losing fields it does not know about.
//!
//! ```no_run
//! use kubeconf::kubeconfig::KubeConfig;
//!
//! let mut config = KubeConfig::default();
//! config.load("/home/me/.kube/config")?;
//! config.current_context = "staging".to_string();
//! config.persist("/home/me/.kube/config")?;
//! # Ok::<(), kubeconf::Error>(())
//! ```

pub mod error;
pub mod fs;
pub mod kubeconfig;
pub mod yaml;

pub use error::{Error, Result};
pub use kubeconfig::KubeConfig;
pub use yaml::normalize;
