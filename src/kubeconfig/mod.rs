//! Typed KUBECONFIG model.
//!
//! This module defines [`KubeConfig`] and its entries. It round-trips unknown
//! YAML keys through the `extra` mapping on every entity, keeps list order,
//! and writes files readable by their owner only.

mod lookup;
mod model;
mod operations;
mod redact;


// Re-export public API
pub use lookup::Resolved;
pub use model::{
    AuthProvider, Cluster, Context, KubeConfig, NamedCluster, NamedContext, NamedUser, User,
};
pub use redact::{ABSENT, REDACTED};
