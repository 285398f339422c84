//! Filesystem utilities for kubeconf.

pub mod atomic;

pub use atomic::write_private;
