//! Loading, serializing and persisting a [`KubeConfig`].
//!
//! These go straight through `serde_yaml`; they do not canonicalize. Output
//! keeps the field order of the model and the original order of unknown keys.

use super::model::KubeConfig;
use crate::error::{Error, Result};
use crate::fs::write_private;
use std::fmt;
use std::path::Path;
use tracing::debug;

impl KubeConfig {
    /// Load a kubeconfig from `path`, replacing everything held in `self`.
    ///
    /// On error `self` is left untouched.
    ///
    /// # Returns
    ///
    /// * `Err(Error::Io)` - The file could not be read
    /// * `Err(Error::Parse)` - The content is not YAML of the expected shape
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        *self = Self::from_path(path)?;
        Ok(())
    }

    /// Read and parse the kubeconfig at `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("failed to read kubeconfig '{}'", path.display()),
                e,
            )
        })?;

        let config = Self::from_yaml(&content)?;
        debug!(
            path = %path.display(),
            clusters = config.clusters.len(),
            contexts = config.contexts.len(),
            users = config.users.len(),
            "loaded kubeconfig"
        );
        Ok(config)
    }

    /// Parse a kubeconfig from a YAML string.
    ///
    /// Unknown keys are kept, not rejected. An empty document yields an empty
    /// configuration.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serialize to YAML bytes.
    ///
    /// # Panics
    ///
    /// The model only holds strings, booleans and YAML values, all of which
    /// always serialize. A failure here is a bug and panics.
    pub fn serialize(&self) -> Vec<u8> {
        self.to_yaml().into_bytes()
    }

    fn to_yaml(&self) -> String {
        serde_yaml::to_string(self).expect("kubeconfig model always serializes to YAML")
    }

    /// Serialize and write to `path` with owner-only permissions.
    ///
    /// The file is replaced, never partially overwritten: content goes to a
    /// 0600 temporary sibling first and is then renamed into place. If `path`
    /// is a symlink, the link is kept and the file it points to is replaced.
    pub fn persist<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.serialize();
        write_private(path, &bytes)?;
        debug!(path = %path.display(), bytes = bytes.len(), "persisted kubeconfig");
        Ok(())
    }
}

/// Full YAML rendering, same bytes as [`KubeConfig::serialize`].
///
/// Not redacted: tokens, keys and passwords appear in plain text.
impl fmt::Display for KubeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_yaml())
    }
}
