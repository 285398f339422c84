//! KUBECONFIG schema types.

use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::Mapping;
use std::collections::BTreeMap;

/// An opinionated subset of KUBECONFIG for apps that manipulate the file.
///
/// Unlike client-go, clusters, contexts and users are ordered lists rather
/// than maps, so their order survives a load/persist cycle. Any top-level key
/// without a field of its own (`apiVersion`, `kind`, `preferences`, ...) is
/// kept in [`KubeConfig::extra`] and written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KubeConfig {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub clusters: Vec<NamedCluster>,

    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub contexts: Vec<NamedContext>,

    /// Known as `AuthInfos` in client-go.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<NamedUser>,

    /// Name of the active context.
    #[serde(rename = "current-context", skip_serializing_if = "String::is_empty")]
    pub current_context: String,

    /// Keys not modeled above, merged inline on output.
    #[serde(flatten)]
    pub extra: Mapping,
}

/// Associates a name with a cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamedCluster {
    pub name: String,
    pub cluster: Cluster,

    #[serde(flatten)]
    pub extra: Mapping,
}

/// Connection details for a Kubernetes API server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Cluster {
    pub server: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub tls_server_name: String,

    #[serde(rename = "insecure-skip-tls-verify", skip_serializing_if = "is_false")]
    pub skip_tls_verify: bool,

    /// Base64 encoded PEM bundle.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub certificate_authority_data: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub proxy_url: String,

    #[serde(flatten)]
    pub extra: Mapping,
}

/// Associates a name with a context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamedContext {
    pub name: String,
    pub context: Context,

    #[serde(flatten)]
    pub extra: Mapping,
}

/// Mostly a cluster, a user, and a namespace.
///
/// `cluster` and `user` are names, resolved against the owning
/// [`KubeConfig`] lists; see [`KubeConfig::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Context {
    pub cluster: String,
    pub user: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub namespace: String,

    #[serde(flatten)]
    pub extra: Mapping,
}

/// Associates a name with a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamedUser {
    pub name: String,
    pub user: User,

    #[serde(flatten)]
    pub extra: Mapping,
}

/// Identity information, officially `AuthInfo`.
///
/// Everything is assumed to live inside the single KUBECONFIG file, so only
/// the inline `-data` variants of certificates and keys are modeled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct User {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub client_certificate_data: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub client_key_data: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub token: String,

    /// Impersonation.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub act_as: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub act_as_uid: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub act_as_groups: Vec<String>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_provider: Option<AuthProvider>,

    #[serde(flatten)]
    pub extra: Mapping,
}

/// A pluggable authentication provider and its settings.
///
/// `config` regularly holds client secrets and refresh tokens. The
/// `Debug`/`Display` impls redact it; serialization does not.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthProvider {
    pub name: String,

    /// `None` and an empty map are both omitted on output, but stay distinct
    /// in memory.
    #[serde(skip_serializing_if = "is_empty_config")]
    pub config: Option<BTreeMap<String, String>>,

    #[serde(flatten)]
    pub extra: Mapping,
}

/// Treats an explicit `null` (as written by `kubectl config view` for empty
/// lists) the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn is_false(b: &bool) -> bool {
    !*b
}

fn is_empty_config(config: &Option<BTreeMap<String, String>>) -> bool {
    config.as_ref().is_none_or(BTreeMap::is_empty)
}
