//! Log-safe rendering of [`AuthProvider`].
//!
//! Formatting an `AuthProvider` (directly, or through the derived `Debug` of
//! `User`, `NamedUser` and `KubeConfig`) never prints provider settings.

use super::model::AuthProvider;
use std::fmt;

/// Shown in place of a present `config` map, even an empty one.
pub const REDACTED: &str = "--- REDACTED ---";

/// Shown when `config` is unset.
pub const ABSENT: &str = "<none>";

impl fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = match self.config {
            Some(_) => format!("{{{}}}", REDACTED),
            None => ABSENT.to_string(),
        };
        write!(
            f,
            "AuthProvider {{ name: {:?}, config: {} }}",
            self.name, config
        )
    }
}

impl fmt::Debug for AuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kubeconfig::User;
    use std::collections::BTreeMap;

    fn provider(config: Option<BTreeMap<String, String>>) -> AuthProvider {
        AuthProvider {
            name: "oidc".to_string(),
            config,
            ..Default::default()
        }
    }

    fn secret_config() -> BTreeMap<String, String> {
        BTreeMap::from([
            ("client-secret".to_string(), "hunter2".to_string()),
            ("refresh-token".to_string(), "rt-abc123".to_string()),
        ])
    }

    #[test]
    fn present_config_is_redacted() {
        let rendered = provider(Some(secret_config())).to_string();

        assert_eq!(
            rendered,
            "AuthProvider { name: \"oidc\", config: {--- REDACTED ---} }"
        );
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("rt-abc123"));
        assert!(!rendered.contains("client-secret"));
    }

    #[test]
    fn absent_config_renders_placeholder() {
        assert_eq!(
            provider(None).to_string(),
            "AuthProvider { name: \"oidc\", config: <none> }"
        );
    }

    #[test]
    fn empty_and_absent_config_differ() {
        let empty = provider(Some(BTreeMap::new())).to_string();
        let absent = provider(None).to_string();

        assert_ne!(empty, absent);
        assert!(empty.contains(REDACTED));
        assert!(absent.contains(ABSENT));
    }

    #[test]
    fn debug_matches_display() {
        let p = provider(Some(secret_config()));
        assert_eq!(format!("{:?}", p), p.to_string());
        assert_eq!(format!("{:#?}", p), p.to_string());
    }

    #[test]
    fn extension_fields_are_not_rendered() {
        let mut p = provider(None);
        p.extra.insert("idp-secret".into(), "leaked?".into());

        assert!(!p.to_string().contains("leaked?"));
    }

    #[test]
    fn user_debug_does_not_leak_provider_secrets() {
        let user = User {
            auth_provider: Some(provider(Some(secret_config()))),
            ..Default::default()
        };

        let rendered = format!("{:?}", user);
        assert!(rendered.contains(REDACTED));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn name_is_shown_verbatim() {
        let mut p = provider(None);
        p.name = "gcp".to_string();
        assert!(p.to_string().contains("name: \"gcp\""));
    }
}
