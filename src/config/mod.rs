mod defaults;
pub mod loader;

use std::collections::BTreeMap;

pub use loader::{load, load_from, save, save_to};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::visibility::Visibility;

/// Region and visibility a resolver is built for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    #[serde(default = "defaults::region")]
    pub region: String,
    #[serde(default)]
    pub visibility: Visibility,
}

/// Contents of the endpoints config file.
///
/// Top-level `region`/`visibility` keys form the default profile; named
/// profiles live under `[profiles.<name>]`.
///
/// ```toml
/// region = "us-south"
/// visibility = "public"
///
/// [profiles.frankfurt-private]
/// region = "eu-de"
/// visibility = "private"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EndpointsConfig {
    #[serde(flatten)]
    pub defaults: ResolverConfig,
    #[serde(default)]
    pub profiles: BTreeMap<String, ResolverConfig>,
}

impl EndpointsConfig {
    pub fn profile(&self, name: &str) -> Result<&ResolverConfig, ConfigError> {
        self.profiles
            .get(name)
            .ok_or_else(|| ConfigError::UnknownProfile(name.to_string()))
    }

    /// The named profile, or the defaults when `name` is `None`.
    pub fn select(&self, name: Option<&str>) -> Result<&ResolverConfig, ConfigError> {
        name.map_or(Ok(&self.defaults), |name| self.profile(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EndpointsConfig::default();
        assert_eq!(config.defaults.region, "us-south");
        assert_eq!(config.defaults.visibility, Visibility::Public);
        assert!(config.profiles.is_empty());
    }

    #[test]
    fn test_deserialize_profiles() {
        let content = r#"
            visibility = "private"

            [profiles.frankfurt]
            region = "eu-de"

            [profiles.dallas-private]
            region = "us-south"
            visibility = "private"
        "#;
        let config: EndpointsConfig = toml::from_str(content).unwrap();

        assert_eq!(config.defaults.region, "us-south");
        assert_eq!(config.defaults.visibility, Visibility::Private);

        let frankfurt = config.profile("frankfurt").unwrap();
        assert_eq!(frankfurt.region, "eu-de");
        assert_eq!(frankfurt.visibility, Visibility::Public);
        assert_eq!(
            config.select(Some("dallas-private")).unwrap().visibility,
            Visibility::Private
        );
        assert_eq!(config.select(None).unwrap(), &config.defaults);
    }

    #[test]
    fn test_unknown_profile() {
        let config = EndpointsConfig::default();
        let err = config.profile("missing").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownProfile(name) if name == "missing"));
    }

    #[test]
    fn test_invalid_visibility_rejected() {
        let result = toml::from_str::<EndpointsConfig>(r#"visibility = "hidden""#);
        assert!(result.is_err());
    }
}
