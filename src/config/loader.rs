use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::{EndpointsConfig, ResolverConfig};
use crate::env::{EnvSource, ProcessEnv, env_fallback};
use crate::error::ConfigError;

const CONFIG_DIR: &str = "ibmcloud-endpoints";
const CONFIG_FILE: &str = "config.toml";

/// Checked in order; the first non-empty value wins.
pub const REGION_ENV_VARS: [&str; 4] =
    ["IC_REGION", "IBMCLOUD_REGION", "BM_REGION", "BLUEMIX_REGION"];
pub const VISIBILITY_ENV_VARS: [&str; 2] = ["IC_VISIBILITY", "IBMCLOUD_VISIBILITY"];

pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(CONFIG_DIR))
}

pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join(CONFIG_FILE))
}

/// Load the config from the user's config directory, overlaid with the
/// process environment.
pub fn load() -> Result<EndpointsConfig, ConfigError> {
    match config_path() {
        Some(path) => load_from(&path, &ProcessEnv),
        None => {
            debug!("No config directory found, using defaults");
            let mut config = EndpointsConfig::default();
            apply_env(&mut config.defaults, &ProcessEnv)?;
            Ok(config)
        }
    }
}

/// Load the config at `path`, then overlay region and visibility from `env`
/// onto the default profile. A missing file yields the defaults.
pub fn load_from(path: &Path, env: &impl EnvSource) -> Result<EndpointsConfig, ConfigError> {
    let mut config = match fs::read_to_string(path) {
        Ok(content) => {
            let config: EndpointsConfig = toml::from_str(&content)?;
            info!(
                path = %path.display(),
                profiles = config.profiles.len(),
                "Loaded endpoints config"
            );
            config
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "Config file not found, using defaults");
            EndpointsConfig::default()
        }
        Err(err) => return Err(err.into()),
    };

    apply_env(&mut config.defaults, env)?;
    Ok(config)
}

/// Write `config` to the user's config directory.
pub fn save(config: &EndpointsConfig) -> Result<(), ConfigError> {
    let Some(path) = config_path() else {
        warn!("Could not determine config directory");
        return Ok(());
    };
    save_to(&path, config)
}

/// Write `config` to `path`, creating parent directories as needed.
pub fn save_to(path: &Path, config: &EndpointsConfig) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    debug!(path = %path.display(), "Saved endpoints config");
    Ok(())
}

fn apply_env(config: &mut ResolverConfig, env: &impl EnvSource) -> Result<(), ConfigError> {
    let region = env_fallback(env, &REGION_ENV_VARS, "");
    if !region.is_empty() {
        debug!(%region, "Region set from environment");
        config.region = region;
    }

    let visibility = env_fallback(env, &VISIBILITY_ENV_VARS, "");
    if !visibility.is_empty() {
        config.visibility = visibility.parse()?;
        debug!(visibility = %config.visibility, "Visibility set from environment");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use color_eyre::Result;
    use tempfile::TempDir;

    use super::*;
    use crate::env::MapEnv;
    use crate::visibility::Visibility;

    fn write_config(dir: &TempDir, content: &str) -> Result<PathBuf> {
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, content)?;
        Ok(path)
    }

    #[test]
    fn test_missing_file_uses_defaults() -> Result<()> {
        let dir = TempDir::new()?;
        let config = load_from(&dir.path().join(CONFIG_FILE), &MapEnv::new())?;
        assert_eq!(config, EndpointsConfig::default());
        Ok(())
    }

    #[test]
    fn test_load_file() -> Result<()> {
        let dir = TempDir::new()?;
        let path = write_config(
            &dir,
            r#"
            region = "eu-gb"
            visibility = "private"

            [profiles.sydney]
            region = "au-syd"
            "#,
        )?;

        let config = load_from(&path, &MapEnv::new())?;
        assert_eq!(config.defaults.region, "eu-gb");
        assert_eq!(config.defaults.visibility, Visibility::Private);
        assert_eq!(config.profile("sydney")?.region, "au-syd");
        Ok(())
    }

    #[test]
    fn test_env_overrides_file() -> Result<()> {
        let dir = TempDir::new()?;
        let path = write_config(&dir, "region = \"eu-gb\"\n")?;
        let env: MapEnv = [
            ("IC_REGION", ""),
            ("IBMCLOUD_REGION", "jp-tok"),
            ("BLUEMIX_REGION", "eu-de"),
            ("IBMCLOUD_VISIBILITY", "Private"),
        ]
        .into_iter()
        .collect();

        let config = load_from(&path, &env)?;
        assert_eq!(config.defaults.region, "jp-tok");
        assert_eq!(config.defaults.visibility, Visibility::Private);
        Ok(())
    }

    #[test]
    fn test_env_does_not_touch_profiles() -> Result<()> {
        let dir = TempDir::new()?;
        let path = write_config(&dir, "[profiles.dev]\nregion = \"eu-gb\"\n")?;
        let env: MapEnv = [("IC_REGION", "us-east")].into_iter().collect();

        let config = load_from(&path, &env)?;
        assert_eq!(config.defaults.region, "us-east");
        assert_eq!(config.profile("dev")?.region, "eu-gb");
        Ok(())
    }

    #[test]
    fn test_invalid_env_visibility() -> Result<()> {
        let dir = TempDir::new()?;
        let env: MapEnv = [("IC_VISIBILITY", "public-and-private")]
            .into_iter()
            .collect();

        let err = load_from(&dir.path().join(CONFIG_FILE), &env).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVisibility(_)));
        Ok(())
    }

    #[test]
    fn test_malformed_file() -> Result<()> {
        let dir = TempDir::new()?;
        let path = write_config(&dir, "region = [")?;

        let err = load_from(&path, &MapEnv::new()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        Ok(())
    }

    #[test]
    fn test_unreadable_path_is_an_error() -> Result<()> {
        let dir = TempDir::new()?;

        let err = load_from(dir.path(), &MapEnv::new()).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
        Ok(())
    }

    #[test]
    fn test_file_visibility_is_case_insensitive() -> Result<()> {
        let dir = TempDir::new()?;
        let path = write_config(&dir, "visibility = \"Private\"\n")?;

        let config = load_from(&path, &MapEnv::new())?;
        assert_eq!(config.defaults.visibility, Visibility::Private);
        Ok(())
    }

    #[test]
    fn test_save_then_load() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("nested").join(CONFIG_FILE);

        let mut config = EndpointsConfig::default();
        config.defaults.region = "eu-de".to_string();
        config.profiles.insert(
            "dallas-private".to_string(),
            ResolverConfig {
                region: "us-south".to_string(),
                visibility: Visibility::Private,
            },
        );

        save_to(&path, &config)?;
        assert_eq!(load_from(&path, &MapEnv::new())?, config);
        Ok(())
    }

    #[test]
    fn test_config_path_file_name() {
        if let Some(path) = config_path() {
            assert!(path.ends_with("ibmcloud-endpoints/config.toml"));
        }
    }
}
