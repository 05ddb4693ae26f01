use std::{fs, path::Path, sync::Arc};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::here;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    pub discord_token: String,

    /// Guild to register commands in instead of registering them globally.
    /// Global registration can take up to an hour to propagate, so this is
    /// useful while developing.
    #[serde(default)]
    pub test_guild: Option<u64>,
}

impl Config {
    pub fn load(folder: &Path) -> anyhow::Result<Arc<Self>> {
        let config_toml =
            fs::read_to_string(folder.join("config.toml")).context(here!())?;
        let config: Config = toml::from_str(&config_toml).context(here!())?;

        Ok(Arc::new(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_config() {
        let config: Config = toml::from_str(r#"discord_token = "token""#).unwrap();
        assert_eq!(config.discord_token, "token");
        assert_eq!(config.test_guild, None);
    }

    #[test]
    fn parses_test_guild() {
        let config: Config = toml::from_str(
            r#"
            discord_token = "token"
            test_guild = 813398764421349378
            "#,
        )
        .unwrap();
        assert_eq!(config.test_guild, Some(813_398_764_421_349_378));
    }
}
