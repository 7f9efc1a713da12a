//! Runtime configuration for the grimoire process.
//!
//! Load order: `grimoire.toml` → environment variables → defaults.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GrimoireConfig {
    pub mappings: MappingsConfig,
    pub chat: ChatConfig,
}

/// Where the YAML source tables live.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingsConfig {
    /// Directory holding guides.yaml, mplus-routes.yaml, raid.yaml,
    /// murloc.yaml. Relative paths resolve against the working dir.
    pub dir: PathBuf,
}

/// Inbound chat handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Messages starting with this prefix belong to the explicit
    /// command path and are never mention-scanned.
    pub command_prefix: String,
}

impl Default for MappingsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("mappings"),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            command_prefix: "!".to_string(),
        }
    }
}

/// Helper to parse an env var and apply it to a config field.
fn env_override<T: std::str::FromStr>(var: &str, target: &mut T) {
    if let Ok(v) = std::env::var(var)
        && let Ok(n) = v.parse()
    {
        *target = n;
    }
}

impl GrimoireConfig {
    /// Load config from `grimoire.toml` in `root`, with env var
    /// overrides. Falls back to defaults if no config file exists.
    pub fn load(root: &Path) -> Result<Self> {
        let config_path = root.join("grimoire.toml");

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };

        env_override("GRIMOIRE_MAPPINGS_DIR", &mut config.mappings.dir);
        env_override("GRIMOIRE_COMMAND_PREFIX", &mut config.chat.command_prefix);

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GrimoireConfig::default();
        assert_eq!(config.mappings.dir, PathBuf::from("mappings"));
        assert_eq!(config.chat.command_prefix, "!");
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
[mappings]
dir = "data/tables"

[chat]
command_prefix = "?"
"#;
        let config: GrimoireConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.mappings.dir, PathBuf::from("data/tables"));
        assert_eq!(config.chat.command_prefix, "?");
    }

    #[test]
    fn test_config_partial_toml_keeps_defaults() {
        let config: GrimoireConfig = toml::from_str("[chat]\ncommand_prefix = \"$\"\n").unwrap();
        assert_eq!(config.chat.command_prefix, "$");
        assert_eq!(config.mappings.dir, PathBuf::from("mappings"));
    }

    #[test]
    fn test_config_load_nonexistent() {
        let config = GrimoireConfig::load(Path::new("/nonexistent/path")).unwrap();
        assert_eq!(config.chat.command_prefix, "!");
    }

    #[test]
    fn test_config_load_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(
            tmp.path().join("grimoire.toml"),
            "[mappings]\ndir = \"tables\"\n",
        )
        .unwrap();

        let config = GrimoireConfig::load(tmp.path()).unwrap();
        assert_eq!(config.mappings.dir, PathBuf::from("tables"));
        assert_eq!(config.chat.command_prefix, "!");
    }
}
