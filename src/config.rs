//! Plugin declaration config.
//!
//! Declares which plugins the orchestrator should load for each behavior
//! kind, in the order they should be tried. Resolution of `type` to an
//! implementation happens in the orchestrator's load function; this crate
//! only carries the declarations.

use crate::error::Result;
use serde::Deserialize;
use std::path::Path;

/// One declared plugin
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct PluginEntry {
    /// Unique name within the behavior kind's namespace
    pub name: String,

    /// Implementation type identifier, resolved by the external loader
    #[serde(rename = "type")]
    pub type_id: String,

    /// Whether the type implements the legacy single-outcome interface
    /// (default: false)
    #[serde(default)]
    pub legacy: bool,
}

/// Declared plugins per behavior kind
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NavPluginsConfig {
    #[serde(default)]
    pub planners: Vec<PluginEntry>,

    #[serde(default)]
    pub controllers: Vec<PluginEntry>,

    #[serde(default)]
    pub recoveries: Vec<PluginEntry>,
}

impl NavPluginsConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
[[planners]]
name = "global"
type = "navfn/NavfnROS"
legacy = true

[[controllers]]
name = "local"
type = "dwa/DWAController"

[[recoveries]]
name = "rotate"
type = "rotate_recovery/RotateRecovery"
legacy = true

[[recoveries]]
name = "clear_costmap"
type = "clear_costmap_recovery/ClearCostmap"
"#;

    #[test]
    fn test_parse_sample() {
        let config = NavPluginsConfig::from_toml(SAMPLE).unwrap();
        assert_eq!(config.planners.len(), 1);
        assert_eq!(config.controllers.len(), 1);
        assert_eq!(config.recoveries.len(), 2);

        assert_eq!(config.planners[0].name, "global");
        assert_eq!(config.planners[0].type_id, "navfn/NavfnROS");
        assert!(config.planners[0].legacy);
    }

    #[test]
    fn test_legacy_defaults_to_false() {
        let config = NavPluginsConfig::from_toml(SAMPLE).unwrap();
        assert!(!config.controllers[0].legacy);
        assert!(!config.recoveries[1].legacy);
    }

    #[test]
    fn test_empty_sections_allowed() {
        let config = NavPluginsConfig::from_toml("").unwrap();
        assert!(config.planners.is_empty());
        assert!(config.controllers.is_empty());
        assert!(config.recoveries.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = NavPluginsConfig::load(file.path()).unwrap();
        assert_eq!(config.recoveries[1].name, "clear_costmap");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = NavPluginsConfig::from_toml("[[planners]]\nname = 1").unwrap_err();
        assert!(matches!(err, crate::error::SetuError::Config(_)));
    }
}
