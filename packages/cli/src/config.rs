use pagewright_model::Viewport;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "pagewright.config.json";

/// Pagewright configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory project exports are written to
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Known viewports; the first one is the reference viewport
    #[serde(default = "Viewport::defaults")]
    pub viewports: Vec<Viewport>,

    /// Viewport used for single-page exports when none is given
    #[serde(default = "default_viewport")]
    pub default_viewport: String,
}

fn default_out_dir() -> String {
    "dist".to_string()
}

fn default_viewport() -> String {
    pagewright_model::REFERENCE_VIEWPORT.to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            if config.viewports.is_empty() {
                anyhow::bail!("{} must list at least one viewport", DEFAULT_CONFIG_NAME);
            }
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Get absolute path to the output directory
    pub fn get_out_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.out_dir)
    }

    /// Look up a viewport by name, falling back to `default_viewport`
    pub fn viewport(&self, name: Option<&str>) -> anyhow::Result<&Viewport> {
        let name = name.unwrap_or(&self.default_viewport);
        Viewport::find(&self.viewports, name).ok_or_else(|| {
            let known: Vec<_> = self.viewports.iter().map(|v| v.name.as_str()).collect();
            anyhow::anyhow!("Unknown viewport: {}. Use one of: {}", name, known.join(", "))
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
            viewports: Viewport::defaults(),
            default_viewport: default_viewport(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "outDir": "public",
            "viewports": [
                { "name": "Wide", "width": 1600, "height": 900, "breakpoint": 1600 },
                { "name": "Phone", "width": 400, "height": 800, "breakpoint": 600 }
            ],
            "defaultViewport": "Phone"
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.out_dir, "public");
        assert_eq!(config.viewports.len(), 2);
        assert_eq!(config.viewport(None).unwrap().width, 400);
        assert_eq!(config.viewport(Some("Wide")).unwrap().breakpoint, 1600);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.out_dir, "dist");
        assert_eq!(config.viewports, Viewport::defaults());
        assert_eq!(config.viewport(None).unwrap().name, "Desktop");
        assert!(config.viewport(Some("Watch")).is_err());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = serde_json::from_str(r#"{ "outDir": "site" }"#).unwrap();
        assert_eq!(config.out_dir, "site");
        assert_eq!(config.default_viewport, "Desktop");
        assert_eq!(config.viewports.len(), 3);
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::load(dir.path()).unwrap(), Config::default());

        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_NAME),
            r#"{ "outDir": "build" }"#,
        )
        .unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.get_out_dir(dir.path()), dir.path().join("build"));
    }

    #[test]
    fn test_load_rejects_empty_viewports() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_NAME),
            r#"{ "viewports": [] }"#,
        )
        .unwrap();
        assert!(Config::load(dir.path()).is_err());
    }
}
