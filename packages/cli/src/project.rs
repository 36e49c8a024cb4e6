use anyhow::{Context, Result};
use pagewright_model::{Document, ProjectSettings, Theme};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_PROJECT_NAME: &str = "project.json";

/// On-disk project: the document plus its theme and settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectFile {
    pub document: Document,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub settings: ProjectSettings,
}

impl ProjectFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read project {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid project {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
