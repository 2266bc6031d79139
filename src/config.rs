use crate::storage::{DATA_FILE, LocalStorage};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Where the task file lives; defaults to the platform data dir.
    pub data_dir: Option<PathBuf>,
    /// Show creation dates next to task titles.
    #[serde(default)]
    pub show_created: bool,
}

impl Config {
    fn path() -> Option<PathBuf> {
        ProjectDirs::from("com", "ticked", "ticked")
            .map(|proj| proj.config_dir().join("config.toml"))
    }

    /// A missing file means defaults; a file that fails to parse is an
    /// error the caller should see.
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::path()
            && path.exists()
        {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let cfg = toml::from_str(&content)
                .with_context(|| format!("invalid config at {}", path.display()))?;
            return Ok(cfg);
        }
        Ok(Self::default())
    }

    /// Effective location of the task file.
    pub fn data_file(&self) -> Option<PathBuf> {
        if let Some(dir) = &self.data_dir {
            if !dir.exists() {
                let _ = fs::create_dir_all(dir);
            }
            return Some(dir.join(DATA_FILE));
        }
        LocalStorage::default_path()
    }
}
