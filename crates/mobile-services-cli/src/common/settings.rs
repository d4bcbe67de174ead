use std::fs::{create_dir_all, read_to_string, write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::output::OutputType;
use super::workdir::mobsvc_workdir_path;

pub const SETTINGS_TOML_FILENAME: &str = "settings.toml";

/// The `settings.toml` keeps the defaults used when flags are not given.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Catalog document with services and their custom resources
    pub catalog: Option<PathBuf>,
    /// Default output format
    pub output: Option<OutputType>,
}

impl Settings {
    /// Opens the `settings.toml` file in the workdir.
    ///
    /// If the file doesn't exist, it will be created.
    pub fn open() -> Result<Self> {
        Self::open_from(&Self::settings_file_path()?)
    }

    pub fn open_from(settings_path: &Path) -> Result<Self> {
        if !settings_path.exists() {
            let initial = Self::default();
            initial.save_to(settings_path)?;
            tracing::debug!(?settings_path, "Created settings file with success");
            return Ok(initial);
        }

        let contents = read_to_string(settings_path)?;
        let settings: Settings = toml::from_str(&contents)?;

        Ok(settings)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::settings_file_path()?)
    }

    /// Saves the settings file, overwriting the previous version
    pub fn save_to(&self, settings_path: &Path) -> Result<()> {
        if let Some(parent) = settings_path.parent() {
            create_dir_all(parent)?;
        }
        let settings_str = toml::to_string(&self)?;

        write(settings_path, settings_str)?;

        Ok(())
    }

    pub fn output(&self) -> OutputType {
        self.output.unwrap_or_default()
    }

    /// Retrieves the path to the `settings.toml` file for this host
    pub fn settings_file_path() -> Result<PathBuf> {
        let mobsvc_path = mobsvc_workdir_path()?;
        let settings_path = mobsvc_path.join(SETTINGS_TOML_FILENAME);

        Ok(settings_path)
    }
}
