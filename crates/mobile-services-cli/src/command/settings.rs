//! Settings Command
//!
//! Shows and updates the defaults stored in `settings.toml`

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::common::notify::Notify;
use crate::common::output::{OutputType, render_serde};
use crate::common::settings::Settings;

#[derive(Debug, Parser)]
pub struct SettingsOpt {
    /// Catalog document used when `--catalog` is not given
    #[arg(long)]
    default_catalog: Option<PathBuf>,
    /// Output format used when `--output` is not given
    #[arg(long, value_enum)]
    default_output: Option<OutputType>,
}

impl SettingsOpt {
    pub fn process(&self, mut settings: Settings, notify: Notify) -> Result<()> {
        if self.default_catalog.is_none() && self.default_output.is_none() {
            return render_serde(&settings, OutputType::yaml);
        }

        if let Some(catalog) = &self.default_catalog {
            settings.catalog = Some(catalog.clone());
        }
        if let Some(output) = self.default_output {
            settings.output = Some(output);
        }
        settings.save()?;

        notify.done(format!(
            "Settings saved to {}",
            Settings::settings_file_path()?.display()
        ));
        Ok(())
    }
}
