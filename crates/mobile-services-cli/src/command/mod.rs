pub mod bind;
pub mod config;
pub mod explain_error;
pub mod form;
pub mod list;
pub mod settings;
pub mod status;

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use tracing::debug;

use mobile_services_metadata::catalog::{LoadDocument, ServiceCatalog};

use crate::common::notify::Notify;
use crate::common::output::OutputType;
use crate::common::settings::Settings;

/// What commands working on the catalog get handed
#[derive(Debug)]
pub struct CliContext {
    pub catalog: ServiceCatalog,
    pub output: OutputType,
    pub notify: Notify,
}

impl CliContext {
    /// catalog flag wins over the one stored in settings
    pub fn load(catalog: Option<PathBuf>, settings: &Settings, notify: Notify) -> Result<Self> {
        let path = catalog.or_else(|| settings.catalog.clone()).ok_or_else(|| {
            anyhow!("No catalog configured, use --catalog or `mobsvc settings --default-catalog <path>`")
        })?;
        debug!(?path, "loading catalog");

        let catalog = ServiceCatalog::load_from(&path)
            .map_err(|err| anyhow!("Failed to load catalog {}: {err}", path.display()))?;

        Ok(Self {
            catalog,
            output: settings.output(),
            notify,
        })
    }
}
