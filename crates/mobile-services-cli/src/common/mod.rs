pub mod notify;
pub mod output;
pub mod settings;
pub mod workdir;

use std::path::PathBuf;

use anyhow::{Error, Result, anyhow};

use mobile_services_metadata::MobileService;
use mobile_services_metadata::catalog::ServiceCatalog;

/// Wrapper on `dirs::home_dir` which returns `anyhow::Error` instead of `Option`.
pub(super) fn home_dir() -> Result<PathBuf> {
    if let Some(home_dir) = dirs::home_dir() {
        Ok(home_dir)
    } else {
        Err(Error::msg("Failed to resolve home directory"))
    }
}

/// Builds the view over the named service, listing known names when missing
pub fn lookup_service(catalog: &ServiceCatalog, name: &str) -> Result<MobileService> {
    catalog.mobile_service(name).ok_or_else(|| {
        anyhow!(
            "Service \"{name}\" not found in catalog. Known services: {}",
            catalog.service_names().join(", ")
        )
    })
}
