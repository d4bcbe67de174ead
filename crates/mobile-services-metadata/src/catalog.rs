//!
//! # Service Catalog
//!
//! Snapshot of the known services and their custom resources, as handed
//! over by the data layer in a JSON or YAML document.
//!
use std::fmt::Debug;
use std::fs::read_to_string;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::service::{MobileService, ServiceDescriptor};
use crate::Result;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// `.json` files are json, anything else is read as yaml
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

pub trait LoadDocument {
    fn load_from<T: AsRef<Path>>(path: T) -> Result<Self>
    where
        Self: Sized;
    fn load_str(document: &str, format: DocumentFormat) -> Result<Self>
    where
        Self: Sized;
}

impl<S> LoadDocument for S
where
    S: DeserializeOwned + Debug,
{
    fn load_from<T: AsRef<Path>>(path: T) -> Result<Self> {
        let path_ref = path.as_ref();
        debug!(?path_ref, "loading from");

        let document = read_to_string(path_ref)?;
        Self::load_str(&document, DocumentFormat::from_path(path_ref))
    }

    fn load_str(document: &str, format: DocumentFormat) -> Result<Self> {
        let value = match format {
            DocumentFormat::Json => serde_json::from_str(document)?,
            DocumentFormat::Yaml => serde_yaml::from_str(document)?,
        };
        Ok(value)
    }
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct ServiceCatalog {
    pub services: Vec<ServiceDescriptor>,
}

impl ServiceCatalog {
    pub fn service_names(&self) -> Vec<&str> {
        self.services.iter().map(|s| s.name.as_str()).collect()
    }

    /// fresh view over every service
    pub fn mobile_services(&self) -> Vec<MobileService> {
        self.services.iter().cloned().map(MobileService::new).collect()
    }

    pub fn mobile_service(&self, name: &str) -> Option<MobileService> {
        self.services
            .iter()
            .find(|descriptor| descriptor.name == name)
            .cloned()
            .map(MobileService::new)
    }
}
