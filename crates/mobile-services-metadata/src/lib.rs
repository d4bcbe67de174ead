//! # Mobile Services Metadata
//!
//! Read model over the custom resources that bind mobile services to mobile
//! client applications, plus the builders that produce new binding requests.

mod error;

pub mod resource;
pub mod variant;
pub mod factory;
pub mod form;
pub mod service;
pub mod catalog;
pub mod upstream;

pub use error::{MobileServiceError, Result};
pub use resource::{CustomResource, ConfigItem, OperationDescriptor, ResourceCreationRequest};
pub use service::{MobileService, ServiceDescriptor, BindingState};
pub use variant::VariantClass;
pub use form::{BindingForm, FormData};

// re-export k8-types crate
pub use k8_types;
