//!
//! # Variants
//!
//! Kind specific specializations of [`CustomResource`]. Dispatch is a closed
//! set keyed by the bindable kind of a service, with [`VariantClass::Generic`]
//! as fallback for kinds nobody knows about.
//!
pub mod push;
pub mod generic;

use std::fmt;

use crate::resource::{CustomResource, ConfigItem, ResourceCreationRequest};
use crate::form::{BindingForm, FormData};
use crate::service::MobileService;
use crate::Result;

use self::push::PushVariantKind;
use self::generic::GenericKind;

/// Input to a variant's binding form builder
#[derive(Debug, Clone, Copy)]
pub struct BindFormParams<'a> {
    pub service: &'a MobileService,
    pub app_name: &'a str,
}

/// Operations each variant implements, both on its instances and on the kind itself
pub trait VariantCapabilities: Send + Sync {
    /// name of the bindable kind handled by this variant
    fn name(&self) -> &'static str;

    fn is_ready(&self, resource: &CustomResource) -> bool {
        resource.status_reports_ready()
    }

    fn is_in_progress(&self, resource: &CustomResource) -> bool {
        !resource.status_reports_ready()
    }

    fn platform<'a>(&self, _resource: &'a CustomResource) -> Option<&'a str> {
        None
    }

    fn configuration(&self, _resource: &CustomResource, _service_host: &str) -> Vec<ConfigItem> {
        vec![]
    }

    /// schema and rules for binding `params.app_name`; must be pure
    fn bind_form(&self, params: BindFormParams<'_>) -> Result<BindingForm>;

    /// creation request for validated form data, `None` when no platform is selected
    fn new_instance(&self, form: &FormData) -> Result<Option<ResourceCreationRequest>>;

    fn documentation_url(&self) -> Option<&'static str>;
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum VariantClass {
    PushVariant,
    Generic,
}

impl VariantClass {
    /// resolve kind name, case insensitive
    pub fn resolve(kind: &str) -> Option<Self> {
        PushVariantKind::ALIASES
            .iter()
            .any(|alias| alias.eq_ignore_ascii_case(kind))
            .then_some(Self::PushVariant)
    }

    pub fn capabilities(&self) -> &'static dyn VariantCapabilities {
        match self {
            Self::PushVariant => &PushVariantKind,
            Self::Generic => &GenericKind,
        }
    }

    pub fn is_generic(&self) -> bool {
        *self == Self::Generic
    }

    pub fn bind_form(&self, params: BindFormParams<'_>) -> Result<BindingForm> {
        self.capabilities().bind_form(params)
    }

    pub fn new_instance(&self, form: &FormData) -> Result<Option<ResourceCreationRequest>> {
        self.capabilities().new_instance(form)
    }

    pub fn documentation_url(&self) -> Option<&'static str> {
        self.capabilities().documentation_url()
    }
}

impl fmt::Display for VariantClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.capabilities().name())
    }
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(VariantClass::resolve("PushVariant"), Some(VariantClass::PushVariant));
        assert_eq!(VariantClass::resolve("push"), Some(VariantClass::PushVariant));
        assert_eq!(VariantClass::resolve("PUSH"), Some(VariantClass::PushVariant));
        assert_eq!(VariantClass::resolve("DataSync"), None);
        assert_eq!(VariantClass::resolve(""), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(VariantClass::PushVariant.to_string(), "PushVariant");
        assert_eq!(VariantClass::Generic.to_string(), "Generic");
    }
}
