use crate::form::{BindingForm, FormData};
use crate::resource::ResourceCreationRequest;
use crate::{MobileServiceError, Result};

use super::{BindFormParams, VariantCapabilities};

/// Fallback for unrecognized kinds: status driven predicates, no binding support
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericKind;

impl GenericKind {
    pub const NAME: &'static str = "Generic";
}

impl VariantCapabilities for GenericKind {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn bind_form(&self, _params: BindFormParams<'_>) -> Result<BindingForm> {
        Err(MobileServiceError::UnsupportedBinding(Self::NAME.to_owned()))
    }

    fn new_instance(&self, _form: &FormData) -> Result<Option<ResourceCreationRequest>> {
        Err(MobileServiceError::UnsupportedBinding(Self::NAME.to_owned()))
    }

    fn documentation_url(&self) -> Option<&'static str> {
        None
    }
}
