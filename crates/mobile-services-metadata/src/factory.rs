//!
//! # Custom Resource Factory
//!
//! Resolves which variant governs a service and materializes its resources.
//!
use serde_json::Value;
use tracing::debug;

use crate::resource::CustomResource;
use crate::service::ServiceDescriptor;
use crate::variant::VariantClass;
use crate::Result;

/// variant for the service's bindable kind; unknown or missing kinds get the generic one
pub fn new_custom_resource_class(descriptor: &ServiceDescriptor) -> VariantClass {
    let Some(kind) = descriptor.bind_custom_resource_kind.as_deref() else {
        return VariantClass::Generic;
    };

    VariantClass::resolve(kind).unwrap_or_else(|| {
        debug!(
            service = %descriptor.name,
            kind,
            "unrecognized custom resource kind, using generic resource"
        );
        VariantClass::Generic
    })
}

pub fn new_custom_resource(descriptor: &ServiceDescriptor, raw: Value) -> Result<CustomResource> {
    CustomResource::from_value(new_custom_resource_class(descriptor), raw)
}

#[cfg(test)]
mod test {

    use serde_json::json;

    use super::*;

    fn descriptor(kind: Option<&str>) -> ServiceDescriptor {
        ServiceDescriptor {
            name: "service".to_owned(),
            bind_custom_resource_kind: kind.map(str::to_owned),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_class() {
        assert_eq!(
            new_custom_resource_class(&descriptor(Some("PushVariant"))),
            VariantClass::PushVariant
        );
        assert_eq!(
            new_custom_resource_class(&descriptor(Some("KeycloakRealm"))),
            VariantClass::Generic
        );
        assert_eq!(new_custom_resource_class(&descriptor(None)), VariantClass::Generic);
    }

    #[test]
    fn test_new_custom_resource() {
        let cr = new_custom_resource(
            &descriptor(Some("push")),
            json!({ "kind": "AndroidVariant", "metadata": { "name": "a" } }),
        )
        .expect("resource");
        assert_eq!(cr.variant(), VariantClass::PushVariant);
        assert_eq!(cr.platform(), Some("AndroidVariant"));

        let unknown = new_custom_resource(
            &descriptor(Some("KeycloakRealm")),
            json!({ "kind": "KeycloakRealm", "metadata": { "name": "k" } }),
        )
        .expect("resource");
        assert!(unknown.variant().is_generic());
    }
}
