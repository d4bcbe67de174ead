//!
//! # Custom Resource
//!
//! One live custom resource instance: metadata, spec and the optional status
//! subresource. Kind specific behavior is delegated to the [`VariantClass`]
//! that materialized the resource.
//!
mod status;
mod request;

pub use status::{ResourceStatus, StatusCondition, OperationDescriptor};
pub use request::{ResourceCreationRequest, CreationMetadata};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::k8_types::{ObjectMeta, OwnerReferences};
use crate::variant::VariantClass;
use crate::Result;

/// label that ties a resource to a mobile client application
pub const APP_LABEL: &str = "app";

#[derive(Deserialize, Serialize, Default, Debug, Clone)]
#[serde(rename_all = "camelCase", default)]
struct RawCustomResource {
    api_version: String,
    kind: String,
    metadata: ObjectMeta,
    spec: Value,
    status: Option<ResourceStatus>,
}

/// Custom resource materialized from a raw payload.
///
/// `is_ready`, `is_in_progress` and `is_failed` are evaluated independently
/// and are not mutually exclusive: a push variant is always ready, even while
/// in progress. Callers that need a single state should query in the order
/// failed, in progress, ready.
#[derive(Debug, Clone)]
pub struct CustomResource {
    variant: VariantClass,
    api_version: String,
    kind: String,
    metadata: ObjectMeta,
    spec: Value,
    status: Option<ResourceStatus>,
}

impl CustomResource {
    /// materialize from raw json payload
    pub fn from_value(variant: VariantClass, raw: Value) -> Result<Self> {
        if !raw.is_object() {
            return Err(crate::MobileServiceError::invalid_payload(format!(
                "custom resource must be an object, got: {raw}"
            )));
        }

        let raw: RawCustomResource = serde_json::from_value(raw)?;
        Ok(Self {
            variant,
            api_version: raw.api_version,
            kind: raw.kind,
            metadata: raw.metadata,
            spec: raw.spec,
            status: raw.status,
        })
    }

    pub fn variant(&self) -> VariantClass {
        self.variant
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// string field of the resource spec
    pub fn spec_str(&self, field: &str) -> Option<&str> {
        self.spec.get(field).and_then(Value::as_str)
    }

    pub fn status(&self) -> Option<&ResourceStatus> {
        self.status.as_ref()
    }

    /// status exists and reports ready
    pub fn status_reports_ready(&self) -> bool {
        self.status.as_ref().is_some_and(|status| status.ready)
    }

    /// resource can be used as a completed binding
    pub fn is_ready(&self) -> bool {
        self.variant.capabilities().is_ready(self)
    }

    /// backend has not reconciled the resource yet, or reports it not ready
    pub fn is_in_progress(&self) -> bool {
        self.variant.capabilities().is_in_progress(self)
    }

    pub fn is_failed(&self) -> bool {
        self.status.as_ref().is_some_and(ResourceStatus::is_failed)
    }

    pub fn has_app_label(&self, app_id: &str) -> bool {
        self.metadata
            .labels
            .get(APP_LABEL)
            .is_some_and(|app| app == app_id)
    }

    pub fn owners(&self) -> &[OwnerReferences] {
        &self.metadata.owner_references
    }

    pub fn is_owned_by(&self, owner_name: &str) -> bool {
        self.owners().iter().any(|owner| owner.name == owner_name)
    }

    /// operation reported by the backend, only while in progress
    pub fn current_operation(&self) -> Option<&OperationDescriptor> {
        if !self.is_in_progress() {
            return None;
        }
        self.status
            .as_ref()
            .and_then(|status| status.current_operation.as_ref())
    }

    /// how to use this binding, derived from spec and service host
    pub fn configuration(&self, service_host: &str) -> Vec<ConfigItem> {
        self.variant.capabilities().configuration(self, service_host)
    }

    pub fn platform(&self) -> Option<&str> {
        self.variant.capabilities().platform(self)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ConfigType {
    String,
    Href,
}

/// One piece of configuration shown to the user for a binding
#[derive(Deserialize, Serialize, Debug, Clone, Eq, PartialEq)]
pub struct ConfigItem {
    #[serde(rename = "type")]
    pub config_type: ConfigType,
    pub label: String,
    pub value: Option<String>,
}

impl ConfigItem {
    pub fn string<L: Into<String>>(label: L, value: Option<String>) -> Self {
        Self {
            config_type: ConfigType::String,
            label: label.into(),
            value,
        }
    }

    pub fn href<L: Into<String>, V: Into<String>>(label: L, value: V) -> Self {
        Self {
            config_type: ConfigType::Href,
            label: label.into(),
            value: Some(value.into()),
        }
    }
}

#[cfg(test)]
mod test {

    use serde_json::json;

    use super::*;

    fn generic(raw: Value) -> CustomResource {
        CustomResource::from_value(VariantClass::Generic, raw).expect("resource")
    }

    #[test]
    fn test_no_status_is_in_progress() {
        let cr = generic(json!({
            "apiVersion": "sync.aerogear.org/v1alpha1",
            "kind": "DataSyncBinding",
            "metadata": { "name": "sync-1", "labels": { "app": "app-1" } },
            "spec": {}
        }));

        assert!(cr.status().is_none());
        assert!(cr.is_in_progress());
        assert!(!cr.is_ready());
        assert!(!cr.is_failed());
        assert!(cr.current_operation().is_none());
    }

    #[test]
    fn test_ready_status() {
        let cr = generic(json!({
            "kind": "DataSyncBinding",
            "metadata": { "name": "sync-1" },
            "status": { "ready": true, "currentOperation": { "type": "Bind", "state": "Done" } }
        }));

        assert!(cr.is_ready());
        assert!(!cr.is_in_progress());
        // only reported while in progress
        assert!(cr.current_operation().is_none());
    }

    #[test]
    fn test_current_operation_while_pending() {
        let cr = generic(json!({
            "kind": "DataSyncBinding",
            "metadata": { "name": "sync-1" },
            "status": { "ready": false, "currentOperation": { "type": "Bind", "state": "InProgress" } }
        }));

        assert!(cr.is_in_progress());
        let op = cr.current_operation().expect("operation");
        assert_eq!(op.operation_type, "Bind");
        assert_eq!(op.state, "InProgress");
    }

    #[test]
    fn test_labels_and_owners() {
        let cr = generic(json!({
            "kind": "DataSyncBinding",
            "metadata": {
                "name": "sync-1",
                "labels": { "app": "app-1" },
                "ownerReferences": [
                    { "apiVersion": "mdc.aerogear.org/v1alpha1", "kind": "MobileClient", "name": "app-1", "uid": "uid-1", "controller": true, "blockOwnerDeletion": false }
                ]
            }
        }));

        assert!(cr.has_app_label("app-1"));
        assert!(!cr.has_app_label("app-2"));
        assert_eq!(cr.owners().len(), 1);
        assert_eq!(cr.owners()[0].uid, "uid-1");
        assert!(cr.is_owned_by("app-1"));
        assert!(!cr.is_owned_by("app-2"));
    }

    #[test]
    fn test_generic_has_no_configuration_or_platform() {
        let cr = generic(json!({ "kind": "Unknown", "metadata": { "name": "x" } }));
        assert!(cr.configuration("https://host").is_empty());
        assert!(cr.platform().is_none());
    }

    #[test]
    fn test_rejects_non_object_payload() {
        assert!(CustomResource::from_value(VariantClass::Generic, json!("nope")).is_err());
        assert!(CustomResource::from_value(VariantClass::Generic, json!([1, 2])).is_err());
    }

    #[test]
    fn test_config_item_serialization() {
        let item = ConfigItem::href("UPS Admin Console URL", "https://ups");
        assert_eq!(
            serde_json::to_value(&item).expect("json"),
            json!({ "type": "href", "label": "UPS Admin Console URL", "value": "https://ups" })
        );
    }
}
