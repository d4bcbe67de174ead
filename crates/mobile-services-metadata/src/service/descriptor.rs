use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Static description of a mobile service, as served by the catalog
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceDescriptor {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_class: Option<String>,
    #[serde(rename = "type")]
    pub service_type: String,
    pub host: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation_url: Option<String>,
    /// absent when the service can not be bound
    #[serde(alias = "bindCustomResource", skip_serializing_if = "Option::is_none")]
    pub bind_custom_resource_kind: Option<String>,
    pub configuration: Vec<Value>,
    /// raw json annotations
    pub configuration_ext: Vec<String>,
    pub custom_resources: Vec<Value>,
}

#[cfg(test)]
mod test {

    use serde_json::json;

    use super::*;

    #[test]
    fn test_descriptor_aliases() {
        let descriptor: ServiceDescriptor = serde_json::from_value(json!({
            "name": "ups",
            "type": "push",
            "host": "https://ups.example.com",
            "iconClass": "fa fa-bell",
            "bindCustomResource": "PushVariant"
        }))
        .expect("descriptor");

        assert_eq!(descriptor.service_type, "push");
        assert_eq!(descriptor.icon_class.as_deref(), Some("fa fa-bell"));
        assert_eq!(descriptor.bind_custom_resource_kind.as_deref(), Some("PushVariant"));
        assert!(descriptor.custom_resources.is_empty());
        assert!(descriptor.configuration_ext.is_empty());
    }
}
