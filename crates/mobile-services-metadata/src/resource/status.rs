use std::fmt;

use serde::{Deserialize, Serialize};

const FAILED: &str = "Failed";
const CONDITION_TRUE: &str = "True";

/// Status subresource reported by the backend reconciler.
///
/// A resource without status has not been picked up by the backend yet.
#[derive(Deserialize, Serialize, Default, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceStatus {
    pub ready: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<StatusCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_operation: Option<OperationDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ResourceStatus {
    /// terminal error: `Failed` phase or a `Failed` condition that is currently true
    pub fn is_failed(&self) -> bool {
        if self
            .phase
            .as_deref()
            .is_some_and(|phase| phase.eq_ignore_ascii_case(FAILED))
        {
            return true;
        }

        self.conditions
            .iter()
            .any(|condition| condition.condition_type == FAILED && condition.is_true())
    }

    /// message of the failure, if any
    pub fn failure_reason(&self) -> Option<&str> {
        self.conditions
            .iter()
            .find(|condition| condition.condition_type == FAILED && condition.is_true())
            .and_then(|condition| condition.message.as_deref())
            .or(self.message.as_deref())
    }
}

impl fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_failed() {
            write!(f, "Failed")
        } else if self.ready {
            write!(f, "Ready")
        } else {
            write!(f, "Pending")
        }
    }
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct StatusCondition {
    #[serde(rename = "type")]
    pub condition_type: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StatusCondition {
    pub fn is_true(&self) -> bool {
        self.status == CONDITION_TRUE
    }
}

/// Operation the backend is currently performing on a resource
#[derive(Deserialize, Serialize, Default, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct OperationDescriptor {
    #[serde(rename = "type")]
    pub operation_type: String,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl fmt::Display for OperationDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.description {
            Some(description) => write!(f, "{} ({}): {}", self.operation_type, self.state, description),
            None => write!(f, "{} ({})", self.operation_type, self.state),
        }
    }
}

#[cfg(test)]
mod test {

    use serde_json::json;

    use super::*;

    #[test]
    fn test_failed_by_phase() {
        let status: ResourceStatus = serde_json::from_value(json!({
            "ready": false,
            "phase": "failed"
        }))
        .expect("status");
        assert!(status.is_failed());
        assert_eq!(status.to_string(), "Failed");
    }

    #[test]
    fn test_failed_by_condition() {
        let status: ResourceStatus = serde_json::from_value(json!({
            "conditions": [
                { "type": "Failed", "status": "False", "message": "old" },
                { "type": "Failed", "status": "True", "message": "bad certificate" }
            ]
        }))
        .expect("status");
        assert!(status.is_failed());
        assert_eq!(status.failure_reason(), Some("bad certificate"));
    }

    #[test]
    fn test_not_failed() {
        let status: ResourceStatus = serde_json::from_value(json!({
            "ready": true,
            "conditions": [{ "type": "Ready", "status": "True" }]
        }))
        .expect("status");
        assert!(!status.is_failed());
        assert_eq!(status.failure_reason(), None);
        assert_eq!(status.to_string(), "Ready");
    }

    #[test]
    fn test_operation_display() {
        let op = OperationDescriptor {
            operation_type: "Provision".to_owned(),
            state: "InProgress".to_owned(),
            description: Some("creating variant".to_owned()),
        };
        assert_eq!(op.to_string(), "Provision (InProgress): creating variant");
    }
}
