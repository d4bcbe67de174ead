//!
//! # Upstream Errors
//!
//! Failures returned by the cluster API when a creation request is rejected,
//! translated into messages fit for the user.
//!
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub const MOBILE_CLIENT: &str = "mobileclients";
pub const ALREADY_EXISTS: &str = "AlreadyExists";

/// Kubernetes `Status` document describing a failed request
#[derive(Deserialize, Serialize, Debug, Default, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct UpstreamError {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<UpstreamErrorDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct UpstreamErrorDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl UpstreamError {
    pub fn new<M: Into<String>>(message: M) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    fn kind(&self) -> Option<&str> {
        self.details.as_ref().and_then(|d| d.kind.as_deref())
    }

    fn name(&self) -> Option<&str> {
        self.details.as_ref().and_then(|d| d.name.as_deref())
    }

    /// message for known (kind, reason) pairs, raw message otherwise
    pub fn display_message(&self) -> String {
        match (self.kind(), self.reason.as_deref()) {
            (Some(MOBILE_CLIENT), Some(ALREADY_EXISTS)) => format!(
                "An app named \"{}\" already exists",
                self.name().unwrap_or_default()
            ),
            _ => self.message.clone(),
        }
    }
}

/// distinct display messages, in order of first appearance
pub fn dedup_messages<'a, I>(errors: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a UpstreamError>,
{
    let mut seen = HashSet::new();
    errors
        .into_iter()
        .map(UpstreamError::display_message)
        .filter(|message| seen.insert(message.clone()))
        .collect()
}

#[cfg(test)]
mod test {

    use serde_json::json;

    use super::*;

    #[test]
    fn test_mobile_client_already_exists() {
        let error: UpstreamError = serde_json::from_value(json!({
            "kind": "Status",
            "status": "Failure",
            "message": "mobileclients.mdc.aerogear.org \"myapp\" already exists",
            "reason": "AlreadyExists",
            "details": { "name": "myapp", "group": "mdc.aerogear.org", "kind": "mobileclients" },
            "code": 409
        }))
        .expect("status");

        assert_eq!(error.display_message(), "An app named \"myapp\" already exists");
        assert_eq!(error.code, Some(409));
    }

    #[test]
    fn test_falls_back_to_raw_message() {
        let other_reason = UpstreamError {
            message: "forbidden".to_owned(),
            reason: Some("Forbidden".to_owned()),
            details: Some(UpstreamErrorDetails {
                name: Some("myapp".to_owned()),
                kind: Some(MOBILE_CLIENT.to_owned()),
            }),
            code: Some(403),
        };
        assert_eq!(other_reason.display_message(), "forbidden");

        let other_kind = UpstreamError {
            message: "variant exists".to_owned(),
            reason: Some(ALREADY_EXISTS.to_owned()),
            details: Some(UpstreamErrorDetails {
                name: Some("v".to_owned()),
                kind: Some("androidvariants".to_owned()),
            }),
            code: None,
        };
        assert_eq!(other_kind.display_message(), "variant exists");

        assert_eq!(UpstreamError::new("timeout").display_message(), "timeout");
    }

    #[test]
    fn test_dedup_messages() {
        let errors = vec![
            UpstreamError::new("b"),
            UpstreamError::new("a"),
            UpstreamError::new("b"),
        ];
        assert_eq!(dedup_messages(&errors), vec!["b".to_owned(), "a".to_owned()]);
    }
}
