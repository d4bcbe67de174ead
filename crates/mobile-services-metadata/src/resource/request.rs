use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::k8_types::Spec as K8Spec;
use crate::Result;

/// Payload sent to the cluster to create a new custom resource.
///
/// Shape is fixed: `{ apiVersion, kind, metadata: { name }, spec }`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCreationRequest {
    pub api_version: String,
    pub kind: String,
    pub metadata: CreationMetadata,
    pub spec: Value,
}

#[derive(Deserialize, Serialize, Debug, Clone, Eq, PartialEq)]
pub struct CreationMetadata {
    pub name: String,
}

impl ResourceCreationRequest {
    /// build request for typed spec, api version and kind come from its crd
    pub fn new<S, N>(name: N, spec: &S) -> Result<Self>
    where
        S: K8Spec,
        N: Into<String>,
    {
        Ok(Self {
            api_version: S::api_version(),
            kind: S::kind(),
            metadata: CreationMetadata { name: name.into() },
            spec: serde_json::to_value(spec)?,
        })
    }
}
