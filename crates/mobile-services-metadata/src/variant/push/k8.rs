//!
//! # Push Variant CRDs
//!
//! Interface to the UnifiedPush variant custom resources
//!
use serde::Deserialize;
use serde::Serialize;

use crate::k8_types::{Spec, Status, Crd, CrdNames, DefaultHeader};

pub const PUSH_GROUP: &str = "push.aerogear.org";
pub const V1ALPHA1: &str = "v1alpha1";

const ANDROID_VARIANT_API: Crd = Crd {
    group: PUSH_GROUP,
    version: V1ALPHA1,
    names: CrdNames {
        kind: "AndroidVariant",
        plural: "androidvariants",
        singular: "androidvariant",
    },
};

const IOS_VARIANT_API: Crd = Crd {
    group: PUSH_GROUP,
    version: V1ALPHA1,
    names: CrdNames {
        kind: "IOSVariant",
        plural: "iosvariants",
        singular: "iosvariant",
    },
};

impl Spec for AndroidVariantSpec {
    type Status = PushVariantStatus;
    type Header = DefaultHeader;
    fn metadata() -> &'static Crd {
        &ANDROID_VARIANT_API
    }
}

impl Spec for IosVariantSpec {
    type Status = PushVariantStatus;
    type Header = DefaultHeader;
    fn metadata() -> &'static Crd {
        &IOS_VARIANT_API
    }
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AndroidVariantSpec {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_key: Option<String>,
    pub sender_id: String,
    /// assigned by the backend
    pub push_application_id: Option<String>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct IosVariantSpec {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passphrase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production: Option<bool>,
    /// assigned by the backend
    pub push_application_id: Option<String>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PushVariantStatus {
    pub ready: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Status for PushVariantStatus {}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn test_crd_identity() {
        assert_eq!(AndroidVariantSpec::api_version(), "push.aerogear.org/v1alpha1");
        assert_eq!(AndroidVariantSpec::kind(), "AndroidVariant");
        assert_eq!(IosVariantSpec::api_version(), "push.aerogear.org/v1alpha1");
        assert_eq!(IosVariantSpec::kind(), "IOSVariant");
    }
}
