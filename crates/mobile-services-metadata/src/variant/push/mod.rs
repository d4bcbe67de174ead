//!
//! # Push Variants
//!
//! UnifiedPush binds an app through one variant resource per platform.
//! The platform of a resource is its kind.
//!
mod k8;
mod form;

pub use k8::*;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::form::{BindingForm, FormData};
use crate::resource::{CustomResource, ConfigItem, ResourceCreationRequest};
use crate::{MobileServiceError, Result};

use super::{BindFormParams, VariantCapabilities};

pub const ANDROID: &str = "Android";
pub const IOS: &str = "iOS";
pub const ANDROID_VARIANT_KIND: &str = "AndroidVariant";
pub const IOS_VARIANT_KIND: &str = "IOSVariant";

const DOCUMENTATION_URL: &str = "https://docs.aerogear.org/external/apb/unifiedpush.html";

#[derive(Debug, Default, Clone, Copy)]
pub struct PushVariantKind;

impl PushVariantKind {
    pub const NAME: &'static str = "PushVariant";
    pub const ALIASES: &'static [&'static str] = &[Self::NAME, "push"];
}

impl VariantCapabilities for PushVariantKind {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    /// push variants count as bound as soon as they exist; only
    /// `is_in_progress` reflects the backend status
    fn is_ready(&self, _resource: &CustomResource) -> bool {
        true
    }

    fn platform<'a>(&self, resource: &'a CustomResource) -> Option<&'a str> {
        Some(resource.kind())
    }

    fn configuration(&self, resource: &CustomResource, service_host: &str) -> Vec<ConfigItem> {
        let push_app_id = resource.spec_str("pushApplicationId");
        vec![
            ConfigItem::string("Push Application Id", push_app_id.map(str::to_owned)),
            ConfigItem::href("UPS Admin Console URL", service_host),
            ConfigItem::href(
                "Push Application",
                format!(
                    "{service_host}/#/app/{}/variants",
                    push_app_id.unwrap_or_default()
                ),
            ),
        ]
    }

    fn bind_form(&self, params: BindFormParams<'_>) -> Result<BindingForm> {
        let bound = params.service.custom_resources_for_app(params.app_name);
        let has_platform = |kind: &str| bound.iter().any(|cr| cr.platform() == Some(kind));

        let has_android = has_platform(ANDROID_VARIANT_KIND);
        let has_ios = has_platform(IOS_VARIANT_KIND);
        debug!(
            app = params.app_name,
            has_android, has_ios, "building push binding form"
        );

        Ok(form::bind_form(params.app_name, has_android, has_ios))
    }

    fn new_instance(&self, form: &FormData) -> Result<Option<ResourceCreationRequest>> {
        let data: PushFormData = serde_json::from_value(Value::Object(form.clone()))
            .map_err(|err| MobileServiceError::invalid_payload(format!("push form data: {err}")))?;

        match data.client_type.as_deref() {
            Some(ANDROID) => {
                let spec = AndroidVariantSpec {
                    description: "UPS Android Variant".to_owned(),
                    server_key: data.platform_config.googlekey,
                    sender_id: String::new(),
                    push_application_id: None,
                };
                let name = format!("{}-android-ups-variant", data.client_id);
                ResourceCreationRequest::new(name, &spec).map(Some)
            }
            Some(IOS) => {
                let spec = IosVariantSpec {
                    description: "UPS iOS Variant".to_owned(),
                    certificate: data.platform_config.cert,
                    passphrase: data.platform_config.passphrase,
                    production: data.platform_config.ios_is_production,
                    push_application_id: None,
                };
                let name = format!("{}-ios-ups-variant", data.client_id);
                ResourceCreationRequest::new(name, &spec).map(Some)
            }
            other => {
                debug!(platform = ?other, "no push platform selected");
                Ok(None)
            }
        }
    }

    fn documentation_url(&self) -> Option<&'static str> {
        Some(DOCUMENTATION_URL)
    }
}

#[derive(Deserialize, Debug, Default)]
struct PushFormData {
    #[serde(rename = "CLIENT_ID", default)]
    client_id: String,
    #[serde(rename = "CLIENT_TYPE", default)]
    client_type: Option<String>,
    #[serde(rename = "platformConfig", default)]
    platform_config: PlatformConfig,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
struct PlatformConfig {
    googlekey: Option<String>,
    cert: Option<String>,
    passphrase: Option<String>,
    ios_is_production: Option<bool>,
}
