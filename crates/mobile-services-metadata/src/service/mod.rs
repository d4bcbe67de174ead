//!
//! # Mobile Service
//!
//! A service descriptor together with the live custom resources binding it
//! to mobile clients. Rebuilt from every new snapshot, never updated in place.
//!
mod descriptor;

pub use descriptor::ServiceDescriptor;

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::factory;
use crate::form::{BindingForm, FormData};
use crate::k8_types::ObjectMeta;
use crate::resource::{CustomResource, ConfigItem, OperationDescriptor, ResourceCreationRequest};
use crate::variant::{BindFormParams, VariantClass};
use crate::{MobileServiceError, Result};

const PUSH_SERVICE_TYPE: &str = "push";
const APP_UID: &str = "appUid";

/// Binding state of an app, resolved in the order failed, in progress, bound
#[derive(Serialize, Debug, Clone, Copy, Eq, PartialEq)]
pub enum BindingState {
    Failed,
    InProgress,
    Bound,
    Unbound,
}

impl fmt::Display for BindingState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Failed => write!(f, "Failed"),
            Self::InProgress => write!(f, "In Progress"),
            Self::Bound => write!(f, "Bound"),
            Self::Unbound => write!(f, "Unbound"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MobileService {
    descriptor: ServiceDescriptor,
    custom_resource_class: Option<VariantClass>,
    custom_resources: Vec<CustomResource>,
}

impl MobileService {
    /// materialize resources through the factory; payloads that are not
    /// resources are dropped without affecting the rest
    pub fn new(descriptor: ServiceDescriptor) -> Self {
        let custom_resource_class = descriptor
            .bind_custom_resource_kind
            .as_ref()
            .map(|_| factory::new_custom_resource_class(&descriptor));

        let custom_resources = descriptor
            .custom_resources
            .iter()
            .filter_map(
                |raw| match factory::new_custom_resource(&descriptor, raw.clone()) {
                    Ok(cr) => Some(cr),
                    Err(err) => {
                        warn!(service = %descriptor.name, %err, "skipping custom resource");
                        None
                    }
                },
            )
            .collect();

        Self {
            descriptor,
            custom_resource_class,
            custom_resources,
        }
    }

    pub fn descriptor(&self) -> &ServiceDescriptor {
        &self.descriptor
    }

    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    pub fn id(&self) -> &str {
        &self.descriptor.name
    }

    pub fn service_instance_name(&self) -> &str {
        &self.descriptor.name
    }

    pub fn description(&self) -> &str {
        &self.descriptor.description
    }

    pub fn logo_url(&self) -> Option<&str> {
        self.descriptor.icon.as_deref()
    }

    pub fn icon_class(&self) -> Option<&str> {
        self.descriptor.icon_class.as_deref()
    }

    pub fn service_type(&self) -> &str {
        &self.descriptor.service_type
    }

    pub fn host(&self) -> &str {
        &self.descriptor.host
    }

    pub fn is_ups_service(&self) -> bool {
        self.descriptor.service_type == PUSH_SERVICE_TYPE
    }

    pub fn custom_resource_def(&self) -> Option<&str> {
        self.descriptor.bind_custom_resource_kind.as_deref()
    }

    pub fn custom_resource_class(&self) -> Option<VariantClass> {
        self.custom_resource_class
    }

    pub fn is_bindable(&self) -> bool {
        self.custom_resource_class.is_some()
    }

    pub fn custom_resources(&self) -> &[CustomResource] {
        &self.custom_resources
    }

    pub fn configuration_ext(&self) -> &[String] {
        &self.descriptor.configuration_ext
    }

    pub fn is_bound(&self) -> bool {
        self.custom_resources.iter().any(CustomResource::is_ready)
    }

    pub fn is_bound_to_app(&self, app_id: &str) -> bool {
        self.custom_resources
            .iter()
            .any(|cr| cr.is_ready() && cr.has_app_label(app_id))
    }

    /// resources labelled for the app, whatever their state
    pub fn custom_resources_for_app(&self, app_id: &str) -> Vec<&CustomResource> {
        self.custom_resources
            .iter()
            .filter(|cr| cr.has_app_label(app_id))
            .collect()
    }

    /// any resource in progress, restricted to those owned by `owner` when given
    pub fn is_binding_operation_in_progress(&self, owner: Option<&str>) -> bool {
        self.custom_resources.iter().any(|cr| {
            owner.is_none_or(|owner_name| cr.is_owned_by(owner_name)) && cr.is_in_progress()
        })
    }

    /// operation of the first in-progress resource, in supplied order
    pub fn binding_operation(&self) -> Option<&OperationDescriptor> {
        self.custom_resources
            .iter()
            .find(|cr| cr.is_in_progress())
            .and_then(CustomResource::current_operation)
    }

    /// operation of the first in-progress resource labelled for the app,
    /// restricted to those owned by `owner` when given
    pub fn binding_operation_for_app(
        &self,
        app_id: &str,
        owner: Option<&str>,
    ) -> Option<&OperationDescriptor> {
        self.custom_resources
            .iter()
            .filter(|cr| cr.has_app_label(app_id))
            .filter(|cr| owner.is_none_or(|owner_name| cr.is_owned_by(owner_name)))
            .find(|cr| cr.is_in_progress())
            .and_then(CustomResource::current_operation)
    }

    pub fn is_binding_operation_failed(&self) -> bool {
        self.custom_resources.iter().any(CustomResource::is_failed)
    }

    pub fn binding_state(&self, app_id: &str) -> BindingState {
        let resources = self.custom_resources_for_app(app_id);
        if resources.iter().any(|cr| cr.is_failed()) {
            BindingState::Failed
        } else if resources.iter().any(|cr| cr.is_in_progress()) {
            BindingState::InProgress
        } else if resources.iter().any(|cr| cr.is_ready()) {
            BindingState::Bound
        } else {
            BindingState::Unbound
        }
    }

    /// a new binding may be requested only while nothing is in flight
    pub fn can_start_binding(&self, owner: Option<&str>) -> bool {
        self.is_bindable() && !self.is_binding_operation_in_progress(owner)
    }

    /// configuration of every resource of the app, first label wins
    pub fn configuration(&self, app_id: &str) -> Vec<ConfigItem> {
        dedup_by_label(
            self.custom_resources_for_app(app_id)
                .into_iter()
                .flat_map(|cr| cr.configuration(&self.descriptor.host)),
        )
    }

    /// each annotation parsed on its own; malformed ones are skipped
    pub fn configuration_ext_as_json(&self) -> Option<Vec<Value>> {
        let entries = &self.descriptor.configuration_ext;
        if entries.is_empty() {
            return None;
        }

        let items = entries
            .iter()
            .filter_map(|entry| match serde_json::from_str::<Value>(entry) {
                Ok(item) => Some(item),
                Err(err) => {
                    debug!(service = %self.descriptor.name, %err, "malformed configuration extension");
                    None
                }
            })
            .collect();
        Some(items)
    }

    /// service level url when configured, otherwise the variant's own
    pub fn documentation_url(&self) -> Option<String> {
        match self
            .descriptor
            .documentation_url
            .as_deref()
            .filter(|url| !url.is_empty())
        {
            Some(url) if has_scheme(url) => Some(url.to_owned()),
            Some(url) => Some(format!("https://{url}")),
            None => self
                .custom_resource_class
                .and_then(|class| class.documentation_url())
                .map(str::to_owned),
        }
    }

    fn bindable_class(&self) -> Result<VariantClass> {
        self.custom_resource_class
            .ok_or_else(|| MobileServiceError::UnbindableService(self.descriptor.name.clone()))
    }

    pub fn binding_form(&self, app_name: &str) -> Result<BindingForm> {
        self.bindable_class()?.bind_form(BindFormParams {
            service: self,
            app_name,
        })
    }

    /// creation request for `form`, on behalf of `owner`
    pub fn new_custom_resource(
        &self,
        form: &FormData,
        owner: &ObjectMeta,
    ) -> Result<Option<ResourceCreationRequest>> {
        let class = self.bindable_class()?;

        let mut data = form.clone();
        data.entry(APP_UID)
            .or_insert_with(|| Value::String(owner.uid.clone()));
        class.new_instance(&data)
    }

    pub fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(&self.descriptor)?)
    }
}

/// keeps the first item of each label, in order
fn dedup_by_label<I>(items: I) -> Vec<ConfigItem>
where
    I: IntoIterator<Item = ConfigItem>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.label.clone()))
        .collect()
}

fn has_scheme(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}
