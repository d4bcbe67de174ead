//! Binding Status Command
//!
//! Shows whether an app is bound to a service, and what is in flight

use anyhow::Result;
use clap::Parser;
use comfy_table::Row;
use serde::Serialize;

use mobile_services_metadata::{BindingState, CustomResource, MobileService, OperationDescriptor};

use crate::common::lookup_service;
use crate::common::output::{OutputOpt, flag, render_serde, render_table};

use super::CliContext;

#[derive(Debug, Parser)]
pub struct StatusOpt {
    /// Service name
    service: String,
    /// Mobile client application
    #[arg(long)]
    app: String,
    /// Only consider resources owned by this owner when checking operations
    #[arg(long)]
    owner: Option<String>,
    #[clap(flatten)]
    output: OutputOpt,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BindingStatus {
    service: String,
    app: String,
    state: BindingState,
    operation_in_progress: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    current_operation: Option<OperationDescriptor>,
    resources: Vec<ResourceSummary>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResourceSummary {
    name: String,
    api_version: String,
    kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    platform: Option<String>,
    ready: bool,
    in_progress: bool,
    failed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl From<&CustomResource> for ResourceSummary {
    fn from(cr: &CustomResource) -> Self {
        Self {
            name: cr.name().to_owned(),
            api_version: cr.api_version().to_owned(),
            kind: cr.kind().to_owned(),
            platform: cr.platform().map(str::to_owned),
            ready: cr.is_ready(),
            in_progress: cr.is_in_progress(),
            failed: cr.is_failed(),
            reason: cr
                .status()
                .and_then(|status| status.failure_reason())
                .map(str::to_owned),
        }
    }
}

impl BindingStatus {
    /// state of `app` only; operations of other apps are not reported
    fn new(service: &MobileService, app: &str, owner: Option<&str>) -> Self {
        Self {
            service: service.name().to_owned(),
            app: app.to_owned(),
            state: service.binding_state(app),
            operation_in_progress: service.is_binding_operation_in_progress(owner),
            current_operation: service.binding_operation_for_app(app, owner).cloned(),
            resources: service
                .custom_resources_for_app(app)
                .into_iter()
                .map(ResourceSummary::from)
                .collect(),
        }
    }
}

impl StatusOpt {
    pub fn process(&self, ctx: &CliContext) -> Result<()> {
        let service = lookup_service(&ctx.catalog, &self.service)?;
        let status = BindingStatus::new(&service, &self.app, self.owner.as_deref());

        let output = self.output.resolve(ctx.output);
        if !output.is_table() {
            return render_serde(&status, output);
        }

        println!("{} / {}: {}", status.service, status.app, status.state);
        if let Some(operation) = &status.current_operation {
            println!("current operation: {operation}");
        }
        if status.resources.is_empty() {
            ctx.notify.info(format!("No resources bind {} to {}", status.app, status.service));
            return Ok(());
        }

        render_table(
            ["NAME", "KIND", "READY", "IN PROGRESS", "FAILED", "REASON"],
            status.resources.iter().map(|resource| {
                Row::from([
                    resource.name.clone(),
                    resource.kind.clone(),
                    flag(resource.ready).to_owned(),
                    flag(resource.in_progress).to_owned(),
                    flag(resource.failed).to_owned(),
                    resource.reason.clone().unwrap_or_default(),
                ])
            }),
        );
        Ok(())
    }
}
