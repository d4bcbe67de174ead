//! List Services Command
//!
//! Lists every service in the catalog with its binding summary

use anyhow::Result;
use clap::Parser;
use comfy_table::Row;
use serde::Serialize;

use mobile_services_metadata::MobileService;

use crate::common::output::{OutputOpt, flag, render_serde, render_table};

use super::CliContext;

#[derive(Debug, Parser)]
pub struct ListOpt {
    #[clap(flatten)]
    output: OutputOpt,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ServiceSummary {
    name: String,
    service_type: String,
    bind_kind: Option<String>,
    bound: bool,
    in_progress: bool,
    failed: bool,
}

impl From<&MobileService> for ServiceSummary {
    fn from(service: &MobileService) -> Self {
        Self {
            name: service.name().to_owned(),
            service_type: service.service_type().to_owned(),
            bind_kind: service.custom_resource_def().map(str::to_owned),
            bound: service.is_bound(),
            in_progress: service.is_binding_operation_in_progress(None),
            failed: service.is_binding_operation_failed(),
        }
    }
}

impl ListOpt {
    pub fn process(&self, ctx: &CliContext) -> Result<()> {
        let services = ctx.catalog.mobile_services();
        if services.is_empty() {
            ctx.notify.warn("No services found in catalog");
            return Ok(());
        }

        let summaries: Vec<ServiceSummary> = services.iter().map(ServiceSummary::from).collect();
        let output = self.output.resolve(ctx.output);
        if !output.is_table() {
            return render_serde(&summaries, output);
        }

        render_table(
            ["NAME", "TYPE", "BINDABLE", "BOUND", "IN PROGRESS", "FAILED"],
            summaries.iter().map(|summary| {
                Row::from([
                    summary.name.clone(),
                    summary.service_type.clone(),
                    summary.bind_kind.clone().unwrap_or_else(|| "-".to_owned()),
                    flag(summary.bound).to_owned(),
                    flag(summary.in_progress).to_owned(),
                    flag(summary.failed).to_owned(),
                ])
            }),
        );
        Ok(())
    }
}
