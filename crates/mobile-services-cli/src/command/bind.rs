//! Bind Command
//!
//! Validates form data and prints the custom resource that binds the app

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;
use serde_json::json;
use tracing::debug;

use mobile_services_metadata::FormData;
use mobile_services_metadata::catalog::LoadDocument;
use mobile_services_metadata::k8_types::ObjectMeta;

use crate::common::lookup_service;
use crate::common::output::{OutputOpt, OutputType, render_serde};

use super::CliContext;

#[derive(Debug, Parser)]
pub struct BindOpt {
    /// Service name
    service: String,
    /// Mobile client application
    #[arg(long)]
    app: String,
    /// Name of the owning mobile client resource
    #[arg(long)]
    owner: Option<String>,
    /// Uid of the owning mobile client resource
    #[arg(long)]
    owner_uid: String,
    /// Form data document, json or yaml
    #[arg(long)]
    data: PathBuf,
    #[clap(flatten)]
    output: OutputOpt,
}

impl BindOpt {
    pub fn process(&self, ctx: &CliContext) -> Result<()> {
        let service = lookup_service(&ctx.catalog, &self.service)?;
        let owner_name = self.owner.as_deref().unwrap_or(&self.app);

        if !service.can_start_binding(Some(owner_name)) {
            if let Some(operation) = service.binding_operation() {
                ctx.notify.info(format!("current operation: {operation}"));
            }
            return Err(anyhow!(
                "A binding operation for {owner_name} on {} is already in progress",
                self.service
            ));
        }

        let form_data = FormData::load_from(&self.data)
            .map_err(|err| anyhow!("Failed to load form data {}: {err}", self.data.display()))?;
        debug!(?form_data, "loaded form data");

        let failures = service.binding_form(&self.app)?.validate(&form_data);
        if !failures.is_empty() {
            for failure in &failures {
                ctx.notify
                    .error(format!("{}: {}", failure.field, failure.message));
            }
            return Err(anyhow!("Form data is not valid ({} errors)", failures.len()));
        }

        let owner: ObjectMeta = serde_json::from_value(json!({
            "name": owner_name,
            "uid": self.owner_uid,
        }))?;

        let Some(request) = service.new_custom_resource(&form_data, &owner)? else {
            ctx.notify
                .warn("No platform selected, nothing to create");
            return Ok(());
        };

        // requests are always machine readable
        let output = match self.output.resolve(OutputType::json) {
            OutputType::table => OutputType::json,
            other => other,
        };
        render_serde(&request, output)?;
        ctx.notify.done(format!(
            "{} {} ready to be created",
            request.kind, request.metadata.name
        ));
        Ok(())
    }
}
