//! Binding Configuration Command
//!
//! Shows what an app needs to use its binding to a service

use anyhow::Result;
use clap::Parser;
use comfy_table::Row;
use serde::Serialize;
use serde_json::Value;

use mobile_services_metadata::ConfigItem;

use crate::common::lookup_service;
use crate::common::output::{OutputOpt, render_serde, render_table};

use super::CliContext;

#[derive(Debug, Parser)]
pub struct ConfigOpt {
    /// Service name
    service: String,
    /// Mobile client application
    #[arg(long)]
    app: String,
    #[clap(flatten)]
    output: OutputOpt,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BindingConfiguration {
    configuration: Vec<ConfigItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    configuration_ext: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    documentation_url: Option<String>,
}

impl ConfigOpt {
    pub fn process(&self, ctx: &CliContext) -> Result<()> {
        let service = lookup_service(&ctx.catalog, &self.service)?;

        let config = BindingConfiguration {
            configuration: service.configuration(&self.app),
            configuration_ext: service.configuration_ext_as_json(),
            documentation_url: service.documentation_url(),
        };

        let output = self.output.resolve(ctx.output);
        if !output.is_table() {
            return render_serde(&config, output);
        }

        if config.configuration.is_empty() {
            ctx.notify.info(format!(
                "{} is not bound to {}, nothing to configure",
                self.app, self.service
            ));
        } else {
            render_table(
                ["LABEL", "VALUE"],
                config.configuration.iter().map(|item| {
                    Row::from([item.label.clone(), item.value.clone().unwrap_or_default()])
                }),
            );
        }

        if let Some(url) = &config.documentation_url {
            ctx.notify.help(format!("documentation: {url}"));
        }
        Ok(())
    }
}
