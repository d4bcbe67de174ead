//! Binding Form Command
//!
//! Prints the form a user fills in to bind an app to a service

use anyhow::Result;
use clap::Parser;
use comfy_table::Row;
use serde_json::Value;

use crate::common::lookup_service;
use crate::common::output::{OutputOpt, render_serde, render_table};

use super::CliContext;

#[derive(Debug, Parser)]
pub struct FormOpt {
    /// Service name
    service: String,
    /// Mobile client application
    #[arg(long)]
    app: String,
    #[clap(flatten)]
    output: OutputOpt,
}

impl FormOpt {
    pub fn process(&self, ctx: &CliContext) -> Result<()> {
        let service = lookup_service(&ctx.catalog, &self.service)?;
        let form = service.binding_form(&self.app)?;

        let output = self.output.resolve(ctx.output);
        if !output.is_table() {
            return render_serde(&form, output);
        }

        let properties = form
            .schema
            .get("properties")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();

        render_table(
            ["PROPERTY", "TITLE", "TYPE", "DEFAULT", "CHOICES"],
            properties.iter().map(|(name, property)| {
                let text = |key: &str| {
                    property
                        .get(key)
                        .map(|value| match value {
                            Value::String(s) => s.clone(),
                            other => other.to_string(),
                        })
                        .unwrap_or_default()
                };
                let choices = form.choices(name).join(", ");
                Row::from([name.clone(), text("title"), text("type"), text("default"), choices])
            }),
        );

        let rule_sets: Vec<&str> = form.validation_rules.keys().map(String::as_str).collect();
        ctx.notify
            .info(format!("validation rule sets: {}", rule_sets.join(", ")));
        Ok(())
    }
}
