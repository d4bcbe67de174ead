//! Explain Error Command
//!
//! Turns failure documents returned by the cluster into user facing messages

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;
use serde::Deserialize;

use mobile_services_metadata::catalog::LoadDocument;
use mobile_services_metadata::upstream::{UpstreamError, dedup_messages};

use crate::common::notify::Notify;

#[derive(Debug, Parser)]
pub struct ExplainErrorOpt {
    /// Document with one failure or a list of them
    file: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Failures {
    Many(Vec<UpstreamError>),
    One(UpstreamError),
}

impl ExplainErrorOpt {
    pub fn process(&self, notify: Notify) -> Result<()> {
        let failures = Failures::load_from(&self.file)
            .map_err(|err| anyhow!("Failed to load {}: {err}", self.file.display()))?;

        let errors = match failures {
            Failures::Many(errors) => errors,
            Failures::One(error) => vec![error],
        };

        for message in dedup_messages(&errors) {
            notify.error(message);
        }
        Ok(())
    }
}
