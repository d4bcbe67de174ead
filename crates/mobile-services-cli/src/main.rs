mod command;
mod common;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser};

use self::command::CliContext;
use self::command::bind::BindOpt;
use self::command::config::ConfigOpt;
use self::command::explain_error::ExplainErrorOpt;
use self::command::form::FormOpt;
use self::command::list::ListOpt;
use self::command::settings::SettingsOpt;
use self::command::status::StatusOpt;
use self::common::notify::Notify;
use self::common::settings::Settings;

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
    let args = Cli::parse();

    args.process()
}

#[derive(Debug, Args, Clone, Default)]
pub struct GlobalOptions {
    /// Suppress stdout notifications
    #[clap(short = 'q', long, global = true, default_value_t = false)]
    quiet: bool,

    /// Catalog document with services and their custom resources
    #[clap(short = 'c', long, global = true, env = "MOBSVC_CATALOG")]
    catalog: Option<PathBuf>,
}

#[derive(Debug, Parser)]
#[command(
    about = "Mobile Services binding console",
    name = "mobsvc",
    max_term_width = 100
)]
pub struct Cli {
    #[clap(flatten)]
    global_opts: GlobalOptions,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Parser)]
pub enum Command {
    /// List services in the catalog
    #[command(name = "list")]
    List(ListOpt),
    /// Show the binding state of an app
    #[command(name = "status")]
    Status(StatusOpt),
    /// Show the configuration of an app's binding
    #[command(name = "config")]
    Config(ConfigOpt),
    /// Print the binding form of a service
    #[command(name = "form")]
    Form(FormOpt),
    /// Build the custom resource binding an app to a service
    #[command(name = "bind")]
    Bind(BindOpt),
    /// Explain failures returned by the cluster
    #[command(name = "explain-error")]
    ExplainError(ExplainErrorOpt),
    /// Show or update default settings
    #[command(name = "settings")]
    Settings(SettingsOpt),
}

impl Cli {
    fn process(self) -> Result<()> {
        let notify = Notify::new(self.global_opts.quiet);
        let settings = Settings::open()?;

        let catalog = self.global_opts.catalog;

        match self.command {
            Command::List(cmd) => cmd.process(&CliContext::load(catalog, &settings, notify)?),
            Command::Status(cmd) => cmd.process(&CliContext::load(catalog, &settings, notify)?),
            Command::Config(cmd) => cmd.process(&CliContext::load(catalog, &settings, notify)?),
            Command::Form(cmd) => cmd.process(&CliContext::load(catalog, &settings, notify)?),
            Command::Bind(cmd) => cmd.process(&CliContext::load(catalog, &settings, notify)?),
            Command::ExplainError(cmd) => cmd.process(notify),
            Command::Settings(cmd) => cmd.process(settings, notify),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::Command;

    use super::Cli;

    fn parse(command: &str) -> Result<Cli, clap::error::Error> {
        Cli::try_parse_from(command.split_whitespace())
    }

    #[test]
    fn recognizes_quiet_top_level_arg() {
        let args = parse("mobsvc -q list").expect("Should parse command as valid");

        assert!(args.global_opts.quiet);
        assert!(matches!(args.command, Command::List(_)));
    }

    #[test]
    fn recognizes_catalog_after_subcommand() {
        let args = parse("mobsvc status ups --app app-1 --catalog /tmp/catalog.yaml")
            .expect("Should parse command as valid");

        assert_eq!(
            args.global_opts.catalog.as_deref(),
            Some(std::path::Path::new("/tmp/catalog.yaml"))
        );
        assert!(matches!(args.command, Command::Status(_)));
    }

    #[test]
    fn bind_requires_owner_uid_and_data() {
        assert!(parse("mobsvc bind ups --app app-1").is_err());
        assert!(
            parse("mobsvc bind ups --app app-1 --owner-uid uid-1 --data form.json -O yaml").is_ok()
        );
    }

    #[test]
    fn settings_flags_do_not_clash_with_global_catalog() {
        let args = parse("mobsvc settings --default-catalog /srv/catalog.yaml --default-output json")
            .expect("Should parse command as valid");

        assert!(args.global_opts.catalog.is_none());
        assert!(matches!(args.command, Command::Settings(_)));
    }

    #[test]
    fn rejects_unknown_output() {
        assert!(parse("mobsvc list -O xml").is_err());
    }
}
