use anyhow::Result;
use clap::{Args, ValueEnum};
use comfy_table::{Row, Table};
use serde::{Deserialize, Serialize};

#[derive(ValueEnum, Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq)]
#[allow(non_camel_case_types)]
pub enum OutputType {
    table,
    yaml,
    json,
}

/// OutputType defaults to table formatting
impl ::std::default::Default for OutputType {
    fn default() -> Self {
        OutputType::table
    }
}

impl OutputType {
    pub fn is_table(&self) -> bool {
        *self == OutputType::table
    }
}

#[derive(Debug, Args, Clone, Default)]
pub struct OutputOpt {
    /// Output format, defaults to the one in settings
    #[arg(short = 'O', long = "output", value_enum)]
    pub format: Option<OutputType>,
}

impl OutputOpt {
    pub fn resolve(&self, fallback: OutputType) -> OutputType {
        self.format.unwrap_or(fallback)
    }
}

/// prints `value` as json or yaml; table output falls back to yaml
pub fn render_serde<T: Serialize>(value: &T, output: OutputType) -> Result<()> {
    let rendered = match output {
        OutputType::json => serde_json::to_string_pretty(value)?,
        OutputType::yaml | OutputType::table => serde_yaml::to_string(value)?,
    };
    println!("{rendered}");
    Ok(())
}

/// renders rows under a header, without borders
pub fn render_table<H, R>(header: H, rows: R)
where
    H: Into<Row>,
    R: IntoIterator<Item = Row>,
{
    let mut table = Table::new();
    table.set_header(header);
    for row in rows {
        table.add_row(row);
    }
    table.load_preset(comfy_table::presets::NOTHING);

    println!("{table}");
}

/// yes / no column value
pub fn flag(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
