//! The `Workdir` is the directory used by `mobsvc` to store its settings.

use std::path::PathBuf;

use anyhow::Result;

use super::home_dir;

/// Home Directory for the `mobsvc` CLI
pub const MOBSVC_HOME_DIR: &str = ".mobsvc";

/// Retrieves the path to the `~/.mobsvc` directory in the host system
pub fn mobsvc_workdir_path() -> Result<PathBuf> {
    let home = home_dir()?;
    let mobsvc_path = home.join(MOBSVC_HOME_DIR);

    Ok(mobsvc_path)
}
