//! Launch settings loading from the launcher directory and environment.

use std::env;
use std::path::{Path, PathBuf};

use crate::adapters::read_launcher_config;
use crate::domain::{AppError, LaunchOverrides, LaunchSettings};

/// Environment variable overriding the interpreter.
pub const PYTHON_ENV: &str = "SCADA_SYNC_PYTHON";

/// Environment variable overriding the launcher directory.
pub const ROOT_ENV: &str = "SCADA_SYNC_ROOT";

/// Resolve settings: command line, then `SCADA_SYNC_PYTHON`, then
/// `launcher.toml` in `dir`, then variant defaults.
pub fn load_settings(
    dir: &Path,
    mut overrides: LaunchOverrides,
) -> Result<LaunchSettings, AppError> {
    if overrides.python.is_none() {
        overrides.python = env::var(PYTHON_ENV).ok().filter(|v| !v.trim().is_empty());
    }

    let config = read_launcher_config(dir)?;
    LaunchSettings::resolve(&config, &overrides)
}

/// Launcher directory override from the command line or `SCADA_SYNC_ROOT`.
pub fn root_override(cli_root: Option<PathBuf>) -> Option<PathBuf> {
    cli_root.or_else(|| env::var_os(ROOT_ENV).filter(|v| !v.is_empty()).map(PathBuf::from))
}
