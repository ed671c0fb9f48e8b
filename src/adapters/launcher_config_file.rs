use std::fs;
use std::path::Path;

use crate::domain::{AppError, LAUNCHER_CONFIG_FILE, LauncherConfig, parse_launcher_config};

/// Read `launcher.toml` from `dir`; a missing file yields the defaults.
pub fn read_launcher_config(dir: &Path) -> Result<LauncherConfig, AppError> {
    let path = dir.join(LAUNCHER_CONFIG_FILE);
    if !path.is_file() {
        return Ok(LauncherConfig::default());
    }

    let content = fs::read_to_string(&path)?;
    parse_launcher_config(&content)
}
