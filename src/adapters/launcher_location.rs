//! Resolving and entering the launcher's own directory.

use std::env;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Directory containing the running executable, or `root_override` when given.
pub fn resolve_launcher_dir(root_override: Option<&Path>) -> Result<PathBuf, AppError> {
    if let Some(root) = root_override {
        return std::path::absolute(root).map_err(|e| AppError::LauncherDirUnresolved(e.to_string()));
    }

    let exe = env::current_exe().map_err(|e| AppError::LauncherDirUnresolved(e.to_string()))?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        AppError::LauncherDirUnresolved(format!("'{}' has no parent directory", exe.display()))
    })
}

/// Make `dir` the process working directory for the rest of the run.
pub fn enter_launcher_dir(dir: &Path) -> Result<(), AppError> {
    env::set_current_dir(dir).map_err(|e| AppError::EnterDirFailed {
        path: dir.display().to_string(),
        details: e.to_string(),
    })
}
