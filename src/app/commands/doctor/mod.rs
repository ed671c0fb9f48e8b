//! Preflight checks for the launcher directory.
//!
//! The checks are advisory: `launch` never consults them and always runs
//! every step.

mod diagnostics;

use std::fs;
use std::path::Path;

use crate::domain::{AppError, LaunchSettings, SYNC_CONFIG_FILE, sync_config};
use crate::ports::ProgramLocator;

pub use diagnostics::{Diagnostic, Diagnostics, Severity};

#[derive(Debug, Clone, Default)]
pub struct DoctorOptions {
    pub strict: bool,
}

#[derive(Debug, Clone)]
pub struct DoctorOutcome {
    pub errors: usize,
    pub warnings: usize,
    pub exit_code: i32,
}

pub fn execute<L: ProgramLocator>(
    launcher_dir: &Path,
    settings: &LaunchSettings,
    locator: &L,
    options: DoctorOptions,
) -> Result<DoctorOutcome, AppError> {
    let diagnostics = collect(launcher_dir, settings, locator)?;
    diagnostics.emit();

    let errors = diagnostics.count(Severity::Error);
    let warnings = diagnostics.count(Severity::Warning);
    let exit_code = if errors > 0 {
        1
    } else if warnings > 0 && options.strict {
        2
    } else {
        0
    };

    Ok(DoctorOutcome { errors, warnings, exit_code })
}

fn collect<L: ProgramLocator>(
    launcher_dir: &Path,
    settings: &LaunchSettings,
    locator: &L,
) -> Result<Diagnostics, AppError> {
    let mut diagnostics = Diagnostics::default();

    let python = settings.interpreter.as_str();
    if locator.locate(python).is_none() {
        let message = format!("'{}' was not found on PATH", python);
        diagnostics.push(Severity::Error, "interpreter", message);
    }

    if !launcher_dir.join(&settings.manifest).is_file() {
        diagnostics.push(Severity::Error, &settings.manifest, "dependency manifest is missing");
    }

    if !launcher_dir.join(&settings.app).is_file() {
        diagnostics.push(Severity::Error, &settings.app, "application entry point is missing");
    }

    check_sync_config(launcher_dir, &mut diagnostics)?;

    if let Some(argument) = &settings.app_argument {
        if !Path::new(argument).is_dir() {
            let message = format!("'{}' does not exist", argument);
            diagnostics.push(Severity::Warning, "backup folder", message);
        }
    }

    Ok(diagnostics)
}

fn check_sync_config(launcher_dir: &Path, diagnostics: &mut Diagnostics) -> Result<(), AppError> {
    let path = launcher_dir.join(SYNC_CONFIG_FILE);
    if !path.is_file() {
        let message = "not found; the app stops at startup without it";
        diagnostics.push(Severity::Error, SYNC_CONFIG_FILE, message);
        return Ok(());
    }

    let content = fs::read_to_string(&path)?;
    match sync_config::missing_keys(&content) {
        Ok(missing) if missing.is_empty() => {}
        Ok(missing) => {
            let message = format!("missing keys: {}", missing.join(", "));
            diagnostics.push(Severity::Error, SYNC_CONFIG_FILE, message);
        }
        Err(AppError::ParseError { details, .. }) => {
            let message = format!("not valid JSON: {}", details);
            diagnostics.push(Severity::Error, SYNC_CONFIG_FILE, message);
        }
        Err(e) => return Err(e),
    }
    Ok(())
}
