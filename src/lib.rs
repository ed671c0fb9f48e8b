//! scada-launch: prepare the Python environment and start the SCADA Sync app.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::PathBuf;

use adapters::{
    PathProgramLocator, SystemProcessRunner, TerminalPause, enter_launcher_dir,
    ignore_interrupts, resolve_launcher_dir,
};
use app::{
    AppContext,
    commands::{doctor, launch, plan},
    config,
};
use domain::{LaunchOverrides, LaunchPlan};

pub use app::commands::doctor::{DoctorOptions, DoctorOutcome};
pub use domain::{AppError, LaunchReport, LaunchSettings, StepStatus};

/// Where to launch from and what to override.
#[derive(Debug, Clone, Default)]
pub struct LaunchRequest {
    /// Launcher directory; defaults to `SCADA_SYNC_ROOT`, then the executable's directory.
    pub root: Option<PathBuf>,
    pub overrides: LaunchOverrides,
}

/// Enter the launcher directory, install dependencies and run the app.
///
/// Returns once the app has exited (or was interrupted with Ctrl-C) and the
/// user acknowledged the pause. Step failures are part of the report, not
/// errors.
pub fn launch(request: LaunchRequest) -> Result<LaunchReport, AppError> {
    let dir = resolve_launcher_dir(config::root_override(request.root).as_deref())?;
    enter_launcher_dir(&dir)?;
    println!("📂 Working directory: {}", dir.display());

    let settings = config::load_settings(&dir, request.overrides)?;
    let plan = LaunchPlan::build(&settings);
    let ctx = AppContext::new(SystemProcessRunner::new(), TerminalPause::new());

    if let Err(e) = ignore_interrupts() {
        eprintln!("⚠️  {}; Ctrl-C will close the launcher without pausing", e);
    }

    launch::execute(&ctx, &plan, &dir, settings.pause)
}

/// Describe the launch sequence without running it.
pub fn plan(request: LaunchRequest) -> Result<Vec<String>, AppError> {
    let dir = resolve_launcher_dir(config::root_override(request.root).as_deref())?;
    let settings = config::load_settings(&dir, request.overrides)?;
    Ok(plan::execute(&settings, &dir))
}

/// Check the launcher directory for problems the launch would hit.
pub fn doctor(request: LaunchRequest, options: DoctorOptions) -> Result<DoctorOutcome, AppError> {
    let dir = resolve_launcher_dir(config::root_override(request.root).as_deref())?;
    let settings = config::load_settings(&dir, request.overrides)?;
    doctor::execute(&dir, &settings, &PathProgramLocator::from_env(), options)
}
