//! Run the launch plan step by step, then hold the terminal open.

use std::path::Path;

use chrono::Local;

use crate::app::AppContext;
use crate::domain::{AppError, LaunchPlan, LaunchReport, StepOutcome, StepStatus};
use crate::ports::{Pause, ProcessRunner};

/// Prompt shown before the launcher exits.
pub const PAUSE_PROMPT: &str = "Press any key to continue . . .";

/// Execute every step of `plan` in `working_dir`.
///
/// A failed step never stops the sequence: a broken dependency install is
/// still followed by an attempt to start the app.
pub fn execute<P, Z>(
    ctx: &AppContext<P, Z>,
    plan: &LaunchPlan,
    working_dir: &Path,
    pause: bool,
) -> Result<LaunchReport, AppError>
where
    P: ProcessRunner,
    Z: Pause,
{
    let mut report = LaunchReport::default();
    let total = plan.len();

    for (index, step) in plan.steps().iter().enumerate() {
        println!("[{}] ({}/{}) {}...", timestamp(), index + 1, total, step.label);
        println!("    $ {}", step.invocation);

        let status = ctx.runner().run(&step.invocation, working_dir);
        match &status {
            status if status.success() => println!("✅ {}: done", step.label),
            StepStatus::SpawnFailed(reason) => eprintln!("❌ {}: {}", step.label, reason),
            other if step.kind.is_install() => {
                eprintln!("⚠️  {} failed ({}), continuing", step.label, other.describe())
            }
            other => eprintln!("⚠️  {} stopped ({})", step.label, other.describe()),
        }

        report.push(StepOutcome { kind: step.kind, label: step.label.clone(), status });
    }

    let failed: Vec<&str> = report.failures().map(|o| o.label.as_str()).collect();
    if !failed.is_empty() {
        eprintln!("⚠️  {} of {} steps did not succeed: {}", failed.len(), total, failed.join(", "));
    }

    if pause {
        ctx.pause().wait(PAUSE_PROMPT)?;
    }

    Ok(report)
}

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
