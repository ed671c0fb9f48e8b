use std::path::Path;

use crate::domain::{LaunchPlan, LaunchSettings};

/// Describe what a launch would do, without running anything.
pub fn execute(settings: &LaunchSettings, launcher_dir: &Path) -> Vec<String> {
    let plan = LaunchPlan::build(settings);
    let mut lines = vec![
        format!("Working directory: {}", launcher_dir.display()),
        format!("Interpreter: {}", settings.interpreter),
        format!("Variant: {}", settings.variant),
    ];

    for (index, step) in plan.steps().iter().enumerate() {
        lines.push(format!("{}. {}: {}", index + 1, step.label, step.invocation));
    }

    if settings.pause {
        lines.push(format!("{}. Wait for a key press", plan.len() + 1));
    }

    lines
}
