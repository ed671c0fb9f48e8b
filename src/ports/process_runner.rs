use std::path::Path;

use crate::domain::{Invocation, StepStatus};

/// Port for running an external command to completion.
pub trait ProcessRunner {
    /// Run `invocation` in `cwd`, blocking until it exits.
    ///
    /// Output goes straight to the user's terminal. A command that cannot be
    /// started is reported as [`StepStatus::SpawnFailed`], never as an error.
    fn run(&self, invocation: &Invocation, cwd: &Path) -> StepStatus;
}
