use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::{Invocation, StepStatus};
use crate::ports::ProcessRunner;

/// Runs commands with `std::process`, sharing the launcher's terminal.
#[derive(Debug, Clone, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, invocation: &Invocation, cwd: &Path) -> StepStatus {
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status();

        match status {
            Ok(status) => match status.code() {
                Some(code) => StepStatus::Exited(code),
                None => StepStatus::Signalled,
            },
            Err(e) => StepStatus::SpawnFailed(format!("{}: {}", invocation.program, e)),
        }
    }
}
