use crate::domain::StepKind;

/// Exit code reported when a step produced no code of its own.
pub const FALLBACK_EXIT_CODE: i32 = 1;

/// How an external command ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    /// Process exited with a code.
    Exited(i32),
    /// Process was terminated without an exit code (signal, window closed).
    Signalled,
    /// Process could not be started at all.
    SpawnFailed(String),
}

impl StepStatus {
    pub fn success(&self) -> bool {
        matches!(self, StepStatus::Exited(0))
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            StepStatus::Exited(code) => *code,
            StepStatus::Signalled | StepStatus::SpawnFailed(_) => FALLBACK_EXIT_CODE,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            StepStatus::Exited(code) => format!("exit code {}", code),
            StepStatus::Signalled => "terminated by signal".to_string(),
            StepStatus::SpawnFailed(reason) => format!("could not start: {}", reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub kind: StepKind,
    pub label: String,
    pub status: StepStatus,
}

/// Result of a full launch, one outcome per executed step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchReport {
    pub outcomes: Vec<StepOutcome>,
}

impl LaunchReport {
    pub fn push(&mut self, outcome: StepOutcome) {
        self.outcomes.push(outcome);
    }

    /// The last executed step's exit code, mirroring a shell script's status.
    pub fn exit_code(&self) -> i32 {
        self.outcomes.last().map(|o| o.status.exit_code()).unwrap_or(0)
    }

    pub fn failures(&self) -> impl Iterator<Item = &StepOutcome> {
        self.outcomes.iter().filter(|o| !o.status.success())
    }
}
