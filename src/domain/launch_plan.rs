//! Ordered external commands making up one launch.

use std::fmt;

use crate::domain::LaunchSettings;

/// What a step does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    UpgradePip,
    InstallPackage,
    InstallManifest,
    RunApp,
}

impl StepKind {
    pub fn is_install(&self) -> bool {
        !matches!(self, StepKind::RunApp)
    }
}

/// A single external command: program plus literal arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { program: program.to_string(), args: args.into_iter().map(Into::into).collect() }
    }
}

impl fmt::Display for Invocation {
    /// Shell-like rendering for progress output; arguments with spaces are quoted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", quote(arg))?;
        }
        Ok(())
    }
}

fn quote(value: &str) -> String {
    if value.is_empty() || value.contains(char::is_whitespace) {
        format!("\"{}\"", value)
    } else {
        value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub kind: StepKind,
    pub label: String,
    pub invocation: Invocation,
}

/// The fixed step sequence: pip self-upgrade, optional explicit package,
/// manifest install, app run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    steps: Vec<Step>,
}

impl LaunchPlan {
    pub fn build(settings: &LaunchSettings) -> Self {
        let python = settings.interpreter.as_str();
        let mut steps = Vec::with_capacity(4);

        steps.push(Step {
            kind: StepKind::UpgradePip,
            label: "Upgrading pip".to_string(),
            invocation: Invocation::new(python, ["-m", "pip", "install", "--upgrade", "pip"]),
        });

        if let Some(package) = &settings.extra_package {
            steps.push(Step {
                kind: StepKind::InstallPackage,
                label: format!("Installing {}", package),
                invocation: Invocation::new(python, ["-m", "pip", "install", package.as_str()]),
            });
        }

        steps.push(Step {
            kind: StepKind::InstallManifest,
            label: format!("Installing dependencies from {}", settings.manifest),
            invocation: Invocation::new(
                python,
                ["-m", "pip", "install", "-r", settings.manifest.as_str()],
            ),
        });

        let mut run_args = vec![
            "-m".to_string(),
            "streamlit".to_string(),
            "run".to_string(),
            settings.app.clone(),
        ];
        run_args.extend(settings.app_argument.iter().cloned());
        steps.push(Step {
            kind: StepKind::RunApp,
            label: "Launching SCADA Sync".to_string(),
            invocation: Invocation::new(python, run_args),
        });

        Self { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
