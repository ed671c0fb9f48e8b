use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// One preflight finding about a launcher input (interpreter, file, folder).
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub subject: String,
    pub message: String,
    pub severity: Severity,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN",
        };
        write!(f, "[{}] {}: {}", tag, self.subject, self.message)
    }
}

/// Findings in check order.
#[derive(Debug, Default)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn push(
        &mut self,
        severity: Severity,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.0.push(Diagnostic { subject: subject.into(), message: message.into(), severity });
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.0.iter().filter(|d| d.severity == severity).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }

    /// Print errors first, then warnings, to stderr.
    pub fn emit(&self) {
        for severity in [Severity::Error, Severity::Warning] {
            for diagnostic in self.0.iter().filter(|d| d.severity == severity) {
                eprintln!("{}", diagnostic);
            }
        }
    }
}
