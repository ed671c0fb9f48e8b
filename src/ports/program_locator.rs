use std::path::PathBuf;

/// Port for finding an executable the way the OS would when spawning it.
pub trait ProgramLocator {
    /// Resolve `program` to a path, searching `PATH` for bare names.
    fn locate(&self, program: &str) -> Option<PathBuf>;
}
