use crate::domain::AppError;

/// Port for holding the terminal open until the user acknowledges.
pub trait Pause {
    /// Show `prompt` and wait for a key press.
    fn wait(&self, prompt: &str) -> Result<(), AppError>;
}
