//! Ctrl-C handling for the launcher process.

use crate::domain::AppError;

/// Swallow interrupts in the launcher so it outlives the step being stopped.
///
/// Children are unaffected: a caught signal reverts to its default action on
/// exec (and every console process receives CTRL_C_EVENT on Windows), so the
/// running step still ends and control returns to the pause.
pub fn ignore_interrupts() -> Result<(), AppError> {
    ctrlc::set_handler(|| {}).map_err(|e| AppError::Interrupt(e.to_string()))
}
