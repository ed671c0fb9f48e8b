use std::io::{self, IsTerminal};

use dialoguer::console::Term;

use crate::domain::AppError;
use crate::ports::Pause;

/// Prints the prompt and waits for any key on an interactive terminal.
///
/// Keys are read through stderr's terminal, so redirecting stdout to a file
/// still waits. With no terminal on stdin or stderr the prompt is printed
/// and the wait is skipped.
#[derive(Debug, Clone, Default)]
pub struct TerminalPause;

impl TerminalPause {
    pub fn new() -> Self {
        Self
    }
}

impl Pause for TerminalPause {
    fn wait(&self, prompt: &str) -> Result<(), AppError> {
        println!("{}", prompt);

        let keys = Term::stderr();
        if !can_wait(io::stdin().is_terminal(), keys.is_term()) {
            return Ok(());
        }

        keys.read_key().map(|_| ()).map_err(|e| AppError::Terminal(e.to_string()))
    }
}

/// Wait only when a user can type (`stdin`) into the terminal keys are read from.
fn can_wait(stdin_is_terminal: bool, key_stream_is_terminal: bool) -> bool {
    stdin_is_terminal && key_stream_is_terminal
}
