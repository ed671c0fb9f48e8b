use crate::ports::{Pause, ProcessRunner};

/// Application context holding the port implementations a launch uses.
pub struct AppContext<P: ProcessRunner, Z: Pause> {
    runner: P,
    pause: Z,
}

impl<P: ProcessRunner, Z: Pause> AppContext<P, Z> {
    /// Create a new application context.
    pub fn new(runner: P, pause: Z) -> Self {
        Self { runner, pause }
    }

    /// Get a reference to the process runner.
    pub fn runner(&self) -> &P {
        &self.runner
    }

    /// Get a reference to the terminal pause.
    pub fn pause(&self) -> &Z {
        &self.pause
    }
}
