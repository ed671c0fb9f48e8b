mod pause;
mod process_runner;
mod program_locator;

pub use pause::Pause;
pub use process_runner::ProcessRunner;
pub use program_locator::ProgramLocator;
