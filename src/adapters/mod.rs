pub mod interrupt_guard;
pub mod launcher_config_file;
pub mod launcher_location;
pub mod path_locator;
pub mod process_command;
pub mod terminal_pause;

pub use interrupt_guard::ignore_interrupts;
pub use launcher_config_file::read_launcher_config;
pub use launcher_location::{enter_launcher_dir, resolve_launcher_dir};
pub use path_locator::PathProgramLocator;
pub use process_command::SystemProcessRunner;
pub use terminal_pause::TerminalPause;
