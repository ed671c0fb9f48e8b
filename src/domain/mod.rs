pub mod error;
pub mod interpreter;
pub mod launch_plan;
pub mod launcher_config;
pub mod outcome;
pub mod settings;
pub mod sync_config;
pub mod variant;

pub use error::AppError;
pub use interpreter::{DEFAULT_INTERPRETER, Interpreter};
pub use launch_plan::{Invocation, LaunchPlan, Step, StepKind};
pub use launcher_config::{LAUNCHER_CONFIG_FILE, LauncherConfig, parse_launcher_config};
pub use outcome::{FALLBACK_EXIT_CODE, LaunchReport, StepOutcome, StepStatus};
pub use settings::{APP_ENTRY, LaunchOverrides, LaunchSettings, MANIFEST_FILE};
pub use sync_config::{REQUIRED_KEYS, SYNC_CONFIG_FILE};
pub use variant::{BACKUP_DIR, ODBC_PACKAGE, Variant};
