//! Doctor command implementation.

use crate::LaunchRequest;
use crate::domain::AppError;

pub fn run_doctor(request: LaunchRequest, strict: bool) -> Result<i32, AppError> {
    let options = crate::DoctorOptions { strict };
    let outcome = crate::doctor(request, options)?;

    if outcome.errors == 0 && outcome.warnings == 0 {
        println!("✅ Launcher directory looks ready");
    } else {
        println!("Doctor found {} error(s) and {} warning(s)", outcome.errors, outcome.warnings);
    }

    Ok(outcome.exit_code)
}
