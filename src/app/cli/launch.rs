use crate::LaunchRequest;
use crate::domain::AppError;

pub fn run_launch(request: LaunchRequest) -> Result<i32, AppError> {
    let report = crate::launch(request)?;
    Ok(report.exit_code())
}
