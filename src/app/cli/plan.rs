use crate::LaunchRequest;
use crate::domain::AppError;

pub fn run_plan(request: LaunchRequest) -> Result<(), AppError> {
    for line in crate::plan(request)? {
        println!("{}", line);
    }
    Ok(())
}
