//! Contract of the `config.json` the SCADA Sync app loads at startup.

use serde_json::Value;

use crate::domain::AppError;

/// File name the app reads from its working directory.
pub const SYNC_CONFIG_FILE: &str = "config.json";

/// Keys the app dereferences while syncing.
pub const REQUIRED_KEYS: [&str; 8] = [
    "SQL_SERVER_NAME",
    "SQL_DB_NAME",
    "SQL_TABLE_NAME",
    "PG_HOST",
    "PG_PORT",
    "PG_USER",
    "PG_DB_NAME",
    "PG_TABLE_NAME",
];

/// Return the required keys that are absent or null in `content`.
pub fn missing_keys(content: &str) -> Result<Vec<&'static str>, AppError> {
    let json: Value = serde_json::from_str(content).map_err(|e| AppError::ParseError {
        what: SYNC_CONFIG_FILE.to_string(),
        details: e.to_string(),
    })?;

    let object = json.as_object().ok_or_else(|| AppError::ParseError {
        what: SYNC_CONFIG_FILE.to_string(),
        details: "top-level value must be an object".to_string(),
    })?;

    Ok(REQUIRED_KEYS
        .iter()
        .copied()
        .filter(|key| object.get(*key).is_none_or(Value::is_null))
        .collect())
}
