//! Optional `launcher.toml` placed next to the launcher.

use serde::Deserialize;

use crate::domain::AppError;

/// File name of the launcher configuration.
pub const LAUNCHER_CONFIG_FILE: &str = "launcher.toml";

/// Raw launcher configuration. Every field is optional; absent fields fall
/// back to the selected variant's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LauncherConfig {
    pub python: Option<String>,
    pub variant: Option<String>,
    pub app: Option<String>,
    pub manifest: Option<String>,
    pub extra_package: Option<String>,
    pub app_argument: Option<String>,
    pub pause: Option<bool>,
}

impl LauncherConfig {
    fn validate(&self) -> Result<(), AppError> {
        let fields = [
            ("python", &self.python),
            ("variant", &self.variant),
            ("app", &self.app),
            ("manifest", &self.manifest),
            ("extra_package", &self.extra_package),
            ("app_argument", &self.app_argument),
        ];
        for (field, value) in fields {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(AppError::InvalidSetting {
                    field: field.to_string(),
                    reason: "value cannot be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Parse and validate launcher configuration from TOML content.
pub fn parse_launcher_config(content: &str) -> Result<LauncherConfig, AppError> {
    let config: LauncherConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
