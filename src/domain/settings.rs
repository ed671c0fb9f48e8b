use crate::domain::{AppError, Interpreter, LauncherConfig, Variant};

/// Application entry point started under Streamlit.
pub const APP_ENTRY: &str = "sqlserver_to_postgres_app.py";

/// Dependency manifest installed before launching.
pub const MANIFEST_FILE: &str = "requirements.txt";

/// Values supplied on the command line or through the environment.
///
/// These win over `launcher.toml`.
#[derive(Debug, Clone, Default)]
pub struct LaunchOverrides {
    pub python: Option<String>,
    pub variant: Option<String>,
    pub backup_dir: Option<String>,
    pub no_pause: bool,
}

/// Fully resolved launch settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSettings {
    pub interpreter: Interpreter,
    pub variant: Variant,
    pub app: String,
    pub manifest: String,
    pub extra_package: Option<String>,
    pub app_argument: Option<String>,
    pub pause: bool,
}

impl LaunchSettings {
    /// Built-in settings for a variant.
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            interpreter: Interpreter::default(),
            variant,
            app: APP_ENTRY.to_string(),
            manifest: MANIFEST_FILE.to_string(),
            extra_package: variant.extra_package().map(str::to_string),
            app_argument: variant.app_argument().map(str::to_string),
            pause: true,
        }
    }

    /// Merge overrides over the config file over the variant defaults.
    pub fn resolve(config: &LauncherConfig, overrides: &LaunchOverrides) -> Result<Self, AppError> {
        let variant = match overrides.variant.as_deref().or(config.variant.as_deref()) {
            Some(name) => {
                Variant::from_name(name).ok_or_else(|| AppError::InvalidVariant(name.to_string()))?
            }
            None => Variant::default(),
        };

        let mut settings = Self::for_variant(variant);

        if let Some(python) = overrides.python.as_deref().or(config.python.as_deref()) {
            settings.interpreter = Interpreter::new(python)?;
        }
        if let Some(app) = &config.app {
            settings.app = app.clone();
        }
        if let Some(manifest) = &config.manifest {
            settings.manifest = manifest.clone();
        }
        if let Some(package) = &config.extra_package {
            settings.extra_package = Some(package.clone());
        }
        if let Some(argument) = overrides.backup_dir.as_ref().or(config.app_argument.as_ref()) {
            if argument.is_empty() {
                return Err(AppError::InvalidSetting {
                    field: "backup-dir".to_string(),
                    reason: "path cannot be empty".to_string(),
                });
            }
            settings.app_argument = Some(argument.clone());
        }
        settings.pause = !overrides.no_pause && config.pause.unwrap_or(true);

        Ok(settings)
    }
}
