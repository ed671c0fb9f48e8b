use std::fmt;

/// Backup folder forwarded to the app by the `backup` variant.
pub const BACKUP_DIR: &str =
    r"C:\Program Files (x86)\Microsoft SQL Server\MSSQL12.SQLEXPRESS\MSSQL\Backup";

/// ODBC driver package installed explicitly by the `backup` variant.
pub const ODBC_PACKAGE: &str = "pyodbc";

/// The two shipped launcher flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Manifest install only, app started without arguments.
    #[default]
    Plain,
    /// Installs `pyodbc` explicitly and forwards the SQL Server backup folder.
    Backup,
}

impl Variant {
    /// All variants in order.
    pub const ALL: [Variant; 2] = [Variant::Plain, Variant::Backup];

    /// Name used in `launcher.toml` and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Plain => "plain",
            Variant::Backup => "backup",
        }
    }

    /// Parse a variant from its name.
    pub fn from_name(name: &str) -> Option<Variant> {
        match name.trim().to_lowercase().as_str() {
            "plain" => Some(Variant::Plain),
            "backup" => Some(Variant::Backup),
            _ => None,
        }
    }

    pub fn extra_package(&self) -> Option<&'static str> {
        match self {
            Variant::Plain => None,
            Variant::Backup => Some(ODBC_PACKAGE),
        }
    }

    pub fn app_argument(&self) -> Option<&'static str> {
        match self {
            Variant::Plain => None,
            Variant::Backup => Some(BACKUP_DIR),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
