use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::ports::ProgramLocator;

/// Looks programs up on `PATH`, honouring `PATHEXT` on Windows.
#[derive(Debug, Clone)]
pub struct PathProgramLocator {
    path: Option<OsString>,
    extensions: Vec<String>,
}

impl PathProgramLocator {
    pub fn from_env() -> Self {
        Self { path: env::var_os("PATH"), extensions: executable_extensions() }
    }

    pub fn with_path(path: OsString) -> Self {
        Self { path: Some(path), extensions: executable_extensions() }
    }
}

impl ProgramLocator for PathProgramLocator {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        let candidate = Path::new(program);
        if candidate.is_absolute() || candidate.components().count() > 1 {
            return candidate.is_file().then(|| candidate.to_path_buf());
        }

        let path = self.path.as_ref()?;
        env::split_paths(path).find_map(|dir| {
            self.extensions
                .iter()
                .map(|ext| dir.join(format!("{}{}", program, ext)))
                .find(|full| full.is_file())
        })
    }
}

fn executable_extensions() -> Vec<String> {
    let mut extensions = vec![String::new()];
    if cfg!(windows) {
        let pathext = env::var("PATHEXT").unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".to_string());
        extensions.extend(pathext.split(';').filter(|e| !e.is_empty()).map(str::to_lowercase));
    }
    extensions
}
