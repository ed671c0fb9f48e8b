mod load_settings;

pub use load_settings::{PYTHON_ENV, ROOT_ENV, load_settings, root_override};
