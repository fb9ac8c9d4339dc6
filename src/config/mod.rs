pub mod load;
pub mod save;
pub mod types;

pub use save::save_settings;
pub use types::{Config, DEFAULT_SETTINGS_FILE, FailurePolicy, RenameSettings};
