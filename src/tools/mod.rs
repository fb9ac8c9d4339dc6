mod path_validator;

pub use path_validator::{FolderState, inspect_folder};
