use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

const DEFAULT_FOLDER: &str = "images_256";
const DEFAULT_FIRST_INDEX: u32 = 1;
const DEFAULT_LAST_INDEX: u32 = 24;
const DEFAULT_SOURCE_TEMPLATE: &str = "face_{index}.jpg";
const DEFAULT_DESTINATION_TEMPLATE: &str = "{index:06}.png";
pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

/// 改名失敗時的處理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// 立即中止，後續編號不再處理
    #[default]
    Halt,
    /// 回報失敗後繼續處理下一個編號
    Continue,
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Halt => write!(f, "halt"),
            Self::Continue => write!(f, "continue"),
        }
    }
}

/// 批次改名設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenameSettings {
    pub folder: PathBuf,
    pub first_index: u32,
    pub last_index: u32,
    pub source_template: String,
    pub destination_template: String,
    pub on_failure: FailurePolicy,
    pub dry_run: bool,
}

impl Default for RenameSettings {
    fn default() -> Self {
        Self {
            folder: PathBuf::from(DEFAULT_FOLDER),
            first_index: DEFAULT_FIRST_INDEX,
            last_index: DEFAULT_LAST_INDEX,
            source_template: DEFAULT_SOURCE_TEMPLATE.to_string(),
            destination_template: DEFAULT_DESTINATION_TEMPLATE.to_string(),
            on_failure: FailurePolicy::default(),
            dry_run: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub settings: RenameSettings,
}
