//! 圖片序列改名元件
//!
//! 將 `face_<n>.jpg` 依編號改名為 6 位補零的 `<n>.png`（例如 `000001.png`）

mod main;
mod name_template;

pub use main::{ImageRenamer, RenameEntry, RenameOutcome, RenamePlan, RenameSummary, plan};
pub use name_template::NameTemplate;
