use std::path::Path;

/// 目標資料夾的狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderState {
    Directory,
    Missing,
    NotADirectory,
}

/// 檢查資料夾狀態，只回報不報錯
pub fn inspect_folder(path: &Path) -> FolderState {
    if !path.exists() {
        FolderState::Missing
    } else if !path.is_dir() {
        FolderState::NotADirectory
    } else {
        FolderState::Directory
    }
}
