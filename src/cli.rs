//! 命令列參數

use crate::config::{DEFAULT_SETTINGS_FILE, FailurePolicy, RenameSettings};
use clap::Parser;
use std::path::PathBuf;

/// 將 face_<n>.jpg 依編號改名為 6 位補零的 <n>.png
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// 目標資料夾（預設 images_256）
    pub folder: Option<PathBuf>,

    /// 起始編號
    #[arg(long)]
    pub first: Option<u32>,

    /// 結束編號（含）
    #[arg(long)]
    pub last: Option<u32>,

    /// 來源檔名樣板，例如 face_{index}.jpg
    #[arg(long)]
    pub source_template: Option<String>,

    /// 目的檔名樣板，例如 {index:06}.png
    #[arg(long)]
    pub destination_template: Option<String>,

    /// 改名失敗時回報並繼續，而不是立即中止
    #[arg(long)]
    pub keep_going: bool,

    /// 只輸出結果，不實際改名
    #[arg(long)]
    pub dry_run: bool,

    /// 設定檔路徑
    #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
    pub settings: PathBuf,

    /// 將最終設定寫回設定檔
    #[arg(long)]
    pub save_settings: bool,
}

impl Cli {
    /// 以命令列參數覆寫設定檔內容
    pub fn apply(&self, settings: &mut RenameSettings) {
        if let Some(folder) = &self.folder {
            settings.folder.clone_from(folder);
        }
        if let Some(first) = self.first {
            settings.first_index = first;
        }
        if let Some(last) = self.last {
            settings.last_index = last;
        }
        if let Some(template) = &self.source_template {
            settings.source_template.clone_from(template);
        }
        if let Some(template) = &self.destination_template {
            settings.destination_template.clone_from(template);
        }
        if self.keep_going {
            settings.on_failure = FailurePolicy::Continue;
        }
        if self.dry_run {
            settings.dry_run = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_keeps_settings() {
        let cli = Cli::parse_from(["image_sequence_renamer"]);
        let mut settings = RenameSettings::default();
        cli.apply(&mut settings);
        assert_eq!(settings, RenameSettings::default());
        assert_eq!(cli.settings, PathBuf::from("settings.json"));
    }

    #[test]
    fn test_arguments_override_settings() {
        let cli = Cli::parse_from([
            "image_sequence_renamer",
            "faces",
            "--first",
            "5",
            "--last",
            "9",
            "--destination-template",
            "{index:04}.png",
            "--keep-going",
            "--dry-run",
        ]);
        let mut settings = RenameSettings::default();
        cli.apply(&mut settings);

        assert_eq!(settings.folder, PathBuf::from("faces"));
        assert_eq!(settings.first_index, 5);
        assert_eq!(settings.last_index, 9);
        assert_eq!(settings.source_template, "face_{index}.jpg");
        assert_eq!(settings.destination_template, "{index:04}.png");
        assert_eq!(settings.on_failure, FailurePolicy::Continue);
        assert!(settings.dry_run);
    }

    #[test]
    fn test_flags_do_not_reset_file_values() {
        let cli = Cli::parse_from(["image_sequence_renamer"]);
        let mut settings = RenameSettings {
            on_failure: FailurePolicy::Continue,
            dry_run: true,
            ..RenameSettings::default()
        };
        cli.apply(&mut settings);
        assert_eq!(settings.on_failure, FailurePolicy::Continue);
        assert!(settings.dry_run);
    }
}
