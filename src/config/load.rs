use crate::config::types::{Config, RenameSettings};
use anyhow::{Context, Result, ensure};
use std::fs;
use std::path::Path;

impl Config {
    /// 讀取設定檔；檔案不存在時使用預設值
    pub fn load(path: &Path) -> Result<Self> {
        let settings = Self::load_settings(path)?;
        Ok(Self { settings })
    }

    fn load_settings(path: &Path) -> Result<RenameSettings> {
        if !path.exists() {
            return Ok(RenameSettings::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings from {}", path.display()))
    }
}

impl RenameSettings {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.first_index <= self.last_index,
            "Invalid index range: first index {} is greater than last index {}",
            self.first_index,
            self.last_index
        );
        Ok(())
    }
}
