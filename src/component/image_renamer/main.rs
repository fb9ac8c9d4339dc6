//! 圖片批次改名主模組
//!
//! 依設定的編號範圍逐一將來源檔改名為目的檔，並逐行回報結果

use super::name_template::NameTemplate;
use crate::config::{FailurePolicy, RenameSettings};
use crate::tools::{FolderState, inspect_folder};
use anyhow::{Context, Result, bail};
use log::{debug, error, info, warn};
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 單一編號對應的來源與目的路徑
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameEntry {
    pub index: u32,
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// 單一編號的處理結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    Renamed {
        source: PathBuf,
        destination: PathBuf,
    },
    NotFound {
        source: PathBuf,
    },
    /// 僅在 `FailurePolicy::Continue` 下產生
    Failed {
        source: PathBuf,
        destination: PathBuf,
        error: String,
    },
}

impl fmt::Display for RenameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Renamed {
                source,
                destination,
            } => write!(f, "{} -> {}", source.display(), destination.display()),
            Self::NotFound { source } => write!(f, "File non trovato: {}", source.display()),
            Self::Failed {
                source,
                destination,
                error,
            } => write!(
                f,
                "Rinomina fallita: {} -> {} ({})",
                source.display(),
                destination.display(),
                error
            ),
        }
    }
}

/// 改名結果統計
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenameSummary {
    pub renamed: usize,
    pub not_found: usize,
    pub failed: usize,
    pub interrupted: bool,
}

impl RenameSummary {
    fn record(&mut self, outcome: &RenameOutcome) {
        match outcome {
            RenameOutcome::Renamed { .. } => self.renamed += 1,
            RenameOutcome::NotFound { .. } => self.not_found += 1,
            RenameOutcome::Failed { .. } => self.failed += 1,
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.failed == 0 && !self.interrupted
    }

    /// 有任何失敗或被中斷時轉為錯誤（程式以非零狀態結束）
    pub fn into_result(self) -> Result<()> {
        if self.interrupted {
            bail!("Interrupted before all indices were processed");
        }
        if self.failed > 0 {
            bail!("{} rename(s) failed", self.failed);
        }
        Ok(())
    }
}

/// 已驗證的改名計畫，路徑在走訪時才逐一產生
#[derive(Debug, Clone)]
pub struct RenamePlan {
    folder: PathBuf,
    first_index: u32,
    last_index: u32,
    source_template: NameTemplate,
    destination_template: NameTemplate,
}

impl RenamePlan {
    /// 範圍內的編號數量
    #[must_use]
    pub fn index_count(&self) -> u64 {
        u64::from(self.last_index - self.first_index) + 1
    }

    pub fn entry(&self, index: u32) -> RenameEntry {
        RenameEntry {
            index,
            source: self.folder.join(self.source_template.render(index)),
            destination: self.folder.join(self.destination_template.render(index)),
        }
    }

    /// 依編號遞增順序產生每個項目
    pub fn entries(&self) -> impl Iterator<Item = RenameEntry> + '_ {
        (self.first_index..=self.last_index).map(|index| self.entry(index))
    }
}

/// 驗證設定並建立改名計畫
///
/// 純函式：不接觸檔案系統。樣板或編號範圍不合法時回傳錯誤。
pub fn plan(settings: &RenameSettings) -> Result<RenamePlan> {
    settings.validate()?;

    let source_template =
        NameTemplate::parse(&settings.source_template).context("Invalid source template")?;
    let destination_template = NameTemplate::parse(&settings.destination_template)
        .context("Invalid destination template")?;

    Ok(RenamePlan {
        folder: settings.folder.clone(),
        first_index: settings.first_index,
        last_index: settings.last_index,
        source_template,
        destination_template,
    })
}

/// 圖片批次改名器
pub struct ImageRenamer {
    settings: RenameSettings,
    shutdown_signal: Arc<AtomicBool>,
}

impl ImageRenamer {
    pub const fn new(settings: RenameSettings, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            settings,
            shutdown_signal,
        }
    }

    /// 依序處理每個編號，結果逐行寫入 `out`
    ///
    /// 在 `FailurePolicy::Halt` 下，第一個改名失敗會直接回傳錯誤，
    /// 之後的編號不再處理也不再輸出。
    pub fn run<W: Write>(&self, out: &mut W) -> Result<RenameSummary> {
        let plan = plan(&self.settings)?;

        match inspect_folder(&self.settings.folder) {
            FolderState::Directory => {}
            FolderState::Missing => warn!(
                "Folder does not exist, every source will be reported missing: {}",
                self.settings.folder.display()
            ),
            FolderState::NotADirectory => warn!(
                "Path is not a directory, every source will be reported missing: {}",
                self.settings.folder.display()
            ),
        }

        info!(
            "Renaming indices {}..={} in {} ({} -> {}, on failure: {}{})",
            self.settings.first_index,
            self.settings.last_index,
            self.settings.folder.display(),
            self.settings.source_template,
            self.settings.destination_template,
            self.settings.on_failure,
            if self.settings.dry_run { ", dry run" } else { "" }
        );

        let mut summary = RenameSummary::default();

        for entry in plan.entries() {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                warn!("Interrupted before index {}, stopping", entry.index);
                summary.interrupted = true;
                break;
            }

            let outcome = match self.rename_one(&entry) {
                Ok(outcome) => outcome,
                Err(e) => {
                    error!(
                        "Failed to rename {} -> {}: {e}",
                        entry.source.display(),
                        entry.destination.display()
                    );
                    match self.settings.on_failure {
                        FailurePolicy::Halt => {
                            return Err(anyhow::Error::new(e).context(format!(
                                "Failed to rename {} -> {}",
                                entry.source.display(),
                                entry.destination.display()
                            )));
                        }
                        FailurePolicy::Continue => RenameOutcome::Failed {
                            source: entry.source.clone(),
                            destination: entry.destination.clone(),
                            error: e.to_string(),
                        },
                    }
                }
            };

            debug!("index {}: {outcome}", entry.index);
            summary.record(&outcome);
            writeln!(out, "{outcome}")?;
        }

        out.flush()?;

        info!(
            "Done: {} renamed, {} not found, {} failed",
            summary.renamed, summary.not_found, summary.failed
        );

        Ok(summary)
    }

    fn rename_one(&self, entry: &RenameEntry) -> io::Result<RenameOutcome> {
        if !entry.source.exists() {
            return Ok(RenameOutcome::NotFound {
                source: entry.source.clone(),
            });
        }

        if !self.settings.dry_run {
            fs::rename(&entry.source, &entry.destination)?;
        }

        Ok(RenameOutcome::Renamed {
            source: entry.source.clone(),
            destination: entry.destination.clone(),
        })
    }
}
