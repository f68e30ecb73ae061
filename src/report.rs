//! 実行レポート
//!
//! どのペアまで処理したかを記録し、`--report` 指定時にJSONで保存する。
//! 途中で中断した場合も、そこまでの記録を残す。

use crate::error::Result;
use crate::runner::ToolOutcome;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// 1ペア分の記録
#[derive(Debug, Clone, Serialize)]
pub struct PairRecord {
    pub index: usize,
    pub first: String,
    pub second: String,
    pub outcome: ToolOutcome,
    pub finished_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub started_at: String,
    pub finished_at: Option<String>,
    pub manifest: PathBuf,
    pub removed: Vec<PathBuf>,
    pub entries: Vec<String>,
    pub pairs: Vec<PairRecord>,
    /// 中断時のエラーメッセージ
    pub aborted: Option<String>,
}

fn now() -> String {
    chrono::Local::now().to_rfc3339()
}

impl RunReport {
    pub fn new(manifest: &Path) -> Self {
        Self {
            started_at: now(),
            finished_at: None,
            manifest: manifest.to_path_buf(),
            removed: Vec::new(),
            entries: Vec::new(),
            pairs: Vec::new(),
            aborted: None,
        }
    }

    pub fn record(&mut self, index: usize, first: &str, second: &str, outcome: ToolOutcome) {
        self.pairs.push(PairRecord {
            index,
            first: first.to_string(),
            second: second.to_string(),
            outcome,
            finished_at: now(),
        });
    }

    pub fn failed(&self) -> impl Iterator<Item = &PairRecord> {
        self.pairs.iter().filter(|p| p.outcome.is_failure())
    }

    pub fn finish(&mut self, error: Option<String>) {
        self.finished_at = Some(now());
        self.aborted = error;
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_record_and_failed() {
        let mut report = RunReport::new(Path::new("list_of_lists.txt"));
        report.record(0, "A.xlsx", "B.xlsx", ToolOutcome::Success);
        report.record(1, "A.xlsx", "C.xlsx", ToolOutcome::Failed { code: Some(1) });

        assert_eq!(report.pairs.len(), 2);
        let failed: Vec<_> = report.failed().collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].second, "C.xlsx");
    }

    #[test]
    fn test_save_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");

        let mut report = RunReport::new(Path::new("list_of_lists.txt"));
        report.record(0, "A.xlsx", "B.xlsx", ToolOutcome::Failed { code: Some(2) });
        report.finish(Some("中断".to_string()));
        report.save(&path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["pairs"][0]["first"], "A.xlsx");
        assert_eq!(value["pairs"][0]["outcome"]["failed"]["code"], 2);
        assert_eq!(value["aborted"], "中断");
        assert!(value["finished_at"].is_string());
    }
}
