//! 外部置換検定ツールの実行
//!
//! 統計処理とプロット描画はすべて外部ツール側で行う。ここでは
//! 1ペア分の起動と終了待ちだけを扱う。

mod process;

pub use process::{DryRunRunner, ProcessRunner};

use serde::Serialize;
use std::path::PathBuf;

/// 1回分の起動内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl Invocation {
    /// 表示用のコマンドライン
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.display().to_string())
            .chain(self.args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// ツールの終了結果（記録のみで判定には使わない）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolOutcome {
    Success,
    Failed { code: Option<i32> },
    Skipped,
}

impl ToolOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, ToolOutcome::Failed { .. })
    }
}

/// 外部ツールの起動インターフェース
///
/// 起動自体の失敗だけを `Err` とし、非ゼロ終了は `ToolOutcome::Failed` で返す。
#[allow(async_fn_in_trait)]
pub trait ToolRunner {
    async fn run(&mut self, invocation: &Invocation) -> crate::error::Result<ToolOutcome>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line() {
        let inv = Invocation {
            program: PathBuf::from("./bin/spt"),
            args: vec!["--output".into(), "result.txt".into()],
        };
        assert_eq!(inv.command_line(), "./bin/spt --output result.txt");
    }

    #[test]
    fn test_outcome_is_failure() {
        assert!(ToolOutcome::Failed { code: Some(2) }.is_failure());
        assert!(ToolOutcome::Failed { code: None }.is_failure());
        assert!(!ToolOutcome::Success.is_failure());
        assert!(!ToolOutcome::Skipped.is_failure());
    }
}
