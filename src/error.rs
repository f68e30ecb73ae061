//! エラー型定義
//!
//! 外部ツールの非ゼロ終了はエラーにしない（`ToolOutcome::Failed` として記録）。

use std::path::PathBuf;
use thiserror::Error;

/// CLI側のエラー型（すべて致命的で、実行を中断する）
#[derive(Error, Debug)]
pub enum SptPairsError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("削除に失敗: {}: {source}", .path.display())]
    Cleanup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("文字コードエラー: {0}")]
    Encoding(String),

    #[error("外部ツールを起動できません: {}: {source}", .program.display())]
    ToolSpawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Common(#[from] spt_pairs_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, SptPairsError>;
