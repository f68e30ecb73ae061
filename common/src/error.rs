//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("マニフェスト{line_no}行目にファイル名がありません: {line:?}")]
    NoFilename { line_no: usize, line: String },

    #[error("パターンが不正: {0}")]
    InvalidPattern(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
