//! マニフェスト解析
//!
//! 1行に1つ、大文字で始まり `.xlsx` で終わるファイル名を含むテキストを
//! 順序付きのファイル名リストへ変換する。

use crate::error::{Error, Result};
use regex::Regex;

lazy_static::lazy_static! {
    // 最左・最長一致（`.` は改行を越えない）
    static ref FILENAME_RE: Regex = Regex::new(r"[A-Z].*\.xlsx").unwrap();
}

/// 1行から最初に一致したファイル名を取り出す
pub fn extract_filename(line: &str) -> Option<&str> {
    FILENAME_RE.find(line).map(|m| m.as_str())
}

/// マニフェスト全体を解析
///
/// 一致しない行が1つでもあれば全体を失敗とし、部分的なリストは返さない。
/// 重複は除去しない。
pub fn parse_manifest(text: &str) -> Result<Vec<String>> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| {
            extract_filename(line)
                .map(str::to_string)
                .ok_or_else(|| Error::NoFilename {
                    line_no: idx + 1,
                    line: line.to_string(),
                })
        })
        .collect()
}
