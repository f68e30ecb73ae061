//! マニフェスト（比較対象ファイル名の一覧）の読み込み

use crate::error::{Result, SptPairsError};
use encoding_rs::Encoding;
use spt_pairs_common::parse_manifest;
use std::path::Path;

/// ラベル（`windows-1251`, `cp1251` など）から文字コードを解決
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| SptPairsError::Encoding(format!("不明な文字コード: {}", label)))
}

/// バイト列をデコードしてファイル名リストに変換
pub fn decode_manifest(bytes: &[u8], encoding: &'static Encoding) -> Result<Vec<String>> {
    // BOM判定はしない（指定の文字コードで常に読む）
    let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
    if had_errors {
        eprintln!("⚠ {}で解釈できないバイトを置換しました", encoding.name());
    }
    Ok(parse_manifest(&text)?)
}

/// マニフェストファイルを読み込む
pub fn load_manifest(path: &Path, encoding_label: &str) -> Result<Vec<String>> {
    let encoding = resolve_encoding(encoding_label)?;

    if !path.exists() {
        return Err(SptPairsError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    decode_manifest(&bytes, encoding)
}
