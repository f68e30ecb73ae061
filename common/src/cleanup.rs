//! 古い結果ファイルの選別

use crate::error::{Error, Result};

/// 削除対象とする名前の接頭辞
pub const DEFAULT_RESULT_PREFIX: &str = "result_";

/// 名前が接頭辞で始まるか（大文字小文字を区別、先頭一致のみ）
pub fn is_stale_result(name: &str, prefix: &str) -> bool {
    name.starts_with(prefix)
}

/// 空の接頭辞はすべてに一致してしまうため拒否する
pub fn validate_prefix(prefix: &str) -> Result<()> {
    if prefix.is_empty() {
        return Err(Error::InvalidPattern(
            "削除対象の接頭辞が空です".to_string(),
        ));
    }
    Ok(())
}

/// 一覧から削除対象の名前だけを順序を保って抽出
pub fn select_stale_results<'a, I>(names: I, prefix: &str) -> Result<Vec<&'a str>>
where
    I: IntoIterator<Item = &'a str>,
{
    validate_prefix(prefix)?;

    Ok(names
        .into_iter()
        .filter(|name| is_stale_result(name, prefix))
        .collect())
}
