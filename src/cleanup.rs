//! 前回実行の結果ファイルを削除
//!
//! 作業ディレクトリ直下のみを対象にし、再帰はしない。

use crate::error::{Result, SptPairsError};
use indicatif::{ProgressBar, ProgressStyle};
use spt_pairs_common::{is_stale_result, validate_prefix};
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 削除対象のパスを列挙（名前順）
///
/// 判定には表示用の名前を使うが、返すのはディスク上の実際のパス。
pub fn find_stale_results(dir: &Path, prefix: &str) -> Result<Vec<PathBuf>> {
    validate_prefix(prefix)?;
    if !dir.is_dir() {
        return Err(SptPairsError::FolderNotFound(dir.display().to_string()));
    }

    let mut targets = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1) // 直下のみ
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| SptPairsError::Io(e.into()))?;
        if is_stale_result(&entry.file_name().to_string_lossy(), prefix) {
            targets.push(entry.into_path());
        }
    }

    Ok(targets)
}

/// 1件削除（シンボリックリンクはリンク自体を消す）
fn remove_entry(path: &Path) -> std::io::Result<()> {
    if std::fs::symlink_metadata(path)?.file_type().is_dir() {
        std::fs::remove_dir(path)
    } else {
        std::fs::remove_file(path)
    }
}

/// 削除対象をすべて削除し、削除したパスを返す
///
/// ディレクトリは空の場合のみ削除できる。1件でも失敗すれば中断する。
pub fn remove_stale_results(dir: &Path, prefix: &str, verbose: bool) -> Result<Vec<PathBuf>> {
    let targets = find_stale_results(dir, prefix)?;

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("  {bar:30} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    for path in &targets {
        remove_entry(path).map_err(|source| SptPairsError::Cleanup {
            path: path.clone(),
            source,
        })?;

        if verbose {
            pb.suspend(|| println!("  削除: {}", path.display()));
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(targets)
}

/// `clean` サブコマンド本体
pub fn clean<W: Write>(
    dir: &Path,
    prefix: &str,
    dry_run: bool,
    verbose: bool,
    out: &mut W,
) -> Result<Vec<PathBuf>> {
    if dry_run {
        let found = find_stale_results(dir, prefix)?;
        for path in &found {
            writeln!(out, "  削除対象: {}", path.display())?;
        }
        writeln!(out, "{}件", found.len())?;
        Ok(found)
    } else {
        let removed = remove_stale_results(dir, prefix, verbose)?;
        writeln!(out, "✔ {}件を削除しました", removed.len())?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_find_stale_results_direct_entries_only() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("result_b.txt"), "").unwrap();
        fs::write(dir.path().join("result_a.txt"), "").unwrap();
        fs::write(dir.path().join("result.txt"), "").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("result_x.txt"), "").unwrap();

        let found = find_stale_results(dir.path(), "result_").unwrap();
        assert_eq!(
            found,
            vec![dir.path().join("result_a.txt"), dir.path().join("result_b.txt")]
        );
    }

    #[test]
    fn test_find_stale_results_missing_dir() {
        let result = find_stale_results(Path::new("/nonexistent/spt-pairs/dir"), "result_");
        assert!(matches!(result, Err(SptPairsError::FolderNotFound(_))));
    }

    #[test]
    fn test_remove_stale_results_empty_dir_entry() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("result_empty")).unwrap();

        let removed = remove_stale_results(dir.path(), "result_", false).unwrap();
        assert_eq!(removed.len(), 1);
        assert!(!dir.path().join("result_empty").exists());
    }

    #[test]
    fn test_find_stale_results_rejects_empty_prefix() {
        let dir = tempdir().unwrap();
        let result = find_stale_results(dir.path(), "");
        assert!(matches!(result, Err(SptPairsError::Common(_))));
    }

    /// ディレクトリを指すリンクはリンクだけ消し、リンク先は残す
    #[cfg(unix)]
    #[test]
    fn test_remove_stale_results_symlink_to_dir() {
        let dir = tempdir().unwrap();
        let real = dir.path().join("real_dir");
        fs::create_dir(&real).unwrap();
        fs::write(real.join("keep.txt"), "x").unwrap();
        std::os::unix::fs::symlink(&real, dir.path().join("result_link")).unwrap();

        let removed = remove_stale_results(dir.path(), "result_", false).unwrap();
        assert_eq!(removed, vec![dir.path().join("result_link")]);
        assert!(fs::symlink_metadata(dir.path().join("result_link")).is_err());
        assert!(real.join("keep.txt").exists());
    }

    /// UTF-8でない名前も元のパスのまま削除できる
    #[cfg(target_os = "linux")]
    #[test]
    fn test_remove_stale_results_non_utf8_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join(OsStr::from_bytes(b"result_\xff\xfe.txt"));
        fs::write(&path, "old").unwrap();

        let removed = remove_stale_results(dir.path(), "result_", false).unwrap();
        assert_eq!(removed, vec![path.clone()]);
        assert!(!path.exists());
    }

    #[test]
    fn test_clean_dry_run_lists_without_removing() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("result_a.txt"), "").unwrap();
        fs::write(dir.path().join("result.txt"), "").unwrap();

        let mut out = Vec::new();
        let found = clean(dir.path(), "result_", true, false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(found.len(), 1);
        assert!(text.contains("result_a.txt"));
        assert!(text.contains("1件"));
        assert!(dir.path().join("result_a.txt").exists());
    }

    #[test]
    fn test_clean_removes() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("result_a.txt"), "").unwrap();
        fs::write(dir.path().join("result_b.txt"), "").unwrap();
        fs::write(dir.path().join("result.txt"), "").unwrap();

        let mut out = Vec::new();
        let removed = clean(dir.path(), "result_", false, false, &mut out).unwrap();

        assert_eq!(removed.len(), 2);
        assert!(String::from_utf8(out).unwrap().contains("2件を削除"));
        assert!(dir.path().join("result.txt").exists());
    }

    #[test]
    fn test_remove_stale_results_non_empty_dir_fails() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("result_dir");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("keep.txt"), "x").unwrap();

        let result = remove_stale_results(dir.path(), "result_", false);
        assert!(matches!(result, Err(SptPairsError::Cleanup { .. })));
        assert!(sub.join("keep.txt").exists());
    }
}
