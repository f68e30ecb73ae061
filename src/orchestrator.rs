//! 全ペア実行の流れ
//!
//! ## 処理フロー
//! 1. 前回の結果ファイル（`result_*`）を削除
//! 2. マニフェストを読み込み
//! 3. 全ペアについて外部ツールを順番に実行（終了を待ってから次へ）

use crate::cleanup;
use crate::config::Config;
use crate::error::Result;
use crate::manifest;
use crate::report::RunReport;
use crate::runner::{Invocation, ToolRunner};
use indicatif::{ProgressBar, ProgressStyle};
use spt_pairs_common::{all_pairs, build_tool_args, pair_count, Pair, ToolPaths};
use std::io::Write;
use std::path::Path;

/// 実行オプション
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// 削除も起動もせず表示だけ行う
    pub dry_run: bool,
    /// 開始時の掃除を行うか
    pub cleanup: bool,
    pub verbose: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            cleanup: true,
            verbose: false,
        }
    }
}

/// 1ペア分の起動内容を構築
pub fn build_invocation(program: &Path, paths: &ToolPaths, pair: &Pair<'_>) -> Invocation {
    Invocation {
        program: program.to_path_buf(),
        args: build_tool_args(paths, pair.first, pair.second),
    }
}

/// 全ペアを順番に実行
///
/// ペアごとの進捗行は `out` へ書く（進捗バーが非表示でも省略しない）。
/// ツールの終了コードは記録するだけで、失敗しても次のペアへ進む。
/// 起動自体に失敗した場合は中断する。
pub async fn run_all_pairs<R: ToolRunner, W: Write>(
    files: &[String],
    program: &Path,
    paths: &ToolPaths,
    runner: &mut R,
    report: &mut RunReport,
    show_progress: bool,
    out: &mut W,
) -> Result<()> {
    let total = pair_count(files.len());
    let pb = if show_progress {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::with_template("  {bar:30} {pos}/{len} [{elapsed_precise}<{eta_precise}]")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    for pair in all_pairs(files) {
        pb.suspend(|| -> std::io::Result<()> {
            writeln!(out, "{} と {} を比較中...", pair.first, pair.second)?;
            out.flush()
        })?;

        let invocation = build_invocation(program, paths, &pair);
        let outcome = runner.run(&invocation).await?;
        if outcome.is_failure() {
            pb.suspend(|| writeln!(out, "  ⚠ ツールが異常終了: {:?}", outcome))?;
        }

        report.record(pair.index, pair.first, pair.second, outcome);
        pb.inc(1);
    }
    pb.finish();

    Ok(())
}

/// `pairs` サブコマンド本体：マニフェストを読み、番号付きでペアを一覧表示
pub fn list_pairs<W: Write>(config: &Config, out: &mut W) -> Result<Vec<String>> {
    let files = manifest::load_manifest(&config.manifest_path(), &config.manifest_encoding)?;

    for pair in all_pairs(&files) {
        writeln!(out, "{:>4}: {} - {}", pair.index + 1, pair.first, pair.second)?;
    }
    writeln!(out, "\n{}件のファイル, {}ペア", files.len(), pair_count(files.len()))?;

    Ok(files)
}

/// 掃除・読み込み・全ペア実行をまとめて行う
pub async fn run<R: ToolRunner>(
    config: &Config,
    runner: &mut R,
    opts: RunOptions,
    report: &mut RunReport,
) -> Result<()> {
    println!("⚠ 処理が終わるまで出力ファイルを開かないでください\n");

    // 1. 掃除
    if opts.cleanup {
        println!("[1/3] 古い結果を削除中...");
        let removed = if opts.dry_run {
            let found = cleanup::find_stale_results(&config.workdir, &config.cleanup_prefix)?;
            for path in &found {
                println!("  (dry-run) 削除対象: {}", path.display());
            }
            found
        } else {
            cleanup::remove_stale_results(&config.workdir, &config.cleanup_prefix, opts.verbose)?
        };
        println!("✔ {}件を削除\n", removed.len());
        report.removed = removed;
    } else {
        println!("[1/3] 削除をスキップ\n");
    }

    // 2. マニフェスト
    println!("[2/3] マニフェストを読み込み中...");
    let manifest_path = config.manifest_path();
    let files = manifest::load_manifest(&manifest_path, &config.manifest_encoding)?;
    println!(
        "✔ {}件のファイル, {}ペア\n",
        files.len(),
        pair_count(files.len())
    );
    if opts.verbose {
        for (i, name) in files.iter().enumerate() {
            println!("  {:>3}: {}", i + 1, name);
        }
    }
    report.entries = files.clone();

    // 3. 全ペア実行
    println!("[3/3] 各ペアの置換検定を実行中...");
    run_all_pairs(
        &files,
        &config.tool,
        &config.tool_paths(),
        runner,
        report,
        !opts.dry_run,
        &mut std::io::stdout(),
    )
    .await?;

    let failed = report.failed().count();
    if failed > 0 {
        println!("✔ {}ペア実行（うち{}ペアでツールが異常終了）", report.pairs.len(), failed);
    } else {
        println!("✔ {}ペア実行", report.pairs.len());
    }

    Ok(())
}
