use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "spt-pairs")]
#[command(about = "語彙リストの全ペアに置換検定ツールを実行", long_about = None)]
pub struct Cli {
    /// サブコマンド（省略時は run）
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 掃除・マニフェスト読み込み・全ペア実行
    Run {
        #[command(flatten)]
        overrides: Overrides,

        /// 削除も実行もせず、内容だけ表示
        #[arg(long)]
        dry_run: bool,

        /// 開始時の result_* 削除を行わない
        #[arg(long)]
        no_cleanup: bool,

        /// 実行レポート（JSON）の出力先
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// マニフェストから作られるペアを一覧表示
    Pairs {
        #[command(flatten)]
        overrides: Overrides,
    },

    /// 古い結果ファイル（result_*）だけを削除
    Clean {
        /// 作業ディレクトリ
        #[arg(short, long)]
        workdir: Option<PathBuf>,

        /// 削除せず対象だけ表示
        #[arg(long)]
        dry_run: bool,
    },

    /// 設定を表示/初期化
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 既定値で設定ファイルを作成
        #[arg(long)]
        init: bool,
    },
}

/// 設定ファイルの値を上書きする引数
#[derive(Args, Debug, Clone, Default)]
pub struct Overrides {
    /// マニフェストファイル
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// 置換検定ツールの実行ファイル
    #[arg(short, long)]
    pub tool: Option<PathBuf>,

    /// 比較対象ファイルのディレクトリ
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// 作業ディレクトリ
    #[arg(short, long)]
    pub workdir: Option<PathBuf>,
}

impl Overrides {
    pub fn apply(&self, config: &mut crate::config::Config) {
        if let Some(manifest) = &self.manifest {
            config.manifest = manifest.clone();
        }
        if let Some(tool) = &self.tool {
            config.tool = tool.clone();
        }
        if let Some(data_dir) = &self.data_dir {
            config.data_dir = data_dir.clone();
        }
        if let Some(workdir) = &self.workdir {
            config.workdir = workdir.clone();
        }
    }
}
