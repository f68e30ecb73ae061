use crate::error::{Result, SptPairsError};
use serde::{Deserialize, Serialize};
use spt_pairs_common::{ToolPaths, DEFAULT_RESULT_PREFIX};
use std::path::{Path, PathBuf};

/// 実行設定
///
/// `~/.config/spt-pairs/config.json` があれば読み込み、欠けた項目は既定値で補う。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 置換検定ツールの実行ファイル
    pub tool: PathBuf,
    /// 比較対象ファイル名の一覧
    pub manifest: PathBuf,
    /// マニフェストの文字コード（WHATWGラベル）
    pub manifest_encoding: String,
    /// 作業ディレクトリ（掃除とツール実行の基準）
    pub workdir: PathBuf,
    /// 掃除対象の接頭辞
    pub cleanup_prefix: String,
    pub weights: PathBuf,
    pub data_dir: PathBuf,
    pub output: PathBuf,
    pub consonants: PathBuf,
    pub cost_groups_plot: PathBuf,
    /// ツールへそのまま渡す追加引数（例: `--num_trials=100000`）
    pub extra_args: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        let paths = ToolPaths::default();
        Self {
            tool: PathBuf::from(default_tool()),
            manifest: PathBuf::from("./list_of_lists.txt"),
            manifest_encoding: "windows-1251".into(),
            workdir: PathBuf::from("."),
            cleanup_prefix: DEFAULT_RESULT_PREFIX.into(),
            weights: paths.weights,
            data_dir: paths.data_dir,
            output: paths.output,
            consonants: paths.consonants,
            cost_groups_plot: paths.cost_groups_plot,
            extra_args: paths.extra_args,
        }
    }
}

fn default_tool() -> &'static str {
    if cfg!(windows) {
        "./bin/spt_win_x86-64.exe"
    } else {
        "./bin/spt"
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// 指定パスから読み込み（存在しなければ既定値）
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| SptPairsError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("spt-pairs").join("config.json"))
    }

    /// ツールへ渡す固定パス群
    pub fn tool_paths(&self) -> ToolPaths {
        ToolPaths {
            weights: self.weights.clone(),
            data_dir: self.data_dir.clone(),
            output: self.output.clone(),
            consonants: self.consonants.clone(),
            cost_groups_plot: self.cost_groups_plot.clone(),
            extra_args: self.extra_args.clone(),
        }
    }

    /// 作業ディレクトリ基準で解決したマニフェストのパス
    pub fn manifest_path(&self) -> PathBuf {
        self.workdir.join(&self.manifest)
    }
}
