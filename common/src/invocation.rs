//! 外部置換検定ツールの引数構築

use std::path::PathBuf;

/// ツールへ渡す固定パス群
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPaths {
    /// 重み付けスプレッドシート
    pub weights: PathBuf,
    /// 比較対象ファイルのディレクトリ
    pub data_dir: PathBuf,
    /// 出力ファイル（ツール側でグループ名を付けて展開される）
    pub output: PathBuf,
    /// 子音エンコーディング出力
    pub consonants: PathBuf,
    /// コストグループのプロット（SVG）
    pub cost_groups_plot: PathBuf,
    /// そのまま末尾に付ける追加引数
    pub extra_args: Vec<String>,
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            weights: PathBuf::from("./data/weights.xlsx"),
            data_dir: PathBuf::from("./data"),
            output: PathBuf::from("result.txt"),
            consonants: PathBuf::from("consonant.txt"),
            cost_groups_plot: PathBuf::from("plot.svg"),
            extra_args: Vec::new(),
        }
    }
}

impl ToolPaths {
    /// データディレクトリ配下のパス
    pub fn data_file(&self, file_name: &str) -> PathBuf {
        self.data_dir.join(file_name)
    }
}

/// 1ペア分の引数リストを構築
pub fn build_tool_args(paths: &ToolPaths, set_a: &str, set_b: &str) -> Vec<String> {
    let mut args = vec![
        format!("--weights={}", paths.weights.display()),
        format!("--set_a={}", paths.data_file(set_a).display()),
        format!("--set_b={}", paths.data_file(set_b).display()),
        "--output".to_string(),
        paths.output.display().to_string(),
        "--consonants".to_string(),
        paths.consonants.display().to_string(),
        format!("--cost_groups_plot={}", paths.cost_groups_plot.display()),
    ];
    args.extend(paths.extra_args.iter().cloned());
    args
}
