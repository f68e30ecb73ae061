use super::{Invocation, ToolOutcome, ToolRunner};
use crate::error::{Result, SptPairsError};
use std::path::PathBuf;
use tokio::process::Command;

/// 子プロセスとして起動し、終了まで待つ
///
/// 標準入出力は親から引き継ぐので、ツールの出力はそのまま端末に流れる。
pub struct ProcessRunner {
    workdir: PathBuf,
}

impl ProcessRunner {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    /// 作業ディレクトリの絶対パス
    ///
    /// 子プロセスは chdir 後に実行ファイルを探すので、相対のまま結合すると二重になる。
    fn absolute_workdir(&self) -> std::io::Result<PathBuf> {
        std::path::absolute(&self.workdir)
    }

    /// 相対パスの実行ファイルは作業ディレクトリ基準で解決
    fn resolve_program(&self, invocation: &Invocation) -> std::io::Result<PathBuf> {
        let program = &invocation.program;
        if program.is_relative() && program.components().count() > 1 {
            Ok(self.absolute_workdir()?.join(program))
        } else {
            Ok(program.clone())
        }
    }
}

impl ToolRunner for ProcessRunner {
    async fn run(&mut self, invocation: &Invocation) -> Result<ToolOutcome> {
        let spawn_error = |program: &PathBuf, source| SptPairsError::ToolSpawn {
            program: program.clone(),
            source,
        };
        let program = self
            .resolve_program(invocation)
            .map_err(|source| spawn_error(&invocation.program, source))?;
        let workdir = self
            .absolute_workdir()
            .map_err(|source| spawn_error(&program, source))?;

        let status = Command::new(&program)
            .args(&invocation.args)
            .current_dir(&workdir)
            .status()
            .await
            .map_err(|source| spawn_error(&program, source))?;

        if status.success() {
            Ok(ToolOutcome::Success)
        } else {
            Ok(ToolOutcome::Failed {
                code: status.code(),
            })
        }
    }
}

/// 実行せずにコマンドラインだけを表示
#[derive(Default)]
pub struct DryRunRunner {
    pub printed: usize,
}

impl ToolRunner for DryRunRunner {
    async fn run(&mut self, invocation: &Invocation) -> Result<ToolOutcome> {
        println!("  $ {}", invocation.command_line());
        self.printed += 1;
        Ok(ToolOutcome::Skipped)
    }
}
