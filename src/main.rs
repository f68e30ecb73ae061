use clap::Parser;
use spt_pairs::{cleanup, cli, config, error, orchestrator, report, runner};
use cli::{Cli, Commands, Overrides};
use config::Config;
use error::Result;
use orchestrator::RunOptions;
use report::RunReport;
use runner::{DryRunRunner, ProcessRunner};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load()?;

    let command = cli.command.unwrap_or(Commands::Run {
        overrides: Overrides::default(),
        dry_run: false,
        no_cleanup: false,
        report: None,
    });

    match command {
        Commands::Run { overrides, dry_run, no_cleanup, report } => {
            println!("🔬 spt-pairs - 全ペア置換検定\n");
            overrides.apply(&mut config);

            let opts = RunOptions {
                dry_run,
                cleanup: !no_cleanup,
                verbose: cli.verbose,
            };
            let mut run_report = RunReport::new(&config.manifest_path());

            let result = if dry_run {
                let mut runner = DryRunRunner::default();
                orchestrator::run(&config, &mut runner, opts, &mut run_report).await
            } else {
                let mut runner = ProcessRunner::new(&config.workdir);
                orchestrator::run(&config, &mut runner, opts, &mut run_report).await
            };

            run_report.finish(result.as_ref().err().map(|e| e.to_string()));
            if let Some(report_path) = report {
                run_report.save(&report_path)?;
                println!("✔ レポートを保存: {}", report_path.display());
            }
            result?;

            println!("\n✅ 完了");
        }

        Commands::Pairs { overrides } => {
            overrides.apply(&mut config);
            orchestrator::list_pairs(&config, &mut std::io::stdout())?;
        }

        Commands::Clean { workdir, dry_run } => {
            let target = workdir.unwrap_or_else(|| config.workdir.clone());
            cleanup::clean(&target, &config.cleanup_prefix, dry_run, cli.verbose, &mut std::io::stdout())?;
        }

        Commands::Config { show, init } => {
            if init {
                config.save()?;
                println!("✔ 設定ファイルを作成しました: {}", Config::config_path()?.display());
            }

            if show || !init {
                println!("設定:");
                println!("  ツール: {}", config.tool.display());
                println!("  マニフェスト: {} ({})", config.manifest.display(), config.manifest_encoding);
                println!("  作業ディレクトリ: {}", config.workdir.display());
                println!("  削除対象: {}*", config.cleanup_prefix);
                println!("  重み: {}", config.weights.display());
                println!("  データ: {}", config.data_dir.display());
                println!("  出力: {}", config.output.display());
                println!("  子音: {}", config.consonants.display());
                println!("  プロット: {}", config.cost_groups_plot.display());
                if !config.extra_args.is_empty() {
                    println!("  追加引数: {}", config.extra_args.join(" "));
                }
            }
        }
    }

    Ok(())
}
