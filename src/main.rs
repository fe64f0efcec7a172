// src/main.rs

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lvsim::report;
use lvsim::simulation::csv::{read_trajectory, CsvSink};
use lvsim::simulation::load_parameters::*;
use lvsim::{analyze, integrate_into};

#[derive(Parser, Debug)]
#[command(name = "lvsim")]
#[command(about = "Lotka-Volterra predator-prey simulation with fixed-step RK4", long_about = None)]
struct Cli {
    /// モデル係数の YAML ファイル
    #[arg(long, default_value = "config/model_parameters.yaml")]
    model: PathBuf,

    /// シミュレーション条件の YAML ファイル
    #[arg(long, default_value = "config/simulation.yaml")]
    simulation: PathBuf,

    /// 出力先 CSV（設定ファイルの値を上書き）
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// ログレベル（RUST_LOG が優先）
    #[arg(long, default_value = "info")]
    log_level: String,

    /// 積分のみ行い解析を省略する
    #[arg(long)]
    skip_analysis: bool,
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    // 設定の読み込み
    let model_params = load_model_parameters(&cli.model)?;
    let mut sim_config = load_simulation_config(&cli.simulation)?;
    if let Some(output) = cli.output {
        sim_config.output = output;
    }

    print!("{}", report::format_banner(&model_params, &sim_config));
    println!();

    // 積分して CSV へ書き出す
    info!("running simulation");
    let mut sink = CsvSink::create(&sim_config.output)?;
    let records = integrate_into(&model_params, &sim_config, &mut sink)?;
    sink.into_inner()?;
    info!(
        records,
        "simulation finished, results saved to {}",
        sim_config.output.display()
    );

    if cli.skip_analysis {
        return Ok(());
    }

    // 書き出した CSV を読み直して解析する
    let trajectory = read_trajectory(&sim_config.output)?;
    let result = analyze(&trajectory)?;
    println!();
    print!("{}", report::format_analysis(&result));

    Ok(())
}
