// src/report.rs

use crate::config::{ModelParameters, SimulationConfig};
use crate::simulation::analysis::AnalysisResult;

/// 実行前に表示するパラメータ一覧
pub fn format_banner(model: &ModelParameters, sim: &SimulationConfig) -> String {
    let title = "Lotka-Volterra simulation with 4th-order Runge-Kutta";
    let mut out = format!("{}\n{}\n", title, "=".repeat(title.len()));

    // モデル係数
    out.push_str("Model parameters:\n");
    out.push_str(&format!("  a (prey growth rate): {}\n", model.a));
    out.push_str(&format!("  b (predation efficiency): {}\n", model.b));
    out.push_str(&format!("  c (predator death rate): {}\n", model.c));
    out.push_str(&format!("  d (conversion efficiency): {}\n", model.d));

    // シミュレーション条件
    out.push_str("\nSimulation parameters:\n");
    out.push_str(&format!("  Initial prey population (x0): {}\n", sim.x0));
    out.push_str(&format!("  Initial predator population (y0): {}\n", sim.y0));
    out.push_str(&format!("  Step size (h): {}\n", sim.h));
    out.push_str(&format!("  Maximum simulation time: {}\n", sim.t_max));
    out.push_str(&format!("  Output file: {}\n", sim.output.display()));
    out
}

fn format_series(name: &str, min: f64, max: f64, mean: f64, amplitude: f64) -> String {
    format!(
        "{} population:\n  Minimum: {}\n  Maximum: {}\n  Mean: {}\n  Amplitude: {}\n",
        name, min, max, mean, amplitude
    )
}

/// 解析結果の表示用テキスト
pub fn format_analysis(result: &AnalysisResult) -> String {
    let mut out = String::from("Simulation analysis:\n--------------------\n");
    out.push_str(&format_series(
        "Prey",
        result.min_prey,
        result.max_prey,
        result.mean_prey,
        result.amplitude_prey,
    ));
    out.push('\n');
    out.push_str(&format_series(
        "Predator",
        result.min_predator,
        result.max_predator,
        result.mean_predator,
        result.amplitude_predator,
    ));
    out.push('\n');

    // 周期はピークが2つ見つかった場合のみ表示する
    match result.estimated_period {
        Some(period) => out.push_str(&format!("Oscillation period (estimate): {}\n", period)),
        None => out.push_str("Oscillation period: could not be estimated from the data\n"),
    }
    out
}
