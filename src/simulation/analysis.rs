// src/simulation/analysis.rs

use tracing::debug;

use crate::math::{first_peak_interval, summarize};
use crate::simulation::{SimulationError, TrajectoryRecord};

/// 軌道の解析結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisResult {
    pub min_prey: f64,
    pub max_prey: f64,
    pub mean_prey: f64,
    pub amplitude_prey: f64,
    pub min_predator: f64,
    pub max_predator: f64,
    pub mean_predator: f64,
    pub amplitude_predator: f64,
    /// 被食者の振動周期の推定値（ピークが2つ未満なら `None`）
    pub estimated_period: Option<f64>,
}

/// 軌道の記述統計量と被食者の振動周期を計算する
///
/// 平均はサンプルの単純平均で、時間重み付けは行わない。
/// 周期は最初の2つの局所ピークの時刻差とする。
///
/// # 戻り値
/// - レコードが空の場合は `SimulationError::EmptyTrajectory`
pub fn analyze(trajectory: &[TrajectoryRecord]) -> Result<AnalysisResult, SimulationError> {
    let prey = summarize(trajectory.iter().map(|r| r.x)).ok_or(SimulationError::EmptyTrajectory)?;
    let predator =
        summarize(trajectory.iter().map(|r| r.y)).ok_or(SimulationError::EmptyTrajectory)?;

    let times: Vec<f64> = trajectory.iter().map(|r| r.t).collect();
    let prey_series: Vec<f64> = trajectory.iter().map(|r| r.x).collect();
    let estimated_period = first_peak_interval(&times, &prey_series);

    debug!(records = trajectory.len(), ?estimated_period, "trajectory analyzed");

    Ok(AnalysisResult {
        min_prey: prey.min,
        max_prey: prey.max,
        mean_prey: prey.mean,
        amplitude_prey: prey.amplitude,
        min_predator: predator.min,
        max_predator: predator.max,
        mean_predator: predator.mean,
        amplitude_predator: predator.amplitude,
        estimated_period,
    })
}

/// 読み出し元のレコードをすべて取り込んでから解析する
///
/// `CsvSource` は不正レコードで読み込みを打ち切った時点で警告を出す。
/// 打ち切りの有無を後から確認する場合は `&mut source` を渡して
/// `CsvSource::malformed` を参照する。
pub fn analyze_source<I>(source: I) -> Result<AnalysisResult, SimulationError>
where
    I: IntoIterator<Item = TrajectoryRecord>,
{
    let trajectory: Vec<TrajectoryRecord> = source.into_iter().collect();
    analyze(&trajectory)
}
