// src/simulation/framework.rs

use tracing::{debug, info};

use crate::config::{ModelParameters, SimulationConfig};
use crate::math::runge_kutta_4;
use crate::models::lotka_volterra::derivatives;
use crate::simulation::{SimulationError, State, Trajectory, TrajectoryRecord, TrajectorySink};

/// 一回の実行で許容する最大ステップ数
pub const MAX_STEPS: f64 = 1.0e8;

/// 初期状態 (0, x0, y0)
pub fn initial_state(sim: &SimulationConfig) -> State {
    State {
        t: 0.0,
        x: sim.x0,
        y: sim.y0,
    }
}

/// RK4 で状態を1ステップ進める
///
/// 時刻は `t + h` に加算で更新する。
pub fn rk4_step(model: &ModelParameters, state: State, h: f64) -> State {
    let [x, y] = runge_kutta_4(state.t, [state.x, state.y], h, |t, s| {
        derivatives(t, s, model)
    });
    State {
        t: state.t + h,
        x,
        y,
    }
}

/// 軌道を積分して書き込み先へ順に渡す
///
/// `t < t_max` の間ステップを進めるため、最終時刻は `t_max` を
/// `h` 未満だけ超えることがある（`t_max` に合わせた切り詰めは行わない）。
///
/// # 引数
/// - `model`: モデル係数
/// - `sim`: シミュレーション条件
/// - `sink`: レコードの書き込み先
///
/// # 戻り値
/// - 書き込んだレコード数（t=0 を含む）
pub fn integrate_into<S: TrajectorySink + ?Sized>(
    model: &ModelParameters,
    sim: &SimulationConfig,
    sink: &mut S,
) -> Result<usize, SimulationError> {
    if !sim.h.is_finite() || sim.h <= 0.0 {
        return Err(SimulationError::InvalidStepSize(sim.h));
    }
    if !sim.t_max.is_finite() || sim.t_max < 0.0 {
        return Err(SimulationError::InvalidHorizon(sim.t_max));
    }
    let steps = sim.t_max / sim.h;
    if steps > MAX_STEPS {
        return Err(SimulationError::TooManySteps(steps));
    }

    let mut state = initial_state(sim);
    sink.write_record(&TrajectoryRecord::from(state))?;
    let mut count = 1;

    while state.t < sim.t_max {
        state = rk4_step(model, state, sim.h);
        sink.write_record(&TrajectoryRecord::from(state))?;
        count += 1;
    }
    sink.finish()?;

    debug!(records = count, final_t = state.t, "integration loop finished");
    Ok(count)
}

/// 軌道をメモリ上に積分する
pub fn integrate(
    model: &ModelParameters,
    sim: &SimulationConfig,
) -> Result<Trajectory, SimulationError> {
    let mut trajectory = Trajectory::new();
    integrate_into(model, sim, &mut trajectory)?;
    info!(records = trajectory.len(), "integrated trajectory in memory");
    Ok(trajectory)
}
