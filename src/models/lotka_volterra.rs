// src/models/lotka_volterra.rs

use crate::config::ModelParameters;

/// 被食者の個体数変化率 dx/dt = a x - b x y
///
/// # 引数
/// - `_t`: 時刻（モデルは時間に依存しない）
/// - `x`: 被食者の個体数
/// - `y`: 捕食者の個体数
/// - `params`: モデル係数
pub fn prey_rate(_t: f64, x: f64, y: f64, params: &ModelParameters) -> f64 {
    params.a * x - params.b * x * y
}

/// 捕食者の個体数変化率 dy/dt = -c y + d x y
pub fn predator_rate(_t: f64, x: f64, y: f64, params: &ModelParameters) -> f64 {
    -params.c * y + params.d * x * y
}

/// 状態ベクトル [x, y] に対する右辺関数
pub fn derivatives(t: f64, state: [f64; 2], params: &ModelParameters) -> [f64; 2] {
    let [x, y] = state;
    [prey_rate(t, x, y, params), predator_rate(t, x, y, params)]
}
