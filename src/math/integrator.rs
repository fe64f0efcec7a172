// src/math/integrator.rs

/// 古典的4次 Runge-Kutta 法による1ステップ積分
///
/// 各段の傾きはステップ幅 `h` を掛けた増分として扱う。
///
/// ```text
/// k1 = h f(t,       y)
/// k2 = h f(t + h/2, y + k1/2)
/// k3 = h f(t + h/2, y + k2/2)
/// k4 = h f(t + h,   y + k3)
/// y' = y + (k1 + 2 k2 + 2 k3 + k4) / 6
/// ```
///
/// # 引数
/// - `t`: 現在時刻
/// - `y`: 現在の状態ベクトル
/// - `h`: ステップ幅
/// - `f`: 右辺関数 f(t, y)
///
/// # 戻り値
/// - 次の状態ベクトル（時刻の更新は呼び出し側で行う）
pub fn runge_kutta_4<const N: usize, F>(t: f64, y: [f64; N], h: f64, f: F) -> [f64; N]
where
    F: Fn(f64, [f64; N]) -> [f64; N],
{
    let scaled = |rate: [f64; N]| rate.map(|r| h * r);
    let offset = |k: &[f64; N], factor: f64| -> [f64; N] {
        core::array::from_fn(|i| y[i] + k[i] * factor)
    };

    let k1 = scaled(f(t, y));
    let k2 = scaled(f(t + h / 2.0, offset(&k1, 0.5)));
    let k3 = scaled(f(t + h / 2.0, offset(&k2, 0.5)));
    let k4 = scaled(f(t + h, offset(&k3, 1.0)));

    core::array::from_fn(|i| y[i] + (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i]) / 6.0)
}
