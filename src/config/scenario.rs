// src/config/scenario.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::config::error::ConfigError;
use crate::simulation::framework::MAX_STEPS;

/// シミュレーション条件
///
/// 初期個体数、固定ステップ幅、終了時刻、および軌道の出力先を持つ。
/// 一回の実行中は変更しない。
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SimulationConfig {
    pub x0: f64,    // 被食者の初期個体数
    pub y0: f64,    // 捕食者の初期個体数
    pub h: f64,     // ステップ幅
    pub t_max: f64, // 最大シミュレーション時刻
    #[serde(default = "default_output")]
    pub output: PathBuf, // 出力ファイル
}

fn default_output() -> PathBuf {
    PathBuf::from("lotka_volterra_results.csv")
}

impl SimulationConfig {
    /// 値の範囲チェック
    ///
    /// # 戻り値
    /// - ステップ幅が正でない、終了時刻が負、非有限値を含む、
    ///   または `t_max / h` が `MAX_STEPS` を超える場合は `ConfigError::Invalid`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.h.is_finite() || self.h <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "step size h must be positive and finite, got {}",
                self.h
            )));
        }
        if !self.t_max.is_finite() || self.t_max < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "t_max must be non-negative and finite, got {}",
                self.t_max
            )));
        }
        if self.t_max / self.h > MAX_STEPS {
            return Err(ConfigError::Invalid(format!(
                "t_max / h = {} exceeds the limit of {} steps",
                self.t_max / self.h,
                MAX_STEPS
            )));
        }
        if !self.x0.is_finite() || !self.y0.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "initial populations must be finite, got x0={} y0={}",
                self.x0, self.y0
            )));
        }
        Ok(())
    }
}
