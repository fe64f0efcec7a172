// src/simulation/load_parameters.rs

use std::fs::File;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_yaml::from_reader;
use tracing::debug;

use crate::config::{ConfigError, ModelParameters, SimulationConfig};

/// YAML ファイルを読み込む共通関数
fn parse_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let file = File::open(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    from_reader(file).map_err(|source| ConfigError::Yaml {
        path: path.display().to_string(),
        source,
    })
}

/// モデル係数の読み込み
pub fn load_model_parameters(path: &Path) -> Result<ModelParameters, ConfigError> {
    let params: ModelParameters = parse_yaml(path)?;
    debug!(?params, path = %path.display(), "loaded model parameters");
    Ok(params)
}

/// シミュレーション条件の読み込み（範囲チェック込み）
pub fn load_simulation_config(path: &Path) -> Result<SimulationConfig, ConfigError> {
    let sim: SimulationConfig = parse_yaml(path)?;
    sim.validate()?;
    debug!(?sim, path = %path.display(), "loaded simulation config");
    Ok(sim)
}
