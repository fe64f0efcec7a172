// src/simulation/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("cannot open {path} for writing: {source}")]
    SinkUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write trajectory record: {0}")]
    SinkWrite(#[from] csv::Error),
    #[error("cannot open {path} for reading: {source}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("trajectory contains no records")]
    EmptyTrajectory,
    #[error("step size must be positive and finite, got {0}")]
    InvalidStepSize(f64),
    #[error("simulation horizon must be non-negative and finite, got {0}")]
    InvalidHorizon(f64),
    #[error("t_max / h = {0} exceeds the step limit")]
    TooManySteps(f64),
}

/// 数値として解釈できないレコード
///
/// 読み込みはこのレコードの手前で終了する。
#[derive(Error, Debug, Clone, PartialEq)]
#[error("malformed record at line {line}: {reason}")]
pub struct MalformedRecord {
    pub line: u64,
    pub reason: String,
}
