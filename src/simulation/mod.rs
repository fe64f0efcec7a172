// src/simulation/mod.rs

pub mod analysis;
pub mod csv;
pub mod error;
pub mod framework;
pub mod load_parameters;

pub use error::SimulationError;

/// 積分中に更新される状態 (t, x, y)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub t: f64,
    pub x: f64, // 被食者
    pub y: f64, // 捕食者
}

/// 軌道の1サンプル
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryRecord {
    pub t: f64,
    pub x: f64,
    pub y: f64,
}

impl From<State> for TrajectoryRecord {
    fn from(state: State) -> Self {
        TrajectoryRecord {
            t: state.t,
            x: state.x,
            y: state.y,
        }
    }
}

/// 時刻順に並んだ軌道
pub type Trajectory = Vec<TrajectoryRecord>;

/// 軌道レコードの書き込み先
///
/// レコードは時刻順に1件ずつ渡される。
pub trait TrajectorySink {
    fn write_record(&mut self, record: &TrajectoryRecord) -> Result<(), SimulationError>;

    /// 全レコードの書き込み後に呼ばれる
    fn finish(&mut self) -> Result<(), SimulationError> {
        Ok(())
    }
}

impl TrajectorySink for Vec<TrajectoryRecord> {
    fn write_record(&mut self, record: &TrajectoryRecord) -> Result<(), SimulationError> {
        self.push(*record);
        Ok(())
    }
}
