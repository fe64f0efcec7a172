// src/lib.rs

//! Lotka-Volterra 捕食者-被食者モデルの固定ステップ RK4 シミュレーションと軌道解析

pub mod config;
pub mod math;
pub mod models;
pub mod report;
pub mod simulation;

pub use config::{ModelParameters, SimulationConfig};
pub use simulation::analysis::{analyze, AnalysisResult};
pub use simulation::framework::{integrate, integrate_into};
pub use simulation::{SimulationError, Trajectory, TrajectoryRecord, TrajectorySink};
