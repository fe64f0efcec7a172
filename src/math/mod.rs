// src/math/mod.rs

pub mod integrator;
pub mod statistics;

pub use integrator::runge_kutta_4;
pub use statistics::{first_peak_interval, summarize, SeriesSummary};
