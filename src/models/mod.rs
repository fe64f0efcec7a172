// src/models/mod.rs

pub mod lotka_volterra;
