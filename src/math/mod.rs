// src/math/mod.rs

pub mod logistic;
pub mod angle;

pub use logistic::logistic;
pub use angle::normalize_angle;
