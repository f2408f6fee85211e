// src/lib.rs

//! 衝突時の速度変化と衝突角から乗員の MAIS 3+ 負傷確率を推定する
//! ロジスティック回帰モデル。
//!
//! 12分割（`complete`）と4分割（`reduced`）の2つのモデルがあり、
//! どちらを使うかは呼び出し側が決める。

pub mod math;
pub mod models;
pub mod config;
pub mod assessment;

pub use config::{CoefficientError, CoefficientTable, CompleteCoefficients, ReducedCoefficients};
pub use models::{
    classify_complete, classify_reduced, complete_injury_probability, complete_probability,
    reduced_injury_probability, reduced_probability, ImpactZone, InjuryModel, ReducedZone,
};
