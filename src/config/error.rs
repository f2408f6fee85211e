// src/config/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoefficientError {
    #[error("係数 log_reg.{variant}.{key} が見つかりません。")]
    MissingCoefficient {
        variant: &'static str,
        key: &'static str,
    },
    #[error("係数 log_reg.{variant}.{key} が有限値ではありません: {value}")]
    NonFiniteCoefficient {
        variant: &'static str,
        key: &'static str,
        value: f64,
    },
}
