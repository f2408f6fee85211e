// src/models/injury.rs

use std::fmt;

use serde::Deserialize;

use crate::config::coefficients::{CoefficientTable, CompleteCoefficients, ReducedCoefficients};
use crate::config::error::CoefficientError;
use crate::math::logistic;
use crate::models::impact_zone::{classify_complete, classify_reduced};

/// 使用するロジスティック回帰モデル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InjuryModel {
    Complete, // 12分割
    Reduced,  // 4分割
}

impl fmt::Display for InjuryModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InjuryModel::Complete => f.write_str("complete"),
            InjuryModel::Reduced => f.write_str("reduced"),
        }
    }
}

/// 12分割モデルによる MAIS 3+ 負傷確率（検証済み係数版）
///
/// # 引数
/// - `velocity`: 衝突前後の速度変化（m/s）
/// - `angle`: 衝突角（rad）。(-π, π] に正規化済みであること
/// - `coefficients`: 検証済み係数
///
/// # 戻り値
/// - 負傷確率 [0, 1]
pub fn complete_probability(velocity: f64, angle: f64, coefficients: &CompleteCoefficients) -> f64 {
    let zone = classify_complete(angle);
    let z = coefficients.constant + coefficients.speed * velocity + coefficients.offset(zone);
    tracing::trace!(%zone, velocity, angle, z, "12分割モデルを評価");
    logistic(z)
}

/// 4分割モデルによる MAIS 3+ 負傷確率（検証済み係数版）
pub fn reduced_probability(velocity: f64, angle: f64, coefficients: &ReducedCoefficients) -> f64 {
    let zone = classify_reduced(angle);
    let z = coefficients.constant + coefficients.speed * velocity + coefficients.offset(zone);
    tracing::trace!(%zone, velocity, angle, z, "4分割モデルを評価");
    logistic(z)
}

/// 12分割モデルによる MAIS 3+ 負傷確率
///
/// # 引数
/// - `velocity`: 衝突前後の速度変化（m/s）
/// - `angle`: 衝突角（rad）
/// - `coefficients`: `log_reg.complete_angle_areas` を含む係数テーブル
///
/// # 戻り値
/// - 負傷確率 [0, 1]
/// - 必要な係数が欠けていれば `CoefficientError::MissingCoefficient`
pub fn complete_injury_probability(
    velocity: f64,
    angle: f64,
    coefficients: &CoefficientTable,
) -> Result<f64, CoefficientError> {
    let coefficients = coefficients.complete()?;
    Ok(complete_probability(velocity, angle, &coefficients))
}

/// 4分割モデルによる MAIS 3+ 負傷確率
///
/// # 引数
/// - `velocity`: 衝突前後の速度変化（m/s）
/// - `angle`: 衝突角（rad）
/// - `coefficients`: `log_reg.reduced_angle_areas` を含む係数テーブル
///
/// # 戻り値
/// - 負傷確率 [0, 1]
/// - 必要な係数が欠けていれば `CoefficientError::MissingCoefficient`
pub fn reduced_injury_probability(
    velocity: f64,
    angle: f64,
    coefficients: &CoefficientTable,
) -> Result<f64, CoefficientError> {
    let coefficients = coefficients.reduced()?;
    Ok(reduced_probability(velocity, angle, &coefficients))
}
