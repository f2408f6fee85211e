// src/config/coefficients.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::config::error::CoefficientError;
use crate::models::impact_zone::{ImpactZone, ReducedZone};

pub const COMPLETE_VARIANT: &str = "complete_angle_areas";
pub const REDUCED_VARIANT: &str = "reduced_angle_areas";

const CONST_KEY: &str = "const";
const SPEED_KEY: &str = "speed";

/// 区分名から係数への対応表
pub type AngleAreas = BTreeMap<String, f64>;

/// リスクパラメータファイルの係数テーブル
///
/// 他のリスクモデルの節が同じファイルにあっても無視する。
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CoefficientTable {
    #[serde(default)]
    pub log_reg: LogRegCoefficients,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LogRegCoefficients {
    #[serde(default)]
    pub complete_angle_areas: AngleAreas, // 12分割モデル
    #[serde(default)]
    pub reduced_angle_areas: AngleAreas, // 4分割モデル
}

/// 検証済みの12分割モデル係数
#[derive(Debug, Clone, PartialEq)]
pub struct CompleteCoefficients {
    pub constant: f64,       // 定数項
    pub speed: f64,          // 速度係数
    pub offsets: [f64; 11], // Imp_1〜Imp_11 のオフセット
}

impl CompleteCoefficients {
    /// 区分のオフセット。基準区分（正面）は 0
    pub fn offset(&self, zone: ImpactZone) -> f64 {
        match zone.number() {
            Some(number) => self.offsets[number - 1],
            None => 0.0,
        }
    }
}

/// 検証済みの4分割モデル係数
#[derive(Debug, Clone, PartialEq)]
pub struct ReducedCoefficients {
    pub constant: f64,    // 定数項
    pub speed: f64,       // 速度係数
    pub driver_side: f64, // 運転席側オフセット
    pub right_side: f64,  // 右側オフセット
    pub rear: f64,        // 後方オフセット
}

impl ReducedCoefficients {
    /// 区分のオフセット。基準区分（正面）は 0
    pub fn offset(&self, zone: ReducedZone) -> f64 {
        match zone {
            ReducedZone::Front => 0.0,
            ReducedZone::DriverSide => self.driver_side,
            ReducedZone::RightSide => self.right_side,
            ReducedZone::Rear => self.rear,
        }
    }
}

impl CoefficientTable {
    /// 12分割モデルの係数を取り出して検証する
    ///
    /// # 戻り値
    /// - 定数項・速度係数・全11区分のオフセットが揃っていれば検証済み係数
    /// - 欠けている、または有限値でないキーがあればエラー
    pub fn complete(&self) -> Result<CompleteCoefficients, CoefficientError> {
        let areas = &self.log_reg.complete_angle_areas;
        let constant = require(areas, COMPLETE_VARIANT, CONST_KEY)?;
        let speed = require(areas, COMPLETE_VARIANT, SPEED_KEY)?;

        let mut offsets = [0.0; 11];
        for (slot, zone) in offsets.iter_mut().zip(ImpactZone::OFFSET_ZONES) {
            *slot = require(areas, COMPLETE_VARIANT, zone.name())?;
        }

        tracing::debug!(variant = COMPLETE_VARIANT, constant, speed, "係数を検証しました");

        Ok(CompleteCoefficients {
            constant,
            speed,
            offsets,
        })
    }

    /// 4分割モデルの係数を取り出して検証する
    pub fn reduced(&self) -> Result<ReducedCoefficients, CoefficientError> {
        let areas = &self.log_reg.reduced_angle_areas;
        let coefficients = ReducedCoefficients {
            constant: require(areas, REDUCED_VARIANT, CONST_KEY)?,
            speed: require(areas, REDUCED_VARIANT, SPEED_KEY)?,
            driver_side: require(areas, REDUCED_VARIANT, ReducedZone::DriverSide.name())?,
            right_side: require(areas, REDUCED_VARIANT, ReducedZone::RightSide.name())?,
            rear: require(areas, REDUCED_VARIANT, ReducedZone::Rear.name())?,
        };

        tracing::debug!(
            variant = REDUCED_VARIANT,
            constant = coefficients.constant,
            speed = coefficients.speed,
            "係数を検証しました"
        );

        Ok(coefficients)
    }

    /// どのモデルも使わないキーの一覧（区分名の綴り間違いなど）
    ///
    /// # 戻り値
    /// - `(モデル名, キー)` の組
    pub fn unknown_keys(&self) -> Vec<(&'static str, &str)> {
        let complete = unknown_in(&self.log_reg.complete_angle_areas, COMPLETE_VARIANT, |key| {
            ImpactZone::OFFSET_ZONES.iter().any(|zone| zone.name() == key)
        });
        let reduced = unknown_in(&self.log_reg.reduced_angle_areas, REDUCED_VARIANT, |key| {
            ReducedZone::OFFSET_ZONES.iter().any(|zone| zone.name() == key)
        });
        complete.chain(reduced).collect()
    }
}

/// 必須キーの取り出し
fn require(
    areas: &AngleAreas,
    variant: &'static str,
    key: &'static str,
) -> Result<f64, CoefficientError> {
    let value = *areas
        .get(key)
        .ok_or(CoefficientError::MissingCoefficient { variant, key })?;
    if !value.is_finite() {
        return Err(CoefficientError::NonFiniteCoefficient {
            variant,
            key,
            value,
        });
    }
    Ok(value)
}

fn unknown_in<'a, F>(
    areas: &'a AngleAreas,
    variant: &'static str,
    is_zone: F,
) -> impl Iterator<Item = (&'static str, &'a str)> + 'a
where
    F: Fn(&str) -> bool + 'a,
{
    areas
        .keys()
        .map(String::as_str)
        .filter(move |key| *key != CONST_KEY && *key != SPEED_KEY && !is_zone(*key))
        .map(move |key| (variant, key))
}
