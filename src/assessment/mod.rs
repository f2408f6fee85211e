// src/assessment/mod.rs

pub mod load_parameters;
pub mod csv;
pub mod framework;

use crate::models::injury::InjuryModel;

/// 1件の衝突に対する評価結果
#[derive(Debug, Clone, PartialEq)]
pub struct InjuryAssessment {
    pub id: String,
    pub model: InjuryModel,
    pub zone: &'static str, // 衝突区分名
    pub delta_v: f64,       // 速度変化 (m/s)
    pub angle: f64,         // 正規化後の衝突角 (rad)
    pub probability: f64,   // MAIS 3+ 確率
}
