// src/config/scenario.rs

use serde::Deserialize;

use crate::models::injury::InjuryModel;

#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub observations: Vec<CrashObservation>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CrashObservation {
    pub id: String,
    pub delta_v: f64,        // 速度変化 (m/s)
    pub angle: f64,          // 衝突角 (rad)
    pub model: InjuryModel,  // 使用するモデル
}
