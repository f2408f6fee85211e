// src/assessment/load_parameters.rs

use std::error::Error;
use std::fs::File;
use serde_yaml::from_reader;

use crate::config::{CoefficientTable, Scenario};

/// 係数テーブルの読み込み（JSON形式もそのまま読める）
pub fn load_coefficient_table(path: &str) -> Result<CoefficientTable, Box<dyn Error>> {
    let file = File::open(path)?;
    let table: CoefficientTable = from_reader(file)?;
    for (variant, key) in table.unknown_keys() {
        tracing::warn!(path, variant, key, "未知の係数キーを無視します");
    }
    tracing::debug!(path, "係数テーブルを読み込みました");
    Ok(table)
}

/// シナリオの読み込み
pub fn load_scenario(path: &str) -> Result<Scenario, Box<dyn Error>> {
    let file = File::open(path)?;
    let scenario: Scenario = from_reader(file)?;
    tracing::debug!(path, observations = scenario.observations.len(), "シナリオを読み込みました");
    Ok(scenario)
}
