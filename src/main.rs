// src/main.rs

use std::error::Error;

use tracing_subscriber::EnvFilter;

use injury_risk::assessment::csv::write_csv_file;
use injury_risk::assessment::framework::assess_scenario;
use injury_risk::assessment::load_parameters::{load_coefficient_table, load_scenario};

const DEFAULT_PARAMETERS: &str = "config/risk_parameters.yaml";
const DEFAULT_SCENARIO: &str = "config/scenario.yaml";
const DEFAULT_OUTPUT: &str = "output/injury_results.csv";

fn main() -> Result<(), Box<dyn Error>> {
    // ログ出力の設定（RUST_LOG で変更可能）
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 引数でパスを上書き: <係数> <シナリオ> <出力>
    let args: Vec<String> = std::env::args().skip(1).collect();
    let parameters_path = args.first().map(String::as_str).unwrap_or(DEFAULT_PARAMETERS);
    let scenario_path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_SCENARIO);
    let output_path = args.get(2).map(String::as_str).unwrap_or(DEFAULT_OUTPUT);

    // 係数とシナリオの読み込み
    let table = load_coefficient_table(parameters_path)?;
    let scenario = load_scenario(scenario_path)?;

    // 負傷確率の評価
    let assessments = assess_scenario(&table, &scenario)?;
    for assessment in &assessments {
        tracing::info!(
            id = assessment.id.as_str(),
            model = %assessment.model,
            zone = assessment.zone,
            probability = assessment.probability,
            "負傷確率を評価しました"
        );
    }

    // CSV出力
    write_csv_file(output_path, &assessments)?;
    tracing::info!(path = output_path, rows = assessments.len(), "結果を書き出しました");

    Ok(())
}
