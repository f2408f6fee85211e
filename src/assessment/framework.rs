// src/assessment/framework.rs

use crate::assessment::InjuryAssessment;
use crate::config::{CoefficientError, CoefficientTable, Scenario};
use crate::math::angle::{is_canonical, normalize_angle};
use crate::models::impact_zone::{classify_complete, classify_reduced};
use crate::models::injury::{complete_probability, reduced_probability, InjuryModel};

/// シナリオ全体の負傷確率を評価する
///
/// # 引数
/// - `table`: 係数テーブル
/// - `scenario`: 衝突観測のリスト
///
/// # 戻り値
/// - 入力順の評価結果
/// - シナリオが使うモデルの係数が欠けていればエラー（部分的な結果は返さない）
pub fn assess_scenario(
    table: &CoefficientTable,
    scenario: &Scenario,
) -> Result<Vec<InjuryAssessment>, CoefficientError> {
    // 係数の検証はシナリオごとに一度だけ
    let complete = table.complete();
    let reduced = table.reduced();

    scenario
        .observations
        .iter()
        .map(|observation| -> Result<InjuryAssessment, CoefficientError> {
            // 分類の前に (-π, π] へ正規化する
            let angle = normalize_angle(observation.angle);
            if !is_canonical(observation.angle) {
                tracing::warn!(
                    id = observation.id.as_str(),
                    raw = observation.angle,
                    normalized = angle,
                    "衝突角を (-π, π] に正規化しました"
                );
            }

            let (zone, probability) = match observation.model {
                InjuryModel::Complete => {
                    let coefficients = complete.as_ref().map_err(Clone::clone)?;
                    (
                        classify_complete(angle).name(),
                        complete_probability(observation.delta_v, angle, coefficients),
                    )
                }
                InjuryModel::Reduced => {
                    let coefficients = reduced.as_ref().map_err(Clone::clone)?;
                    (
                        classify_reduced(angle).name(),
                        reduced_probability(observation.delta_v, angle, coefficients),
                    )
                }
            };

            Ok(InjuryAssessment {
                id: observation.id.clone(),
                model: observation.model,
                zone,
                delta_v: observation.delta_v,
                angle,
                probability,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::coefficients::COMPLETE_VARIANT;
    use crate::config::CrashObservation;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn reduced_only_table() -> CoefficientTable {
        let mut table = CoefficientTable::default();
        let reduced = &mut table.log_reg.reduced_angle_areas;
        reduced.insert("const".to_string(), -5.0);
        reduced.insert("speed".to_string(), 0.1);
        reduced.insert("driver_side".to_string(), 2.0);
        reduced.insert("right_side".to_string(), 1.0);
        reduced.insert("rear".to_string(), -1.0);
        table
    }

    fn observation(id: &str, delta_v: f64, angle: f64, model: InjuryModel) -> CrashObservation {
        CrashObservation {
            id: id.to_string(),
            delta_v,
            angle,
            model,
        }
    }

    #[test]
    fn test_assess_scenario_keeps_input_order() {
        let table = reduced_only_table();
        let scenario = Scenario {
            observations: vec![
                observation("side", 30.0, FRAC_PI_2, InjuryModel::Reduced),
                observation("front", 30.0, 0.0, InjuryModel::Reduced),
                observation("rear", 30.0, PI, InjuryModel::Reduced),
            ],
        };

        let assessments = assess_scenario(&table, &scenario).unwrap();

        assert_eq!(assessments.len(), 3);
        assert_eq!(assessments[0].id, "side");
        assert_eq!(assessments[0].zone, "driver_side");
        assert_eq!(assessments[0].probability, 0.5);
        assert_eq!(assessments[1].zone, "front");
        assert_eq!(assessments[2].zone, "rear");
    }

    #[test]
    fn test_unused_model_coefficients_are_not_required() {
        // 12分割モデルの係数が無くても4分割モデルだけなら評価できる
        let table = reduced_only_table();
        let scenario = Scenario {
            observations: vec![observation("a", 10.0, 0.2, InjuryModel::Reduced)],
        };
        assert!(assess_scenario(&table, &scenario).is_ok());
    }

    #[test]
    fn test_missing_coefficients_fail_before_evaluation() {
        let table = reduced_only_table();
        let scenario = Scenario {
            observations: vec![
                observation("a", 10.0, 0.2, InjuryModel::Reduced),
                observation("b", 10.0, 0.2, InjuryModel::Complete),
            ],
        };

        assert_eq!(
            assess_scenario(&table, &scenario),
            Err(CoefficientError::MissingCoefficient {
                variant: COMPLETE_VARIANT,
                key: "const",
            })
        );
    }

    #[test]
    fn test_out_of_range_angle_is_normalized() {
        let table = reduced_only_table();
        // 270° は -90°（右側）として扱う
        let scenario = Scenario {
            observations: vec![observation("wrap", 30.0, 3.0 * FRAC_PI_2, InjuryModel::Reduced)],
        };

        let assessments = assess_scenario(&table, &scenario).unwrap();

        assert_eq!(assessments[0].zone, "right_side");
        assert!((assessments[0].angle + FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_empty_scenario() {
        let scenario = Scenario {
            observations: Vec::new(),
        };
        assert_eq!(assess_scenario(&CoefficientTable::default(), &scenario), Ok(Vec::new()));
    }
}
