// src/math/angle.rs

use std::f64::consts::{PI, TAU};

// 衝突角の区間境界（ラジアン）。係数の校正時と同じ deg / 180 * π で計算する
pub const DEG_15: f64 = 15.0 / 180.0 * PI;
pub const DEG_45: f64 = 45.0 / 180.0 * PI;
pub const DEG_75: f64 = 75.0 / 180.0 * PI;
pub const DEG_105: f64 = 105.0 / 180.0 * PI;
pub const DEG_135: f64 = 135.0 / 180.0 * PI;
pub const DEG_165: f64 = 165.0 / 180.0 * PI;

/// 角度を (-π, π] の範囲に正規化する
///
/// # 引数
/// - `angle`: 角度（rad）
///
/// # 戻り値
/// - 正規化後の角度（rad）。`angle` が有限でない場合は NaN
pub fn normalize_angle(angle: f64) -> f64 {
    if angle > -PI && angle <= PI {
        return angle;
    }
    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

/// 角度が (-π, π] の範囲内にあるか判定する
pub fn is_canonical(angle: f64) -> bool {
    angle > -PI && angle <= PI
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_normalize_angle_in_range_is_untouched() {
        for angle in [0.0, 0.3, -1.2, PI, -PI + 1e-9] {
            assert_eq!(normalize_angle(angle), angle);
        }
    }

    #[test]
    fn test_normalize_angle_minus_pi_maps_to_pi() {
        assert_eq!(normalize_angle(-PI), PI);
    }

    #[test]
    fn test_normalize_angle_wraps_positive() {
        let normalized = normalize_angle(3.0 * FRAC_PI_2); // 270° -> -90°
        assert!((normalized + FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_angle_wraps_negative() {
        let normalized = normalize_angle(-3.0 * FRAC_PI_2); // -270° -> 90°
        assert!((normalized - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_angle_full_turns() {
        let normalized = normalize_angle(0.25 + 4.0 * TAU);
        assert!((normalized - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_angle_non_finite() {
        assert!(normalize_angle(f64::NAN).is_nan());
        assert!(normalize_angle(f64::INFINITY).is_nan());
    }

    #[test]
    fn test_sector_boundaries_in_degrees() {
        let expected = [15.0, 45.0, 75.0, 105.0, 135.0, 165.0];
        let actual = [DEG_15, DEG_45, DEG_75, DEG_105, DEG_135, DEG_165];
        for (deg, rad) in expected.iter().zip(actual.iter()) {
            assert!((rad.to_degrees() - deg).abs() < 1e-9);
        }
    }

    #[test]
    fn test_sector_boundaries_are_bit_exact() {
        let expected = [
            (15.0, DEG_15),
            (45.0, DEG_45),
            (75.0, DEG_75),
            (105.0, DEG_105),
            (135.0, DEG_135),
            (165.0, DEG_165),
        ];
        for (deg, rad) in expected {
            let reference: f64 = deg / 180.0 * PI;
            assert_eq!(rad.to_bits(), reference.to_bits(), "{}°", deg);
            assert_eq!(rad.to_bits(), f64::to_radians(deg).to_bits(), "{}°", deg);
        }
        assert_eq!(DEG_105, 1.8325957145940461);
    }

    #[test]
    fn test_is_canonical() {
        assert!(is_canonical(PI));
        assert!(!is_canonical(-PI));
        assert!(!is_canonical(4.0));
        assert!(!is_canonical(f64::NAN));
    }

    mod proptests {
        use super::super::*;
        use proptest::prelude::*;

        proptest! {
            /// 任意の有限角度は (-π, π] に収まる
            #[test]
            fn prop_normalize_angle_in_canonical_range(angle in -1000.0f64..1000.0f64) {
                let normalized = normalize_angle(angle);
                prop_assert!(is_canonical(normalized));
            }

            /// 正規化は方向を変えない
            #[test]
            fn prop_normalize_angle_preserves_direction(angle in -100.0f64..100.0f64) {
                let normalized = normalize_angle(angle);
                prop_assert!((normalized.sin() - angle.sin()).abs() < 1e-9);
                prop_assert!((normalized.cos() - angle.cos()).abs() < 1e-9);
            }
        }
    }
}
