// src/math/logistic.rs

/// ロジスティック関数 `1 / (1 + exp(-z))`
///
/// `z` が大きな負の値で `exp(-z)` が無限大になっても結果は 0 に飽和し、
/// パニックも NaN も発生しない。
///
/// # 引数
/// - `z`: 線形予測子
///
/// # 戻り値
/// - 0 以上 1 以下の確率
pub fn logistic(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
