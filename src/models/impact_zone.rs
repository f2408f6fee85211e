// src/models/impact_zone.rs

use std::fmt;

use crate::math::angle::{DEG_105, DEG_135, DEG_15, DEG_165, DEG_45, DEG_75};

/// 12分割モデルの衝突区分
///
/// 正面（基準区分）と 30° 幅の11区分。番号は時計の文字盤に対応し、
/// 正面が 12 時、真後ろが `Imp6`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImpactZone {
    Front,
    Imp1,
    Imp2,
    Imp3,
    Imp4,
    Imp5,
    Imp6,
    Imp7,
    Imp8,
    Imp9,
    Imp10,
    Imp11,
}

impl ImpactZone {
    /// 係数テーブルに現れる全区分（基準区分を除く）
    pub const OFFSET_ZONES: [ImpactZone; 11] = [
        ImpactZone::Imp1,
        ImpactZone::Imp2,
        ImpactZone::Imp3,
        ImpactZone::Imp4,
        ImpactZone::Imp5,
        ImpactZone::Imp6,
        ImpactZone::Imp7,
        ImpactZone::Imp8,
        ImpactZone::Imp9,
        ImpactZone::Imp10,
        ImpactZone::Imp11,
    ];

    /// 区分番号（1〜11）。基準区分は `None`
    pub fn number(self) -> Option<usize> {
        match self {
            ImpactZone::Front => None,
            ImpactZone::Imp1 => Some(1),
            ImpactZone::Imp2 => Some(2),
            ImpactZone::Imp3 => Some(3),
            ImpactZone::Imp4 => Some(4),
            ImpactZone::Imp5 => Some(5),
            ImpactZone::Imp6 => Some(6),
            ImpactZone::Imp7 => Some(7),
            ImpactZone::Imp8 => Some(8),
            ImpactZone::Imp9 => Some(9),
            ImpactZone::Imp10 => Some(10),
            ImpactZone::Imp11 => Some(11),
        }
    }

    /// 係数テーブルのキー。基準区分はオフセットを持たないため `None`
    pub fn key(self) -> Option<&'static str> {
        match self {
            ImpactZone::Front => None,
            ImpactZone::Imp1 => Some("Imp_1"),
            ImpactZone::Imp2 => Some("Imp_2"),
            ImpactZone::Imp3 => Some("Imp_3"),
            ImpactZone::Imp4 => Some("Imp_4"),
            ImpactZone::Imp5 => Some("Imp_5"),
            ImpactZone::Imp6 => Some("Imp_6"),
            ImpactZone::Imp7 => Some("Imp_7"),
            ImpactZone::Imp8 => Some("Imp_8"),
            ImpactZone::Imp9 => Some("Imp_9"),
            ImpactZone::Imp10 => Some("Imp_10"),
            ImpactZone::Imp11 => Some("Imp_11"),
        }
    }

    pub fn name(self) -> &'static str {
        self.key().unwrap_or("front")
    }
}

impl fmt::Display for ImpactZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 4分割モデルの衝突区分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReducedZone {
    Front,
    DriverSide,
    RightSide,
    Rear,
}

impl ReducedZone {
    /// 係数テーブルに現れる全区分（基準区分を除く）
    pub const OFFSET_ZONES: [ReducedZone; 3] = [
        ReducedZone::DriverSide,
        ReducedZone::RightSide,
        ReducedZone::Rear,
    ];

    /// 係数テーブルのキー。基準区分は `None`
    pub fn key(self) -> Option<&'static str> {
        match self {
            ReducedZone::Front => None,
            ReducedZone::DriverSide => Some("driver_side"),
            ReducedZone::RightSide => Some("right_side"),
            ReducedZone::Rear => Some("rear"),
        }
    }

    pub fn name(self) -> &'static str {
        self.key().unwrap_or("front")
    }
}

impl fmt::Display for ReducedZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// 正面から外側へ向かう30°幅の区間 [lo, hi) と、正側・負側それぞれの区分。
// 負側は鏡像の (-hi, -lo] で判定する。
const COMPLETE_SECTORS: [(f64, f64, ImpactZone, ImpactZone); 5] = [
    (DEG_15, DEG_45, ImpactZone::Imp11, ImpactZone::Imp1),
    (DEG_45, DEG_75, ImpactZone::Imp10, ImpactZone::Imp2),
    (DEG_75, DEG_105, ImpactZone::Imp9, ImpactZone::Imp3),
    (DEG_105, DEG_135, ImpactZone::Imp8, ImpactZone::Imp4),
    (DEG_135, DEG_165, ImpactZone::Imp7, ImpactZone::Imp5),
];

/// 衝突角を12分割モデルの区分に分類する
///
/// 正面区分は開区間 (-15°, 15°)。正側の区間は下端を含み、負側の区間は
/// 上端（絶対値の小さい側）を含む。どの区間にも入らない角度（|angle| ≥ 165°）は
/// 真後ろの `Imp6` になる。
///
/// # 引数
/// - `angle`: 衝突角（rad）。(-π, π] に正規化済みであること
///
/// # 戻り値
/// - 衝突区分。範囲外の角度や NaN は `Imp6` に落ちる
pub fn classify_complete(angle: f64) -> ImpactZone {
    if -DEG_15 < angle && angle < DEG_15 {
        return ImpactZone::Front;
    }
    for (lo, hi, positive, negative) in COMPLETE_SECTORS {
        if lo <= angle && angle < hi {
            return positive;
        }
        if -lo >= angle && angle > -hi {
            return negative;
        }
    }
    ImpactZone::Imp6
}

/// 衝突角を4分割モデルの区分に分類する
///
/// # 引数
/// - `angle`: 衝突角（rad）。(-π, π] に正規化済みであること
///
/// # 戻り値
/// - 正面 (-45°, 45°)、運転席側 [45°, 135°)、右側 (-135°, -45°]、それ以外は後方
pub fn classify_reduced(angle: f64) -> ReducedZone {
    if -DEG_45 < angle && angle < DEG_45 {
        ReducedZone::Front
    } else if DEG_45 <= angle && angle < DEG_135 {
        ReducedZone::DriverSide
    } else if -DEG_45 >= angle && angle > -DEG_135 {
        ReducedZone::RightSide
    } else {
        ReducedZone::Rear
    }
}
