//! 進捗状態と進捗率の計算
//!
//! サービスは1始まりの進捗を返し、クライアントは0始まりの位置として保持する。
//! 進捗率は丸め以外の補正をしない（total=0 なら NaN/∞ になる）。

use serde::{Deserialize, Serialize};

/// 開始レスポンスに total が無い場合の設問数
pub const DEFAULT_TOTAL: i64 = 20;

/// 進捗状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// 表示中（または直前に回答した）設問の0始まり位置
    pub current_index: i64,
    /// 設問総数
    pub total: i64,
}

impl Default for Progress {
    fn default() -> Self {
        Self { current_index: 0, total: DEFAULT_TOTAL }
    }
}

impl Progress {
    /// 開始レスポンスの total から初期状態を作る
    ///
    /// total が無い・0 の場合は既定値20。
    pub fn started(total: Option<i64>) -> Self {
        Self {
            current_index: 0,
            total: total.filter(|t| *t != 0).unwrap_or(DEFAULT_TOTAL),
        }
    }

    /// サービスの1始まり進捗を反映
    pub fn advance_to(&mut self, service_progress: i64) {
        self.current_index = service_progress - 1;
    }

    /// 進捗率（%）
    pub fn percent(&self) -> f64 {
        percent_of(self.current_index, self.total)
    }

    /// 表示中設問の1始まり番号
    pub fn ordinal(&self) -> i64 {
        self.current_index + 1
    }
}

/// `round(current / total * 100)`
pub fn percent_of(current: i64, total: i64) -> f64 {
    round_half_up(current as f64 / total as f64 * 100.0)
}

/// 0.5 を +∞ 方向へ丸める（NaN/∞ はそのまま）
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// CSS の width 値として整形（"33%" / "NaN%" / "Infinity%"）
pub fn css_width(percent: f64) -> String {
    if percent.is_nan() {
        "NaN%".to_string()
    } else if percent.is_infinite() {
        if percent > 0.0 {
            "Infinity%".to_string()
        } else {
            "-Infinity%".to_string()
        }
    } else {
        format!("{}%", percent)
    }
}
