//! セッションID・候補者名
//!
//! セッションIDは「ミリ秒タイムスタンプの36進表記」＋「乱数小数部の36進表記(最大6桁)」。
//! 時刻と乱数は呼び出し側（CLI/WASM）が供給する。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 候補者名が空のときの既定値
pub const DEFAULT_CANDIDATE_NAME: &str = "Candidate";

/// 乱数部の最大桁数
const RANDOM_SUFFIX_DIGITS: usize = 6;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// 面接セッションID（不透明な文字列）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// 既存のIDを包む（レポート再取得など）
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// 時刻と乱数からIDを生成
    ///
    /// # Arguments
    /// * `millis` - UNIXエポックからのミリ秒
    /// * `random` - [0, 1) の一様乱数
    pub fn from_parts(millis: u64, random: f64) -> Self {
        let mut id = to_base36(millis);
        id.push_str(&fraction_to_base36(random, RANDOM_SUFFIX_DIGITS));
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SessionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// 整数を36進表記に変換
pub fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

/// 小数部を36進表記に変換（先頭の "0." は含まない）
///
/// 小数部が途中で0になればそこで打ち切るため、`max_digits` より短くなることがある。
pub fn fraction_to_base36(value: f64, max_digits: usize) -> String {
    if !value.is_finite() {
        return String::new();
    }
    let mut fraction = value.fract().abs();
    let mut out = String::with_capacity(max_digits);
    while fraction > 0.0 && out.len() < max_digits {
        fraction *= 36.0;
        let digit = fraction.floor();
        out.push(BASE36_DIGITS[(digit as usize).min(35)] as char);
        fraction -= digit;
    }
    out
}

/// 入力された候補者名を送信用に整える（空白のみなら既定値）
pub fn normalize_candidate_name(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        DEFAULT_CANDIDATE_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}
