//! 画面状態
//!
//! DOMを直接操作せず、各操作の結果をこの値として返す。
//! 描画側（WASM/CLI）はこれを見て表示を更新する。

use crate::progress::css_width;
use serde::Serialize;

pub const THANK_YOU_MESSAGE: &str = "✅ Thank you for completing the interview!";
pub const DOWNLOAD_LABEL: &str = "📥 Download Your Report";

/// 画面フェーズ（PreStart → InProgress → Complete、逆戻りなし）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Phase {
    #[default]
    PreStart,
    InProgress,
    Complete,
}

/// 設問カード
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionCard {
    /// 1始まりの設問番号
    pub ordinal: i64,
    pub total: i64,
    pub text: String,
}

impl QuestionCard {
    /// "Q2 of 3"
    pub fn heading(&self) -> String {
        format!("Q{} of {}", self.ordinal, self.total)
    }
}

/// 完了パネル
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionPanel {
    pub message: String,
    pub download_label: String,
}

impl Default for CompletionPanel {
    fn default() -> Self {
        Self {
            message: THANK_YOU_MESSAGE.to_string(),
            download_label: DOWNLOAD_LABEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    pub phase: Phase,
    pub intro: Option<String>,
    pub progress_visible: bool,
    pub progress_percent: f64,
    pub question: Option<QuestionCard>,
    pub start_visible: bool,
    pub completion: Option<CompletionPanel>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            phase: Phase::PreStart,
            intro: None,
            progress_visible: false,
            progress_percent: 0.0,
            question: None,
            start_visible: true,
            completion: None,
        }
    }
}

impl ViewState {
    /// 進捗バーの width 値
    pub fn progress_width(&self) -> String {
        css_width(self.progress_percent)
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }
}
