//! 面接サービスとの通信フォーマット
//!
//! リクエストはフォームエンコード、レスポンスはJSON（レポートのみバイナリPDF）。

use crate::error::{Error, Result};
use crate::session::SessionId;
use serde::{Deserialize, Serialize};

pub const START_ENDPOINT: &str = "/start_interview";
pub const ANSWER_ENDPOINT: &str = "/answer";
pub const REPORT_ENDPOINT: &str = "/download_report";

/// ダウンロードされるレポートのファイル名（候補者・セッションに依らず固定）
pub const REPORT_FILE_NAME: &str = "Excel_Report.pdf";

/// 完了判定に使う部分文字列
pub const COMPLETION_MARKER: &str = "Interview complete";

/// 開始リクエスト
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StartRequest {
    pub session_id: SessionId,
    pub candidate_name: String,
}

impl StartRequest {
    pub fn form_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("session_id", self.session_id.as_str()),
            ("candidate_name", self.candidate_name.as_str()),
        ]
    }
}

/// 回答リクエスト
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerRequest {
    pub session_id: SessionId,
    pub answer: String,
}

impl AnswerRequest {
    pub fn form_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("session_id", self.session_id.as_str()),
            ("answer", self.answer.as_str()),
        ]
    }
}

/// レポート取得リクエスト
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRequest {
    pub session_id: SessionId,
}

impl ReportRequest {
    pub fn form_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("session_id", self.session_id.as_str())]
    }
}

/// 開始レスポンス
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct StartReply {
    pub intro: String,
    #[serde(default)]
    pub total: Option<i64>,
    #[serde(default)]
    pub first_question: Option<String>,
}

/// 回答レスポンス（生の形）
///
/// 完了時は `message`、継続時は `progress` と `next_question` が入る。
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AnswerReply {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub progress: Option<i64>,
    #[serde(default)]
    pub next_question: Option<String>,
}

/// 回答レスポンスの判定結果
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerOutcome {
    /// 面接完了
    Completion { message: String },
    /// 次の設問へ（`next_question` が無い場合もある）
    Continuation { progress: i64, next_question: Option<String> },
}

impl AnswerReply {
    /// 完了/継続を判定
    ///
    /// `message` に "Interview complete" を含めば完了。
    /// それ以外で `progress` が無ければエラー。空文字の `next_question` は無しと同じ扱い。
    pub fn classify(self) -> Result<AnswerOutcome> {
        if let Some(message) = self.message {
            if message.contains(COMPLETION_MARKER) {
                return Ok(AnswerOutcome::Completion { message });
            }
        }
        let progress = self.progress.ok_or(Error::MissingField("progress"))?;
        Ok(AnswerOutcome::Continuation {
            progress,
            next_question: self.next_question.filter(|q| !q.is_empty()),
        })
    }
}

/// JSONレスポンスをパース
pub fn parse_reply<T: serde::de::DeserializeOwned>(body: &str) -> Result<T> {
    Ok(serde_json::from_str(body)?)
}
