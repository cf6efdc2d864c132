//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(String),

    /// 2xx以外のレスポンス
    #[error("Interview service returned {status}: {detail}")]
    Service { status: u16, detail: String },

    #[error("Response is missing field `{0}`")]
    MissingField(&'static str),

    #[error("Interview has not been started")]
    NotStarted,

    #[error("Interview has already been started")]
    AlreadyStarted,

    #[error("Interview is already complete")]
    AlreadyComplete,
}

impl Error {
    /// エラーレスポンス本文から `Service` エラーを組み立てる
    ///
    /// FastAPI形式の `{"detail": "..."}` があればそれを、なければ本文をそのまま使う。
    pub fn service(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_string))
            .unwrap_or_else(|| body.trim().to_string());
        Error::Service { status, detail }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
