//! Interview Common Library
//!
//! CLIとWeb(WASM)で共有される面接クライアントの中核:
//! 状態機械・通信フォーマット・画面状態

pub mod client;
pub mod controller;
pub mod error;
pub mod progress;
pub mod protocol;
pub mod session;
pub mod view;

pub use client::{InterviewClient, InterviewTransport, SessionIdSource};
pub use controller::InterviewController;
pub use error::{Error, Result};
pub use progress::{Progress, DEFAULT_TOTAL};
pub use protocol::{
    AnswerOutcome, AnswerReply, AnswerRequest, ReportRequest, StartReply, StartRequest,
    REPORT_FILE_NAME,
};
pub use session::{normalize_candidate_name, SessionId};
pub use view::{CompletionPanel, Phase, QuestionCard, ViewState};
