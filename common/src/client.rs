//! 通信層を差し替え可能な面接クライアント
//!
//! `InterviewController` と `InterviewTransport` を組み合わせ、
//! start / submit_answer / download_report の3操作を提供する。
//! 失敗はそのまま呼び出し元へ返す（リトライしない）。

use crate::controller::InterviewController;
use crate::error::Result;
use crate::protocol::{AnswerReply, AnswerRequest, ReportRequest, StartReply, StartRequest};
use crate::session::SessionId;
use crate::view::ViewState;

/// 面接サービスへの通信
///
/// ブラウザ(fetch)とネイティブ(reqwest)で実装する。WASMのため `Send` は要求しない。
#[allow(async_fn_in_trait)]
pub trait InterviewTransport {
    async fn start_interview(&self, request: &StartRequest) -> Result<StartReply>;
    async fn answer(&self, request: &AnswerRequest) -> Result<AnswerReply>;
    async fn download_report(&self, request: &ReportRequest) -> Result<Vec<u8>>;
}

/// セッションIDの生成関数
pub type SessionIdSource = fn() -> SessionId;

pub struct InterviewClient<T> {
    transport: T,
    controller: InterviewController,
    next_session_id: SessionIdSource,
}

impl<T: InterviewTransport> InterviewClient<T> {
    pub fn new(transport: T, next_session_id: SessionIdSource) -> Self {
        Self {
            transport,
            controller: InterviewController::new(),
            next_session_id,
        }
    }

    pub fn controller(&self) -> &InterviewController {
        &self.controller
    }

    pub fn view(&self) -> &ViewState {
        self.controller.view()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// 面接を開始（毎回新しいセッションIDを生成）
    pub async fn start(&mut self, name: &str) -> Result<&ViewState> {
        let request = self.controller.begin_start(name, (self.next_session_id)())?;
        let reply = self.transport.start_interview(&request).await?;
        Ok(self.controller.apply_start(reply))
    }

    /// 回答を送信
    pub async fn submit_answer(&mut self, answer: &str) -> Result<&ViewState> {
        let request = self.controller.begin_answer(answer)?;
        let reply = self.transport.answer(&request).await?;
        self.controller.apply_answer(reply)
    }

    /// レポートPDFを取得（キャッシュしない）
    pub async fn download_report(&self) -> Result<Vec<u8>> {
        let request = self.controller.report_request()?;
        self.transport.download_report(&request).await
    }
}
