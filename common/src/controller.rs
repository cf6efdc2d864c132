//! 面接コントローラ（通信を持たない状態機械）
//!
//! 各操作はネットワーク呼び出しの前後で2つに分かれる:
//! - `begin_*`: リクエストを組み立てる（呼び出し前に書く状態もここで書く）
//! - `apply_*`: レスポンスを反映して `ViewState` を返す
//!
//! 状態はレスポンス処理でのみ更新される。多重送信の抑止はしない。

use crate::error::{Error, Result};
use crate::progress::Progress;
use crate::protocol::{
    AnswerOutcome, AnswerReply, AnswerRequest, ReportRequest, StartReply, StartRequest,
};
use crate::session::{normalize_candidate_name, SessionId};
use crate::view::{CompletionPanel, Phase, QuestionCard, ViewState};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct InterviewController {
    session_id: Option<SessionId>,
    progress: Progress,
    view: ViewState,
}

impl InterviewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session_id(&self) -> Option<&SessionId> {
        self.session_id.as_ref()
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn phase(&self) -> Phase {
        self.view.phase
    }

    /// 開始リクエストを作る
    ///
    /// セッションIDはレスポンスを待たずにここで保持する。
    /// 開始後は開始ボタンが消えるため、PreStart以外ではエラー。
    pub fn begin_start(&mut self, name: &str, session_id: SessionId) -> Result<StartRequest> {
        if self.view.phase != Phase::PreStart {
            return Err(Error::AlreadyStarted);
        }
        self.session_id = Some(session_id.clone());
        Ok(StartRequest {
            session_id,
            candidate_name: normalize_candidate_name(name),
        })
    }

    /// 開始レスポンスを反映
    pub fn apply_start(&mut self, reply: StartReply) -> &ViewState {
        self.progress = Progress::started(reply.total);
        debug!(
            session_id = ?self.session_id,
            total = self.progress.total,
            "interview started"
        );

        self.view.intro = Some(reply.intro);
        self.view.progress_visible = true;
        self.view.progress_percent = self.progress.percent();
        self.view.question = Some(self.card(reply.first_question.unwrap_or_default()));
        self.view.start_visible = false;
        self.view.phase = Phase::InProgress;
        &self.view
    }

    /// 回答リクエストを作る（回答内容の検証はしない）
    pub fn begin_answer(&self, answer: &str) -> Result<AnswerRequest> {
        match self.view.phase {
            Phase::PreStart => Err(Error::NotStarted),
            Phase::Complete => Err(Error::AlreadyComplete),
            Phase::InProgress => {
                let session_id = self.session_id.clone().ok_or(Error::NotStarted)?;
                Ok(AnswerRequest { session_id, answer: answer.to_string() })
            }
        }
    }

    /// 回答レスポンスを反映
    ///
    /// 完了でも次の設問でもない場合（`next_question` 無し）は進捗だけ更新し、
    /// 直前の設問カードをそのまま残す。
    pub fn apply_answer(&mut self, reply: AnswerReply) -> Result<&ViewState> {
        match reply.classify()? {
            AnswerOutcome::Completion { message } => {
                debug!(session_id = ?self.session_id, %message, "interview complete");
                self.view.question = None;
                self.view.completion = Some(CompletionPanel::default());
                self.view.progress_percent = 100.0;
                self.view.phase = Phase::Complete;
            }
            AnswerOutcome::Continuation { progress, next_question } => {
                self.progress.advance_to(progress);
                self.view.progress_percent = self.progress.percent();
                debug!(
                    current_index = self.progress.current_index,
                    total = self.progress.total,
                    has_next = next_question.is_some(),
                    "answer accepted"
                );
                if let Some(text) = next_question {
                    self.view.question = Some(self.card(text));
                }
            }
        }
        Ok(&self.view)
    }

    /// レポート取得リクエストを作る
    ///
    /// 完了パネルからのみ呼ばれる想定だが、フェーズでは制限しない。
    pub fn report_request(&self) -> Result<ReportRequest> {
        let session_id = self.session_id.clone().ok_or(Error::NotStarted)?;
        Ok(ReportRequest { session_id })
    }

    fn card(&self, text: String) -> QuestionCard {
        QuestionCard {
            ordinal: self.progress.ordinal(),
            total: self.progress.total,
            text,
        }
    }
}
