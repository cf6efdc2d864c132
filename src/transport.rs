//! 面接サービスへのHTTP通信（reqwest）
//!
//! タイムアウト・リトライは設けない。2xx以外はそのままエラーにする。

use interview_common::protocol::{
    parse_reply, ANSWER_ENDPOINT, REPORT_ENDPOINT, START_ENDPOINT,
};
use interview_common::{
    AnswerReply, AnswerRequest, Error, InterviewTransport, ReportRequest, Result, SessionId,
    StartReply, StartRequest,
};
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// フォームをPOSTし、2xxのレスポンスだけを返す
    async fn post_form<F: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        form: &F,
    ) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%url, "POST");

        let response = self
            .client
            .post(&url)
            .form(form)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::service(status.as_u16(), &body));
        }
        Ok(response)
    }

    async fn post_json<F: Serialize + ?Sized, T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        form: &F,
    ) -> Result<T> {
        let body = self
            .post_form(endpoint, form)
            .await?
            .text()
            .await
            .map_err(transport_error)?;
        parse_reply(&body)
    }
}

impl InterviewTransport for HttpTransport {
    async fn start_interview(&self, request: &StartRequest) -> Result<StartReply> {
        self.post_json(START_ENDPOINT, request).await
    }

    async fn answer(&self, request: &AnswerRequest) -> Result<AnswerReply> {
        self.post_json(ANSWER_ENDPOINT, request).await
    }

    async fn download_report(&self, request: &ReportRequest) -> Result<Vec<u8>> {
        let bytes = self
            .post_form(REPORT_ENDPOINT, request)
            .await?
            .bytes()
            .await
            .map_err(transport_error)?;
        debug!(size = bytes.len(), "report received");
        Ok(bytes.to_vec())
    }
}

fn transport_error(err: reqwest::Error) -> Error {
    Error::Transport(err.to_string())
}

/// 現在時刻と乱数から新しいセッションIDを作る
pub fn fresh_session_id() -> SessionId {
    let millis = chrono::Utc::now().timestamp_millis().max(0) as u64;
    SessionId::from_parts(millis, rand::random::<f64>())
}
