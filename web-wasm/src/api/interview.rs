//! 面接サービス連携（fetch）
//!
//! ページと同一オリジンの3エンドポイントへフォームをPOSTする。
//! タイムアウト・リトライは設けない。

use interview_common::protocol::{
    parse_reply, ANSWER_ENDPOINT, REPORT_ENDPOINT, START_ENDPOINT,
};
use interview_common::{
    AnswerReply, AnswerRequest, Error, InterviewTransport, ReportRequest, Result, SessionId,
    StartReply, StartRequest,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response, UrlSearchParams};

/// fetch APIによるトランスポート
#[derive(Clone, Default)]
pub struct FetchTransport {
    /// 空文字なら同一オリジン
    base_url: String,
}

impl FetchTransport {
    pub fn same_origin() -> Self {
        Self::default()
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// フォームをPOSTし、2xxのレスポンスだけを返す
    async fn post_form(&self, endpoint: &str, fields: &[(&str, &str)]) -> Result<Response> {
        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_body(&JsValue::from(form_body(fields)?));

        let request = Request::new_with_str_and_init(&self.endpoint_url(endpoint), &opts)
            .map_err(js_error)?;

        let window = web_sys::window()
            .ok_or_else(|| Error::Transport("window is not available".to_string()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?;
        let resp: Response = resp_value.dyn_into().map_err(js_error)?;

        if !resp.ok() {
            let body = response_text(&resp).await.unwrap_or_default();
            return Err(Error::service(resp.status(), &body));
        }
        Ok(resp)
    }
}

impl InterviewTransport for FetchTransport {
    async fn start_interview(&self, request: &StartRequest) -> Result<StartReply> {
        let resp = self.post_form(START_ENDPOINT, &request.form_fields()).await?;
        parse_reply(&response_text(&resp).await?)
    }

    async fn answer(&self, request: &AnswerRequest) -> Result<AnswerReply> {
        let resp = self.post_form(ANSWER_ENDPOINT, &request.form_fields()).await?;
        parse_reply(&response_text(&resp).await?)
    }

    async fn download_report(&self, request: &ReportRequest) -> Result<Vec<u8>> {
        let resp = self.post_form(REPORT_ENDPOINT, &request.form_fields()).await?;
        let buffer = JsFuture::from(resp.array_buffer().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        Ok(js_sys::Uint8Array::new(&buffer).to_vec())
    }
}

/// フォーム本文（application/x-www-form-urlencoded）
pub fn form_body(fields: &[(&str, &str)]) -> Result<UrlSearchParams> {
    let params = UrlSearchParams::new().map_err(js_error)?;
    for (key, value) in fields {
        params.append(key, value);
    }
    Ok(params)
}

async fn response_text(resp: &Response) -> Result<String> {
    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    text.as_string()
        .ok_or_else(|| Error::Transport("response body is not text".to_string()))
}

/// JavaScript側の例外を共通エラーへ
pub fn js_error(value: JsValue) -> Error {
    Error::Transport(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}

/// ブラウザの時刻と乱数から新しいセッションIDを作る
pub fn fresh_session_id() -> SessionId {
    SessionId::from_parts(js_sys::Date::now() as u64, js_sys::Math::random())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_origin_endpoint() {
        let transport = FetchTransport::same_origin();
        assert_eq!(transport.endpoint_url(START_ENDPOINT), "/start_interview");
    }

    #[test]
    fn test_base_url_endpoint() {
        let transport = FetchTransport::with_base_url("http://localhost:8000/");
        assert_eq!(transport.endpoint_url(ANSWER_ENDPOINT), "http://localhost:8000/answer");
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_form_body_encodes_fields() {
        let request = AnswerRequest {
            session_id: SessionId::new("s1"),
            answer: "use SUM()".to_string(),
        };
        let body = form_body(&request.form_fields()).expect("form body");
        assert_eq!(String::from(body.to_string()), "session_id=s1&answer=use+SUM%28%29");
    }

    #[wasm_bindgen_test]
    fn wasm_fresh_session_id_is_not_empty() {
        let a = fresh_session_id();
        let b = fresh_session_id();
        assert!(!a.as_str().is_empty());
        assert_ne!(a, b);
    }
}
