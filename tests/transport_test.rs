//! HTTPトランスポートの統合テスト
//!
//! `wiremock` のモックサーバーに対して、フォーム送信・JSON解析・
//! エラー伝播・レポート取得を検証する。

use interview_client::interview::download_session_report;
use interview_client::transport::HttpTransport;
use interview_common::{
    AnswerRequest, Error, InterviewClient, InterviewTransport, Phase, ReportRequest, SessionId,
    StartRequest,
};
use serde_json::json;
use tempfile::tempdir;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

fn fixed_session_id() -> SessionId {
    SessionId::new("lx1abc")
}

#[tokio::test]
async fn test_start_posts_form_and_parses_reply() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/start_interview"))
        .and(header("content-type", FORM_CONTENT_TYPE))
        .and(body_string_contains("session_id=lx1abc"))
        .and(body_string_contains("candidate_name=Ada+Lovelace"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "intro": "Hi",
            "total": 3,
            "first_question": "Q1?"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let transport = HttpTransport::new(server.uri());
    let reply = transport
        .start_interview(&StartRequest {
            session_id: fixed_session_id(),
            candidate_name: "Ada Lovelace".to_string(),
        })
        .await
        .expect("start should succeed");

    assert_eq!(reply.intro, "Hi");
    assert_eq!(reply.total, Some(3));
    assert_eq!(reply.first_question.as_deref(), Some("Q1?"));
}

#[tokio::test]
async fn test_answer_sends_empty_answer_field() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/answer"))
        .and(body_string_contains("answer="))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"progress": 2, "next_question": "Q2?"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let transport = HttpTransport::new(server.uri());
    let reply = transport
        .answer(&AnswerRequest { session_id: fixed_session_id(), answer: String::new() })
        .await
        .expect("answer should succeed");

    assert_eq!(reply.progress, Some(2));
    assert_eq!(reply.next_question.as_deref(), Some("Q2?"));
}

#[tokio::test]
async fn test_non_success_status_is_service_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/answer"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Session not found"})))
        .mount(&server)
        .await;

    let transport = HttpTransport::new(server.uri());
    let result = transport
        .answer(&AnswerRequest { session_id: fixed_session_id(), answer: "x".to_string() })
        .await;

    match result {
        Err(Error::Service { status, detail }) => {
            assert_eq!(status, 404);
            assert_eq!(detail, "Session not found");
        }
        other => panic!("expected service error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_json_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/start_interview"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let transport = HttpTransport::new(server.uri());
    let result = transport
        .start_interview(&StartRequest {
            session_id: fixed_session_id(),
            candidate_name: "Candidate".to_string(),
        })
        .await;

    assert!(matches!(result, Err(Error::Json(_))));
}

#[tokio::test]
async fn test_unreachable_service_is_transport_error() {
    // ポート1は通常閉じている
    let transport = HttpTransport::new("http://127.0.0.1:1");
    let result = transport
        .download_report(&ReportRequest { session_id: fixed_session_id() })
        .await;

    assert!(matches!(result, Err(Error::Transport(_))));
}

#[tokio::test]
async fn test_download_report_returns_raw_bytes() {
    let server = MockServer::start().await;
    let pdf = b"%PDF-1.4\n%\xe2\xe3\xcf\xd3\n".to_vec();

    Mock::given(method("POST"))
        .and(path("/download_report"))
        .and(body_string_contains("session_id=lx1abc"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(pdf.clone(), "application/pdf"))
        .mount(&server)
        .await;

    let transport = HttpTransport::new(server.uri());
    let bytes = transport
        .download_report(&ReportRequest { session_id: fixed_session_id() })
        .await
        .expect("download should succeed");
    assert_eq!(bytes, pdf);

    let dir = tempdir().expect("Failed to create temp dir");
    let saved = download_session_report(&transport, fixed_session_id(), dir.path())
        .await
        .expect("save should succeed");
    assert_eq!(saved.file_name().unwrap(), "Excel_Report.pdf");
    assert_eq!(std::fs::read(saved).unwrap(), pdf);
}

/// 開始 → 回答 → 完了 → レポート2回取得 の一連の流れ
#[tokio::test]
async fn test_full_interview_against_mock_service() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/start_interview"))
        .and(body_string_contains("candidate_name=Candidate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "intro": "Hi",
            "total": 3,
            "first_question": "Q1?"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/answer"))
        .and(body_string_contains("answer=first"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"progress": 2, "next_question": "Q2?"})),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/answer"))
        .and(body_string_contains("answer=second"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Interview complete. Thanks."})),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/download_report"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(b"%PDF".to_vec(), "application/pdf"))
        .expect(2)
        .mount(&server)
        .await;

    let mut client = InterviewClient::new(HttpTransport::new(server.uri()), fixed_session_id);

    let view = client.start("   ").await.expect("start");
    assert_eq!(view.question.as_ref().unwrap().heading(), "Q1 of 3");
    assert_eq!(view.progress_width(), "0%");

    let view = client.submit_answer("first").await.expect("answer 1");
    assert_eq!(view.question.as_ref().unwrap().heading(), "Q2 of 3");
    assert_eq!(view.progress_width(), "33%");

    let view = client.submit_answer("second").await.expect("answer 2");
    assert_eq!(view.phase, Phase::Complete);
    assert_eq!(view.progress_width(), "100%");
    assert!(view.completion.is_some());

    assert_eq!(client.download_report().await.expect("download 1"), b"%PDF");
    assert_eq!(client.download_report().await.expect("download 2"), b"%PDF");
}
