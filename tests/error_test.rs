//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use interview_client::error::InterviewClientError;

/// InterviewClientErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        InterviewClientError::Config("テスト設定エラー".to_string()),
        InterviewClientError::Prompt("入力が中断されました".to_string()),
        InterviewClientError::Common(interview_common::Error::NotStarted),
        InterviewClientError::Common(interview_common::Error::MissingField("progress")),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
    let err: InterviewClientError = io_err.into();

    assert!(matches!(err, InterviewClientError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: InterviewClientError = json_err.into();

    assert!(matches!(err, InterviewClientError::JsonParse(_)));
}

/// 共通エラーは透過的に表示される
#[test]
fn test_common_error_is_transparent() {
    let common_err = interview_common::Error::Service {
        status: 404,
        detail: "Report not found".to_string(),
    };
    let err: InterviewClientError = common_err.into();

    assert!(matches!(err, InterviewClientError::Common(_)));
    assert_eq!(format!("{}", err), "Interview service returned 404: Report not found");
}

/// anyhowへ渡してもメッセージが失われない
#[test]
fn test_error_into_anyhow_keeps_message() {
    let err: anyhow::Error = InterviewClientError::Config("URLが不正".to_string()).into();
    assert!(err.to_string().contains("URLが不正"));
}
