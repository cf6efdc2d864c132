use thiserror::Error;

#[derive(Error, Debug)]
pub enum InterviewClientError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] interview_common::Error),
}

impl From<dialoguer::Error> for InterviewClientError {
    fn from(err: dialoguer::Error) -> Self {
        InterviewClientError::Prompt(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, InterviewClientError>;
