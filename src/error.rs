use thiserror::Error;

/// 단일 provider 호출 실패
///
/// 체인은 이 에러를 밖으로 전파하지 않고 `InvokeResult.error`에 누적합니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// stderr에 rate limit 지표 문자열이 포함된 비정상 종료
    #[error("{provider} rate limit: {message}")]
    RateLimited { provider: String, message: String },

    /// rate limit이 아닌 비정상 종료, 실행 실패, 빈 응답
    #[error("{provider} failed: {message}")]
    Failed { provider: String, message: String },

    /// CLI 실행 파일을 찾을 수 없음
    #[error("{hint}")]
    NotInstalled { provider: String, hint: String },
}

impl ProviderError {
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }
}

#[derive(Error, Debug)]
pub enum DelegatorError {
    #[error("Agent '{0}' cannot be delegated to external providers. Implementation agents must run through the local task workflow.")]
    AgentNotAllowed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Unknown provider: {0} (supported: codex, gemini)")]
    UnknownProvider(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization/deserialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DelegatorError>;
