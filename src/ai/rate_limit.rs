use crate::error::ProviderError;

/// rate limit을 나타내는 stderr 문자열 (소문자 비교)
///
/// 래핑된 CLI들이 기계가 읽을 수 있는 신호를 주지 않기 때문에 문자열 휴리스틱을 사용합니다.
/// 외부 도구의 에러 문구가 바뀌면 오분류될 수 있습니다.
pub const RATE_LIMIT_INDICATORS: [&str; 5] = [
    "rate limit",
    "429",
    "too many requests",
    "usage limit",
    "quota exceeded",
];

/// stderr가 비어 있을 때 사용하는 메시지
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// 에러 메시지가 rate limit을 나타내는지 확인
pub fn is_rate_limit_error(error_msg: &str) -> bool {
    let error_lower = error_msg.to_lowercase();
    RATE_LIMIT_INDICATORS
        .iter()
        .any(|indicator| error_lower.contains(indicator))
}

/// 비정상 종료한 프로세스의 stderr를 분류
pub fn classify_failure(provider: &str, stderr: &str) -> ProviderError {
    let message = if stderr.is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        stderr.to_string()
    };

    if is_rate_limit_error(&message) {
        ProviderError::RateLimited {
            provider: provider.to_string(),
            message,
        }
    } else {
        ProviderError::Failed {
            provider: provider.to_string(),
            message,
        }
    }
}
