pub mod chain;
pub mod codex;
pub mod factory;
pub mod gemini;
pub mod prompt_template;
pub mod rate_limit;

use crate::error::ProviderError;
use crate::executor::CommandRunner;
use async_trait::async_trait;
use std::fmt;
use std::io::ErrorKind;
use tracing::info;

pub use chain::{InvokeResult, ProviderChain};
pub use codex::CodexProvider;
pub use factory::{create_provider_chain, ProviderFactory};
pub use gemini::GeminiProvider;

/// 추상 모델 등급 ("low" / "mid" / "high")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModelTier {
    Low,
    #[default]
    Mid,
    High,
}

impl ModelTier {
    /// 등급 문자열 파싱. 알 수 없는 값은 `Mid`로 처리합니다.
    ///
    /// 에이전트 정의 파일에서 쓰이는 haiku / sonnet / opus 별칭도 허용합니다.
    /// 대소문자를 구분하므로 "HIGH"는 알 수 없는 값입니다.
    pub fn parse(tier: &str) -> Self {
        match tier {
            "low" | "haiku" => Self::Low,
            "high" | "opus" => Self::High,
            _ => Self::Mid,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Mid => "mid",
            Self::High => "high",
        }
    }
}

impl fmt::Display for ModelTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// AI provider trait for extensible CLI integration
///
/// 각 구현체는 명령줄 형태와 모델 이름만 다르며, 실행과 실패 분류는
/// 기본 `invoke` 구현을 공유합니다.
#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Provider name (e.g., "codex", "gemini")
    fn name(&self) -> &str;

    /// CLI command name or path
    fn cli_command(&self) -> &str;

    /// Concrete model identifier passed to the CLI
    fn model(&self) -> &str;

    /// Remediation hint shown when the CLI cannot be launched
    fn install_hint(&self) -> &str;

    /// Arguments for a single invocation with the given prompt
    fn build_args(&self, prompt: &str) -> Vec<String>;

    /// Run the CLI once and return its trimmed stdout
    async fn invoke(&self, prompt: &str) -> Result<String, ProviderError> {
        info!(provider = self.name(), model = self.model(), "invoking provider");

        let output = CommandRunner::new()
            .capture(self.cli_command(), &self.build_args(prompt))
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => ProviderError::NotInstalled {
                    provider: self.name().to_string(),
                    hint: self.install_hint().to_string(),
                },
                _ => ProviderError::Failed {
                    provider: self.name().to_string(),
                    message: e.to_string(),
                },
            })?;

        if !output.success() {
            return Err(rate_limit::classify_failure(self.name(), &output.stderr));
        }

        let response = output.stdout.trim().to_string();
        if response.is_empty() {
            return Err(ProviderError::Failed {
                provider: self.name().to_string(),
                message: "returned an empty response".to_string(),
            });
        }

        info!(
            provider = self.name(),
            length = response.chars().count(),
            "provider responded"
        );
        Ok(response)
    }
}
