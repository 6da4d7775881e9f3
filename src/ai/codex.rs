use crate::ai::{AiProvider, ModelTier};
use async_trait::async_trait;

pub const CODEX_COMMAND: &str = "codex";

/// 등급별 Codex 모델
pub const CODEX_LOW_MODEL: &str = "gpt-5.1-codex-mini";
pub const CODEX_MID_MODEL: &str = "gpt-5.2-codex";
pub const CODEX_HIGH_MODEL: &str = "gpt-5.1-codex-max";

pub const DEFAULT_CODEX_MODEL: &str = CODEX_MID_MODEL;

/// `codex exec -m <model> --sandbox workspace-write <prompt>`
pub struct CodexProvider {
    command: String,
    model: String,
}

impl CodexProvider {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            command: CODEX_COMMAND.to_string(),
            model: model.into(),
        }
    }

    /// 다른 이름이나 절대 경로의 실행 파일 사용
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    /// 에이전트가 선호하는 등급을 Codex 모델로 변환
    ///
    /// 알 수 없는 등급은 mid 모델을 사용합니다.
    pub fn map_model(agent_model: &str) -> &'static str {
        Self::model_for_tier(ModelTier::parse(agent_model))
    }

    pub fn model_for_tier(tier: ModelTier) -> &'static str {
        match tier {
            ModelTier::Low => CODEX_LOW_MODEL,
            ModelTier::Mid => CODEX_MID_MODEL,
            ModelTier::High => CODEX_HIGH_MODEL,
        }
    }
}

impl Default for CodexProvider {
    fn default() -> Self {
        Self::new(DEFAULT_CODEX_MODEL)
    }
}

#[async_trait]
impl AiProvider for CodexProvider {
    fn name(&self) -> &str {
        "codex"
    }

    fn cli_command(&self) -> &str {
        &self.command
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn install_hint(&self) -> &str {
        "Codex CLI not found. Install with: codex login"
    }

    fn build_args(&self, prompt: &str) -> Vec<String> {
        vec![
            "exec".to_string(),
            "-m".to_string(),
            self.model.clone(),
            "--sandbox".to_string(),
            "workspace-write".to_string(),
            prompt.to_string(),
        ]
    }
}
