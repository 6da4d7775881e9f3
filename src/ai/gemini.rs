use crate::ai::AiProvider;
use async_trait::async_trait;

pub const GEMINI_COMMAND: &str = "gemini";
pub const GEMINI_MODEL: &str = "gemini-2.5-flash-preview";

/// `gemini -p <prompt> -m <model>`
///
/// 등급 매핑 없이 단일 모델만 사용합니다.
pub struct GeminiProvider {
    command: String,
    model: String,
}

impl GeminiProvider {
    pub fn new() -> Self {
        Self {
            command: GEMINI_COMMAND.to_string(),
            model: GEMINI_MODEL.to_string(),
        }
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

impl Default for GeminiProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AiProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn cli_command(&self) -> &str {
        &self.command
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn install_hint(&self) -> &str {
        "Gemini CLI not found. Install with: pip install gemini-cli"
    }

    fn build_args(&self, prompt: &str) -> Vec<String> {
        vec![
            "-p".to_string(),
            prompt.to_string(),
            "-m".to_string(),
            self.model.clone(),
        ]
    }
}
