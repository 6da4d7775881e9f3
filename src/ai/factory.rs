use crate::ai::{codex::CodexProvider, gemini::GeminiProvider, AiProvider, ModelTier, ProviderChain};
use crate::config::{Config, SKIPPABLE_AGENT};
use crate::error::{DelegatorError, Result};
use tracing::debug;

/// 에이전트용 기본 provider 체인 생성
///
/// 순서는 Codex(등급에 맞는 모델) → Gemini 이며, `code-reviewer`만 건너뛰기를 허용합니다.
///
/// # Examples
/// ```
/// use provider_delegator::ai::create_provider_chain;
///
/// let chain = create_provider_chain("high", "code-reviewer");
/// assert!(chain.allow_skip());
/// assert_eq!(chain.provider_names(), vec!["codex", "gemini"]);
/// ```
pub fn create_provider_chain(agent_model: &str, agent_name: &str) -> ProviderChain {
    let providers: Vec<Box<dyn AiProvider>> = vec![
        Box::new(CodexProvider::new(CodexProvider::map_model(agent_model))),
        Box::new(GeminiProvider::new()),
    ];

    ProviderChain::new(providers, agent_name == SKIPPABLE_AGENT)
}

/// Provider factory for creating AI providers based on the provider name
pub struct ProviderFactory;

impl ProviderFactory {
    /// 설정을 반영해 이름에 해당하는 provider 생성
    ///
    /// # Errors
    /// * Returns `DelegatorError::UnknownProvider` if the provider name is unknown
    pub fn create(provider_name: &str, tier: ModelTier, config: &Config) -> Result<Box<dyn AiProvider>> {
        match provider_name.to_lowercase().as_str() {
            "codex" => Ok(Box::new(
                CodexProvider::new(config.codex_models.for_tier(tier))
                    .with_command(config.codex_command.as_str()),
            )),
            "gemini" => Ok(Box::new(
                GeminiProvider::new()
                    .with_command(config.gemini_command.as_str())
                    .with_model(config.gemini_model.as_str()),
            )),
            _ => Err(DelegatorError::UnknownProvider(provider_name.to_string())),
        }
    }

    /// 설정의 provider 순서와 건너뛰기 목록으로 체인 생성
    pub fn from_config(config: &Config, agent_model: &str, agent_name: &str) -> Result<ProviderChain> {
        let tier = ModelTier::parse(agent_model);
        let providers = config
            .provider_order
            .iter()
            .map(|name| Self::create(name, tier, config))
            .collect::<Result<Vec<_>>>()?;

        let chain = ProviderChain::new(providers, config.is_skippable(agent_name));
        if chain.is_empty() {
            return Err(DelegatorError::ConfigError(
                "provider_order must list at least one provider".to_string(),
            ));
        }

        debug!(
            agent = agent_name,
            tier = %tier,
            providers = ?chain.provider_names(),
            allow_skip = chain.allow_skip(),
            "provider chain created"
        );
        Ok(chain)
    }

    /// `create`가 만들 수 있는 provider 이름
    pub const SUPPORTED: [&'static str; 2] = ["codex", "gemini"];

    /// 설정 파일의 provider_order 검증에 사용
    pub fn is_supported(provider_name: &str) -> bool {
        Self::SUPPORTED.contains(&provider_name.to_lowercase().as_str())
    }
}
