use crate::ai::prompt_template::PromptTemplate;
use crate::ai::AiProvider;
use crate::error::ProviderError;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

/// 모든 provider가 실패했지만 건너뛰기가 허용된 경우의 응답
pub const SKIP_RESPONSE: &str = "SKIPPED: All providers rate limited. Task skipped.";

pub const SKIP_PROVIDER: &str = "skip";
pub const NO_PROVIDER: &str = "none";

/// 체인 호출 결과
///
/// - 성공: `response`는 provider 응답, `error`는 없음
/// - 건너뜀: `success`는 true, `response`는 [`SKIP_RESPONSE`], `error`에 provider별 실패 요약
/// - 실패: `success`는 false, `response`는 빈 문자열, `error`는 "All providers failed: ..."
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvokeResult {
    pub success: bool,
    pub response: String,
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl InvokeResult {
    pub fn succeeded(provider: &str, response: String) -> Self {
        Self {
            success: true,
            response,
            provider: provider.to_string(),
            error: None,
        }
    }

    pub fn skipped(errors: &[String]) -> Self {
        Self {
            success: true,
            response: SKIP_RESPONSE.to_string(),
            provider: SKIP_PROVIDER.to_string(),
            error: Some(errors.join("; ")),
        }
    }

    pub fn failed(errors: &[String]) -> Self {
        Self {
            success: false,
            response: String::new(),
            provider: NO_PROVIDER.to_string(),
            error: Some(format!("All providers failed: {}", errors.join("; "))),
        }
    }

    pub fn is_skipped(&self) -> bool {
        self.success && self.provider == SKIP_PROVIDER
    }
}

/// 순서대로 provider를 시도하는 fallback 체인
///
/// 첫 번째 성공 응답을 즉시 반환합니다. 개별 실패는 에러로 전파하지 않고
/// 결과의 `error` 필드에 누적됩니다.
pub struct ProviderChain {
    providers: Vec<Box<dyn AiProvider>>,
    allow_skip: bool,
}

impl ProviderChain {
    /// # Arguments
    /// * `providers` - 시도할 provider 목록 (순서가 곧 우선순위)
    /// * `allow_skip` - 모두 실패했을 때 실패 대신 건너뜀 결과를 반환할지 여부
    pub fn new(providers: Vec<Box<dyn AiProvider>>, allow_skip: bool) -> Self {
        Self {
            providers,
            allow_skip,
        }
    }

    pub fn allow_skip(&self) -> bool {
        self.allow_skip
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub async fn invoke(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        task_id: Option<&str>,
    ) -> InvokeResult {
        let combined_prompt = PromptTemplate::combine(system_prompt, user_prompt, task_id);
        let mut errors = Vec::new();

        for provider in &self.providers {
            info!(provider = provider.name(), "trying provider");

            match provider.invoke(&combined_prompt).await {
                Ok(response) => return InvokeResult::succeeded(provider.name(), response),
                Err(e) if e.is_rate_limited() => {
                    warn!(provider = provider.name(), "rate limited: {}", e);
                    errors.push(format!("{}: rate limited", provider.name()));
                }
                Err(e) => {
                    error!(provider = provider.name(), "failed: {}", e);
                    errors.push(format!("{}: {}", provider.name(), e));
                }
            }
        }

        if self.allow_skip {
            warn!("all providers failed, skipping task");
            return InvokeResult::skipped(&errors);
        }

        InvokeResult::failed(&errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    enum Outcome {
        Respond(&'static str),
        RateLimited,
        Fail(&'static str),
        Missing,
    }

    /// 미리 정한 결과를 반환하고 호출 기록을 남기는 provider
    struct ScriptedProvider {
        name: &'static str,
        outcome: Outcome,
        calls: Arc<AtomicUsize>,
        prompts: Arc<Mutex<Vec<String>>>,
    }

    impl ScriptedProvider {
        fn new(name: &'static str, outcome: Outcome) -> Self {
            Self {
                name,
                outcome,
                calls: Arc::new(AtomicUsize::new(0)),
                prompts: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl AiProvider for ScriptedProvider {
        fn name(&self) -> &str {
            self.name
        }

        fn cli_command(&self) -> &str {
            self.name
        }

        fn model(&self) -> &str {
            "scripted"
        }

        fn install_hint(&self) -> &str {
            "not installed"
        }

        fn build_args(&self, prompt: &str) -> Vec<String> {
            vec![prompt.to_string()]
        }

        async fn invoke(&self, prompt: &str) -> Result<String, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.to_string());

            match &self.outcome {
                Outcome::Respond(text) => Ok(text.to_string()),
                Outcome::RateLimited => Err(ProviderError::RateLimited {
                    provider: self.name.to_string(),
                    message: "429 Too Many Requests".to_string(),
                }),
                Outcome::Fail(message) => Err(ProviderError::Failed {
                    provider: self.name.to_string(),
                    message: message.to_string(),
                }),
                Outcome::Missing => Err(ProviderError::NotInstalled {
                    provider: self.name.to_string(),
                    hint: format!("{} not found", self.name),
                }),
            }
        }
    }

    fn chain_of(providers: Vec<ScriptedProvider>, allow_skip: bool) -> ProviderChain {
        ProviderChain::new(
            providers
                .into_iter()
                .map(|p| Box::new(p) as Box<dyn AiProvider>)
                .collect(),
            allow_skip,
        )
    }

    #[tokio::test]
    async fn test_first_success_short_circuits() {
        let a = ScriptedProvider::new("A", Outcome::Respond("from A"));
        let b = ScriptedProvider::new("B", Outcome::Respond("from B"));
        let b_calls = b.calls.clone();

        let result = chain_of(vec![a, b], false).invoke("S", "U", None).await;

        assert_eq!(result, InvokeResult::succeeded("A", "from A".to_string()));
        assert_eq!(b_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_falls_back_after_rate_limit() {
        let a = ScriptedProvider::new("A", Outcome::RateLimited);
        let b = ScriptedProvider::new("B", Outcome::Respond("from B"));

        let result = chain_of(vec![a, b], false).invoke("S", "U", None).await;

        assert!(result.success);
        assert_eq!(result.provider, "B");
        assert_eq!(result.response, "from B");
        assert_eq!(result.error, None);
    }

    #[tokio::test]
    async fn test_falls_back_after_hard_failure() {
        let a = ScriptedProvider::new("A", Outcome::Missing);
        let b = ScriptedProvider::new("B", Outcome::Respond("from B"));

        let result = chain_of(vec![a, b], true).invoke("S", "U", None).await;

        assert_eq!(result.provider, "B");
        assert_eq!(result.error, None);
    }

    #[tokio::test]
    async fn test_all_failed_with_skip() {
        let a = ScriptedProvider::new("A", Outcome::RateLimited);
        let b = ScriptedProvider::new("B", Outcome::Fail("boom"));

        let result = chain_of(vec![a, b], true).invoke("S", "U", None).await;

        assert!(result.success);
        assert!(result.is_skipped());
        assert_eq!(result.provider, "skip");
        assert_eq!(result.response, SKIP_RESPONSE);
        assert_eq!(
            result.error.as_deref(),
            Some("A: rate limited; B: B failed: boom")
        );
    }

    #[tokio::test]
    async fn test_all_failed_without_skip() {
        let a = ScriptedProvider::new("A", Outcome::Fail("bad auth"));
        let b = ScriptedProvider::new("B", Outcome::Missing);

        let result = chain_of(vec![a, b], false).invoke("S", "U", None).await;

        assert!(!result.success);
        assert_eq!(result.response, "");
        assert_eq!(result.provider, "none");
        assert_eq!(
            result.error.as_deref(),
            Some("All providers failed: A: A failed: bad auth; B: B not found")
        );
    }

    #[tokio::test]
    async fn test_every_provider_tried_once_in_order() {
        let a = ScriptedProvider::new("A", Outcome::Fail("x"));
        let b = ScriptedProvider::new("B", Outcome::RateLimited);
        let c = ScriptedProvider::new("C", Outcome::Respond("from C"));
        let counters = [a.calls.clone(), b.calls.clone(), c.calls.clone()];

        let result = chain_of(vec![a, b, c], false).invoke("S", "U", None).await;

        assert_eq!(result.provider, "C");
        for calls in counters {
            assert_eq!(calls.load(Ordering::SeqCst), 1);
        }
    }

    #[tokio::test]
    async fn test_providers_receive_combined_prompt() {
        let a = ScriptedProvider::new("A", Outcome::RateLimited);
        let b = ScriptedProvider::new("B", Outcome::Respond("ok"));
        let a_prompts = a.prompts.clone();
        let b_prompts = b.prompts.clone();

        chain_of(vec![a, b], false)
            .invoke("S", "U", Some("T7"))
            .await;

        let expected = "TASK_ID: T7\n\nS\n\n---\n\nU".to_string();
        assert_eq!(*a_prompts.lock().unwrap(), vec![expected.clone()]);
        assert_eq!(*b_prompts.lock().unwrap(), vec![expected]);
    }

    #[tokio::test]
    async fn test_empty_chain() {
        let chain = chain_of(vec![], false);
        assert!(chain.is_empty());

        let result = chain.invoke("S", "U", None).await;
        assert_eq!(result.error.as_deref(), Some("All providers failed: "));
    }

    #[test]
    fn test_result_serialization() {
        let json = serde_json::to_string(&InvokeResult::succeeded("codex", "done".to_string())).unwrap();
        assert_eq!(json, r#"{"success":true,"response":"done","provider":"codex"}"#);

        let failed: InvokeResult = serde_json::from_str(
            r#"{"success":false,"response":"","provider":"none","error":"All providers failed: x"}"#,
        )
        .unwrap();
        assert_eq!(failed, InvokeResult::failed(&["x".to_string()]));
    }
}
