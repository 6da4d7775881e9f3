use crate::agent::{self, AgentDefinition};
use crate::ai::{InvokeResult, ProviderFactory};
use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use crate::ui::create_spinner;
use std::fs;
use tracing::info;

/// 에이전트 작업 하나를 provider 체인으로 위임
///
/// 에이전트 허용 여부 확인 → 정의 파일 로드 → 체인 생성 → 호출 순서로 진행합니다.
/// provider 실패는 에러가 아니라 `InvokeResult`로 반환됩니다.
pub async fn execute_delegate(cli: &Cli, config: &Config) -> Result<InvokeResult> {
    agent::ensure_allowed(config, &cli.agent)?;

    let definition = AgentDefinition::load(&config.agents_dir, &cli.agent)?;

    let system_prompt = match (&cli.system, &cli.system_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)?.trim().to_string(),
        (None, None) => definition.system_prompt.clone(),
    };
    let tier = cli.model.as_deref().unwrap_or_else(|| definition.tier());

    let chain = ProviderFactory::from_config(config, tier, &cli.agent)?;
    info!(agent = %cli.agent, tier, "delegating task");

    let spinner = create_spinner(&format!(
        "Waiting for {} ({})...",
        chain.provider_names().join(" → "),
        cli.agent
    ));
    let result = chain
        .invoke(&system_prompt, &cli.prompt_text(), cli.task_id.as_deref())
        .await;
    spinner.finish_and_clear();

    Ok(result)
}
