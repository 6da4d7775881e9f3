use crate::ai::codex::{CODEX_COMMAND, CODEX_HIGH_MODEL, CODEX_LOW_MODEL, CODEX_MID_MODEL};
use crate::ai::gemini::{GEMINI_COMMAND, GEMINI_MODEL};
use crate::ai::{ModelTier, ProviderFactory};
use crate::error::{DelegatorError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 위임을 허용하는 에이전트 (구현 에이전트는 제외)
pub const DEFAULT_ALLOWED_AGENTS: [&str; 5] =
    ["scout", "detective", "architect", "scribe", "code-reviewer"];

/// 모든 provider가 실패해도 건너뛸 수 있는 에이전트
pub const SKIPPABLE_AGENT: &str = "code-reviewer";

/// 등급별 Codex 모델 테이블
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodexModels {
    pub low: String,
    pub mid: String,
    pub high: String,
}

impl CodexModels {
    pub fn for_tier(&self, tier: ModelTier) -> &str {
        match tier {
            ModelTier::Low => &self.low,
            ModelTier::Mid => &self.mid,
            ModelTier::High => &self.high,
        }
    }
}

impl Default for CodexModels {
    fn default() -> Self {
        Self {
            low: CODEX_LOW_MODEL.to_string(),
            mid: CODEX_MID_MODEL.to_string(),
            high: CODEX_HIGH_MODEL.to_string(),
        }
    }
}

/// delegator 사용자 설정
///
/// 설정 파일은 ~/.delegator/config.toml에 저장됩니다. 모든 항목은 생략 가능합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// provider 시도 순서
    #[serde(default = "default_provider_order")]
    pub provider_order: Vec<String>,

    /// Codex CLI 실행 파일
    #[serde(default = "default_codex_command")]
    pub codex_command: String,

    /// Gemini CLI 실행 파일
    #[serde(default = "default_gemini_command")]
    pub gemini_command: String,

    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,

    #[serde(default)]
    pub codex_models: CodexModels,

    /// 위임 가능한 에이전트 목록
    #[serde(default = "default_allowed_agents")]
    pub allowed_agents: Vec<String>,

    /// 실패 시 건너뛸 수 있는 에이전트 목록
    #[serde(default = "default_skip_agents")]
    pub skip_agents: Vec<String>,

    /// 에이전트 정의 파일(<agent>.md) 디렉토리
    #[serde(default = "default_agents_dir")]
    pub agents_dir: PathBuf,

    /// RUST_LOG가 없을 때 사용하는 로그 레벨
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_provider_order() -> Vec<String> {
    vec!["codex".to_string(), "gemini".to_string()]
}

fn default_codex_command() -> String {
    CODEX_COMMAND.to_string()
}

fn default_gemini_command() -> String {
    GEMINI_COMMAND.to_string()
}

fn default_gemini_model() -> String {
    GEMINI_MODEL.to_string()
}

fn default_allowed_agents() -> Vec<String> {
    DEFAULT_ALLOWED_AGENTS.iter().map(|a| a.to_string()).collect()
}

fn default_skip_agents() -> Vec<String> {
    vec![SKIPPABLE_AGENT.to_string()]
}

fn default_agents_dir() -> PathBuf {
    PathBuf::from(".claude").join("agents")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider_order: default_provider_order(),
            codex_command: default_codex_command(),
            gemini_command: default_gemini_command(),
            gemini_model: default_gemini_model(),
            codex_models: CodexModels::default(),
            allowed_agents: default_allowed_agents(),
            skip_agents: default_skip_agents(),
            agents_dir: default_agents_dir(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// 기본 설정 파일 경로
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| {
            DelegatorError::ConfigError("Could not find home directory".to_string())
        })?;
        Ok(home.join(".delegator").join("config.toml"))
    }

    /// 기본 경로에서 로드 (없으면 기본값 사용)
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 지정한 파일에서 로드 (없으면 기본값 사용)
    ///
    /// # Examples
    /// ```
    /// use provider_delegator::config::Config;
    ///
    /// let config = Config::load_from("/nonexistent/config.toml".as_ref()).unwrap();
    /// assert_eq!(config.provider_order, vec!["codex", "gemini"]);
    /// ```
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            DelegatorError::ConfigError(format!("{}: {}", path.display(), e))
        })?;
        config.validate()?;

        Ok(config)
    }

    /// provider_order가 비어 있거나 알 수 없는 provider를 포함하면 에러
    pub fn validate(&self) -> Result<()> {
        if self.provider_order.is_empty() {
            return Err(DelegatorError::ConfigError(
                "provider_order must list at least one provider".to_string(),
            ));
        }

        if let Some(unknown) = self
            .provider_order
            .iter()
            .find(|name| !ProviderFactory::is_supported(name))
        {
            return Err(DelegatorError::ConfigError(format!(
                "unknown provider '{}' in provider_order (supported: {})",
                unknown,
                ProviderFactory::SUPPORTED.join(", ")
            )));
        }

        Ok(())
    }

    /// 설정을 파일에 저장 (상위 디렉토리 생성)
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| DelegatorError::ConfigError(e.to_string()))?;
        fs::write(path, toml_string)?;

        Ok(())
    }

    pub fn is_agent_allowed(&self, agent: &str) -> bool {
        self.allowed_agents.iter().any(|a| a == agent)
    }

    pub fn is_skippable(&self, agent: &str) -> bool {
        self.skip_agents.iter().any(|a| a == agent)
    }
}
