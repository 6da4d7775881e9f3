use crate::config::Config;
use crate::error::{DelegatorError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 프론트매터의 `model:` 항목
static MODEL_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^model:\s*["']?([A-Za-z0-9_.-]+)["']?\s*$"#).unwrap()
});

/// 위임할 에이전트의 정의 (시스템 프롬프트와 선호 등급)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentDefinition {
    pub name: String,
    /// 프론트매터에 지정된 등급 (없으면 None)
    pub model: Option<String>,
    pub system_prompt: String,
}

impl AgentDefinition {
    /// `<dir>/<name>.md` 로드. 파일이 없으면 빈 정의를 반환합니다.
    pub fn load(dir: &Path, name: &str) -> Result<Self> {
        let path = Self::path_for(dir, name);

        if !path.exists() {
            debug!(agent = name, path = %path.display(), "agent definition not found");
            return Ok(Self {
                name: name.to_string(),
                model: None,
                system_prompt: String::new(),
            });
        }

        let content = fs::read_to_string(&path)?;
        Ok(Self::parse(name, &content))
    }

    pub fn path_for(dir: &Path, name: &str) -> PathBuf {
        dir.join(format!("{}.md", name))
    }

    /// 마크다운 에이전트 파일 파싱
    ///
    /// `---` 줄로 둘러싸인 프론트매터가 있으면 `model:`을 읽고, 나머지 본문을
    /// 시스템 프롬프트로 사용합니다.
    ///
    /// # Examples
    /// ```
    /// use provider_delegator::agent::AgentDefinition;
    ///
    /// let agent = AgentDefinition::parse("scout", "---\nmodel: haiku\n---\nYou are scout.\n");
    /// assert_eq!(agent.model.as_deref(), Some("haiku"));
    /// assert_eq!(agent.system_prompt, "You are scout.");
    /// ```
    pub fn parse(name: &str, content: &str) -> Self {
        let (frontmatter, body) = split_frontmatter(content);

        let model = frontmatter
            .and_then(|fm| MODEL_LINE_REGEX.captures(fm))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string());

        Self {
            name: name.to_string(),
            model,
            system_prompt: body.trim().to_string(),
        }
    }

    /// 명시된 등급이 없으면 "mid"
    pub fn tier(&self) -> &str {
        self.model.as_deref().unwrap_or("mid")
    }
}

fn split_frontmatter(content: &str) -> (Option<&str>, &str) {
    let rest = match content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))
    {
        Some(rest) => rest,
        None => return (None, content),
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }

    // 닫는 구분자가 없으면 전체를 본문으로 취급
    (None, content)
}

/// 에이전트가 외부 provider로 위임 가능한지 확인
pub fn ensure_allowed(config: &Config, agent: &str) -> Result<()> {
    if config.is_agent_allowed(agent) {
        Ok(())
    } else {
        Err(DelegatorError::AgentNotAllowed(agent.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_frontmatter() {
        let content = "---\nname: architect\nmodel: opus\ntools: Read\n---\n\n# Architect\n\nDesign things.\n";
        let agent = AgentDefinition::parse("architect", content);
        assert_eq!(agent.model.as_deref(), Some("opus"));
        assert_eq!(agent.tier(), "opus");
        assert_eq!(agent.system_prompt, "# Architect\n\nDesign things.");
    }

    #[test]
    fn test_parse_quoted_model() {
        let agent = AgentDefinition::parse("scout", "---\nmodel: \"low\"\n---\nbody");
        assert_eq!(agent.model.as_deref(), Some("low"));
    }

    #[test]
    fn test_parse_without_frontmatter() {
        let agent = AgentDefinition::parse("scribe", "Just write docs.\n");
        assert_eq!(agent.model, None);
        assert_eq!(agent.tier(), "mid");
        assert_eq!(agent.system_prompt, "Just write docs.");
    }

    #[test]
    fn test_unterminated_frontmatter_is_body() {
        let agent = AgentDefinition::parse("scout", "---\nmodel: high\nno closing line");
        assert_eq!(agent.model, None);
        assert!(agent.system_prompt.contains("no closing line"));
    }

    #[test]
    fn test_model_outside_frontmatter_is_ignored() {
        let agent = AgentDefinition::parse("scout", "---\nname: scout\n---\nmodel: high\n");
        assert_eq!(agent.model, None);
        assert_eq!(agent.system_prompt, "model: high");
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("detective.md"),
            "---\nmodel: high\n---\nFind the bug.\n",
        )
        .unwrap();

        let agent = AgentDefinition::load(dir.path(), "detective").unwrap();
        assert_eq!(agent.tier(), "high");
        assert_eq!(agent.system_prompt, "Find the bug.");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let agent = AgentDefinition::load(dir.path(), "scout").unwrap();
        assert_eq!(agent.system_prompt, "");
        assert_eq!(agent.tier(), "mid");
    }

    #[test]
    fn test_allowed_agents() {
        let config = Config::default();
        assert!(ensure_allowed(&config, "code-reviewer").is_ok());
        assert!(matches!(
            ensure_allowed(&config, "frontend-supervisor"),
            Err(DelegatorError::AgentNotAllowed(_))
        ));
    }
}
