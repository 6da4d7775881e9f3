/// 시스템 프롬프트와 사용자 프롬프트 사이의 구분자
pub const PROMPT_SEPARATOR: &str = "\n\n---\n\n";

/// 체인의 모든 provider에 전달되는 결합 프롬프트 생성기
pub struct PromptTemplate;

impl PromptTemplate {
    /// 시스템 프롬프트, 사용자 프롬프트, 작업 ID를 하나의 프롬프트로 결합
    ///
    /// # Arguments
    /// * `system_prompt` - 에이전트 역할 프롬프트
    /// * `user_prompt` - 작업 내용
    /// * `task_id` - 있으면 맨 앞에 `TASK_ID: <id>` 헤더 추가 (빈 문자열은 없는 것으로 취급)
    ///
    /// # Examples
    /// ```
    /// use provider_delegator::ai::prompt_template::PromptTemplate;
    ///
    /// let prompt = PromptTemplate::combine("S", "U", Some("T7"));
    /// assert_eq!(prompt, "TASK_ID: T7\n\nS\n\n---\n\nU");
    /// ```
    pub fn combine(system_prompt: &str, user_prompt: &str, task_id: Option<&str>) -> String {
        let combined = format!("{}{}{}", system_prompt, PROMPT_SEPARATOR, user_prompt);

        match task_id {
            Some(id) if !id.is_empty() => format!("TASK_ID: {}\n\n{}", id, combined),
            _ => combined,
        }
    }
}
