use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "delegator")]
#[command(version)]
#[command(about = "Delegate agent tasks to external AI CLIs with provider fallback", long_about = None)]
pub struct Cli {
    /// 작업 프롬프트
    #[arg(required = true)]
    pub prompt: Vec<String>,

    /// 위임할 에이전트 이름 (예: scout, code-reviewer)
    #[arg(short = 'a', long)]
    pub agent: String,

    /// 모델 등급 (low, mid, high). 미지정시 에이전트 정의 파일의 model 사용
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// 시스템 프롬프트 (에이전트 정의 파일보다 우선)
    #[arg(short = 's', long, conflicts_with = "system_file")]
    pub system: Option<String>,

    /// 시스템 프롬프트 파일
    #[arg(long)]
    pub system_file: Option<PathBuf>,

    /// 프롬프트 앞에 TASK_ID 헤더 추가
    #[arg(short = 't', long)]
    pub task_id: Option<String>,

    /// 결과를 JSON으로 출력
    #[arg(long)]
    pub json: bool,

    /// 설정 파일 경로 (기본: ~/.delegator/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// 디버그 로그 출력
    #[arg(short = 'd', long)]
    pub debug: bool,
}

impl Cli {
    pub fn prompt_text(&self) -> String {
        self.prompt.join(" ")
    }
}
