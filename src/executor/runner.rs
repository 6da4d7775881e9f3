use std::env;
use std::process::ExitStatus;
use tokio::process::Command;
use tracing::debug;

/// 종료된 프로세스의 상태와 출력
#[derive(Debug)]
pub struct CapturedOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CapturedOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// 외부 CLI를 하위 프로세스로 실행하고 출력을 모두 수집
///
/// 하위 프로세스는 호출자의 현재 디렉토리와 환경 변수 사본을 그대로 사용하며,
/// 부모 프로세스의 환경은 변경하지 않습니다. 타임아웃은 없습니다.
pub struct CommandRunner;

impl CommandRunner {
    pub fn new() -> Self {
        Self
    }

    pub async fn capture(&self, program: &str, args: &[String]) -> std::io::Result<CapturedOutput> {
        let mut command = Command::new(program);
        command.args(args).env_clear().envs(env::vars_os());

        if let Ok(cwd) = env::current_dir() {
            debug!(program, cwd = %cwd.display(), "spawning provider process");
            command.current_dir(cwd);
        }

        let output = command.output().await?;

        Ok(CapturedOutput {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}
