use crate::ai::InvokeResult;
use crate::error::Result;
use colored::*;

/// 결과 출력
///
/// 응답 본문은 stdout, 상태 메시지는 stderr로 보내 파이프로 응답만 받을 수 있게 합니다.
pub fn print_result(result: &InvokeResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    if !result.success {
        eprintln!(
            "{} {}",
            "[X]".red().bold(),
            result.error.as_deref().unwrap_or("All providers failed")
        );
        return Ok(());
    }

    if result.is_skipped() {
        eprintln!("{} {}", "[SKIP]".yellow().bold(), result.error.as_deref().unwrap_or_default().dimmed());
    } else {
        eprintln!("{} {}", "[OK]".green().bold(), result.provider.cyan());
    }
    println!("{}", result.response);

    Ok(())
}

/// 결과에 해당하는 프로세스 종료 코드
pub fn exit_code(result: &InvokeResult) -> i32 {
    if result.success {
        0
    } else {
        1
    }
}
