use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// provider 응답을 기다리는 동안 stderr에 표시하는 스피너
///
/// stderr가 터미널이 아니면 indicatif가 출력을 숨깁니다.
pub fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.cyan} {msg} {elapsed:.dim}")
            .unwrap(),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
