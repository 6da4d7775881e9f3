pub mod output;
pub mod progress;

pub use output::{exit_code, print_result};
pub use progress::create_spinner;
