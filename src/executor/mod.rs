pub mod runner;

pub use runner::{CapturedOutput, CommandRunner};
