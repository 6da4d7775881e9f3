//! Delegates agent tasks to external AI command-line tools (`codex`, `gemini`)
//! through an ordered fallback chain.
//!
//! ```no_run
//! use provider_delegator::ai::create_provider_chain;
//!
//! # async fn run() {
//! let chain = create_provider_chain("mid", "code-reviewer");
//! let result = chain.invoke("You are a code reviewer.", "Review the diff.", Some("T7")).await;
//! println!("{} via {}", result.response, result.provider);
//! # }
//! ```

pub mod agent;
pub mod ai;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod executor;
pub mod ui;
