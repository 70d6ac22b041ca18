//! Terminal front-end for Hunt the Wumpus.
//!
//! The binary reads one line per prompt from stdin and prints plain text to
//! stdout. Diagnostics go to stderr through `tracing`.
mod app;
mod config;
pub mod console;
pub mod logging;
mod rules;

pub use app::CliApp;
pub use config::CliArgs;
pub use console::StdConsole;
pub use rules::RULES;
