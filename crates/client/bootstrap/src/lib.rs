//! Shared bootstrap utilities for client front-ends.
//!
//! Provides configuration loading and host construction that can be reused by
//! the CLI or any other front-end crate.
pub mod config;
pub mod hosts;

pub use config::SessionConfig;
pub use hosts::ContentHostFactory;
