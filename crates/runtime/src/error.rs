//! Errors that abort a front-end run.
//!
//! Malformed player input never shows up here; the controller reports it and
//! asks again. These variants cover broken consoles, closed input, host
//! construction and misuse of a recording.
use std::io;

use thiserror::Error;
use wumpus_core::HostError;

use crate::decision::LogError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("console I/O failed")]
    Console(#[from] io::Error),

    #[error("input closed while waiting for {awaiting}")]
    InputClosed { awaiting: &'static str },

    #[error(transparent)]
    Log(#[from] LogError),

    #[error("failed to create game host")]
    Host(#[from] HostError),
}
