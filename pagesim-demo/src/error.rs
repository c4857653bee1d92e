use std::io;

use pagesim::{ConfigError, MmuError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("simulation failed: {0}")]
    Simulation(#[from] MmuError),

    #[error("trace line {line}: {reason}")]
    Trace { line: usize, reason: TraceError },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceError {
    #[error("unknown operation `{0}` (expected R or W)")]
    UnknownOp(String),

    #[error("missing address")]
    MissingAddress,

    #[error("malformed address `{0}`")]
    BadAddress(String),

    #[error("address `{0}` does not fit in a machine word")]
    AddressTooWide(String),

    #[error("unexpected trailing input `{0}`")]
    TrailingInput(String),
}
