//! Simulation parameters.
//!
//! A [`SimConfig`] is normally assembled by the driver, either from command
//! line flags or from a JSON document, and handed to
//! [`Mmu::from_config`](crate::mmu::Mmu::from_config). Every field has a
//! default so a partial JSON document is enough.

use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::error::ConfigError;

mod defaults {
    pub const NUM_PAGES: usize = 64;
    pub const NUM_FRAMES: usize = 8;
    pub const PAGE_SIZE: usize = 4096;
}

/// Which replacement policy evicts pages once the free list runs dry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    #[default]
    Fifo,
    Lru,
    Random,
}

impl FromStr for PolicyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fifo" => Ok(PolicyKind::Fifo),
            "lru" => Ok(PolicyKind::Lru),
            "random" => Ok(PolicyKind::Random),
            _ => Err(ConfigError::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PolicyKind::Fifo => "fifo",
            PolicyKind::Lru => "lru",
            PolicyKind::Random => "random",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Size of the virtual address space, in pages.
    pub num_pages: usize,
    /// Size of physical memory, in frames.
    pub num_frames: usize,
    /// Bytes per page (and per frame).
    pub page_size: usize,
    /// Emit the per-reference trace at `Info` instead of `Trace`.
    pub verbose: bool,
    pub policy: PolicyKind,
    /// Seed for the random policy. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            num_pages: defaults::NUM_PAGES,
            num_frames: defaults::NUM_FRAMES,
            page_size: defaults::PAGE_SIZE,
            verbose: false,
            policy: PolicyKind::default(),
            seed: None,
        }
    }
}

impl SimConfig {
    /// Checks the preconditions the core relies on without re-checking.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_pages == 0 {
            return Err(ConfigError::NoPages);
        }
        if self.num_frames == 0 {
            return Err(ConfigError::NoFrames);
        }
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(())
    }
}
