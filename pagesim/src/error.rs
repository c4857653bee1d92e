//! Errors reported by the simulator core.

use thiserror::Error;

/// Failure of a single translation or of a table consistency check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MmuError {
    /// The decoded page number falls outside the virtual address space.
    ///
    /// The illegal-reference counter has already been bumped when this is
    /// returned; no table was touched.
    #[error("illegal reference to {address:#x}: page {page} is outside [0, {num_pages})")]
    IllegalReference {
        address: usize,
        page: usize,
        num_pages: usize,
    },

    /// A fault found neither a free frame nor a victim to evict.
    ///
    /// The fault is still counted in `page_faults`; the reference is not
    /// counted as a read or write and no table is touched.
    #[error("page fault cannot be resolved: no frames available")]
    NoFrames,

    /// The page table and the frame table disagree about a mapping.
    #[error("frame {frame} and page {page} disagree about their mapping")]
    Inconsistent { frame: usize, page: usize },
}

/// Configuration rejected before a simulation is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("page count must be greater than zero")]
    NoPages,

    #[error("frame count must be greater than zero")]
    NoFrames,

    #[error("page size must be greater than zero")]
    ZeroPageSize,

    #[error("unknown replacement policy `{0}` (expected fifo, lru or random)")]
    UnknownPolicy(String),
}
