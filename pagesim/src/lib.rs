//! Simulated MMU with demand paging.
//!
//! [`Mmu::translate`] maps a virtual address to a physical one, servicing
//! page faults from a free list first and from a [`PageReplacer`] once
//! memory is full. Counters and table dumps let a trace be replayed under
//! different policies and compared.
//!
//! ```
//! use pagesim::{Access, FIFOPageReplacer, Mmu};
//!
//! let mut mmu = Mmu::new(4, 2, 1, FIFOPageReplacer::new());
//!
//! assert_eq!(mmu.translate(0, Access::Read), Ok(0));
//! assert_eq!(mmu.translate(1, Access::Read), Ok(1));
//! assert_eq!(mmu.translate(2, Access::Read), Ok(0));
//! assert_eq!(mmu.stats().page_faults, 3);
//! ```

pub mod config;
pub mod error;
pub mod free_list;
pub mod mmu;
pub mod page_replacer;
pub mod page_table;
pub mod report;
pub mod stats;

pub use config::{PolicyKind, SimConfig};
pub use error::{ConfigError, MmuError};
pub use mmu::{Access, Mmu};
pub use page_replacer::{
    FIFOPageReplacer, LRUPageReplacer, PageEvent, PageReplacer, Policy, RandomPageReplacer,
};
pub use report::{FrameRow, FrameTableDump, PageRow, PageTableDump};
pub use stats::Stats;
