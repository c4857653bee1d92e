//! Page replacement policies.
//!
//! A replacer is consulted only once the free list is exhausted. Besides
//! picking a victim it receives a [`PageEvent`] for every reference and for
//! every frame that gets a new occupant, and keeps whatever bookkeeping its
//! strategy needs.
//!
//! - [`FIFOPageReplacer`]: evicts the frame that was loaded the longest ago.
//! - [`LRUPageReplacer`]: evicts the page referenced the longest ago.
//! - [`RandomPageReplacer`]: evicts the occupant of a uniformly drawn frame.

pub mod fifo;
pub mod lru;
pub mod random;

pub use fifo::FIFOPageReplacer;
pub use lru::LRUPageReplacer;
pub use random::RandomPageReplacer;

use crate::{
    config::{PolicyKind, SimConfig},
    page_table::Tables,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    /// A page was referenced, hit or miss. Carries the page number.
    Touched(usize),
    /// A frame received a new occupant. Carries the frame index.
    Loaded(usize),
}

pub trait PageReplacer {
    fn page_event(&mut self, _event: PageEvent, _tables: &mut Tables) {}

    /// Picks the page to evict. Only called when no free frame is left.
    fn pick_replacement_page(&mut self, tables: &mut Tables) -> Option<usize>;

    /// One-line rationale shown in reports.
    fn description(&self) -> &'static str;
}

/// Replacement policy chosen at configuration time.
#[derive(Debug)]
pub enum Policy {
    Fifo(FIFOPageReplacer),
    Lru(LRUPageReplacer),
    Random(RandomPageReplacer),
}

impl Policy {
    pub fn from_config(config: &SimConfig) -> Self {
        match config.policy {
            PolicyKind::Fifo => Policy::Fifo(FIFOPageReplacer::new()),
            PolicyKind::Lru => Policy::Lru(LRUPageReplacer::new()),
            PolicyKind::Random => Policy::Random(match config.seed {
                Some(seed) => RandomPageReplacer::new(seed),
                None => RandomPageReplacer::from_entropy(),
            }),
        }
    }

    pub fn kind(&self) -> PolicyKind {
        match self {
            Policy::Fifo(_) => PolicyKind::Fifo,
            Policy::Lru(_) => PolicyKind::Lru,
            Policy::Random(_) => PolicyKind::Random,
        }
    }
}

impl PageReplacer for Policy {
    fn page_event(&mut self, event: PageEvent, tables: &mut Tables) {
        match self {
            Policy::Fifo(r) => r.page_event(event, tables),
            Policy::Lru(r) => r.page_event(event, tables),
            Policy::Random(r) => r.page_event(event, tables),
        }
    }

    fn pick_replacement_page(&mut self, tables: &mut Tables) -> Option<usize> {
        match self {
            Policy::Fifo(r) => r.pick_replacement_page(tables),
            Policy::Lru(r) => r.pick_replacement_page(tables),
            Policy::Random(r) => r.pick_replacement_page(tables),
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Policy::Fifo(r) => r.description(),
            Policy::Lru(r) => r.description(),
            Policy::Random(r) => r.description(),
        }
    }
}
