//! Random replacement.
//!
//! Draws a frame uniformly from `[0, frames)` and evicts whatever occupies
//! it. Keeps no history; the generator is the only state, and seeding it
//! makes the victim sequence reproducible.

use log::log;
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::PageReplacer;
use crate::page_table::Tables;

#[derive(Debug, Clone)]
pub struct RandomPageReplacer {
    rng: StdRng,
}

impl RandomPageReplacer {
    pub fn new(seed: u64) -> Self {
        RandomPageReplacer {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        RandomPageReplacer {
            rng: StdRng::from_entropy(),
        }
    }
}

impl PageReplacer for RandomPageReplacer {
    fn pick_replacement_page(&mut self, tables: &mut Tables) -> Option<usize> {
        if tables.frames.is_empty() {
            return None;
        }

        let frame_index = self.rng.gen_range(0..tables.frames.len());
        let victim = tables.frames.occupant(frame_index)?;

        log!(
            tables.log_level(),
            "Choosing (at random) P{} of F{} to be replaced",
            victim,
            frame_index
        );

        Some(victim)
    }

    fn description(&self) -> &'static str {
        "Random replacement (no specific information)"
    }
}
