//! Least-recently-used replacement.
//!
//! Every reference advances a private clock and stamps the referenced
//! page's `timestamp`. The victim is the present page with the smallest
//! stamp; equal stamps are broken in favour of the lowest page number.

use log::log;

use super::{PageEvent, PageReplacer};
use crate::page_table::Tables;

#[derive(Debug, Default)]
pub struct LRUPageReplacer {
    clock: u64,
}

impl LRUPageReplacer {
    pub fn new() -> Self {
        LRUPageReplacer { clock: 0 }
    }

    pub fn clock(&self) -> u64 {
        self.clock
    }
}

impl PageReplacer for LRUPageReplacer {
    fn page_event(&mut self, event: PageEvent, tables: &mut Tables) {
        if let PageEvent::Touched(page_number) = event {
            if let Some(page) = tables.pages.get_mut(page_number) {
                self.clock += 1;
                page.timestamp = self.clock;
            }
        }
    }

    // O(pages). Fine for the table sizes this simulator is driven with.
    fn pick_replacement_page(&mut self, tables: &mut Tables) -> Option<usize> {
        let (victim, entry) = tables
            .pages
            .iter()
            .filter(|(_, page)| page.present)
            .min_by_key(|(page_number, page)| (page.timestamp, *page_number))?;

        log!(
            tables.log_level(),
            "LRU victim P{} (F{}, last used at t={})",
            victim,
            entry.frame,
            entry.timestamp
        );

        Some(victim)
    }

    fn description(&self) -> &'static str {
        "LRU replacement: victim = least recently referenced page"
    }
}
