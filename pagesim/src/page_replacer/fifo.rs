//! First-in, first-out replacement.
//!
//! Occupied frames form a queue ordered by load time, threaded through the
//! frame table's `link` field. Hits never reorder it; a frame moves to the
//! tail only when it receives a new occupant.

use log::log;

use super::{PageEvent, PageReplacer};
use crate::page_table::{FrameTable, Tables};

#[derive(Debug, Default)]
pub struct FIFOPageReplacer {
    head: Option<usize>,
    tail: Option<usize>,
}

impl FIFOPageReplacer {
    pub fn new() -> Self {
        FIFOPageReplacer {
            head: None,
            tail: None,
        }
    }

    fn enqueue(&mut self, frames: &mut FrameTable, frame_index: usize) {
        frames.set_link(frame_index, None);

        match self.tail {
            None => self.head = Some(frame_index),
            Some(tail) => frames.set_link(tail, Some(frame_index)),
        }

        self.tail = Some(frame_index);
    }

    fn dequeue(&mut self, frames: &mut FrameTable) -> Option<usize> {
        let front = self.head?;

        self.head = frames.link(front);
        if self.head.is_none() {
            self.tail = None;
        }

        frames.set_link(front, None);

        Some(front)
    }

    /// Frames in queue order, oldest first.
    pub fn queue(&self, frames: &FrameTable) -> Vec<usize> {
        let mut order = Vec::new();
        let mut cursor = self.head;

        while let Some(frame_index) = cursor {
            order.push(frame_index);
            cursor = frames.link(frame_index);
        }

        order
    }
}

impl PageReplacer for FIFOPageReplacer {
    fn page_event(&mut self, event: PageEvent, tables: &mut Tables) {
        if let PageEvent::Loaded(frame_index) = event {
            self.enqueue(&mut tables.frames, frame_index);
            log!(tables.log_level(), "FIFO enqueue F{}", frame_index);
        }
    }

    fn pick_replacement_page(&mut self, tables: &mut Tables) -> Option<usize> {
        let frame_index = self.dequeue(&mut tables.frames)?;
        let victim = tables.frames.occupant(frame_index)?;

        log!(tables.log_level(), "FIFO victim F{} (P{})", frame_index, victim);

        Some(victim)
    }

    fn description(&self) -> &'static str {
        "FIFO replacement: victim = oldest frame in queue"
    }
}
