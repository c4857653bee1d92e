//! Circular list of frames that were never handed out.
//!
//! The list is threaded through the `link` field of the frame table and is
//! addressed through its *last* element, so the head is always one hop away
//! and unlinking it is O(1). Frames only ever leave this list.

use crate::page_table::FrameTable;

#[derive(Debug, Default)]
pub struct FreeList {
    last: Option<usize>,
}

impl FreeList {
    /// Chains every frame of `frames` in ascending order and closes the
    /// circle, so frames are handed out as 0, 1, 2, ...
    pub fn build(frames: &mut FrameTable) -> Self {
        let n = frames.len();

        if n == 0 {
            return FreeList { last: None };
        }

        for i in 0..n {
            frames.set_link(i, Some((i + 1) % n));
        }

        FreeList { last: Some(n - 1) }
    }

    pub fn is_empty(&self) -> bool {
        self.last.is_none()
    }

    /// Unlinks and returns the head of the list.
    pub fn pop(&mut self, frames: &mut FrameTable) -> Option<usize> {
        let last = self.last?;
        let head = frames.link(last)?;

        if head == last {
            self.last = None;
        } else {
            let next = frames.link(head);
            frames.set_link(last, next);
        }

        frames.set_link(head, None);

        Some(head)
    }
}
