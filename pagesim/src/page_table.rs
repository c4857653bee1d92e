use log::{log, Level};

#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct PageTableEntry {
    pub present: bool,
    /// Backing frame. Only meaningful while `present`.
    pub frame: usize,
    pub modified: bool,
    /// Last reference time, maintained by the LRU replacer only.
    pub timestamp: u64,
}

#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct FrameTableEntry {
    pub occupant: Option<usize>,
    /// Next frame in whichever list currently owns this frame: the free
    /// list while unused, the FIFO queue afterwards.
    pub link: Option<usize>,
}

pub struct PageTable {
    table: Vec<PageTableEntry>,
}

impl PageTable {
    pub fn new(num_pages: usize) -> Self {
        PageTable {
            table: vec![PageTableEntry::default(); num_pages],
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn get(&self, page_number: usize) -> Option<&PageTableEntry> {
        self.table.get(page_number)
    }

    pub fn get_mut(&mut self, page_number: usize) -> Option<&mut PageTableEntry> {
        self.table.get_mut(page_number)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &PageTableEntry)> {
        self.table.iter().enumerate()
    }

    pub fn mark_dirty(&mut self, page_number: usize) {
        if let Some(page) = self.table.get_mut(page_number) {
            page.modified = true;
        }
    }
}

pub struct FrameTable {
    table: Vec<FrameTableEntry>,
}

impl FrameTable {
    pub fn new(num_frames: usize) -> Self {
        FrameTable {
            table: vec![FrameTableEntry::default(); num_frames],
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn get(&self, frame_index: usize) -> Option<&FrameTableEntry> {
        self.table.get(frame_index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &FrameTableEntry)> {
        self.table.iter().enumerate()
    }

    pub fn occupant(&self, frame_index: usize) -> Option<usize> {
        self.table.get(frame_index).and_then(|f| f.occupant)
    }

    pub fn link(&self, frame_index: usize) -> Option<usize> {
        self.table[frame_index].link
    }

    pub fn set_link(&mut self, frame_index: usize, next: Option<usize>) {
        self.table[frame_index].link = next;
    }
}

/// The two tables of a simulation, mutated together.
pub struct Tables {
    pub pages: PageTable,
    pub frames: FrameTable,
    level: Level,
}

impl Tables {
    pub fn new(num_pages: usize, num_frames: usize) -> Self {
        Tables {
            pages: PageTable::new(num_pages),
            frames: FrameTable::new(num_frames),
            level: Level::Trace,
        }
    }

    /// Log level for the per-operation trace lines.
    pub fn set_log_level(&mut self, level: Level) {
        self.level = level;
    }

    pub fn log_level(&self) -> Level {
        self.level
    }

    /// Binds `page_number` to `frame_index` with a clean dirty bit.
    pub fn occupy(&mut self, frame_index: usize, page_number: usize) {
        log!(self.level, "Storing P{} in F{}", page_number, frame_index);

        let page = &mut self.pages.table[page_number];
        page.present = true;
        page.frame = frame_index;
        page.modified = false;

        self.frames.table[frame_index].occupant = Some(page_number);
    }

    /// Evicts `victim` and hands its frame to `new_page`.
    ///
    /// Returns the reused frame and whether the victim had to be written
    /// back first.
    pub fn replace(&mut self, victim: usize, new_page: usize) -> (usize, bool) {
        let evicted = self.pages.table[victim];
        let frame_index = evicted.frame;

        if evicted.modified {
            log!(self.level, "Writing modified P{} back (to disc) to replace it", victim);
        }

        log!(
            self.level,
            "Replacing victim P{} with P{} in F{}",
            victim,
            new_page,
            frame_index
        );

        self.pages.table[victim].present = false;
        self.occupy(frame_index, new_page);

        (frame_index, evicted.modified)
    }

    /// Looks for a frame whose recorded occupant does not map back to it,
    /// or a present page whose frame does not record it.
    pub fn find_inconsistency(&self) -> Option<(usize, usize)> {
        for (frame_index, frame) in self.frames.iter() {
            if let Some(page_number) = frame.occupant {
                match self.pages.get(page_number) {
                    Some(page) if page.present && page.frame == frame_index => {}
                    _ => return Some((frame_index, page_number)),
                }
            }
        }

        for (page_number, page) in self.pages.iter() {
            if page.present && self.frames.occupant(page.frame) != Some(page_number) {
                return Some((page.frame, page_number));
            }
        }

        None
    }
}
