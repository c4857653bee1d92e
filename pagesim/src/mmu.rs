use std::fmt;

use log::{log, Level};

use crate::{
    config::SimConfig,
    error::{ConfigError, MmuError},
    free_list::FreeList,
    page_replacer::{PageEvent, PageReplacer, Policy},
    page_table::Tables,
    stats::Stats,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Read => f.write_str("R"),
            Access::Write => f.write_str("W"),
        }
    }
}

/// Address translator and fault handler for a single address space.
///
/// `num_frames` and `page_size` must be non-zero; [`Mmu::from_config`]
/// checks this, [`Mmu::new`] trusts its caller.
pub struct Mmu<REPLACER: PageReplacer> {
    page_size: usize,
    tables: Tables,
    free_frames: FreeList,
    replacer: REPLACER,
    stats: Stats,
}

impl<REPLACER> Mmu<REPLACER>
where
    REPLACER: PageReplacer,
{
    pub fn new(num_pages: usize, num_frames: usize, page_size: usize, replacer: REPLACER) -> Self {
        let mut tables = Tables::new(num_pages, num_frames);
        let free_frames = FreeList::build(&mut tables.frames);

        Mmu {
            page_size,
            tables,
            free_frames,
            replacer,
            stats: Stats::default(),
        }
    }

    /// Verbose runs log every step at `Info`; otherwise the same lines go
    /// out at `Trace`.
    pub fn set_verbose(&mut self, verbose: bool) {
        let level = if verbose { Level::Info } else { Level::Trace };
        self.tables.set_log_level(level);
    }

    fn handle_page_fault(&mut self, page_number: usize) -> Result<usize, MmuError> {
        let level = self.tables.log_level();

        self.stats.page_faults += 1;
        log!(level, "PAGE_FAULT in P {}", page_number);

        let frame_idx = match self.free_frames.pop(&mut self.tables.frames) {
            Some(free_idx) => {
                log!(level, "Taking free F{}", free_idx);
                self.tables.occupy(free_idx, page_number);
                free_idx
            }
            None => {
                let victim = self
                    .replacer
                    .pick_replacement_page(&mut self.tables)
                    .ok_or(MmuError::NoFrames)?;

                let (frame_idx, dirty) = self.tables.replace(victim, page_number);
                if dirty {
                    self.stats.write_backs += 1;
                }

                frame_idx
            }
        };

        self.replacer.page_event(PageEvent::Loaded(frame_idx), &mut self.tables);

        Ok(frame_idx)
    }

    /// Translates `address` to a physical address, servicing a page fault
    /// first if the page is absent.
    pub fn translate(&mut self, address: usize, access: Access) -> Result<usize, MmuError> {
        let page_number = address / self.page_size;
        let page_offset = address % self.page_size;

        let entry = match self.tables.pages.get(page_number) {
            Some(entry) => *entry,
            None => {
                self.stats.illegal_refs += 1;
                return Err(MmuError::IllegalReference {
                    address,
                    page: page_number,
                    num_pages: self.tables.pages.len(),
                });
            }
        };

        let frame_idx = if entry.present {
            entry.frame
        } else {
            self.handle_page_fault(page_number)?
        };

        match access {
            Access::Read => self.stats.reads += 1,
            Access::Write => {
                self.tables.pages.mark_dirty(page_number);
                self.stats.writes += 1;
            }
        }

        self.replacer.page_event(PageEvent::Touched(page_number), &mut self.tables);

        log!(
            self.tables.log_level(),
            "\t{} {} == P {} (F {}) + {}",
            access,
            address,
            page_number,
            frame_idx,
            page_offset
        );

        Ok(frame_idx * self.page_size + page_offset)
    }

    pub fn read(&mut self, address: usize) -> Result<usize, MmuError> {
        self.translate(address, Access::Read)
    }

    pub fn write(&mut self, address: usize) -> Result<usize, MmuError> {
        self.translate(address, Access::Write)
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    pub fn replacer(&self) -> &REPLACER {
        &self.replacer
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn num_pages(&self) -> usize {
        self.tables.pages.len()
    }

    pub fn num_frames(&self) -> usize {
        self.tables.frames.len()
    }

    pub fn free_frames_left(&self) -> bool {
        !self.free_frames.is_empty()
    }

    pub fn policy_description(&self) -> &'static str {
        self.replacer.description()
    }

    /// Checks that present pages and occupied frames map onto each other.
    pub fn check_consistency(&self) -> Result<(), MmuError> {
        match self.tables.find_inconsistency() {
            Some((frame, page)) => Err(MmuError::Inconsistent { frame, page }),
            None => Ok(()),
        }
    }
}

impl Mmu<Policy> {
    /// Validates `config` and builds an MMU running the policy it names.
    pub fn from_config(config: &SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut mmu = Mmu::new(
            config.num_pages,
            config.num_frames,
            config.page_size,
            Policy::from_config(config),
        );
        mmu.set_verbose(config.verbose);

        Ok(mmu)
    }
}
