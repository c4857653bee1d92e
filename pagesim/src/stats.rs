//! Reference and fault counters.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// References whose page fell outside the address space.
    pub illegal_refs: u64,
    pub page_faults: u64,
    pub reads: u64,
    pub writes: u64,
    /// Dirty victims flushed before their frame was reused.
    pub write_backs: u64,
}

impl Stats {
    /// Legal references, reads plus writes.
    pub fn references(&self) -> u64 {
        self.reads + self.writes
    }

    /// Faults per legal reference, or 0 before the first one.
    pub fn fault_rate(&self) -> f64 {
        match self.references() {
            0 => 0.0,
            n => self.page_faults as f64 / n as f64,
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<22} {:>10}", "Illegal references", self.illegal_refs)?;
        writeln!(f, "{:<22} {:>10}", "Read references", self.reads)?;
        writeln!(f, "{:<22} {:>10}", "Write references", self.writes)?;
        writeln!(f, "{:<22} {:>10}", "Page faults", self.page_faults)?;
        writeln!(f, "{:<22} {:>10}", "Pages written back", self.write_backs)?;
        write!(f, "{:<22} {:>9.2}%", "Fault rate", self.fault_rate() * 100.0)
    }
}
