//! Read-only snapshots of the page and frame tables.
//!
//! The rows carry exact values; the `Display` wrappers lay them out in
//! columns for a terminal.

use std::fmt;

use serde::Serialize;

use crate::{mmu::Mmu, page_replacer::PageReplacer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRow {
    pub page: usize,
    pub present: bool,
    /// `None` while the page is absent.
    pub frame: Option<usize>,
    /// `None` while the page is absent.
    pub modified: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameRow {
    pub frame: usize,
    pub page: Option<usize>,
    pub present: bool,
    pub modified: Option<bool>,
    /// False when the recorded occupant does not map back to this frame.
    pub consistent: bool,
}

impl<REPLACER: PageReplacer> Mmu<REPLACER> {
    pub fn page_table_dump(&self) -> Vec<PageRow> {
        self.tables()
            .pages
            .iter()
            .map(|(page, entry)| PageRow {
                page,
                present: entry.present,
                frame: entry.present.then_some(entry.frame),
                modified: entry.present.then_some(entry.modified),
            })
            .collect()
    }

    pub fn frame_table_dump(&self) -> Vec<FrameRow> {
        let tables = self.tables();

        tables
            .frames
            .iter()
            .map(|(frame, entry)| match entry.occupant {
                None => FrameRow {
                    frame,
                    page: None,
                    present: false,
                    modified: None,
                    consistent: true,
                },
                Some(page) => {
                    let mapped = tables.pages.get(page).copied().unwrap_or_default();
                    let present = mapped.present;

                    FrameRow {
                        frame,
                        page: Some(page),
                        present,
                        modified: present.then_some(mapped.modified),
                        consistent: present && mapped.frame == frame,
                    }
                }
            })
            .collect()
    }
}

fn dash<T: fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn flag(value: bool) -> u8 {
    u8::from(value)
}

pub struct PageTableDump<'a>(pub &'a [PageRow]);

impl fmt::Display for PageTableDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>10} {:>10} {:>10}   {}", "PAGE", "Present", "Frame", "Modified")?;

        for row in self.0 {
            writeln!(
                f,
                "{:>8}   {:>6}     {:>8}   {:>6}",
                row.page,
                flag(row.present),
                dash(row.frame),
                dash(row.modified.map(flag))
            )?;
        }

        Ok(())
    }
}

pub struct FrameTableDump<'a>(pub &'a [FrameRow]);

impl fmt::Display for FrameTableDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>10} {:>10} {:>10}   {}", "FRAME", "Page", "Present", "Modified")?;

        for row in self.0 {
            if row.page.is_none() {
                writeln!(f, "{:>8}   {:>8}   {:>6}     {:>6}", row.frame, "-", "-", "-")?;
                continue;
            }

            write!(
                f,
                "{:>8}   {:>8}   {:>6}     {:>6}",
                row.frame,
                dash(row.page),
                flag(row.present),
                dash(row.modified.map(flag))
            )?;

            if row.consistent {
                writeln!(f)?;
            } else {
                writeln!(f, "   ERROR!")?;
            }
        }

        Ok(())
    }
}
