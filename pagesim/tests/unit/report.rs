//! Table dumps and their terminal layout.

use pagesim::{FIFOPageReplacer, FrameRow, FrameTableDump, Mmu, PageRow, PageTableDump};
use pretty_assertions::assert_eq;

use crate::common::{r, replay, w};

fn small_run() -> Mmu<FIFOPageReplacer> {
    let mut mmu = Mmu::new(4, 3, 1, FIFOPageReplacer::new());
    replay(&mut mmu, &[r(2), w(0)]);
    mmu
}

#[test]
fn page_rows_hide_stale_fields() {
    let mmu = small_run();

    assert_eq!(
        mmu.page_table_dump(),
        vec![
            PageRow {
                page: 0,
                present: true,
                frame: Some(1),
                modified: Some(true),
            },
            PageRow {
                page: 1,
                present: false,
                frame: None,
                modified: None,
            },
            PageRow {
                page: 2,
                present: true,
                frame: Some(0),
                modified: Some(false),
            },
            PageRow {
                page: 3,
                present: false,
                frame: None,
                modified: None,
            },
        ]
    );
}

#[test]
fn frame_rows_follow_occupants() {
    let mmu = small_run();

    assert_eq!(
        mmu.frame_table_dump(),
        vec![
            FrameRow {
                frame: 0,
                page: Some(2),
                present: true,
                modified: Some(false),
                consistent: true,
            },
            FrameRow {
                frame: 1,
                page: Some(0),
                present: true,
                modified: Some(true),
                consistent: true,
            },
            FrameRow {
                frame: 2,
                page: None,
                present: false,
                modified: None,
                consistent: true,
            },
        ]
    );
}

#[test]
fn page_table_layout() {
    let mmu = small_run();
    let rows = mmu.page_table_dump();

    let expected = concat!(
        "      PAGE    Present      Frame   Modified\n",
        "       0        1            1        1\n",
        "       1        0            -        -\n",
        "       2        1            0        0\n",
        "       3        0            -        -\n",
    );

    assert_eq!(PageTableDump(&rows).to_string(), expected);
}

#[test]
fn frame_table_layout_flags_inconsistent_rows() {
    let rows = vec![
        FrameRow {
            frame: 0,
            page: Some(3),
            present: true,
            modified: Some(false),
            consistent: true,
        },
        FrameRow {
            frame: 1,
            page: None,
            present: false,
            modified: None,
            consistent: true,
        },
        FrameRow {
            frame: 2,
            page: Some(1),
            present: false,
            modified: None,
            consistent: false,
        },
    ];

    let expected = concat!(
        "     FRAME       Page    Present   Modified\n",
        "       0          3        1          0\n",
        "       1          -        -          -\n",
        "       2          1        0          -   ERROR!\n",
    );

    assert_eq!(FrameTableDump(&rows).to_string(), expected);
}

#[test]
fn policy_descriptions() {
    use pagesim::{LRUPageReplacer, RandomPageReplacer};

    assert_eq!(
        small_run().policy_description(),
        "FIFO replacement: victim = oldest frame in queue"
    );
    assert_eq!(
        Mmu::new(1, 1, 1, LRUPageReplacer::new()).policy_description(),
        "LRU replacement: victim = least recently referenced page"
    );
    assert_eq!(
        Mmu::new(1, 1, 1, RandomPageReplacer::new(0)).policy_description(),
        "Random replacement (no specific information)"
    );
}

#[test]
fn stats_serialize_to_json() {
    let mmu = small_run();

    let json = serde_json::to_value(mmu.stats()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "illegal_refs": 0,
            "page_faults": 2,
            "reads": 1,
            "writes": 1,
            "write_backs": 0,
        })
    );
}
