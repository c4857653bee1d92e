//! FIFO replacement through the whole MMU.

use pagesim::{FIFOPageReplacer, Mmu};

use crate::common::{frame_of, r, replay, w};

#[test]
fn three_reads_over_two_frames() {
    let mut mmu = Mmu::new(4, 2, 1, FIFOPageReplacer::new());

    let results = replay(&mut mmu, &[r(0), r(1)]);
    assert_eq!(results, vec![Ok(0), Ok(1)]);
    assert_eq!(mmu.replacer().queue(&mmu.tables().frames), vec![0, 1]);

    let results = replay(&mut mmu, &[r(2)]);
    assert_eq!(results, vec![Ok(0)]);
    assert_eq!(mmu.replacer().queue(&mmu.tables().frames), vec![1, 0]);

    assert_eq!(frame_of(&mmu, 0), None);
    assert_eq!(frame_of(&mmu, 1), Some(1));
    assert_eq!(frame_of(&mmu, 2), Some(0));

    let stats = mmu.stats();
    assert_eq!(stats.page_faults, 3);
    assert_eq!(stats.illegal_refs, 0);
    assert_eq!(stats.write_backs, 0);
}

#[test]
fn warm_up_fills_frames_in_ascending_order() {
    let mut mmu = Mmu::new(32, 5, 8, FIFOPageReplacer::new());

    let pages = [9, 2, 30, 4, 17];
    let trace: Vec<_> = pages.iter().map(|&p| r(p * 8)).collect();
    replay(&mut mmu, &trace);

    for (frame, &page) in pages.iter().enumerate() {
        assert_eq!(frame_of(&mmu, page), Some(frame));
    }
    assert!(!mmu.free_frames_left());
}

#[test]
fn eviction_order_ignores_hits() {
    let mut mmu = Mmu::new(8, 3, 1, FIFOPageReplacer::new());

    replay(&mut mmu, &[r(0), r(1), r(2)]);
    // Hammer the oldest page; FIFO must not care.
    replay(&mut mmu, &[w(0), r(0), w(0), r(1), r(0)]);

    replay(&mut mmu, &[r(3)]);
    assert_eq!(frame_of(&mmu, 0), None);
    assert_eq!(frame_of(&mmu, 3), Some(0));
    assert_eq!(mmu.stats().write_backs, 1);

    replay(&mut mmu, &[r(4)]);
    assert_eq!(frame_of(&mmu, 1), None);
    assert_eq!(frame_of(&mmu, 4), Some(1));

    replay(&mut mmu, &[r(5)]);
    assert_eq!(frame_of(&mmu, 2), None);
    assert_eq!(frame_of(&mmu, 5), Some(2));

    // Frame 0 was reloaded first, so it is the front again.
    replay(&mut mmu, &[r(6)]);
    assert_eq!(frame_of(&mmu, 3), None);
    assert_eq!(frame_of(&mmu, 6), Some(0));
}

#[test]
fn belady_anomaly_trace() {
    let trace: Vec<_> = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5].iter().map(|&p| r(p)).collect();

    let mut three = Mmu::new(6, 3, 1, FIFOPageReplacer::new());
    replay(&mut three, &trace);

    let mut four = Mmu::new(6, 4, 1, FIFOPageReplacer::new());
    replay(&mut four, &trace);

    assert_eq!(three.stats().page_faults, 9);
    assert_eq!(four.stats().page_faults, 10);
}
