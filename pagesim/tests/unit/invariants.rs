//! Property tests: the bijection and the counters hold for any trace.

use pagesim::{Access, Mmu, PolicyKind, SimConfig};
use proptest::prelude::*;

use crate::common::assert_bijection;

fn policy() -> impl Strategy<Value = PolicyKind> {
    prop_oneof![
        Just(PolicyKind::Fifo),
        Just(PolicyKind::Lru),
        Just(PolicyKind::Random),
    ]
}

fn reference(max_address: usize) -> impl Strategy<Value = (bool, usize)> {
    (any::<bool>(), 0..max_address)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn bijection_holds_after_every_reference(
        kind in policy(),
        num_frames in 1usize..6,
        num_pages in 1usize..12,
        seed in any::<u64>(),
        trace in prop::collection::vec(reference(64), 0..120),
    ) {
        let config = SimConfig {
            num_pages,
            num_frames,
            page_size: 4,
            verbose: false,
            policy: kind,
            seed: Some(seed),
        };
        let mut mmu = Mmu::from_config(&config).unwrap();

        for &(is_write, address) in &trace {
            let access = if is_write { Access::Write } else { Access::Read };
            let result = mmu.translate(address, access);

            let page = address / 4;
            if page < num_pages {
                let physical = result.unwrap();
                let entry = mmu.tables().pages.get(page).unwrap();
                prop_assert!(entry.present);
                prop_assert_eq!(physical, entry.frame * 4 + address % 4);
                if is_write {
                    prop_assert!(entry.modified);
                }
            } else {
                prop_assert!(result.is_err());
            }

            assert_bijection(&mmu);
        }

        let stats = mmu.stats();
        prop_assert_eq!(stats.references() + stats.illegal_refs, trace.len() as u64);
        prop_assert!(stats.page_faults <= stats.references());
        prop_assert!(stats.write_backs <= stats.page_faults);

        let present = mmu.page_table_dump().iter().filter(|row| row.present).count();
        prop_assert!(present <= num_frames);
    }
}
