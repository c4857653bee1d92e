//! Building an MMU from a configuration.

use pagesim::{Access, ConfigError, Mmu, PageReplacer, PolicyKind, SimConfig};

#[test]
fn partial_json_falls_back_to_defaults() {
    let config: SimConfig = serde_json::from_str(r#"{ "num_frames": 3, "policy": "lru" }"#).unwrap();

    assert_eq!(config.num_frames, 3);
    assert_eq!(config.policy, PolicyKind::Lru);
    assert_eq!(config.num_pages, SimConfig::default().num_pages);
    assert_eq!(config.page_size, SimConfig::default().page_size);
    assert_eq!(config.seed, None);
}

#[test]
fn unknown_policy_in_json_is_rejected() {
    let parsed = serde_json::from_str::<SimConfig>(r#"{ "policy": "clock" }"#);
    assert!(parsed.is_err());
}

#[test]
fn from_config_selects_the_policy() {
    for kind in [PolicyKind::Fifo, PolicyKind::Lru, PolicyKind::Random] {
        let config = SimConfig {
            policy: kind,
            seed: Some(1),
            ..SimConfig::default()
        };

        let mmu = Mmu::from_config(&config).unwrap();
        assert_eq!(mmu.replacer().kind(), kind);
        assert_eq!(mmu.policy_description(), mmu.replacer().description());
        assert_eq!(mmu.num_pages(), config.num_pages);
        assert_eq!(mmu.num_frames(), config.num_frames);
        assert_eq!(mmu.page_size(), config.page_size);
    }
}

#[test]
fn from_config_rejects_zero_frames() {
    let config = SimConfig {
        num_frames: 0,
        ..SimConfig::default()
    };

    assert_eq!(Mmu::from_config(&config).err(), Some(ConfigError::NoFrames));
}

#[test]
fn configured_mmu_translates() {
    let config = SimConfig {
        num_pages: 4,
        num_frames: 2,
        page_size: 1,
        verbose: true,
        policy: PolicyKind::Fifo,
        seed: None,
    };
    let mut mmu = Mmu::from_config(&config).unwrap();

    assert_eq!(mmu.translate(0, Access::Read), Ok(0));
    assert_eq!(mmu.translate(1, Access::Read), Ok(1));
    assert_eq!(mmu.translate(2, Access::Read), Ok(0));
    assert_eq!(mmu.stats().page_faults, 3);
}
