use std::collections::BTreeMap;

use pack_core::{
    Affix, BaseStats, CollectingSink, ContentOracle, CountRange, DamageType, Diagnostic,
    Difficulty, DifficultyOverrides, LevelRange, LevelRanges, MinionSpec, Monster, NoopSink,
    ResistanceMap, RngError, SpawnEntry, SpawnError, SpawnRequest, StatMultipliers, Tier,
    TierWeight, Zone, generate_pack,
};

/// Small hand-built tables for exercising the pipeline without the loader.
#[derive(Default)]
struct Tables {
    difficulties: Vec<Difficulty>,
    zones: Vec<Zone>,
    monsters: Vec<Monster>,
    tiers: Vec<Tier>,
    affixes: Vec<Affix>,
}

impl ContentOracle for Tables {
    fn difficulty(&self, id: &str) -> Option<&Difficulty> {
        self.difficulties.iter().find(|d| d.id == id)
    }
    fn zone(&self, id: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == id)
    }
    fn monster(&self, id: &str) -> Option<&Monster> {
        self.monsters.iter().find(|m| m.id == id)
    }
    fn tier(&self, id: &str) -> Option<&Tier> {
        self.tiers.iter().find(|t| t.id == id)
    }
    fn affix(&self, id: &str) -> Option<&Affix> {
        self.affixes.iter().find(|a| a.id == id)
    }
}

fn zone(id: &str, min: i32, max: i32, spawn: &[(&str, f64)]) -> Zone {
    Zone {
        id: id.into(),
        name: id.to_uppercase(),
        level_range: LevelRanges::flat(LevelRange::new(min, max).unwrap()),
        spawn_table: spawn
            .iter()
            .map(|(monster, weight)| SpawnEntry {
                monster_id: (*monster).into(),
                weight: *weight,
            })
            .collect(),
        tier_probs: Vec::new(),
        difficulty_multipliers: None,
    }
}

fn monster(id: &str, hp: f64, dps: f64, def: f64, offset: i32) -> Monster {
    Monster {
        id: id.into(),
        role: "melee".into(),
        base_level_offset: offset,
        base_stats: BaseStats::new(hp, dps, def),
        resists: ResistanceMap::zero(),
        ai: "melee_basic".into(),
    }
}

fn minimal_tables() -> Tables {
    Tables {
        difficulties: vec![Difficulty::neutral("normal")],
        zones: vec![zone("z1", 5, 5, &[("m1", 1.0)])],
        monsters: vec![monster("m1", 10.0, 5.0, 2.0, 0)],
        tiers: vec![Tier::plain("normal")],
        affixes: Vec::new(),
    }
}

fn affix(id: &str, key: &str, value: f64) -> Affix {
    Affix {
        id: id.into(),
        mods: BTreeMap::from([(key.to_owned(), value)]),
    }
}

/// Tables with every tier, a few affixes and two zones.
fn full_tables() -> Tables {
    let mut champion = Tier::plain("champion");
    champion.level_bonus = 2;
    champion.affix_count = CountRange::new(1, 2).unwrap();
    champion.multipliers = StatMultipliers {
        hp_mult: 2.0,
        dps_mult: 1.5,
        def_mult: 1.2,
    };

    let mut unique = Tier::plain("unique");
    unique.level_bonus = 3;
    unique.affix_count = CountRange::new(2, 3).unwrap();
    unique.minions = Some(MinionSpec {
        count_range: CountRange::new(2, 4).unwrap(),
        level_bonus: -1,
        multipliers: StatMultipliers {
            hp_mult: 0.5,
            dps_mult: 1.0,
            def_mult: 1.0,
        },
    });

    let mut boss = Tier::plain("boss");
    boss.level_bonus = 5;
    boss.affix_count = CountRange::exactly(3);

    let mut hell = Difficulty::neutral("hell");
    hell.hp_mult = 3.0;
    hell.dmg_mult = 2.0;
    hell.def_mult = 1.5;
    hell.res_bonus = ResistanceMap::uniform(40.0);
    hell.affix_pool = vec![
        "fire_enchanted".into(),
        "cold_enchanted".into(),
        "stone_skin".into(),
        "missing_affix".into(),
    ];

    let mut normal = Difficulty::neutral("normal");
    normal.affix_pool = vec!["fire_enchanted".into()];

    let mut crypt = zone(
        "crypt",
        20,
        24,
        &[("skeleton", 3.0), ("zombie", 1.0), ("ghost", 0.0)],
    );
    crypt.tier_probs = vec![
        TierWeight::new("normal", 0.5),
        TierWeight::new("champion", 0.2),
        TierWeight::new("unique", 0.2),
        TierWeight::new("boss", 0.1),
    ];
    crypt.difficulty_multipliers = Some(DifficultyOverrides {
        hp_mult: Some(1.1),
        dmg_mult: None,
        def_mult: None,
        res_bonus: ResistanceMap::zero().with(DamageType::Cold, 25.0),
    });

    Tables {
        difficulties: vec![normal, hell],
        zones: vec![zone("moor", 1, 4, &[("zombie", 1.0)]), crypt],
        monsters: vec![
            monster("skeleton", 40.0, 6.0, 3.0, 1),
            monster("zombie", 60.0, 4.0, 5.0, 0),
            monster("ghost", 30.0, 8.0, 0.0, 2),
        ],
        tiers: vec![Tier::plain("normal"), champion, unique, boss],
        affixes: vec![
            affix("fire_enchanted", "fire_res", 75.0),
            affix("cold_enchanted", "cold_res", 75.0),
            affix("stone_skin", "def_mult", 1.5),
        ],
    }
}

#[test]
fn minimal_pack_scenario() {
    let tables = minimal_tables();
    let pack = generate_pack(&tables, &SpawnRequest::new("z1", "normal", 42u32), &NoopSink)
        .expect("minimal pack");

    assert_eq!(pack.len(), 1);
    let leader = pack.leader();
    assert_eq!(leader.level, 5);
    assert_eq!(leader.stats.hp, 10);
    assert_eq!(leader.stats.dps, 5.0);
    assert_eq!(leader.stats.def, 2);
    assert!(leader.affixes.is_empty());
    assert_eq!(leader.loot_table, "common_creep");
    assert_eq!(leader.name, "M1 normal");
    assert_eq!(leader.tier, "normal");
    assert_eq!(leader.role, "melee");
    assert_eq!(leader.ai, "melee_basic");
}

#[test]
fn unique_with_minions_scenario() {
    let mut tables = minimal_tables();
    tables.zones[0].level_range = LevelRanges::flat(LevelRange::new(10, 10).unwrap());
    tables.zones[0].tier_probs = vec![TierWeight::new("unique", 1.0)];
    tables.monsters[0].base_stats = BaseStats::new(100.0, 5.0, 2.0);

    let mut unique = Tier::plain("unique");
    unique.level_bonus = 3;
    unique.minions = Some(MinionSpec {
        count_range: CountRange::exactly(2),
        level_bonus: -1,
        multipliers: StatMultipliers {
            hp_mult: 0.5,
            dps_mult: 1.0,
            def_mult: 1.0,
        },
    });
    tables.tiers.push(unique);

    let pack = generate_pack(&tables, &SpawnRequest::new("z1", "normal", "boss-room"), &NoopSink)
        .unwrap();

    assert_eq!(pack.len(), 3);
    assert_eq!(pack.leader().tier, "unique");
    assert_eq!(pack.leader().level, 13);
    assert_eq!(pack.leader().loot_table, "elite_creep");

    for minion in pack.minions() {
        assert_eq!(minion.tier, "normal");
        assert_eq!(minion.level, 9);
        assert_eq!(minion.stats.hp, 50);
        assert!(minion.affixes.is_empty());
        assert_eq!(minion.loot_table, "common_creep");
        assert_eq!(minion.name, "M1 normal");
    }
}

#[test]
fn same_request_same_pack() {
    let tables = full_tables();
    for seed in ["alpha", "beta", "gamma", "12345"] {
        let request = SpawnRequest::new("crypt", "hell", seed.parse::<pack_core::Seed>().unwrap());
        let a = generate_pack(&tables, &request, &NoopSink).unwrap();
        let b = generate_pack(&tables, &request, &NoopSink).unwrap();
        assert_eq!(a, b, "seed {seed}");
    }
}

#[test]
fn different_seeds_vary_the_pack() {
    let tables = full_tables();
    let packs: Vec<_> = (0..32u32)
        .map(|seed| {
            generate_pack(&tables, &SpawnRequest::new("crypt", "hell", seed), &NoopSink).unwrap()
        })
        .collect();
    let first = &packs[0];
    assert!(packs.iter().any(|p| p != first));
}

#[test]
fn invariants_hold_across_many_seeds() {
    let tables = full_tables();
    let mut saw_minions = false;

    for seed in 0..400u32 {
        let pack =
            generate_pack(&tables, &SpawnRequest::new("crypt", "hell", seed), &NoopSink).unwrap();
        let leader = pack.leader();

        assert_ne!(leader.monster_id, "ghost", "zero-weight monster picked");

        let tier = tables.tiers.iter().find(|t| t.id == leader.tier).unwrap();
        let monster = tables
            .monsters
            .iter()
            .find(|m| m.id == leader.monster_id)
            .unwrap();
        let zone_level = leader.level - tier.level_bonus - monster.base_level_offset;
        assert!((20..=24).contains(&zone_level), "zone level {zone_level}");

        // Three resolvable affixes in the hell pool.
        let expected_max = tier.affix_count.max().min(3) as usize;
        let expected_min = tier.affix_count.min().min(3) as usize;
        assert!(
            (expected_min..=expected_max).contains(&leader.affixes.len()),
            "tier {} got {} affixes",
            tier.id,
            leader.affixes.len()
        );
        let mut ids: Vec<_> = leader.affixes.iter().map(|a| a.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), leader.affixes.len(), "affixes must be distinct");
        assert!(!ids.contains(&"missing_affix"));

        for unit in &pack {
            for (kind, value) in unit.resists.iter() {
                assert!((-100.0..=99.0).contains(&value));
                // 40 from hell plus 25 cold from the zone; only affixes push past 100.
                let from_affix = unit
                    .affixes
                    .iter()
                    .filter_map(|a| a.mods.get(kind.resist_mod_key()))
                    .sum::<f64>();
                let zone_cold = if kind == DamageType::Cold { 25.0 } else { 0.0 };
                let combined = 40.0 + zone_cold + from_affix;
                assert_eq!(unit.immune.is_immune(kind), combined >= 100.0);
            }
        }

        if leader.tier == "unique" {
            assert!((3..=5).contains(&pack.len()));
            saw_minions = true;
        } else {
            assert_eq!(pack.len(), 1);
        }
    }

    assert!(saw_minions, "unique tier never rolled in 400 seeds");
}

#[test]
fn zone_overrides_scale_difficulty() {
    let tables = full_tables();
    let sink = CollectingSink::new();
    let request = SpawnRequest::new("crypt", "hell", 7u32).with_debug(true);
    generate_pack(&tables, &request, &sink).unwrap();

    let records = sink.take();
    let spawn = records
        .iter()
        .find_map(|d| match d {
            Diagnostic::Spawn(s) => Some(s),
            _ => None,
        })
        .expect("debug request emits a spawn record");
    assert_eq!(spawn.zone_id, "crypt");
    assert!(spawn.overrides_applied);
    assert!((spawn.multipliers.hp_mult - 3.3).abs() < 1e-9);
    assert_eq!(spawn.multipliers.dmg_mult, 2.0);
    assert!((20..=24).contains(&spawn.zone_level));
}

#[test]
fn debug_off_emits_no_spawn_record() {
    let tables = full_tables();
    let sink = CollectingSink::new();
    generate_pack(&tables, &SpawnRequest::new("moor", "normal", 1u32), &sink).unwrap();
    assert!(
        !sink
            .take()
            .iter()
            .any(|d| matches!(d, Diagnostic::Spawn(_)))
    );
}

#[test]
fn unknown_ids_fail_the_call() {
    let tables = full_tables();

    let err = generate_pack(&tables, &SpawnRequest::new("nowhere", "hell", 1u32), &NoopSink)
        .unwrap_err();
    assert_eq!(err, SpawnError::UnknownZone("nowhere".into()));

    // Level ranges only exist for the three canonical keys.
    let err = generate_pack(&tables, &SpawnRequest::new("moor", "inferno", 1u32), &NoopSink)
        .unwrap_err();
    assert!(matches!(err, SpawnError::Formula(_)));

    // "nightmare" has a level range but no difficulty record here.
    let err = generate_pack(&tables, &SpawnRequest::new("moor", "nightmare", 1u32), &NoopSink)
        .unwrap_err();
    assert_eq!(err, SpawnError::UnknownDifficulty("nightmare".into()));
}

#[test]
fn zero_weight_spawn_table_fails() {
    let mut tables = minimal_tables();
    tables.zones[0].spawn_table[0].weight = 0.0;
    let err =
        generate_pack(&tables, &SpawnRequest::new("z1", "normal", 1u32), &NoopSink).unwrap_err();
    assert!(matches!(
        err,
        SpawnError::Rng(RngError::NonPositiveWeight { .. })
    ));
}

#[test]
fn empty_spawn_table_fails() {
    let mut tables = minimal_tables();
    tables.zones[0].spawn_table.clear();
    let err =
        generate_pack(&tables, &SpawnRequest::new("z1", "normal", 1u32), &NoopSink).unwrap_err();
    assert_eq!(err, SpawnError::EmptySpawnTable("z1".into()));
}

#[test]
fn unresolvable_spawn_monster_fails() {
    let mut tables = minimal_tables();
    tables.zones[0].spawn_table[0].monster_id = "m2".into();
    let err =
        generate_pack(&tables, &SpawnRequest::new("z1", "normal", 1u32), &NoopSink).unwrap_err();
    assert_eq!(
        err,
        SpawnError::UnknownMonster {
            zone: "z1".into(),
            monster: "m2".into()
        }
    );
}
