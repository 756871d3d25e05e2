use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use pack_content::{DocumentKind, ValidationErrorKind};
use pack_core::{CollectingSink, Diagnostic, SpawnError, SpawnRequest};
use runtime::{
    DataLoader, DocumentCache, DocumentSet, DocumentSource, FetchError, LoadError, RuntimeError,
    Spawner, StaticDocumentSource,
};
use serde_json::{Value, json};

/// Counts fetches so tests can observe cache reuse.
struct CountingSource {
    inner: StaticDocumentSource,
    fetches: AtomicUsize,
}

impl CountingSource {
    fn new(inner: StaticDocumentSource) -> Self {
        Self {
            inner,
            fetches: AtomicUsize::new(0),
        }
    }

    fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentSource for CountingSource {
    async fn fetch(&self, location: &str) -> Result<String, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch(location).await
    }
}

struct Fixture {
    difficulties: Value,
    zones: Value,
    monsters: Value,
    tiers: Value,
    affixes: Value,
    loot_tables: Value,
}

impl Fixture {
    /// The smallest consistent content: one zone, one monster, a flat tier.
    fn minimal() -> Self {
        Self {
            difficulties: json!([{
                "id": "normal", "hp_mult": 1, "dmg_mult": 1, "def_mult": 1,
                "res_bonus": {}, "affix_pool": []
            }]),
            zones: json!([{
                "id": "z1", "name": "Zone One",
                "level_range": {"normal": [5, 5], "nightmare": [35, 35], "hell": [65, 65]},
                "spawn_table": [{"monster_id": "m1", "weight": 1}]
            }]),
            monsters: json!([{
                "id": "m1", "role": "melee", "base_level_offset": 0,
                "base_stats": {"hp": 10, "dps": 5, "def": 2}, "ai": "melee_basic"
            }]),
            tiers: json!([{
                "id": "normal", "level_bonus": 0, "hp_mult": 1, "dps_mult": 1, "def_mult": 1,
                "affix_count": [0, 0]
            }]),
            affixes: json!([]),
            loot_tables: json!([
                {"id": "common_creep", "rolls": 1, "entries": [{"group": "gold", "weight": 1}]},
                {"id": "elite_creep", "rolls": 2, "entries": [{"group": "magic", "weight": 1}]}
            ]),
        }
    }

    /// A richer content set with every tier, affixes and zone overrides.
    fn full() -> Self {
        Self {
            difficulties: json!([
                {"id": "normal", "hp_mult": 1, "dmg_mult": 1, "def_mult": 1,
                 "res_bonus": {}, "affix_pool": ["fire_enchanted", "cold_enchanted"]},
                {"id": "hell", "hp_mult": 3, "dmg_mult": 2, "def_mult": 1.5, "res_bonus": 40,
                 "affix_pool": ["fire_enchanted", "cold_enchanted", "stone_skin", "extra_fast"]}
            ]),
            zones: json!([
                {"id": "crypt", "name": "Crypt",
                 "level_range": {"normal": [8, 10], "nightmare": [38, 40], "hell": [68, 70]},
                 "spawn_table": [
                     {"monster_id": "skeleton", "weight": 3},
                     {"monster_id": "zombie", "weight": 1}
                 ],
                 "tier_probs": {"normal": 0.4, "champion": 0.2, "unique": 0.3, "boss": 0.1},
                 "difficulty_multipliers": {"hp_mult": 1.1, "res_bonus": {"cold": 20}}}
            ]),
            monsters: json!([
                {"id": "skeleton", "role": "melee", "base_level_offset": 1,
                 "base_stats": {"hp": 40, "dps": 6, "def": 3},
                 "resists": {"poison": 60}, "ai": "melee_basic"},
                {"id": "zombie", "role": "melee", "base_level_offset": 0,
                 "base_stats": {"hp": 60, "dps": 4, "def": 5}, "ai": "melee_slow"}
            ]),
            tiers: json!([
                {"id": "normal", "level_bonus": 0, "hp_mult": 1, "dps_mult": 1, "def_mult": 1,
                 "affix_count": [0, 0]},
                {"id": "champion", "level_bonus": 2, "hp_mult": 2, "dps_mult": 1.5,
                 "def_mult": 1.2, "affix_count": [1, 2]},
                {"id": "unique", "level_bonus": 3, "hp_mult": 4, "dps_mult": 2, "def_mult": 1.5,
                 "affix_count": [2, 3],
                 "minions": {"count_range": [2, 4], "level_bonus": -1, "hp_mult": 0.5}},
                {"id": "boss", "level_bonus": 5, "hp_mult": 8, "dps_mult": 3, "def_mult": 2,
                 "affix_count": [3, 3]}
            ]),
            affixes: json!([
                {"id": "fire_enchanted", "mods": {"fire_res": 75}},
                {"id": "cold_enchanted", "mods": {"cold_res": 75}},
                {"id": "stone_skin", "mods": {"def_mult": 1.5, "physical_res": 30}},
                {"id": "extra_fast", "mods": {"move_speed": 0.3}}
            ]),
            loot_tables: Fixture::minimal().loot_tables,
        }
    }

    fn source(&self) -> StaticDocumentSource {
        let documents = DocumentSet::default();
        [
            (DocumentKind::Difficulties, &self.difficulties),
            (DocumentKind::Zones, &self.zones),
            (DocumentKind::Monsters, &self.monsters),
            (DocumentKind::Tiers, &self.tiers),
            (DocumentKind::Affixes, &self.affixes),
            (DocumentKind::LootTables, &self.loot_tables),
        ]
        .into_iter()
        .fold(StaticDocumentSource::new(), |source, (kind, value)| {
            source.with(documents.location(kind), value.to_string())
        })
    }

    fn spawner(&self) -> Spawner {
        let loader = DataLoader::new(
            Arc::new(self.source()),
            Arc::new(DocumentCache::new()),
            DocumentSet::default(),
        );
        Spawner::new(loader)
    }
}

#[tokio::test]
async fn minimal_pack() {
    let spawner = Fixture::minimal().spawner();
    let pack = spawner
        .spawn_pack(SpawnRequest::new("z1", "normal", 42u32))
        .await
        .unwrap();

    assert_eq!(pack.len(), 1);
    let leader = pack.leader();
    assert_eq!(leader.level, 5);
    assert_eq!(leader.stats.hp, 10);
    assert_eq!(leader.stats.dps, 5.0);
    assert_eq!(leader.stats.def, 2);
    assert!(leader.affixes.is_empty());
    assert_eq!(leader.loot_table, "common_creep");
}

#[tokio::test]
async fn unique_with_minions() {
    let mut fixture = Fixture::minimal();
    fixture.zones[0]["tier_probs"] = json!({"unique": 1});
    fixture.tiers.as_array_mut().unwrap().push(json!({
        "id": "unique", "level_bonus": 3, "hp_mult": 4, "dps_mult": 2, "def_mult": 1.5,
        "affix_count": [0, 0],
        "minions": {"count_range": [2, 2], "level_bonus": -1, "hp_mult": 0.5}
    }));

    let pack = fixture
        .spawner()
        .spawn_pack(SpawnRequest::new("z1", "normal", "unique"))
        .await
        .unwrap();

    assert_eq!(pack.len(), 3);
    assert_eq!(pack.leader().tier, "unique");
    assert_eq!(pack.leader().loot_table, "elite_creep");
    for minion in pack.minions() {
        assert_eq!(minion.tier, "normal");
        assert_eq!(minion.level, 4);
        assert_eq!(minion.stats.hp, 5);
        assert!(minion.affixes.is_empty());
    }
}

#[tokio::test]
async fn repeated_requests_reproduce_the_pack() {
    let spawner = Fixture::full().spawner();
    for seed in ["alpha", "beta", "1234", "-7"] {
        let request = SpawnRequest::new("crypt", "hell", seed.parse::<pack_core::Seed>().unwrap());
        let first = spawner.spawn_pack(request.clone()).await.unwrap();
        let second = spawner.spawn_pack(request).await.unwrap();
        assert_eq!(first, second, "seed {seed}");
    }
}

#[tokio::test]
async fn concurrent_requests_share_one_snapshot() {
    let spawner = Fixture::full().spawner();
    let handles: Vec<_> = (0..16u32)
        .map(|seed| {
            let spawner = spawner.clone();
            tokio::spawn(async move {
                spawner
                    .spawn_pack(SpawnRequest::new("crypt", "hell", seed))
                    .await
            })
        })
        .collect();

    for (seed, handle) in handles.into_iter().enumerate() {
        let pack = handle.await.unwrap().unwrap();
        let again = spawner
            .spawn_pack(SpawnRequest::new("crypt", "hell", seed as u32))
            .await
            .unwrap();
        assert_eq!(pack, again);
    }
}

#[tokio::test]
async fn invariants_hold_over_many_seeds() {
    let spawner = Fixture::full().spawner();
    let data = spawner.data().await.unwrap();
    let hell = data.zone("crypt").unwrap().level_range.hell;

    for seed in 0..300u32 {
        let pack = spawner
            .spawn_pack(SpawnRequest::new("crypt", "hell", seed))
            .await
            .unwrap();
        let leader = pack.leader();
        let tier = data.tier(&leader.tier).unwrap();
        let monster = data.monster(&leader.monster_id).unwrap();

        let zone_level = leader.level - tier.level_bonus - monster.base_level_offset;
        assert!(hell.contains(zone_level));

        // Four affixes in the hell pool, so no tier is clamped.
        let count = leader.affixes.len() as u32;
        assert!(tier.affix_count.contains(count));

        for unit in &pack {
            for (_, value) in unit.resists.iter() {
                assert!((-100.0..=99.0).contains(&value));
            }
            assert!(unit.immune.types().all(|kind| unit.resists.get(kind) == 99.0));
        }
    }
}

#[tokio::test]
async fn debug_requests_emit_a_spawn_record() {
    let sink = Arc::new(CollectingSink::new());
    let spawner = Fixture::full()
        .spawner()
        .with_sink(sink.clone())
        .with_debug(true);

    spawner
        .spawn_pack(SpawnRequest::new("crypt", "normal", 9u32))
        .await
        .unwrap();

    let records = sink.take();
    let spawn = records
        .iter()
        .find_map(|record| match record {
            Diagnostic::Spawn(spawn) => Some(spawn),
            _ => None,
        })
        .unwrap();
    assert_eq!(spawn.zone_id, "crypt");
    assert!(spawn.overrides_applied);
    assert!((spawn.multipliers.hp_mult - 1.1).abs() < 1e-9);
    assert!((8..=10).contains(&spawn.zone_level));
}

#[tokio::test]
async fn snapshot_is_fetched_once_until_cleared() {
    let source = Arc::new(CountingSource::new(Fixture::minimal().source()));
    let cache = Arc::new(DocumentCache::new());
    let loader = DataLoader::new(source.clone(), cache.clone(), DocumentSet::default());

    let first = loader.load().await.unwrap();
    let second = loader.load().await.unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(source.fetches(), 6);
    assert_eq!(cache.len().unwrap(), 6);

    // A second loader sharing the cache reuses it too.
    let other = DataLoader::new(source.clone(), cache.clone(), DocumentSet::default());
    other.load().await.unwrap();
    assert_eq!(source.fetches(), 6);

    cache.clear().unwrap();
    let third = loader.load().await.unwrap();
    assert_eq!(source.fetches(), 12);
    assert!(!Arc::ptr_eq(&first, &third));
    assert_eq!(*first, *third);
}

#[tokio::test]
async fn validated_documents_are_reused_across_sets() {
    let source = Arc::new(CountingSource::new(
        Fixture::minimal()
            .source()
            .with("zones.alt.json", Fixture::minimal().zones.to_string()),
    ));
    let cache = Arc::new(DocumentCache::new());

    DataLoader::new(source.clone(), cache.clone(), DocumentSet::default())
        .load()
        .await
        .unwrap();
    let alternate = DocumentSet::default().with(DocumentKind::Zones, "zones.alt.json");
    DataLoader::new(source.clone(), cache.clone(), alternate)
        .load()
        .await
        .unwrap();

    assert_eq!(source.fetches(), 7);
}

#[tokio::test]
async fn unknown_monster_reference_fails_the_load() {
    let mut fixture = Fixture::minimal();
    fixture.zones[0]["spawn_table"][0]["monster_id"] = json!("m404");

    let err = fixture
        .spawner()
        .spawn_pack(SpawnRequest::new("z1", "normal", 1u32))
        .await
        .unwrap_err();

    match err {
        RuntimeError::Load(LoadError::Validation(err)) => {
            assert_eq!(err.document, DocumentKind::Zones);
            assert_eq!(err.kind, ValidationErrorKind::UnknownReference("monster"));
            assert_eq!(
                err.to_string(),
                r#"[zones] zone[0].spawn_table[0].monster_id: unknown monster id (got "m404")"#
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn transport_and_parse_failures_name_the_document() {
    let source = Fixture::minimal().source().with_status("tiers.json", 500);
    let loader = DataLoader::new(
        Arc::new(source),
        Arc::new(DocumentCache::new()),
        DocumentSet::default(),
    );
    let err = loader.load().await.unwrap_err();
    assert!(matches!(
        err,
        LoadError::Fetch {
            document: DocumentKind::Tiers,
            source: FetchError::Status { status: 500, .. }
        }
    ));

    let source = Fixture::minimal().source().with("monsters.json", "[{oops");
    let cache = Arc::new(DocumentCache::new());
    let loader = DataLoader::new(Arc::new(source), cache.clone(), DocumentSet::default());
    let err = loader.load().await.unwrap_err();
    assert!(matches!(
        err,
        LoadError::Parse {
            document: DocumentKind::Monsters,
            ..
        }
    ));
    assert!(cache.snapshot(&DocumentSet::default()).unwrap().is_none());
}

#[tokio::test]
async fn spawn_errors_leave_the_snapshot_usable() {
    let spawner = Fixture::minimal().spawner();

    let err = spawner
        .spawn_pack(SpawnRequest::new("nowhere", "normal", 1u32))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Spawn(SpawnError::UnknownZone(ref zone)) if zone == "nowhere"
    ));

    let err = spawner
        .spawn_pack(SpawnRequest::new("z1", "hell", 1u32))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Spawn(SpawnError::UnknownDifficulty(_))
    ));

    assert!(
        spawner
            .spawn_pack(SpawnRequest::new("z1", "normal", 1u32))
            .await
            .is_ok()
    );
}
