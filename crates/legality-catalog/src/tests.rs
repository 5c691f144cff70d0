//! Tests for catalog and configuration loading.

use std::io::Write;

use legality_core::{Ball, CreatureRecord, EvolutionLineage, Form, GameVersion, Species};

use super::*;

const MINIMAL_CATALOG: &str = r#"
    revision = 7

    [quirks]
    heavy_ball_banned = [374]
    untracked_gift = { species = 490, generation = 4 }
    evolution_only = { species = 292, after_generation = 3 }
    dream_world = { location = 75, generation = 5, balls = [4, 25] }
    hub = { location = 30016, generation = 7 }

    [[wild]]
    generation = 3
    balls = [4]
    [[wild]]
    generation = 4
    balls = [4]
    [[wild]]
    generation = 5
    balls = [4]
    [[wild]]
    generation = 6
    balls = [4]
    [[wild]]
    generation = 7
    balls = [4, 26]

    [gen6]
    max_ball = 26
    breeds_male_only = [128]
    late_species = { above = 650, except = [700] }
    safari = { inheritable = [16], hidden_ban = "always" }
    apricorn = { inheritable = [25] }
    sport = { inheritable = [10], hidden_ban = { lineage = [10] } }
    dream = { inheritable = [133], hidden_ban = { species = [311] } }
    quick_heal_dusk = { banned = [1] }
    gen3 = { banned = [1], hidden_banned = ["585-1"] }

    [gen7]
    max_ball = 27
    wild_fallback_above = 721
    base_only = { first = 722, last = 730 }
    safari = { inheritable = [16], male_inheritable = [32] }
    apricorn = { inheritable = [25], hidden_ban = { base_form = ["669-2"] } }
    sport = { inheritable = [10] }
    dream = { inheritable = [133] }
    quick_heal_dusk = { banned = [1] }
    gen3 = { banned = [1] }
    beast = { hidden_banned = ["669-3"], native_range = { first = 732, last = 785 }, past_gen_natives = [10], past_gen_uncapturable = [138], past_gen_scans = [1] }
"#;

#[test]
fn test_builtin_catalog_is_valid() {
    let catalog = RuleCatalog::builtin();
    assert!(catalog.validate().is_ok());
    assert_eq!(catalog.gen7.max_ball, Ball(27));
    assert_eq!(catalog.quirks.untracked_gift.species, Species(490));
    assert!(catalog.quirks.heavy_ball_banned.contains(Species(374)));
    assert!(catalog.quirks.dream_world.balls.contains(Ball::DREAM));
    assert!(!catalog.evolution.is_empty());
}

#[test]
fn test_builtin_wild_table_prefers_game_specific_row() {
    let catalog = RuleCatalog::builtin();
    let hgss = CreatureRecord::new(Species(25), Ball::LEVEL, GameVersion::SoulSilver);
    let platinum = CreatureRecord::new(Species(25), Ball::LEVEL, GameVersion::Platinum);

    assert!(catalog.wild_balls(&hgss).contains(Ball::LEVEL));
    assert!(!catalog.wild_balls(&platinum).contains(Ball::LEVEL));
    assert!(catalog.wild_balls(&platinum).contains(Ball::DUSK));
}

#[test]
fn test_builtin_lineage_is_current_first() {
    let catalog = RuleCatalog::builtin();
    let lineage = catalog.evolution.lineage_of(Species(26));
    assert_eq!(lineage.current(), Species(26));
    assert_eq!(lineage.base(), Species(172));
    assert_eq!(lineage.len(), 3);
}

#[test]
fn test_builtin_lineage_covers_inheritable_families() {
    let catalog = RuleCatalog::builtin();
    let families = [
        (85, 84),
        (87, 86),
        (89, 88),
        (91, 90),
        (101, 100),
        (463, 108),
        (110, 109),
        (195, 194),
        (210, 209),
        (202, 360),
        (790, 789),
    ];
    for (evolved, base) in families {
        let lineage = catalog.evolution.lineage_of(Species(evolved));
        assert!(lineage.contains(Species(base)), "{} misses {}", evolved, base);
        assert_eq!(lineage.base(), Species(base), "base of {}", evolved);
    }

    // Branches share a parent.
    assert_eq!(catalog.evolution.lineage_of(Species(791)).base(), Species(789));
    assert_eq!(catalog.evolution.lineage_of(Species(792)).base(), Species(789));
}

#[test]
fn test_builtin_gen6_safari_bans_every_hidden_ability() {
    let catalog = RuleCatalog::builtin();
    assert_eq!(catalog.gen6.safari.hidden_ban, HiddenAbilityBan::Always);
}

#[test]
fn test_minimal_catalog_parses() {
    let catalog = RuleCatalog::from_toml_str(MINIMAL_CATALOG).unwrap();
    assert_eq!(catalog.revision, 7);
    assert_eq!(catalog.gen6.safari.hidden_ban, HiddenAbilityBan::Always);
    assert_eq!(catalog.gen6.apricorn.hidden_ban, HiddenAbilityBan::Never);
    assert!(catalog.gen7.safari.male_inheritable.contains(Species(32)));
    assert!(catalog.evolution.is_empty());
}

#[test]
fn test_hidden_ability_ban_policies() {
    let catalog = RuleCatalog::from_toml_str(MINIMAL_CATALOG).unwrap();
    let lineage = EvolutionLineage::from_chain([Species(11), Species(10)]);

    assert!(catalog.gen6.sport.hidden_ban.bans(Species(11), Form(0), &lineage));
    assert!(!catalog.gen6.dream.hidden_ban.bans(Species(11), Form(0), &lineage));
    assert!(catalog.gen6.dream.hidden_ban.bans(
        Species(311),
        Form(0),
        &EvolutionLineage::single(Species(311))
    ));

    let floette = EvolutionLineage::from_chain([Species(670), Species(669)]);
    assert!(catalog.gen7.apricorn.hidden_ban.bans(Species(670), Form(2), &floette));
    assert!(!catalog.gen7.apricorn.hidden_ban.bans(Species(670), Form(1), &floette));
}

#[test]
fn test_beast_rules_allow_conditions() {
    let catalog = RuleCatalog::from_toml_str(MINIMAL_CATALOG).unwrap();
    let beast = &catalog.gen7.beast;

    assert!(beast.allows(Species(750), &EvolutionLineage::single(Species(750))));
    assert!(beast.allows(Species(12), &EvolutionLineage::from_chain([Species(12), Species(10)])));
    assert!(beast.allows(Species(1), &EvolutionLineage::single(Species(1))));
    assert!(!beast.allows(Species(138), &EvolutionLineage::single(Species(138))));
}

#[test]
fn test_missing_catch_all_wild_row_is_rejected() {
    let broken = MINIMAL_CATALOG.replacen(
        "generation = 5\n    balls = [4]",
        "generation = 5\n    games = [\"black\"]\n    balls = [4]",
        1,
    );
    let err = RuleCatalog::from_toml_str(&broken).unwrap_err();
    assert!(matches!(err, CatalogError::Invalid(msg) if msg.contains("generation 5")));
}

#[test]
fn test_max_ball_outside_bitset_is_rejected() {
    let broken = MINIMAL_CATALOG.replacen("max_ball = 27", "max_ball = 90", 1);
    let err = RuleCatalog::from_toml_str(&broken).unwrap_err();
    assert!(matches!(err, CatalogError::Invalid(msg) if msg.contains("gen7.max_ball")));
}

#[test]
fn test_empty_tier_is_rejected() {
    let broken = MINIMAL_CATALOG.replacen(
        "apricorn = { inheritable = [25] }",
        "apricorn = { inheritable = [] }",
        1,
    );
    let err = RuleCatalog::from_toml_str(&broken).unwrap_err();
    assert!(matches!(err, CatalogError::Invalid(msg) if msg.contains("gen6.apricorn")));
}

#[test]
fn test_ball_outside_bitset_fails_to_parse() {
    let broken = MINIMAL_CATALOG.replacen("balls = [4, 26]", "balls = [4, 200]", 1);
    assert!(matches!(
        RuleCatalog::from_toml_str(&broken),
        Err(CatalogError::Toml(_))
    ));
}

#[test]
fn test_malformed_species_form_fails_to_parse() {
    let broken = MINIMAL_CATALOG.replacen("\"585-1\"", "\"585/1\"", 1);
    assert!(matches!(
        RuleCatalog::from_toml_str(&broken),
        Err(CatalogError::Toml(_))
    ));
}

#[test]
fn test_conflicting_evolution_chains_fail_to_parse() {
    let catalog = format!(
        "{}\n[evolution]\nchains = [[1, 2], [3, 2]]\n",
        MINIMAL_CATALOG
    );
    assert!(RuleCatalog::from_toml_str(&catalog).is_err());
}

#[test]
fn test_builtin_catalog_survives_toml_round_trip() {
    let catalog = RuleCatalog::builtin();
    let text = catalog.to_toml_string().unwrap();
    let reparsed = RuleCatalog::from_toml_str(&text).unwrap();

    assert_eq!(reparsed.revision, catalog.revision);
    assert_eq!(reparsed.wild, catalog.wild);
    assert_eq!(reparsed.gen6.dream.inheritable, catalog.gen6.dream.inheritable);
    assert_eq!(reparsed.gen7.apricorn.hidden_ban, catalog.gen7.apricorn.hidden_ban);
    assert_eq!(reparsed.evolution.len(), catalog.evolution.len());
}

#[test]
fn test_load_catalog_from_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(MINIMAL_CATALOG.as_bytes()).unwrap();

    let catalog = RuleCatalog::load(file.path()).unwrap();
    assert_eq!(catalog.revision, 7);
}

#[test]
fn test_load_missing_catalog_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = RuleCatalog::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)));
}

#[test]
fn test_config_toml_parsing() {
    let config = AnalysisConfig::from_toml_str(
        r#"
        catalog = "rules/catalog.toml"
        unchecked = "fail"
        batch_threads = "none"
    "#,
    )
    .unwrap();

    assert_eq!(
        config.catalog.as_deref(),
        Some(std::path::Path::new("rules/catalog.toml"))
    );
    assert_eq!(config.unchecked, UncheckedPolicy::Fail);
    assert_eq!(config.batch_threads, BatchThreadCount::None);
}

#[test]
fn test_config_yaml_parsing() {
    let yaml = r#"
        unchecked: report
        batch_threads: auto
    "#;

    let config = AnalysisConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.unchecked, UncheckedPolicy::Report);
    assert_eq!(config.batch_threads, BatchThreadCount::Auto);
    assert!(config.catalog.is_none());
}

#[test]
fn test_config_rejects_zero_threads() {
    let err = AnalysisConfig::from_toml_str("batch_threads = { count = 0 }").unwrap_err();
    assert!(matches!(err, CatalogError::Invalid(_)));
}

#[test]
fn test_config_builder() {
    let config = AnalysisConfig::new()
        .with_catalog("custom.yaml")
        .with_unchecked(UncheckedPolicy::Fail)
        .with_batch_threads(BatchThreadCount::Count(2));

    assert_eq!(config.unchecked, UncheckedPolicy::Fail);
    assert_eq!(config.batch_threads, BatchThreadCount::Count(2));
    assert!(config.catalog.is_some());
}

#[test]
fn test_config_loads_external_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let catalog_path = dir.path().join("catalog.toml");
    std::fs::write(&catalog_path, MINIMAL_CATALOG).unwrap();

    let config_path = dir.path().join("legality.yaml");
    std::fs::write(
        &config_path,
        format!("catalog: {}\nunchecked: fail\n", catalog_path.display()),
    )
    .unwrap();

    let config = AnalysisConfig::load(&config_path).unwrap();
    let catalog = config.load_catalog().unwrap();
    assert_eq!(catalog.revision, 7);
}

#[test]
fn test_config_default_when_missing() {
    let config = AnalysisConfig::load("/nonexistent/legality.toml").unwrap_or_default();
    assert_eq!(config, AnalysisConfig::default());
}
