use legality_core::{Ball, FixedBall, GameVersion, Generation, Outcome, ResultCode, SlotType};
use legality_test::origin::{
    distribution, egg, link_gift, static_gift, trade, unclassified, wild, wild_slot,
};

use super::*;

#[test]
fn test_distribution_requires_recorded_ball() {
    let origin = distribution(151, Generation::GEN6, Some(Ball::CHERISH));

    assert!(check(&record(151, Ball::CHERISH, GameVersion::X), &origin).is_valid());

    let verdict = check(&record(151, Ball::POKE, GameVersion::X), &origin);
    assert_eq!(verdict.outcome, Outcome::Invalid);
    assert_eq!(verdict.code, ResultCode::BallEncounterMismatch);
}

#[test]
fn test_untracked_distribution_is_poke_ball() {
    let origin = distribution(490, Generation::GEN4, None);

    assert!(check(&record(490, Ball::POKE, GameVersion::Platinum), &origin).is_valid());
    assert!(check(&record(490, Ball::CHERISH, GameVersion::Platinum), &origin).is_invalid());

    // Only the one distribution is exempt.
    let other = distribution(491, Generation::GEN4, None);
    assert!(check(&record(491, Ball::POKE, GameVersion::Platinum), &other).is_invalid());
}

#[test]
fn test_link_gift_and_trade_use_fixed_ball() {
    let gift = link_gift(385, Ball::CHERISH);
    assert!(check(&record(385, Ball::CHERISH, GameVersion::Sapphire), &gift).is_valid());
    assert!(check(&record(385, Ball::POKE, GameVersion::Sapphire), &gift).is_invalid());

    let traded = trade(83, Ball::POKE);
    assert!(check(&record(83, Ball::POKE, GameVersion::X), &traded).is_valid());
    assert!(check(&record(83, Ball::ULTRA, GameVersion::X), &traded).is_invalid());
}

#[test]
fn test_static_gift_with_fixed_choice() {
    let choice = FixedBall::AnyOf([Ball::POKE, Ball::PREMIER].into_iter().collect());
    let origin = static_gift(133, Generation::GEN6, choice);

    let record = record(133, Ball::POKE, GameVersion::X);
    assert_eq!(passing_balls(&record, &origin), vec![4, 12]);
}

#[test]
fn test_unclassified_origin_is_poke_ball() {
    let origin = unclassified(25);
    assert_eq!(
        passing_balls(&record(25, Ball::POKE, GameVersion::X), &origin),
        vec![4]
    );
}

#[test]
fn test_early_formats_are_not_applicable() {
    let origin = wild(25, Generation::GEN2);
    for ball in [Ball::NONE, Ball::POKE, Ball::MASTER, Ball(200)] {
        assert_eq!(verify(&record(25, ball, GameVersion::Crystal), &origin), None);
    }

    // A later game's record read back from a generation 2 format.
    let downgraded = record(25, Ball::ULTRA, GameVersion::X).with_format(2);
    assert_eq!(verify(&downgraded, &wild(25, Generation::GEN6)), None);
}

#[test]
fn test_generation_two_context_is_not_applicable() {
    let record = record(25, Ball::ULTRA, GameVersion::X);
    let origin = egg(172);
    let ctx = AnalysisContext::new(&record, &origin, Generation::GEN2);
    assert_eq!(BallVerifier::builtin().verify(&ctx), None);
}

#[test]
fn test_unknown_generation_is_unchecked() {
    let record = record(25, Ball::POKE, GameVersion::UltraSun);
    let origin = wild(25, Generation::GEN7);
    let ctx = AnalysisContext::new(&record, &origin, Generation::of(8));

    let verdict = BallVerifier::builtin().verify(&ctx).unwrap();
    assert_eq!(verdict.outcome, Outcome::Unchecked);
    assert_eq!(verdict.code, ResultCode::BallUnverified);
}

#[test]
fn test_evolution_only_species_needs_poke_ball() {
    let origin = wild(290, Generation::GEN4);
    assert!(check(&record(292, Ball::POKE, GameVersion::Platinum), &origin).is_valid());
    assert!(check(&record(292, Ball::ULTRA, GameVersion::Platinum), &origin).is_invalid());

    // Still capturable in generation 3.
    let origin = wild(292, Generation::GEN3);
    assert!(check(&record(292, Ball::ULTRA, GameVersion::Emerald), &origin).is_valid());
}

#[test]
fn test_heavy_ball_banned_in_sun_moon() {
    let origin = wild(374, Generation::GEN7);

    let verdict = check(&record(374, Ball::HEAVY, GameVersion::Moon), &origin);
    assert!(verdict.is_invalid());
    assert_eq!(verdict.code, ResultCode::BallHeavyUnobtainable);

    assert!(check(&record(374, Ball::HEAVY, GameVersion::UltraMoon), &origin).is_valid());
    assert!(check(&record(374, Ball::LEVEL, GameVersion::Moon), &origin).is_valid());
}

#[test]
fn test_heavy_ball_ban_skips_eggs() {
    let verdict = check(&record(374, Ball::HEAVY, GameVersion::Sun), &egg(374));
    assert_ne!(verdict.code, ResultCode::BallHeavyUnobtainable);
}

#[test]
fn test_heavy_ball_ban_applies_before_hub_rule() {
    let origin = wild_slot(785, Generation::GEN7, 30016, SlotType::Grass);
    let verdict = check(&record(785, Ball::HEAVY, GameVersion::Sun), &origin);
    assert_eq!(verdict.code, ResultCode::BallHeavyUnobtainable);
}
