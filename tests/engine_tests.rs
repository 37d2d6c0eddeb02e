//! Match engine integration tests: flipping, locking, completion, levels.

use alien_memory::catalog::{AssetCatalog, Identity};
use alien_memory::core::{GameConfig, MatchError, Point};
use alien_memory::engine::{MatchEngine, Phase, RevealOutcome, TickOutcome};

fn catalog(n: usize) -> AssetCatalog {
    let names: Vec<String> = (1..=n).map(|i| format!("alien{}.png", i)).collect();
    AssetCatalog::from_file_names("images/aliens", &names).unwrap()
}

fn engine(seed: u64) -> MatchEngine {
    MatchEngine::new(catalog(8), GameConfig::default(), seed).unwrap()
}

/// Centres of both tiles of every pair, in deal order of the first tile.
fn pairs(engine: &MatchEngine) -> Vec<(Point, Point)> {
    let tiles = engine.state().tiles();
    let mut seen: Vec<&Identity> = Vec::new();
    let mut out = Vec::new();

    for (i, tile) in tiles.iter().enumerate() {
        if seen.contains(&&tile.identity) {
            continue;
        }
        seen.push(&tile.identity);
        let mate = tiles
            .iter()
            .skip(i + 1)
            .find(|t| t.identity == tile.identity)
            .expect("every identity appears twice");
        out.push((tile.bounds.center(), mate.bounds.center()));
    }

    out
}

/// Match every pair on the board.
fn solve(engine: &mut MatchEngine) {
    for (a, b) in pairs(engine) {
        engine.handle_pointer_down(a);
        engine.handle_pointer_down(b);
    }
}

/// Run ticks until the lock releases.
fn wait_out_lock(engine: &mut MatchEngine) {
    for _ in 0..engine.config().lock_ticks() {
        engine.tick();
    }
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_starts_on_level_one() {
    let engine = engine(42);

    assert_eq!(engine.level(), 1);
    assert_eq!(engine.state().tile_count(), 4);
    assert_eq!(engine.phase(), Phase::Playing);
    assert_eq!(engine.state().revealed_count(), 0);
}

#[test]
fn test_small_catalog_rejected_at_startup() {
    // Level 5 needs 6 identities
    let result = MatchEngine::new(catalog(5), GameConfig::default(), 42);

    assert_eq!(
        result.unwrap_err(),
        MatchError::InsufficientAssets {
            requested: 6,
            available: 5
        }
    );
}

#[test]
fn test_catalog_sized_for_fewer_levels() {
    let config = GameConfig::new().with_max_level(2);
    let engine = MatchEngine::new(catalog(3), config, 42);
    assert!(engine.is_ok());
}

// =============================================================================
// Matching
// =============================================================================

#[test]
fn test_matching_pair_never_locks() {
    let mut engine = engine(42);
    let (a, b) = pairs(&engine)[0];

    engine.handle_pointer_down(a);
    let outcome = engine.handle_pointer_down(b);

    assert!(matches!(outcome, RevealOutcome::Matched { .. }));
    assert!(!engine.is_locked());
    assert!(engine.state().flipped().is_empty());
    assert_eq!(engine.tick(), TickOutcome::Idle);
}

#[test]
fn test_mismatch_locks_and_stays_visible() {
    let mut engine = engine(7);
    let board = pairs(&engine);
    let (a, _) = board[0];
    let (c, _) = board[1];

    engine.handle_pointer_down(a);
    engine.handle_pointer_down(c);

    assert!(engine.is_locked());
    assert_eq!(engine.state().flipped().len(), 2);

    // Still visible one tick before the threshold
    for _ in 0..engine.config().lock_ticks() - 1 {
        engine.tick();
    }
    assert!(engine.is_locked());
    assert_eq!(engine.state().revealed_count(), 2);

    engine.tick();
    assert!(!engine.is_locked());
    assert_eq!(engine.state().revealed_count(), 0);
    assert!(engine.state().flipped().is_empty());
}

#[test]
fn test_mismatch_keeps_earlier_matches() {
    let mut engine = engine(11);
    let board = pairs(&engine);

    engine.handle_pointer_down(board[0].0);
    engine.handle_pointer_down(board[0].1);

    engine.handle_pointer_down(board[1].0);
    engine.handle_pointer_down(board[0].0); // already revealed: ignored
    assert_eq!(engine.state().flipped().len(), 1);

    // Level 1 has only 2 pairs, so the only other hidden tile is the mate
    let outcome = engine.handle_pointer_down(board[1].1);
    assert!(matches!(outcome, RevealOutcome::Matched { level_complete: true, .. }));
}

#[test]
fn test_lock_follows_frame_rate() {
    let config = GameConfig::new().with_frame_rate(30);
    let mut engine = MatchEngine::new(catalog(8), config, 3).unwrap();
    let board = pairs(&engine);

    engine.handle_pointer_down(board[0].0);
    engine.handle_pointer_down(board[1].0);

    for _ in 0..29 {
        assert!(matches!(engine.tick(), TickOutcome::Waiting { .. }));
    }
    assert_eq!(engine.tick(), TickOutcome::Unlocked { hidden: 2 });
}

#[test]
fn test_waiting_reports_remaining() {
    let mut engine = engine(5);
    let board = pairs(&engine);

    engine.handle_pointer_down(board[0].0);
    engine.handle_pointer_down(board[1].0);

    assert_eq!(engine.tick(), TickOutcome::Waiting { remaining: 59 });
    assert_eq!(engine.state().lock_timer(), 1);
}

// =============================================================================
// No-op Input
// =============================================================================

#[test]
fn test_click_on_empty_space_is_noop() {
    let mut engine = engine(42);
    let before = engine.state().clone();

    assert!(engine.handle_pointer_down(Point::new(0, 0)).is_ignored());
    assert!(engine.handle_pointer_down(Point::new(-50, 9000)).is_ignored());

    assert_eq!(engine.state(), &before);
}

#[test]
fn test_click_on_revealed_tile_is_noop() {
    let mut engine = engine(42);
    let (a, _) = pairs(&engine)[0];

    engine.handle_pointer_down(a);
    let before = engine.state().clone();

    assert!(engine.handle_pointer_down(a).is_ignored());
    assert_eq!(engine.state(), &before);
}

#[test]
fn test_click_in_padding_is_noop() {
    let mut engine = engine(42);
    let first = engine.state().tiles()[0].bounds;
    let gap = Point::new(first.right() + 5, first.y + 10);
    let before = engine.state().clone();

    assert!(engine.handle_pointer_down(gap).is_ignored());
    assert_eq!(engine.state(), &before);
}

// =============================================================================
// Completion and Level Progression
// =============================================================================

#[test]
fn test_complete_only_when_all_revealed() {
    let mut engine = engine(42);
    let board = pairs(&engine);

    engine.handle_pointer_down(board[0].0);
    engine.handle_pointer_down(board[0].1);
    assert!(!engine.is_complete());

    engine.handle_pointer_down(board[1].0);
    assert!(!engine.is_complete());

    engine.handle_pointer_down(board[1].1);
    assert!(engine.is_complete());
    assert!(engine.state().all_revealed());
    assert_eq!(engine.phase(), Phase::Complete);
}

#[test]
fn test_advance_noop_until_complete() {
    let mut engine = engine(42);
    let before = engine.state().clone();

    assert!(!engine.advance_level().unwrap());
    assert_eq!(engine.state(), &before);
}

#[test]
fn test_levels_grow_and_wrap() {
    let mut engine = engine(42);
    let mut visited = Vec::new();

    for _ in 0..6 {
        visited.push((engine.level(), engine.state().tile_count()));
        solve(&mut engine);
        assert!(engine.is_complete());
        assert!(engine.advance_level().unwrap());
        assert_eq!(engine.phase(), Phase::Playing);
        assert_eq!(engine.state().revealed_count(), 0);
    }

    assert_eq!(
        visited,
        vec![(1, 4), (2, 6), (3, 8), (4, 10), (5, 12), (1, 4)]
    );
}

#[test]
fn test_level_five_wraps_to_one() {
    let mut engine = engine(9);
    for _ in 0..4 {
        solve(&mut engine);
        engine.advance_level().unwrap();
    }
    assert_eq!(engine.level(), 5);
    assert!(engine.is_final_level());

    solve(&mut engine);
    engine.advance_level().unwrap();
    assert_eq!(engine.level(), 1);
}

#[test]
fn test_recovers_after_mismatch_and_completes() {
    let mut engine = engine(21);
    let board = pairs(&engine);

    engine.handle_pointer_down(board[0].0);
    engine.handle_pointer_down(board[1].1);
    wait_out_lock(&mut engine);

    solve(&mut engine);
    assert!(engine.is_complete());
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_same_seed_same_levels() {
    let mut a = engine(1234);
    let mut b = engine(1234);

    for _ in 0..5 {
        assert_eq!(a.state().tiles(), b.state().tiles());
        solve(&mut a);
        solve(&mut b);
        a.advance_level().unwrap();
        b.advance_level().unwrap();
    }
    assert_eq!(a.rng_state(), b.rng_state());
}
