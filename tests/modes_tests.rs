//! Mode tests - survival garbage pressure and rush progress

use std::time::{Duration, Instant};

use blockfall::core::{
    Board, EngineConfig, Game, ModeEvent, ModeSnapshot, ModeStrategy, Rush, Survival,
};
use blockfall::types::GameMode;

fn survival_game(threshold: u32) -> Game {
    Game::new(
        EngineConfig::new(GameMode::Survival)
            .with_seed(2024)
            .with_survival_threshold(threshold),
    )
    .unwrap()
}

fn survival_snapshot(game: &Game) -> (u32, u32, u32) {
    match game.snapshot().mode {
        ModeSnapshot::Survival {
            shields,
            no_clear_streak,
            landings_until_garbage,
        } => (shields, no_clear_streak, landings_until_garbage),
        other => panic!("expected survival snapshot, got {:?}", other),
    }
}

// ============== Survival ==============

#[test]
fn test_fourth_no_clear_landing_adds_garbage() {
    let mut game = survival_game(4);
    assert_eq!(survival_snapshot(&game), (0, 0, 4));

    for landing in 1..=3 {
        let result = game.hard_drop().unwrap();
        assert_eq!(result.mode_event, ModeEvent::None);
        assert_eq!(survival_snapshot(&game), (0, landing, 4 - landing));
    }

    let filled = game.board().grid().filled_count();
    let result = game.hard_drop().unwrap();
    assert_eq!(result.mode_event, ModeEvent::GarbageAdded);
    assert_eq!(survival_snapshot(&game), (0, 0, 4));
    // Four more piece cells plus nine garbage cells
    assert_eq!(game.board().grid().filled_count(), filled + 4 + 9);
}

#[test]
fn test_shield_absorbs_garbage() {
    let mut board = Board::new(10, 20, 1).unwrap();
    let mut mode = ModeStrategy::Survival(Survival::new(2));

    assert_eq!(mode.on_landing(&mut board, 4), ModeEvent::None);
    assert_eq!(mode.survival().unwrap().shields(), 1);

    assert_eq!(mode.on_landing(&mut board, 0), ModeEvent::None);
    assert_eq!(mode.on_landing(&mut board, 0), ModeEvent::ShieldConsumed);
    assert_eq!(mode.survival().unwrap().shields(), 0);
    assert_eq!(mode.survival().unwrap().no_clear_streak(), 0);
    assert_eq!(board.grid().filled_count(), 0);

    assert_eq!(mode.on_landing(&mut board, 0), ModeEvent::None);
    assert_eq!(mode.on_landing(&mut board, 0), ModeEvent::GarbageAdded);
    assert_eq!(board.grid().filled_count(), 9);
}

#[test]
fn test_threshold_tightens_with_level() {
    let mut board = Board::new(10, 20, 1).unwrap();
    // Level 4 after 30 lines
    board.score_mut().register_lines_cleared(30, 0);
    assert_eq!(board.score().level(), 4);

    let mut survival = Survival::new(4);
    assert_eq!(survival.landings_until_garbage(board.score(), 4), 3);
    survival.on_landing(&mut board, 0);
    survival.on_landing(&mut board, 0);
    assert_eq!(survival.on_landing(&mut board, 0), ModeEvent::GarbageAdded);
}

#[test]
fn test_survival_restart_clears_state() {
    let mut game = survival_game(4);
    game.hard_drop();
    game.hard_drop();
    game.restart();
    assert_eq!(survival_snapshot(&game), (0, 0, 4));
    assert_eq!(game.board().grid().filled_count(), 0);
}

// ============== Rush ==============

#[test]
fn test_rush_forty_at_once_completes() {
    let start = Instant::now();
    let mut rush = Rush::new_at(40, start);
    let event = rush.register_clear_at(40, start + Duration::from_millis(1500));

    assert_eq!(event, ModeEvent::Completed);
    assert!(rush.is_completed());
    assert!(rush.completion_time_seconds() > 0.0);
    assert_eq!(rush.completion_time_seconds(), 1.5);
    assert_eq!(rush.last_milestone(), Some(10));
}

#[test]
fn test_rush_milestones_in_order() {
    let start = Instant::now();
    let mut rush = Rush::new_at(40, start);
    let mut events = Vec::new();
    for _ in 0..20 {
        events.push(rush.register_clear_at(2, start));
    }
    let milestones: Vec<ModeEvent> = events
        .into_iter()
        .filter(|e| *e != ModeEvent::None)
        .collect();
    assert_eq!(
        milestones,
        vec![
            ModeEvent::Milestone(10),
            ModeEvent::Milestone(20),
            ModeEvent::Milestone(30),
            ModeEvent::Completed,
        ]
    );
    assert_eq!(rush.last_milestone_message().as_deref(), Some("40 lines cleared"));
}

#[test]
fn test_rush_zero_lines_is_ignored() {
    let mut rush = Rush::new(10);
    assert_eq!(rush.register_clear(0), ModeEvent::None);
    assert_eq!(rush.lines_cleared(), 0);
    assert_eq!(rush.completion_time_seconds(), -1.0);
}

#[test]
fn test_rush_game_snapshot() {
    let game = Game::new(EngineConfig::new(GameMode::Rush).with_rush_target(20)).unwrap();
    match game.snapshot().mode {
        ModeSnapshot::Rush {
            lines_cleared,
            target_lines,
            completed,
            completion_time_seconds,
            last_milestone,
        } => {
            assert_eq!(lines_cleared, 0);
            assert_eq!(target_lines, 20);
            assert!(!completed);
            assert_eq!(completion_time_seconds, None);
            assert_eq!(last_milestone, None);
        }
        other => panic!("expected rush snapshot, got {:?}", other),
    }
    assert!(!game.is_finished());
}

#[test]
fn test_zero_targets_rejected() {
    assert!(Game::new(EngineConfig::new(GameMode::Rush).with_rush_target(0)).is_err());
    assert!(Game::new(EngineConfig::new(GameMode::Survival).with_survival_threshold(0)).is_err());
}
