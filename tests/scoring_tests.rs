//! Scoring tests - bonus table, combo law, level progression, drop points

use blockfall::core::scoring::{
    calculate_drop_score, calculate_level, calculate_line_bonus, get_drop_interval_ms,
};
use blockfall::core::Score;

#[test]
fn test_line_bonus_is_fifty_n_squared() {
    assert_eq!(calculate_line_bonus(0), 0);
    assert_eq!(calculate_line_bonus(1), 50);
    assert_eq!(calculate_line_bonus(2), 200);
    assert_eq!(calculate_line_bonus(3), 450);
    assert_eq!(calculate_line_bonus(4), 800);
}

#[test]
fn test_two_consecutive_clears() {
    let mut score = Score::new();
    assert_eq!(score.register_lines_cleared(1, 100), 100);
    assert_eq!(score.register_lines_cleared(1, 100), 200);
    assert_eq!(score.score(), 300);
    assert_eq!(score.combo(), 2);
    assert_eq!(score.total_lines(), 2);
}

#[test]
fn test_combo_law() {
    let mut score = Score::new();
    for expected in [1, 2, 3, 4, 4, 4] {
        score.register_lines_cleared(1, 50);
        assert_eq!(score.combo(), expected);
    }
    score.register_landing_without_clear();
    assert_eq!(score.combo(), 0);
    score.register_lines_cleared(2, 200);
    assert_eq!(score.combo(), 1);
}

#[test]
fn test_zero_lines_is_a_plain_landing() {
    let mut score = Score::new();
    score.register_lines_cleared(1, 50);
    assert_eq!(score.register_lines_cleared(0, 999), 0);
    assert_eq!(score.combo(), 0);
    assert_eq!(score.score(), 50);
    assert_eq!(score.total_lines(), 1);
}

#[test]
fn test_raw_points_leave_combo_and_level() {
    let mut score = Score::new();
    score.register_lines_cleared(1, 50);
    score.add_raw_points(40);
    assert_eq!(score.score(), 90);
    assert_eq!(score.combo(), 1);
    assert_eq!(score.level(), 1);
}

#[test]
fn test_level_follows_total_lines() {
    let mut score = Score::new();
    let mut previous = score.level();
    for _ in 0..60 {
        score.register_lines_cleared(3, 450);
        assert!(score.level() >= previous);
        assert_eq!(score.level(), calculate_level(score.total_lines()));
        previous = score.level();
    }
    assert_eq!(score.level(), 10);
}

#[test]
fn test_level_table() {
    assert_eq!(calculate_level(0), 1);
    assert_eq!(calculate_level(9), 1);
    assert_eq!(calculate_level(10), 2);
    assert_eq!(calculate_level(95), 10);
    assert_eq!(calculate_level(1000), 10);
}

#[test]
fn test_reset() {
    let mut score = Score::new();
    score.register_lines_cleared(4, 800);
    score.register_lines_cleared(4, 800);
    score.register_lines_cleared(4, 800);
    score.reset();
    assert_eq!(score, Score::default());
    assert_eq!(score.level(), 1);
}

#[test]
fn test_drop_points() {
    assert_eq!(calculate_drop_score(5, false), 5);
    assert_eq!(calculate_drop_score(5, true), 10);
    assert_eq!(calculate_drop_score(0, true), 0);
}

#[test]
fn test_drop_interval_speeds_up() {
    assert_eq!(get_drop_interval_ms(1), 1000);
    assert_eq!(get_drop_interval_ms(10), 100);
    assert_eq!(get_drop_interval_ms(0), 1000);
    assert_eq!(get_drop_interval_ms(42), 100);
    for level in 1..10 {
        assert!(get_drop_interval_ms(level + 1) < get_drop_interval_ms(level));
    }
}
