//! Tests for the replay transcript and settings files.

use rewind_games::{Position, ReplayError, Settings, parse_square, replay_game, transcript};
use std::io::Write;

fn squares(indices: &[usize]) -> Vec<Position> {
    indices
        .iter()
        .map(|&i| Position::from_index(i).unwrap())
        .collect()
}

#[test]
fn test_transcript_for_won_game() {
    let game = replay_game(&squares(&[0, 4, 1, 5, 2, 8]), None).unwrap();
    let text = transcript(&game);
    assert!(text.starts_with("X|X|X\n-+-+-\n4|O|O\n-+-+-\n7|8|9"));
    assert!(text.contains("Winner: X"));
    assert!(text.contains("> 6. Go to move #5"));
}

#[test]
fn test_transcript_after_jump_back() {
    let game = replay_game(&squares(&[0, 4, 1]), Some(0)).unwrap();
    let text = transcript(&game);
    assert!(text.starts_with("1|2|3\n"));
    assert!(text.contains("Next player: X"));
    assert!(text.contains("You are at move #0"));
    assert!(text.contains("> 1. Go to game start"));
    assert!(text.contains("  4. Go to move #3"));
}

#[test]
fn test_jump_past_end_is_an_error() {
    let err = replay_game(&squares(&[0, 4]), Some(3)).unwrap_err();
    assert!(matches!(err, ReplayError::History(_)));
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn test_settings_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "log_file = \"game.log\"\nshow_hints = false").unwrap();

    let settings = Settings::from_file(file.path()).unwrap();
    assert_eq!(settings.log_file().to_str(), Some("game.log"));
    assert!(!settings.show_hints());
    assert_eq!(settings.log_filter(), "info");
}

#[test]
fn test_settings_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_settings_load_without_path_uses_defaults() {
    assert_eq!(Settings::load(None).unwrap(), Settings::default());
}

#[test]
fn test_replay_from_square_labels() {
    let moves: Vec<Position> = ["top-left", "center", "Top-center", "5", "top-right"]
        .into_iter()
        .map(|s| parse_square(s).unwrap())
        .collect();
    let game = replay_game(&moves, None).unwrap();
    assert!(transcript(&game).contains("Winner: X"));
}

#[test]
fn test_unknown_square_label_is_an_error() {
    let err = parse_square("corner").unwrap_err();
    assert!(matches!(err, ReplayError::InvalidSquare(_)));
    assert!(err.to_string().contains("'corner' is not a square"));
}
