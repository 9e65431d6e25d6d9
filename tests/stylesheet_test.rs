//! Tests for loading stylesheets from disk.

use ratatui::style::Color;
use rewind_tictactoe::{Stylesheet, Theme};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_stylesheet_file() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "x_color = \"magenta\"\nsquare_width = 5").expect("Failed to write");

    let sheet = Stylesheet::from_file(file.path()).expect("Load failed");
    let theme = Theme::try_from(&sheet).expect("Invalid theme");
    assert_eq!(theme.x, Color::Magenta);
    assert_eq!(theme.o, Theme::default().o);
    assert_eq!(theme.square_width, 5);
}

#[test]
fn test_missing_file_fails() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let result = Stylesheet::from_file(dir.path().join("nope.toml"));
    let err = result.expect_err("Missing file should fail");
    assert!(err.message.contains("read"));
}
