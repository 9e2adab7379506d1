//! Loading game settings from TOML files.

use std::io::Write;
use strictly_ninarow_cli::{GameArgs, GameConfig};

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "board_size = 5\nwin_length = 4\nmarkers = [\"R\", \"G\", \"B\"]").unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.board_size(), 5);
    assert_eq!(*config.win_length(), 4);
    assert_eq!(config.markers(), &["R", "G", "B"]);
    assert_eq!(config.roster().unwrap().len(), 3);
}

#[test]
fn test_command_line_overrides_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "board_size = 5\nwin_length = 4").unwrap();

    let args = GameArgs {
        config: Some(file.path().to_path_buf()),
        size: None,
        win_length: Some(5),
        markers: vec!["Q".into()],
    };
    let config = args.resolve().unwrap();
    assert_eq!(*config.board_size(), 5);
    assert_eq!(*config.win_length(), 5);
    assert_eq!(config.markers(), &["Q"]);
}

#[test]
fn test_malformed_file_reports_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "board_size = \"big\"").unwrap();

    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}
