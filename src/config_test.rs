use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn empty_environment_gives_defaults() {
    let cfg = Config::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.seed, None);
    assert_eq!(cfg.win_delay, Duration::from_millis(300));
    assert_eq!(cfg.input, InputMode::Alternate);
    assert_eq!(cfg.misdrops, 1);
    assert_eq!(cfg.rounds, 1);
}

#[test]
fn overrides_are_parsed() {
    let cfg = Config::from_lookup(lookup(&[
        ("PUZZLE_SEED", "42"),
        ("PUZZLE_WIN_DELAY_MS", " 25 "),
        ("PUZZLE_INPUT", "Touch"),
        ("PUZZLE_MISDROPS", "0"),
        ("PUZZLE_ROUNDS", "3"),
    ]))
    .unwrap();
    assert_eq!(cfg.seed, Some(42));
    assert_eq!(cfg.win_delay, Duration::from_millis(25));
    assert_eq!(cfg.input, InputMode::Touch);
    assert_eq!(cfg.misdrops, 0);
    assert_eq!(cfg.rounds, 3);
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = Config::from_lookup(lookup(&[("PUZZLE_SEED", ""), ("PUZZLE_INPUT", "  ")])).unwrap();
    assert_eq!(cfg.seed, None);
    assert_eq!(cfg.input, InputMode::Alternate);
}

#[test]
fn mouse_is_an_alias_for_pointer() {
    let cfg = Config::from_lookup(lookup(&[("PUZZLE_INPUT", "mouse")])).unwrap();
    assert_eq!(cfg.input, InputMode::Pointer);
}

#[test]
fn bad_number_errors() {
    let err = Config::from_lookup(lookup(&[("PUZZLE_SEED", "abc")])).unwrap_err();
    assert_eq!(err, ConfigError::NotANumber { var: "PUZZLE_SEED", value: "abc".into() });
    assert!(err.to_string().contains("PUZZLE_SEED"));
}

#[test]
fn negative_delay_errors() {
    let err = Config::from_lookup(lookup(&[("PUZZLE_WIN_DELAY_MS", "-5")])).unwrap_err();
    assert!(matches!(err, ConfigError::NotANumber { var: "PUZZLE_WIN_DELAY_MS", .. }));
}

#[test]
fn unknown_input_errors() {
    let err = Config::from_lookup(lookup(&[("PUZZLE_INPUT", "stylus")])).unwrap_err();
    assert_eq!(err, ConfigError::UnknownInput("stylus".into()));
    assert!(err.to_string().contains("unknown PUZZLE_INPUT"));
}

#[test]
fn zero_rounds_errors() {
    let err = Config::from_lookup(lookup(&[("PUZZLE_ROUNDS", "0")])).unwrap_err();
    assert_eq!(err, ConfigError::NoRounds);
}

#[test]
fn alternate_starts_with_touch() {
    assert_eq!(InputMode::Alternate.source_for(0), InputSource::Touch);
    assert_eq!(InputMode::Alternate.source_for(1), InputSource::Pointer);
    assert_eq!(InputMode::Alternate.source_for(6), InputSource::Touch);
    assert_eq!(InputMode::Pointer.source_for(0), InputSource::Pointer);
    assert_eq!(InputMode::Touch.source_for(3), InputSource::Touch);
}
