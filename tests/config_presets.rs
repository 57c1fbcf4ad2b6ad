//! Integration tests for configuration-driven loggers and color presets.

use std::path::PathBuf;
use std::sync::Arc;

use logchu::{
    Channel, ColorValue, Config, Error, Logchu, MemoryConsole, ReloadPolicy, StyleOptions, RESET,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn logger_from(path: PathBuf) -> (Logchu, Arc<MemoryConsole>) {
    let console = Arc::new(MemoryConsole::new());
    let log = Logchu::builder()
        .config_file(path)
        .console(console.clone())
        .build()
        .expect("fixture should load");
    (log, console)
}

#[test]
fn test_custom_color_reference_wraps_text() {
    let (log, console) = logger_from(fixture("logchu.config.yaml"));

    let logger = log.use_logger("testLogger").unwrap();
    logger
        .invoke("alsoWorksWithCustomColors", "Hello, World", None)
        .unwrap();

    assert_eq!(
        console.last().unwrap(),
        (
            Channel::Log,
            format!("\x1b[38;2;0;0;0mHello, World{RESET}")
        )
    );
}

#[test]
fn test_hex_reference_matches_rgb() {
    let (log, console) = logger_from(fixture("logchu.config.yaml"));

    log.use_logger("testLogger")
        .unwrap()
        .invoke("hexTest", "x", None)
        .unwrap();
    log.custom("x", ColorValue::Rgb(244, 71, 71)).unwrap();

    let lines = console.channel_lines(Channel::Log);
    assert_eq!(lines[0], lines[1]);
}

#[test]
fn test_preset_overrides_merge_with_stored_options() {
    let (log, console) = logger_from(fixture("logchu.config.yaml"));

    log.use_logger("testLogger")
        .unwrap()
        .invoke("info", "x", Some(&StyleOptions::new().underline()))
        .unwrap();

    assert_eq!(
        console.last().unwrap().1,
        format!("\x1b[48;2;0;255;255m\x1b[1m\x1b[4m\x1b[3mx{RESET}")
    );
}

#[test]
fn test_missing_logger_and_color() {
    let (log, _console) = logger_from(fixture("logchu.config.yaml"));

    assert!(matches!(
        log.use_logger("missing"),
        Err(Error::UnknownLogger { id }) if id == "missing"
    ));
    assert!(matches!(
        log.use_color("missing"),
        Err(Error::UnknownColorPreset { id }) if id == "missing"
    ));
}

#[test]
fn test_use_color_returns_stored_value() {
    let (log, console) = logger_from(fixture("logchu.config.yaml"));

    let color = log.use_color("testColor").unwrap();
    assert_eq!(color, ColorValue::Ansi("\x1b[38;2;0;0;0m".into()));

    log.custom("Hello", color).unwrap();
    assert_eq!(console.last().unwrap().1, format!("\x1b[38;2;0;0;0mHello{RESET}"));
}

#[test]
fn test_json_config_rgb_decimal_and_category() {
    let (log, console) = logger_from(fixture("logchu.config.json"));

    let logger = log.use_logger("jsonLogger").unwrap();
    logger.invoke("notice", "n", None).unwrap();
    logger.invoke("quiet", "q", None).unwrap();

    assert_eq!(
        console.lines(),
        vec![
            (Channel::Warn, format!("\x1b[38;2;255;165;0m\x1b[4mn{RESET}")),
            (Channel::Log, format!("\x1b[38;2;128;128;128mq{RESET}")),
        ]
    );
    assert_eq!(log.use_color("orange").unwrap(), ColorValue::Rgb(255, 165, 0));
}

#[test]
fn test_on_resolve_picks_up_edits() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logchu.config.json");
    std::fs::write(&path, r##"{ "customColorPresets": { "a": "#000000" } }"##).unwrap();

    let log = Logchu::builder()
        .config_file(&path)
        .console(Arc::new(MemoryConsole::new()))
        .build()
        .unwrap();
    assert!(log.use_color("b").is_err());

    std::fs::write(&path, r##"{ "customColorPresets": { "b": "#ffffff" } }"##).unwrap();
    assert_eq!(log.use_color("b").unwrap(), ColorValue::Hex("#ffffff".into()));
}

#[test]
fn test_manual_policy_keeps_snapshot_until_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logchu.config.yaml");
    std::fs::write(&path, "customColorPresets: { a: '#000000' }\n").unwrap();

    let log = Logchu::builder()
        .config_file(&path)
        .reload_policy(ReloadPolicy::Manual)
        .console(Arc::new(MemoryConsole::new()))
        .build()
        .unwrap();

    std::fs::write(&path, "customColorPresets: { b: '#ffffff' }\n").unwrap();
    assert!(log.use_color("b").is_err());

    log.reload().unwrap();
    assert!(log.use_color("b").is_ok());
}

#[test]
fn test_broken_reload_is_surfaced_and_snapshot_kept() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logchu.config.json");
    std::fs::write(&path, r##"{ "customColorPresets": { "a": "#000000" } }"##).unwrap();

    let console = Arc::new(MemoryConsole::new());
    let log = Logchu::builder()
        .config_file(&path)
        .console(console.clone())
        .build()
        .unwrap();

    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(log.use_color("a"), Err(Error::ConfigLoad { .. })));

    // emission keeps using the last good snapshot
    log.info("still here", None).unwrap();
    assert_eq!(console.lines().len(), 1);
    assert!(log.config().snapshot().custom_color_presets.contains_key("a"));
}

#[test]
fn test_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logchu.config.toml");
    std::fs::write(&path, "").unwrap();

    let result = Logchu::builder().config_file(&path).build();
    assert!(matches!(result, Err(Error::UnsupportedConfigFormat { .. })));
}

#[test]
fn test_hooks_survive_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logchu.config.yaml");
    std::fs::copy(fixture("logchu.config.yaml"), &path).unwrap();

    let calls = Arc::new(std::sync::Mutex::new(Vec::new()));
    let seen = Arc::clone(&calls);
    let log = Logchu::builder()
        .config_file(&path)
        .hook("testLogger", move |record| {
            seen.lock().unwrap().push(record.preset.clone());
        })
        .console(Arc::new(MemoryConsole::new()))
        .build()
        .unwrap();

    log.reload().unwrap();
    log.use_logger("testLogger")
        .unwrap()
        .invoke("hexTest", "x", None)
        .unwrap();

    assert_eq!(*calls.lock().unwrap(), vec!["hexTest".to_string()]);
}

#[test]
fn test_in_memory_config_matches_file() {
    let config = Config::from_yaml_str(
        &std::fs::read_to_string(fixture("logchu.config.yaml")).unwrap(),
    )
    .unwrap();
    assert_eq!(config.custom_loggers["testLogger"].len(), 3);
    assert_eq!(
        config.custom_color_presets["hex"],
        ColorValue::Hex("#f44747".into())
    );
}
