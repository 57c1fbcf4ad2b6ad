//! Integration tests for console, listener and file sinks.

use std::sync::{Arc, Mutex};

use logchu::{
    customize, Channel, ColorPreset, Config, Error, LogCategory, Logchu, MemoryConsole,
    StyleOptions, Watcher, WriteEntry, RESET,
};
use serial_test::serial;

fn capture(config: Config) -> (Logchu, Arc<MemoryConsole>) {
    let console = Arc::new(MemoryConsole::new());
    let log = Logchu::builder()
        .config(config)
        .console(console.clone())
        .build()
        .unwrap();
    (log, console)
}

#[test]
fn test_error_appends_one_file_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.log");
    let (log, console) = capture(Config::new().with_log_file(&path));

    log.error("boom", None).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with('['));
    assert!(lines[0].ends_with(" GMT] ERROR > boom"));
    assert_eq!(
        console.channel_lines(Channel::Error),
        vec![format!("{}boom{RESET}", ColorPreset::Error)]
    );
}

#[test]
fn test_file_lines_accumulate_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.log");
    let (log, _console) = capture(Config::new().with_log_file(&path));

    log.info("one", None).unwrap();
    log.success("two", None).unwrap();
    log.warning("three", None).unwrap();
    log.debug("four", None).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let suffixes: Vec<&str> = contents
        .lines()
        .map(|line| line.split_once("] ").unwrap().1)
        .collect();
    assert_eq!(
        suffixes,
        vec!["INFO > one", "LOG > two", "WARN > three", "DEBUG > four"]
    );
}

#[test]
fn test_file_sink_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("app.log");
    let (log, console) = capture(Config::new().with_log_file(&path));

    let result = log.default("x", None);

    assert!(matches!(result, Err(Error::FileSink { .. })));
    assert_eq!(console.lines().len(), 1);
}

#[test]
fn test_watcher_receives_original_text() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let watcher = Arc::new(Watcher::new());
    for channel in [Channel::Log, Channel::Warn] {
        let events = Arc::clone(&events);
        watcher.on(channel, move |record| {
            events.lock().unwrap().push((channel, record.text.clone(), record.category));
        });
    }
    let (log, _console) = capture(Config::new().with_watcher(watcher));

    log.warning("careful", Some(&StyleOptions::new().bold())).unwrap();

    assert_eq!(
        *events.lock().unwrap(),
        vec![
            (Channel::Log, "careful".to_string(), LogCategory::Warning),
            (Channel::Warn, "careful".to_string(), LogCategory::Warning),
        ]
    );
}

#[test]
fn test_random_override_color_stays_normal() {
    let categories = Arc::new(Mutex::new(Vec::new()));
    let watcher = Arc::new(Watcher::new());
    let sink = Arc::clone(&categories);
    watcher.on(Channel::Log, move |record| {
        sink.lock().unwrap().push(record.category);
    });
    let (log, console) = capture(Config::new().with_watcher(watcher));

    let overrides = StyleOptions::new()
        .with_color(ColorPreset::LightCyan)
        .with_category(LogCategory::Warning);
    log.random("r", Some(&overrides)).unwrap();

    assert_eq!(
        console.lines(),
        vec![(Channel::Log, format!("{}r{RESET}", ColorPreset::LightCyan))]
    );
    assert_eq!(
        *categories.lock().unwrap(),
        vec![LogCategory::Normal, LogCategory::Normal]
    );
}

#[test]
fn test_write_emits_once_with_plain_text() {
    let texts = Arc::new(Mutex::new(Vec::new()));
    let watcher = Arc::new(Watcher::new());
    let sink = Arc::clone(&texts);
    watcher.on(Channel::Log, move |record| {
        sink.lock().unwrap().push(record.text.clone());
    });
    let (log, console) = capture(Config::new().with_watcher(watcher));

    let default_style = StyleOptions::new().with_color(ColorPreset::LightGray).italic();
    let first = StyleOptions::new().with_color(ColorPreset::LightGreen);
    log.write(
        &default_style,
        &[
            WriteEntry::new("a").styled(first.clone()),
            WriteEntry::new("b").use_default(),
        ],
    )
    .unwrap();

    let expected = customize("a", first).unwrap() + &customize("b", &default_style).unwrap();
    assert_eq!(console.lines(), vec![(Channel::Log, expected)]);
    // normal category notifies `log` listeners twice
    assert_eq!(*texts.lock().unwrap(), vec!["ab".to_string(), "ab".to_string()]);
}

#[test]
fn test_builder_watcher_applies_to_file_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logchu.config.json");
    std::fs::write(&path, "{}").unwrap();

    let count = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&count);
    let watcher = Arc::new(Watcher::new());
    watcher.on(Channel::Info, move |_| *counter.lock().unwrap() += 1);

    let log = Logchu::builder()
        .config_file(&path)
        .watcher(watcher)
        .console(Arc::new(MemoryConsole::new()))
        .build()
        .unwrap();

    log.info("x", None).unwrap();
    log.reload().unwrap();
    log.info("y", None).unwrap();

    assert_eq!(*count.lock().unwrap(), 2);
}

#[test]
#[serial]
fn test_global_logger_discovers_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::copy(
        std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/logchu.config.yaml"),
        dir.path().join("logchu.config.yaml"),
    )
    .unwrap();

    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let resolved = logchu::logger().use_logger("testLogger").map(|l| l.id().to_string());
    let color = logchu::logger().use_color("hex");
    std::env::set_current_dir(previous).unwrap();

    assert_eq!(resolved.unwrap(), "testLogger");
    assert!(color.is_ok());
}
