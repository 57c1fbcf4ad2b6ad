//! Prints one line through every logging entry point.
//!
//! Usage: `logchu-demo [CONFIG]`. Without an argument the configuration is
//! discovered in the working directory, falling back to a built-in sample.

use logchu::{ColorPreset, Config, Logchu, LoggerPresets, Result, StyleOptions, WriteEntry};

const SAMPLE_CONFIG: &str = r##"
customLoggers:
  testLogger:
    info: { bold: true, italic: true, color: "\e[48;2;0;255;255m" }
    alsoWorksWithCustomColors: { color: "$custom:testColor" }
    hexTest: { color: "$custom:hex" }
customColorPresets:
  testColor: "\e[38;2;0;0;0m"
  hex: "#f44747"
"##;

fn heading(log: &Logchu, text: &str) -> Result<()> {
    log.custom(
        text,
        StyleOptions::new()
            .with_color(ColorPreset::Yellow)
            .bold()
            .inverse(),
    )
}

fn build_logger() -> Result<Logchu> {
    if let Some(path) = std::env::args_os().nth(1) {
        return Logchu::builder().config_file(path).build();
    }
    let dir = std::env::current_dir().unwrap_or_else(|_| ".".into());
    if Config::find_in(&dir).is_some() {
        return Logchu::builder().discover(dir).build();
    }
    let config = Config::from_yaml_str(SAMPLE_CONFIG).map_err(|err| logchu::Error::ConfigLoad {
        path: "<built-in sample>".into(),
        message: err.to_string(),
    })?;
    Ok(Logchu::new(config))
}

fn main() -> Result<()> {
    let log = build_logger()?;
    let hello = "Hello, World";

    heading(&log, "--- Built-in ---")?;
    log.default(hello, Some(&StyleOptions::new().bold()))?;
    log.custom(hello, "\x1b[34m")?;
    log.custom(hello, StyleOptions::new().with_color("\x1b[34m").italic())?;
    log.info(hello, None)?;
    log.success(hello, None)?;
    log.warning(hello, Some(&StyleOptions::new().bold()))?;
    log.error(hello, None)?;
    log.debug(hello, None)?;
    log.random(hello, None)?;
    log.full_random(hello, None)?;
    log.rainbow(hello, None)?;

    heading(&log, "--- Custom Logger ---")?;
    let mine = log.custom_logger(
        LoggerPresets::new("demo")
            .add(
                "info",
                StyleOptions::new()
                    .with_color(ColorPreset::BackgroundBlue)
                    .italic(),
            )
            .add(
                "success",
                StyleOptions::new().with_color(ColorPreset::LightGreen).bold(),
            )
            .add(
                "trolley",
                StyleOptions::new()
                    .with_color(ColorPreset::BackgroundYellow)
                    .bold(),
            ),
    )?;
    for name in ["info", "success", "trolley"] {
        mine.invoke(name, hello, None)?;
    }

    heading(&log, "--- From Config ---")?;
    log.custom(hello, log.use_color("testColor")?)?;
    let configured = log.use_logger("testLogger")?;
    configured.invoke("info", hello, Some(&StyleOptions::new().bold()))?;
    configured.invoke("alsoWorksWithCustomColors", hello, None)?;

    heading(&log, "--- Custom Colors v2 ---")?;
    log.custom(hello, "#639dff")?;
    configured.invoke("hexTest", hello, None)?;

    heading(&log, "--- Advanced Log ---")?;
    log.write(
        &StyleOptions::new()
            .with_color(ColorPreset::LightGray)
            .italic(),
        &[
            WriteEntry::new("First one was default config ")
                .styled(StyleOptions::new().with_color(ColorPreset::LightGreen)),
            WriteEntry::new("this is ").use_default(),
            WriteEntry::new("awesome!").styled(
                StyleOptions::new()
                    .with_color(ColorPreset::LightCyan)
                    .bold(),
            ),
        ],
    )?;

    Ok(())
}
