//! The fixed truecolor palette.

/// Reset sequence closing every styled string.
pub const RESET: &str = "\x1b[0m";

/// Built-in color presets.
///
/// Every preset is a 24-bit escape; `Background*` variants set the background
/// (`ESC[48;2;…m`), all others the foreground (`ESC[38;2;…m`). [`Default`]
/// resets all attributes instead of setting a color.
///
/// [`Default`]: ColorPreset::Default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorPreset {
    #[default]
    Default,
    Info,
    Success,
    Warning,
    Error,
    Debug,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    LightGray,
    DarkGray,
    LightRed,
    LightGreen,
    LightYellow,
    LightBlue,
    LightMagenta,
    LightCyan,
    White,
    Black,
    Purple,
    Orange,
    BackgroundRed,
    BackgroundGreen,
    BackgroundYellow,
    BackgroundBlue,
    BackgroundMagenta,
    BackgroundCyan,
    BackgroundLightGray,
    BackgroundDarkGray,
    BackgroundLightRed,
    BackgroundLightGreen,
    BackgroundLightYellow,
    BackgroundLightBlue,
    BackgroundLightMagenta,
    BackgroundLightCyan,
    BackgroundWhite,
}

impl ColorPreset {
    /// The palette cycled by [`crate::Logchu::rainbow`].
    pub const RAINBOW: [ColorPreset; 7] = [
        ColorPreset::Red,
        ColorPreset::Orange,
        ColorPreset::Yellow,
        ColorPreset::Green,
        ColorPreset::Cyan,
        ColorPreset::Blue,
        ColorPreset::Purple,
    ];

    /// Returns the raw escape sequence for this preset.
    #[rustfmt::skip]
    pub fn escape(self) -> &'static str {
        match self {
            ColorPreset::Default                => RESET,
            ColorPreset::Info                   => "\x1b[38;2;0;128;255m",
            ColorPreset::Success                => "\x1b[38;2;0;255;0m",
            ColorPreset::Warning                => "\x1b[38;2;255;255;0m",
            ColorPreset::Error                  => "\x1b[38;2;255;0;0m",
            ColorPreset::Debug                  => "\x1b[38;2;153;50;204m",
            ColorPreset::Red                    => "\x1b[38;2;255;0;0m",
            ColorPreset::Green                  => "\x1b[38;2;0;255;0m",
            ColorPreset::Yellow                 => "\x1b[38;2;255;255;0m",
            ColorPreset::Blue                   => "\x1b[38;2;0;128;255m",
            ColorPreset::Magenta                => "\x1b[38;2;255;0;255m",
            ColorPreset::Cyan                   => "\x1b[38;2;0;255;255m",
            ColorPreset::LightGray              => "\x1b[38;2;192;192;192m",
            ColorPreset::DarkGray               => "\x1b[38;2;128;128;128m",
            ColorPreset::LightRed               => "\x1b[38;2;255;128;128m",
            ColorPreset::LightGreen             => "\x1b[38;2;128;255;128m",
            ColorPreset::LightYellow            => "\x1b[38;2;255;255;128m",
            ColorPreset::LightBlue              => "\x1b[38;2;128;192;255m",
            ColorPreset::LightMagenta           => "\x1b[38;2;255;128;255m",
            ColorPreset::LightCyan              => "\x1b[38;2;128;255;255m",
            ColorPreset::White                  => "\x1b[38;2;255;255;255m",
            ColorPreset::Black                  => "\x1b[38;2;0;0;0m",
            ColorPreset::Purple                 => "\x1b[38;2;128;0;128m",
            ColorPreset::Orange                 => "\x1b[38;2;255;165;0m",
            ColorPreset::BackgroundRed          => "\x1b[48;2;255;0;0m",
            ColorPreset::BackgroundGreen        => "\x1b[48;2;0;255;0m",
            ColorPreset::BackgroundYellow       => "\x1b[48;2;255;255;0m",
            ColorPreset::BackgroundBlue         => "\x1b[48;2;0;128;255m",
            ColorPreset::BackgroundMagenta      => "\x1b[48;2;255;0;255m",
            ColorPreset::BackgroundCyan         => "\x1b[48;2;0;255;255m",
            ColorPreset::BackgroundLightGray    => "\x1b[48;2;192;192;192m",
            ColorPreset::BackgroundDarkGray     => "\x1b[48;2;128;128;128m",
            ColorPreset::BackgroundLightRed     => "\x1b[48;2;255;128;128m",
            ColorPreset::BackgroundLightGreen   => "\x1b[48;2;128;255;128m",
            ColorPreset::BackgroundLightYellow  => "\x1b[48;2;255;255;128m",
            ColorPreset::BackgroundLightBlue    => "\x1b[48;2;128;192;255m",
            ColorPreset::BackgroundLightMagenta => "\x1b[48;2;255;128;255m",
            ColorPreset::BackgroundLightCyan    => "\x1b[48;2;128;255;255m",
            ColorPreset::BackgroundWhite        => "\x1b[48;2;255;255;255m",
        }
    }
}

impl std::fmt::Display for ColorPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.escape())
    }
}
