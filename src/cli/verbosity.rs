use log::LevelFilter;

/// Diagnostic threshold, ordered from silent to chattiest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    Quiet,
    Error,
    Warning,
    #[default]
    Normal,
    Debug,
    Development,
}

// (short, long, tier)
const FLAGS: [(&str, &str, Verbosity); 6] = [
    ("-q", "--quiet", Verbosity::Quiet),
    ("-e", "--error", Verbosity::Error),
    ("-w", "--warning", Verbosity::Warning),
    ("-n", "--normal", Verbosity::Normal),
    ("-b", "--debug", Verbosity::Debug),
    ("-v", "--development", Verbosity::Development),
];

impl Verbosity {
    pub fn from_flag(arg: &str) -> Option<Verbosity> {
        FLAGS
            .iter()
            .find(|(short, long, _)| arg == *short || arg == *long)
            .map(|(_, _, tier)| *tier)
    }

    pub fn name(self) -> &'static str {
        match self {
            Verbosity::Quiet => "Quiet",
            Verbosity::Error => "Error",
            Verbosity::Warning => "Warning",
            Verbosity::Normal => "Normal",
            Verbosity::Debug => "Debug",
            Verbosity::Development => "Development",
        }
    }

    /// Maximum log level that gets printed at this tier.
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Off,
            Verbosity::Error => LevelFilter::Error,
            Verbosity::Warning => LevelFilter::Warn,
            Verbosity::Normal => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Development => LevelFilter::Trace,
        }
    }
}
