use std::{fmt, str::FromStr};

use crate::embed::Color;

/// Log level of a notification. Each level has a fixed embed color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Debug,
    Warn,
    Error,
    Fatal,
    Trace,
    Panic,
}

impl Severity {
    pub const ALL: [Self; 7] = [
        Self::Info,
        Self::Debug,
        Self::Warn,
        Self::Error,
        Self::Fatal,
        Self::Trace,
        Self::Panic,
    ];

    #[must_use]
    pub const fn color(self) -> Color {
        let raw = match self {
            Self::Info => 3_447_003,
            Self::Debug => 15_105_570,
            Self::Warn => 16_776_960,
            Self::Error => 15_158_332,
            Self::Fatal => 10_181_046,
            Self::Trace => 9_807_270,
            Self::Panic => 10_038_562,
        };
        Color::from_raw(raw)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Fatal => "fatal",
            Self::Trace => "trace",
            Self::Panic => "panic",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity {0:?} (expected one of info, debug, warn, error, fatal, trace, panic)")]
pub struct ParseSeverityError(String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|severity| severity.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseSeverityError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn color_table() {
        let colors: Vec<i64> = Severity::ALL
            .iter()
            .map(|s| s.color().to_discord())
            .collect();
        assert_eq!(
            colors,
            [
                3_447_003, 15_105_570, 16_776_960, 15_158_332, 10_181_046, 9_807_270, 10_038_562
            ]
        );
        let unique: HashSet<i64> = colors.into_iter().collect();
        assert_eq!(unique.len(), Severity::ALL.len());
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("WARN".parse(), Ok(Severity::Warn));
        assert_eq!("Panic".parse(), Ok(Severity::Panic));
        assert!("warning".parse::<Severity>().is_err());
        for severity in Severity::ALL {
            assert_eq!(severity.to_string().parse(), Ok(severity));
        }
    }
}
