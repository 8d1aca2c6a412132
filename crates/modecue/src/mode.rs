//! Editing modes whose visual indicators are configured independently.

use std::fmt;
use std::str::FromStr;

/// One of the four mutually exclusive editing states.
///
/// Each mode owns an independent configuration object and an independent
/// set of built-in defaults. Resolving the style for one mode never reads
/// another mode's configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Command/navigation state.
    Normal,
    /// Text insertion state.
    Insert,
    /// Selection state.
    Visual,
    /// Incremental search state.
    Search,
}

impl Mode {
    /// All modes, in declaration order.
    pub const ALL: [Mode; 4] = [Mode::Normal, Mode::Insert, Mode::Visual, Mode::Search];

    /// Returns the wire name used as this mode's key in a mode sheet.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Normal => "normal",
            Mode::Insert => "insert",
            Mode::Visual => "visual",
            Mode::Search => "search",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized mode name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMode(pub String);

impl fmt::Display for UnknownMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown mode: '{}'", self.0)
    }
}

impl std::error::Error for UnknownMode {}

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Mode::Normal),
            "insert" => Ok(Mode::Insert),
            "visual" => Ok(Mode::Visual),
            "search" => Ok(Mode::Search),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_round_trip() {
        for mode in Mode::ALL {
            assert_eq!(mode.as_str().parse::<Mode>(), Ok(mode));
        }
    }

    #[test]
    fn test_parse_unknown_mode() {
        let err = "replace".parse::<Mode>().unwrap_err();
        assert_eq!(err, UnknownMode("replace".to_string()));
        assert!(err.to_string().contains("replace"));
    }

    #[test]
    fn test_display_matches_wire_name() {
        assert_eq!(Mode::Normal.to_string(), "normal");
        assert_eq!(Mode::Search.to_string(), "search");
    }

    #[test]
    fn test_all_has_no_duplicates() {
        for (i, a) in Mode::ALL.iter().enumerate() {
            for b in &Mode::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
