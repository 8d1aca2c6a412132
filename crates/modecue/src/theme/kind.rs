//! Theme kinds and their override fallback chains.

use std::fmt;

/// The host editor's color-scheme classification.
///
/// Exactly one kind is active at any time. The variants double as the
/// layer keys of a mode configuration: a `dark` sub-object in a mode's
/// configuration is the override layer consulted when `Dark` (or, via its
/// fallback chain, `HighContrastDark`) is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeKind {
    /// Plain dark theme.
    Dark,
    /// Plain light theme.
    Light,
    /// High-contrast theme with a dark base.
    HighContrastDark,
    /// High-contrast theme with a light base.
    HighContrastLight,
}

impl ThemeKind {
    /// All kinds, in declaration order.
    pub const ALL: [ThemeKind; 4] = [
        ThemeKind::Dark,
        ThemeKind::Light,
        ThemeKind::HighContrastDark,
        ThemeKind::HighContrastLight,
    ];

    /// Classifies an opaque host theme signal into a kind.
    ///
    /// Recognized spellings are the four wire names plus the aliases
    /// common host environments report. Matching is case-insensitive.
    /// Anything unrecognized maps to [`ThemeKind::Dark`], a deliberate
    /// safe default rather than an error; this function is total and has
    /// no side effects.
    pub fn classify(raw: &str) -> ThemeKind {
        match raw.trim().to_ascii_lowercase().as_str() {
            "light" | "vs" => ThemeKind::Light,
            "highcontrastdark" | "high-contrast-dark" | "high-contrast" | "hc-black" => {
                ThemeKind::HighContrastDark
            }
            "highcontrastlight" | "high-contrast-light" | "hc-light" => {
                ThemeKind::HighContrastLight
            }
            // "dark", "vs-dark", and every future/unknown signal.
            _ => ThemeKind::Dark,
        }
    }

    /// Parses an exact layer key as it appears in a mode configuration.
    ///
    /// Unlike [`classify`](Self::classify), this accepts only the four
    /// wire spellings; any other key is not a theme layer.
    pub fn from_key(key: &str) -> Option<ThemeKind> {
        match key {
            "dark" => Some(ThemeKind::Dark),
            "light" => Some(ThemeKind::Light),
            "highContrastDark" => Some(ThemeKind::HighContrastDark),
            "highContrastLight" => Some(ThemeKind::HighContrastLight),
            _ => None,
        }
    }

    /// Returns the wire name used as this kind's layer key.
    pub fn key(self) -> &'static str {
        match self {
            ThemeKind::Dark => "dark",
            ThemeKind::Light => "light",
            ThemeKind::HighContrastDark => "highContrastDark",
            ThemeKind::HighContrastLight => "highContrastLight",
        }
    }

    /// Returns the override layers consulted for this kind, most specific
    /// first.
    ///
    /// High-contrast kinds fall back to their base-brightness layer; the
    /// plain kinds consult only their own layer. The chain excludes the
    /// common block and defaults, which every resolution consults after
    /// the chain is exhausted.
    pub fn fallback_chain(self) -> &'static [ThemeKind] {
        match self {
            ThemeKind::Dark => &[ThemeKind::Dark],
            ThemeKind::Light => &[ThemeKind::Light],
            ThemeKind::HighContrastDark => &[ThemeKind::HighContrastDark, ThemeKind::Dark],
            ThemeKind::HighContrastLight => &[ThemeKind::HighContrastLight, ThemeKind::Light],
        }
    }

    /// True for the two high-contrast kinds.
    pub fn is_high_contrast(self) -> bool {
        matches!(
            self,
            ThemeKind::HighContrastDark | ThemeKind::HighContrastLight
        )
    }

    /// True for the two dark-based kinds.
    pub fn is_dark(self) -> bool {
        matches!(self, ThemeKind::Dark | ThemeKind::HighContrastDark)
    }
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
