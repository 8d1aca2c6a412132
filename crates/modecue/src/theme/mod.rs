//! Theme classification, fallback chains, and OS color-scheme detection.
//!
//! The host environment reports its active color theme as an opaque,
//! enum-like signal. [`ThemeKind::classify`] normalizes that signal into
//! one of four kinds, and [`ThemeKind::fallback_chain`] produces the
//! priority-ordered list of override layers consulted during resolution:
//!
//! | Kind                | Chain                          |
//! |---------------------|--------------------------------|
//! | `dark`              | `dark`                         |
//! | `light`             | `light`                        |
//! | `highContrastDark`  | `highContrastDark`, `dark`     |
//! | `highContrastLight` | `highContrastLight`, `light`   |
//!
//! A chain never crosses the dark/light axis and a plain kind never
//! consults a high-contrast layer.
//!
//! # Detection
//!
//! [`detect_theme_kind`] queries the OS for the user's preferred scheme.
//! Override it for testing with [`set_theme_detector`]:
//!
//! ```rust,ignore
//! modecue::set_theme_detector(|| ThemeKind::Light);
//! ```
//!
//! Detection is a convenience for callers; the resolution core always
//! takes the kind (or the raw signal) as an argument and holds no
//! process-wide state of its own.

mod detect;
mod kind;

pub use detect::{detect_theme_kind, set_theme_detector};
pub use kind::ThemeKind;
