//! OS color-scheme detection.
//!
//! Maps the operating system's reported scheme onto a [`ThemeKind`].
//! The OS only distinguishes light from dark, so detection never yields a
//! high-contrast kind; those arrive through the host's explicit theme
//! signal and [`ThemeKind::classify`].

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use std::sync::Mutex;

use super::kind::ThemeKind;

type ThemeDetector = fn() -> ThemeKind;

static THEME_DETECTOR: Lazy<Mutex<ThemeDetector>> = Lazy::new(|| Mutex::new(os_theme_detector));

/// Overrides the detector used by [`detect_theme_kind`].
///
/// This is useful for testing or when an application wants to force a
/// specific kind regardless of the OS setting.
///
/// # Example
///
/// ```rust
/// use modecue::{set_theme_detector, ThemeKind};
///
/// set_theme_detector(|| ThemeKind::Light);
/// ```
pub fn set_theme_detector(detector: ThemeDetector) {
    let mut guard = THEME_DETECTOR.lock().unwrap();
    *guard = detector;
}

/// Detects the active theme kind from the OS color-scheme preference.
///
/// Returns [`ThemeKind::Light`] when the OS reports light mode and
/// [`ThemeKind::Dark`] otherwise; an unspecified preference and a failed
/// query both land on the dark default. The detector can be overridden
/// via [`set_theme_detector`] for testing.
pub fn detect_theme_kind() -> ThemeKind {
    let detector = THEME_DETECTOR.lock().unwrap();
    (*detector)()
}

fn os_theme_detector() -> ThemeKind {
    match detect_os_theme() {
        Ok(OsThemeMode::Light) => ThemeKind::Light,
        // Dark, Unspecified, and detection failures.
        _ => ThemeKind::Dark,
    }
}
