//! The cascading resolution engine.
//!
//! Resolution turns a raw [`ModeConfig`] plus the active theme kind into
//! a fully-resolved style, one property at a time:
//!
//! 1. Walk the theme kind's fallback chain, most specific layer first.
//!    The first layer that defines the property wins.
//! 2. If no layer defines it, consult the mode's common block.
//! 3. If still undefined, fall back to the mode's built-in default.
//!    Properties with no default and no configured value are omitted.
//!
//! Each property cascades on its own: a high-contrast layer that defines
//! only `borderWidth` satisfies that property while the border color
//! falls through to the base-brightness layer. Two properties in the
//! same resolution can be satisfied by two different layers.
//!
//! The engine is a pure function of its arguments. It holds no state,
//! performs no I/O, never panics for any input shape, and recomputes the
//! full result on every call. Callers trigger it on activation,
//! configuration changes, and theme changes, and debounce as they see
//! fit.

use once_cell::sync::Lazy;
use tracing::trace;

use crate::mode::Mode;
use crate::sheet::ModeConfig;
use crate::style::{StyleProperties, StyleProperty};
use crate::theme::ThemeKind;

/// Returns the built-in style for a mode, the terminal layer of every
/// cascade.
///
/// These are fixed product constants, not user-configurable. Every mode
/// gets a transparent background and a distinctive border; all other
/// properties have no default and stay absent unless configured.
pub fn defaults_for(mode: Mode) -> &'static StyleProperties {
    static NORMAL: Lazy<StyleProperties> = Lazy::new(|| build_default("2px dotted #00aa00"));
    static INSERT: Lazy<StyleProperties> = Lazy::new(|| build_default("2px solid #aaaa00"));
    static VISUAL: Lazy<StyleProperties> = Lazy::new(|| build_default("2px solid #0077aa"));
    static SEARCH: Lazy<StyleProperties> = Lazy::new(|| build_default("2px dashed #aa00aa"));

    match mode {
        Mode::Normal => &NORMAL,
        Mode::Insert => &INSERT,
        Mode::Visual => &VISUAL,
        Mode::Search => &SEARCH,
    }
}

fn build_default(border: &str) -> StyleProperties {
    let mut style = StyleProperties::new();
    style.set(StyleProperty::BackgroundColor, "rgba(255,255,255,0)");
    style.set(StyleProperty::Border, border);
    style
}

/// Resolves a single property against one mode's configuration.
///
/// Walks `chain` in order, then the common block, then `default`; the
/// first definition wins. Returns `None` only when the property is
/// absent at every layer and has no default.
pub fn resolve_property(
    property: StyleProperty,
    config: &ModeConfig,
    chain: &[ThemeKind],
    default: Option<&str>,
) -> Option<String> {
    for layer in chain {
        if let Some(bag) = config.layer(*layer) {
            if let Some(value) = bag.get(property) {
                trace!(
                    property = property.key(),
                    layer = layer.key(),
                    "resolved from theme layer"
                );
                return Some(value.to_string());
            }
        }
    }

    if let Some(value) = config.common.get(property) {
        trace!(property = property.key(), "resolved from common block");
        return Some(value.to_string());
    }

    if default.is_some() {
        trace!(property = property.key(), "resolved from defaults");
    }
    default.map(str::to_string)
}

/// Produces the fully-resolved style for a mode under a theme kind.
///
/// Resolves every property of the closed set independently via
/// [`resolve_property`], backed by the mode's entry in the defaults
/// table. The result is complete (every property with a default is
/// present) and ready for direct handoff to a renderer.
pub fn merged_config(mode: Mode, config: &ModeConfig, kind: ThemeKind) -> StyleProperties {
    let chain = kind.fallback_chain();
    let defaults = defaults_for(mode);

    let mut resolved = StyleProperties::new();
    for property in StyleProperty::ALL {
        if let Some(value) = resolve_property(property, config, chain, defaults.get(property)) {
            resolved.set(property, value);
        }
    }
    resolved
}

/// Resolves the style for a mode from a raw host theme signal.
///
/// The one operation collaborators call on activation, configuration
/// change, and theme change: classifies the signal, builds the fallback
/// chain, and resolves every property. Total over every input:
/// unrecognized signals classify as dark, and malformed configuration
/// reads as absent.
pub fn resolve_mode_style(mode: Mode, config: &ModeConfig, raw_theme: &str) -> StyleProperties {
    merged_config(mode, config, ThemeKind::classify(raw_theme))
}
