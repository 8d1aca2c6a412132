//! Decoration style properties and per-property merging.
//!
//! [`StyleProperties`] is the single record used for every layer of the
//! cascade: a mode's common block, its theme override layers, the built-in
//! defaults, and the resolved output all share the same shape. Every field
//! is optional; absence at any layer means "defer to the next layer",
//! never "set to empty".
//!
//! Merging is per-property, not per-object: `Some` values in an override
//! replace, `None` values preserve. This is what lets a high-contrast
//! layer override only `borderWidth` while the border color falls through
//! to the base-brightness layer.

mod css;
mod properties;

pub use css::BorderParts;
pub use properties::{StyleProperties, StyleProperty};
