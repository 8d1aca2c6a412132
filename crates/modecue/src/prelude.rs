//! Prelude for convenient imports.
//!
//! Re-exports the types most callers need in one line:
//!
//! ```rust,ignore
//! use modecue::prelude::*;
//!
//! let sheet = ModeSheet::from_file("./modes.yaml")?;
//! let style = sheet.resolve(Mode::Insert, ThemeKind::Dark);
//! ```

// Core resolution
pub use crate::resolve::{merged_config, resolve_mode_style};

// Modes and theme kinds
pub use crate::mode::Mode;
pub use crate::theme::{detect_theme_kind, ThemeKind};

// Configuration
pub use crate::sheet::{ModeConfig, ModeSheet};

// Style values
pub use crate::style::{StyleProperties, StyleProperty};
