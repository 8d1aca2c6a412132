//! Mode sheet parsing: the user-authored configuration document.
//!
//! A mode sheet maps mode names to per-mode configuration objects. Each
//! configuration carries theme-agnostic properties at its top level (the
//! common block) plus optional theme override layers:
//!
//! ```yaml
//! normal:
//!   backgroundColor: "rgba(255,255,255,0)"
//!   border: "2px dotted #aaaaaa"
//!   dark:
//!     border: "2px solid #00ffff"
//!   highContrastDark:
//!     borderWidth: "4px"
//!
//! insert:
//!   backgroundColor: "rgba(200,200,0,0.1)"
//! ```
//!
//! # Lenient by design
//!
//! The boundary between the document and the resolution core is total:
//! anything a live settings store can produce (including partially
//! edited or stale configuration) reads as *some* configuration.
//! Malformed layers and wrongly-typed values coerce to "absent" and are
//! recorded as [`ParseWarning`]s for collaborators to surface; only I/O
//! failures and syntactically invalid YAML are hard errors.

#[allow(clippy::module_inception)]
mod sheet;

mod config;
mod error;

pub use config::{ModeConfig, ParseWarning};
pub use error::SheetError;
pub use sheet::ModeSheet;
