//! CSS border shorthand parsing and recomposition.
//!
//! Resolution treats the `border` shorthand and the decomposed
//! `borderColor`/`borderStyle`/`borderWidth` properties as independent
//! properties, so both can appear in a resolved style. This module holds
//! the documented precedence rule for consumers that want one border:
//! [`StyleProperties::effective_border`] starts from the parsed shorthand
//! and lets each decomposed property override its part.
//!
//! The parser is built on `cssparser` (the same tokenizer used by
//! Firefox), so comments, escapes, and function notation like
//! `rgba(0, 170, 0, 0.8)` are handled robustly. It is lenient by design:
//! tokens it does not recognize are skipped, never rejected, matching the
//! posture of the rest of the parse boundary.

use std::fmt;

use cssparser::{Parser, ParserInput, Token};

use super::properties::StyleProperties;

/// CSS line-style keywords accepted for the style part.
const LINE_STYLES: [&str; 10] = [
    "none", "hidden", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset", "outset",
];

/// CSS width keywords accepted for the width part.
const WIDTH_KEYWORDS: [&str; 3] = ["thin", "medium", "thick"];

/// A CSS `border` shorthand decomposed into its three parts.
///
/// All parts are optional: a shorthand like `"dotted"` sets only the
/// style. The first token of each category wins; later candidates for an
/// already-filled part are ignored.
///
/// # Example
///
/// ```rust
/// use modecue::BorderParts;
///
/// let parts = BorderParts::parse("2px dotted #00aa00");
/// assert_eq!(parts.width.as_deref(), Some("2px"));
/// assert_eq!(parts.style.as_deref(), Some("dotted"));
/// assert_eq!(parts.color.as_deref(), Some("#00aa00"));
/// assert_eq!(parts.to_string(), "2px dotted #00aa00");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BorderParts {
    /// Border width (`2px`, `thin`, ...).
    pub width: Option<String>,
    /// Border line style (`solid`, `dotted`, ...).
    pub style: Option<String>,
    /// Border color (`#00aa00`, `red`, `rgba(...)`, ...).
    pub color: Option<String>,
}

impl BorderParts {
    /// Parses a border shorthand, accepting its parts in any order.
    ///
    /// Dimensions and width keywords fill the width part, line-style
    /// keywords fill the style part, and hex colors, color functions,
    /// and remaining identifiers fill the color part.
    pub fn parse(shorthand: &str) -> BorderParts {
        let mut input = ParserInput::new(shorthand);
        let mut parser = Parser::new(&mut input);
        let mut parts = BorderParts::default();

        loop {
            let start = parser.position();
            let token = match parser.next() {
                Ok(token) => token.clone(),
                Err(_) => break,
            };

            match token {
                Token::Dimension { value, unit, .. } => {
                    if parts.width.is_none() {
                        parts.width = Some(format!("{}{}", value, unit));
                    }
                }
                Token::Number { value, .. } => {
                    if parts.width.is_none() {
                        parts.width = Some(format!("{}", value));
                    }
                }
                Token::Ident(name) => {
                    let lower = name.to_ascii_lowercase();
                    if LINE_STYLES.contains(&lower.as_str()) {
                        if parts.style.is_none() {
                            parts.style = Some(lower);
                        }
                    } else if WIDTH_KEYWORDS.contains(&lower.as_str()) {
                        if parts.width.is_none() {
                            parts.width = Some(lower);
                        }
                    } else if parts.color.is_none() {
                        // Any other identifier is taken as a named color.
                        parts.color = Some(name.as_ref().to_string());
                    }
                }
                Token::Hash(value) | Token::IDHash(value) => {
                    if parts.color.is_none() {
                        parts.color = Some(format!("#{}", value.as_ref()));
                    }
                }
                Token::Function(_) => {
                    // Consume the argument block so the slice spans the
                    // whole call, then keep the source text verbatim.
                    let _ = parser.parse_nested_block(|nested| {
                        while nested.next().is_ok() {}
                        Ok::<(), cssparser::ParseError<()>>(())
                    });
                    if parts.color.is_none() {
                        parts.color = Some(parser.slice_from(start).trim().to_string());
                    }
                }
                _ => {}
            }
        }

        parts
    }

    /// Returns true if no part is set.
    pub fn is_empty(&self) -> bool {
        self.width.is_none() && self.style.is_none() && self.color.is_none()
    }
}

impl fmt::Display for BorderParts {
    /// Recomposes the shorthand in canonical `width style color` order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for part in [&self.width, &self.style, &self.color] {
            if let Some(part) = part {
                if !first {
                    f.write_str(" ")?;
                }
                f.write_str(part)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl StyleProperties {
    /// Combines the `border` shorthand with the decomposed border
    /// properties into one shorthand string.
    ///
    /// The decomposed `borderWidth`/`borderStyle`/`borderColor` each
    /// override the corresponding part of the parsed shorthand; parts
    /// defined by neither are omitted. Returns `None` when no border
    /// property is set at all.
    pub fn effective_border(&self) -> Option<String> {
        let mut parts = self
            .border
            .as_deref()
            .map(BorderParts::parse)
            .unwrap_or_default();

        if let Some(width) = &self.border_width {
            parts.width = Some(width.clone());
        }
        if let Some(style) = &self.border_style {
            parts.style = Some(style.clone());
        }
        if let Some(color) = &self.border_color {
            parts.color = Some(color.clone());
        }

        if parts.is_empty() {
            None
        } else {
            Some(parts.to_string())
        }
    }
}
