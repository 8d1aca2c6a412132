//! The per-mode configuration object and its lenient parse boundary.
//!
//! A mode's configuration is a mapping with style properties at the top
//! level (the common block) plus up to four optional theme override
//! sub-objects keyed `dark`, `light`, `highContrastDark`, and
//! `highContrastLight`:
//!
//! ```yaml
//! backgroundColor: "rgba(255,255,255,0)"
//! border: "2px dotted #aaaaaa"
//! dark:
//!   border: "2px solid #00ffff"
//! highContrastDark:
//!   borderWidth: "4px"
//! ```
//!
//! The parse boundary is total: a malformed layer reads as an absent
//! layer, a non-string property value reads as an absent property, and
//! unknown keys are skipped. Each coercion is recorded as a
//! [`ParseWarning`] so a collaborator can surface it; none of them stops
//! resolution.

use std::fmt;

use crate::style::{StyleProperties, StyleProperty};
use crate::theme::ThemeKind;

/// A non-fatal anomaly noticed while reading configuration.
///
/// The offending value is coerced to "absent" and resolution proceeds;
/// the warning records what was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A key that is neither a style property nor a theme layer.
    UnknownKey {
        /// Dotted path of the skipped key (e.g. `normal.bordr`).
        path: String,
    },

    /// A property whose value is not a string.
    NonStringValue {
        /// Dotted path of the coerced property.
        path: String,
    },

    /// A theme layer (or mode entry) whose value is not a mapping.
    MalformedLayer {
        /// Dotted path of the coerced layer.
        path: String,
    },
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseWarning::UnknownKey { path } => write!(f, "unknown key '{}'", path),
            ParseWarning::NonStringValue { path } => {
                write!(f, "value of '{}' is not a string", path)
            }
            ParseWarning::MalformedLayer { path } => {
                write!(f, "'{}' is not a mapping", path)
            }
        }
    }
}

/// Raw, user-supplied configuration for one mode.
///
/// Holds the theme-agnostic common block plus the four optional theme
/// override layers. Every layer is a partial [`StyleProperties`] bag;
/// absence of a property at any layer defers to the next layer of the
/// cascade, it never clears anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModeConfig {
    /// Theme-agnostic property values.
    pub common: StyleProperties,
    /// Overrides for dark themes.
    pub dark: Option<StyleProperties>,
    /// Overrides for light themes.
    pub light: Option<StyleProperties>,
    /// Overrides for high-contrast dark themes.
    pub high_contrast_dark: Option<StyleProperties>,
    /// Overrides for high-contrast light themes.
    pub high_contrast_light: Option<StyleProperties>,
}

impl ModeConfig {
    /// Creates an empty configuration (every layer absent).
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the override layer for a theme kind, if configured.
    pub fn layer(&self, kind: ThemeKind) -> Option<&StyleProperties> {
        match kind {
            ThemeKind::Dark => self.dark.as_ref(),
            ThemeKind::Light => self.light.as_ref(),
            ThemeKind::HighContrastDark => self.high_contrast_dark.as_ref(),
            ThemeKind::HighContrastLight => self.high_contrast_light.as_ref(),
        }
    }

    /// Returns true if the common block and every layer are absent/empty.
    pub fn is_empty(&self) -> bool {
        self.common.is_empty()
            && ThemeKind::ALL
                .iter()
                .all(|kind| self.layer(*kind).is_none())
    }

    /// Merges another configuration onto this one, returning the result.
    ///
    /// `other`'s populated properties win, layer by layer and property by
    /// property; layers present on only one side are carried over as-is.
    pub fn merge(&self, other: &ModeConfig) -> ModeConfig {
        ModeConfig {
            common: self.common.merge(&other.common),
            dark: merge_layer(&self.dark, &other.dark),
            light: merge_layer(&self.light, &other.light),
            high_contrast_dark: merge_layer(&self.high_contrast_dark, &other.high_contrast_dark),
            high_contrast_light: merge_layer(&self.high_contrast_light, &other.high_contrast_light),
        }
    }

    /// Builds a configuration from a YAML value.
    ///
    /// Total over every input: `null` and non-mapping values read as an
    /// empty configuration, and shape problems inside the mapping coerce
    /// to "absent" with a warning. Never errors.
    pub fn from_yaml_value(value: &serde_yaml::Value) -> (Self, Vec<ParseWarning>) {
        let mut warnings = Vec::new();
        let config = Self::parse_value(value, "", &mut warnings);
        (config, warnings)
    }

    /// Builds a configuration from a JSON value.
    ///
    /// Same boundary as [`from_yaml_value`](Self::from_yaml_value), for
    /// settings stores that hand over JSON-shaped snapshots.
    pub fn from_json_value(value: &serde_json::Value) -> (Self, Vec<ParseWarning>) {
        let value = serde_yaml::to_value(value).unwrap_or(serde_yaml::Value::Null);
        Self::from_yaml_value(&value)
    }

    pub(crate) fn parse_value(
        value: &serde_yaml::Value,
        path: &str,
        warnings: &mut Vec<ParseWarning>,
    ) -> Self {
        let Some(map) = value.as_mapping() else {
            if !value.is_null() {
                warnings.push(ParseWarning::MalformedLayer {
                    path: path.to_string(),
                });
            }
            return Self::default();
        };

        let mut config = Self::default();

        for (key, entry) in map {
            let Some(key) = key.as_str() else {
                warnings.push(ParseWarning::UnknownKey {
                    path: join_path(path, &format!("{:?}", key)),
                });
                continue;
            };
            let child = join_path(path, key);

            if let Some(kind) = ThemeKind::from_key(key) {
                match entry.as_mapping() {
                    Some(layer_map) => {
                        let bag = parse_properties(layer_map, &child, warnings);
                        *config.layer_slot(kind) = Some(bag);
                    }
                    None => warnings.push(ParseWarning::MalformedLayer { path: child }),
                }
            } else if let Some(property) = StyleProperty::from_key(key) {
                match entry.as_str() {
                    Some(value) => config.common.set(property, value),
                    None => warnings.push(ParseWarning::NonStringValue { path: child }),
                }
            } else {
                warnings.push(ParseWarning::UnknownKey { path: child });
            }
        }

        config
    }

    fn layer_slot(&mut self, kind: ThemeKind) -> &mut Option<StyleProperties> {
        match kind {
            ThemeKind::Dark => &mut self.dark,
            ThemeKind::Light => &mut self.light,
            ThemeKind::HighContrastDark => &mut self.high_contrast_dark,
            ThemeKind::HighContrastLight => &mut self.high_contrast_light,
        }
    }
}

fn merge_layer(
    base: &Option<StyleProperties>,
    over: &Option<StyleProperties>,
) -> Option<StyleProperties> {
    match (base, over) {
        (Some(base), Some(over)) => Some(base.merge(over)),
        (Some(base), None) => Some(base.clone()),
        (None, Some(over)) => Some(over.clone()),
        (None, None) => None,
    }
}

fn parse_properties(
    map: &serde_yaml::Mapping,
    path: &str,
    warnings: &mut Vec<ParseWarning>,
) -> StyleProperties {
    let mut bag = StyleProperties::new();

    for (key, entry) in map {
        let Some(key) = key.as_str() else {
            warnings.push(ParseWarning::UnknownKey {
                path: join_path(path, &format!("{:?}", key)),
            });
            continue;
        };
        let child = join_path(path, key);

        match StyleProperty::from_key(key) {
            Some(property) => match entry.as_str() {
                Some(value) => bag.set(property, value),
                None => warnings.push(ParseWarning::NonStringValue { path: child }),
            },
            None => warnings.push(ParseWarning::UnknownKey { path: child }),
        }
    }

    bag
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> serde_yaml::Value {
        serde_yaml::from_str(s).unwrap()
    }

    // =========================================================================
    // Parsing tests
    // =========================================================================

    #[test]
    fn test_parse_common_and_layers() {
        let (config, warnings) = ModeConfig::from_yaml_value(&yaml(
            r#"
            border: "2px dotted #aaaaaa"
            dark:
                border: "2px solid #00ffff"
            highContrastDark:
                borderWidth: "4px"
            "#,
        ));

        assert!(warnings.is_empty());
        assert_eq!(
            config.common.get(StyleProperty::Border),
            Some("2px dotted #aaaaaa")
        );
        assert_eq!(
            config.layer(ThemeKind::Dark).unwrap().get(StyleProperty::Border),
            Some("2px solid #00ffff")
        );
        assert_eq!(
            config
                .layer(ThemeKind::HighContrastDark)
                .unwrap()
                .get(StyleProperty::BorderWidth),
            Some("4px")
        );
        assert!(config.layer(ThemeKind::Light).is_none());
    }

    #[test]
    fn test_parse_null_is_empty() {
        let (config, warnings) = ModeConfig::from_yaml_value(&serde_yaml::Value::Null);
        assert!(config.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_parse_non_mapping_is_empty_with_warning() {
        let (config, warnings) = ModeConfig::from_yaml_value(&yaml("42"));
        assert!(config.is_empty());
        assert_eq!(
            warnings,
            vec![ParseWarning::MalformedLayer { path: String::new() }]
        );
    }

    #[test]
    fn test_parse_malformed_layer_reads_as_absent() {
        let (config, warnings) = ModeConfig::from_yaml_value(&yaml(
            r#"
            border: "1px solid red"
            dark: 7
            "#,
        ));

        assert!(config.layer(ThemeKind::Dark).is_none());
        assert_eq!(config.common.get(StyleProperty::Border), Some("1px solid red"));
        assert_eq!(
            warnings,
            vec![ParseWarning::MalformedLayer { path: "dark".into() }]
        );
    }

    #[test]
    fn test_parse_non_string_property_reads_as_absent() {
        let (config, warnings) = ModeConfig::from_yaml_value(&yaml(
            r#"
            borderWidth: 2
            "#,
        ));

        assert!(config.common.is_empty());
        assert_eq!(
            warnings,
            vec![ParseWarning::NonStringValue { path: "borderWidth".into() }]
        );
    }

    #[test]
    fn test_parse_unknown_keys_are_skipped_with_warning() {
        let (config, warnings) = ModeConfig::from_yaml_value(&yaml(
            r#"
            bordr: "1px solid red"
            dark:
                shadow: "none"
            "#,
        ));

        assert!(config.common.is_empty());
        assert!(config.layer(ThemeKind::Dark).unwrap().is_empty());
        assert_eq!(
            warnings,
            vec![
                ParseWarning::UnknownKey { path: "bordr".into() },
                ParseWarning::UnknownKey { path: "dark.shadow".into() },
            ]
        );
    }

    #[test]
    fn test_parse_layer_keys_are_exact() {
        // A lowercase "highcontrastdark" is not a layer, so it is unknown.
        let (config, warnings) = ModeConfig::from_yaml_value(&yaml(
            r#"
            highcontrastdark:
                border: "1px"
            "#,
        ));

        assert!(config.layer(ThemeKind::HighContrastDark).is_none());
        assert_eq!(
            warnings,
            vec![ParseWarning::UnknownKey { path: "highcontrastdark".into() }]
        );
    }

    #[test]
    fn test_parse_empty_layer_is_present_but_partial() {
        let (config, _) = ModeConfig::from_yaml_value(&yaml("light: {}"));
        let layer = config.layer(ThemeKind::Light).unwrap();
        assert!(layer.is_empty());
    }

    #[test]
    fn test_from_json_value() {
        let value: serde_json::Value = serde_json::from_str(
            r#"{ "border": "3px solid #123456", "light": { "cursor": "pointer" } }"#,
        )
        .unwrap();

        let (config, warnings) = ModeConfig::from_json_value(&value);
        assert!(warnings.is_empty());
        assert_eq!(
            config.common.get(StyleProperty::Border),
            Some("3px solid #123456")
        );
        assert_eq!(
            config.layer(ThemeKind::Light).unwrap().get(StyleProperty::Cursor),
            Some("pointer")
        );
    }

    // =========================================================================
    // Merge tests
    // =========================================================================

    #[test]
    fn test_merge_common_and_layers() {
        let (base, _) = ModeConfig::from_yaml_value(&yaml(
            r##"
            border: "1px solid red"
            backgroundColor: "#111111"
            dark:
                border: "1px solid blue"
            "##,
        ));
        let (over, _) = ModeConfig::from_yaml_value(&yaml(
            r#"
            border: "2px dashed green"
            dark:
                cursor: pointer
            light:
                border: "3px"
            "#,
        ));

        let merged = base.merge(&over);
        // common: border overridden, backgroundColor preserved
        assert_eq!(merged.common.get(StyleProperty::Border), Some("2px dashed green"));
        assert_eq!(merged.common.get(StyleProperty::BackgroundColor), Some("#111111"));
        // dark: union of both sides
        let dark = merged.layer(ThemeKind::Dark).unwrap();
        assert_eq!(dark.get(StyleProperty::Border), Some("1px solid blue"));
        assert_eq!(dark.get(StyleProperty::Cursor), Some("pointer"));
        // light: carried from `over` only
        assert_eq!(
            merged.layer(ThemeKind::Light).unwrap().get(StyleProperty::Border),
            Some("3px")
        );
    }

    #[test]
    fn test_merge_with_empty_is_identity() {
        let (config, _) = ModeConfig::from_yaml_value(&yaml(
            r##"
            border: "1px solid red"
            highContrastLight:
                borderColor: "#ffffff"
            "##,
        ));

        assert_eq!(config.merge(&ModeConfig::new()), config);
        assert_eq!(ModeConfig::new().merge(&config), config);
    }
}
