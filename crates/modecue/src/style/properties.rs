//! The closed set of decoration properties and the property record.

use serde::{Deserialize, Serialize};

/// One of the fixed, closed set of decoration properties.
///
/// The variants map 1:1 onto the camelCase keys of the configuration wire
/// format (see [`key`](StyleProperty::key)). Iterating [`ALL`](Self::ALL)
/// visits every property exactly once, which is how the merger guarantees
/// that no property is skipped and none is handled twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    /// Background fill of the decorated range.
    BackgroundColor,
    /// CSS border shorthand (`<width> <style> <color>`).
    Border,
    /// Decomposed border color.
    BorderColor,
    /// Decomposed border line style.
    BorderStyle,
    /// Decomposed border width.
    BorderWidth,
    /// CSS outline shorthand.
    Outline,
    /// Decomposed outline color.
    OutlineColor,
    /// Decomposed outline line style.
    OutlineStyle,
    /// Decomposed outline width.
    OutlineWidth,
    /// Font style (e.g. `italic`).
    FontStyle,
    /// Font weight (e.g. `bold`).
    FontWeight,
    /// Mouse cursor shown over the range.
    Cursor,
    /// Color of the overview-ruler marker.
    OverviewRulerColor,
    /// Lane of the overview-ruler marker.
    OverviewRulerLane,
    /// Path of the gutter icon.
    GutterIconPath,
    /// Sizing of the gutter icon.
    GutterIconSize,
    /// How the decoration behaves when the range is edited.
    RangeBehavior,
}

impl StyleProperty {
    /// Every property, in resolution order.
    pub const ALL: [StyleProperty; 17] = [
        StyleProperty::BackgroundColor,
        StyleProperty::Border,
        StyleProperty::BorderColor,
        StyleProperty::BorderStyle,
        StyleProperty::BorderWidth,
        StyleProperty::Outline,
        StyleProperty::OutlineColor,
        StyleProperty::OutlineStyle,
        StyleProperty::OutlineWidth,
        StyleProperty::FontStyle,
        StyleProperty::FontWeight,
        StyleProperty::Cursor,
        StyleProperty::OverviewRulerColor,
        StyleProperty::OverviewRulerLane,
        StyleProperty::GutterIconPath,
        StyleProperty::GutterIconSize,
        StyleProperty::RangeBehavior,
    ];

    /// Returns the camelCase wire name of this property.
    pub fn key(self) -> &'static str {
        match self {
            StyleProperty::BackgroundColor => "backgroundColor",
            StyleProperty::Border => "border",
            StyleProperty::BorderColor => "borderColor",
            StyleProperty::BorderStyle => "borderStyle",
            StyleProperty::BorderWidth => "borderWidth",
            StyleProperty::Outline => "outline",
            StyleProperty::OutlineColor => "outlineColor",
            StyleProperty::OutlineStyle => "outlineStyle",
            StyleProperty::OutlineWidth => "outlineWidth",
            StyleProperty::FontStyle => "fontStyle",
            StyleProperty::FontWeight => "fontWeight",
            StyleProperty::Cursor => "cursor",
            StyleProperty::OverviewRulerColor => "overviewRulerColor",
            StyleProperty::OverviewRulerLane => "overviewRulerLane",
            StyleProperty::GutterIconPath => "gutterIconPath",
            StyleProperty::GutterIconSize => "gutterIconSize",
            StyleProperty::RangeBehavior => "rangeBehavior",
        }
    }

    /// Parses an exact wire name back into a property.
    pub fn from_key(key: &str) -> Option<StyleProperty> {
        StyleProperty::ALL.into_iter().find(|p| p.key() == key)
    }
}

/// A bag of decoration property values, all optional.
///
/// Serves as every layer of the cascade: common block, theme override
/// layer, defaults entry, and resolved output. Serialization uses the
/// camelCase wire names and omits absent properties.
///
/// # Example
///
/// ```rust
/// use modecue::{StyleProperties, StyleProperty};
///
/// let mut bag = StyleProperties::new();
/// bag.set(StyleProperty::Border, "2px dotted #00aa00");
///
/// assert_eq!(bag.get(StyleProperty::Border), Some("2px dotted #00aa00"));
/// assert_eq!(bag.get(StyleProperty::BackgroundColor), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview_ruler_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview_ruler_lane: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gutter_icon_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gutter_icon_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_behavior: Option<String>,
}

impl StyleProperties {
    /// Creates an empty bag (every property absent).
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of a single property, if set.
    pub fn get(&self, property: StyleProperty) -> Option<&str> {
        self.field(property).as_deref()
    }

    /// Sets the value of a single property.
    pub fn set(&mut self, property: StyleProperty, value: impl Into<String>) {
        *self.field_mut(property) = Some(value.into());
    }

    /// Removes the value of a single property.
    pub fn unset(&mut self, property: StyleProperty) {
        *self.field_mut(property) = None;
    }

    /// Returns true if every property is absent.
    pub fn is_empty(&self) -> bool {
        StyleProperty::ALL.iter().all(|p| self.get(*p).is_none())
    }

    /// Returns the number of set properties.
    pub fn len(&self) -> usize {
        StyleProperty::ALL
            .iter()
            .filter(|p| self.get(**p).is_some())
            .count()
    }

    /// Iterates the set properties in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, &str)> + '_ {
        StyleProperty::ALL
            .into_iter()
            .filter_map(move |p| self.get(p).map(|v| (p, v)))
    }

    /// Merges another bag onto this one, returning the result.
    ///
    /// `Some` values in `other` override values in `self`; `None` values
    /// in `other` preserve them. Each property merges on its own; the
    /// presence of one property never influences another.
    pub fn merge(&self, other: &StyleProperties) -> StyleProperties {
        let mut merged = self.clone();
        for property in StyleProperty::ALL {
            if let Some(value) = other.get(property) {
                merged.set(property, value);
            }
        }
        merged
    }

    fn field(&self, property: StyleProperty) -> &Option<String> {
        match property {
            StyleProperty::BackgroundColor => &self.background_color,
            StyleProperty::Border => &self.border,
            StyleProperty::BorderColor => &self.border_color,
            StyleProperty::BorderStyle => &self.border_style,
            StyleProperty::BorderWidth => &self.border_width,
            StyleProperty::Outline => &self.outline,
            StyleProperty::OutlineColor => &self.outline_color,
            StyleProperty::OutlineStyle => &self.outline_style,
            StyleProperty::OutlineWidth => &self.outline_width,
            StyleProperty::FontStyle => &self.font_style,
            StyleProperty::FontWeight => &self.font_weight,
            StyleProperty::Cursor => &self.cursor,
            StyleProperty::OverviewRulerColor => &self.overview_ruler_color,
            StyleProperty::OverviewRulerLane => &self.overview_ruler_lane,
            StyleProperty::GutterIconPath => &self.gutter_icon_path,
            StyleProperty::GutterIconSize => &self.gutter_icon_size,
            StyleProperty::RangeBehavior => &self.range_behavior,
        }
    }

    fn field_mut(&mut self, property: StyleProperty) -> &mut Option<String> {
        match property {
            StyleProperty::BackgroundColor => &mut self.background_color,
            StyleProperty::Border => &mut self.border,
            StyleProperty::BorderColor => &mut self.border_color,
            StyleProperty::BorderStyle => &mut self.border_style,
            StyleProperty::BorderWidth => &mut self.border_width,
            StyleProperty::Outline => &mut self.outline,
            StyleProperty::OutlineColor => &mut self.outline_color,
            StyleProperty::OutlineStyle => &mut self.outline_style,
            StyleProperty::OutlineWidth => &mut self.outline_width,
            StyleProperty::FontStyle => &mut self.font_style,
            StyleProperty::FontWeight => &mut self.font_weight,
            StyleProperty::Cursor => &mut self.cursor,
            StyleProperty::OverviewRulerColor => &mut self.overview_ruler_color,
            StyleProperty::OverviewRulerLane => &mut self.overview_ruler_lane,
            StyleProperty::GutterIconPath => &mut self.gutter_icon_path,
            StyleProperty::GutterIconSize => &mut self.gutter_icon_size,
            StyleProperty::RangeBehavior => &mut self.range_behavior,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // StyleProperty tests
    // =========================================================================

    #[test]
    fn test_key_round_trip() {
        for property in StyleProperty::ALL {
            assert_eq!(StyleProperty::from_key(property.key()), Some(property));
        }
    }

    #[test]
    fn test_from_key_rejects_unknown_and_layer_keys() {
        assert_eq!(StyleProperty::from_key("bordr"), None);
        assert_eq!(StyleProperty::from_key("BACKGROUNDCOLOR"), None);
        assert_eq!(StyleProperty::from_key("dark"), None);
        assert_eq!(StyleProperty::from_key("highContrastLight"), None);
    }

    #[test]
    fn test_all_keys_are_unique() {
        for (i, a) in StyleProperty::ALL.iter().enumerate() {
            for b in &StyleProperty::ALL[i + 1..] {
                assert_ne!(a.key(), b.key());
            }
        }
    }

    // =========================================================================
    // Get/set tests
    // =========================================================================

    #[test]
    fn test_get_set_symmetry() {
        let mut bag = StyleProperties::new();
        for property in StyleProperty::ALL {
            assert_eq!(bag.get(property), None);
            bag.set(property, property.key());
            assert_eq!(bag.get(property), Some(property.key()));
        }
        assert_eq!(bag.len(), StyleProperty::ALL.len());
    }

    #[test]
    fn test_unset() {
        let mut bag = StyleProperties::new();
        bag.set(StyleProperty::Border, "1px solid red");
        bag.unset(StyleProperty::Border);
        assert!(bag.is_empty());
    }

    #[test]
    fn test_iter_visits_set_properties_in_order() {
        let mut bag = StyleProperties::new();
        bag.set(StyleProperty::Cursor, "pointer");
        bag.set(StyleProperty::Border, "1px solid red");

        let entries: Vec<_> = bag.iter().collect();
        assert_eq!(
            entries,
            vec![
                (StyleProperty::Border, "1px solid red"),
                (StyleProperty::Cursor, "pointer"),
            ]
        );
    }

    // =========================================================================
    // Merge tests
    // =========================================================================

    #[test]
    fn test_merge_empty_onto_full() {
        let mut base = StyleProperties::new();
        base.set(StyleProperty::Border, "1px solid red");
        base.set(StyleProperty::FontWeight, "bold");

        let merged = base.merge(&StyleProperties::new());
        assert_eq!(merged, base);
    }

    #[test]
    fn test_merge_override_and_preserve() {
        let mut base = StyleProperties::new();
        base.set(StyleProperty::Border, "1px solid red");
        base.set(StyleProperty::BackgroundColor, "#112233");

        let mut over = StyleProperties::new();
        over.set(StyleProperty::Border, "2px dashed blue");

        let merged = base.merge(&over);
        // border overridden
        assert_eq!(merged.get(StyleProperty::Border), Some("2px dashed blue"));
        // backgroundColor preserved
        assert_eq!(merged.get(StyleProperty::BackgroundColor), Some("#112233"));
    }

    #[test]
    fn test_merge_is_per_property() {
        let mut base = StyleProperties::new();
        base.set(StyleProperty::BorderColor, "#00ff00");

        let mut over = StyleProperties::new();
        over.set(StyleProperty::BorderWidth, "4px");

        let merged = base.merge(&over);
        assert_eq!(merged.get(StyleProperty::BorderColor), Some("#00ff00"));
        assert_eq!(merged.get(StyleProperty::BorderWidth), Some("4px"));
    }

    // =========================================================================
    // Serde tests
    // =========================================================================

    #[test]
    fn test_serialize_uses_camel_case_and_skips_absent() {
        let mut bag = StyleProperties::new();
        bag.set(StyleProperty::BackgroundColor, "rgba(255,255,255,0)");
        bag.set(StyleProperty::OverviewRulerColor, "#00aa00");

        let json = serde_json::to_string(&bag).unwrap();
        assert!(json.contains("\"backgroundColor\""));
        assert!(json.contains("\"overviewRulerColor\""));
        assert!(!json.contains("border"));
    }

    #[test]
    fn test_deserialize_wire_keys() {
        let bag: StyleProperties = serde_yaml::from_str(
            r#"
            backgroundColor: "rgba(255,255,255,0)"
            gutterIconSize: contain
            "#,
        )
        .unwrap();

        assert_eq!(
            bag.get(StyleProperty::BackgroundColor),
            Some("rgba(255,255,255,0)")
        );
        assert_eq!(bag.get(StyleProperty::GutterIconSize), Some("contain"));
        assert_eq!(bag.len(), 2);
    }
}
