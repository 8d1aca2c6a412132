//! Mode sheet loading: all four mode configurations as one document.

use std::path::{Path, PathBuf};

use crate::mode::Mode;
use crate::resolve::merged_config;
use crate::style::StyleProperties;
use crate::theme::ThemeKind;

use super::config::{ModeConfig, ParseWarning};
use super::error::SheetError;

/// The four per-mode configurations, loaded as one document.
///
/// The document is a mapping keyed by mode name, each entry a
/// [`ModeConfig`] shape. Modes absent from the document read as empty
/// configurations, so every property falls through to the built-in
/// defaults.
///
/// # Example
///
/// ```rust
/// use modecue::{Mode, ModeSheet, StyleProperty, ThemeKind};
///
/// let sheet = ModeSheet::from_yaml(r#"
/// normal:
///   border: "2px dotted #aaaaaa"
///   dark:
///     border: "2px solid #00ffff"
/// insert:
///   backgroundColor: "rgba(200,200,0,0.1)"
/// "#).unwrap();
///
/// let style = sheet.resolve(Mode::Normal, ThemeKind::Dark);
/// assert_eq!(style.get(StyleProperty::Border), Some("2px solid #00ffff"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModeSheet {
    /// Sheet name (optional, typically derived from filename).
    name: Option<String>,
    /// Source file path (for refresh support).
    source_path: Option<PathBuf>,
    normal: ModeConfig,
    insert: ModeConfig,
    visual: ModeConfig,
    search: ModeConfig,
    warnings: Vec<ParseWarning>,
}

impl ModeSheet {
    /// Creates an empty, unnamed sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name on this sheet, returning `self` for chaining.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Loads a sheet from a YAML file.
    ///
    /// The sheet name is derived from the filename (without extension).
    /// The source path is stored for [`refresh`](ModeSheet::refresh)
    /// support.
    ///
    /// # Errors
    ///
    /// Returns a [`SheetError`] if the file cannot be read or is not
    /// syntactically valid YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SheetError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| SheetError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(|s| s.to_string());

        let mut sheet = Self::parse_yaml(&content, Some(path))?;
        sheet.name = name;
        sheet.source_path = Some(path.to_path_buf());
        Ok(sheet)
    }

    /// Creates a sheet from YAML content.
    ///
    /// # Errors
    ///
    /// Returns a [`SheetError`] if the content is not valid YAML or its
    /// root is not a mapping. Shape problems inside the mapping never
    /// error; they coerce to "absent" and are reported via
    /// [`warnings`](ModeSheet::warnings).
    pub fn from_yaml(yaml: &str) -> Result<Self, SheetError> {
        Self::parse_yaml(yaml, None)
    }

    /// Creates a sheet from an already-parsed YAML value.
    ///
    /// Total over every input: non-mapping roots read as an empty sheet
    /// with a warning. Useful for settings stores that hand over value
    /// snapshots rather than documents.
    pub fn from_yaml_value(value: &serde_yaml::Value) -> Self {
        let mut sheet = Self::new();
        let mut warnings = Vec::new();

        match value.as_mapping() {
            Some(map) => {
                for (key, entry) in map {
                    let Some(key) = key.as_str() else {
                        warnings.push(ParseWarning::UnknownKey {
                            path: format!("{:?}", key),
                        });
                        continue;
                    };

                    match key.parse::<Mode>() {
                        Ok(mode) => {
                            let config = ModeConfig::parse_value(entry, key, &mut warnings);
                            *sheet.config_mut(mode) = config;
                        }
                        Err(_) => warnings.push(ParseWarning::UnknownKey {
                            path: key.to_string(),
                        }),
                    }
                }
            }
            None => {
                if !value.is_null() {
                    warnings.push(ParseWarning::MalformedLayer {
                        path: String::new(),
                    });
                }
            }
        }

        sheet.warnings = warnings;
        sheet
    }

    fn parse_yaml(yaml: &str, path: Option<&Path>) -> Result<Self, SheetError> {
        let root: serde_yaml::Value =
            serde_yaml::from_str(yaml).map_err(|e| SheetError::Parse {
                path: path.map(|p| p.to_path_buf()),
                message: e.to_string(),
            })?;

        if !root.is_mapping() && !root.is_null() {
            return Err(SheetError::Parse {
                path: path.map(|p| p.to_path_buf()),
                message: "Mode sheet must be a YAML mapping".to_string(),
            });
        }

        Ok(Self::from_yaml_value(&root))
    }

    /// Reloads the sheet from its source file.
    ///
    /// Useful for hot-reloading while a user edits their configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`SheetError`] if the sheet has no source file or the
    /// file cannot be read or parsed.
    pub fn refresh(&mut self) -> Result<(), SheetError> {
        let path = self.source_path.clone().ok_or(SheetError::NoSource)?;

        let content = std::fs::read_to_string(&path).map_err(|e| SheetError::Io {
            path: path.clone(),
            message: e.to_string(),
        })?;

        let reloaded = Self::parse_yaml(&content, Some(&path))?;
        self.normal = reloaded.normal;
        self.insert = reloaded.insert;
        self.visual = reloaded.visual;
        self.search = reloaded.search;
        self.warnings = reloaded.warnings;

        Ok(())
    }

    /// Returns the sheet name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the source file path, if this sheet was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Returns the configuration for a mode.
    pub fn config(&self, mode: Mode) -> &ModeConfig {
        match mode {
            Mode::Normal => &self.normal,
            Mode::Insert => &self.insert,
            Mode::Visual => &self.visual,
            Mode::Search => &self.search,
        }
    }

    /// Returns the configuration for a mode, mutably.
    pub fn config_mut(&mut self, mode: Mode) -> &mut ModeConfig {
        match mode {
            Mode::Normal => &mut self.normal,
            Mode::Insert => &mut self.insert,
            Mode::Visual => &mut self.visual,
            Mode::Search => &mut self.search,
        }
    }

    /// Returns the anomalies recorded while this sheet was parsed.
    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    /// Returns true if every mode configuration is empty.
    pub fn is_empty(&self) -> bool {
        Mode::ALL.iter().all(|mode| self.config(*mode).is_empty())
    }

    /// Merges another sheet onto this one.
    ///
    /// Configurations from `other` take precedence, mode by mode and
    /// property by property. This allows layering sheets, e.g. loading
    /// built-in configuration and applying user overrides.
    pub fn merge(mut self, other: ModeSheet) -> Self {
        for mode in Mode::ALL {
            let merged = self.config(mode).merge(other.config(mode));
            *self.config_mut(mode) = merged;
        }
        self.warnings.extend(other.warnings);
        self
    }

    /// Resolves the full style for a mode under a theme kind.
    ///
    /// Convenience wrapper around [`merged_config`].
    pub fn resolve(&self, mode: Mode, kind: ThemeKind) -> StyleProperties {
        merged_config(mode, self.config(mode), kind)
    }
}
