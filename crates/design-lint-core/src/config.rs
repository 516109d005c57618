//! Guideline configuration: built-in defaults plus an optional user overlay.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// The merged design-guideline configuration.
///
/// Constructed once per run and read-only thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuidelineConfig {
    /// Allowed color palette and named contrast thresholds.
    pub colors: ColorConfig,
    /// Allowed spacing scale.
    pub spacing: SpacingConfig,
    /// Allowed typography values.
    pub typography: TypographyConfig,
}

/// Color palette configuration.
///
/// Categories live directly under `[colors]` in the config file;
/// `contrast_ratios` sits alongside them as a nested table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorConfig {
    /// Named contrast thresholds. Loaded for forward compatibility;
    /// no current check consults these values.
    #[serde(default)]
    pub contrast_ratios: BTreeMap<String, f64>,
    /// Category name (e.g. "primary") to ordered list of hex colors.
    #[serde(flatten)]
    pub palette: BTreeMap<String, Vec<String>>,
}

impl ColorConfig {
    /// Flattens all category lists into one allowed set.
    ///
    /// Membership is verbatim: `#FFF` and `#FFFFFF` are distinct entries.
    #[must_use]
    pub fn allowed(&self) -> BTreeSet<&str> {
        self.palette
            .values()
            .flatten()
            .map(String::as_str)
            .collect()
    }
}

/// Spacing scale configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpacingConfig {
    /// Ordered list of allowed pixel magnitudes.
    pub scale: Vec<u32>,
    /// Unit label for the scale.
    pub unit: String,
}

impl SpacingConfig {
    /// Returns the smallest value in the scale, used as the
    /// divisibility fallback. `None` when the scale is empty.
    #[must_use]
    pub fn base_unit(&self) -> Option<u32> {
        self.scale.iter().copied().min()
    }
}

/// Typography configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypographyConfig {
    /// Allowed font-size strings (value + unit, e.g. "14px").
    pub font_sizes: Vec<String>,
    /// Allowed numeric font-weight strings.
    pub font_weights: Vec<String>,
    /// Allowed line-height strings. Loaded but not consulted by any
    /// current check.
    pub line_heights: Vec<String>,
}

/// User-supplied configuration overlay.
///
/// Each present top-level key fully replaces the corresponding default
/// field. The merge is deliberately shallow: field-by-field presence
/// checks, no recursion into the value.
#[derive(Debug, Default, Deserialize)]
struct UserConfig {
    #[serde(default)]
    colors: Option<ColorConfig>,
    #[serde(default)]
    spacing: Option<SpacingConfig>,
    #[serde(default)]
    typography: Option<TypographyConfig>,
}

fn string_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

impl Default for GuidelineConfig {
    fn default() -> Self {
        let mut palette = BTreeMap::new();
        palette.insert(
            "primary".to_string(),
            string_vec(&["#0066CC", "#004499", "#E6F2FF"]),
        );
        palette.insert(
            "secondary".to_string(),
            string_vec(&["#28A745", "#FD7E14", "#DC3545"]),
        );
        palette.insert(
            "neutral".to_string(),
            string_vec(&[
                "#212529", "#495057", "#6C757D", "#DEE2E6", "#F8F9FA", "#FFFFFF",
            ]),
        );

        let mut contrast_ratios = BTreeMap::new();
        contrast_ratios.insert("normal".to_string(), 4.5);
        contrast_ratios.insert("large".to_string(), 3.0);

        Self {
            colors: ColorConfig {
                contrast_ratios,
                palette,
            },
            spacing: SpacingConfig {
                scale: vec![4, 8, 12, 16, 24, 32, 48, 64],
                unit: "px".to_string(),
            },
            typography: TypographyConfig {
                font_sizes: string_vec(&[
                    "11px", "12px", "14px", "16px", "18px", "22px", "28px", "36px", "48px",
                ]),
                font_weights: string_vec(&["400", "600", "700"]),
                line_heights: string_vec(&[
                    "14px", "16px", "20px", "24px", "26px", "30px", "36px", "44px", "48px",
                ]),
            },
        }
    }
}

impl GuidelineConfig {
    /// Loads the guideline configuration.
    ///
    /// With no path, or a path that does not exist, returns the built-in
    /// defaults. An existing file is parsed as TOML and shallow-merged
    /// over the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    /// This is fatal at startup; there is no partial config.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            tracing::debug!("Config {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses a user configuration from a TOML string and merges it over
    /// the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let user: UserConfig = toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        Ok(Self::default().overlaid_with(user))
    }

    /// Shallow merge: any present top-level key replaces the whole field.
    fn overlaid_with(mut self, user: UserConfig) -> Self {
        if let Some(colors) = user.colors {
            self.colors = colors;
        }
        if let Some(spacing) = user.spacing {
            self.spacing = spacing;
        }
        if let Some(typography) = user.typography {
            self.typography = typography;
        }
        self
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading the config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in the config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}
