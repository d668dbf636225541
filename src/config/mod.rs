// Workspace configuration: recognized options, TOML loading, validation.

use std::path::Path;

use serde::Deserialize;

use crate::workspace::{Pane, Row};

// Built-in minimum pane sizes per row, in percent of the row's axis.
const MIN_COLUMNS_PCT: f32 = 10.0;
const MIN_HALVES_PCT: f32 = 5.0;
const MIN_SECTIONS_PCT: f32 = 5.0;

// Built-in collapse thresholds, in percent. The implicit third column has
// no divider of its own and only shrinks as a side effect of its siblings
// growing, so its threshold is tighter.
const COLLAPSE_THRESHOLD_PCT: f32 = 5.0;
const IMPLICIT_COLUMN_THRESHOLD_PCT: f32 = 3.0;

const DEFAULT_COLLAPSED_STRIP_PX: f32 = 24.0;

/// Workspace layout configuration.
///
/// Every option is optional in the TOML form; omitted options fall back
/// to the engine's built-in defaults. `min_pane_pct` and
/// `collapse_threshold_pct` are uniform overrides; when unset, the
/// per-row / per-pane built-ins apply.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkspaceConfig {
    /// Default height of the top section, percent of workspace height.
    pub default_top_height: f32,
    /// Default width of the first top-row column, percent of row width.
    pub default_column_a: f32,
    /// Default width of the second top-row column, percent of row width.
    pub default_column_b: f32,
    /// Default width of the bottom-row left pane, percent of row width.
    pub default_left_width: f32,
    /// Uniform minimum pane size override, percent.
    pub min_pane_pct: Option<f32>,
    /// Uniform collapse threshold override, percent.
    pub collapse_threshold_pct: Option<f32>,
    /// Width/height of the strip a collapsed pane is rendered as, in
    /// pixels. The strip sits outside the percentage budget.
    pub collapsed_strip_px: f32,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            default_top_height: 35.0,
            default_column_a: 25.0,
            default_column_b: 50.0,
            default_left_width: 60.0,
            min_pane_pct: None,
            collapse_threshold_pct: None,
            collapsed_strip_px: DEFAULT_COLLAPSED_STRIP_PX,
        }
    }
}

/// Errors that can occur during config loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("validation error: {0}")]
    Validation(String),
}

// ── Serde intermediate struct ───────────────────────────────────────────

#[derive(Deserialize)]
#[serde(default)]
struct RawWorkspaceConfig {
    default_top_height: f32,
    default_column_a: f32,
    default_column_b: f32,
    default_left_width: f32,
    min_pane_pct: Option<f32>,
    collapse_threshold_pct: Option<f32>,
    collapsed_strip_px: f32,
}

impl Default for RawWorkspaceConfig {
    fn default() -> Self {
        let d = WorkspaceConfig::default();
        Self {
            default_top_height: d.default_top_height,
            default_column_a: d.default_column_a,
            default_column_b: d.default_column_b,
            default_left_width: d.default_left_width,
            min_pane_pct: None,
            collapse_threshold_pct: None,
            collapsed_strip_px: d.collapsed_strip_px,
        }
    }
}

// ── Config implementation ───────────────────────────────────────────────

impl WorkspaceConfig {
    /// Preset for the campaign settings workspace.
    pub fn campaign_settings() -> Self {
        Self {
            default_top_height: 35.0,
            default_column_a: 40.0,
            default_column_b: 28.0,
            default_left_width: 30.0,
            ..Self::default()
        }
    }

    /// Preset for the campaign interviews workspace.
    pub fn campaign_interviews() -> Self {
        Self {
            default_top_height: 35.0,
            default_column_a: 25.0,
            default_column_b: 50.0,
            default_left_width: 60.0,
            ..Self::default()
        }
    }

    /// Load config from a TOML file path. Returns defaults if the file
    /// does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No workspace config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(ConfigError::Io(e)),
        }
    }

    /// Parse a TOML string into a WorkspaceConfig.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let raw: RawWorkspaceConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;

        let config = Self {
            default_top_height: raw.default_top_height,
            default_column_a: raw.default_column_a,
            default_column_b: raw.default_column_b,
            default_left_width: raw.default_left_width,
            min_pane_pct: raw.min_pane_pct,
            collapse_threshold_pct: raw.collapse_threshold_pct,
            collapsed_strip_px: raw.collapsed_strip_px,
        };

        config.validate()?;
        Ok(config)
    }

    /// Minimum pane size for a row, percent.
    pub fn min_for_row(&self, row: Row) -> f32 {
        if let Some(min) = self.min_pane_pct {
            return min;
        }
        match row {
            Row::Columns => MIN_COLUMNS_PCT,
            Row::Halves => MIN_HALVES_PCT,
            Row::Sections => MIN_SECTIONS_PCT,
        }
    }

    /// Collapse threshold for a pane, percent.
    pub fn threshold_for(&self, pane: Pane) -> f32 {
        if let Some(threshold) = self.collapse_threshold_pct {
            return threshold;
        }
        match pane {
            Pane::ColumnC => IMPLICIT_COLUMN_THRESHOLD_PCT,
            _ => COLLAPSE_THRESHOLD_PCT,
        }
    }

    /// Validate the config, returning an error if any values are out of
    /// range or the defaults cannot satisfy the minimums.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(min) = self.min_pane_pct {
            if !min.is_finite() || min <= 0.0 {
                return Err(ConfigError::Validation(
                    "min_pane_pct must be > 0".to_string(),
                ));
            }
            if min * 3.0 > 100.0 {
                return Err(ConfigError::Validation(format!(
                    "min_pane_pct {min} leaves no room for three columns"
                )));
            }
        }

        if let Some(threshold) = self.collapse_threshold_pct {
            if !threshold.is_finite() || threshold <= 0.0 || threshold >= 50.0 {
                return Err(ConfigError::Validation(
                    "collapse_threshold_pct must be in (0, 50)".to_string(),
                ));
            }
        }

        if !self.collapsed_strip_px.is_finite() || self.collapsed_strip_px < 0.0 {
            return Err(ConfigError::Validation(
                "collapsed_strip_px must be >= 0".to_string(),
            ));
        }

        for (name, value) in [
            ("default_top_height", self.default_top_height),
            ("default_column_a", self.default_column_a),
            ("default_column_b", self.default_column_b),
            ("default_left_width", self.default_left_width),
        ] {
            if !value.is_finite() || value <= 0.0 || value >= 100.0 {
                return Err(ConfigError::Validation(format!(
                    "{name} must be a percentage in (0, 100), got {value}"
                )));
            }
        }

        let min_sections = self.min_for_row(Row::Sections);
        if self.default_top_height < min_sections
            || self.default_top_height > 100.0 - min_sections
        {
            return Err(ConfigError::Validation(format!(
                "default_top_height {} violates the section minimum {}",
                self.default_top_height, min_sections
            )));
        }

        let min_halves = self.min_for_row(Row::Halves);
        if self.default_left_width < min_halves || self.default_left_width > 100.0 - min_halves {
            return Err(ConfigError::Validation(format!(
                "default_left_width {} violates the pane minimum {}",
                self.default_left_width, min_halves
            )));
        }

        let min_columns = self.min_for_row(Row::Columns);
        if self.default_column_a < min_columns || self.default_column_b < min_columns {
            return Err(ConfigError::Validation(format!(
                "column defaults must be at least the column minimum {min_columns}"
            )));
        }
        if self.default_column_a + self.default_column_b > 100.0 - min_columns {
            return Err(ConfigError::Validation(format!(
                "column defaults {} + {} leave the third column below its minimum {}",
                self.default_column_a, self.default_column_b, min_columns
            )));
        }

        Ok(())
    }
}
