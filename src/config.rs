use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a [`CardConfig`] cannot be turned into a card generator.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown font size '{key}', try one of: {valid}")]
    UnknownFontSize { key: String, valid: String },
    #[error("grid must have at least one cell (got {x}x{y})")]
    EmptyGrid { x: usize, y: usize },
    #[error("grid of {x}x{y} cells is too large")]
    GridTooLarge { x: usize, y: usize },
    #[error("invalid {field}: {value}")]
    InvalidLength { field: &'static str, value: f64 },
}

/// Font size applied to every cell label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Footnote,
    #[default]
    Large,
    Normal,
    Huge,
}

impl FontSize {
    pub const ALL: [FontSize; 4] = [
        FontSize::Footnote,
        FontSize::Large,
        FontSize::Normal,
        FontSize::Huge,
    ];

    /// Key accepted on the command line and in config files.
    pub fn key(self) -> &'static str {
        match self {
            FontSize::Footnote => "footnote",
            FontSize::Large => "large",
            FontSize::Normal => "normal",
            FontSize::Huge => "huge",
        }
    }

    /// LaTeX directive prepended to the label text. `Normal` emits nothing.
    pub fn directive(self) -> &'static str {
        match self {
            FontSize::Footnote => "\\footnotesize ",
            FontSize::Large => "\\large ",
            FontSize::Normal => "",
            FontSize::Huge => "\\huge ",
        }
    }

    fn valid_keys() -> String {
        Self::ALL
            .iter()
            .map(|f| f.key())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FontSize {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| ConfigError::UnknownFontSize {
                key: s.to_string(),
                valid: Self::valid_keys(),
            })
    }
}

/// Layout and styling options for a card.
///
/// The font size is kept as its textual key so that a bad value coming from
/// a config file or a library caller is reported when the generator is
/// built, together with the list of valid keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Text used for cells left over when there are fewer labels than cells.
    pub filler: String,
    /// Number of columns.
    pub x: usize,
    /// Number of rows.
    pub y: usize,
    /// Edge length of one cell, in centimetres.
    pub cell_size: f64,
    /// Top page margin, in millimetres.
    pub vspace: f64,
    /// Amount subtracted from the cell width for the label text box, in centimetres.
    pub padding: f64,
    pub title: Option<String>,
    /// TikZ picture options such as `thick` or `dashed`.
    pub style: String,
    pub font_size: String,
    pub bold: bool,
    pub rounded: bool,
    pub centering: bool,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            filler: String::new(),
            x: 3,
            y: 3,
            cell_size: 4.0,
            vspace: 20.0,
            padding: 0.0,
            title: None,
            style: "thick".to_string(),
            font_size: FontSize::Large.key().to_string(),
            bold: true,
            rounded: false,
            centering: true,
        }
    }
}

impl CardConfig {
    /// Load a (possibly partial) config from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// Number of cells in the grid, rejecting products that overflow `usize`.
    pub fn cell_count(&self) -> Result<usize, ConfigError> {
        self.x
            .checked_mul(self.y)
            .ok_or(ConfigError::GridTooLarge {
                x: self.x,
                y: self.y,
            })
    }

    /// Check every field and resolve the font size key.
    pub fn validate(&self) -> Result<FontSize, ConfigError> {
        let font = self.font_size.parse::<FontSize>()?;
        if self.x == 0 || self.y == 0 {
            return Err(ConfigError::EmptyGrid {
                x: self.x,
                y: self.y,
            });
        }
        self.cell_count()?;
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(ConfigError::InvalidLength {
                field: "cell size",
                value: self.cell_size,
            });
        }
        if !self.vspace.is_finite() || self.vspace < 0.0 {
            return Err(ConfigError::InvalidLength {
                field: "vertical space",
                value: self.vspace,
            });
        }
        if !self.padding.is_finite() || self.padding < 0.0 || self.padding >= self.cell_size {
            return Err(ConfigError::InvalidLength {
                field: "padding",
                value: self.padding,
            });
        }
        Ok(font)
    }
}
