//! Cloud parameters and their JSON file form.

use crate::geometry::{self, CloudArc};
use crate::shapes::SizeStyle;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors reading or validating cloud parameters.
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid {name}: {value} (must be a positive, finite number)")]
    InvalidDimension { name: &'static str, value: f64 },
    #[error("Unknown size: {0:?} (expected s, m, l or xl)")]
    UnknownSize(String),
}

/// Result type for parameter operations.
pub type ParamsResult<T> = Result<T, ParamsError>;

/// Everything that determines a cloud's outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudParams {
    pub width: f64,
    pub height: f64,
    /// Seed string keying all jitter.
    #[serde(default)]
    pub seed: String,
    #[serde(default)]
    pub size: SizeStyle,
    /// Render the double-stroke inky variant.
    #[serde(default)]
    pub inky: bool,
}

impl CloudParams {
    pub fn new(width: f64, height: f64, seed: impl Into<String>, size: SizeStyle) -> Self {
        Self {
            width,
            height,
            seed: seed.into(),
            size,
            inky: false,
        }
    }

    /// Parse from a JSON string.
    pub fn from_json(json: &str) -> ParamsResult<Self> {
        serde_json::from_str(json).map_err(|e| ParamsError::Serialization(e.to_string()))
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> ParamsResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ParamsError::Serialization(e.to_string()))
    }

    /// Read parameters from a JSON file.
    pub fn load(path: &Path) -> ParamsResult<Self> {
        let json = fs::read_to_string(path)
            .map_err(|e| ParamsError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_json(&json).map_err(|e| match e {
            ParamsError::Serialization(msg) => {
                ParamsError::Serialization(format!("Failed to parse {}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Write parameters to a JSON file.
    pub fn save(&self, path: &Path) -> ParamsResult<()> {
        fs::write(path, self.to_json()?)
            .map_err(|e| ParamsError::Io(format!("Failed to write {}: {}", path.display(), e)))
    }

    /// Reject sizes the generator would only turn into an empty outline.
    pub fn validate(&self) -> ParamsResult<()> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ParamsError::InvalidDimension { name, value });
            }
        }
        Ok(())
    }

    pub fn arcs(&self) -> Vec<CloudArc> {
        geometry::cloud_arcs(self.width, self.height, &self.seed, self.size)
    }

    pub fn outline(&self) -> Vec<Point> {
        geometry::cloud_outline(self.width, self.height, &self.seed, self.size)
    }

    /// Plain or inky SVG path, depending on `inky`.
    pub fn svg_path(&self) -> String {
        if self.inky {
            geometry::inky_cloud_svg_path(self.width, self.height, &self.seed, self.size)
        } else {
            geometry::cloud_svg_path(self.width, self.height, &self.seed, self.size)
        }
    }
}
