//! Shared configuration types.
//!
//! These are kept small and serializable so a run can be described in JSON
//! (or any other serde format) by the caller.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{InvalidInput, MatrixError};

/// Pixels per figure unit (inch).
pub const DPI: f64 = 100.0;

/// Largest accepted figure side, in pixels.
pub const MAX_FIGURE_PX: f64 = 32_768.0;

/// Statistic used to populate the upper-triangular cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrelationMethod {
    /// Product-moment correlation of the raw samples.
    #[default]
    Pearson,
    /// Pearson correlation of the average ranks.
    Spearman,
}

impl CorrelationMethod {
    pub fn name(self) -> &'static str {
        match self {
            CorrelationMethod::Pearson => "pearson",
            CorrelationMethod::Spearman => "spearman",
        }
    }
}

impl fmt::Display for CorrelationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CorrelationMethod {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pearson" => Ok(CorrelationMethod::Pearson),
            "spearman" => Ok(CorrelationMethod::Spearman),
            _ => Err(InvalidInput::UnknownMethod(s.to_string()).into()),
        }
    }
}

/// Figure size in inches; rendered at [`DPI`] pixels per inch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureSize {
    pub width: f64,
    pub height: f64,
}

impl FigureSize {
    /// Build a validated size. Both sides must be finite and positive, and
    /// no larger than [`MAX_FIGURE_PX`] once rendered at [`DPI`].
    pub fn new(width: f64, height: f64) -> Result<Self, MatrixError> {
        let size = Self { width, height };
        size.validate()?;
        Ok(size)
    }

    pub fn validate(&self) -> Result<(), MatrixError> {
        let ok = |v: f64| v.is_finite() && v > 0.0 && (v * DPI).round() <= MAX_FIGURE_PX;
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(InvalidInput::InvalidFigureSize {
                width: self.width,
                height: self.height,
            }
            .into())
        }
    }

    /// Pixel dimensions of the whole figure (at least 1×1).
    pub fn pixels(&self) -> (u32, u32) {
        let px = |v: f64| (v * DPI).round().max(1.0) as u32;
        (px(self.width), px(self.height))
    }
}

impl Default for FigureSize {
    fn default() -> Self {
        Self {
            width: 15.0,
            height: 15.0,
        }
    }
}

impl TryFrom<(f64, f64)> for FigureSize {
    type Error = MatrixError;

    fn try_from((width, height): (f64, f64)) -> Result<Self, Self::Error> {
        FigureSize::new(width, height)
    }
}

/// Everything a render call can be configured with.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixConfig {
    pub method: CorrelationMethod,
    pub figure_size: FigureSize,
}

impl MatrixConfig {
    /// Parse a method name and figure size, validating both.
    pub fn new(method: &str, figure_size: (f64, f64)) -> Result<Self, MatrixError> {
        Ok(Self {
            method: method.parse()?,
            figure_size: figure_size.try_into()?,
        })
    }

    pub fn with_method(mut self, method: CorrelationMethod) -> Self {
        self.method = method;
        self
    }

    pub fn validate(&self) -> Result<(), MatrixError> {
        self.figure_size.validate()
    }
}
