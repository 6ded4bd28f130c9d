//! Settings for turning resolved text into output runs.

use crate::error::ConfigError;
use crate::font::TextRunBuilder;
use crate::traits::FormUnits;
use serde::{Deserialize, Serialize};

fn default_x_offset() -> f32 {
    -0.25
}

fn default_y_offset() -> f32 {
    -0.75
}

/// Shift applied after unit conversion to line a run up with the target
/// renderer's baseline and origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaselineOffset {
    #[serde(default = "default_x_offset")]
    pub x: f32,
    #[serde(default = "default_y_offset")]
    pub y: f32,
}

impl Default for BaselineOffset {
    fn default() -> Self {
        Self {
            x: default_x_offset(),
            y: default_y_offset(),
        }
    }
}

impl BaselineOffset {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// No shift at all.
    pub fn none() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// Configuration for a text processing session.
///
/// Every field has a default, so `{}` is a valid configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    pub units: FormUnits,
    pub baseline: BaselineOffset,
}

impl ProcessorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON and on a zero, negative or non-finite `dpi`
    /// or grid density, any of which would turn every coordinate into
    /// `inf` or `NaN`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the unit grid can divide.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("dpi", self.units.dpi),
            ("gridXPerInch", self.units.grid_x_per_inch),
            ("gridYPerInch", self.units.grid_y_per_inch),
        ];
        for (field, value) in fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositiveUnit { field, value });
            }
        }
        Ok(())
    }

    pub fn with_units(mut self, units: FormUnits) -> Self {
        self.units = units;
        self
    }

    pub fn with_baseline(mut self, baseline: BaselineOffset) -> Self {
        self.baseline = baseline;
        self
    }

    /// A run builder using these units and offsets.
    pub fn run_builder(&self) -> TextRunBuilder<FormUnits> {
        TextRunBuilder::new(self.units).with_offset(self.baseline)
    }
}
