//! UnitConverter trait for mapping source coordinates to form units.
//!
//! The text pipeline never does geometry itself; it hands every x, y and
//! width through one of these converters.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Converts source-space lengths into output (form) units.
///
/// Implementations must be pure: the same input always yields the same
/// output and no state is touched.
pub trait UnitConverter: Debug {
    /// Convert an x coordinate or a horizontal length.
    fn to_form_x(&self, x: f32) -> f32;

    /// Convert a y coordinate or a vertical length.
    fn to_form_y(&self, y: f32) -> f32;
}

impl<U: UnitConverter + ?Sized> UnitConverter for &U {
    fn to_form_x(&self, x: f32) -> f32 {
        (**self).to_form_x(x)
    }

    fn to_form_y(&self, y: f32) -> f32 {
        (**self).to_form_y(y)
    }
}

fn default_dpi() -> f32 {
    96.0
}

fn default_grid() -> f32 {
    4.0
}

/// Grid based form units: a page is measured in cells of
/// `dpi / grid_per_inch` pixels, rounded to three decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormUnits {
    #[serde(default = "default_dpi")]
    pub dpi: f32,
    #[serde(default = "default_grid")]
    pub grid_x_per_inch: f32,
    #[serde(default = "default_grid")]
    pub grid_y_per_inch: f32,
}

impl Default for FormUnits {
    fn default() -> Self {
        Self {
            dpi: default_dpi(),
            grid_x_per_inch: default_grid(),
            grid_y_per_inch: default_grid(),
        }
    }
}

impl FormUnits {
    pub fn new(dpi: f32, grid_x_per_inch: f32, grid_y_per_inch: f32) -> Self {
        Self {
            dpi,
            grid_x_per_inch,
            grid_y_per_inch,
        }
    }

    pub fn pixels_per_grid_x(&self) -> f32 {
        self.dpi / self.grid_x_per_inch
    }

    pub fn pixels_per_grid_y(&self) -> f32 {
        self.dpi / self.grid_y_per_inch
    }
}

fn round3(value: f32) -> f32 {
    (value * 1000.0).round() / 1000.0
}

impl UnitConverter for FormUnits {
    fn to_form_x(&self, x: f32) -> f32 {
        round3(x / self.pixels_per_grid_x())
    }

    fn to_form_y(&self, y: f32) -> f32 {
        round3(y / self.pixels_per_grid_y())
    }
}
