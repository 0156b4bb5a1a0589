//! Three-axis sizes shared by products and cartons.

use serde::{Deserialize, Serialize};

use crate::config::BUBBLE_WRAP_MM;

/// Length x width x height in millimetres.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Length (mm).
    pub length: f64,
    /// Width (mm).
    pub width: f64,
    /// Height (mm).
    pub height: f64,
}

impl Dimensions {
    /// Create new dimensions.
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    /// Size after bubble wrapping, which adds the same margin on every axis.
    pub fn with_bubble_wrap(self, bubble_wrap: bool) -> Self {
        if bubble_wrap {
            Self::new(
                self.length + BUBBLE_WRAP_MM,
                self.width + BUBBLE_WRAP_MM,
                self.height + BUBBLE_WRAP_MM,
            )
        } else {
            self
        }
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.2} x {:.2} x {:.2} mm",
            self.length, self.width, self.height
        )
    }
}

/// A flat rectangular board part: a nesting insert or a layer pad.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SheetSize {
    /// Length (mm).
    pub length: f64,
    /// Width (mm).
    pub width: f64,
}

impl SheetSize {
    /// Create a new sheet size.
    pub fn new(length: f64, width: f64) -> Self {
        Self { length, width }
    }
}

impl std::fmt::Display for SheetSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} x {:.2} mm", self.length, self.width)
    }
}
