//! Fixed allowances and per-plant pricing configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{QuoteError, Result};

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Widest paper roll the corrugator can run (mm).
pub const MAX_ROLL_WIDTH_MM: f64 = 2200.0;

/// Rolls are only orderable in multiples of this width (mm).
pub const ROLL_WIDTH_STEP_MM: f64 = 50.0;

/// Trim allowance for thin board (mm).
pub const TRIM_ALLOWANCE_THIN_MM: f64 = 25.0;

/// Trim allowance for thick board (mm).
pub const TRIM_ALLOWANCE_THICK_MM: f64 = 28.0;

/// Grammage above which a board counts as thick.
pub const THICK_GRAMMAGE_THRESHOLD: f64 = 0.77;

/// Glue flap added to the carton perimeter (mm).
pub const GLUE_FLAP_MM: f64 = 30.0;

/// Gap between flaps added to the raw piece width (mm).
pub const FLAP_GAP_MM: f64 = 4.0;

/// Flap extension added to pizza box length and width (mm).
pub const PIZZA_FLAP_MM: f64 = 20.0;

/// Added to each product dimension when bubble wrapped (mm).
pub const BUBBLE_WRAP_MM: f64 = 10.0;

/// Difference between external and internal carton length/width (mm).
pub const WALL_ALLOWANCE_MM: f64 = 10.0;

/// Difference between external and internal carton height, top plus bottom board (mm).
pub const LID_ALLOWANCE_MM: f64 = 20.0;

/// Slot clearance on each side of the product in an inverse nesting design (mm).
pub const NESTING_SLOT_MM: f64 = 3.0;

/// Default number of decimal places for money.
pub const DEFAULT_MONEY_PLACES: u32 = 2;

/// Per-plant pricing policy.
///
/// Everything here is a deployment decision rather than a property of the
/// product: roll widths the mill supplies, trim waste and how precisely money
/// is quoted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlantConfig {
    /// Widest roll available (mm).
    pub max_roll_width_mm: f64,
    /// Roll width ordering increment (mm).
    pub roll_width_step_mm: f64,
    /// Trim allowance at or below the grammage threshold (mm).
    pub trim_allowance_thin_mm: f64,
    /// Trim allowance above the grammage threshold (mm).
    pub trim_allowance_thick_mm: f64,
    /// Grammage separating thin and thick board.
    pub thick_grammage_threshold: f64,
    /// Decimal places for quoted money.
    pub money_places: u32,
}

impl Default for PlantConfig {
    fn default() -> Self {
        Self {
            max_roll_width_mm: MAX_ROLL_WIDTH_MM,
            roll_width_step_mm: ROLL_WIDTH_STEP_MM,
            trim_allowance_thin_mm: TRIM_ALLOWANCE_THIN_MM,
            trim_allowance_thick_mm: TRIM_ALLOWANCE_THICK_MM,
            thick_grammage_threshold: THICK_GRAMMAGE_THRESHOLD,
            money_places: DEFAULT_MONEY_PLACES,
        }
    }
}

impl PlantConfig {
    /// Configuration quoting money to four decimal places.
    pub fn high_precision() -> Self {
        Self {
            money_places: 4,
            ..Default::default()
        }
    }

    /// Load a configuration from a JSON file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(QuoteError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config: PlantConfig = serde_json::from_str(&content)?;
        config.check()?;
        Ok(config)
    }

    /// Reject configurations no calculation could succeed with.
    pub fn check(&self) -> Result<()> {
        for (field, value) in [
            ("max_roll_width_mm", self.max_roll_width_mm),
            ("roll_width_step_mm", self.roll_width_step_mm),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(QuoteError::invalid(field, "a positive number", value));
            }
        }
        for (field, value) in [
            ("trim_allowance_thin_mm", self.trim_allowance_thin_mm),
            ("trim_allowance_thick_mm", self.trim_allowance_thick_mm),
            ("thick_grammage_threshold", self.thick_grammage_threshold),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(QuoteError::invalid(field, "a non-negative number", value));
            }
        }
        if self.money_places > 10 {
            return Err(QuoteError::invalid(
                "money_places",
                "at most 10",
                self.money_places,
            ));
        }
        Ok(())
    }

    /// Trim allowance for a board of the given grammage.
    pub fn trim_allowance(&self, grammage: f64) -> f64 {
        if grammage > self.thick_grammage_threshold {
            self.trim_allowance_thick_mm
        } else {
            self.trim_allowance_thin_mm
        }
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }
}
