//! Nesting carton designs, forward and inverse.

use serde::{Deserialize, Serialize};

use super::{Dimensions, SheetSize};

/// Product and packing parameters for designing a carton around nested units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestingSpec {
    /// Product size (mm).
    pub product: Dimensions,
    /// Whether each unit is bubble wrapped.
    #[serde(default)]
    pub bubble_wrap: bool,
    /// Nesting slot thickness (mm).
    pub slot_thickness_mm: f64,
    /// Allowance at each end of a nested row (mm).
    pub allowance_mm: f64,
    /// Units along the carton length.
    pub qty_along_length: u32,
    /// Units along the carton width.
    pub qty_along_width: u32,
    /// Units stacked along the carton height.
    pub qty_along_height: u32,
    /// Layer pad thickness (mm).
    pub layer_pad_thickness_mm: f64,
    /// Number of layer pads.
    pub layer_pad_count: u32,
}

/// Carton designed around nested units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestingResult {
    /// Product size after bubble wrap.
    pub adjusted_product: Dimensions,
    /// Internal carton size.
    pub internal: Dimensions,
    /// External carton size.
    pub external: Dimensions,
    /// Insert running along the carton length.
    pub long_insert: SheetSize,
    /// Insert running along the carton width.
    pub short_insert: SheetSize,
    /// Units packed in one carton.
    pub units_per_carton: u32,
}

/// An existing carton and the product that has to be nested inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalNestingSpec {
    /// External carton size (mm).
    pub external: Dimensions,
    /// Layer pad thickness (mm).
    pub layer_pad_thickness_mm: f64,
    /// Number of layer pads.
    pub layer_pad_count: u32,
    /// Product size (mm).
    pub product: Dimensions,
    /// Whether the product is bubble wrapped.
    #[serde(default)]
    pub bubble_wrap: bool,
}

/// Nesting inserts that fit a given carton.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalNestingResult {
    /// Internal carton size.
    pub internal: Dimensions,
    /// Product size after bubble wrap.
    pub adjusted_product: Dimensions,
    /// Height taken by layer pads (mm).
    pub layer_pad_deduction_mm: f64,
    /// Board left on each side of the product along the length (mm).
    pub balance_length_mm: f64,
    /// Board left on each side of the product along the width (mm).
    pub balance_width_mm: f64,
    /// Insert running along the carton length.
    pub long_insert: SheetSize,
    /// Insert running along the carton width.
    pub short_insert: SheetSize,
}
