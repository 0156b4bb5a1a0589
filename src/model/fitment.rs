//! Fitting units into a fixed carton.

use serde::{Deserialize, Serialize};

use super::{Dimensions, SheetSize};

/// A product to fit into a carton of known external size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitmentSpec {
    /// Product size (mm).
    pub product: Dimensions,
    /// Whether each unit is bubble wrapped.
    #[serde(default)]
    pub bubble_wrap: bool,
    /// External carton size (mm).
    pub carton_external: Dimensions,
    /// Nesting board thickness (mm).
    pub nesting_thickness_mm: f64,
    /// Minimum balance wanted on each side of the product (mm).
    #[serde(default)]
    pub allowance_mm: f64,
    /// Units the customer wants per carton.
    pub quantity_per_box: u32,
    /// Weight of one unit (kg).
    pub product_weight_kg: f64,
}

/// Units that fit, with the nesting and layer pads to hold them.
///
/// Fit is counted per axis without rotating the product, so it can be lower
/// than what a rotated arrangement would hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitmentResult {
    /// Product size after bubble wrap.
    pub packed: Dimensions,
    /// Internal carton size.
    pub internal: Dimensions,
    /// Units along the length.
    pub fit_length: u32,
    /// Units along the width.
    pub fit_width: u32,
    /// Layers along the height.
    pub fit_height: u32,
    /// Units per carton.
    pub total_fit: u32,
    /// Board beside the product on each end of the long nesting (mm).
    pub balance_length_mm: f64,
    /// Long nesting insert.
    pub long_nesting: SheetSize,
    /// Short nesting insert.
    pub short_nesting: SheetSize,
    /// Height of each nesting layer, zero when no full layer fits (mm).
    pub nesting_height_per_layer_mm: f64,
    /// Layer pad sheet.
    pub layer_pad: SheetSize,
    /// Layer pads per carton.
    pub layer_pad_quantity: u32,
    /// Nesting board thickness (mm).
    pub nesting_thickness_mm: f64,
    /// Weight of a full carton's contents (kg).
    pub total_carton_weight_kg: f64,
}

impl FitmentResult {
    /// Breakdown of the long nesting length.
    pub fn long_trace(&self) -> String {
        format!(
            "{:.1} + {} + {} + {} + {:.1} = {:.1}",
            self.balance_length_mm,
            self.nesting_thickness_mm,
            self.packed.length,
            self.nesting_thickness_mm,
            self.balance_length_mm,
            self.long_nesting.length
        )
    }

    /// How the short nesting width was chosen.
    pub fn short_trace(&self) -> String {
        format!(
            "Same width as long nesting: {:.1}",
            self.short_nesting.width
        )
    }
}
