//! Inputs for roll-fed board products.

use serde::{Deserialize, Serialize};

use crate::config::{FLAP_GAP_MM, GLUE_FLAP_MM, PIZZA_FLAP_MM};

/// Product priced from a paper roll.
///
/// The kind selects how the blank is laid out on the roll:
///
/// | Kind | Paper length | Raw piece width |
/// |------|--------------|-----------------|
/// | Carton box | `(L + W) x 2 + 30` | `W + H + 4` |
/// | Layer pad | `(L + W) x 2 + 30` | `W + 4` |
/// | Pizza box | `L + 20` | `W + 20` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    CartonBox,
    PizzaBox,
    LayerPad,
}

impl ProductKind {
    /// Length of paper consumed by one blank (mm).
    pub fn paper_length_mm(&self, spec: &BoxSpec) -> f64 {
        match self {
            ProductKind::CartonBox | ProductKind::LayerPad => {
                (spec.length + spec.width) * 2.0 + GLUE_FLAP_MM
            }
            ProductKind::PizzaBox => spec.length + PIZZA_FLAP_MM,
        }
    }

    /// Width of one blank across the roll before trim (mm).
    pub fn raw_piece_width_mm(&self, spec: &BoxSpec) -> f64 {
        match self {
            ProductKind::CartonBox => spec.width + spec.height + FLAP_GAP_MM,
            ProductKind::LayerPad => spec.width + FLAP_GAP_MM,
            ProductKind::PizzaBox => spec.width + PIZZA_FLAP_MM,
        }
    }

    /// Whether the box height takes part in the layout.
    pub fn uses_height(&self) -> bool {
        matches!(self, ProductKind::CartonBox)
    }
}

impl std::fmt::Display for ProductKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductKind::CartonBox => write!(f, "carton box"),
            ProductKind::PizzaBox => write!(f, "pizza box"),
            ProductKind::LayerPad => write!(f, "layer pad"),
        }
    }
}

/// Dimensions and commercial terms of a box order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSpec {
    /// Length (mm).
    pub length: f64,
    /// Width (mm).
    pub width: f64,
    /// Height (mm). Ignored for pizza boxes and layer pads.
    #[serde(default)]
    pub height: f64,
    /// Board grammage.
    pub grammage: f64,
    /// Cost per ton of board.
    pub costing_rate: f64,
    /// Selling price per ton of board.
    pub selling_rate: f64,
    /// Pieces ordered.
    pub quantity: u32,
    /// Markup (or discount, when negative) on the selling price, in percent.
    #[serde(default)]
    pub adjustment_percent: f64,
}

impl BoxSpec {
    /// Create a spec with zero rates, a single piece and no adjustment.
    pub fn new(length: f64, width: f64, height: f64, grammage: f64) -> Self {
        Self {
            length,
            width,
            height,
            grammage,
            costing_rate: 0.0,
            selling_rate: 0.0,
            quantity: 1,
            adjustment_percent: 0.0,
        }
    }

    /// Set costing and selling rates.
    pub fn with_rates(mut self, costing_rate: f64, selling_rate: f64) -> Self {
        self.costing_rate = costing_rate;
        self.selling_rate = selling_rate;
        self
    }

    /// Set the order quantity.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Set the price adjustment in percent.
    pub fn with_adjustment(mut self, adjustment_percent: f64) -> Self {
        self.adjustment_percent = adjustment_percent;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carton_box_layout_inputs() {
        let spec = BoxSpec::new(500.0, 300.0, 200.0, 0.84);
        assert_eq!(ProductKind::CartonBox.paper_length_mm(&spec), 1630.0);
        assert_eq!(ProductKind::CartonBox.raw_piece_width_mm(&spec), 504.0);
    }

    #[test]
    fn test_layer_pad_ignores_height() {
        let spec = BoxSpec::new(500.0, 300.0, 200.0, 0.84);
        assert_eq!(ProductKind::LayerPad.paper_length_mm(&spec), 1630.0);
        assert_eq!(ProductKind::LayerPad.raw_piece_width_mm(&spec), 304.0);
    }

    #[test]
    fn test_pizza_box_adds_flaps() {
        let spec = BoxSpec::new(300.0, 300.0, 0.0, 0.84);
        assert_eq!(ProductKind::PizzaBox.paper_length_mm(&spec), 320.0);
        assert_eq!(ProductKind::PizzaBox.raw_piece_width_mm(&spec), 320.0);
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ProductKind::LayerPad).unwrap();
        assert_eq!(json, "\"layer_pad\"");
    }
}
