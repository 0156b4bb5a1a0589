//! Box price results and their audit trace.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ProductKind, RollLayout};

/// The factors multiplied to price one piece.
///
/// Prices are computed from these values and the traces are formatted from
/// the same values, so the two cannot disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceFactors {
    /// Paper length per piece (m).
    pub paper_length_m: f64,
    /// Effective roll width per piece (m).
    pub effective_width_m: f64,
    /// Board grammage.
    pub grammage: f64,
    /// Cost per ton.
    pub costing_rate: f64,
    /// Selling price per ton.
    pub selling_rate: f64,
    /// Selling price adjustment (%).
    pub adjustment_percent: f64,
}

impl PriceFactors {
    fn board_weight(&self) -> f64 {
        self.paper_length_m * self.effective_width_m * self.grammage
    }

    /// Multiplier applied to the base selling price.
    pub fn adjustment_factor(&self) -> f64 {
        1.0 + self.adjustment_percent / 100.0
    }

    /// Unrounded cost of one piece.
    pub fn cost_per_piece(&self) -> f64 {
        self.board_weight() * self.costing_rate
    }

    /// Unrounded selling price of one piece, adjustment included.
    pub fn selling_per_piece(&self) -> f64 {
        self.board_weight() * self.selling_rate * self.adjustment_factor()
    }

    /// Cost formula, e.g. `1.63 x 0.5125 x 0.84 x 2.7`.
    pub fn cost_trace(&self) -> String {
        format!(
            "{} x {} x {} x {}",
            self.paper_length_m, self.effective_width_m, self.grammage, self.costing_rate
        )
    }

    /// Selling formula, e.g. `1.63 x 0.5125 x 0.84 x 3.4 x (1 + 0.00)`.
    pub fn selling_trace(&self) -> String {
        let fraction = self.adjustment_percent / 100.0;
        let (sign, magnitude) = if fraction < 0.0 {
            ('-', -fraction)
        } else {
            ('+', fraction)
        };
        format!(
            "{} x {} x {} x {} x (1 {} {:.2})",
            self.paper_length_m,
            self.effective_width_m,
            self.grammage,
            self.selling_rate,
            sign,
            magnitude
        )
    }
}

/// Priced box order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceResult {
    /// Product that was priced.
    pub kind: ProductKind,
    /// Cost per piece.
    pub cost_price: Decimal,
    /// Selling price per piece.
    pub selling_price: Decimal,
    /// Selling price for the whole order.
    pub total_price: Decimal,
    /// Pieces ordered.
    pub quantity: u32,
    /// Paper length per piece (mm).
    pub paper_length_mm: f64,
    /// Roll layout used for the width.
    pub layout: RollLayout,
    /// Factors the prices were computed from.
    pub factors: PriceFactors,
}

impl PriceResult {
    /// Human-readable selling price formula.
    pub fn formula_trace(&self) -> String {
        self.factors.selling_trace()
    }

    /// Gross margin per piece.
    pub fn margin_per_piece(&self) -> Decimal {
        self.selling_price - self.cost_price
    }
}
