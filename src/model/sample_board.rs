//! Sample board orders.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A short run cut from pre-made sample boards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleBoardSpec {
    /// Board length (mm).
    pub board_length_mm: f64,
    /// Board width (mm).
    pub board_width_mm: f64,
    /// Price of one board.
    pub price_per_board: f64,
    /// Product blank length (mm).
    pub product_length_mm: f64,
    /// Product blank width (mm).
    pub product_width_mm: f64,
    /// Pieces ordered by the customer.
    pub order_quantity: u32,
    /// Extra boards spent on testing.
    #[serde(default)]
    pub test_board_quantity: u32,
    /// One-off job setup cost.
    #[serde(default)]
    pub job_setup_cost: f64,
    /// Margin on cost (%).
    #[serde(default)]
    pub margin_percent: f64,
}

/// Boards required and the resulting unit price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleBoardResult {
    /// Pieces along the board length.
    pub ups_length: u32,
    /// Pieces along the board width.
    pub ups_width: u32,
    /// Pieces per board.
    pub total_ups: u32,
    /// Boards for production.
    pub boards_needed: u32,
    /// Production plus test boards.
    pub total_boards: u32,
    /// Boards plus setup.
    pub total_cost: Decimal,
    /// Board material per piece, ignoring test boards and setup.
    pub material_cost_per_piece: Decimal,
    /// Total cost spread over the order, before margin.
    pub cost_per_piece: Decimal,
    /// Cost per piece with margin.
    pub final_unit_price: Decimal,
}
