//! Roll layout produced by the roll optimizer.

use serde::{Deserialize, Serialize};

/// How many blanks run side by side across a paper roll, and the roll that
/// has to be ordered for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollLayout {
    /// Width of one blank before trim (mm).
    pub raw_piece_width_mm: f64,
    /// Blanks across the roll (UPS). Always at least one.
    pub pieces_per_roll: u32,
    /// Width taken by the blanks (mm).
    pub used_width_mm: f64,
    /// Trim waste added to the used width (mm).
    pub trim_allowance_mm: f64,
    /// Width of the roll to order, a multiple of the roll step (mm).
    pub roll_width_mm: f64,
    /// Roll width charged to each blank (mm).
    pub effective_width_per_piece_mm: f64,
}

impl RollLayout {
    /// Roll width left over after blanks and trim (mm).
    pub fn waste_mm(&self) -> f64 {
        self.roll_width_mm - self.used_width_mm - self.trim_allowance_mm
    }
}
