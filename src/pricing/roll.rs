//! Roll width optimization.

use tracing::debug;

use crate::config::{float_cmp, PlantConfig};
use crate::error::{QuoteError, Result};
use crate::model::RollLayout;
use crate::validation::require_positive;

/// Lay out blanks of `raw_piece_width_mm` across the widest standard roll.
pub fn layout_roll(raw_piece_width_mm: f64, grammage: f64) -> Result<RollLayout> {
    layout_roll_with(&PlantConfig::default(), raw_piece_width_mm, grammage)
}

/// Lay out blanks across a roll using the given plant configuration.
///
/// As many blanks as fit the widest roll run side by side. Trim waste is added
/// to their combined width, and the total is rounded up to an orderable roll
/// width. Each blank is then charged an equal share of that roll.
///
/// Fails with [`QuoteError::PieceExceedsRollWidth`] when a blank is not narrower
/// than the widest roll.
pub fn layout_roll_with(
    config: &PlantConfig,
    raw_piece_width_mm: f64,
    grammage: f64,
) -> Result<RollLayout> {
    require_positive("raw_piece_width_mm", raw_piece_width_mm)?;
    require_positive("grammage", grammage)?;

    let max_width = config.max_roll_width_mm;
    if raw_piece_width_mm >= max_width {
        return Err(QuoteError::PieceExceedsRollWidth {
            width_mm: raw_piece_width_mm,
            max_width_mm: max_width,
        });
    }

    let trim_allowance_mm = config.trim_allowance(grammage);
    let pieces_per_roll = (max_width / raw_piece_width_mm).floor() as u32;
    let used_width_mm = raw_piece_width_mm * f64::from(pieces_per_roll);
    let trimmed_width_mm = used_width_mm + trim_allowance_mm;

    let step = config.roll_width_step_mm;
    let steps = trimmed_width_mm / step;
    // Float noise just above a whole step must not order the next roll up.
    let steps = if float_cmp::approx_eq(steps, steps.round()) {
        steps.round()
    } else {
        steps.ceil()
    };
    let roll_width_mm = steps * step;
    let effective_width_per_piece_mm = roll_width_mm / f64::from(pieces_per_roll);

    debug!(
        raw_piece_width_mm,
        pieces_per_roll,
        trim_allowance_mm,
        roll_width_mm,
        effective_width_per_piece_mm,
        "roll layout"
    );

    Ok(RollLayout {
        raw_piece_width_mm,
        pieces_per_roll,
        used_width_mm,
        trim_allowance_mm,
        roll_width_mm,
        effective_width_per_piece_mm,
    })
}
