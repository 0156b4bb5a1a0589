//! Sample board utilization and pricing.

use tracing::debug;

use crate::config::PlantConfig;
use crate::error::{QuoteError, Result};
use crate::model::{SampleBoardResult, SampleBoardSpec};
use crate::money::to_money;
use crate::validation::check_sample_board_spec;

/// Price a sample board job with the default plant configuration.
pub fn optimize_sample_board(spec: &SampleBoardSpec) -> Result<SampleBoardResult> {
    optimize_sample_board_with(&PlantConfig::default(), spec)
}

/// Work out how many boards a job needs and what each piece costs.
///
/// Blanks are laid on the board in a grid without rotation. Production
/// boards are rounded up so the order is always covered, then test boards
/// and the setup cost are spread over the ordered quantity.
pub fn optimize_sample_board_with(
    config: &PlantConfig,
    spec: &SampleBoardSpec,
) -> Result<SampleBoardResult> {
    check_sample_board_spec(spec)?;

    let ups_length = (spec.board_length_mm / spec.product_length_mm).floor() as u32;
    let ups_width = (spec.board_width_mm / spec.product_width_mm).floor() as u32;
    let total_ups = ups_length.checked_mul(ups_width).ok_or_else(|| {
        QuoteError::count_overflow("total_ups", format!("{} x {}", ups_length, ups_width))
    })?;
    if total_ups == 0 {
        return Err(QuoteError::ProductExceedsBoardCapacity {
            product_length: spec.product_length_mm,
            product_width: spec.product_width_mm,
            board_length: spec.board_length_mm,
            board_width: spec.board_width_mm,
        });
    }

    let boards_needed = spec.order_quantity.div_ceil(total_ups);
    let total_boards = boards_needed
        .checked_add(spec.test_board_quantity)
        .ok_or_else(|| {
            QuoteError::count_overflow(
                "total_boards",
                format!("{} + {}", boards_needed, spec.test_board_quantity),
            )
        })?;

    let total_cost = f64::from(total_boards) * spec.price_per_board + spec.job_setup_cost;
    let cost_per_piece = total_cost / f64::from(spec.order_quantity);
    let final_unit_price = cost_per_piece * (1.0 + spec.margin_percent / 100.0);
    let material_cost_per_piece = spec.price_per_board / f64::from(total_ups);

    debug!(
        total_ups,
        boards_needed,
        total_boards,
        total_cost,
        final_unit_price,
        "sample board"
    );

    let places = config.money_places;
    Ok(SampleBoardResult {
        ups_length,
        ups_width,
        total_ups,
        boards_needed,
        total_boards,
        total_cost: to_money(total_cost, places, "total_cost")?,
        material_cost_per_piece: to_money(
            material_cost_per_piece,
            places,
            "material_cost_per_piece",
        )?,
        cost_per_piece: to_money(cost_per_piece, places, "cost_per_piece")?,
        final_unit_price: to_money(final_unit_price, places, "final_unit_price")?,
    })
}
