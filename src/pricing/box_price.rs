//! Roll-fed box pricing: carton boxes, pizza boxes and layer pads.

use tracing::debug;

use super::roll::layout_roll_with;
use crate::config::PlantConfig;
use crate::error::Result;
use crate::model::{BoxSpec, PriceFactors, PriceResult, ProductKind};
use crate::money::to_money;
use crate::validation::check_box_spec;

/// Price a box order with the default plant configuration.
pub fn price_box(spec: &BoxSpec, kind: ProductKind) -> Result<PriceResult> {
    price_box_with(&PlantConfig::default(), spec, kind)
}

/// Price a box order.
///
/// The blank's paper length and its effective share of the roll width give
/// the board area per piece. Area times grammage times the per-ton rate gives
/// the cost and selling price per piece. The order total is the unrounded
/// selling price times the quantity, rounded once at the end.
pub fn price_box_with(
    config: &PlantConfig,
    spec: &BoxSpec,
    kind: ProductKind,
) -> Result<PriceResult> {
    check_box_spec(spec, kind)?;

    let paper_length_mm = kind.paper_length_mm(spec);
    let raw_piece_width_mm = kind.raw_piece_width_mm(spec);
    let layout = layout_roll_with(config, raw_piece_width_mm, spec.grammage)?;

    let factors = PriceFactors {
        paper_length_m: paper_length_mm / 1000.0,
        effective_width_m: layout.effective_width_per_piece_mm / 1000.0,
        grammage: spec.grammage,
        costing_rate: spec.costing_rate,
        selling_rate: spec.selling_rate,
        adjustment_percent: spec.adjustment_percent,
    };

    let cost = factors.cost_per_piece();
    let selling = factors.selling_per_piece();
    let total = selling * f64::from(spec.quantity);

    debug!(
        %kind,
        paper_length_mm,
        pieces_per_roll = layout.pieces_per_roll,
        cost,
        selling,
        total,
        "priced box"
    );

    let places = config.money_places;
    Ok(PriceResult {
        kind,
        cost_price: to_money(cost, places, "cost_price")?,
        selling_price: to_money(selling, places, "selling_price")?,
        total_price: to_money(total, places, "total_price")?,
        quantity: spec.quantity,
        paper_length_mm,
        layout,
        factors,
    })
}
