//! Nesting carton design, from product to carton and from carton to inserts.

use tracing::debug;

use crate::config::{LID_ALLOWANCE_MM, NESTING_SLOT_MM, WALL_ALLOWANCE_MM};
use crate::error::{QuoteError, Result};
use crate::model::{
    Dimensions, ExternalNestingResult, ExternalNestingSpec, NestingResult, NestingSpec, SheetSize,
};
use crate::validation::{check_external_nesting_spec, check_nesting_spec};

/// Internal length of a row of `qty` nested units.
///
/// Units are separated by slots of `thickness`, with one extra slot and an
/// allowance at each end of the row.
fn nested_row_mm(product_mm: f64, thickness: f64, allowance: f64, qty: u32) -> f64 {
    2.0 * allowance + thickness + (product_mm + thickness) * f64::from(qty)
}

/// Design a carton around a grid of nested units.
pub fn size_nesting_carton(spec: &NestingSpec) -> Result<NestingResult> {
    check_nesting_spec(spec)?;

    let adjusted = spec.product.with_bubble_wrap(spec.bubble_wrap);
    let thickness = spec.slot_thickness_mm;
    let allowance = spec.allowance_mm;

    let internal = Dimensions::new(
        nested_row_mm(adjusted.length, thickness, allowance, spec.qty_along_length),
        nested_row_mm(adjusted.width, thickness, allowance, spec.qty_along_width),
        adjusted.height,
    );
    let external = Dimensions::new(
        internal.length + WALL_ALLOWANCE_MM,
        internal.width + WALL_ALLOWANCE_MM,
        internal.height
            + LID_ALLOWANCE_MM
            + spec.layer_pad_thickness_mm * f64::from(spec.layer_pad_count),
    );
    let units_per_carton = spec
        .qty_along_length
        .checked_mul(spec.qty_along_width)
        .and_then(|units| units.checked_mul(spec.qty_along_height))
        .ok_or_else(|| {
            QuoteError::count_overflow(
                "units_per_carton",
                format!(
                    "{} x {} x {}",
                    spec.qty_along_length, spec.qty_along_width, spec.qty_along_height
                ),
            )
        })?;

    debug!(%internal, %external, units_per_carton, "nesting carton");

    Ok(NestingResult {
        adjusted_product: adjusted,
        internal,
        external,
        long_insert: SheetSize::new(internal.length, internal.height),
        short_insert: SheetSize::new(internal.width, internal.height),
        units_per_carton,
    })
}

/// Length of an insert centred on the product with a slot either side.
///
/// Summed part by part so the breakdown matches what is printed on the
/// design sheet; the total always comes back to the internal length.
fn insert_length_mm(product_mm: f64, balance_mm: f64) -> f64 {
    (balance_mm + NESTING_SLOT_MM + product_mm + NESTING_SLOT_MM + balance_mm).round_ties_even()
}

fn internal_axis(axis: &'static str, internal_mm: f64) -> Result<f64> {
    if internal_mm > 0.0 {
        Ok(internal_mm)
    } else {
        Err(QuoteError::CartonTooSmall { axis, internal_mm })
    }
}

/// Derive the nesting inserts that fit inside an existing carton.
pub fn size_nesting_from_external(spec: &ExternalNestingSpec) -> Result<ExternalNestingResult> {
    check_external_nesting_spec(spec)?;

    let layer_pad_deduction_mm = spec.layer_pad_thickness_mm * f64::from(spec.layer_pad_count);
    let internal = Dimensions::new(
        internal_axis("length", spec.external.length - WALL_ALLOWANCE_MM)?,
        internal_axis("width", spec.external.width - WALL_ALLOWANCE_MM)?,
        internal_axis(
            "height",
            spec.external.height - LID_ALLOWANCE_MM - layer_pad_deduction_mm,
        )?,
    );
    let adjusted = spec.product.with_bubble_wrap(spec.bubble_wrap);

    let balance_length_mm = (internal.length - adjusted.length - 2.0 * NESTING_SLOT_MM) / 2.0;
    let balance_width_mm = (internal.width - adjusted.width - 2.0 * NESTING_SLOT_MM) / 2.0;

    let long_insert = SheetSize::new(
        insert_length_mm(adjusted.length, balance_length_mm),
        internal.height,
    );
    let short_insert = SheetSize::new(
        insert_length_mm(adjusted.width, balance_width_mm),
        internal.height,
    );

    debug!(
        %internal,
        balance_length_mm,
        balance_width_mm,
        "nesting from external carton"
    );

    Ok(ExternalNestingResult {
        internal,
        adjusted_product: adjusted,
        layer_pad_deduction_mm,
        balance_length_mm,
        balance_width_mm,
        long_insert,
        short_insert,
    })
}
