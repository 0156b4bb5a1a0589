//! Fitting units into a fixed carton and sizing its nesting and layer pads.

use tracing::debug;

use crate::config::{LID_ALLOWANCE_MM, WALL_ALLOWANCE_MM};
use crate::error::{QuoteError, Result};
use crate::model::{Dimensions, FitmentResult, FitmentSpec, SheetSize};
use crate::validation::check_fitment_spec;

fn units_along(internal_mm: f64, packed_mm: f64) -> u32 {
    (internal_mm / packed_mm).floor() as u32
}

/// Count the units a carton holds and size the nesting that separates them.
///
/// Units keep their given orientation and are counted independently along
/// each axis, so the fit is a grid approximation rather than an optimal
/// three-dimensional packing.
pub fn fit_and_size_nesting(spec: &FitmentSpec) -> Result<FitmentResult> {
    check_fitment_spec(spec)?;

    let packed = spec.product.with_bubble_wrap(spec.bubble_wrap);
    let internal = Dimensions::new(
        spec.carton_external.length - WALL_ALLOWANCE_MM,
        spec.carton_external.width - WALL_ALLOWANCE_MM,
        spec.carton_external.height - LID_ALLOWANCE_MM,
    );
    for (axis, internal_mm) in [
        ("length", internal.length),
        ("width", internal.width),
        ("height", internal.height),
    ] {
        if internal_mm <= 0.0 {
            return Err(QuoteError::CartonTooSmall { axis, internal_mm });
        }
    }

    let fit_length = units_along(internal.length, packed.length);
    let fit_width = units_along(internal.width, packed.width);
    let fit_height = units_along(internal.height, packed.height);
    let total_fit = fit_length
        .checked_mul(fit_width)
        .and_then(|units| units.checked_mul(fit_height))
        .ok_or_else(|| {
            QuoteError::count_overflow(
                "total_fit",
                format!("{} x {} x {}", fit_length, fit_width, fit_height),
            )
        })?;

    let thickness = spec.nesting_thickness_mm;
    let balance_length_mm = (internal.length - packed.length - 2.0 * thickness) / 2.0;
    let long_length = 2.0 * balance_length_mm + 2.0 * thickness + packed.length;

    let (nesting_width, nesting_height_per_layer_mm, layer_pad_quantity) = if fit_height > 0 {
        let layers = f64::from(fit_height);
        let each = (internal.height - (layers + 1.0) * thickness) / layers;
        let pads = fit_height.checked_add(1).ok_or_else(|| {
            QuoteError::count_overflow("layer_pad_quantity", format!("{} + 1", fit_height))
        })?;
        (each, each, pads)
    } else {
        // No full layer fits: a single layer as tall as the product.
        (packed.height, 0.0, 2)
    };

    debug!(
        fit_length,
        fit_width,
        fit_height,
        total_fit,
        layer_pad_quantity,
        "fitment"
    );

    Ok(FitmentResult {
        packed,
        internal,
        fit_length,
        fit_width,
        fit_height,
        total_fit,
        balance_length_mm,
        long_nesting: SheetSize::new(long_length, nesting_width),
        short_nesting: SheetSize::new(internal.width, nesting_width),
        nesting_height_per_layer_mm,
        layer_pad: SheetSize::new(internal.length, internal.width),
        layer_pad_quantity,
        nesting_thickness_mm: thickness,
        total_carton_weight_kg: f64::from(total_fit) * spec.product_weight_kg,
    })
}
