//! carton-quote - Pricing and sizing calculators for corrugated packaging.
//!
//! Every calculator is a pure function from an input record to a result
//! record:
//!
//! - [`layout_roll`]: blanks per paper roll and the roll width to order
//! - [`price_box`]: carton box, pizza box and layer pad prices
//! - [`size_nesting_carton`]: carton size around nested units
//! - [`size_nesting_from_external`]: nesting inserts for an existing carton
//! - [`optimize_sample_board`]: sample board count and unit price
//! - [`fit_and_size_nesting`]: units per carton with nesting and layer pads
//!
//! # Example
//!
//! ```
//! use carton_quote::{price_box, BoxSpec, ProductKind};
//!
//! let spec = BoxSpec::new(500.0, 300.0, 200.0, 0.84)
//!     .with_rates(2.7, 3.4)
//!     .with_quantity(100);
//! let quote = price_box(&spec, ProductKind::CartonBox).unwrap();
//! assert_eq!(quote.layout.pieces_per_roll, 4);
//! println!("{} = {}", quote.formula_trace(), quote.selling_price);
//! ```

pub mod config;
pub mod error;
pub mod job;
pub mod model;
pub mod money;
pub mod pricing;
pub mod sizing;
pub mod validation;

// Re-exports for convenience
pub use config::PlantConfig;
pub use error::{ErrorCode, QuoteError, Result};
pub use job::{
    parse_job, parse_job_file, run_job, run_quote, JobOutcome, QuoteRequest, QuoteResponse,
};
pub use model::{
    BoxSpec, Dimensions, ExternalNestingResult, ExternalNestingSpec, FitmentResult, FitmentSpec,
    NestingResult, NestingSpec, PriceFactors, PriceResult, ProductKind, RollLayout,
    SampleBoardResult, SampleBoardSpec, SheetSize,
};
pub use pricing::{
    layout_roll, layout_roll_with, optimize_sample_board, optimize_sample_board_with, price_box,
    price_box_with,
};
pub use sizing::{fit_and_size_nesting, size_nesting_carton, size_nesting_from_external};
pub use validation::{check_request, response_warnings, validate_request, ValidationResult};
