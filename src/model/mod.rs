//! Value records for calculator inputs and results.

mod box_spec;
mod dimensions;
mod fitment;
mod nesting;
mod price;
mod roll;
mod sample_board;

pub use box_spec::{BoxSpec, ProductKind};
pub use dimensions::{Dimensions, SheetSize};
pub use fitment::{FitmentResult, FitmentSpec};
pub use nesting::{ExternalNestingResult, ExternalNestingSpec, NestingResult, NestingSpec};
pub use price::{PriceFactors, PriceResult};
pub use roll::RollLayout;
pub use sample_board::{SampleBoardResult, SampleBoardSpec};
