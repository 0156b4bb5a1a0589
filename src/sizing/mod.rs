//! Carton, nesting insert and layer pad sizing.

mod fitment;
mod nesting;

pub use fitment::fit_and_size_nesting;
pub use nesting::{size_nesting_carton, size_nesting_from_external};
