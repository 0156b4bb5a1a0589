//! Price calculators for roll-fed boxes and sample boards.

mod box_price;
mod roll;
mod sample_board;

pub use box_price::{price_box, price_box_with};
pub use roll::{layout_roll, layout_roll_with};
pub use sample_board::{optimize_sample_board, optimize_sample_board_with};
