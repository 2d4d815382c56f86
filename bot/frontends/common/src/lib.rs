pub mod driver;
pub mod grid;

pub use crate::driver::{Lockstep, DriverOptions, MAX_WAIT, SETTLE_FRAMES};
pub use crate::grid::{compose, GridOptions};
