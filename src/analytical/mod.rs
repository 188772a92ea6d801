//! Implements the closed-form solutions of Terzaghi's one-dimensional consolidation problem

mod series;
mod terzaghi_pressure;
mod terzaghi_settlement;

pub(crate) use series::*;
pub use terzaghi_pressure::*;
pub use terzaghi_settlement::*;
