//! Implements the base structures for the consolidation analyses

mod constants;
mod enums;
mod parameters;

pub use crate::base::constants::*;
pub use crate::base::enums::*;
pub use crate::base::parameters::*;
