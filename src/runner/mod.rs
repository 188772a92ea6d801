//! Implements the interface to the external simulator executable
//!
//! The simulator runs in "stages": the first invocation writes a CPS control
//! file; patching a few flagged lines of the highest-numbered CPS file and
//! invoking the executable again advances the run to the next stage. The
//! analytical evaluators never see any of this; they only consume the tables
//! the simulator leaves behind.

mod executable;
mod model;

pub use executable::*;
pub use model::*;
