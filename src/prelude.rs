//! Makes available common structures needed to run a verification
//!
//! You may write `use consolid::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::analytical::{PressureSolution, TerzaghiPressure, TerzaghiSettlement};
pub use crate::base::{
    ConsolidationCoefficients, ParamConsolidation, ParamConvergence, TimeSpec, DEFAULT_MAX_ITERATIONS, DEFAULT_OUT_DIR,
    DEFAULT_TEST_DIR, DEFAULT_TOLERANCE, GRAVITATIONAL_ACCELERATION,
};
pub use crate::runner::{run_executable, BenchmarkInfo, Model};
pub use crate::util::{
    compare_pressure_results, plot_pressure_comparison, process_sim_directories, read_sim_tables, ComparisonPoint,
    ComparisonResults, SimTable,
};
