//! Consolid - Verification tools for Terzaghi's one-dimensional consolidation problem
//!
//! This crate evaluates the closed-form (Fourier series) solutions of Terzaghi's
//! consolidation theory and compares them against the tabular output of an external
//! geomechanical simulator. The main components are:
//!
//! * [analytical] -- the pressure-profile and settlement evaluators
//! * [base] -- physical parameters, derived coefficients, and the time discretization
//! * [util] -- simulation-table ingestion and the comparator/reporter
//! * [runner] -- the external simulation runner and multi-stage model driver

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod analytical;
pub mod base;
pub mod prelude;
pub mod runner;
pub mod util;
