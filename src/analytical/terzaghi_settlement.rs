use super::converged_sum;
use crate::base::{ConsolidationCoefficients, ParamConvergence};
use crate::StrError;
use russell_lab::math::PI;

/// Solution of Terzaghi's consolidation problem: settlement history
///
/// The degree of consolidation at non-dimensional time T is
///
/// ```text
///                ∞   2
/// U(T) = 1  −    Σ  ─── exp(−M² T),   M = π (2m + 1) / 2
///               m=0  M²
/// ```
///
/// and the settlement follows by scaling with the layer depth, the traction
/// load, and the compressibility:
///
/// ```text
/// s(T) = U(T) · H · q · m_v
/// ```
///
/// Only the oedometric modulus (from Young's modulus and Poisson's
/// coefficient) enters this solution; the hydraulic parameters are not
/// needed because T is already non-dimensional.
pub struct TerzaghiSettlement {
    /// Depth of the soil layer H (m)
    pub layer_depth: f64,

    /// Traction load q applied at the surface (Pa); must be nonzero because
    /// it doubles as the normalization factor of the comparisons
    pub traction_load: f64,

    /// Young's modulus (Pa)
    pub young: f64,

    /// Poisson's coefficient
    pub poisson: f64,

    /// Convergence control of the series
    pub convergence: ParamConvergence,
}

impl TerzaghiSettlement {
    /// Allocates a new instance with default convergence control
    pub fn new(layer_depth: f64, traction_load: f64, young: f64, poisson: f64) -> Result<Self, StrError> {
        if layer_depth <= 0.0 {
            return Err("layer_depth must be positive");
        }
        if traction_load == 0.0 {
            return Err("traction_load must be nonzero");
        }
        if young <= 0.0 {
            return Err("young must be positive");
        }
        Ok(TerzaghiSettlement {
            layer_depth,
            traction_load,
            young,
            poisson,
            convergence: ParamConvergence::default(),
        })
    }

    /// Evaluates the settlement for each non-dimensional time
    ///
    /// The output is index-aligned with `nondimensional_time`. Each series is
    /// summed independently until convergence or the iteration cap (graceful
    /// degradation: the partial sum is the accepted value).
    pub fn solve(&self, nondimensional_time: &[f64]) -> Result<Vec<f64>, StrError> {
        if nondimensional_time.iter().any(|t| *t < 0.0) {
            return Err("non-dimensional times must not be negative");
        }
        let (_, compressibility) = ConsolidationCoefficients::oedometric_and_compressibility(self.young, self.poisson)?;
        let results = nondimensional_time
            .iter()
            .map(|tt| {
                let sum = converged_sum(
                    |m| {
                        let mm = PI * (2.0 * (m as f64) + 1.0) / 2.0;
                        (2.0 / (mm * mm)) * f64::exp(-mm * mm * tt)
                    },
                    self.convergence.tolerance,
                    self.convergence.max_iterations,
                );
                (1.0 - sum) * self.layer_depth * self.traction_load * compressibility
            })
            .collect();
        Ok(results)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
