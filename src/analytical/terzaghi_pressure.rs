use super::converged_sum;
use crate::base::{ConsolidationCoefficients, ParamConsolidation, ParamConvergence, TimeSpec};
use crate::StrError;
use plotpy::{linspace, Curve, Plot};
use russell_lab::math::PI;
use russell_lab::Matrix;

/// Solution of Terzaghi's consolidation problem: excess pore-pressure isochrones
///
/// A saturated soil layer of depth H is loaded at the surface and drains
/// through one face only (single drainage), hence the drainage path
/// equals H. The drained face sits at z = H, where the excess pressure
/// has dissipated from the start. The normalized excess pore pressure at depth z and
/// non-dimensional time T is the Fourier series
///
/// ```text
///            ∞   2
/// u(z, T) =  Σ  ─── (−1)^m cos(M z / H) exp(−M² T)
///           m=0  M
///
/// with  M = π (2m + 1) / 2  and  T = cv t / H²
/// ```
///
/// The converged values lie within `[0, 1]` (partial sums may transiently
/// leave that range mid-series).
///
/// # Reference
///
/// 1. Verruijt A (2016) Theory and Problems of Poroelasticity,
///    Delft University of Technology, 266p
pub struct TerzaghiPressure {
    /// The physical parameters of the layer
    pub params: ParamConsolidation,

    /// Number of depth samples (and of time samples in the dimensional mode)
    pub ndata: usize,

    /// The authoritative time discretization
    pub time: TimeSpec,

    /// Convergence control of the series
    pub convergence: ParamConvergence,
}

/// Holds the output of the pressure-profile evaluation
pub struct PressureSolution {
    /// Depth samples spanning `[0, H]`; size = ndata
    pub depth: Vec<f64>,

    /// Dimensional times (s); always derived, whichever mode was authoritative
    pub dimensional_time: Vec<f64>,

    /// Non-dimensional times; always derived, whichever mode was authoritative
    pub nondimensional_time: Vec<f64>,

    /// Normalized excess pore pressures; (ndata, ntime) matrix
    pub uu: Matrix,
}

impl TerzaghiPressure {
    /// Allocates a new instance with default convergence control
    pub fn new(params: ParamConsolidation, ndata: usize, time: TimeSpec) -> Result<Self, StrError> {
        params.validate()?;
        if ndata < 1 {
            return Err("ndata must be at least 1");
        }
        Ok(TerzaghiPressure {
            params,
            ndata,
            time,
            convergence: ParamConvergence::default(),
        })
    }

    /// Evaluates the pressure isochrones for all (depth, time) pairs
    ///
    /// Each cell of the output table is summed independently until the series
    /// converges or the iteration cap is reached (graceful degradation).
    pub fn solve(&self) -> Result<PressureSolution, StrError> {
        self.params.validate()?;
        if self.ndata < 1 {
            return Err("ndata must be at least 1");
        }
        let coefficients = ConsolidationCoefficients::new(&self.params)?;

        // single drainage: the drainage path equals the layer depth
        let drainage_path = self.params.layer_depth;
        let depth = linspace(0.0, self.params.layer_depth, self.ndata);
        let (dimensional_time, nondimensional_time) =
            self.time.time_arrays(self.ndata, coefficients.cv, drainage_path)?;

        let ntime = nondimensional_time.len();
        let mut uu = Matrix::new(self.ndata, ntime);
        for kk in 0..ntime {
            let tt = nondimensional_time[kk];
            for jj in 0..self.ndata {
                let zz = depth[jj];
                let value = converged_sum(
                    |m| {
                        let mm = PI * (2.0 * (m as f64) + 1.0) / 2.0;
                        let sign = if m % 2 == 0 { 1.0 } else { -1.0 };
                        (2.0 / mm) * sign * f64::cos(mm * zz / drainage_path) * f64::exp(-mm * mm * tt)
                    },
                    self.convergence.tolerance,
                    self.convergence.max_iterations,
                );
                uu.set(jj, kk, value);
            }
        }
        Ok(PressureSolution {
            depth,
            dimensional_time,
            nondimensional_time,
            uu,
        })
    }
}

impl PressureSolution {
    /// Draws the isochrones (pressure versus depth, one curve per time)
    ///
    /// This is a presentational step only; it does not modify the solution.
    pub fn add_isochrones_to_plot(&self, plot: &mut Plot) {
        let (ndata, ntime) = self.uu.dims();
        for kk in 0..ntime {
            let pressure: Vec<_> = (0..ndata).map(|jj| self.uu.get(jj, kk)).collect();
            let mut curve = Curve::new();
            curve
                .set_label(&format!("T = {}", self.nondimensional_time[kk]))
                .set_line_color("black")
                .set_marker_style("o")
                .set_marker_size(3.0)
                .set_marker_void(true);
            curve.draw(&pressure, &self.depth);
            plot.add(&curve);
        }
        plot.grid_labels_legend("Normalized pore pressure, $p/p_0$ (-)", "Depth, $z$ (m)");
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::TerzaghiPressure;
    use crate::base::{ParamConsolidation, TimeSpec, DEFAULT_TEST_DIR};
    use plotpy::Plot;
    use russell_lab::{approx_eq, vec_approx_eq, Vector};

    const SAVE_FIGURE: bool = false;

    fn sample_params() -> ParamConsolidation {
        ParamConsolidation {
            layer_depth: 1.0,
            intrinsic_permeability: 1e-12,
            porosity: 0.3,
            viscosity: 1e-3,
            young: 1e6,
            poisson: 0.3,
            liquid_density: 1000.0,
        }
    }

    #[test]
    fn new_captures_wrong_input() {
        let mut params = sample_params();
        params.poisson = 0.5;
        let time = TimeSpec::Nondimensional(vec![0.1]);
        assert_eq!(
            TerzaghiPressure::new(params, 5, time).err(),
            Some("poisson must be within (0, 0.5)")
        );
        let time = TimeSpec::Nondimensional(vec![0.1]);
        assert_eq!(
            TerzaghiPressure::new(sample_params(), 0, time).err(),
            Some("ndata must be at least 1")
        );
    }

    #[test]
    fn isochrone_values_are_correct() {
        let time = TimeSpec::Nondimensional(vec![0.1, 0.2]);
        let ana = TerzaghiPressure::new(sample_params(), 5, time).unwrap();
        let solution = ana.solve().unwrap();
        assert_eq!(solution.depth.len(), 5);
        assert_eq!(solution.uu.dims(), (5, 2));
        vec_approx_eq(&Vector::from(&solution.depth), &[0.0, 0.25, 0.5, 0.75, 1.0], 1e-15);

        // values computed with the series summed to the default cap
        approx_eq(solution.uu.get(0, 0), 0.9493053626844703, 1e-14);
        approx_eq(solution.uu.get(2, 0), 0.7356513152441901, 1e-14);
        approx_eq(solution.uu.get(1, 1), 0.7162272655361528, 1e-14);
        approx_eq(solution.uu.get(2, 1), 0.5531758918500856, 1e-14);
        approx_eq(solution.uu.get(3, 1), 0.3020839334147242, 1e-14);

        // drainage boundary: the pressure has fully dissipated
        approx_eq(solution.uu.get(4, 0), 0.0, 1e-15);
        approx_eq(solution.uu.get(4, 1), 0.0, 1e-15);

        // both time representations are returned
        vec_approx_eq(&Vector::from(&solution.nondimensional_time), &[0.1, 0.2], 1e-15);
        approx_eq(solution.dimensional_time[0], 74.28571428571429, 1e-9);

        if SAVE_FIGURE {
            let mut plot = Plot::new();
            solution.add_isochrones_to_plot(&mut plot);
            plot.set_range(0.0, 1.0, 0.0, 1.0)
                .save(&format!("{}/terzaghi_pressure_isochrones.svg", DEFAULT_TEST_DIR))
                .unwrap();
        }
    }

    #[test]
    fn undrained_start_approaches_one() {
        // a very small time with a generous iteration budget recovers the
        // initial (undrained) condition at the impervious face
        let time = TimeSpec::Nondimensional(vec![1e-6]);
        let mut ana = TerzaghiPressure::new(sample_params(), 3, time).unwrap();
        ana.convergence.max_iterations = 5000;
        let solution = ana.solve().unwrap();
        approx_eq(solution.uu.get(0, 0), 1.0, 1e-9);
    }

    #[test]
    fn zero_iteration_budget_degrades_gracefully() {
        let time = TimeSpec::Nondimensional(vec![0.1, 0.5]);
        let mut ana = TerzaghiPressure::new(sample_params(), 3, time).unwrap();
        ana.convergence.max_iterations = 0;
        let solution = ana.solve().unwrap();
        let (nrow, ncol) = solution.uu.dims();
        for i in 0..nrow {
            for j in 0..ncol {
                assert_eq!(solution.uu.get(i, j), 0.0);
            }
        }
    }

    #[test]
    fn dimensional_mode_works() {
        let time = TimeSpec::Dimensional { end_time: 371.42857142857144 };
        let ana = TerzaghiPressure::new(sample_params(), 3, time).unwrap();
        let solution = ana.solve().unwrap();
        assert_eq!(solution.dimensional_time.len(), 3);
        vec_approx_eq(&Vector::from(&solution.nondimensional_time), &[0.0, 0.25, 0.5], 1e-10);
        approx_eq(solution.uu.get(0, 1), 0.6854457668903522, 1e-10);
        approx_eq(solution.uu.get(1, 1), 0.48701271920755124, 1e-10);
        approx_eq(solution.uu.get(0, 2), 0.37077742979952394, 1e-10);
    }
}
