use crate::StrError;
use plotpy::linspace;

/// Defines which time discretization is authoritative for an evaluation
///
/// Exactly one representation drives the evaluation; the other one is
/// always derived from it through cv and the drainage path, so both are
/// available in the results.
#[derive(Clone, Debug)]
pub enum TimeSpec {
    /// Dimensional times: equally spaced samples of `[0, end_time]` in seconds;
    /// the number of samples equals the number of depth samples
    Dimensional {
        /// Final time (s)
        end_time: f64,
    },

    /// Caller-supplied non-dimensional times `T = cv t / H²`
    Nondimensional(Vec<f64>),
}

impl TimeSpec {
    /// Generates both time representations
    ///
    /// # Input
    ///
    /// * `ndata` -- number of samples of the dimensional discretization
    /// * `cv` -- coefficient of consolidation (m²/s)
    /// * `drainage_path` -- length of the drainage path (m)
    ///
    /// # Output
    ///
    /// Returns `(dimensional_time, nondimensional_time)`, index-aligned.
    pub fn time_arrays(&self, ndata: usize, cv: f64, drainage_path: f64) -> Result<(Vec<f64>, Vec<f64>), StrError> {
        match self {
            TimeSpec::Dimensional { end_time } => {
                if *end_time <= 0.0 {
                    return Err("end_time must be positive");
                }
                let dimensional = linspace(0.0, *end_time, ndata);
                let nondimensional = dimensional
                    .iter()
                    .map(|t| cv * t / (drainage_path * drainage_path))
                    .collect();
                Ok((dimensional, nondimensional))
            }
            TimeSpec::Nondimensional(target_times) => {
                if target_times.is_empty() {
                    return Err("the array of non-dimensional times must not be empty");
                }
                if target_times.iter().any(|t| *t < 0.0) {
                    return Err("non-dimensional times must not be negative");
                }
                let dimensional = target_times
                    .iter()
                    .map(|t| t * drainage_path * drainage_path / cv)
                    .collect();
                Ok((dimensional, target_times.clone()))
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::TimeSpec;
    use russell_lab::{vec_approx_eq, Vector};

    #[test]
    fn dimensional_arrays_work() {
        let spec = TimeSpec::Dimensional { end_time: 100.0 };
        let (dim, non) = spec.time_arrays(5, 2e-3, 1.0).unwrap();
        vec_approx_eq(&Vector::from(&dim), &[0.0, 25.0, 50.0, 75.0, 100.0], 1e-13);
        vec_approx_eq(&Vector::from(&non), &[0.0, 0.05, 0.1, 0.15, 0.2], 1e-15);
    }

    #[test]
    fn nondimensional_arrays_work() {
        let spec = TimeSpec::Nondimensional(vec![0.1, 0.5]);
        let (dim, non) = spec.time_arrays(11, 1.346153846153846e-3, 1.0).unwrap();
        vec_approx_eq(&Vector::from(&dim), &[74.28571428571429, 371.42857142857144], 1e-10);
        vec_approx_eq(&Vector::from(&non), &[0.1, 0.5], 1e-15);
    }

    #[test]
    fn wrong_specifications_are_captured() {
        let spec = TimeSpec::Dimensional { end_time: 0.0 };
        assert_eq!(spec.time_arrays(5, 1.0, 1.0).err(), Some("end_time must be positive"));
        let spec = TimeSpec::Nondimensional(Vec::new());
        assert_eq!(
            spec.time_arrays(5, 1.0, 1.0).err(),
            Some("the array of non-dimensional times must not be empty")
        );
        let spec = TimeSpec::Nondimensional(vec![0.1, -0.5]);
        assert_eq!(
            spec.time_arrays(5, 1.0, 1.0).err(),
            Some("non-dimensional times must not be negative")
        );
    }
}
