/// Sums a series until the last term becomes negligible or the iteration cap is reached
///
/// The summation is a pure fold over `m = 0..max_iterations`; it stops early
/// when the magnitude of the last term (i.e., the change in the running sum)
/// falls below `tolerance`. Hitting the cap is not an error: the partial sum
/// at termination is the accepted value. With `max_iterations = 0` the result
/// is the empty (zeroth-order) partial sum, 0.0.
pub(crate) fn converged_sum<F>(term: F, tolerance: f64, max_iterations: usize) -> f64
where
    F: Fn(usize) -> f64,
{
    let mut sum = 0.0;
    for m in 0..max_iterations {
        let t = term(m);
        sum += t;
        if f64::abs(t) < tolerance {
            break;
        }
    }
    sum
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::converged_sum;
    use russell_lab::approx_eq;

    #[test]
    fn converged_sum_works() {
        // geometric series: 1/2 + 1/4 + ... -> 1
        let sum = converged_sum(|m| f64::powi(0.5, 1 + m as i32), 1e-12, 100);
        approx_eq(sum, 1.0, 1e-11);
    }

    #[test]
    fn converged_sum_stops_at_the_cap() {
        // harmonic-like terms never fall below the tolerance within the cap
        let sum = converged_sum(|m| 1.0 / (1.0 + m as f64), 1e-10, 3);
        approx_eq(sum, 1.0 + 0.5 + 1.0 / 3.0, 1e-15);
    }

    #[test]
    fn converged_sum_handles_zero_budget() {
        assert_eq!(converged_sum(|_| 1.0, 1e-10, 0), 0.0);
    }
}
