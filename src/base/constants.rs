/// Defines the gravitational acceleration in m/s²
pub const GRAVITATIONAL_ACCELERATION: f64 = 9.81;

/// Defines the default tolerance for the convergence of the Fourier series
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Defines the default maximum number of terms summed by the Fourier series
pub const DEFAULT_MAX_ITERATIONS: usize = 30;

/// Defines the directory where the comparison result files are saved
pub const DEFAULT_OUT_DIR: &str = "/tmp/consolid/results";

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/consolid/test";
