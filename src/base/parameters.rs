use super::{DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE, GRAVITATIONAL_ACCELERATION};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the physical parameters of the soil layer
///
/// The layer is fully saturated and drains through one face only
/// (single drainage); thus the drainage path equals the layer depth.
///
/// ```text
///        q (traction load)
///   ↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓
///   ●●●●●●●●●●●●●●●●●●●●●●  ← impervious face (z = 0)
///   |                    |
///   |     soil layer     |  H: layer depth
///   |                    |
///   ~~~~~~~~~~~~~~~~~~~~~~  ← drained face (z = H)
/// ```
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ParamConsolidation {
    /// Depth of the soil layer H (m)
    pub layer_depth: f64,

    /// Intrinsic permeability of the porous medium (m²)
    pub intrinsic_permeability: f64,

    /// Porosity of the porous medium (part of the input contract; the
    /// coefficient derivation does not use it)
    pub porosity: f64,

    /// Dynamic viscosity of the pore liquid (Pa·s)
    pub viscosity: f64,

    /// Young's modulus (Pa)
    pub young: f64,

    /// Poisson's coefficient; must be within (0, 0.5)
    pub poisson: f64,

    /// Density of the pore liquid (kg/m³)
    pub liquid_density: f64,
}

impl ParamConsolidation {
    /// Validates the parameters
    pub fn validate(&self) -> Result<(), StrError> {
        if self.layer_depth <= 0.0 {
            return Err("layer_depth must be positive");
        }
        if self.intrinsic_permeability <= 0.0 {
            return Err("intrinsic_permeability must be positive");
        }
        if self.porosity <= 0.0 {
            return Err("porosity must be positive");
        }
        if self.viscosity <= 0.0 {
            return Err("viscosity must be positive");
        }
        if self.young <= 0.0 {
            return Err("young must be positive");
        }
        if self.poisson <= 0.0 || self.poisson >= 0.5 {
            return Err("poisson must be within (0, 0.5)");
        }
        if self.liquid_density <= 0.0 {
            return Err("liquid_density must be positive");
        }
        Ok(())
    }

    /// Reads a JSON file containing the parameters
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "file not found")?;
        let reader = BufReader::new(file);
        let params = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
        Ok(params)
    }

    /// Writes a JSON file with the parameters
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

/// Holds the convergence control of the Fourier series
#[derive(Clone, Copy, Debug)]
pub struct ParamConvergence {
    /// Stops the summation when the magnitude of the last term falls below this value
    pub tolerance: f64,

    /// Maximum number of terms summed; the partial sum at the cap is the
    /// accepted value (hitting the cap is not an error)
    pub max_iterations: usize,
}

impl Default for ParamConvergence {
    fn default() -> Self {
        ParamConvergence {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Holds the coefficients derived from the physical parameters
///
/// The coefficients are pure functions of [ParamConsolidation] and are
/// recomputed on every call; they have no independent lifecycle.
#[derive(Clone, Copy, Debug)]
pub struct ConsolidationCoefficients {
    /// Hydraulic permeability k (m/s)
    pub permeability: f64,

    /// Oedometric (constrained) modulus E_oed (Pa)
    pub oedometric: f64,

    /// Compressibility m_v = 1/E_oed (m²/N)
    pub compressibility: f64,

    /// Coefficient of consolidation cv (m²/s)
    pub cv: f64,
}

impl ConsolidationCoefficients {
    /// Derives the coefficients from the physical parameters
    ///
    /// ```text
    /// k     = k_int · ρ_liq · g / μ
    /// E_oed = E (1 − ν) / ((1 + ν)(1 − 2ν))
    /// m_v   = 1 / E_oed
    /// cv    = k / (m_v · ρ_liq · g)
    /// ```
    ///
    /// Returns a domain error when the oedometric denominator vanishes
    /// (ν = 0.5 or ν = −1) instead of propagating an infinite float.
    pub fn new(params: &ParamConsolidation) -> Result<Self, StrError> {
        let denominator = (1.0 + params.poisson) * (1.0 - 2.0 * params.poisson);
        if denominator == 0.0 {
            return Err("cannot derive the oedometric modulus because poisson makes the denominator vanish");
        }
        let permeability = params.intrinsic_permeability * params.liquid_density * GRAVITATIONAL_ACCELERATION
            / params.viscosity;
        let oedometric = params.young * (1.0 - params.poisson) / denominator;
        let compressibility = 1.0 / oedometric;
        let cv = permeability / (compressibility * params.liquid_density * GRAVITATIONAL_ACCELERATION);
        Ok(ConsolidationCoefficients {
            permeability,
            oedometric,
            compressibility,
            cv,
        })
    }

    /// Derives the oedometric modulus and compressibility only
    ///
    /// The settlement solution needs m_v but neither the permeability nor cv;
    /// this avoids requiring the hydraulic parameters in that case.
    pub fn oedometric_and_compressibility(young: f64, poisson: f64) -> Result<(f64, f64), StrError> {
        let denominator = (1.0 + poisson) * (1.0 - 2.0 * poisson);
        if denominator == 0.0 {
            return Err("cannot derive the oedometric modulus because poisson makes the denominator vanish");
        }
        let oedometric = young * (1.0 - poisson) / denominator;
        Ok((oedometric, 1.0 / oedometric))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
