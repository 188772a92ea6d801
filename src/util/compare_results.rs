use super::SimTable;
use crate::analytical::PressureSolution;
use crate::StrError;
use plotpy::{Curve, Plot};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// The columns a simulation table must have to be compared
pub const REQUIRED_COLUMNS: [&str; 3] = ["Time", "WPressure", "Y"];

/// Holds one paired (simulation, analytical) data point
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ComparisonPoint {
    /// Directory the table came from
    pub directory: String,

    /// Filename of the table
    pub table: String,

    /// The requested non-dimensional time
    pub nondimensional_time: f64,

    /// The closest time found in the table
    pub table_time: f64,

    /// Normalized pore pressure from the table: WPressure / traction_load
    pub normalized_pressure: f64,

    /// Depth of the sampled material point (the Y column)
    pub depth: f64,
}

/// Holds all paired data points of a comparison run
#[derive(Serialize, Deserialize)]
pub struct ComparisonResults {
    pub all: Vec<ComparisonPoint>,
}

impl ComparisonResults {
    /// Reads a JSON file containing the results
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
        let results = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
        Ok(results)
    }

    /// Writes a JSON file with the results
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

/// Pairs simulation tables with the analytical pressure solution
///
/// For each directory, each table, and each requested non-dimensional time,
/// the row whose `Time` is closest (minimum absolute difference) to that time
/// yields one paired data point.
///
/// # Input
///
/// * `tables_by_directory` -- the simulation tables keyed by directory and filename
/// * `solution` -- the analytical pressure solution providing the target times
/// * `traction_load` -- normalization factor for the tabulated pressures (nonzero)
/// * `verbose` -- prints the offending table key when a check fails
///
/// # Output
///
/// Returns the paired points ordered by directory, table, and time.
pub fn compare_pressure_results(
    tables_by_directory: &HashMap<String, HashMap<String, SimTable>>,
    solution: &PressureSolution,
    traction_load: f64,
    verbose: bool,
) -> Result<Vec<ComparisonPoint>, StrError> {
    if traction_load == 0.0 {
        return Err("traction_load must be nonzero");
    }
    if tables_by_directory.is_empty() {
        return Err("there are no simulation tables to compare");
    }
    let mut directories: Vec<_> = tables_by_directory.keys().collect();
    directories.sort();
    let mut points = Vec::new();
    for directory in directories {
        let tables = &tables_by_directory[directory];
        let mut filenames: Vec<_> = tables.keys().collect();
        filenames.sort();
        for filename in filenames {
            let table = &tables[filename];
            if !table.has_columns(&REQUIRED_COLUMNS) {
                if verbose {
                    println!("table '{}' in '{}' is missing required columns", filename, directory);
                }
                return Err("a table is missing one of the required columns (Time, WPressure, Y)");
            }
            for tt in &solution.nondimensional_time {
                let row = table.closest_row("Time", *tt)?;
                points.push(ComparisonPoint {
                    directory: directory.clone(),
                    table: filename.clone(),
                    nondimensional_time: *tt,
                    table_time: table.column("Time")?[row],
                    normalized_pressure: table.column("WPressure")?[row] / traction_load,
                    depth: table.column("Y")?[row],
                });
            }
        }
    }
    Ok(points)
}

/// Draws the analytical isochrones overlaid with the paired simulation points
///
/// This is a presentational step only.
///
/// # Input
///
/// * `full_path` -- where to save the figure; may be a String, &str, or Path
pub fn plot_pressure_comparison<P>(
    solution: &PressureSolution,
    points: &[ComparisonPoint],
    full_path: &P,
) -> Result<(), StrError>
where
    P: AsRef<OsStr> + ?Sized,
{
    const COLORS: [&str; 6] = ["red", "green", "blue", "gold", "magenta", "cyan"];
    let mut plot = Plot::new();
    solution.add_isochrones_to_plot(&mut plot);
    for point in points {
        let j = solution
            .nondimensional_time
            .iter()
            .position(|t| *t == point.nondimensional_time)
            .unwrap_or(0);
        let mut curve = Curve::new();
        curve
            .set_line_color(COLORS[j % COLORS.len()])
            .set_marker_style("o")
            .set_marker_size(6.0)
            .set_marker_void(true);
        let x = vec![point.normalized_pressure];
        let y = vec![point.depth];
        curve.draw(&x, &y);
        plot.add(&curve);
    }
    let path = Path::new(full_path).to_string_lossy().to_string();
    plot.save(&path)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
