use crate::StrError;
use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Holds a whitespace-delimited table produced by the external simulator
///
/// The first line is the header with the column names; every following line
/// holds one numeric value per column.
pub struct SimTable {
    /// Column names in file order
    pub names: Vec<String>,

    /// Column data keyed by name; all columns share the same length
    pub columns: HashMap<String, Vec<f64>>,

    /// Number of data rows
    pub nrow: usize,
}

impl SimTable {
    /// Reads a table from a whitespace-delimited text file
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "file not found")?;
        let reader = BufReader::new(file);
        let mut lines = reader.lines();
        let header = match lines.next() {
            Some(line) => line.map_err(|_| "cannot read the header line")?,
            None => return Err("the table file is empty"),
        };
        let names: Vec<String> = header.split_whitespace().map(|s| s.to_string()).collect();
        if names.is_empty() {
            return Err("the header line has no column names");
        }
        let mut columns: HashMap<String, Vec<f64>> = names.iter().map(|n| (n.clone(), Vec::new())).collect();
        let mut nrow = 0;
        for line in lines {
            let line = line.map_err(|_| "cannot read a data line")?;
            if line.trim().is_empty() {
                continue;
            }
            let values: Vec<&str> = line.split_whitespace().collect();
            if values.len() != names.len() {
                return Err("a data row has a number of values different from the number of columns");
            }
            for (name, value) in names.iter().zip(values.iter()) {
                let number: f64 = value.parse().map_err(|_| "cannot parse a value as a number")?;
                columns.get_mut(name).unwrap().push(number);
            }
            nrow += 1;
        }
        Ok(SimTable { names, columns, nrow })
    }

    /// Returns a column by name
    pub fn column(&self, name: &str) -> Result<&Vec<f64>, StrError> {
        self.columns.get(name).ok_or("the table does not have the requested column")
    }

    /// Tells whether the table has all the given columns or not
    pub fn has_columns(&self, names: &[&str]) -> bool {
        names.iter().all(|n| self.columns.contains_key(*n))
    }

    /// Returns the index of the row whose value in a column is closest to a target
    ///
    /// Closest means minimum absolute difference.
    pub fn closest_row(&self, name: &str, target: f64) -> Result<usize, StrError> {
        let column = self.column(name)?;
        if column.is_empty() {
            return Err("the table has no data rows");
        }
        let mut best = 0;
        let mut best_diff = f64::abs(column[0] - target);
        for (i, value) in column.iter().enumerate().skip(1) {
            let diff = f64::abs(value - target);
            if diff < best_diff {
                best = i;
                best_diff = diff;
            }
        }
        Ok(best)
    }
}

/// Reads all simulation tables in a directory whose filenames contain a marker
///
/// For example, with `marker = ".PAR_"`, the files `column.PAR_001` and
/// `column.PAR_002` are read and keyed by their filenames.
///
/// # Output
///
/// Returns a map from filename to table; the map is empty when no file matches.
pub fn read_sim_tables(dir: &str, marker: &str) -> Result<HashMap<String, SimTable>, StrError> {
    let entries = fs::read_dir(dir).map_err(|_| "the directory does not exist")?;
    let mut tables = HashMap::new();
    for entry in entries {
        let entry = entry.map_err(|_| "cannot access a directory entry")?;
        let filename = match entry.file_name().into_string() {
            Ok(f) => f,
            Err(_) => continue,
        };
        if filename.contains(marker) {
            let table = SimTable::read(&entry.path())?;
            tables.insert(filename, table);
        }
    }
    Ok(tables)
}

/// Reads the simulation tables of several directories
///
/// # Input
///
/// * `directories` -- the directories to scan
/// * `marker` -- the filename marker, e.g., `.PAR_`
/// * `verbose` -- prints a note for directories without matching files
///
/// # Output
///
/// Returns a map from directory to (map from filename to table); directories
/// without matching files are skipped.
pub fn process_sim_directories(
    directories: &[&str],
    marker: &str,
    verbose: bool,
) -> Result<HashMap<String, HashMap<String, SimTable>>, StrError> {
    let mut tables_by_directory = HashMap::new();
    for dir in directories {
        let tables = read_sim_tables(dir, marker)?;
        if tables.is_empty() {
            if verbose {
                println!("no table found in '{}'", dir);
            }
            continue;
        }
        tables_by_directory.insert(dir.to_string(), tables);
    }
    Ok(tables_by_directory)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
