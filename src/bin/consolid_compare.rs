use consolid::analytical::TerzaghiPressure;
use consolid::base::{ParamConsolidation, TimeSpec, DEFAULT_OUT_DIR};
use consolid::util::{compare_pressure_results, plot_pressure_comparison, process_sim_directories, ComparisonResults};
use consolid::StrError;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "consolid_compare",
    about = "Compares simulation tables against Terzaghi's analytical pressure isochrones"
)]
struct Options {
    /// JSON file with the physical parameters of the layer
    params: String,

    /// Directories holding the simulation tables
    res_dirs: Vec<String>,

    /// Non-dimensional times of the isochrones (comma-separated)
    #[structopt(long, use_delimiter = true, default_value = "0.1,0.5,1.0")]
    times: Vec<f64>,

    /// Traction load used to normalize the tabulated pressures
    #[structopt(long, default_value = "-10.0", allow_hyphen_values = true)]
    traction: f64,

    /// Number of depth samples of the analytical isochrones
    #[structopt(long, default_value = "101")]
    ndata: usize,

    /// Filename marker selecting the tables, e.g., column.PAR_001
    #[structopt(long, default_value = ".PAR_")]
    marker: String,

    /// Output directory for the comparison figure and JSON
    #[structopt(long, default_value = DEFAULT_OUT_DIR)]
    out_dir: String,
}

fn main() -> Result<(), StrError> {
    // parse options
    let options = Options::from_args();

    // load tables
    let directories: Vec<_> = options.res_dirs.iter().map(|s| s.as_str()).collect();
    let tables_by_directory = process_sim_directories(&directories, &options.marker, true)?;

    // evaluate the analytical solution
    let params = ParamConsolidation::read_json(&options.params)?;
    let time = TimeSpec::Nondimensional(options.times.clone());
    let ana = TerzaghiPressure::new(params, options.ndata, time)?;
    let solution = ana.solve()?;

    // pair the tables with the isochrones
    let points = compare_pressure_results(&tables_by_directory, &solution, options.traction, true)?;
    let results = ComparisonResults { all: points };
    let path_json = format!("{}/comparison.json", options.out_dir);
    results.write_json(&path_json)?;
    let path_svg = format!("{}/comparison.svg", options.out_dir);
    plot_pressure_comparison(&solution, &results.all, &path_svg)?;

    // message
    let thin_line = format!("{:─^1$}", "", path_svg.len());
    println!("\n\n{}", thin_line);
    println!("{} points compared; the files are:", results.all.len());
    println!("{}", path_json);
    println!("{}", path_svg);
    println!("{}\n\n", thin_line);
    Ok(())
}
