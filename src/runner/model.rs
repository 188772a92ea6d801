use super::{delete_files_except_extensions, highest_numbered_file, join_path, overwrite_line_after_flag, run_executable};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ffi::OsStr;
use std::fmt;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the stage description of a benchmark model
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BenchmarkInfo {
    /// Number of executable invocations required by the benchmark
    pub num_stages: usize,

    /// Maps a flag token in the CPS control file to the replacement of the
    /// line following that flag
    pub modify_cps_flags: HashMap<String, String>,
}

impl BenchmarkInfo {
    /// Reads a JSON file containing the benchmark description
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
        let info = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
        Ok(info)
    }

    /// Writes a JSON file with the benchmark description
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

/// Drives a multi-stage run of the external simulator for one model
///
/// The simulator takes the model path as its single argument. After the
/// first stage it leaves a numbered CPS control file behind; patching the
/// flagged lines of the highest-numbered CPS file advances the run.
pub struct Model {
    /// Path of the simulator executable
    pub exe_path: String,

    /// Folder holding the model input files
    pub model_folder: String,

    /// Name of the model (the argument is `model_folder/model_name`)
    pub model_name: String,

    /// Stage description when the model is a benchmark
    pub benchmark: Option<BenchmarkInfo>,

    /// Number of stages run so far
    pub current_stage: usize,
}

impl Model {
    /// Allocates a new instance
    pub fn new(exe_path: &str, model_folder: &str, model_name: &str) -> Self {
        Model {
            exe_path: exe_path.to_string(),
            model_folder: model_folder.to_string(),
            model_name: model_name.to_string(),
            benchmark: None,
            current_stage: 0,
        }
    }

    /// Attaches a benchmark description read from a JSON file
    pub fn set_benchmark<P>(&mut self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        self.benchmark = Some(BenchmarkInfo::read_json(full_path)?);
        Ok(())
    }

    /// Returns the argument handed to the simulator
    pub fn model_path(&self) -> String {
        join_path(&self.model_folder, &self.model_name)
    }

    /// Runs one stage of the model and returns the captured output
    pub fn run_stage(&mut self) -> Result<String, StrError> {
        let output = run_executable(&self.exe_path, &self.model_path())?;
        self.current_stage += 1;
        Ok(output)
    }

    /// Patches the highest-numbered CPS file to set up the next stage
    ///
    /// Returns the path of the patched file.
    pub fn advance_stage(&self) -> Result<String, StrError> {
        let info = self.benchmark.as_ref().ok_or("the model has no benchmark description")?;
        let filename = highest_numbered_file(&self.model_folder, ".CPS_")?
            .ok_or("there is no CPS file to patch in the model folder")?;
        let cps_path = join_path(&self.model_folder, &filename);
        let mut flags: Vec<_> = info.modify_cps_flags.keys().collect();
        flags.sort();
        for flag in flags {
            overwrite_line_after_flag(&cps_path, flag, &info.modify_cps_flags[flag])?;
        }
        Ok(cps_path)
    }

    /// Runs all stages of the benchmark in one go
    pub fn run_benchmark(&mut self) -> Result<(), StrError> {
        let num_stages = match &self.benchmark {
            Some(info) => info.num_stages,
            None => return Err("the model has no benchmark description"),
        };
        if num_stages > 2 {
            return Err("running more than two stages is not implemented");
        }
        self.run_stage()?;
        if num_stages == 2 {
            self.advance_stage()?;
            self.run_stage()?;
        }
        Ok(())
    }

    /// Deletes the output files of previous runs, keeping the input files
    pub fn clean_folder(&self, keep_extensions: &[&str]) -> Result<(), StrError> {
        delete_files_except_extensions(&self.model_folder, keep_extensions)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "model name: {}\nmodel path: {}\nexecutable: {}",
            self.model_name,
            self.model_path(),
            self.exe_path
        )
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{BenchmarkInfo, Model};
    use std::collections::HashMap;
    use std::fs;

    fn make_workdir(name: &str) -> String {
        let dir = format!("/tmp/consolid/test/{}", name);
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn benchmark_info_read_json_works() {
        let info = BenchmarkInfo::read_json("data/tests/benchmark_oedometer.json").unwrap();
        assert_eq!(info.num_stages, 2);
        assert_eq!(info.modify_cps_flags["$$NUMBER_OF_LOADSTEPS"], "25");
    }

    #[test]
    fn display_works() {
        let model = Model::new("/opt/mpm/simulator", "/tmp/models/column", "column");
        assert_eq!(
            format!("{}", model),
            "model name: column\nmodel path: /tmp/models/column/column\nexecutable: /opt/mpm/simulator"
        );
    }

    #[test]
    fn advance_stage_patches_the_last_cps_file() {
        let dir = make_workdir("advance_stage");
        fs::write(
            format!("{}/column.CPS_001", dir),
            "$$NUMBER_OF_LOADSTEPS\n10\n$$TIME_PER_LOADSTEP\n0.5\n",
        )
        .unwrap();
        fs::write(
            format!("{}/column.CPS_002", dir),
            "$$NUMBER_OF_LOADSTEPS\n10\n$$TIME_PER_LOADSTEP\n0.5\n",
        )
        .unwrap();
        let mut model = Model::new("echo", &dir, "column");
        model.set_benchmark("data/tests/benchmark_oedometer.json").unwrap();
        let patched = model.advance_stage().unwrap();
        assert!(patched.ends_with("column.CPS_002"));
        let contents = fs::read_to_string(&patched).unwrap();
        assert_eq!(contents, "$$NUMBER_OF_LOADSTEPS\n25\n$$TIME_PER_LOADSTEP\n0.1\n");
        // the earlier stage file is untouched
        let untouched = fs::read_to_string(format!("{}/column.CPS_001", dir)).unwrap();
        assert_eq!(untouched, "$$NUMBER_OF_LOADSTEPS\n10\n$$TIME_PER_LOADSTEP\n0.5\n");
    }

    #[test]
    fn run_benchmark_works() {
        let dir = make_workdir("run_benchmark");
        fs::write(
            format!("{}/column.CPS_001", dir),
            "$$NUMBER_OF_LOADSTEPS\n10\n$$TIME_PER_LOADSTEP\n0.5\n",
        )
        .unwrap();
        let mut model = Model::new("echo", &dir, "column");
        model.set_benchmark("data/tests/benchmark_oedometer.json").unwrap();
        model.run_benchmark().unwrap();
        assert_eq!(model.current_stage, 2);

        // more than two stages is an explicit error
        let mut model = Model::new("echo", &dir, "column");
        model.benchmark = Some(BenchmarkInfo {
            num_stages: 3,
            modify_cps_flags: HashMap::new(),
        });
        assert_eq!(
            model.run_benchmark().err(),
            Some("running more than two stages is not implemented")
        );

        // without a benchmark description the run is refused
        let mut model = Model::new("echo", &dir, "column");
        assert_eq!(model.run_benchmark().err(), Some("the model has no benchmark description"));
    }
}
