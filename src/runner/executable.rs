use crate::StrError;
use std::fs;
use std::path::Path;
use std::process::Command;

/// Runs the simulator executable with a single argument and captures its output
///
/// Waits for completion and returns the captured standard output (trimmed).
/// A non-zero exit status is an error; the captured standard error is printed
/// in that case.
pub fn run_executable(exe_path: &str, argument: &str) -> Result<String, StrError> {
    let output = Command::new(exe_path)
        .arg(argument)
        .output()
        .map_err(|_| "cannot launch the executable")?;
    if !output.status.success() {
        println!("{}", String::from_utf8_lossy(&output.stderr));
        return Err("the executable finished with a non-zero exit status");
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Finds the highest-numbered file in a directory whose name contains a marker
///
/// The number is the sequence of digits following the marker, e.g., with
/// `marker = ".CPS_"` the file `column.CPS_003` outranks `column.CPS_002`.
///
/// # Output
///
/// Returns the filename (without path), or `None` when no file matches.
pub fn highest_numbered_file(dir: &str, marker: &str) -> Result<Option<String>, StrError> {
    let entries = fs::read_dir(dir).map_err(|_| "the directory does not exist")?;
    let mut best: Option<(usize, String)> = None;
    for entry in entries {
        let entry = entry.map_err(|_| "cannot access a directory entry")?;
        let filename = match entry.file_name().into_string() {
            Ok(f) => f,
            Err(_) => continue,
        };
        let position = match filename.find(marker) {
            Some(p) => p + marker.len(),
            None => continue,
        };
        let digits: String = filename[position..].chars().take_while(|c| c.is_ascii_digit()).collect();
        let number: usize = match digits.parse() {
            Ok(n) => n,
            Err(_) => continue,
        };
        match &best {
            Some((current, _)) if *current >= number => (),
            _ => best = Some((number, filename)),
        }
    }
    Ok(best.map(|(_, filename)| filename))
}

/// Replaces the line following a flag token in a text configuration file
///
/// Finds the first line containing the flag and overwrites the next line with
/// `new_value`, keeping everything else untouched.
pub fn overwrite_line_after_flag(full_path: &str, flag: &str, new_value: &str) -> Result<(), StrError> {
    let contents = fs::read_to_string(full_path).map_err(|_| "cannot read the configuration file")?;
    let mut lines: Vec<String> = contents.lines().map(|l| l.to_string()).collect();
    let position = lines
        .iter()
        .position(|l| l.contains(flag))
        .ok_or("the flag is not present in the configuration file")?;
    if position + 1 >= lines.len() {
        return Err("the flag has no following line to overwrite");
    }
    lines[position + 1] = new_value.to_string();
    let mut patched = lines.join("\n");
    patched.push('\n');
    fs::write(full_path, patched).map_err(|_| "cannot write the configuration file")?;
    Ok(())
}

/// Deletes all files in a directory except those ending with the given extensions
///
/// Subdirectories are left untouched.
pub fn delete_files_except_extensions(dir: &str, keep_extensions: &[&str]) -> Result<(), StrError> {
    let entries = fs::read_dir(dir).map_err(|_| "the directory does not exist")?;
    for entry in entries {
        let entry = entry.map_err(|_| "cannot access a directory entry")?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let filename = match entry.file_name().into_string() {
            Ok(f) => f,
            Err(_) => continue,
        };
        if keep_extensions.iter().any(|ext| filename.ends_with(ext)) {
            continue;
        }
        fs::remove_file(&path).map_err(|_| "cannot delete a file")?;
    }
    Ok(())
}

/// Joins a directory and a filename into a string path
pub(crate) fn join_path(dir: &str, filename: &str) -> String {
    Path::new(dir).join(filename).to_string_lossy().to_string()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
