use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;
use stack_defs::GeneratedStack;

pub const MAIN_DIR: &str = "_main";
pub const DOCUMENTATION_DIR: &str = "_documentation";
pub const SCRIPT_FILE: &str = "run.py";
pub const README_FILE: &str = "README.md";
pub const METADATA_FILE: &str = "config0.yml";

fn write_file(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;
    info!("Wrote {}", path.display());
    Ok(())
}

/// Writes the package under `<dest_dir>/<stack_name>` and returns that directory.
/// Existing files at the same paths are overwritten.
pub fn write_stack_package(
    dest_dir: &Path,
    stack_name: &str,
    stack: &GeneratedStack,
) -> std::io::Result<PathBuf> {
    let stack_dir = dest_dir.join(stack_name);
    let main_dir = stack_dir.join(MAIN_DIR);
    let documentation_dir = stack_dir.join(DOCUMENTATION_DIR);

    std::fs::create_dir_all(&main_dir)?;
    std::fs::create_dir_all(&documentation_dir)?;

    write_file(&main_dir.join(SCRIPT_FILE), &stack.script)?;
    write_file(&documentation_dir.join(README_FILE), &stack.readme)?;
    write_file(&stack_dir.join(METADATA_FILE), &stack.metadata)?;

    Ok(stack_dir)
}
