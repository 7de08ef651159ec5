//! `floorplan` command: evaluate a postorder slicing floorplan.
//!
//! ```text
//! floorplan in_file out_file1 out_file2 out_file3
//! ```
//!
//! Writes the preorder structure, the postorder dimensions, and the block
//! placements to the three output files.

use std::env;
use std::process::ExitCode;

use floorplan_cli::{run, Args};
use log::info;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let program = env::args().next().unwrap_or_else(|| "floorplan".to_string());
    let Some(args) = Args::from_args(env::args_os().skip(1)) else {
        eprintln!("Usage: {program} in_file out_file1 out_file2 out_file3");
        return ExitCode::from(2);
    };

    match run(&args) {
        Ok(outputs) => {
            info!(
                "{}: {} blocks in {}x{}",
                args.input.display(),
                outputs.blocks,
                outputs.bounds.width,
                outputs.bounds.height
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
