mod args;
mod commands;
mod shared;

use std::env;
use std::process::ExitCode;

use args::Cli;
use commands::run_transform;

// Top-level entrypoint: check args, run the transform, and map failures to exit status 1.
fn main() -> ExitCode {
    let Some(cli) = Cli::from_raw_args(env::args_os()) else {
        println!("{}", args::usage());
        return ExitCode::FAILURE;
    };

    match run_transform(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
