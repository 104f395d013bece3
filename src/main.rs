use std::process::ExitCode;

use clap::Parser;
use formlens::cli::Arguments;

fn main() -> ExitCode {
    let args = Arguments::parse();

    match formlens::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            formlens::cli::ExitStatus::Error.into()
        }
    }
}
