mod cli;

use crate::cli::CliCommand;

fn main() {
    // Exit codes: 0 valid, 1 invalid, 2 could not validate.
    match CliCommand::run_from_args() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("xvv error: {:#}", err);
            std::process::exit(2);
        }
    }
}
