use std::process::ExitCode;

use clap::Parser;
use vulnreport_core::ErrorCode;

mod cli;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    vulnreport_core::tracing::init_tracing();

    match cli.run() {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(stage = %err.stage(), "run failed");
            eprintln!("{}", err.coded_string());
            ExitCode::FAILURE
        }
    }
}
