use std::process::ExitCode;

use clap::Parser;

use mailroom::{app, cli::Cli, logging::init_logging};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbosity());

    let stdout = std::io::stdout();
    if let Err(e) = app::run(cli, stdout.lock()) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
