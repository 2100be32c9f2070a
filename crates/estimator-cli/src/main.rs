use std::process::ExitCode;

use clap::Parser;
use estimator_cli::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    match estimator_cli::run(cli, &mut stdout.lock()) {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            eprintln!("error: {}", estimator_cli::describe(&err));
            estimator_cli::exit_code(&err)
        }
    }
}
