use clap::Parser;
use std::process::ExitCode;
use tracing::debug;

use html_grader_lib::application::print_report;
use html_grader_lib::infrastructure::init_logging_with_config;
use html_grader_lib::{AppConfig, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match AppConfig::load(cli.settings.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return exit_code(e.exit_code());
        }
    };
    cli.apply_overrides(&mut config);

    let _log_guard = match init_logging_with_config(config.logging.clone()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    match html_grader_lib::run(&cli, &config).await {
        Ok(report) => {
            if let Err(e) = print_report(&report) {
                eprintln!("Error: failed to write report: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!(exit_code = e.exit_code(), "Grading failed");
            eprintln!("Error: {e}");
            exit_code(e.exit_code())
        }
    }
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
