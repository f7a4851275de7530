use cidr_subnet_split::config::{init_logging, Config};
use cidr_subnet_split::output::print_rows;
use cidr_subnet_split::run_command;
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::parse();
    if let Err(e) = init_logging(&config.log_config) {
        eprintln!("{} {e}", "WARN".on_yellow());
    }
    log::info!("#Start main() {:?}", config.command);

    let result = run_command(&config.command)
        .and_then(|rows| print_rows(config.format, config.command.name(), &rows));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{} failed: {e}", config.command.name());
            eprintln!("{} {e}", "ERROR".on_red());
            ExitCode::FAILURE
        }
    }
}
