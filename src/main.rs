use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;
use subnet_calc::cli::{render_invalid, run, Cli};
use subnet_calc::config::{log_config_path, Config};
use subnet_calc::logging::init_logging;
use subnet_calc::CalcError;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    if let Err(e) = init_logging(&log_config_path()) {
        eprintln!("{} logging not initialised: {e}", "WARN".on_red());
    }
    log::info!("#Start main()");

    let config = Config::from_env();
    let cli = Cli::parse();

    match run(&cli, &config) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => match e.downcast_ref::<CalcError>() {
            Some(err) => {
                println!("{}", render_invalid(err, cli.format.unwrap_or(config.format)));
                ExitCode::from(2)
            }
            None => {
                log::error!("{e}");
                eprintln!("{} {e}", "ERROR".on_red());
                ExitCode::FAILURE
            }
        },
    }
}
