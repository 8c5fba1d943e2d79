use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

mod api;
mod cli;
mod client;
mod core;
mod generators;
mod logging;
mod models;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    let dotenv_loaded = Path::new(".env").exists() && dotenvy::dotenv().is_ok();

    let args = Args::parse();

    // Logging first so config warnings are visible
    logging::init(logging::parse_level(args.log_level.as_deref(), log::LevelFilter::Info));
    let config = Config::load();

    if dotenv_loaded {
        log::debug!("Loaded .env file");
    }
    log::debug!("Loaded config: {:?}", config);

    let result: Result<(), Box<dyn std::error::Error>> = match args.command {
        CliCommand::Serve { address, port } => cli::handlers::handle_serve(config, address, port)
            .await
            .map_err(|e| -> Box<dyn std::error::Error> {
                log::error!("API server failed: {}", e);
                e.into()
            }),
        CliCommand::Generate { length, classes, copy, server } => {
            match cli::handlers::build_form(&config, server) {
                Ok(mut form) => cli::handlers::handle_generate(&mut form, length, classes.to_options(), copy)
                    .await
                    .map(|_| ()),
                Err(e) => Err(e),
            }
        }
        CliCommand::Form { server } => match cli::handlers::build_form(&config, server) {
            Ok(mut form) => cli::menu::run_form_menu(&mut form).await,
            Err(e) => Err(e),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}
