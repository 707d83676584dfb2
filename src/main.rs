use clap::Parser;

mod api;
mod cli;
mod core;
mod generators;
mod logging;
mod models;

use crate::cli::{handlers, Args, CliCommand};
use crate::core::config::Config;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let mut config = Config::load();

    logging::init(config.log_level);
    log::debug!("Loaded config: {:?}", config);

    let result = match args.command {
        Some(CliCommand::Serve { host, port }) => {
            if let Some(host) = host {
                config.web_address = host;
            }
            if let Some(port) = port {
                config.web_port = port;
            }

            log::info!("🔐 Starting Passforge ({:?})", config.environment);
            api::start_server(&config).await.map_err(|e| {
                log::error!("API server failed: {}", e);
                anyhow::Error::new(e).context("API server failed")
            })
        }
        Some(CliCommand::Password(opts)) => {
            handlers::handle_password(&opts.into_request(config.default_password_length), args.json)
        }
        Some(CliCommand::Passphrase(opts)) => handlers::handle_passphrase(&opts.into_request(), args.json),
        Some(CliCommand::Strength { text }) => handlers::handle_strength(&text, args.json),
        Some(CliCommand::Words) => handlers::handle_words(args.json),
        None => cli::menu::run_cli_menu(&config),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e.root_cause());
        log::debug!("{:?}", e);
        std::process::exit(1);
    }

    Ok(())
}
