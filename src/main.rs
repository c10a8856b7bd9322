#![forbid(unsafe_code)]

mod cli;

use clap::Parser;
use tracing::error;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    let config = match cli.app_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", cli::error_envelope(&err));
            std::process::exit(1);
        }
    };

    let log_dir = (!config.log_dir.as_os_str().is_empty()).then(|| config.log_dir.clone());
    if let Err(err) = pf_shell::bootstrap::tracing::init_tracing_subscriber(log_dir.as_deref()) {
        eprintln!("Failed to initialize tracing: {err}");
    }

    match cli::run(cli, config).await {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                error!(error = %err, "Failed to render output");
                std::process::exit(1);
            }
        },
        Err(err) => {
            error!(error = %format!("{err:#}"), "Command failed");
            eprintln!("{}", cli::error_envelope(&err));
            std::process::exit(1);
        }
    }
}
