mod cli;
mod platform;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use platform::config::AppConfig;
use platform::logging::{self, LogDestination};

fn main() -> anyhow::Result<ExitCode> {
    // A missing .env file is fine; real environment variables still apply.
    let _ = dotenv::dotenv();

    let matches = cli::build_cli().get_matches();
    let config = AppConfig::from_matches(&matches)?;

    match matches.subcommand() {
        Some(("ask", sub)) => {
            logging::initialize(LogDestination::Terminal, config.log_level());
            let query = sub.get_one::<String>("query").cloned().unwrap_or_default();
            let files: Vec<PathBuf> = sub
                .get_many::<PathBuf>("files")
                .map(|values| values.cloned().collect())
                .unwrap_or_default();
            platform::oneshot::run_ask(&config, query, files)
        }
        _ => {
            logging::initialize(
                LogDestination::File(config.log_file.clone()),
                config.log_level(),
            );
            platform::app::run_app(&config).context("interactive form failed")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
