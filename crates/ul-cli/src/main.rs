//! user-list - browse a batch of random users in the terminal
//!
//! # Examples
//!
//! ```bash
//! # Interactive session
//! user-list
//!
//! # One-shot table, sorted by last name, Spanish users only
//! user-list show --sort last --filter spa --colors
//!
//! # Fewer users from a local mock
//! user-list --endpoint http://127.0.0.1:9000/api --results 10
//! ```

use ul_cli::{Cli, CliErrorResult, Client, Commands, Session, logger, stdin_lines, terminal};
use ul_config::Config;
use ul_core::{LoadOutcome, ViewStore, load_initial};

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};
use tokio::sync::oneshot;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliErrorResult<()> {
    // .env values take part in the UL_* overrides
    dotenvy::dotenv().ok();

    let mut config = Config::load()?;
    if let Some(endpoint) = cli.endpoint {
        config.api.endpoint = endpoint;
    }
    if let Some(results) = cli.results {
        config.api.results = results;
    }
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(dir) = log_file_path.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(dir)?;
    }

    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting user-list v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let client = Client::new(&config.api.endpoint, config.api.timeout())?;
    let paint = std::io::stdout().is_terminal();

    match cli.command.unwrap_or(Commands::Browse) {
        Commands::Browse => browse(&config, client, paint).await,
        Commands::Show {
            colors,
            sort,
            filter,
        } => {
            let mut params = config.view.view_parameters();
            params.show_colors |= colors;
            if let Some(sort) = sort {
                params.sort_key = sort;
            }
            if let Some(filter) = filter {
                params.country_filter = filter.trim().to_string();
            }

            let mut store = ViewStore::with_params(params);
            if load_initial(&mut store, &client, config.api.results).await == LoadOutcome::Failed {
                eprintln!("Could not load users, see the log for details");
            }

            print!("{}", terminal::format_view(&store, paint));
            Ok(())
        }
    }
}

async fn browse(config: &Config, client: Client, paint: bool) -> CliErrorResult<()> {
    let (tx, rx) = oneshot::channel();
    let results = config.api.results;

    let fetch = tokio::spawn(async move {
        let result = client.list_users(results).await;
        if tx.send(result).is_err() {
            debug!("Session ended before the fetch completed");
        }
    });

    let mut session = Session::new(ViewStore::with_params(config.view.view_parameters()), paint);
    let mut stdout = tokio::io::stdout();
    let result = session.run(stdin_lines(), &mut stdout, rx).await;

    fetch.abort();
    info!(
        "Session ended with {} of {} users",
        session.store().current().len(),
        session.store().original().len()
    );

    result
}
