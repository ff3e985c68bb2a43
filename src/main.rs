//! StockFlow AI - a natural-language assistant for inventory data.

mod cli;
mod config;
mod db;
mod error;
// Re-exports in llm and sql are sized for the library surface; the binary
// uses a subset.
#[allow(unused_imports)]
mod llm;
mod pipeline;
#[allow(unused_imports)]
mod sql;

use cli::Cli;
use config::Config;
use error::Result;
use pipeline::Assistant;
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Pick up GROQ_API_KEY and friends from a local .env, if present.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run().await {
        error!("{}: {}", e.category(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());
    let mut config = Config::load_from_file(&config_path)?;

    // CLI flags take precedence over the config file.
    if let Some(provider) = &cli.llm {
        config.llm.provider = provider.clone();
    }
    if let Some(model) = &cli.model {
        config.llm.model = model.clone();
    }

    let db_path = config.resolve_database_path(cli.database.as_deref())?;
    info!("Store: {}", db_path.display());

    // A missing API key fails here, before any question is accepted.
    let client = llm::create_client(&config.llm)?;
    let assistant = Assistant::new(client, db_path);

    match &cli.question {
        Some(question) => {
            let reply = assistant.answer(question).await;
            println!("{reply}");
        }
        None => interactive_loop(&assistant).await?,
    }

    Ok(())
}

/// Reads questions line by line from stdin and prints each answer.
async fn interactive_loop(assistant: &Assistant) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {
                let question = line.trim();
                if question.is_empty() {
                    continue;
                }
                let reply = assistant.answer(question).await;
                println!("{reply}");
            }
            Err(e) => {
                error!("Failed to read from stdin: {e}");
                break;
            }
        }
    }

    Ok(())
}
