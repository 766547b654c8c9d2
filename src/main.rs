//! Summarist CLI - article summarisation via hosted LLMs
//!
//! The application logic is contained in lib.rs, and this file is responsible
//! for parsing arguments and handling top-level errors.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;

use summarist::agent::GroqClient;
use summarist::fetch::HttpFetcher;
use summarist::server::{self, AppState};
use summarist::session::{RequestState, Session};
use summarist::store::SledBackend;
use summarist::{export, Config, SummaryStore, SummaryStyle, Summarizer};

#[derive(Parser)]
#[command(name = "summarist")]
#[command(author, version, about = "Article summarisation via hosted LLMs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarise an article by URL
    Summarize {
        /// URL to summarise
        url: String,
        /// Summary style tag (unknown tags fall back to "concise")
        #[arg(long, default_value = "concise")]
        style: String,
        /// Save the result to the local history
        #[arg(long)]
        save: bool,
    },
    /// List the available summary styles
    Styles,
    /// List saved summaries, newest first
    History,
    /// Export a saved summary as a text file
    Export {
        /// Id of the saved summary
        id: String,
        /// Directory to write the export into
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Delete a saved summary
    Delete {
        /// Id of the saved summary
        id: String,
    },
    /// Run the HTTP server
    Serve {
        /// Bind address, overrides the configured one
        #[arg(long)]
        addr: Option<String>,
    },
}

fn build_summarizer(config: &Config) -> anyhow::Result<Summarizer> {
    let client = GroqClient::new(config.api_key()?, config.agent.model.clone())
        .temperature(config.agent.temperature)
        .max_tokens(config.agent.max_tokens);
    Ok(Summarizer::new(HttpFetcher::new()?, client))
}

fn open_store(config: &Config) -> anyhow::Result<SummaryStore<SledBackend>> {
    let backend = SledBackend::open(&config.storage.path)?;
    Ok(SummaryStore::open(backend)?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Summarize { url, style, save } => {
            let summarizer = build_summarizer(&config)?;
            let style = SummaryStyle::from_tag(&style);

            let mut session = Session::new();
            session.begin_submit()?;
            println!("Summarising: {url}");

            match summarizer.summarize(&url, style.tag()).await {
                Ok(summary) => session.complete(summary)?,
                Err(e) => session.fail(e.to_string())?,
            }

            match session.state() {
                RequestState::Succeeded { summary } => {
                    println!("\n=== {} ===\n", style.label());
                    println!("{summary}");

                    if save {
                        let mut store = open_store(&config)?;
                        match store.add(&url, style, summary)? {
                            Some(saved) => {
                                println!(
                                    "\n{} (id {})",
                                    "Summary saved successfully!".green(),
                                    saved.id
                                );
                            }
                            None => println!("\n{}", "Nothing to save.".yellow()),
                        }
                    }
                }
                RequestState::Failed { error } => {
                    eprintln!("{}", error.red());
                    std::process::exit(1);
                }
                _ => unreachable!("submission has settled"),
            }
        }
        Commands::Styles => {
            for style in SummaryStyle::ALL {
                println!(
                    "{:<10} {} - {}",
                    style.tag().bold(),
                    style.label(),
                    style.description()
                );
            }
        }
        Commands::History => {
            let store = open_store(&config)?;
            if store.is_empty() {
                println!("No saved summaries yet.");
            } else {
                println!("Saved summaries ({}):\n", store.len());
                for saved in store.entries() {
                    println!("{} [{}]", saved.title.bold(), saved.id);
                    println!("   {}", saved.url);
                    println!("   {}\n", saved.style.label());
                }
            }
        }
        Commands::Export { id, out } => {
            let store = open_store(&config)?;
            match store.find(&id) {
                Some(saved) => {
                    let path = export::write_to(&out, saved)?;
                    println!("Exported to {}", path.display());
                }
                None => {
                    eprintln!("No saved summary with id {id}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Delete { id } => {
            let mut store = open_store(&config)?;
            if store.delete(&id)? {
                println!("Deleted {id}");
            }
        }
        Commands::Serve { addr } => {
            let summarizer = build_summarizer(&config)?;
            let state = Arc::new(AppState { summarizer });
            let addr = addr.unwrap_or_else(|| config.server.addr.clone());
            server::serve(&addr, state).await?;
        }
    }

    Ok(())
}
