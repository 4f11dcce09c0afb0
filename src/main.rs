//! MCP assistant CLI - main entry point
//!
//! Interactive chat plus one-shot ask/search/topics commands.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mcp_assistant::{metrics, retrieval, AssistantSession, Config, DialogueManager, KnowledgeStore};

#[derive(Parser)]
#[command(name = "mcp_assistant")]
#[command(about = "Q&A assistant for Model Context Protocol documentation", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config.yml (default: ./config.yml or ../config.yml)
    #[arg(long, env = "ASSISTANT_CONFIG")]
    config: Option<PathBuf>,

    /// Expand abbreviations (mcp, api, sdk, ...) before searching
    #[arg(long, default_value_t = false)]
    expand_abbreviations: bool,

    /// Print Prometheus metrics to stderr on exit
    #[arg(long, default_value_t = false)]
    print_metrics: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive chat (default)
    Chat,

    /// Answer a single question
    Ask {
        /// Question text
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },

    /// Show scored knowledge records for a query
    Search {
        /// Query text
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Output JSON instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// List knowledge topics
    Topics,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match cli.config.as_deref() {
        Some(path) => Config::load_from_file(path)?,
        None => Config::new(),
    };
    if cli.expand_abbreviations {
        config.expand_abbreviations = true;
    }

    // Logs go to stderr; replies own stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(config.log_filter.parse()?))
        .init();

    let manager = DialogueManager::with_options(KnowledgeStore::builtin(), config.options());

    let result = match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => run_chat(AssistantSession::new(manager)).await,
        Commands::Ask { question } => {
            let mut manager = manager;
            println!("{}", manager.respond(&question.join(" ")));
            Ok(())
        }
        Commands::Search { query, json } => run_search(&manager, &query.join(" "), json),
        Commands::Topics => {
            for record in manager.store().lookup_all() {
                println!("{:<22} {}", record.key, record.title);
            }
            Ok(())
        }
    };

    if cli.print_metrics {
        eprint!("{}", metrics::render());
    }

    result
}

async fn run_chat(session: AssistantSession) -> anyhow::Result<()> {
    let mut lines = BufReader::new(io::stdin()).lines();
    let mut stdout = io::stdout();

    info!("chat started");
    println!("Ask me about the Model Context Protocol. Commands: /clear, /history, /quit");

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let line = tokio::select! {
            _ = signal::ctrl_c() => {
                println!();
                break;
            }
            line = lines.next_line() => line?,
        };

        let Some(line) = line else {
            break;
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            "/quit" | "/exit" => break,
            "/clear" => {
                session.clear_history().await;
                println!("History cleared.");
            }
            "/history" => print!("{}", session.history_markdown().await),
            _ => println!("\n{}\n", session.respond(input).await),
        }
    }

    info!(turns = session.transcript().await.len(), "chat finished");
    Ok(())
}

fn run_search(manager: &DialogueManager, query: &str, json: bool) -> anyhow::Result<()> {
    let results = manager.search(query);

    if json {
        let rows: Vec<serde_json::Value> = results
            .iter()
            .map(|r| {
                serde_json::json!({
                    "key": r.record.key,
                    "title": r.record.title,
                    "score": r.score,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No matches.");
        return Ok(());
    }

    println!(
        "weights: title={} keyword={} content={}",
        retrieval::TITLE_WEIGHT,
        retrieval::KEYWORD_WEIGHT,
        retrieval::CONTENT_WEIGHT
    );
    for (rank, r) in results.iter().enumerate() {
        println!("{}. [{:>3}] {} ({})", rank + 1, r.score, r.record.title, r.record.key);
    }
    Ok(())
}
