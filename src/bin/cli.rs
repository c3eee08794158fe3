use clap::{Parser, Subcommand};
use kissbot_card_engine::format::{card_list, CardSummary};
use kissbot_card_engine::{CardEngine, JsonFileSource, SearchOptions, SearchQuery};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "card-engine-cli")]
#[command(about = "KissBot Card Engine CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Card dump (portal JSON response or bare array)
    #[arg(short, long, env = "CARD_DATA_PATH", default_value = "cards.json")]
    data: String,

    /// Minimum name alignment score
    #[arg(long)]
    min_score: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the best matching card
    Card {
        /// Search query
        query: Vec<String>,
    },

    /// List matching cards
    Search {
        /// Search query
        query: Vec<String>,

        /// Maximum results
        #[arg(short, long)]
        max_results: Option<usize>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a card by id
    Id {
        card_id: i64,
    },

    /// Get corpus statistics
    Stats,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kissbot_card_engine=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut options = SearchOptions::from_env()?;
    if let Some(min_score) = cli.min_score {
        options.min_score = min_score;
    }

    let source = Arc::new(JsonFileSource::new(&cli.data));
    let engine = CardEngine::with_options(source, options).await?;

    match cli.command {
        Commands::Card { query } => {
            let query = query.join(" ");
            match engine.search(SearchQuery::new(query.clone(), 1)).await {
                Ok(result) => {
                    if let Some(card) = result.best() {
                        println!("{}", CardSummary::of(card));
                    }
                }
                Err(kissbot_card_engine::CardEngineError::NoResults(_)) => {
                    println!("Found no cards matching \"{}\"", query);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Commands::Search { query, max_results, json } => {
            let query = query.join(" ");
            let max_results = max_results.unwrap_or(engine.options().max_results);

            match engine.search(SearchQuery::new(query.clone(), max_results)).await {
                Ok(result) if json => {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                }
                Ok(result) => {
                    println!("🔍 Found these cards:");
                    println!("{}", card_list(&result.cards));
                    if result.is_truncated() {
                        println!("... and {} more", result.total_matches - result.cards.len());
                    }
                }
                Err(kissbot_card_engine::CardEngineError::NoResults(_)) => {
                    println!("Found no cards matching \"{}\"", query);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Commands::Id { card_id } => match engine.lookup(card_id) {
            Some(card) => println!("{}", CardSummary::of(&card)),
            None => println!("No card with id {}", card_id),
        },

        Commands::Stats => {
            let stats = engine.stats();

            println!("📊 Card Statistics:");
            println!("   Source: {}", stats.source);
            println!("   Total cards: {}", stats.total_cards);
            println!("   Named cards: {}", stats.named_cards);
            println!("   Variants: {}", stats.variants);
            println!("   Tokens: {}", stats.tokens);
            println!("   Loaded at: {}", stats.loaded_at.format("%Y-%m-%d %H:%M:%S"));
        }
    }

    Ok(())
}
