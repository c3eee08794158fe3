//! # KissBot Card Engine
//!
//! Fuzzy card-name search over a trading card corpus:
//! - Alignment-based name matching with word-aware gap costs
//! - Conjunctive keyword search over card fields
//! - Merged, deterministic result ordering
//! - Atomically refreshable in-memory card store
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use kissbot_card_engine::{CardEngine, JsonFileSource, SearchQuery};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let engine = CardEngine::new(Arc::new(JsonFileSource::new("cards.json"))).await?;
//!
//!     let results = engine.search(SearchQuery::new("medusa", 5)).await?;
//!
//!     for card in &results.cards {
//!         println!("{}: {:?}", card.card_id, card.effective_name());
//!     }
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod engine;
pub mod error;
pub mod format;
pub mod ranking;
pub mod store;

// Re-export primary types
pub use core::{CardRecord, CardSet, SearchResponse, SearchStrategy};
pub use engine::{CardEngine, SearchOptions, SearchQuery};
pub use error::{CardEngineError, Result};
pub use ranking::{filter_by_keywords, find, rank_by_name};
pub use store::{CardSource, CardStore, JsonFileSource, StaticSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
