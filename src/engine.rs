use crate::core::{CardRecord, SearchResponse, SearchStrategy};
use crate::error::{CardEngineError, Result};
use crate::ranking::normalize::split_words;
use crate::ranking::{find_by_id, ResultMerger, DEFAULT_MIN_SCORE};
use crate::store::{CardSource, CardStore, StoreStats};
use std::sync::Arc;
use std::time::Instant;

/// Main card search orchestrator
pub struct CardEngine {
    store: Arc<CardStore>,
    merger: ResultMerger,
    options: SearchOptions,
}

/// Search query parameters
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub query: String,
    pub max_results: usize,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>, max_results: usize) -> Self {
        Self {
            query: query.into(),
            max_results,
        }
    }
}

/// Search options/configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions {
    /// Alignment score a name needs to be ranked
    pub min_score: f64,
    /// Default result count
    pub max_results: usize,
    /// Treat a lone number as a card id
    pub numeric_id_lookup: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            max_results: 10,
            numeric_id_lookup: true,
        }
    }
}

impl SearchOptions {
    /// Defaults overridden by `CARD_MIN_SCORE`, `CARD_MAX_RESULTS` and
    /// `CARD_NUMERIC_LOOKUP`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let min_score = match lookup("CARD_MIN_SCORE") {
            Some(v) => v
                .parse::<f64>()
                .map_err(|_| CardEngineError::InvalidConfig(format!("CARD_MIN_SCORE={}", v)))?,
            None => defaults.min_score,
        };
        let max_results = match lookup("CARD_MAX_RESULTS") {
            Some(v) => v
                .parse::<usize>()
                .map_err(|_| CardEngineError::InvalidConfig(format!("CARD_MAX_RESULTS={}", v)))?,
            None => defaults.max_results,
        };
        let numeric_id_lookup = match lookup("CARD_NUMERIC_LOOKUP").as_deref() {
            Some("1" | "true" | "yes") => true,
            Some("0" | "false" | "no") => false,
            Some(v) => {
                return Err(CardEngineError::InvalidConfig(format!("CARD_NUMERIC_LOOKUP={}", v)))
            }
            None => defaults.numeric_id_lookup,
        };

        let options = Self {
            min_score,
            max_results,
            numeric_id_lookup,
        };
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.min_score > 0.0 && self.min_score <= 1.0) {
            return Err(CardEngineError::InvalidConfig(format!(
                "min_score must be in (0, 1], got {}",
                self.min_score
            )));
        }
        if self.max_results == 0 {
            return Err(CardEngineError::InvalidConfig(
                "max_results must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// A lone all-digit word
fn as_card_id(words: &[&str]) -> Option<i64> {
    match words {
        [word] if word.chars().all(|c| c.is_ascii_digit()) => word.parse().ok(),
        _ => None,
    }
}

impl CardEngine {
    /// Create engine over a card source with default options
    pub async fn new(source: Arc<dyn CardSource>) -> Result<Self> {
        Self::with_options(source, SearchOptions::default()).await
    }

    pub async fn with_options(source: Arc<dyn CardSource>, options: SearchOptions) -> Result<Self> {
        options.validate()?;
        let store = Arc::new(CardStore::open(source).await?);
        Ok(Self::from_store(store, options))
    }

    /// Engine sharing an already opened store
    pub fn from_store(store: Arc<CardStore>, options: SearchOptions) -> Self {
        Self {
            store,
            merger: ResultMerger::with_min_score(options.min_score),
            options,
        }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Search for cards
    pub async fn search(&self, query: SearchQuery) -> Result<SearchResponse> {
        let start = Instant::now();
        let pool = self.store.snapshot();
        let words = split_words(&query.query);

        if words.is_empty() {
            return Err(CardEngineError::NoResults(query.query.clone()));
        }

        let (matches, strategy): (Vec<&CardRecord>, SearchStrategy) =
            match as_card_id(&words).filter(|_| self.options.numeric_id_lookup) {
                Some(card_id) => (
                    find_by_id(pool.cards(), card_id).into_iter().collect(),
                    SearchStrategy::CardId,
                ),
                None => {
                    let merged = self.merger.merge(pool.cards(), &words);
                    (merged.cards, merged.strategy)
                }
            };

        if matches.is_empty() {
            tracing::debug!("No cards for {:?}", query.query);
            return Err(CardEngineError::NoResults(query.query.clone()));
        }

        let total_matches = matches.len();
        let cards: Vec<CardRecord> = matches
            .into_iter()
            .take(query.max_results.max(1))
            .cloned()
            .collect();

        let response = SearchResponse {
            query: query.query,
            cards,
            total_matches,
            strategy,
            latency_ms: start.elapsed().as_secs_f64() * 1000.0,
        };
        tracing::debug!("{}", response.display());

        Ok(response)
    }

    /// Search with the configured default result count
    pub async fn search_text(&self, query: &str) -> Result<SearchResponse> {
        self.search(SearchQuery::new(query, self.options.max_results)).await
    }

    /// Card with exactly this id
    pub fn lookup(&self, card_id: i64) -> Option<CardRecord> {
        find_by_id(self.store.snapshot().cards(), card_id).cloned()
    }

    /// Reload the corpus from the source
    pub async fn refresh(&self) -> Result<usize> {
        self.store.refresh().await
    }

    /// Get corpus statistics
    pub fn stats(&self) -> StoreStats {
        self.store.stats()
    }
}
