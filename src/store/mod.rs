pub mod json;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::core::{link_variants, CardRecord};
use crate::error::Result;

pub use json::JsonFileSource;

/// Trait for card corpus sources (portal dumps, fixtures, ...)
#[async_trait]
pub trait CardSource: Send + Sync {
    /// Load the full card list
    async fn load(&self) -> Result<Vec<CardRecord>>;

    /// Get source name
    fn name(&self) -> &str;
}

/// Source serving a fixed in-memory card list
pub struct StaticSource {
    cards: Vec<CardRecord>,
}

impl StaticSource {
    pub fn new(cards: Vec<CardRecord>) -> Self {
        Self { cards }
    }
}

#[async_trait]
impl CardSource for StaticSource {
    async fn load(&self) -> Result<Vec<CardRecord>> {
        Ok(self.cards.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// One immutable load of the corpus
#[derive(Debug)]
pub struct CardPool {
    cards: Vec<CardRecord>,
    source: String,
    loaded_at: DateTime<Utc>,
}

impl CardPool {
    /// Build a pool, resolving variant base sets
    pub fn new(mut cards: Vec<CardRecord>, source: impl Into<String>) -> Self {
        link_variants(&mut cards);
        Self {
            cards,
            source: source.into(),
            loaded_at: Utc::now(),
        }
    }

    pub fn cards(&self) -> &[CardRecord] {
        &self.cards
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Corpus statistics
#[derive(Debug, Clone)]
pub struct StoreStats {
    pub source: String,
    pub total_cards: usize,
    pub named_cards: usize,
    pub variants: usize,
    pub tokens: usize,
    pub loaded_at: DateTime<Utc>,
    pub refresh_count: u64,
}

/// Holds the current corpus and swaps in fresh loads.
///
/// Queries work on a [`snapshot`](CardStore::snapshot); a concurrent
/// [`refresh`](CardStore::refresh) never changes a snapshot already handed out.
pub struct CardStore {
    source: Arc<dyn CardSource>,
    pool: RwLock<Arc<CardPool>>,
    refresh_count: AtomicU64,
}

impl CardStore {
    /// Create a store and perform the initial load
    pub async fn open(source: Arc<dyn CardSource>) -> Result<Self> {
        let pool = Self::load_pool(source.as_ref()).await?;
        Ok(Self {
            source,
            pool: RwLock::new(Arc::new(pool)),
            refresh_count: AtomicU64::new(0),
        })
    }

    async fn load_pool(source: &dyn CardSource) -> Result<CardPool> {
        let cards = source.load().await?;
        tracing::info!("✅ Loaded {} cards from {}", cards.len(), source.name());
        Ok(CardPool::new(cards, source.name()))
    }

    /// Current corpus
    pub fn snapshot(&self) -> Arc<CardPool> {
        let pool = self.pool.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&pool)
    }

    /// Reload from the source. On failure the previous corpus stays in place.
    pub async fn refresh(&self) -> Result<usize> {
        let pool = match Self::load_pool(self.source.as_ref()).await {
            Ok(pool) => pool,
            Err(e) => {
                tracing::warn!("⚠️ Refresh from {} failed, keeping old cards: {}", self.source.name(), e);
                return Err(e);
            }
        };
        let count = pool.len();

        *self.pool.write().unwrap_or_else(|e| e.into_inner()) = Arc::new(pool);
        self.refresh_count.fetch_add(1, Ordering::Relaxed);

        Ok(count)
    }

    /// Get corpus statistics
    pub fn stats(&self) -> StoreStats {
        let pool = self.snapshot();
        let cards = pool.cards();
        let refresh_count = self.refresh_count.load(Ordering::Relaxed);

        StoreStats {
            source: pool.source().to_string(),
            total_cards: cards.len(),
            named_cards: cards.iter().filter(|c| c.card_name.is_some()).count(),
            variants: cards.iter().filter(|c| c.is_variant() && !c.is_token()).count(),
            tokens: cards.iter().filter(|c| c.is_token()).count(),
            loaded_at: pool.loaded_at(),
            refresh_count,
        }
    }
}
