use serde::{Deserialize, Serialize};
use crate::core::CardRecord;

/// Which path produced a result list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Keyword membership, name-ranked ordering
    Merged,
    /// Keyword filter found nothing; name ranking alone
    NameOnly,
    /// Numeric query resolved as a card id
    CardId,
}

/// Ordered search results with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// The raw query
    pub query: String,

    /// Best match first, truncated to the requested size
    pub cards: Vec<CardRecord>,

    /// Matches before truncation
    pub total_matches: usize,

    pub strategy: SearchStrategy,

    /// Search latency in milliseconds
    pub latency_ms: f64,
}

impl SearchResponse {
    pub fn best(&self) -> Option<&CardRecord> {
        self.cards.first()
    }

    /// More matches exist than were returned
    pub fn is_truncated(&self) -> bool {
        self.total_matches > self.cards.len()
    }

    /// Get display string for logging
    pub fn display(&self) -> String {
        let best = self
            .best()
            .and_then(|card| card.effective_name())
            .map(|name| name.into_owned())
            .unwrap_or_else(|| "-".to_string());
        format!(
            "\"{}\" -> {} ({} of {} matches) [{:?}] {:.2}ms",
            self.query,
            best,
            self.cards.len(),
            self.total_matches,
            self.strategy,
            self.latency_ms
        )
    }
}
