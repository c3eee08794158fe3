pub mod alignment;
pub mod keyword;
pub mod merge;
pub mod name;
pub mod normalize;

use crate::core::CardRecord;

pub use alignment::{align, similarity, Alignment};
pub use keyword::{filter_by_keywords, KeywordFilter};
pub use merge::{find, find_by_id, Merged, ResultMerger};
pub use name::{rank_by_name, NameRanker, DEFAULT_MIN_SCORE};

/// A pass that selects and orders candidates for a query
pub trait Ranker: Send + Sync {
    /// Rank candidates against the query words, best first
    fn rank<'a>(&self, words: &[&str], candidates: &'a [CardRecord]) -> Vec<RankedCandidate<'a>>;

    /// Get ranker name for logging
    fn name(&self) -> &str;
}

/// Candidate kept by a ranker, with its similarity when the ranker scores
#[derive(Debug, Clone, Copy)]
pub struct RankedCandidate<'a> {
    pub card: &'a CardRecord,
    pub score: Option<f64>,
    pub exact: bool,
}

impl<'a> RankedCandidate<'a> {
    pub fn scored(card: &'a CardRecord, alignment: Alignment) -> Self {
        Self {
            card,
            score: Some(alignment.score()),
            exact: alignment.exact,
        }
    }

    pub fn unscored(card: &'a CardRecord) -> Self {
        Self {
            card,
            score: None,
            exact: false,
        }
    }
}
