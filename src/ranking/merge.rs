use rustc_hash::FxHashSet;

use crate::core::{CardRecord, SearchStrategy};
use crate::ranking::{KeywordFilter, NameRanker, Ranker};

/// Ordered, de-duplicated output of a merged search
#[derive(Debug, Clone)]
pub struct Merged<'a> {
    pub cards: Vec<&'a CardRecord>,
    pub strategy: SearchStrategy,
}

/// Combines name ranking and keyword filtering into one result list.
///
/// The keyword filter decides membership; the name ranker decides the order of
/// every card both passes found. Keyword-only matches follow in keyword
/// order. With no keyword match at all, the name ranking is returned as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultMerger {
    name_ranker: NameRanker,
    keyword_filter: KeywordFilter,
}

impl ResultMerger {
    pub fn new(name_ranker: NameRanker, keyword_filter: KeywordFilter) -> Self {
        Self {
            name_ranker,
            keyword_filter,
        }
    }

    /// Merger with a custom name score threshold
    pub fn with_min_score(min_score: f64) -> Self {
        Self::new(NameRanker::new(min_score), KeywordFilter::new())
    }

    pub fn merge<'a>(&self, candidates: &'a [CardRecord], words: &[&str]) -> Merged<'a> {
        let by_name = self.name_ranker.rank(words, candidates);
        let by_keyword = self.keyword_filter.rank(words, candidates);

        if by_keyword.is_empty() {
            tracing::debug!(
                "No {} matches, using {} ranking ({} results)",
                self.keyword_filter.name(),
                self.name_ranker.name(),
                by_name.len()
            );
            return Merged {
                cards: by_name.into_iter().map(|ranked| ranked.card).collect(),
                strategy: SearchStrategy::NameOnly,
            };
        }

        let members: FxHashSet<i64> = by_keyword.iter().map(|ranked| ranked.card.card_id).collect();
        let mut seen = FxHashSet::default();
        let cards: Vec<&CardRecord> = by_name
            .iter()
            .chain(by_keyword.iter())
            .map(|ranked| ranked.card)
            .filter(|card| members.contains(&card.card_id) && seen.insert(card.card_id))
            .collect();

        assert_eq!(
            seen.len(),
            members.len(),
            "merged results lost keyword matches for {:?}",
            words
        );

        Merged {
            cards,
            strategy: SearchStrategy::Merged,
        }
    }
}

/// Merge name and keyword results with default settings
pub fn find<'a>(candidates: &'a [CardRecord], query_words: &[&str]) -> Vec<&'a CardRecord> {
    ResultMerger::default().merge(candidates, query_words).cards
}

/// The card with exactly this id
pub fn find_by_id(candidates: &[CardRecord], card_id: i64) -> Option<&CardRecord> {
    candidates.iter().find(|card| card.card_id == card_id)
}
