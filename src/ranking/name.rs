use std::borrow::Cow;
use std::cmp::Ordering;

use crate::core::{CardRecord, CardSet};
use crate::ranking::alignment::align;
use crate::ranking::{RankedCandidate, Ranker};

/// Minimum alignment score a name needs to be kept
pub const DEFAULT_MIN_SCORE: f64 = 0.75;

/// Scores every named card against the whole query string
#[derive(Debug, Clone, Copy)]
pub struct NameRanker {
    min_score: f64,
}

impl NameRanker {
    pub fn new(min_score: f64) -> Self {
        Self { min_score }
    }
}

impl Default for NameRanker {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SCORE)
    }
}

impl Ranker for NameRanker {
    fn rank<'a>(&self, words: &[&str], candidates: &'a [CardRecord]) -> Vec<RankedCandidate<'a>> {
        rank_by_name(candidates, &words.join(" "), self.min_score)
    }

    fn name(&self) -> &str {
        "name"
    }
}

/// Precomputed sort key: exact first, then score, canonical before
/// variants, newer sets first, then name and id.
struct NameKey<'a> {
    candidate: RankedCandidate<'a>,
    variant: bool,
    card_set: CardSet,
    name: Cow<'a, str>,
}

impl<'a> NameKey<'a> {
    fn new(candidate: RankedCandidate<'a>, name: Cow<'a, str>) -> Self {
        Self {
            variant: candidate.card.is_variant_or_token(),
            card_set: candidate.card.card_set,
            candidate,
            name,
        }
    }

    fn cmp(&self, other: &Self) -> Ordering {
        let score = |key: &Self| key.candidate.score.unwrap_or(0.0);
        other
            .candidate
            .exact
            .cmp(&self.candidate.exact)
            .then_with(|| score(other).total_cmp(&score(self)))
            .then_with(|| self.variant.cmp(&other.variant))
            .then_with(|| other.card_set.cmp(&self.card_set))
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.candidate.card.card_id.cmp(&other.candidate.card.card_id))
    }
}

fn key_of<'a>(candidate: &RankedCandidate<'a>) -> NameKey<'a> {
    NameKey::new(*candidate, candidate.card.effective_name().unwrap_or_default())
}

/// Order of two name-ranked candidates
pub fn name_order(a: &RankedCandidate<'_>, b: &RankedCandidate<'_>) -> Ordering {
    key_of(a).cmp(&key_of(b))
}

/// Rank named candidates by alignment with `query`, dropping those scoring
/// below `threshold`. Unnamed records are skipped.
pub fn rank_by_name<'a>(
    candidates: &'a [CardRecord],
    query: &str,
    threshold: f64,
) -> Vec<RankedCandidate<'a>> {
    let mut keys: Vec<NameKey<'a>> = candidates
        .iter()
        .filter_map(|card| {
            let name = card.effective_name()?;
            let candidate = RankedCandidate::scored(card, align(query, &name));
            let score = candidate.score.unwrap_or(0.0);
            (score > 0.0 && score >= threshold).then(|| NameKey::new(candidate, name))
        })
        .collect();

    keys.sort_by(|a, b| a.cmp(b));

    tracing::debug!(
        "Name ranking for {:?} kept {} of {} candidates",
        query,
        keys.len(),
        candidates.len()
    );

    keys.into_iter().map(|key| key.candidate).collect()
}
