//! Conjunctive keyword search over a fixed projection of card fields.
//!
//! Every query word must appear in at least one field. Lower-case words match
//! case-insensitively, anything else matches exactly (see
//! [`contains_word`](crate::ranking::normalize::contains_word)).

use std::borrow::Cow;
use std::cmp::{Ordering, Reverse};

use crate::core::{CardRecord, CardSet};
use crate::ranking::normalize::{is_lowercase, FoldedText};
use crate::ranking::{RankedCandidate, Ranker};

/// A set name that contains a common query word by accident
struct SetNameGuard {
    word: &'static str,
    card_set: CardSet,
    /// Query word that shows the set itself is meant
    companion: &'static str,
}

const SET_NAME_GUARDS: &[SetNameGuard] = &[
    SetNameGuard {
        word: "storm",
        card_set: CardSet::STORM_OVER_RIVAYLE,
        companion: "rivayle",
    },
    SetNameGuard {
        word: "storm",
        card_set: CardSet::OMEN_OF_STORMS,
        companion: "omen",
    },
];

/// True when `word` must not be matched against the name of `card_set`
fn set_name_suppressed(word: &str, card_set: CardSet, query: &[&str]) -> bool {
    let word = word.to_lowercase();
    SET_NAME_GUARDS.iter().any(|guard| {
        guard.card_set == card_set
            && guard.word == word
            && !query.iter().any(|w| w.to_lowercase() == guard.companion)
    })
}

/// Searchable text of one card
pub struct Projection<'a> {
    name: FoldedText<'a>,
    /// Name without the `(Alt: Set)` qualifier, for alt arts
    bare_name: Option<FoldedText<'a>>,
    alt_set: Option<CardSet>,
    fields: Vec<FoldedText<'a>>,
    card_set: CardSet,
    set_name: FoldedText<'static>,
}

impl<'a> Projection<'a> {
    /// Project `card`; with `fold` every field is lower-cased once up front
    pub fn of(card: &'a CardRecord, fold: bool) -> Self {
        let field = |text: Cow<'a, str>| FoldedText::new(text, fold);
        let alt_set = card.alt_set();
        let fields = vec![
            field(Cow::Owned(format!("{}pp", card.cost))),
            field(Cow::Borrowed(card.faction.name())),
            field(Cow::Borrowed(card.rarity.name())),
            field(Cow::Borrowed(card.card_type.name())),
            field(Cow::Borrowed(card.trait_name.as_str())),
            field(Cow::Borrowed(card.format.name())),
            field(Cow::Borrowed(card.ability.base.as_str())),
            field(Cow::Borrowed(card.ability.evolved.as_str())),
            field(
                card.stats
                    .map(|stats| Cow::Owned(stats.searchable()))
                    .unwrap_or_default(),
            ),
        ];
        Self {
            name: field(card.effective_name().unwrap_or_default()),
            bare_name: alt_set
                .and(card.card_name.as_deref())
                .map(|name| field(Cow::Borrowed(name))),
            alt_set,
            fields,
            card_set: card.card_set,
            set_name: FoldedText::new(card.card_set.name(), fold),
        }
    }

    /// Projected fields, name first, set name excluded
    pub fn fields(&self) -> Vec<&str> {
        std::iter::once(&self.name)
            .chain(&self.fields)
            .map(FoldedText::as_str)
            .collect()
    }

    fn name_matches(&self, word: &str, query: &[&str]) -> bool {
        match (self.alt_set, &self.bare_name) {
            (Some(alt_set), Some(bare_name)) if set_name_suppressed(word, alt_set, query) => {
                bare_name.contains_word(word)
            }
            _ => self.name.contains_word(word),
        }
    }

    fn matches_word(&self, word: &str, query: &[&str]) -> bool {
        self.name_matches(word, query)
            || self.fields.iter().any(|field| field.contains_word(word))
            || (self.set_name.contains_word(word)
                && !set_name_suppressed(word, self.card_set, query))
    }

    /// Every word of `query` is found in some field
    pub fn matches(&self, query: &[&str]) -> bool {
        query.iter().all(|word| self.matches_word(word, query))
    }
}

type KeywordKey<'a> = (bool, Reverse<CardSet>, Option<Cow<'a, str>>, i64);

fn keyword_key(card: &CardRecord) -> KeywordKey<'_> {
    (
        card.is_variant_or_token(),
        Reverse(card.card_set),
        card.effective_name(),
        card.card_id,
    )
}

/// Canonical cards first, then newer sets, then name and id
pub fn keyword_order(a: &CardRecord, b: &CardRecord) -> Ordering {
    keyword_key(a).cmp(&keyword_key(b))
}

/// Keyword filter as a [`Ranker`]; all kept candidates are unscored
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordFilter;

impl KeywordFilter {
    pub fn new() -> Self {
        Self
    }
}

impl Ranker for KeywordFilter {
    fn rank<'a>(&self, words: &[&str], candidates: &'a [CardRecord]) -> Vec<RankedCandidate<'a>> {
        filter_by_keywords(candidates, words)
            .into_iter()
            .map(RankedCandidate::unscored)
            .collect()
    }

    fn name(&self) -> &str {
        "keyword"
    }
}

/// Candidates matching every word of `query_words`, in [`keyword_order`].
/// An empty word list matches everything.
pub fn filter_by_keywords<'a>(candidates: &'a [CardRecord], query_words: &[&str]) -> Vec<&'a CardRecord> {
    let fold = query_words.iter().any(|word| is_lowercase(word));
    let mut matched: Vec<&'a CardRecord> = candidates
        .iter()
        .filter(|card| Projection::of(card, fold).matches(query_words))
        .collect();

    matched.sort_by_cached_key(|card| keyword_key(*card));

    tracing::debug!(
        "Keyword filter for {:?} kept {} of {} candidates",
        query_words,
        matched.len(),
        candidates.len()
    );

    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{link_variants, CardType, Faction, Rarity, Stats};

    fn card(id: i64, name: &str, set: CardSet) -> CardRecord {
        CardRecord::new(id, name, set)
    }

    fn ids(cards: &[&CardRecord]) -> Vec<i64> {
        cards.iter().map(|c| c.card_id).collect()
    }

    #[test]
    fn test_projection_fields() {
        let mut follower = card(1, "Medusa", CardSet::try_from(10003).unwrap());
        follower.cost = 4;
        follower.faction = Faction::Shadowcraft;
        follower.rarity = Rarity::Legendary;
        follower.card_type = CardType::Follower;
        follower.stats = Some(Stats { atk: 2, life: 3, evo_atk: 4, evo_life: 5 });
        follower.ability.base = "Bane".to_string();

        let projection = Projection::of(&follower, true);
        let fields = projection.fields();

        assert_eq!(
            fields,
            vec![
                "Medusa", "4pp", "Shadowcraft", "Legendary", "Follower", "-", "Unlimited", "Bane",
                "", "2/3 4/5"
            ]
        );
        assert!(projection.matches(&["bahamut"]));
        assert!(projection.matches(&["2/3"]));
    }

    #[test]
    fn test_every_word_must_match() {
        let mut spell = card(1, "Call of the Void", CardSet::BASIC);
        spell.cost = 6;
        spell.faction = Faction::Shadowcraft;
        let cards = vec![spell];

        assert_eq!(filter_by_keywords(&cards, &["6pp", "shadow"]).len(), 1);
        assert!(filter_by_keywords(&cards, &["6pp", "blood"]).is_empty());
    }

    #[test]
    fn test_case_policy() {
        let cards = vec![card(1, "Dragonsong Flute", CardSet::BASIC)];

        assert_eq!(filter_by_keywords(&cards, &["dragonsong"]).len(), 1);
        assert_eq!(filter_by_keywords(&cards, &["Dragonsong"]).len(), 1);
        assert!(filter_by_keywords(&cards, &["DRAGONSONG"]).is_empty());
    }

    #[test]
    fn test_storm_guard() {
        let rivayle = card(1, "Ghostly Rider", CardSet::STORM_OVER_RIVAYLE);
        let omen = card(2, "Flame Soldier", CardSet::OMEN_OF_STORMS);
        let mut keyword = card(3, "Seabrand Dragon", CardSet::BASIC);
        keyword.ability.base = "Storm.".to_string();
        let cards = vec![rivayle, omen, keyword];

        assert_eq!(ids(&filter_by_keywords(&cards, &["storm"])), vec![3]);
        assert_eq!(ids(&filter_by_keywords(&cards, &["Storm"])), vec![3]);
        assert_eq!(ids(&filter_by_keywords(&cards, &["storm", "rivayle"])), vec![1]);
        assert_eq!(ids(&filter_by_keywords(&cards, &["storm", "Omen"])), vec![2]);
        assert_eq!(ids(&filter_by_keywords(&cards, &["storms"])), vec![2]);
    }

    #[test]
    fn test_storm_guard_covers_alt_qualifier() {
        let base = card(1, "Ghostly Rider", CardSet::try_from(10013).unwrap());
        let mut rivayle_alt = card(2, "Ghostly Rider", CardSet::STORM_OVER_RIVAYLE);
        rivayle_alt.base_card_id = 1;
        let mut omen_alt = card(3, "Ghostly Rider", CardSet::OMEN_OF_STORMS);
        omen_alt.base_card_id = 1;
        let mut cards = vec![base, rivayle_alt, omen_alt];
        link_variants(&mut cards);

        assert_eq!(
            cards[1].effective_name().unwrap(),
            "Ghostly Rider (Alt: Storm Over Rivayle)"
        );
        assert!(filter_by_keywords(&cards, &["storm"]).is_empty());
        assert!(filter_by_keywords(&cards, &["Storm"]).is_empty());
        assert_eq!(ids(&filter_by_keywords(&cards, &["storm", "rivayle"])), vec![2]);
        assert_eq!(ids(&filter_by_keywords(&cards, &["storm", "omen"])), vec![3]);
        assert_eq!(ids(&filter_by_keywords(&cards, &["ghostly", "alt"])), vec![3, 2]);
    }

    #[test]
    fn test_order_canonical_then_newest() {
        let old = card(1, "Angel", CardSet::BASIC);
        let new = card(2, "Angel", CardSet::CLASSIC);
        let mut alt = card(3, "Angel", CardSet::try_from(10010).unwrap());
        alt.base_card_id = 2;
        let cards = vec![alt, old, new];

        assert_eq!(ids(&filter_by_keywords(&cards, &["angel"])), vec![2, 1, 3]);
    }

    #[test]
    fn test_empty_query_matches_all() {
        let cards = vec![card(1, "A", CardSet::BASIC), card(2, "B", CardSet::BASIC)];
        assert_eq!(filter_by_keywords(&cards, &[]).len(), 2);
    }

    #[test]
    fn test_unnamed_card_still_searchable() {
        let mut unnamed = card(1, "x", CardSet::BASIC);
        unnamed.card_name = None;
        unnamed.cost = 9;
        let cards = vec![unnamed];

        assert_eq!(filter_by_keywords(&cards, &["9pp"]).len(), 1);
    }
}
