use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::core::codes::{CardSet, CardType, Faction, Format, Rarity};
use crate::error::{CardEngineError, Result};

/// Card ids at or above this value are tokens (not collectible)
pub const TOKEN_ID_THRESHOLD: i64 = 900_000_000;

/// Attack/life numbers of a follower, unevolved and evolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub atk: i64,
    pub life: i64,
    pub evo_atk: i64,
    pub evo_life: i64,
}

impl Stats {
    /// `"atk/life evo_atk/evo_life"`
    pub fn searchable(&self) -> String {
        format!("{}/{} {}/{}", self.atk, self.life, self.evo_atk, self.evo_life)
    }
}

/// Ability text as shipped in the dump
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AbilityText {
    /// Display text of the unevolved side (`<br>` separated)
    pub base: String,
    /// Display text of the evolved side
    pub evolved: String,
    /// Unformatted base text
    pub raw_base: String,
    /// Unformatted evolved text
    pub raw_evolved: String,
}

/// One card of the corpus with all codes resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    pub card_id: i64,
    /// Equal to `card_id` for canonical cards; alternate arts and leaders point at their base card
    pub base_card_id: i64,
    /// Some dump entries carry no name; they are never matched by name
    pub card_name: Option<String>,
    pub cost: i64,
    pub faction: Faction,
    pub rarity: Rarity,
    pub card_type: CardType,
    pub trait_name: String,
    pub card_set: CardSet,
    /// Set of the base card, filled in by [`link_variants`]
    pub base_card_set: CardSet,
    pub format: Format,
    pub stats: Option<Stats>,
    pub ability: AbilityText,
    pub flavor: String,
    pub evo_flavor: String,
}

impl CardRecord {
    /// Create a canonical bronze neutral spell with the given identity.
    /// Remaining fields are meant to be filled in by the caller.
    pub fn new(card_id: i64, card_name: impl Into<String>, card_set: CardSet) -> Self {
        Self {
            card_id,
            base_card_id: card_id,
            card_name: Some(card_name.into()),
            cost: 0,
            faction: Faction::Neutral,
            rarity: Rarity::Bronze,
            card_type: CardType::Spell,
            trait_name: "-".to_string(),
            card_set,
            base_card_set: card_set,
            format: Format::Unlimited,
            stats: None,
            ability: AbilityText::default(),
            flavor: String::new(),
            evo_flavor: String::new(),
        }
    }

    pub fn is_token(&self) -> bool {
        self.card_id >= TOKEN_ID_THRESHOLD
    }

    /// Alternate art or alternate leader form of another card
    pub fn is_variant(&self) -> bool {
        self.card_id != self.base_card_id
    }

    pub fn is_variant_or_token(&self) -> bool {
        self.is_token() || self.is_variant()
    }

    /// Name as shown to users, with an alt qualifier for variants.
    ///
    /// Variants printed in another set than their base read
    /// `"Name (Alt: Set)"`, the others `"Name (Alt Leader)"`.
    pub fn effective_name(&self) -> Option<Cow<'_, str>> {
        let name = self.card_name.as_deref()?;
        if self.is_token() || !self.is_variant() {
            return Some(Cow::Borrowed(name));
        }
        let qualified = match self.alt_set() {
            Some(set) => format!("{} (Alt: {})", name, set.name()),
            None => format!("{} (Alt Leader)", name),
        };
        Some(Cow::Owned(qualified))
    }

    /// Set named in the alt qualifier: a variant printed outside its base set
    pub fn alt_set(&self) -> Option<CardSet> {
        (self.is_variant() && !self.is_token() && self.card_set != self.base_card_set)
            .then_some(self.card_set)
    }
}

/// Fill in `base_card_set` for every record from its base card.
/// Records whose base is missing from the slice keep their own set.
pub fn link_variants(cards: &mut [CardRecord]) {
    let sets: rustc_hash::FxHashMap<i64, CardSet> =
        cards.iter().map(|card| (card.card_id, card.card_set)).collect();

    for card in cards.iter_mut() {
        card.base_card_set = sets
            .get(&card.base_card_id)
            .copied()
            .unwrap_or(card.card_set);
    }
}

/// Card entry as it appears in the portal JSON dump
#[derive(Debug, Clone, Deserialize)]
pub struct RawCard {
    pub card_id: i64,
    #[serde(default)]
    pub base_card_id: Option<i64>,
    #[serde(default)]
    pub card_name: Option<String>,
    #[serde(default)]
    pub cost: i64,
    pub clan: i64,
    pub rarity: i64,
    pub char_type: i64,
    #[serde(default)]
    pub tribe_name: Option<String>,
    pub card_set_id: i64,
    #[serde(default)]
    pub format_type: i64,
    #[serde(default)]
    pub atk: i64,
    #[serde(default)]
    pub life: i64,
    #[serde(default)]
    pub evo_atk: i64,
    #[serde(default)]
    pub evo_life: i64,
    #[serde(default)]
    pub skill_disc: Option<String>,
    #[serde(default)]
    pub evo_skill_disc: Option<String>,
    #[serde(default)]
    pub org_skill_disc: Option<String>,
    #[serde(default)]
    pub org_evo_skill_disc: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub evo_description: Option<String>,
}

impl TryFrom<RawCard> for CardRecord {
    type Error = CardEngineError;

    fn try_from(raw: RawCard) -> Result<Self> {
        let card_id = raw.card_id;
        let invalid = |source| CardEngineError::InvalidCard { card_id, source };

        let card_type = CardType::try_from(raw.char_type).map_err(invalid)?;
        let card_set = CardSet::try_from(raw.card_set_id).map_err(invalid)?;
        let stats = card_type.is_follower().then_some(Stats {
            atk: raw.atk,
            life: raw.life,
            evo_atk: raw.evo_atk,
            evo_life: raw.evo_life,
        });

        Ok(Self {
            card_id,
            base_card_id: raw.base_card_id.unwrap_or(card_id),
            card_name: raw.card_name,
            cost: raw.cost,
            faction: Faction::try_from(raw.clan).map_err(invalid)?,
            rarity: Rarity::try_from(raw.rarity).map_err(invalid)?,
            card_type,
            trait_name: raw.tribe_name.unwrap_or_default(),
            card_set,
            base_card_set: card_set,
            format: Format::try_from(raw.format_type).map_err(invalid)?,
            stats,
            ability: AbilityText {
                base: raw.skill_disc.unwrap_or_default(),
                evolved: raw.evo_skill_disc.unwrap_or_default(),
                raw_base: raw.org_skill_disc.unwrap_or_default(),
                raw_evolved: raw.org_evo_skill_disc.unwrap_or_default(),
            },
            flavor: raw.description.unwrap_or_default(),
            evo_flavor: raw.evo_description.unwrap_or_default(),
        })
    }
}
