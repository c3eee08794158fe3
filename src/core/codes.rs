use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An integer code from the card dump with no known meaning
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unknown {field} code {code}")]
pub struct UnknownCode {
    pub field: &'static str,
    pub code: i64,
}

impl UnknownCode {
    fn new(field: &'static str, code: i64) -> Self {
        Self { field, code }
    }
}

/// Craft (class) a card belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Neutral,
    Forestcraft,
    Swordcraft,
    Runecraft,
    Dragoncraft,
    Shadowcraft,
    Bloodcraft,
    Havencraft,
    Portalcraft,
}

impl Faction {
    pub fn name(self) -> &'static str {
        match self {
            Faction::Neutral => "Neutral",
            Faction::Forestcraft => "Forestcraft",
            Faction::Swordcraft => "Swordcraft",
            Faction::Runecraft => "Runecraft",
            Faction::Dragoncraft => "Dragoncraft",
            Faction::Shadowcraft => "Shadowcraft",
            Faction::Bloodcraft => "Bloodcraft",
            Faction::Havencraft => "Havencraft",
            Faction::Portalcraft => "Portalcraft",
        }
    }
}

impl TryFrom<i64> for Faction {
    type Error = UnknownCode;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Ok(match code {
            0 => Faction::Neutral,
            1 => Faction::Forestcraft,
            2 => Faction::Swordcraft,
            3 => Faction::Runecraft,
            4 => Faction::Dragoncraft,
            5 => Faction::Shadowcraft,
            6 => Faction::Bloodcraft,
            7 => Faction::Havencraft,
            8 => Faction::Portalcraft,
            _ => return Err(UnknownCode::new("faction", code)),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Bronze,
    Silver,
    Gold,
    Legendary,
}

impl Rarity {
    pub fn name(self) -> &'static str {
        match self {
            Rarity::Bronze => "Bronze",
            Rarity::Silver => "Silver",
            Rarity::Gold => "Gold",
            Rarity::Legendary => "Legendary",
        }
    }
}

impl TryFrom<i64> for Rarity {
    type Error = UnknownCode;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Ok(match code {
            1 => Rarity::Bronze,
            2 => Rarity::Silver,
            3 => Rarity::Gold,
            4 => Rarity::Legendary,
            _ => return Err(UnknownCode::new("rarity", code)),
        })
    }
}

/// Card type. Countdown amulets are listed as plain amulets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Follower,
    Amulet,
    CountdownAmulet,
    Spell,
}

impl CardType {
    pub fn name(self) -> &'static str {
        match self {
            CardType::Follower => "Follower",
            CardType::Amulet | CardType::CountdownAmulet => "Amulet",
            CardType::Spell => "Spell",
        }
    }

    pub fn is_follower(self) -> bool {
        self == CardType::Follower
    }
}

impl TryFrom<i64> for CardType {
    type Error = UnknownCode;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Ok(match code {
            1 => CardType::Follower,
            2 => CardType::Amulet,
            3 => CardType::CountdownAmulet,
            4 => CardType::Spell,
            _ => return Err(UnknownCode::new("card type", code)),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    Unlimited,
    Rotation,
}

impl Format {
    pub fn name(self) -> &'static str {
        match self {
            Format::Unlimited => "Unlimited",
            Format::Rotation => "Rotation",
        }
    }
}

impl TryFrom<i64> for Format {
    type Error = UnknownCode;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Ok(match code {
            0 => Format::Unlimited,
            1 => Format::Rotation,
            _ => return Err(UnknownCode::new("format", code)),
        })
    }
}

/// Known card sets, ordered by id.
const CARD_SETS: &[(u32, &str)] = &[
    (10000, "Basic"),
    (10001, "Classic"),
    (10002, "Darkness Evolved"),
    (10003, "Rise of Bahamut"),
    (10004, "Tempest of the Gods"),
    (10005, "Wonderland Dreams"),
    (10006, "Starforged Legends"),
    (10007, "Chronogenesis"),
    (10008, "Dawnbreak, Nightedge"),
    (10009, "Brigade of the Sky"),
    (10010, "Omen of the Ten"),
    (10011, "Altersphere"),
    (10012, "Steel Rebellion"),
    (10013, "Rebirth of Glory"),
    (10014, "Verdant Conflict"),
    (10015, "Ultimate Colosseum"),
    (10016, "World Uprooted"),
    (10017, "Fortune's Hand"),
    (10018, "Storm Over Rivayle"),
    (10019, "Eternal Awakening"),
    (10020, "Darkness Over Vellsar"),
    (10021, "Renascent Chronicles"),
    (10022, "Omen of Storms"),
    (10023, "Edge of Paradise"),
    (10024, "Roar of the Godwyrm"),
    (70001, "Prebuilt Decks 1"),
    (70002, "Prebuilt Decks 2"),
    (70003, "Prebuilt Decks 3"),
    (90000, "Token"),
];

/// A validated card set id. Higher ids are newer sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct CardSet(u32);

impl CardSet {
    pub const BASIC: CardSet = CardSet(10000);
    pub const CLASSIC: CardSet = CardSet(10001);
    pub const STORM_OVER_RIVAYLE: CardSet = CardSet(10018);
    pub const OMEN_OF_STORMS: CardSet = CardSet(10022);
    pub const TOKEN: CardSet = CardSet(90000);

    pub fn id(self) -> u32 {
        self.0
    }

    pub fn name(self) -> &'static str {
        // Only validated ids are ever constructed.
        CARD_SETS
            .binary_search_by_key(&self.0, |&(id, _)| id)
            .map(|idx| CARD_SETS[idx].1)
            .unwrap_or("Unknown Set")
    }

    /// Every recognised set, oldest first
    pub fn all() -> impl Iterator<Item = CardSet> {
        CARD_SETS.iter().map(|&(id, _)| CardSet(id))
    }
}

impl TryFrom<i64> for CardSet {
    type Error = UnknownCode;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        u32::try_from(code)
            .ok()
            .filter(|id| CARD_SETS.binary_search_by_key(id, |&(known, _)| known).is_ok())
            .map(CardSet)
            .ok_or(UnknownCode::new("card set", code))
    }
}

impl From<CardSet> for i64 {
    fn from(set: CardSet) -> Self {
        i64::from(set.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faction_codes() {
        assert_eq!(Faction::try_from(5).unwrap(), Faction::Shadowcraft);
        assert_eq!(Faction::try_from(0).unwrap().name(), "Neutral");
        assert_eq!(
            Faction::try_from(9).unwrap_err(),
            UnknownCode { field: "faction", code: 9 }
        );
    }

    #[test]
    fn test_countdown_amulet_displays_as_amulet() {
        let card_type = CardType::try_from(3).unwrap();
        assert_eq!(card_type, CardType::CountdownAmulet);
        assert_eq!(card_type.name(), "Amulet");
        assert!(!card_type.is_follower());
    }

    #[test]
    fn test_rarity_is_one_based() {
        assert!(Rarity::try_from(0).is_err());
        assert_eq!(Rarity::try_from(3).unwrap().name(), "Gold");
    }

    #[test]
    fn test_card_set_lookup() {
        let set = CardSet::try_from(10018).unwrap();
        assert_eq!(set, CardSet::STORM_OVER_RIVAYLE);
        assert_eq!(set.name(), "Storm Over Rivayle");
        assert_eq!(CardSet::OMEN_OF_STORMS.name(), "Omen of Storms");
        assert!(CardSet::try_from(10099).is_err());
        assert!(CardSet::try_from(-1).is_err());
    }

    #[test]
    fn test_card_set_table_is_sorted() {
        let ids: Vec<u32> = CardSet::all().map(CardSet::id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_card_set_serde() {
        let set: CardSet = serde_json::from_str("10003").unwrap();
        assert_eq!(set.name(), "Rise of Bahamut");
        assert_eq!(serde_json::to_string(&set).unwrap(), "10003");
        assert!(serde_json::from_str::<CardSet>("12345").is_err());
    }
}
