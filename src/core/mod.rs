pub mod card;
pub mod codes;
pub mod search_response;

pub use card::{link_variants, AbilityText, CardRecord, RawCard, Stats, TOKEN_ID_THRESHOLD};
pub use codes::{CardSet, CardType, Faction, Format, Rarity, UnknownCode};
pub use search_response::{SearchResponse, SearchStrategy};
