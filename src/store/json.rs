use async_trait::async_trait;
use serde::Deserialize;
use std::path::PathBuf;

use crate::core::{CardRecord, RawCard};
use crate::error::Result;
use crate::store::CardSource;

/// Portal API response layout: `{"data": {"cards": [...]}}`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CardDump {
    Portal { data: PortalData },
    Bare(Vec<RawCard>),
}

#[derive(Debug, Deserialize)]
struct PortalData {
    cards: Vec<RawCard>,
}

impl CardDump {
    fn into_cards(self) -> Vec<RawCard> {
        match self {
            CardDump::Portal { data } => data.cards,
            CardDump::Bare(cards) => cards,
        }
    }
}

/// Parse a card dump, failing on the first card with an unknown code
pub fn parse_cards(json: &str) -> Result<Vec<CardRecord>> {
    let dump: CardDump = serde_json::from_str(json)?;
    dump.into_cards().into_iter().map(CardRecord::try_from).collect()
}

/// Card dump saved on disk, either the raw portal response or a bare array
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CardSource for JsonFileSource {
    async fn load(&self) -> Result<Vec<CardRecord>> {
        tracing::debug!("Reading card dump {}", self.path.display());
        let json = tokio::fs::read_to_string(&self.path).await?;
        parse_cards(&json)
    }

    fn name(&self) -> &str {
        "json-file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CardEngineError;

    const PORTAL: &str = r#"{"data": {"cards": [
        {"card_id": 100011010, "base_card_id": 100011010, "card_name": "Goblin",
         "cost": 1, "clan": 0, "rarity": 1, "char_type": 1, "tribe_name": "-",
         "card_set_id": 10000, "format_type": 1, "atk": 1, "life": 2, "evo_atk": 3, "evo_life": 4}
    ]}}"#;

    #[test]
    fn test_parse_portal_layout() {
        let cards = parse_cards(PORTAL).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].card_name.as_deref(), Some("Goblin"));
    }

    #[test]
    fn test_parse_bare_array() {
        let cards = parse_cards(
            r#"[{"card_id": 1, "card_name": null, "clan": 3, "rarity": 2,
                 "char_type": 2, "card_set_id": 10001}]"#,
        )
        .unwrap();
        assert_eq!(cards.len(), 1);
        assert!(cards[0].card_name.is_none());
    }

    #[test]
    fn test_parse_rejects_unknown_set() {
        let err = parse_cards(
            r#"[{"card_id": 5, "card_name": "X", "clan": 0, "rarity": 1,
                 "char_type": 4, "card_set_id": 12345}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, CardEngineError::InvalidCard { card_id: 5, .. }));
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(matches!(parse_cards("{not json"), Err(CardEngineError::Json(_))));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let source = JsonFileSource::new("/nonexistent/cards.json");
        assert!(matches!(source.load().await, Err(CardEngineError::Io(_))));
    }
}
