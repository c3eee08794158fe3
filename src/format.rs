//! Plain-text card summaries for terminal output.

use std::fmt;

use crate::core::CardRecord;

/// A titled block of text inside a summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub body: String,
}

/// Human-readable rendering of one card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSummary {
    pub title: String,
    pub description: String,
    pub sections: Vec<Section>,
}

fn ability_text(raw: &str) -> String {
    raw.replace("<br>", "\n")
}

impl CardSummary {
    pub fn of(card: &CardRecord) -> Self {
        let title = card
            .effective_name()
            .map(|name| name.into_owned())
            .unwrap_or_else(|| format!("#{}", card.card_id));
        let description = format!(
            "{}pp {} {} {}\nTrait: {}\nCard Set: {}",
            card.cost,
            card.faction.name(),
            card.rarity.name(),
            card.card_type.name(),
            card.trait_name,
            card.card_set.name()
        );

        let sections = match card.stats {
            Some(stats) => vec![
                Section {
                    name: "Base".to_string(),
                    body: format!("{}/{}\n{}", stats.atk, stats.life, ability_text(&card.ability.base)),
                },
                Section {
                    name: "Evolved".to_string(),
                    body: format!(
                        "{}/{}\n{}",
                        stats.evo_atk,
                        stats.evo_life,
                        ability_text(&card.ability.evolved)
                    ),
                },
            ],
            None => vec![Section {
                name: card.card_type.name().to_string(),
                body: ability_text(&card.ability.base),
            }],
        };

        Self {
            title,
            description,
            sections,
        }
    }
}

impl fmt::Display for CardSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.description)?;
        for section in &self.sections {
            writeln!(f)?;
            writeln!(f, "[{}]", section.name)?;
            writeln!(f, "{}", section.body.trim_end())?;
        }
        Ok(())
    }
}

/// One line per card: `"{card_id}: {name}"`
pub fn card_list(cards: &[CardRecord]) -> String {
    cards
        .iter()
        .map(|card| {
            let name = card.effective_name().unwrap_or_default();
            format!("{}: {}", card.card_id, name)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
