#![allow(dead_code)]

use kissbot_card_engine::core::{link_variants, CardRecord, CardSet, CardType, Faction, Rarity, Stats};

pub fn set(id: i64) -> CardSet {
    CardSet::try_from(id).unwrap()
}

pub fn card(id: i64, name: &str, set_id: i64) -> CardRecord {
    CardRecord::new(id, name, set(set_id))
}

pub fn follower(id: i64, name: &str, set_id: i64, stats: (i64, i64, i64, i64)) -> CardRecord {
    let mut c = card(id, name, set_id);
    c.card_type = CardType::Follower;
    c.stats = Some(Stats {
        atk: stats.0,
        life: stats.1,
        evo_atk: stats.2,
        evo_life: stats.3,
    });
    c
}

pub fn variant_of(base: &CardRecord, id: i64, set_id: i64) -> CardRecord {
    let mut c = base.clone();
    c.card_id = id;
    c.base_card_id = base.card_id;
    c.card_set = set(set_id);
    c
}

pub fn linked(mut cards: Vec<CardRecord>) -> Vec<CardRecord> {
    link_variants(&mut cards);
    cards
}

pub fn ids(cards: &[&CardRecord]) -> Vec<i64> {
    cards.iter().map(|c| c.card_id).collect()
}

pub fn names(cards: &[&CardRecord]) -> Vec<String> {
    cards
        .iter()
        .map(|c| c.effective_name().unwrap_or_default().into_owned())
        .collect()
}

/// Medusa family plus a card that only mentions Medusa in its text
pub fn medusa_cards() -> Vec<CardRecord> {
    let mut medusa = follower(1, "Medusa", 10003, (2, 3, 4, 5));
    medusa.faction = Faction::Shadowcraft;
    medusa.rarity = Rarity::Legendary;

    let venomfang = follower(4, "Venomfang Medusa", 10004, (3, 3, 5, 5));
    let venomfang_alt = variant_of(&venomfang, 5, 10010);

    let mut priestess = follower(7, "Snake Priestess", 10020, (1, 2, 3, 4));
    priestess.ability.base = "Fanfare: Summon a Medusa.".to_string();

    linked(vec![
        medusa,
        follower(2, "Medusa, Evil-Eyed Serpent", 10013, (4, 4, 6, 6)),
        follower(3, "Sweet-Tooth Medusa", 10012, (2, 2, 4, 4)),
        venomfang,
        venomfang_alt,
        card(6, "Medusa's Gaze", 10005),
        priestess,
        follower(8, "Bellringer Angel", 10001, (0, 2, 2, 4)),
    ])
}

/// Nephthys, its prebuilt-deck alternate art and a namesake
pub fn nephthys_cards() -> Vec<CardRecord> {
    let mut nephthys = follower(100534010, "Nephthys", 10001, (5, 5, 7, 7));
    nephthys.faction = Faction::Shadowcraft;
    nephthys.rarity = Rarity::Legendary;
    nephthys.ability.base = "Fanfare: Summon followers from your deck.".to_string();
    let alt = variant_of(&nephthys, 700534010, 70002);

    linked(vec![
        nephthys,
        alt,
        follower(110534010, "Nephthys, Goddess of Amenta", 10020, (5, 5, 7, 7)),
    ])
}

/// Cards differing in exactly one of cost, faction, rarity or type
pub fn keyword_cards() -> Vec<CardRecord> {
    let shadow_gold_spell = |id: i64, name: &str, cost: i64| {
        let mut c = card(id, name, 10003);
        c.cost = cost;
        c.faction = Faction::Shadowcraft;
        c.rarity = Rarity::Gold;
        c.card_type = CardType::Spell;
        c.ability.base = "Deal 3 damage to an enemy.".to_string();
        c
    };

    let mut follower_version = shadow_gold_spell(2, "Lurching Corpse", 6);
    follower_version.card_type = CardType::Follower;
    follower_version.stats = Some(Stats { atk: 5, life: 5, evo_atk: 7, evo_life: 7 });

    let mut silver = shadow_gold_spell(3, "Spirit Reaper", 6);
    silver.rarity = Rarity::Silver;

    let mut blood = shadow_gold_spell(5, "Crimson Rite", 6);
    blood.faction = Faction::Bloodcraft;

    vec![
        shadow_gold_spell(1, "Cursed Requiem", 6),
        follower_version,
        silver,
        shadow_gold_spell(4, "Mirror of Death", 5),
        blood,
    ]
}

/// Two cards from storm-named sets and one with the Storm ability
pub fn storm_cards() -> Vec<CardRecord> {
    let mut storm = follower(3, "Seabrand Dragon", 10001, (3, 2, 5, 4));
    storm.ability.base = "Storm.".to_string();

    vec![
        follower(1, "Ghostly Rider", 10018, (2, 2, 4, 4)),
        follower(2, "Flame Soldier", 10022, (1, 1, 3, 3)),
        storm,
    ]
}
