//! Common test utilities for spellbook-engine tests.
//!
//! Fixtures are trimmed-down copies of real Scryfall card objects.

#![allow(dead_code)] // Not all test files use every fixture

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::json;
use spellbook_engine::{CardFetcher, RawCard};

/// Parse a JSON fixture into a raw record.
pub fn record(value: serde_json::Value) -> RawCard {
    serde_json::from_value(value).unwrap()
}

/// An in-memory fetcher that counts its calls.
#[derive(Debug, Default)]
pub struct FakeFetcher {
    cards: HashMap<String, RawCard>,
    sets: HashMap<String, Vec<RawCard>>,
    card_calls: AtomicUsize,
    set_calls: AtomicUsize,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make a record resolvable by its full name and each face name.
    pub fn with_card(mut self, card: RawCard) -> Self {
        for face in card.faces() {
            if let Some(name) = &face.name {
                self.cards.insert(name.clone(), card.clone());
            }
        }
        self.cards.insert(card.name.clone(), card);
        self
    }

    /// Make `alias` resolve to the record registered under `name`.
    pub fn with_alias(mut self, alias: &str, name: &str) -> Self {
        let card = self.cards[name].clone();
        self.cards.insert(alias.to_string(), card);
        self
    }

    pub fn with_set(mut self, code: &str, cards: Vec<RawCard>) -> Self {
        self.sets.insert(code.to_string(), cards);
        self
    }

    pub fn card_calls(&self) -> usize {
        self.card_calls.load(Ordering::SeqCst)
    }

    pub fn set_calls(&self) -> usize {
        self.set_calls.load(Ordering::SeqCst)
    }
}

fn not_found(what: &str) -> spellbook::Error {
    spellbook::Error::Api {
        status: 404,
        code: "not_found".to_string(),
        details: format!("No cards found matching “{}”", what),
    }
}

impl CardFetcher for FakeFetcher {
    fn fetch_card(&self, name: &str) -> spellbook::Result<RawCard> {
        self.card_calls.fetch_add(1, Ordering::SeqCst);
        self.cards.get(name).cloned().ok_or_else(|| not_found(name))
    }

    fn fetch_set(&self, code: &str) -> spellbook::Result<Vec<RawCard>> {
        self.set_calls.fetch_add(1, Ordering::SeqCst);
        self.sets.get(code).cloned().ok_or_else(|| not_found(code))
    }
}

pub fn jukai_preserver_json() -> serde_json::Value {
    json!({
        "object": "card",
        "id": "7fb3a4de-3e8f-4ae7-b2d8-0e3fd1c1fd73",
        "oracle_id": "4e9b2cd9-a0c0-4c0e-9e1e-4e1e2a4a0d8a",
        "arena_id": 79668,
        "name": "Jukai Preserver",
        "layout": "normal",
        "uri": "https://api.scryfall.com/cards/7fb3a4de-3e8f-4ae7-b2d8-0e3fd1c1fd73",
        "scryfall_uri": "https://scryfall.com/card/neo/188/jukai-preserver",
        "mana_cost": "{3}{G}",
        "cmc": 4.0,
        "type_line": "Creature — Human Druid",
        "oracle_text": "When Jukai Preserver enters the battlefield, put a +1/+1 counter on target creature you control.\nChannel — {2}{G}, Discard Jukai Preserver: Put a +1/+1 counter on each of up to two target creatures you control.",
        "power": "3",
        "toughness": "3",
        "colors": ["G"],
        "color_identity": ["G"],
        "keywords": ["Channel"],
        "set": "neo",
        "set_name": "Kamigawa: Neon Dynasty",
        "rarity": "common",
        "collector_number": "188"
    })
}

pub fn jukai_preserver() -> RawCard {
    record(jukai_preserver_json())
}

pub fn bonecrusher_giant() -> RawCard {
    record(json!({
        "object": "card",
        "id": "09fd2d9c-1793-4beb-a3fb-7a869f660cd4",
        "oracle_id": "ef3a3d2f-3a6b-4d2d-9f8e-1dfb3d0b36d9",
        "arena_id": 70303,
        "name": "Bonecrusher Giant // Stomp",
        "layout": "adventure",
        "mana_cost": "{2}{R} // {1}{R}",
        "cmc": 3.0,
        "type_line": "Creature — Giant // Instant — Adventure",
        "power": "4",
        "toughness": "3",
        "colors": ["R"],
        "color_identity": ["R"],
        "keywords": [],
        "card_faces": [
            {
                "object": "card_face",
                "name": "Bonecrusher Giant",
                "mana_cost": "{2}{R}",
                "type_line": "Creature — Giant",
                "oracle_text": "Whenever Bonecrusher Giant becomes the target of a spell, Bonecrusher Giant deals 2 damage to that spell's controller.",
                "power": "4",
                "toughness": "3"
            },
            {
                "object": "card_face",
                "name": "Stomp",
                "mana_cost": "{1}{R}",
                "type_line": "Instant — Adventure",
                "oracle_text": "Damage can't be prevented this turn. Stomp deals 2 damage to any target. (Then exile this card. You may cast the creature later from exile.)"
            }
        ],
        "set": "eld",
        "set_name": "Throne of Eldraine",
        "rarity": "rare",
        "collector_number": "115"
    }))
}

pub fn boseiju_reaches_skyward() -> RawCard {
    record(json!({
        "object": "card",
        "id": "c1e1b4cf-9b1e-4d8f-9c36-4e6bda4a1f0e",
        "oracle_id": "b0b1b1a6-0c54-4d04-8a0c-3c0d0a3e0f11",
        "name": "Boseiju Reaches Skyward // Branch of Boseiju",
        "layout": "transform",
        "cmc": 4.0,
        "type_line": "Enchantment — Saga // Enchantment Creature — Plant",
        "color_identity": ["G"],
        "keywords": ["Reach"],
        "card_faces": [
            {
                "object": "card_face",
                "name": "Boseiju Reaches Skyward",
                "mana_cost": "{3}{G}",
                "type_line": "Enchantment — Saga",
                "oracle_text": "(As this Saga enters and after your draw step, add a lore counter.)\nI — Search your library for up to two basic land cards, reveal them, put them into your hand, then shuffle.\nII — Put up to one target land card from your graveyard on top of your library.\nIII — Exile this Saga, then return it to the battlefield transformed under your control.",
                "colors": ["G"]
            },
            {
                "object": "card_face",
                "name": "Branch of Boseiju",
                "mana_cost": "",
                "type_line": "Enchantment Creature — Plant",
                "oracle_text": "Reach\nBranch of Boseiju gets +1/+1 for each land you control.",
                "colors": ["G"],
                "power": "0",
                "toughness": "1"
            }
        ],
        "set": "neo",
        "set_name": "Kamigawa: Neon Dynasty",
        "rarity": "uncommon",
        "collector_number": "177"
    }))
}

pub fn shatterskull_smashing() -> RawCard {
    record(json!({
        "object": "card",
        "id": "6b3d3a5b-6f0c-4b1e-a1d6-2d9b4f2d0e7c",
        "oracle_id": "5a8b3f8d-1b4c-4f0d-8e25-7f5d0b2d3a44",
        "name": "Shatterskull Smashing // Shatterskull, the Hammer Pass",
        "layout": "modal_dfc",
        "cmc": 2.0,
        "type_line": "Sorcery // Land",
        "color_identity": ["R"],
        "produced_mana": ["R"],
        "keywords": [],
        "card_faces": [
            {
                "object": "card_face",
                "name": "Shatterskull Smashing",
                "mana_cost": "{X}{R}{R}",
                "type_line": "Sorcery",
                "oracle_text": "Shatterskull Smashing deals X damage divided as you choose among up to two target creatures and/or planeswalkers. If X is 6 or more, Shatterskull Smashing deals twice X damage divided as you choose among them instead.",
                "colors": ["R"]
            },
            {
                "object": "card_face",
                "name": "Shatterskull, the Hammer Pass",
                "mana_cost": "",
                "type_line": "Land",
                "oracle_text": "As Shatterskull, the Hammer Pass enters the battlefield, you may pay 3 life. If you don't, it enters the battlefield tapped.\n{T}: Add {R}.",
                "colors": []
            }
        ],
        "set": "znr",
        "set_name": "Zendikar Rising",
        "rarity": "mythic",
        "collector_number": "161"
    }))
}

pub fn fire_ice() -> RawCard {
    record(json!({
        "object": "card",
        "id": "bdc7f3a5-52d9-4a1a-8ed4-4dc6f3d1a3c9",
        "name": "Fire // Ice",
        "layout": "split",
        "mana_cost": "{1}{R} // {1}{U}",
        "cmc": 4.0,
        "type_line": "Instant // Instant",
        "colors": ["U", "R"],
        "color_identity": ["U", "R"],
        "keywords": [],
        "card_faces": [
            {
                "object": "card_face",
                "name": "Fire",
                "mana_cost": "{1}{R}",
                "type_line": "Instant",
                "oracle_text": "Fire deals 2 damage divided as you choose among one or two targets."
            },
            {
                "object": "card_face",
                "name": "Ice",
                "mana_cost": "{1}{U}",
                "type_line": "Instant",
                "oracle_text": "Tap target permanent.\nDraw a card."
            }
        ],
        "set": "mh2",
        "rarity": "uncommon",
        "collector_number": "290"
    }))
}

pub fn akki_lavarunner() -> RawCard {
    record(json!({
        "object": "card",
        "id": "3b0e1f7a-2a1d-4f57-8f5d-7c4b0f4ad9b2",
        "name": "Akki Lavarunner // Tok-Tok, Volcano Born",
        "layout": "flip",
        "mana_cost": "{3}{R}",
        "cmc": 4.0,
        "type_line": "Creature — Goblin Warrior // Legendary Creature — Goblin Shaman",
        "colors": ["R"],
        "color_identity": ["R"],
        "keywords": ["Haste"],
        "card_faces": [
            {
                "object": "card_face",
                "name": "Akki Lavarunner",
                "mana_cost": "{3}{R}",
                "type_line": "Creature — Goblin Warrior",
                "oracle_text": "Haste\nWhenever Akki Lavarunner deals damage to an opponent, flip it.",
                "power": "1",
                "toughness": "1"
            },
            {
                "object": "card_face",
                "name": "Tok-Tok, Volcano Born",
                "mana_cost": "",
                "type_line": "Legendary Creature — Goblin Shaman",
                "oracle_text": "Protection from red\nIf a red source would deal damage to a player, it deals that much damage plus 1 to that player instead.",
                "power": "2",
                "toughness": "2"
            }
        ],
        "set": "chk",
        "rarity": "rare",
        "collector_number": "153"
    }))
}

fn meld_parts() -> serde_json::Value {
    json!([
        {"object": "related_card", "id": "g", "component": "meld_part", "name": "Gisela, the Broken Blade"},
        {"object": "related_card", "id": "b", "component": "meld_part", "name": "Bruna, the Fading Light"},
        {"object": "related_card", "id": "r", "component": "meld_result", "name": "Brisela, Voice of Nightmares"}
    ])
}

pub fn gisela() -> RawCard {
    record(json!({
        "object": "card",
        "id": "c75c035a-7da9-4b36-982d-fca8220b1797",
        "name": "Gisela, the Broken Blade",
        "layout": "meld",
        "mana_cost": "{2}{W}{W}",
        "cmc": 4.0,
        "type_line": "Legendary Creature — Angel Horror",
        "oracle_text": "Flying, first strike, lifelink\nAt the beginning of your end step, if you both own and control Gisela, the Broken Blade and a creature named Bruna, the Fading Light, exile them, then meld them into Brisela, Voice of Nightmares.",
        "power": "4",
        "toughness": "3",
        "colors": ["W"],
        "color_identity": ["W"],
        "keywords": ["Flying", "First strike", "Lifelink", "Meld"],
        "all_parts": meld_parts(),
        "set": "emn",
        "rarity": "mythic",
        "collector_number": "28"
    }))
}

pub fn brisela() -> RawCard {
    record(json!({
        "object": "card",
        "id": "5a7a49ea-e4d5-4a1c-9c9f-7d8a5a8a2b0e",
        "name": "Brisela, Voice of Nightmares",
        "layout": "meld",
        "mana_cost": "",
        "cmc": 0.0,
        "type_line": "Legendary Creature — Eldrazi Angel",
        "oracle_text": "Flying, first strike, vigilance, lifelink\nYour opponents can't cast spells with mana value 3 or less.",
        "power": "9",
        "toughness": "10",
        "colors": ["W"],
        "color_identity": ["W"],
        "all_parts": meld_parts(),
        "set": "emn",
        "rarity": "mythic",
        "collector_number": "15b"
    }))
}

pub fn phyrexian_fleshgorger() -> RawCard {
    record(json!({
        "object": "card",
        "id": "0a9d6f0b-8a0b-4f53-9e6e-5e9b0f6c1b2d",
        "name": "Phyrexian Fleshgorger",
        "layout": "prototype",
        "mana_cost": "{7}",
        "cmc": 7.0,
        "type_line": "Artifact Creature — Phyrexian Wurm",
        "oracle_text": "Prototype {1}{B}{B} — 3/3 (You may cast this spell with different mana cost, color, and size. It keeps its abilities and types.)\nMenace, lifelink, ward—Pay life equal to Phyrexian Fleshgorger's power.",
        "power": "7",
        "toughness": "5",
        "colors": [],
        "color_identity": ["B"],
        "keywords": ["Menace", "Lifelink", "Ward", "Prototype"],
        "set": "bro",
        "rarity": "mythic",
        "collector_number": "121"
    }))
}

pub fn basic_land(name: &str, number: &str) -> RawCard {
    record(json!({
        "object": "card",
        "id": format!("ba51c000-0000-0000-0000-{:0>12}", number),
        "name": name,
        "layout": "normal",
        "mana_cost": "",
        "cmc": 0.0,
        "type_line": format!("Basic Land — {}", name),
        "colors": [],
        "color_identity": [],
        "set": "neo",
        "rarity": "common",
        "collector_number": number
    }))
}

/// Another printing of Jukai Preserver (different id).
pub fn jukai_preserver_showcase() -> RawCard {
    let mut value = jukai_preserver_json();
    value["id"] = json!("aa11bb22-0000-4000-8000-000000000399");
    value["collector_number"] = json!("399");
    record(value)
}
