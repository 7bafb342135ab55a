//! Example: Resolving card names through the cache.
//!
//! Looks up a few (partly misspelled) names, shows how they converge on one
//! card each, then loads a set.
//!
//! Run with: cargo run --example resolve

use std::sync::Arc;

use spellbook_engine::{CardManager, ImageSize, ScryfallFetcher};

fn main() -> spellbook_engine::Result<()> {
    let manager = CardManager::new(ScryfallFetcher::new()?);

    let names = [
        "Bonecrusher Giant",
        "bonecrusher gaint",
        "Shatterskull Smashing",
        "Not A Real Card Name",
    ];

    for name in names {
        match manager.from_name(name)? {
            Some(card) => {
                println!("{:<24} -> {} [{}]", name, card.full_name(), card.layout());
                for face in card.faces() {
                    println!(
                        "    {} ({}) {} cmc={} colors={}",
                        face.name, face.side, face.mana_cost, face.cmc, face.colors
                    );
                }
            }
            None => println!("{:<24} -> unresolvable", name),
        }
    }

    let a = manager.from_name("Bonecrusher Giant")?;
    let b = manager.from_name("bonecrusher gaint")?;
    if let (Some(a), Some(b)) = (a, b) {
        println!("\nsame instance: {}", Arc::ptr_eq(&a, &b));
        println!("image: {}", a.image(ImageSize::Large));
    }

    let neo = manager.from_set("neo")?;
    println!("\nNEO has {} non-basic cards", neo.len());
    println!("{} canonical cards cached", manager.len());

    Ok(())
}
