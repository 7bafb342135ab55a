//! Example: Looking up cards on Scryfall.
//!
//! Demonstrates exact and fuzzy name lookups and a paginated search.
//!
//! Run with: cargo run --example lookup

use spellbook::{Error, ScryfallClient};

#[tokio::main]
async fn main() -> spellbook::Result<()> {
    let client = ScryfallClient::builder()
        .user_agent("spellbook-example/0.1")
        .build();

    // ========== EXACT NAME ==========
    let card = client.cards().named("Jukai Preserver").await?;
    println!(
        "{} {} ({})",
        card.name,
        card.mana_cost.as_deref().unwrap_or_default(),
        card.layout
    );

    // ========== FUZZY NAME ==========
    match client.cards().fuzzy("bonecrusher gaint").await {
        Ok(card) => {
            println!("Fuzzy match: {}", card.name);
            for face in card.faces() {
                println!("  face: {:?}", face.name);
            }
        }
        Err(Error::Api { code, details, .. }) => println!("No match ({}): {}", code, details),
        Err(e) => return Err(e),
    }

    // ========== SEARCH ==========
    let printings = client.cards().search("!\"Fire // Ice\"").await?;
    println!("\nFire // Ice has {} printings", printings.len());
    for card in printings.iter().take(5) {
        println!("  {} #{}", card.set.to_uppercase(), card.collector_number);
    }

    Ok(())
}
