//! Batched calls: several actions, one HTTP request.
//!
//! Run with: cargo run --example batch

use ranki::AnkiClient;

#[tokio::main]
async fn main() -> ranki::Result<()> {
    let client = AnkiClient::new();

    // ----- dashboard numbers in a single round trip -----
    let batch = client.batch();

    let due = batch.cards().find("is:due")?;
    let fresh = batch.cards().find("is:new")?;
    let suspended = batch.cards().find("is:suspended")?;
    let decks = batch.decks().names()?;
    let reviewed = batch.statistics().cards_reviewed_today()?;

    // nothing has been sent yet; the first resolve dispatches all five
    println!("due:       {}", batch.resolve(due).await?.len());
    println!("new:       {}", batch.resolve(fresh).await?.len());
    println!("suspended: {}", batch.resolve(suspended).await?.len());
    println!("decks:     {}", batch.resolve(decks).await?.len());
    println!("reviewed:  {}", batch.resolve(reviewed).await?);

    // ----- explicit flush, then read results -----
    let batch = client.batch();
    let cards = batch.cards().in_deck("Default")?;
    let stats = batch.decks().stats(&["Default"])?;

    batch.dispatch().await?; // one request for both

    let cards = batch.resolve(cards).await?;
    let stats = batch.resolve(stats).await?;
    println!("\nDefault deck: {} cards", cards.len());
    for (deck_id, deck) in stats {
        println!("  {deck_id}: {} due for review", deck.review_count);
    }

    Ok(())
}
