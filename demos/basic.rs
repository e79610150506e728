//! Basic usage: connect, look around, inspect some cards.
//!
//! Run with: cargo run --example basic
//! (Anki must be running with the AnkiConnect add-on installed.)

use ranki::AnkiClient;

#[tokio::main]
async fn main() -> ranki::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = AnkiClient::new();

    // verify AnkiConnect is reachable
    let version = client.misc().version().await?;
    println!("connected to AnkiConnect v{version}");

    println!("\ndecks:");
    for (name, id) in client.decks().names_and_ids().await? {
        println!("  {name} (id {id})");
    }

    let due = client.cards().find("is:due").await?;
    println!("\n{} cards due", due.len());

    if !due.is_empty() {
        let sample = &due[..due.len().min(5)];
        let info = client.cards().info(sample).await?;
        for card in info {
            println!(
                "  card {} in {:?}: interval {}d, ease {}, {} lapses",
                card.card_id, card.deck_name, card.interval, card.ease_factor, card.lapses
            );
        }
    }

    let reviewed = client.statistics().cards_reviewed_today().await?;
    println!("\ncards reviewed today: {reviewed}");

    Ok(())
}
