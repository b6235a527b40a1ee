mod board;
mod maps;
mod models;

use anyhow::Context;
use board::{ListingBoard, SubmitOutcome};
use models::DraftField;
use tracing::{info, warn, Level};
use tracing_subscriber;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🍲 Community Food Share Board");
    info!("==============================");
    info!("");

    let mut board = ListingBoard::new();

    // First attempt uses a non-Gmail contact and gets bounced
    board.update_field(DraftField::Name, "Pizza");
    board.update_field(DraftField::Description, "Two trays of margherita, vegetarian");
    board.update_field(DraftField::Location, "Main St Community Hall");
    board.update_field(DraftField::Contact, "maria@hotmail.com");
    board.update_quantity("8");
    if board.submit() == SubmitOutcome::Rejected {
        warn!("Fix needed: {}", board.errors().contact);
    }

    // The draft survives the rejection; fixing the contact is enough
    board.update_field(DraftField::Contact, "maria.r@gmail.com");
    board.submit();

    // Same dish at the same spot (different case) merges instead of duplicating
    board.update_field(DraftField::Name, "pizza");
    board.update_field(DraftField::Description, "Another tray from the oven");
    board.update_field(DraftField::Location, "main st community hall");
    board.update_field(DraftField::Contact, "tomas88@gmail.com");
    board.update_quantity("4");
    board.submit();

    board.update_field(DraftField::Name, "Lentil Soup");
    board.update_field(DraftField::Description, "Vegan, still warm");
    board.update_field(DraftField::Location, "Elm Park north entrance");
    board.update_field(DraftField::Contact, "soup.kitchen@gmail.com");
    board.update_quantity("2");
    board.submit();

    // Claim the soup dry, plus one extra claim that is quietly absorbed
    let soup_id = board
        .available_listings()
        .last()
        .map(|listing| listing.id)
        .context("Soup listing missing from board")?;
    for _ in 0..3 {
        board.claim(soup_id);
    }

    info!(
        "\n✅ {} listings on the board, {} still available\n",
        board.listings().len(),
        board.available_listings().count()
    );

    for (i, listing) in board.available_listings().enumerate() {
        println!("{}. {} ({} portions)", i + 1, listing.name, listing.quantity);
        println!("   {}", listing.description);
        println!(
            "   📍 {} ({})",
            listing.location,
            maps::maps_search_url(&listing.location)
        );
        println!("   📞 {}", listing.contact);
        println!("   Shared at: {}", listing.created_at.format("%Y-%m-%d %H:%M UTC"));
        println!();
    }

    // Save the full board, depleted listings included
    let json = serde_json::to_string_pretty(board.listings())?;
    std::fs::write("food_listings.json", json).context("Failed to write board snapshot")?;
    info!("💾 Saved board snapshot to food_listings.json");

    Ok(())
}
