//! Embed construction helpers shared by commands and interaction handlers.

use crate::constants::EMBED_COLOR;
use crate::economy::{DrawnCard, GameError, cooldown};
use serenity::builder::{CreateEmbed, CreateEmbedFooter};

pub fn themed(title: impl Into<String>, description: impl Into<String>) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .description(description)
        .color(EMBED_COLOR)
}

pub fn error(title: impl Into<String>, description: impl Into<String>) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .description(description)
        .color(0xFF0000)
}

/// One page of the card browser.
pub fn collection_page(card: &str, index: usize, total: usize) -> CreateEmbed {
    CreateEmbed::new()
        .title("📚 Your Cards")
        .description(format!("🃏 {}", card))
        .footer(CreateEmbedFooter::new(format!(
            "Card {} of {}",
            index + 1,
            total
        )))
        .color(EMBED_COLOR)
}

/// A freshly drawn card with its image.
pub fn drawn_card(title: &str, lines: &[String], card: &DrawnCard) -> CreateEmbed {
    themed(title, lines.join("\n")).image(card.image.clone())
}

/// Uniform rendering for the user-facing error taxonomy. Every error is a
/// terminal reply for that one command, never a crash.
pub fn game_error(err: &GameError) -> CreateEmbed {
    match err {
        GameError::NotStarted => themed("Not started yet", "Use `start` first 💜"),
        GameError::AlreadyStarted => themed("Welcome back", "You already started 💜"),
        GameError::OnCooldown { remaining } => error(
            "On Cooldown",
            format!(
                "You can do that again in **{}**.",
                cooldown::format_duration(*remaining)
            ),
        ),
        GameError::EmptyCatalog => error("No cards loaded", "⚠ The card catalog is empty!"),
    }
}
