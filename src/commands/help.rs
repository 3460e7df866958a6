//! The `help` command: static overview of the command surface.

use crate::constants::EMBED_COLOR;
use serenity::builder::{
    CreateCommand, CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage,
    CreateMessage,
};
use serenity::model::application::CommandInteraction;
use serenity::model::channel::Message;
use serenity::prelude::*;

pub fn register() -> CreateCommand {
    CreateCommand::new("help").description("List all commands.")
}

fn help_embed(prefix: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("💜 K-POP and T-POP Card Bot!")
        .description("Collect cards, earn coins, and flex your collection ✨")
        .field(
            "🎮 Getting Started",
            format!(
                "`{p}start` → Get starter coins + first card\n`{p}coins` → Check balance",
                p = prefix
            ),
            false,
        )
        .field(
            "💼 Rewards",
            format!(
                "`{p}work [heads|tails]` → Coins + random card\n`{p}daily` → Big reward + card",
                p = prefix
            ),
            false,
        )
        .field(
            "📚 Collection",
            format!("`{p}mycards` → View your cards", p = prefix),
            false,
        )
        .color(EMBED_COLOR)
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let prefix = match crate::model::AppState::from_ctx(ctx).await {
        Some(state) => state.prefix.read().await.clone(),
        None => "!".to_string(),
    };
    let builder = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new().embed(help_embed(&prefix)),
    );
    interaction.create_response(&ctx.http, builder).await.ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message) {
    let prefix = match crate::model::AppState::from_ctx(ctx).await {
        Some(state) => state.prefix.read().await.clone(),
        None => "!".to_string(),
    };
    let builder = CreateMessage::new().embed(help_embed(&prefix));
    msg.channel_id.send_message(&ctx.http, builder).await.ok();
}
