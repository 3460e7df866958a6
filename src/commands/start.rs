//! The `start` command: creates the player record with starter coins and a
//! first drawn card. Safe to re-invoke; a started player is never mutated.

use crate::economy::rewards;
use crate::model::AppState;
use crate::store::CardStore;
use crate::ui::embeds;
use serenity::builder::{
    CreateCommand, CreateEmbed, CreateInteractionResponseFollowup, CreateMessage,
};
use serenity::model::application::CommandInteraction;
use serenity::model::channel::Message;
use serenity::model::user::User;
use serenity::prelude::*;

pub fn register() -> CreateCommand {
    CreateCommand::new("start").description("Get starter coins and your first card.")
}

async fn perform_start(store: &CardStore, user: &User) -> CreateEmbed {
    let user_id = user.id.to_string();
    let result = store
        .update(|doc| rewards::grant_starter(doc, &user_id, &mut rand::rng()))
        .await;
    match result {
        Ok(reward) => {
            let lines = vec![
                "You received:".to_string(),
                format!("💰 {} coins", reward.coins),
                format!("🃏 {}", reward.card.display()),
            ];
            embeds::drawn_card("🎉 Welcome!", &lines, &reward.card)
        }
        Err(e) => embeds::game_error(&e),
    }
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    interaction.defer(&ctx.http).await.ok();
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let embed = perform_start(&app_state.store, &interaction.user).await;
    let builder = CreateInteractionResponseFollowup::new().embed(embed);
    interaction.create_followup(&ctx.http, builder).await.ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let embed = perform_start(&app_state.store, &msg.author).await;
    let builder = CreateMessage::new().embed(embed).reference_message(msg);
    msg.channel_id.send_message(&ctx.http, builder).await.ok();
}
