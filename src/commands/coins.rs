//! The `coins` command: balance display.

use crate::economy::GameError;
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
    CreateCommand::new("coins").description("Check your coin balance.")
}

async fn perform_coins(store: &CardStore, user: &User) -> CreateEmbed {
    let user_id = user.id.to_string();
    let balance = store.read(|doc| doc.player(&user_id).map(|p| p.coins)).await;
    match balance {
        Some(coins) => embeds::themed("💰 Your Coins", format!("You have **{} coins**", coins)),
        None => embeds::game_error(&GameError::NotStarted),
    }
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    interaction.defer(&ctx.http).await.ok();
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let embed = perform_coins(&app_state.store, &interaction.user).await;
    let builder = CreateInteractionResponseFollowup::new().embed(embed);
    interaction.create_followup(&ctx.http, builder).await.ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let embed = perform_coins(&app_state.store, &msg.author).await;
    let builder = CreateMessage::new().embed(embed).reference_message(msg);
    msg.channel_id.send_message(&ctx.http, builder).await.ok();
}
