//! The `daily` command: a fixed 500-coin reward plus a card, once per day.

use crate::economy::rewards;
use crate::model::AppState;
use crate::store::CardStore;
use crate::ui::embeds;
use chrono::Utc;
use serenity::builder::{
    CreateCommand, CreateEmbed, CreateInteractionResponseFollowup, CreateMessage,
};
use serenity::model::application::CommandInteraction;
use serenity::model::channel::Message;
use serenity::model::user::User;
use serenity::prelude::*;

pub fn register() -> CreateCommand {
    CreateCommand::new("daily").description("Claim your daily reward and a random card.")
}

async fn perform_daily(store: &CardStore, user: &User) -> CreateEmbed {
    let user_id = user.id.to_string();
    let result = store
        .update(|doc| rewards::grant_daily(doc, &user_id, Utc::now(), &mut rand::rng()))
        .await;
    match result {
        Ok(reward) => {
            let lines = vec![
                format!("💰 You received `{}` coins.", reward.coins),
                format!("🃏 You drew **{}**!", reward.card.display()),
            ];
            embeds::drawn_card("📅 Daily Reward!", &lines, &reward.card)
        }
        Err(e) => embeds::game_error(&e),
    }
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    interaction.defer(&ctx.http).await.ok();
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let embed = perform_daily(&app_state.store, &interaction.user).await;
    let builder = CreateInteractionResponseFollowup::new().embed(embed);
    interaction.create_followup(&ctx.http, builder).await.ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let embed = perform_daily(&app_state.store, &msg.author).await;
    let builder = CreateMessage::new().embed(embed).reference_message(msg);
    msg.channel_id.send_message(&ctx.http, builder).await.ok();
}
