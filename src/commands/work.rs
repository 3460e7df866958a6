//! The `work` command: cooldown-gated coins plus a random card, with an
//! optional heads/tails side call that doubles or halves the payout.

use crate::economy::rewards::{self, CoinCall};
use crate::model::AppState;
use crate::store::CardStore;
use crate::ui::embeds;
use chrono::Utc;
use serenity::builder::{
    CreateCommand, CreateCommandOption, CreateEmbed, CreateInteractionResponseFollowup,
    CreateMessage,
};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use serenity::model::user::User;
use serenity::prelude::*;

pub fn register() -> CreateCommand {
    CreateCommand::new("work")
        .description("Work for coins and a random card.")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "call",
                "Optional coin flip: double your pay if you call it right, half if wrong.",
            )
            .add_string_choice("Heads", "heads")
            .add_string_choice("Tails", "tails"),
        )
}

async fn perform_work(store: &CardStore, user: &User, call: Option<CoinCall>) -> CreateEmbed {
    let user_id = user.id.to_string();
    let result = store
        .update(|doc| rewards::grant_work(doc, &user_id, Utc::now(), call, &mut rand::rng()))
        .await;
    match result {
        Ok(reward) => {
            let mut lines = vec![format!("💰 You earned `{}` coins.", reward.coins_earned)];
            if let Some(flip) = reward.flip {
                let landed = match flip.landed {
                    CoinCall::Heads => "heads",
                    CoinCall::Tails => "tails",
                };
                if flip.won {
                    lines.push(format!("🪙 The coin landed **{landed}** — pay doubled!"));
                } else {
                    lines.push(format!("🪙 The coin landed **{landed}** — pay halved."));
                }
            }
            lines.push(format!("🃏 You drew **{}**!", reward.card.display()));
            embeds::drawn_card("💼 Work Complete!", &lines, &reward.card)
        }
        Err(e) => embeds::game_error(&e),
    }
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    interaction.defer(&ctx.http).await.ok();
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let call = interaction
        .data
        .options
        .iter()
        .find(|opt| opt.name == "call")
        .and_then(|opt| opt.value.as_str())
        .and_then(CoinCall::parse);
    let embed = perform_work(&app_state.store, &interaction.user, call).await;
    let builder = CreateInteractionResponseFollowup::new().embed(embed);
    interaction.create_followup(&ctx.http, builder).await.ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message, args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let call = args.first().and_then(|s| CoinCall::parse(s));
    let embed = perform_work(&app_state.store, &msg.author, call).await;
    let builder = CreateMessage::new().embed(embed).reference_message(msg);
    msg.channel_id.send_message(&ctx.http, builder).await.ok();
}
