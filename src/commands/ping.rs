//! The `ping` command: gateway heartbeat latency via the shard manager.

use crate::model::ShardManagerContainer;
use serenity::builder::{
    CreateCommand, CreateInteractionResponse, CreateInteractionResponseMessage,
};
use serenity::model::application::CommandInteraction;
use serenity::model::channel::Message;
use serenity::prelude::*;

pub fn register() -> CreateCommand {
    CreateCommand::new("ping").description("Check the bot's gateway latency.")
}

async fn latency_line(ctx: &Context) -> String {
    let data = ctx.data.read().await;
    let Some(shard_manager) = data.get::<ShardManagerContainer>() else {
        return "Pong!".to_string();
    };
    let runners = shard_manager.runners.lock().await;
    let latency = runners.get(&ctx.shard_id).and_then(|runner| runner.latency);
    match latency {
        Some(latency) => format!("Pong! Heartbeat latency: `{:.2} ms`", latency.as_millis()),
        None => "Pong! Heartbeat latency: `N/A`".to_string(),
    }
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let response = latency_line(ctx).await;
    let builder = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new().content(response),
    );
    interaction.create_response(&ctx.http, builder).await.ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message) {
    let response = latency_line(ctx).await;
    msg.channel_id.say(&ctx.http, response).await.ok();
}
