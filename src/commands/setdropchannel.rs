//! Admin-only `setdropchannel` command (slash only): points the passive drop
//! task at a channel for this guild.

use crate::model::AppState;
use serenity::builder::{
    CreateCommand, CreateCommandOption, CreateInteractionResponse,
    CreateInteractionResponseMessage, EditInteractionResponse,
};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::prelude::*;
use tracing::info;

pub fn register() -> CreateCommand {
    CreateCommand::new("setdropchannel")
        .description("Set the channel for passive card drops (admin only).")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Channel,
                "channel",
                "Channel to drop cards into (defaults to this one).",
            ),
        )
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    interaction
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Defer(
                CreateInteractionResponseMessage::new().ephemeral(true),
            ),
        )
        .await
        .ok();
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    if !app_state.is_admin(interaction.user.id.get()) {
        interaction
            .edit_response(
                &ctx.http,
                EditInteractionResponse::new().content("You are not permitted to configure drops."),
            )
            .await
            .ok();
        return;
    }
    let Some(guild_id) = interaction.guild_id else {
        interaction
            .edit_response(
                &ctx.http,
                EditInteractionResponse::new().content("Drops can only be configured in a server."),
            )
            .await
            .ok();
        return;
    };
    let channel_id = interaction
        .data
        .options
        .iter()
        .find(|opt| opt.name == "channel")
        .and_then(|opt| opt.value.as_channel_id())
        .unwrap_or(interaction.channel_id);

    let result: Result<(), crate::economy::GameError> = app_state
        .store
        .update(|doc| {
            doc.drop_channels
                .insert(guild_id.to_string(), channel_id.to_string());
            Ok(())
        })
        .await;
    // The closure is infallible; update only propagates closure errors.
    result.ok();

    info!(target: "config", guild = %guild_id, channel = %channel_id, "drop channel set");
    interaction
        .edit_response(
            &ctx.http,
            EditInteractionResponse::new()
                .content(format!("Passive drops will land in <#{}>.", channel_id)),
        )
        .await
        .ok();
}
