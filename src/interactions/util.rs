//! Shared interaction helpers (single defer + safe edit wrapper).

use serenity::builder::EditMessage;
use serenity::model::application::ComponentInteraction;
use serenity::prelude::Context;

/// Acknowledge a component interaction, ignoring duplicate/late errors.
pub async fn defer_component(ctx: &Context, c: &ComponentInteraction) {
    if let Err(e) = c.defer(&ctx.http).await {
        tracing::debug!(target: "ui.defer", cid = %c.data.custom_id, error = ?e,
                        "defer failed (already acknowledged?)");
    }
}

/// Edit the message the component lives on; logs failure with a tag.
pub async fn edit_message(
    ctx: &Context,
    c: &mut ComponentInteraction,
    tag: &str,
    builder: EditMessage,
) {
    if let Err(e) = c.message.edit(&ctx.http, builder).await {
        tracing::error!(target: "ui.edit", cid = %c.data.custom_id, tag = %tag, error = ?e,
                        "message edit failed");
    }
}
