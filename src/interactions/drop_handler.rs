//! Component interactions for passive drops (`drop_claim` button).
//!
//! First started player to press the button wins the card. A press from a
//! player who hasn't started puts the drop back for someone else.

use super::util::{defer_component, edit_message};
use crate::economy::rewards;
use crate::model::AppState;
use crate::ui::embeds;
use serenity::builder::{CreateInteractionResponseFollowup, EditMessage};
use serenity::model::application::ComponentInteraction;
use serenity::prelude::Context;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

pub async fn handle(ctx: &Context, component: &mut ComponentInteraction, app_state: Arc<AppState>) {
    defer_component(ctx, component).await;
    let Some(pending) = app_state
        .drops
        .write()
        .await
        .claim(component.message.id, Instant::now())
    else {
        debug!(target: "drops", message = %component.message.id, "claim on settled drop");
        return;
    };
    let card = pending.card.clone();

    let user_id = component.user.id.to_string();
    let grant = app_state
        .store
        .update(|doc| rewards::grant_drop_claim(doc, &user_id, &card))
        .await;

    match grant {
        Ok(()) => {
            info!(target: "drops", user = %component.user.id, card = %card.display(), "drop claimed");
            let builder = EditMessage::new()
                .embed(embeds::themed(
                    "🃏 Claimed!",
                    format!("<@{}> snagged **{}**!", component.user.id, card.display()),
                ))
                .components(vec![]);
            edit_message(ctx, component, "drop.claimed", builder).await;
        }
        Err(e) => {
            // Not started: hand the drop back untouched and tell only the presser.
            app_state
                .drops
                .write()
                .await
                .restore(component.message.id, pending);
            let builder = CreateInteractionResponseFollowup::new()
                .embed(embeds::game_error(&e))
                .ephemeral(true);
            component.create_followup(&ctx.http, builder).await.ok();
        }
    }
}
