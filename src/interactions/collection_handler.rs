//! Component interactions for the card browser (`collection_*` buttons).

use super::util::{defer_component, edit_message};
use crate::browser::{NavOutcome, NavSignal};
use crate::model::AppState;
use crate::ui::embeds;
use serenity::builder::EditMessage;
use serenity::model::application::ComponentInteraction;
use serenity::prelude::Context;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

pub async fn handle(ctx: &Context, component: &mut ComponentInteraction, app_state: Arc<AppState>) {
    defer_component(ctx, component).await;
    let Some(signal) = NavSignal::from_custom_id(&component.data.custom_id) else {
        return;
    };
    let outcome = app_state.browsers.write().await.navigate(
        component.message.id,
        component.user.id,
        signal,
        Instant::now(),
    );
    match outcome {
        NavOutcome::Page { index, total, card } => {
            let builder = EditMessage::new().embed(embeds::collection_page(&card, index, total));
            edit_message(ctx, component, "collection.nav", builder).await;
        }
        // A non-owner's press doesn't advance anyone's page; an expired
        // session leaves the last page visible with inert buttons.
        NavOutcome::NotYours => {
            debug!(target: "browser", user = %component.user.id, "nav from non-owner ignored");
        }
        NavOutcome::Expired => {
            debug!(target: "browser", message = %component.message.id, "nav on expired session");
        }
    }
}
