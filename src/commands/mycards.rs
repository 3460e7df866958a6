//! The `mycards` command: opens the paginated card browser.
//!
//! A single-card collection renders once with no buttons and no session; a
//! larger one gets previous/next buttons and a browser session keyed by the
//! rendered message, expiring after two minutes of inactivity.

use crate::economy::GameError;
use crate::model::AppState;
use crate::ui::{self, embeds};
use serenity::builder::{CreateCommand, CreateInteractionResponseFollowup, CreateMessage};
use serenity::model::application::CommandInteraction;
use serenity::model::channel::Message;
use serenity::model::id::{MessageId, UserId};
use serenity::prelude::*;
use std::sync::Arc;
use std::time::Instant;

pub fn register() -> CreateCommand {
    CreateCommand::new("mycards").description("Browse your card collection.")
}

/// How a collection snapshot renders. Only `Browse` gets navigation buttons
/// and a session; a single card renders once with no affordances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    NotStarted,
    Empty,
    Single(String),
    Browse(Vec<String>),
}

pub fn classify(cards: Option<Vec<String>>) -> View {
    match cards {
        None => View::NotStarted,
        Some(cards) if cards.is_empty() => View::Empty,
        Some(mut cards) if cards.len() == 1 => View::Single(cards.remove(0)),
        Some(cards) => View::Browse(cards),
    }
}

async fn snapshot(app_state: &AppState, user: UserId) -> View {
    let user_id = user.to_string();
    let cards = app_state
        .store
        .read(|doc| doc.player(&user_id).map(|p| p.cards.clone()))
        .await;
    classify(cards)
}

async fn open_session(app_state: &Arc<AppState>, message_id: MessageId, owner: UserId, cards: Vec<String>) {
    app_state
        .browsers
        .write()
        .await
        .open(message_id, owner, cards, Instant::now());
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    interaction.defer(&ctx.http).await.ok();
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let builder = match snapshot(&app_state, interaction.user.id).await {
        View::NotStarted => CreateInteractionResponseFollowup::new()
            .embed(embeds::game_error(&GameError::NotStarted)),
        View::Empty => CreateInteractionResponseFollowup::new()
            .embed(embeds::themed("📚 Your Cards", "No cards yet — go `work`!")),
        View::Single(card) => {
            CreateInteractionResponseFollowup::new().embed(embeds::collection_page(&card, 0, 1))
        }
        View::Browse(cards) => {
            let embed = embeds::collection_page(&cards[0], 0, cards.len());
            let builder = CreateInteractionResponseFollowup::new()
                .embed(embed)
                .components(vec![ui::browser_nav_row()]);
            if let Ok(message) = interaction.create_followup(&ctx.http, builder).await {
                open_session(&app_state, message.id, interaction.user.id, cards).await;
            }
            return;
        }
    };
    interaction.create_followup(&ctx.http, builder).await.ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let builder = match snapshot(&app_state, msg.author.id).await {
        View::NotStarted => CreateMessage::new().embed(embeds::game_error(&GameError::NotStarted)),
        View::Empty => {
            CreateMessage::new().embed(embeds::themed("📚 Your Cards", "No cards yet — go `work`!"))
        }
        View::Single(card) => CreateMessage::new().embed(embeds::collection_page(&card, 0, 1)),
        View::Browse(cards) => {
            let embed = embeds::collection_page(&cards[0], 0, cards.len());
            let builder = CreateMessage::new()
                .embed(embed)
                .components(vec![ui::browser_nav_row()])
                .reference_message(msg);
            if let Ok(message) = msg.channel_id.send_message(&ctx.http, builder).await {
                open_session(&app_state, message.id, msg.author.id, cards).await;
            }
            return;
        }
    };
    msg.channel_id
        .send_message(&ctx.http, builder.reference_message(msg))
        .await
        .ok();
}
