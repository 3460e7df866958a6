//! The Serenity event handler: prefix command dispatch, slash command
//! dispatch, component routing by custom_id family, and slash registration on
//! ready.

use crate::{AppState, commands, interactions};
use serenity::async_trait;
use serenity::client::Context;
use serenity::model::application::{Command as ApplicationCommand, Interaction};
use serenity::model::{channel::Message, gateway::Ready};
use serenity::prelude::EventHandler;
use std::str::FromStr;
use tracing::{error, info};

enum Command {
    Ping,
    Help,
    Start,
    Coins,
    Work,
    Daily,
    MyCards,
    SetDropChannel,
    Unknown,
}

impl FromStr for Command {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ping" => Ok(Command::Ping),
            "help" | "h" => Ok(Command::Help),
            "start" => Ok(Command::Start),
            "coins" | "bal" | "balance" => Ok(Command::Coins),
            "work" | "w" => Ok(Command::Work),
            "daily" | "d" => Ok(Command::Daily),
            "mycards" | "mc" | "cards" => Ok(Command::MyCards),
            "setdropchannel" => Ok(Command::SetDropChannel),
            _ => Ok(Command::Unknown),
        }
    }
}

pub struct Handler;

#[async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, ctx: Context, mut interaction: Interaction) {
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            error!("AppState missing from TypeMap");
            return;
        };
        if let Interaction::Command(command) = &interaction {
            match command.data.name.as_str() {
                "ping" => commands::ping::run_slash(&ctx, command).await,
                "help" => commands::help::run_slash(&ctx, command).await,
                "start" => commands::start::run_slash(&ctx, command).await,
                "coins" => commands::coins::run_slash(&ctx, command).await,
                "work" => commands::work::run_slash(&ctx, command).await,
                "daily" => commands::daily::run_slash(&ctx, command).await,
                "mycards" => commands::mycards::run_slash(&ctx, command).await,
                "setdropchannel" => commands::setdropchannel::run_slash(&ctx, command).await,
                _ => {}
            }
        } else if let Interaction::Component(component) = &mut interaction {
            let family = component.data.custom_id.split('_').next().unwrap_or("");
            match family {
                "collection" => {
                    interactions::collection_handler::handle(&ctx, component, app_state).await
                }
                "drop" => interactions::drop_handler::handle(&ctx, component, app_state).await,
                _ => {}
            }
        }
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            return;
        };
        let prefix_string = app_state.prefix.read().await.clone();
        let Some(command_body) = msg.content.strip_prefix(&prefix_string) else {
            return;
        };
        let mut args = command_body.split_whitespace();
        let Some(command_str) = args.next() else {
            return;
        };
        let command = Command::from_str(command_str).unwrap_or(Command::Unknown);
        let args_vec: Vec<&str> = args.collect();
        match command {
            Command::Ping => commands::ping::run_prefix(&ctx, &msg).await,
            Command::Help => commands::help::run_prefix(&ctx, &msg).await,
            Command::Start => commands::start::run_prefix(&ctx, &msg).await,
            Command::Coins => commands::coins::run_prefix(&ctx, &msg).await,
            Command::Work => commands::work::run_prefix(&ctx, &msg, args_vec).await,
            Command::Daily => commands::daily::run_prefix(&ctx, &msg).await,
            Command::MyCards => commands::mycards::run_prefix(&ctx, &msg).await,
            Command::SetDropChannel => {
                msg.reply(
                    &ctx.http,
                    "Use /setdropchannel (slash command only; restricted to admin).",
                )
                .await
                .ok();
            }
            Command::Unknown => {}
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(user = %ready.user.name, "connected and ready");
        let commands_to_register = vec![
            commands::ping::register(),
            commands::help::register(),
            commands::start::register(),
            commands::coins::register(),
            commands::work::register(),
            commands::daily::register(),
            commands::mycards::register(),
            commands::setdropchannel::register(),
        ];
        if let Err(e) =
            ApplicationCommand::set_global_commands(&ctx.http, commands_to_register).await
        {
            error!(error = %e, "failed to register slash commands");
        }
    }
}
