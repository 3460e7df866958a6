use std::env;
use std::sync::Arc;

use photocard_bot::browser::BrowserManager;
use photocard_bot::constants::{DEFAULT_DATA_FILE, DEFAULT_KEEPALIVE_PORT, RECONNECT_BACKOFF_SECS};
use photocard_bot::drops::DropManager;
use photocard_bot::model::{AppState, ShardManagerContainer};
use photocard_bot::store::remote::{RemoteConfig, RemoteSync};
use photocard_bot::store::CardStore;
use photocard_bot::{drops, handler, keepalive};
use serenity::model::gateway::GatewayIntents;
use serenity::prelude::*;
use tokio::sync::{RwLock, mpsc};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let token = env::var("DISCORD_TOKEN").expect("Expected DISCORD_TOKEN in the environment.");
    let data_file = env::var("DATA_FILE").unwrap_or_else(|_| DEFAULT_DATA_FILE.to_string());
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_KEEPALIVE_PORT);
    let admin_user_id = env::var("ADMIN_USER_ID").ok().and_then(|v| v.parse().ok());

    // Seed the local file from the remote copy when we have none, then wire the
    // push channel so every save hands the sync task a fresh snapshot.
    let store = if let Some(config) = RemoteConfig::from_env() {
        let sync = RemoteSync::new(config);
        if !std::path::Path::new(&data_file).exists()
            && let Some(content) = sync.pull().await
        {
            if let Err(e) = std::fs::write(&data_file, &content) {
                warn!(error = %e, "failed to seed local document from remote");
            } else {
                info!("seeded local document from remote copy");
            }
        }
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(sync.run(rx));
        CardStore::load(&data_file).with_remote(tx)
    } else {
        CardStore::load(&data_file)
    };
    let store = Arc::new(store);

    tokio::spawn(keepalive::run(port));

    let app_state = Arc::new(AppState {
        store: store.clone(),
        browsers: Arc::new(RwLock::new(BrowserManager::new())),
        drops: Arc::new(RwLock::new(DropManager::new())),
        prefix: Arc::new(RwLock::new("!".to_string())),
        admin_user_id,
    });

    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&token, intents)
        .event_handler(handler::Handler)
        .await
        .expect("Error creating the Discord client.");

    {
        let mut data = client.data.write().await;
        data.insert::<ShardManagerContainer>(client.shard_manager.clone());
        data.insert::<AppState>(app_state.clone());
    }

    tokio::spawn(drops::run(
        client.http.clone(),
        store,
        app_state.drops.clone(),
    ));

    // Periodic sweep so abandoned browser sessions don't accumulate.
    {
        let browsers = app_state.browsers.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(std::time::Duration::from_secs(60));
            loop {
                interval.tick().await;
                browsers.write().await.sweep(std::time::Instant::now());
            }
        });
    }

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Could not register ctrl+c handler");
        info!("shutting down");
        shard_manager.shutdown_all().await;
    });

    // Outer reconnect loop: gateway failures are logged and retried after a
    // fixed backoff rather than crashing the process.
    loop {
        match client.start().await {
            Ok(()) => break,
            Err(e) => {
                error!(error = %e, "client ended with error, reconnecting");
                tokio::time::sleep(std::time::Duration::from_secs(RECONNECT_BACKOFF_SECS)).await;
            }
        }
    }
}
