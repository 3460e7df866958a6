//! Shared application state, stored in Serenity's global TypeMap so every
//! command and interaction handler reaches the same store and session maps.

use crate::browser::BrowserManager;
use crate::drops::DropManager;
use crate::store::CardStore;
use serenity::gateway::ShardManager;
use serenity::prelude::TypeMapKey;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A container for the ShardManager, for gateway latency and shutdown.
pub struct ShardManagerContainer;

impl TypeMapKey for ShardManagerContainer {
    type Value = Arc<ShardManager>;
}

/// The central, shared state of the application. An `Arc<AppState>` lives in
/// the global context; the store is the single owner of the persisted
/// document.
pub struct AppState {
    pub store: Arc<CardStore>,
    /// Live card browser sessions keyed by rendered message.
    pub browsers: Arc<RwLock<BrowserManager>>,
    /// Unclaimed passive drops keyed by rendered message.
    pub drops: Arc<RwLock<DropManager>>,
    /// Current command prefix, runtime-swappable.
    pub prefix: Arc<RwLock<String>>,
    /// Admin allowed to run configuration commands (`ADMIN_USER_ID`).
    pub admin_user_id: Option<u64>,
}

impl AppState {
    pub async fn from_ctx(ctx: &serenity::prelude::Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }

    pub fn is_admin(&self, user_id: u64) -> bool {
        self.admin_user_id == Some(user_id)
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}
