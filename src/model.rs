//! Shared application state, stored in Serenity's global `TypeMap` so every
//! command and event handler reaches the same instances.

use std::sync::Arc;

use serenity::gateway::ShardManager;
use serenity::prelude::TypeMapKey;
use tokio::sync::RwLock;

use crate::api::ServerQueryClient;
use crate::storage::BindingStore;

/// A container for the ShardManager, allowing it to be stored in the global
/// context. Used by `ping` for gateway latency.
pub struct ShardManagerContainer;

impl TypeMapKey for ShardManagerContainer {
    type Value = Arc<ShardManager>;
}

/// The central, shared state of the application.
pub struct AppState {
    /// Single source of truth for guild bindings; owns the persisted slots.
    pub bindings: Arc<BindingStore>,
    /// Stateless client for the two remote lookups.
    pub query: ServerQueryClient,
    /// The current command prefix, changeable at runtime by administrators.
    pub prefix: Arc<RwLock<String>>,
}

impl AppState {
    pub async fn from_ctx(ctx: &serenity::prelude::Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }

    pub async fn prefix(&self) -> String {
        self.prefix.read().await.clone()
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}
