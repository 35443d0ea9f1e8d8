use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use serenity::model::gateway::GatewayIntents;
use serenity::prelude::*;
use tokio::sync::RwLock;
use tracing::error;
use tracing_subscriber::EnvFilter;

use dontstarve_bot::api::ServerQueryClient;
use dontstarve_bot::constants::BINDINGS_NAMESPACE;
use dontstarve_bot::handler::Handler;
use dontstarve_bot::model::{AppState, ShardManagerContainer};
use dontstarve_bot::storage::BindingStore;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let token = env::var("DISCORD_TOKEN").expect("Expected DISCORD_TOKEN in the environment.");
    let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
    let initial_prefix = env::var("COMMAND_PREFIX").unwrap_or_else(|_| "!".to_string());

    // The full load completes before the gateway connects, so no command can
    // ever observe a partially populated binding map.
    let root = PathBuf::from(data_dir).join(BINDINGS_NAMESPACE);
    let (bindings, _report) = BindingStore::initialize(root)
        .await
        .expect("Failed to prepare the binding storage directory.");

    let app_state = Arc::new(AppState {
        bindings: Arc::new(bindings),
        query: ServerQueryClient::new(),
        prefix: Arc::new(RwLock::new(initial_prefix)),
    });

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&token, intents)
        .event_handler(Handler)
        .await
        .expect("Error creating the Discord client.");

    {
        let mut data = client.data.write().await;
        data.insert::<ShardManagerContainer>(client.shard_manager.clone());
        data.insert::<AppState>(app_state);
    }

    if let Err(why) = client.start().await {
        error!(error = ?why, "client error");
    }
}
