use std::str::FromStr;

use serenity::async_trait;
use serenity::client::Context;
use serenity::model::application::{Command as GlobalCommand, Interaction};
use serenity::model::{channel::Message, gateway::Ready};
use serenity::prelude::EventHandler;
use tracing::{error, info};

use crate::{commands, interactions::ids, model::AppState};

enum Command {
    Ping,
    Prefix,
    Search,
    Bind,
    Unbind,
    Binding,
    Server,
    Help,
    Unknown,
}

impl FromStr for Command {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ping" => Ok(Command::Ping),
            "prefix" => Ok(Command::Prefix),
            "search" | "s" => Ok(Command::Search),
            "bind" => Ok(Command::Bind),
            "unbind" => Ok(Command::Unbind),
            "binding" | "bound" => Ok(Command::Binding),
            "server" | "status" => Ok(Command::Server),
            "help" | "h" => Ok(Command::Help),
            _ => Ok(Command::Unknown),
        }
    }
}

pub struct Handler;

#[async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Interaction::Command(command) = &interaction {
            match command.data.name.as_str() {
                "ping" => commands::ping::run_slash(&ctx, command).await,
                "prefix" => commands::prefix::run_slash(&ctx, command).await,
                "search" => commands::search::run_slash(&ctx, command).await,
                "bind" => commands::bind::run_slash(&ctx, command).await,
                "unbind" => commands::unbind::run_slash(&ctx, command).await,
                "binding" => commands::binding::run_slash(&ctx, command).await,
                "server" => commands::server::run_slash(&ctx, command).await,
                "help" => commands::help::run_slash(&ctx, command).await,
                _ => {}
            }
        } else if let Interaction::Component(component) = &interaction {
            // Live confirmation buttons are consumed by the collectors in the
            // command flows. One pressed after its collector expired lands
            // here; acknowledge it quietly so Discord does not flag it.
            if ids::is_confirm(&component.data.custom_id) {
                component.defer(&ctx.http).await.ok();
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
        let prefix_string = app_state.prefix().await;
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
            Command::Prefix => commands::prefix::run_prefix(&ctx, &msg, args_vec).await,
            Command::Search => commands::search::run_prefix(&ctx, &msg, args_vec).await,
            Command::Bind => commands::bind::run_prefix(&ctx, &msg, args_vec).await,
            Command::Unbind => commands::unbind::run_prefix(&ctx, &msg, args_vec).await,
            Command::Binding => commands::binding::run_prefix(&ctx, &msg, args_vec).await,
            Command::Server => commands::server::run_prefix(&ctx, &msg, args_vec).await,
            Command::Help => commands::help::run_prefix(&ctx, &msg, args_vec).await,
            Command::Unknown => {}
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(user = %ready.user.name, "connected and ready");
        let commands_to_register = vec![
            commands::ping::register(),
            commands::prefix::register(),
            commands::search::register(),
            commands::bind::register(),
            commands::unbind::register(),
            commands::binding::register(),
            commands::server::register(),
            commands::help::register(),
        ];
        if let Err(e) = GlobalCommand::set_global_commands(&ctx.http, commands_to_register).await {
            error!(error = ?e, "failed to register global commands");
        }
    }
}
