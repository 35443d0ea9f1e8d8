//! Live status of the server bound to this guild. The remote API is the
//! single source of truth; every invocation asks it once, no caching.

use serenity::builder::{
    CreateCommand, CreateEmbed, CreateInteractionResponseFollowup, CreateMessage,
};
use serenity::model::application::CommandInteraction;
use serenity::model::channel::Message;
use serenity::prelude::*;

use crate::model::AppState;
use crate::ui::format::{not_bound_hint, render_server_detail};
use crate::ui::style::{error_embed, info_embed, COLOR_SERVER};

pub fn register() -> CreateCommand {
    CreateCommand::new("server").description("Show the live status of this guild's bound server.")
}

async fn status_embed(app_state: &AppState, guild_id: Option<u64>) -> CreateEmbed {
    let Some(guild_id) = guild_id else {
        return error_embed("Server status", "This command only works inside a guild.");
    };
    let record = match app_state.bindings.get(&guild_id.to_string()).await {
        Ok(record) => record,
        Err(_) => {
            let prefix = app_state.prefix().await;
            return info_embed("Server status", not_bound_hint(&prefix));
        }
    };
    let Some(server) = app_state.query.fetch_detail(&record.server_id).await else {
        return error_embed(
            "Server status",
            format!(
                "Fetching the status of **{}** failed, please retry.",
                record.server_name
            ),
        );
    };
    CreateEmbed::new()
        .title("Server status")
        .description(render_server_detail(&server))
        .color(COLOR_SERVER)
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    interaction.defer(&ctx.http).await.ok();
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let embed = status_embed(&app_state, interaction.guild_id.map(|id| id.get())).await;
    let builder = CreateInteractionResponseFollowup::new().embed(embed);
    interaction.create_followup(&ctx.http, builder).await.ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message, _args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let embed = status_embed(&app_state, msg.guild_id.map(|id| id.get())).await;
    let builder = CreateMessage::new().embed(embed).reference_message(msg);
    msg.channel_id.send_message(&ctx.http, builder).await.ok();
}
