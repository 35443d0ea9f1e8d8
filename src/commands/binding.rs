//! Shows the server currently bound to this guild.

use serenity::builder::{
    CreateCommand, CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage,
    CreateMessage,
};
use serenity::model::application::CommandInteraction;
use serenity::model::channel::Message;
use serenity::prelude::*;

use crate::model::AppState;
use crate::ui::format::{not_bound_hint, render_binding};
use crate::ui::style::{error_embed, info_embed};

pub fn register() -> CreateCommand {
    CreateCommand::new("binding").description("Show the server bound to this guild.")
}

async fn binding_embed(app_state: &AppState, guild_id: Option<u64>) -> CreateEmbed {
    let Some(guild_id) = guild_id else {
        return error_embed("Current binding", "This command only works inside a guild.");
    };
    match app_state.bindings.get(&guild_id.to_string()).await {
        Ok(record) => info_embed("Current binding", render_binding(&record)),
        Err(_) => {
            let prefix = app_state.prefix().await;
            info_embed("Current binding", not_bound_hint(&prefix))
        }
    }
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let embed = binding_embed(&app_state, interaction.guild_id.map(|id| id.get())).await;
    let builder = CreateInteractionResponseMessage::new().embed(embed);
    interaction
        .create_response(&ctx.http, CreateInteractionResponse::Message(builder))
        .await
        .ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message, _args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let embed = binding_embed(&app_state, msg.guild_id.map(|id| id.get())).await;
    let builder = CreateMessage::new().embed(embed).reference_message(msg);
    msg.channel_id.send_message(&ctx.http, builder).await.ok();
}
