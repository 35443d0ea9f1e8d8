//! Binds this guild to one server record, gated by an explicit confirmation.
//! The RowId is resolved against the remote API before the prompt so the
//! user confirms a server by name, not by opaque id.

use serenity::builder::{
    CreateCommand, CreateCommandOption, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage, CreateMessage, EditInteractionResponse,
};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use serenity::prelude::*;
use tracing::error;

use crate::api::model::ServerDetail;
use crate::constants::{CONFIRM_TIMEOUT_SECS, CONFIRM_TOKEN};
use crate::interactions::confirm::{self, ConfirmOutcome};
use crate::model::AppState;
use crate::ui::style::{error_embed, info_embed, COLOR_BINDING, COLOR_CONFIRM};

pub fn register() -> CreateCommand {
    CreateCommand::new("bind")
        .description("Bind this guild to a server by its RowId.")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "rowid",
                "The server's RowId, as shown by /search.",
            )
            .required(true),
        )
}

fn prompt_embed(server_name: &str, how_to_confirm: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("Confirm binding")
        .description(format!(
            "About to bind this guild to **{server_name}**.\n{how_to_confirm}"
        ))
        .color(COLOR_CONFIRM)
}

fn aborted_embed(outcome: ConfirmOutcome) -> CreateEmbed {
    let reason = match outcome {
        ConfirmOutcome::TimedOut => "No confirmation arrived in time; nothing was changed.",
        _ => "Cancelled; nothing was changed.",
    };
    info_embed("Binding aborted", reason)
}

async fn apply_bind(app_state: &AppState, guild_id: &str, server: &ServerDetail) -> CreateEmbed {
    let prefix = app_state.prefix().await;
    match app_state
        .bindings
        .bind(guild_id, &server.row_id, &server.name)
        .await
    {
        Ok(record) => CreateEmbed::new()
            .title("Binding set")
            .description(format!(
                "Bound this guild to **{}**.\nCheck its status with `{prefix}server`; \
                 remove the binding with `{prefix}unbind`.",
                record.server_name
            ))
            .color(COLOR_BINDING),
        Err(e) => error_embed("Binding failed", e.to_string()),
    }
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let Some(guild_id) = interaction.guild_id else {
        let builder = CreateInteractionResponseMessage::new()
            .embed(error_embed("Bind", "This command only works inside a guild."));
        interaction
            .create_response(&ctx.http, CreateInteractionResponse::Message(builder))
            .await
            .ok();
        return;
    };
    interaction.defer(&ctx.http).await.ok();

    let row_id = interaction
        .data
        .options
        .iter()
        .find(|opt| opt.name == "rowid")
        .and_then(|opt| opt.value.as_str())
        .unwrap_or_default()
        .trim()
        .to_owned();

    let Some(server) = app_state.query.fetch_detail(&row_id).await else {
        let builder = EditInteractionResponse::new().embed(error_embed(
            "Bind",
            "Could not fetch that server. Check the RowId, or retry in a moment.",
        ));
        interaction.edit_response(&ctx.http, builder).await.ok();
        return;
    };

    let how = format!("Press Confirm within {CONFIRM_TIMEOUT_SECS} seconds to proceed.");
    let builder = EditInteractionResponse::new()
        .embed(prompt_embed(&server.name, &how))
        .components(confirm::buttons());
    let prompt = match interaction.edit_response(&ctx.http, builder).await {
        Ok(message) => message,
        Err(e) => {
            error!(target: "commands.bind", error = ?e, "failed to send confirmation prompt");
            return;
        }
    };

    let outcome = confirm::await_buttons(ctx, &prompt, interaction.user.id).await;
    let embed = if outcome.approved() {
        apply_bind(&app_state, &guild_id.get().to_string(), &server).await
    } else {
        aborted_embed(outcome)
    };
    let builder = EditInteractionResponse::new().embed(embed).components(Vec::new());
    interaction.edit_response(&ctx.http, builder).await.ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message, args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let Some(guild_id) = msg.guild_id else {
        msg.reply(&ctx.http, "This command only works inside a guild.")
            .await
            .ok();
        return;
    };
    let prefix = app_state.prefix().await;
    let Some(row_id) = args.first().map(|arg| arg.trim()).filter(|arg| !arg.is_empty()) else {
        let usage = format!(
            "Give the server's RowId: `{prefix}bind <RowId>`. Find one with `{prefix}search <keyword>`."
        );
        msg.reply(&ctx.http, usage).await.ok();
        return;
    };

    let Some(server) = app_state.query.fetch_detail(row_id).await else {
        msg.reply(
            &ctx.http,
            "Could not fetch that server. Check the RowId, or retry in a moment.",
        )
        .await
        .ok();
        return;
    };

    let how = format!("Reply `{CONFIRM_TOKEN}` within {CONFIRM_TIMEOUT_SECS} seconds to proceed.");
    let builder = CreateMessage::new()
        .embed(prompt_embed(&server.name, &how))
        .reference_message(msg);
    msg.channel_id.send_message(&ctx.http, builder).await.ok();

    let outcome = confirm::await_reply(ctx, msg.channel_id, msg.author.id).await;
    let embed = if outcome.approved() {
        apply_bind(&app_state, &guild_id.get().to_string(), &server).await
    } else {
        aborted_embed(outcome)
    };
    msg.channel_id
        .send_message(&ctx.http, CreateMessage::new().embed(embed))
        .await
        .ok();
}
