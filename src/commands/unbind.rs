//! Removes this guild's server binding, gated by the same confirmation as
//! `bind`. The slot is overwritten with the unbound shape, not deleted.

use serenity::builder::{
    CreateCommand, CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage,
    CreateMessage, EditInteractionResponse,
};
use serenity::model::application::CommandInteraction;
use serenity::model::channel::Message;
use serenity::prelude::*;
use tracing::error;

use crate::constants::{CONFIRM_TIMEOUT_SECS, CONFIRM_TOKEN};
use crate::interactions::confirm::{self, ConfirmOutcome};
use crate::model::AppState;
use crate::ui::format::not_bound_hint;
use crate::ui::style::{error_embed, info_embed, COLOR_CONFIRM};

pub fn register() -> CreateCommand {
    CreateCommand::new("unbind").description("Remove this guild's server binding.")
}

fn prompt_embed(server_name: &str, how_to_confirm: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("Confirm unbind")
        .description(format!(
            "About to remove this guild's binding to **{server_name}**.\n{how_to_confirm}"
        ))
        .color(COLOR_CONFIRM)
}

fn aborted_embed(outcome: ConfirmOutcome) -> CreateEmbed {
    let reason = match outcome {
        ConfirmOutcome::TimedOut => "No confirmation arrived in time; the binding is untouched.",
        _ => "Cancelled; the binding is untouched.",
    };
    info_embed("Unbind aborted", reason)
}

async fn apply_unbind(app_state: &AppState, guild_id: &str) -> CreateEmbed {
    match app_state.bindings.unbind(guild_id).await {
        Ok(previous) => info_embed(
            "Binding removed",
            format!(
                "This guild is no longer bound to **{}**.",
                previous.server_name
            ),
        ),
        Err(e) => error_embed("Unbind failed", e.to_string()),
    }
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let Some(guild_id) = interaction.guild_id else {
        let builder = CreateInteractionResponseMessage::new().embed(error_embed(
            "Unbind",
            "This command only works inside a guild.",
        ));
        interaction
            .create_response(&ctx.http, CreateInteractionResponse::Message(builder))
            .await
            .ok();
        return;
    };
    interaction.defer(&ctx.http).await.ok();

    let guild_key = guild_id.get().to_string();
    let current = match app_state.bindings.get(&guild_key).await {
        Ok(record) => record,
        Err(_) => {
            let prefix = app_state.prefix().await;
            let builder = EditInteractionResponse::new()
                .embed(info_embed("Unbind", not_bound_hint(&prefix)));
            interaction.edit_response(&ctx.http, builder).await.ok();
            return;
        }
    };

    let how = format!("Press Confirm within {CONFIRM_TIMEOUT_SECS} seconds to proceed.");
    let builder = EditInteractionResponse::new()
        .embed(prompt_embed(&current.server_name, &how))
        .components(confirm::buttons());
    let prompt = match interaction.edit_response(&ctx.http, builder).await {
        Ok(message) => message,
        Err(e) => {
            error!(target: "commands.unbind", error = ?e, "failed to send confirmation prompt");
            return;
        }
    };

    let outcome = confirm::await_buttons(ctx, &prompt, interaction.user.id).await;
    let embed = if outcome.approved() {
        apply_unbind(&app_state, &guild_key).await
    } else {
        aborted_embed(outcome)
    };
    let builder = EditInteractionResponse::new().embed(embed).components(Vec::new());
    interaction.edit_response(&ctx.http, builder).await.ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message, _args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let Some(guild_id) = msg.guild_id else {
        msg.reply(&ctx.http, "This command only works inside a guild.")
            .await
            .ok();
        return;
    };

    let guild_key = guild_id.get().to_string();
    let current = match app_state.bindings.get(&guild_key).await {
        Ok(record) => record,
        Err(_) => {
            let prefix = app_state.prefix().await;
            msg.reply(&ctx.http, not_bound_hint(&prefix)).await.ok();
            return;
        }
    };

    let how = format!("Reply `{CONFIRM_TOKEN}` within {CONFIRM_TIMEOUT_SECS} seconds to proceed.");
    let builder = CreateMessage::new()
        .embed(prompt_embed(&current.server_name, &how))
        .reference_message(msg);
    msg.channel_id.send_message(&ctx.http, builder).await.ok();

    let outcome = confirm::await_reply(ctx, msg.channel_id, msg.author.id).await;
    let embed = if outcome.approved() {
        apply_unbind(&app_state, &guild_key).await
    } else {
        aborted_embed(outcome)
    };
    msg.channel_id
        .send_message(&ctx.http, CreateMessage::new().embed(embed))
        .await
        .ok();
}
