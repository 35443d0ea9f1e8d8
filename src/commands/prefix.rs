//! Runtime prefix management, restricted to guild administrators.

use serenity::builder::{
    CreateCommand, CreateCommandOption, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use serenity::model::permissions::Permissions;
use serenity::prelude::*;

use crate::model::AppState;

pub fn register() -> CreateCommand {
    CreateCommand::new("prefix")
        .description("Show or change the prefix for text commands (admin only to change).")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "set",
                "The new prefix to use.",
            )
            .required(false),
        )
}

/// Admin check for prefix messages, resolved through the guild cache.
fn is_admin_author(ctx: &Context, msg: &Message) -> Option<bool> {
    let guild = ctx.cache.guild(msg.guild_id?)?;
    if msg.author.id == guild.owner_id {
        return Some(true);
    }
    let member = msg.member.as_ref()?;
    Some(member.roles.iter().any(|role_id| {
        guild
            .roles
            .get(role_id)
            .is_some_and(|role| role.permissions.contains(Permissions::ADMINISTRATOR))
    }))
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let new_prefix = interaction
        .data
        .options
        .iter()
        .find(|opt| opt.name == "set")
        .and_then(|opt| opt.value.as_str());

    let response = match new_prefix {
        Some(new_prefix) => {
            let is_admin = interaction
                .member
                .as_ref()
                .and_then(|member| member.permissions)
                .is_some_and(|perms| perms.contains(Permissions::ADMINISTRATOR));
            if is_admin {
                *app_state.prefix.write().await = new_prefix.to_string();
                format!("Prefix has been updated to `{new_prefix}`")
            } else {
                "You must be an administrator to change the prefix.".to_string()
            }
        }
        None => {
            let current = app_state.prefix().await;
            format!("The current prefix is `{current}`.")
        }
    };
    let builder = CreateInteractionResponseMessage::new().content(response);
    interaction
        .create_response(&ctx.http, CreateInteractionResponse::Message(builder))
        .await
        .ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message, args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    match args.first() {
        Some(&"set") => {
            if is_admin_author(ctx, msg) != Some(true) {
                msg.reply(&ctx.http, "You must be an administrator to use this command.")
                    .await
                    .ok();
                return;
            }
            if let Some(new_prefix) = args.get(1) {
                *app_state.prefix.write().await = new_prefix.to_string();
                msg.reply(&ctx.http, format!("Prefix has been updated to `{new_prefix}`"))
                    .await
                    .ok();
            } else {
                msg.reply(&ctx.http, "Usage: `prefix set <new_prefix>`")
                    .await
                    .ok();
            }
        }
        _ => {
            let current = app_state.prefix().await;
            let response = format!(
                "The current prefix is `{current}`. Use `{current}prefix set <new_prefix>` to change it."
            );
            msg.reply(&ctx.http, response).await.ok();
        }
    }
}
