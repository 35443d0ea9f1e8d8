//! Keyword search over the public server list.

use serenity::builder::{
    CreateCommand, CreateCommandOption, CreateEmbed, CreateInteractionResponseFollowup,
    CreateMessage,
};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use serenity::prelude::*;

use crate::model::AppState;
use crate::ui::format::render_search_results;
use crate::ui::style::{error_embed, COLOR_SERVER};

pub fn register() -> CreateCommand {
    CreateCommand::new("search")
        .description("Search Don't Starve Together servers by keyword.")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "keyword",
                "Part of the server name to look for.",
            )
            .required(true),
        )
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    interaction.defer(&ctx.http).await.ok();
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let keyword = interaction
        .data
        .options
        .iter()
        .find(|opt| opt.name == "keyword")
        .and_then(|opt| opt.value.as_str())
        .unwrap_or_default();

    let embed = search_embed(&app_state, keyword.trim()).await;
    let builder = CreateInteractionResponseFollowup::new().embed(embed);
    interaction.create_followup(&ctx.http, builder).await.ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message, args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let keyword = args.join(" ");

    let embed = search_embed(&app_state, keyword.trim()).await;
    let builder = CreateMessage::new().embed(embed).reference_message(msg);
    msg.channel_id.send_message(&ctx.http, builder).await.ok();
}

// The keyword check lives here: the query client assumes a non-empty keyword.
async fn search_embed(app_state: &AppState, keyword: &str) -> CreateEmbed {
    if keyword.is_empty() {
        return error_embed(
            "Server search",
            "Please give a keyword, e.g. `search Base Camp`.",
        );
    }
    let Some(results) = app_state.query.search(keyword).await else {
        return error_embed(
            "Server search",
            "Fetching the server list failed, please retry.",
        );
    };
    let prefix = app_state.prefix().await;
    CreateEmbed::new()
        .title("Server search")
        .description(render_search_results(&results, &prefix))
        .color(COLOR_SERVER)
}
