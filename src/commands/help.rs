//! Categorized command overview.

use serenity::builder::{
    CreateCommand, CreateEmbed, CreateEmbedFooter, CreateInteractionResponse,
    CreateInteractionResponseMessage, CreateMessage,
};
use serenity::model::application::CommandInteraction;
use serenity::model::channel::Message;
use serenity::prelude::*;

use crate::model::AppState;
use crate::ui::style::COLOR_BINDING;

#[derive(Clone, Copy, PartialEq, Eq)]
enum CommandCategory {
    Servers,
    General,
}

impl CommandCategory {
    fn name(&self) -> &'static str {
        match self {
            Self::Servers => "Server binding & status",
            Self::General => "General",
        }
    }
}

struct CommandHelp {
    name: &'static str,
    usage: &'static str,
    summary: &'static str,
    category: CommandCategory,
}

const COMMANDS: &[CommandHelp] = &[
    CommandHelp {
        name: "search",
        usage: "search <keyword>",
        summary: "Search servers by name.",
        category: CommandCategory::Servers,
    },
    CommandHelp {
        name: "bind",
        usage: "bind <RowId>",
        summary: "Bind this guild to a server (asks for confirmation).",
        category: CommandCategory::Servers,
    },
    CommandHelp {
        name: "unbind",
        usage: "unbind",
        summary: "Remove this guild's binding (asks for confirmation).",
        category: CommandCategory::Servers,
    },
    CommandHelp {
        name: "binding",
        usage: "binding",
        summary: "Show which server is bound to this guild.",
        category: CommandCategory::Servers,
    },
    CommandHelp {
        name: "server",
        usage: "server",
        summary: "Show the bound server's live status.",
        category: CommandCategory::Servers,
    },
    CommandHelp {
        name: "ping",
        usage: "ping",
        summary: "Check the bot's gateway latency.",
        category: CommandCategory::General,
    },
    CommandHelp {
        name: "prefix",
        usage: "prefix [set <new>]",
        summary: "Show or change the text-command prefix.",
        category: CommandCategory::General,
    },
    CommandHelp {
        name: "help",
        usage: "help",
        summary: "Show this overview.",
        category: CommandCategory::General,
    },
];

/// Every command name listed in help; the test suite checks this against the
/// registered set.
pub fn all_command_names() -> Vec<&'static str> {
    COMMANDS.iter().map(|cmd| cmd.name).collect()
}

fn help_embed(prefix: &str) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title("Commands")
        .color(COLOR_BINDING)
        .footer(CreateEmbedFooter::new(format!(
            "Slash commands work too: every entry is also available as /<command>. Text prefix: {prefix}"
        )));
    for category in [CommandCategory::Servers, CommandCategory::General] {
        let lines: Vec<String> = COMMANDS
            .iter()
            .filter(|cmd| cmd.category == category)
            .map(|cmd| format!("`{prefix}{}` - {}", cmd.usage, cmd.summary))
            .collect();
        embed = embed.field(category.name(), lines.join("\n"), false);
    }
    embed
}

pub fn register() -> CreateCommand {
    CreateCommand::new("help").description("List the available commands.")
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let prefix = app_state.prefix().await;
    let builder = CreateInteractionResponseMessage::new().embed(help_embed(&prefix));
    interaction
        .create_response(&ctx.http, CreateInteractionResponse::Message(builder))
        .await
        .ok();
}

pub async fn run_prefix(ctx: &Context, msg: &Message, _args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let prefix = app_state.prefix().await;
    let builder = CreateMessage::new()
        .embed(help_embed(&prefix))
        .reference_message(msg);
    msg.channel_id.send_message(&ctx.http, builder).await.ok();
}
