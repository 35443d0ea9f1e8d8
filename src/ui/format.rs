//! Renders the user-facing text blocks: search results, binding views, and
//! the full server status. Pure string builders so the test suite can check
//! them without a gateway.

use crate::api::model::{SearchResponse, ServerDetail, ServerSummary};
use crate::constants::{DESCRIPTION_PREVIEW_CHARS, SEARCH_PAGE_SIZE};
use crate::storage::BindingRecord;

/// Display name for the API's lowercase season tokens; unknown tokens pass
/// through untouched.
pub fn season_name(raw: &str) -> &str {
    match raw {
        "spring" => "Spring",
        "summer" => "Summer",
        "autumn" => "Autumn",
        "winter" => "Winter",
        other => other,
    }
}

/// Display name for game mode / intent tokens.
pub fn mode_name(raw: &str) -> &str {
    match raw {
        "survival" => "Survival",
        "wilderness" => "Wilderness",
        "relaxed" => "Relaxed",
        "adventure" => "Adventure",
        "endless" => "Endless",
        "cooperative" => "Cooperative",
        other => other,
    }
}

/// Char-aware truncation for server descriptions.
pub fn truncate_description(raw: &str) -> String {
    if raw.chars().count() <= DESCRIPTION_PREVIEW_CHARS {
        return raw.to_string();
    }
    let preview: String = raw.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    format!("{preview}...")
}

/// Guidance shown whenever a guild-scoped command finds no active binding.
pub fn not_bound_hint(prefix: &str) -> String {
    format!(
        "This guild is not bound to any server yet.\n\
         Find a RowId with `{prefix}search <keyword>`, then bind it with `{prefix}bind <RowId>`."
    )
}

fn summary_block(server: &ServerSummary) -> String {
    format!(
        "[RowId] {}\n[Name] {}\n[Mode] {} / {}\n[Players] {} / {}\n[Season] {}  [Platform] {}",
        server.row_id,
        server.name,
        mode_name(&server.mode),
        mode_name(&server.intent),
        server.connected,
        server.max_connections,
        season_name(&server.season),
        server.platform,
    )
}

/// One block per result plus the bind hint line. An empty list renders a
/// "nothing matched" line instead; a failed fetch never reaches this point.
pub fn render_search_results(results: &SearchResponse, prefix: &str) -> String {
    if results.list.is_empty() {
        return "No servers matched that keyword.".to_string();
    }
    let header = if results.all_count > i64::from(SEARCH_PAGE_SIZE) {
        format!(
            "Found {} servers (showing at most {}):",
            results.all_count, SEARCH_PAGE_SIZE
        )
    } else {
        format!("Found {} server(s):", results.all_count)
    };
    let blocks: Vec<String> = results.list.iter().map(summary_block).collect();
    format!(
        "{header}\n\n{}\n\nTo bind one to this guild, use `{prefix}bind <RowId>`.",
        blocks.join("\n\n")
    )
}

/// The current binding, for the show-binding view.
pub fn render_binding(record: &BindingRecord) -> String {
    format!(
        "Bound server: {}\nRowId: {}",
        record.server_name, record.server_id
    )
}

/// Full status view for the bound server.
pub fn render_server_detail(server: &ServerDetail) -> String {
    let description = if server.description.is_empty() {
        "(none)".to_string()
    } else {
        truncate_description(&server.description)
    };
    let mods = if server.is_mods {
        server.mods_info.len().to_string()
    } else {
        "none".to_string()
    };
    let ping = match server.last_ping {
        Some(ms) => format!("{ms} ms"),
        None => "???".to_string(),
    };

    let mut out = format!(
        "[Name] {} ({})\n\
         [Platform] {}\n\
         [Version] {}\n\
         [Description] {}\n\
         [State] {}\n\n\
         [Mode] {} / {}\n\
         [Mods] {}\n\
         [Players] {} / {}\n\
         [World] Day {} ({} {}/{})\n\
         [PvP] {}\n\
         [Password] {}\n\
         [Ping] {}",
        server.name,
        server.address.iso_code,
        server.platform,
        server.version,
        description,
        if server.is_server_paused { "Paused" } else { "Running" },
        mode_name(&server.mode),
        mode_name(&server.intent),
        mods,
        server.connected,
        server.max_connections,
        server.days_info.day,
        season_name(&server.season),
        // The API reports elapsed days zero-based.
        server.days_info.days_elapsed_in_season + 1,
        server.days_info.total_days_season,
        if server.is_pvp { "yes" } else { "no" },
        if server.is_password { "yes" } else { "no" },
        ping,
    );

    if !server.players.is_empty() {
        out.push_str("\n\nCurrently playing:\n");
        let roster: Vec<String> = server
            .players
            .iter()
            .map(|p| format!("{} ({})", p.name, p.prefab))
            .collect();
        out.push_str(&roster.join("\n"));
    }
    out
}
