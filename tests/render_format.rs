//! Rendering tests for the user-facing text blocks.
use dontstarve_bot::api::model::{
    Address, DaysInfo, PlayerInfo, SearchResponse, ServerDetail, ServerSummary,
};
use dontstarve_bot::storage::BindingRecord;
use dontstarve_bot::ui::format::{
    mode_name, not_bound_hint, render_binding, render_search_results, render_server_detail,
    season_name, truncate_description,
};

fn summary(row_id: &str, name: &str) -> ServerSummary {
    ServerSummary {
        row_id: row_id.to_string(),
        name: name.to_string(),
        mode: "survival".to_string(),
        intent: "cooperative".to_string(),
        connected: 3,
        max_connections: 6,
        season: "autumn".to_string(),
        platform: "Steam".to_string(),
    }
}

fn detail() -> ServerDetail {
    ServerDetail {
        row_id: "42".to_string(),
        name: "Base Camp".to_string(),
        platform: "Steam".to_string(),
        version: "593739".to_string(),
        description: String::new(),
        is_server_paused: false,
        mode: "survival".to_string(),
        intent: "cooperative".to_string(),
        is_mods: false,
        mods_info: vec![],
        connected: 2,
        max_connections: 6,
        days_info: DaysInfo {
            day: 152,
            days_elapsed_in_season: 1,
            total_days_season: 20,
        },
        season: "autumn".to_string(),
        is_pvp: false,
        is_password: false,
        last_ping: None,
        players: vec![],
        address: Address {
            iso_code: "DE".to_string(),
        },
    }
}

#[test]
fn single_search_result_renders_one_block_and_the_bind_hint() {
    let page = SearchResponse {
        all_count: 1,
        list: vec![summary("42", "Base Camp")],
    };
    let text = render_search_results(&page, "!");
    assert_eq!(text.matches("[RowId]").count(), 1);
    assert!(text.contains("[RowId] 42"));
    assert!(text.contains("Base Camp"));
    assert!(text.contains("Survival / Cooperative"));
    assert!(text.contains("`!bind <RowId>`"));
}

#[test]
fn empty_search_result_says_nothing_matched() {
    let page = SearchResponse {
        all_count: 0,
        list: vec![],
    };
    let text = render_search_results(&page, "!");
    assert!(text.contains("No servers matched"));
    assert!(!text.contains("[RowId]"));
}

#[test]
fn overflowing_search_result_notes_the_page_cap() {
    let page = SearchResponse {
        all_count: 37,
        list: (0..10)
            .map(|i| summary(&i.to_string(), &format!("World {i}")))
            .collect(),
    };
    let text = render_search_results(&page, "!");
    assert!(text.contains("Found 37 servers (showing at most 10)"));
    assert_eq!(text.matches("[RowId]").count(), 10);
}

#[test]
fn display_names_for_known_tokens() {
    assert_eq!(season_name("autumn"), "Autumn");
    assert_eq!(season_name("winter"), "Winter");
    assert_eq!(mode_name("survival"), "Survival");
    assert_eq!(mode_name("endless"), "Endless");
    // Unknown tokens pass through untouched.
    assert_eq!(season_name("mystery"), "mystery");
    assert_eq!(mode_name("lights out"), "lights out");
}

#[test]
fn binding_view_names_server_and_row_id() {
    let record = BindingRecord::new("42", "Base Camp");
    let text = render_binding(&record);
    assert!(text.contains("Base Camp"));
    assert!(text.contains("42"));
}

#[test]
fn not_bound_hint_names_both_commands() {
    let hint = not_bound_hint("!");
    assert!(hint.contains("`!search <keyword>`"));
    assert!(hint.contains("`!bind <RowId>`"));
}

#[test]
fn detail_view_renders_world_state() {
    let text = render_server_detail(&detail());
    assert!(text.contains("[Name] Base Camp (DE)"));
    assert!(text.contains("[State] Running"));
    // Elapsed season days are reported zero-based by the API.
    assert!(text.contains("[World] Day 152 (Autumn 2/20)"));
    assert!(text.contains("[Mods] none"));
    assert!(text.contains("[Ping] ???"));
    assert!(text.contains("[Description] (none)"));
    assert!(!text.contains("Currently playing"));
}

#[test]
fn detail_view_lists_players_when_present() {
    let mut server = detail();
    server.players = vec![
        PlayerInfo {
            name: "Maxine".to_string(),
            prefab: "wilson".to_string(),
        },
        PlayerInfo {
            name: "Sam".to_string(),
            prefab: "webber".to_string(),
        },
    ];
    server.last_ping = Some(87);
    server.is_server_paused = true;
    let text = render_server_detail(&server);
    assert!(text.contains("Currently playing:"));
    assert!(text.contains("Maxine (wilson)"));
    assert!(text.contains("Sam (webber)"));
    assert!(text.contains("[Ping] 87 ms"));
    assert!(text.contains("[State] Paused"));
}

#[test]
fn long_descriptions_are_truncated() {
    let long = "x".repeat(200);
    let preview = truncate_description(&long);
    assert!(preview.ends_with("..."));
    assert!(preview.chars().count() < 100);
    // Short ones are untouched.
    assert_eq!(truncate_description("cozy"), "cozy");
}
