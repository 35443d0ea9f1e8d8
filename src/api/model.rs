//! Wire types for the two remote lookups. Field names on the wire are
//! PascalCase; unknown fields are ignored so API additions stay harmless.

use serde::Deserialize;

/// One page of search results from the list endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchResponse {
    /// Total matches server-side; may exceed the page returned in `list`.
    #[serde(default)]
    pub all_count: i64,
    #[serde(default)]
    pub list: Vec<ServerSummary>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServerSummary {
    pub row_id: String,
    pub name: String,
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub intent: String,
    #[serde(default)]
    pub connected: i64,
    #[serde(default)]
    pub max_connections: i64,
    #[serde(default)]
    pub season: String,
    #[serde(default)]
    pub platform: String,
}

/// Envelope around a single server's detail record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetailResponse {
    #[serde(default)]
    pub server: Option<ServerDetail>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServerDetail {
    pub row_id: String,
    pub name: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_server_paused: bool,
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub intent: String,
    #[serde(default)]
    pub is_mods: bool,
    /// Mod entries are opaque here; only the count is rendered.
    #[serde(default)]
    pub mods_info: Vec<serde_json::Value>,
    #[serde(default)]
    pub connected: i64,
    #[serde(default)]
    pub max_connections: i64,
    #[serde(default)]
    pub days_info: DaysInfo,
    #[serde(default)]
    pub season: String,
    #[serde(default)]
    pub is_pvp: bool,
    #[serde(default)]
    pub is_password: bool,
    #[serde(default)]
    pub last_ping: Option<i64>,
    #[serde(default)]
    pub players: Vec<PlayerInfo>,
    #[serde(default)]
    pub address: Address,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DaysInfo {
    #[serde(default)]
    pub day: i64,
    #[serde(default)]
    pub days_elapsed_in_season: i64,
    #[serde(default)]
    pub total_days_season: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerInfo {
    pub name: String,
    /// In-game character, e.g. `wilson`.
    #[serde(default)]
    pub prefab: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    #[serde(default)]
    pub iso_code: String,
}
