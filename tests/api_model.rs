//! Wire-format decoding for the dstserverlist API payloads.
use dontstarve_bot::api::model::{DetailResponse, SearchResponse};

#[test]
fn decodes_a_search_page() {
    let payload = r#"{
        "AllCount": 1,
        "List": [{
            "RowId": "42",
            "Name": "Base Camp",
            "Mode": "survival",
            "Intent": "cooperative",
            "Connected": 3,
            "MaxConnections": 6,
            "Season": "autumn",
            "Platform": "Steam"
        }]
    }"#;
    let page: SearchResponse = serde_json::from_str(payload).unwrap();
    assert_eq!(page.all_count, 1);
    assert_eq!(page.list.len(), 1);
    let server = &page.list[0];
    assert_eq!(server.row_id, "42");
    assert_eq!(server.name, "Base Camp");
    assert_eq!(server.mode, "survival");
    assert_eq!(server.connected, 3);
    assert_eq!(server.max_connections, 6);
}

#[test]
fn decodes_the_detail_envelope() {
    let payload = r#"{
        "Server": {
            "RowId": "42",
            "Name": "Base Camp",
            "Platform": "Steam",
            "Version": "593739",
            "Description": "A cozy long-running world.",
            "IsServerPaused": false,
            "Mode": "survival",
            "Intent": "cooperative",
            "IsMods": true,
            "ModsInfo": [{"Name": "Global Positions"}, {"Name": "Wormhole Marks"}],
            "Connected": 2,
            "MaxConnections": 6,
            "DaysInfo": {"Day": 152, "DaysElapsedInSeason": 4, "TotalDaysSeason": 20},
            "Season": "winter",
            "IsPvp": false,
            "IsPassword": true,
            "LastPing": 87,
            "Players": [
                {"Name": "Maxine", "Prefab": "wilson"},
                {"Name": "Sam", "Prefab": "webber"}
            ],
            "Address": {"IsoCode": "DE"}
        }
    }"#;
    let envelope: DetailResponse = serde_json::from_str(payload).unwrap();
    let server = envelope.server.expect("detail should carry a server");
    assert_eq!(server.row_id, "42");
    assert!(server.is_mods);
    assert_eq!(server.mods_info.len(), 2);
    assert_eq!(server.days_info.day, 152);
    assert_eq!(server.days_info.days_elapsed_in_season, 4);
    assert_eq!(server.players[1].prefab, "webber");
    assert_eq!(server.address.iso_code, "DE");
    assert_eq!(server.last_ping, Some(87));
}

#[test]
fn detail_without_server_payload_is_none() {
    let envelope: DetailResponse = serde_json::from_str("{}").unwrap();
    assert!(envelope.server.is_none());
}

#[test]
fn detail_tolerates_missing_optional_fields() {
    // Minimal record: the API omits most fields for dead servers.
    let payload = r#"{"Server": {"RowId": "42", "Name": "Base Camp"}}"#;
    let envelope: DetailResponse = serde_json::from_str(payload).unwrap();
    let server = envelope.server.unwrap();
    assert_eq!(server.last_ping, None);
    assert!(server.players.is_empty());
    assert_eq!(server.days_info.day, 0);
    assert_eq!(server.address.iso_code, "");
}
