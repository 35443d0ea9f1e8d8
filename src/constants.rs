// Central constants for the remote API, storage layout, and the confirmation gate.
pub const LIST_API_URL: &str = "https://api.dstserverlist.top/api/list/";
pub const DETAIL_API_URL: &str = "https://api.dstserverlist.top/api/v2/server/details";

/// Result page requested from the list endpoint; the API caps a page at 10 anyway.
pub const SEARCH_PAGE_SIZE: u8 = 10;

/// Subdirectory of `DATA_DIR` holding one binding slot per guild.
pub const BINDINGS_NAMESPACE: &str = "dst_bindings";

/// Literal token that confirms a pending bind/unbind; anything else declines.
pub const CONFIRM_TOKEN: &str = "yes";
pub const CONFIRM_TIMEOUT_SECS: u64 = 10;

/// Longest server description echoed back before truncation.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 80;
