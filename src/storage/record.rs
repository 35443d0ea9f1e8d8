use serde::{Deserialize, Serialize};

/// The persisted binding for one guild.
///
/// An empty `server_id` means "unbound"; the same shape covers both states so
/// a slot is overwritten on unbind instead of deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingRecord {
    #[serde(rename = "serverId", default)]
    pub server_id: String,
    #[serde(rename = "serverName", default)]
    pub server_name: String,
}

impl BindingRecord {
    pub fn new(server_id: impl Into<String>, server_name: impl Into<String>) -> Self {
        Self {
            server_id: server_id.into(),
            server_name: server_name.into(),
        }
    }

    /// The unbound shape: both fields empty.
    pub fn cleared() -> Self {
        Self::default()
    }

    pub fn is_bound(&self) -> bool {
        !self.server_id.is_empty()
    }
}
