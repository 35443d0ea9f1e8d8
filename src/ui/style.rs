//! Central UI style constants and helpers.
pub const COLOR_SERVER: u32 = 0x2ECC71; // Green
pub const COLOR_BINDING: u32 = 0x3498DB; // Blue
pub const COLOR_CONFIRM: u32 = 0xF1C40F; // Yellow
pub const COLOR_ALERT: u32 = 0xE74C3C; // Red

use serenity::builder::CreateEmbed;

/// Convenience builder for an alert/error-styled embed.
pub fn error_embed<T: Into<String>, U: Into<String>>(title: T, description: U) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .description(description)
        .color(COLOR_ALERT)
}

/// Neutral informational embed (binding views, hints).
pub fn info_embed<T: Into<String>, U: Into<String>>(title: T, description: U) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .description(description)
        .color(COLOR_BINDING)
}
