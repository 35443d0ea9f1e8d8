//! Confirmation gate for binding mutations.
//!
//! A pending action waits for the invoking user until a fixed deadline and
//! resolves to exactly one of Confirmed / Declined / TimedOut. Declined and
//! TimedOut share the same contract: the action is dropped with no side
//! effects and no prior state is invalidated.

use std::time::Duration;

use serenity::builder::{CreateActionRow, CreateButton};
use serenity::collector::{ComponentInteractionCollector, MessageCollector};
use serenity::model::application::ButtonStyle;
use serenity::model::channel::Message;
use serenity::model::id::{ChannelId, UserId};
use serenity::prelude::Context;

use super::ids;
use crate::constants::{CONFIRM_TIMEOUT_SECS, CONFIRM_TOKEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Confirmed,
    Declined,
    TimedOut,
}

impl ConfirmOutcome {
    pub fn approved(self) -> bool {
        matches!(self, ConfirmOutcome::Confirmed)
    }
}

fn deadline() -> Duration {
    Duration::from_secs(CONFIRM_TIMEOUT_SECS)
}

/// Resolve a collected reply. `None` is the collector timing out; only the
/// literal affirmative token (trimmed, case-insensitive) confirms.
pub fn classify_reply(reply: Option<&str>) -> ConfirmOutcome {
    match reply {
        None => ConfirmOutcome::TimedOut,
        Some(text) if text.trim().eq_ignore_ascii_case(CONFIRM_TOKEN) => ConfirmOutcome::Confirmed,
        Some(_) => ConfirmOutcome::Declined,
    }
}

/// Prefix-command flow: wait for the author's next message in the channel.
pub async fn await_reply(ctx: &Context, channel_id: ChannelId, author_id: UserId) -> ConfirmOutcome {
    let reply = MessageCollector::new(&ctx.shard)
        .channel_id(channel_id)
        .author_id(author_id)
        .timeout(deadline())
        .next()
        .await;
    classify_reply(reply.as_ref().map(|m| m.content.as_str()))
}

/// Confirm/cancel row attached to a slash-command prompt.
pub fn buttons() -> Vec<CreateActionRow> {
    vec![CreateActionRow::Buttons(vec![
        CreateButton::new(ids::CONFIRM_ACCEPT)
            .label("Confirm")
            .style(ButtonStyle::Success),
        CreateButton::new(ids::CONFIRM_DECLINE)
            .label("Cancel")
            .style(ButtonStyle::Secondary),
    ])]
}

/// Slash-command flow: wait for the author to press one of the prompt's
/// buttons. The press is acknowledged before returning so Discord does not
/// show a failed interaction.
pub async fn await_buttons(ctx: &Context, prompt: &Message, author_id: UserId) -> ConfirmOutcome {
    let pressed = ComponentInteractionCollector::new(&ctx.shard)
        .message_id(prompt.id)
        .author_id(author_id)
        .timeout(deadline())
        .next()
        .await;
    match pressed {
        None => ConfirmOutcome::TimedOut,
        Some(component) => {
            component.defer(&ctx.http).await.ok();
            if component.data.custom_id == ids::CONFIRM_ACCEPT {
                ConfirmOutcome::Confirmed
            } else {
                ConfirmOutcome::Declined
            }
        }
    }
}
