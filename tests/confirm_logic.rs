//! Classifier tests for the confirmation gate.
use dontstarve_bot::interactions::confirm::{classify_reply, ConfirmOutcome};

#[test]
fn affirmative_token_confirms() {
    assert_eq!(classify_reply(Some("yes")), ConfirmOutcome::Confirmed);
    assert_eq!(classify_reply(Some("  YES ")), ConfirmOutcome::Confirmed);
    assert_eq!(classify_reply(Some("Yes")), ConfirmOutcome::Confirmed);
}

#[test]
fn any_other_input_declines() {
    assert_eq!(classify_reply(Some("no")), ConfirmOutcome::Declined);
    assert_eq!(classify_reply(Some("否")), ConfirmOutcome::Declined);
    assert_eq!(classify_reply(Some("yess")), ConfirmOutcome::Declined);
    assert_eq!(classify_reply(Some("")), ConfirmOutcome::Declined);
}

#[test]
fn missing_reply_times_out() {
    assert_eq!(classify_reply(None), ConfirmOutcome::TimedOut);
}

#[test]
fn only_confirmed_approves() {
    assert!(ConfirmOutcome::Confirmed.approved());
    assert!(!ConfirmOutcome::Declined.approved());
    assert!(!ConfirmOutcome::TimedOut.approved());
}
