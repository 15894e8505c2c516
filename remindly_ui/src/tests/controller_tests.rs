use remindly_models::{reminder::NotificationChannel, status::DeliveryStatus};
use remindly_storage::ReminderStorage;

use super::test_utils::*;
use crate::{DeleteError, Filter, SubmitError, ValidationError};

#[tokio::test]
async fn refresh_loads_user_reminders() {
    let mut ctx = TestContext::new();
    ctx.seed("Dentist").await;
    ctx.seed("Gym").await;

    ctx.controller.refresh().await;

    assert_eq!(ctx.controller.state().reminders.len(), 2);
}

#[tokio::test]
async fn failed_refresh_replaces_list_with_empty() {
    let mut ctx = TestContext::new();
    ctx.seed("Dentist").await;
    assert_eq!(ctx.controller.state().reminders.len(), 1);

    ctx.storage.fail_with(Failure::Rejected(500, Some("Failed to fetch reminders")));
    ctx.controller.refresh().await;

    assert!(ctx.controller.state().reminders.is_empty());
}

#[tokio::test]
async fn transport_failure_on_refresh_also_empties_list() {
    let mut ctx = TestContext::new();
    ctx.seed("Dentist").await;

    ctx.storage.fail_with(Failure::Transport);
    ctx.controller.refresh().await;

    assert!(ctx.controller.state().reminders.is_empty());
}

#[tokio::test]
async fn successful_create_clears_draft_and_refreshes() {
    let mut ctx = TestContext::new();

    ctx.controller.start_new_reminder().await;
    ctx.controller
        .edit_draft(|draft| fill_email_draft(draft, "Pay rent"));
    ctx.controller.submit().await.unwrap();

    let state = ctx.controller.state();
    assert_eq!(state.draft, None);
    assert!(!state.submitting);
    assert_eq!(state.reminders.len(), 1);
    assert_eq!(state.reminders[0].title, "Pay rent");
    assert_eq!(state.reminders[0].status, DeliveryStatus::Pending);
    assert_eq!(ctx.storage.calls(), vec!["create", "list"]);
}

#[tokio::test]
async fn invalid_draft_never_reaches_storage() {
    let mut ctx = TestContext::new();

    ctx.controller.start_new_reminder().await;
    ctx.controller.edit_draft(|draft| {
        fill_email_draft(draft, "Pay rent");
        draft.email = String::new();
    });
    let before = ctx.controller.state().draft.clone();

    let error = ctx.controller.submit().await.unwrap_err();

    assert!(matches!(
        error,
        SubmitError::Invalid(ValidationError::MissingRecipients)
    ));
    assert!(ctx.storage.calls().is_empty());
    assert_eq!(ctx.controller.state().draft, before);
}

#[tokio::test]
async fn rejected_submit_keeps_draft_and_surfaces_server_message() {
    let mut ctx = TestContext::new();
    ctx.controller.start_new_reminder().await;
    ctx.controller
        .edit_draft(|draft| fill_email_draft(draft, "Pay rent"));
    let before = ctx.controller.state().draft.clone();

    ctx.storage.fail_with(Failure::Rejected(
        400,
        Some("Invalid datetime format. Use RFC3339"),
    ));
    let error = ctx.controller.submit().await.unwrap_err();

    assert_eq!(error.to_string(), "Invalid datetime format. Use RFC3339");
    assert_eq!(ctx.controller.state().draft, before);
    assert!(!ctx.controller.state().submitting);
    assert_eq!(ctx.storage.calls(), vec!["create"]);
}

#[tokio::test]
async fn rejection_without_message_uses_generic_text() {
    let mut ctx = TestContext::new();
    ctx.controller.start_new_reminder().await;
    ctx.controller
        .edit_draft(|draft| fill_email_draft(draft, "Pay rent"));

    ctx.storage.fail_with(Failure::Rejected(502, None));
    let error = ctx.controller.submit().await.unwrap_err();

    assert_eq!(error.to_string(), "Failed to save reminder");
}

#[tokio::test]
async fn transport_failure_on_submit_shows_network_message() {
    let mut ctx = TestContext::new();
    ctx.controller.start_new_reminder().await;
    ctx.controller
        .edit_draft(|draft| fill_email_draft(draft, "Pay rent"));

    ctx.storage.fail_with(Failure::Transport);
    let error = ctx.controller.submit().await.unwrap_err();

    assert!(matches!(error, SubmitError::Network(_)));
    assert_eq!(error.to_string(), "Network error: Failed to save reminder");
    assert!(ctx.controller.state().draft.is_some());
}

#[tokio::test]
async fn submit_without_draft_is_refused() {
    let mut ctx = TestContext::new();

    let error = ctx.controller.submit().await.unwrap_err();

    assert!(matches!(error, SubmitError::NoDraft));
}

#[tokio::test]
async fn editing_updates_existing_reminder() {
    let mut ctx = TestContext::new();
    let id = ctx.seed("Dentist").await;

    assert!(ctx.controller.start_editing(&id));
    let draft = ctx.controller.state().draft.clone().unwrap();
    assert_eq!(draft.datetime, "2026-11-05T08:00");

    ctx.controller.edit_draft(|draft| {
        draft.channel = NotificationChannel::Sms;
        draft.phone = "+420777000111".to_string();
    });
    ctx.controller.submit().await.unwrap();

    let reminders = &ctx.controller.state().reminders;
    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0].id, id);
    assert_eq!(reminders[0].channel, NotificationChannel::Sms);
    assert!(ctx.storage.calls().contains(&"update"));
}

#[tokio::test]
async fn editing_unknown_reminder_opens_nothing() {
    let mut ctx = TestContext::new();

    assert!(!ctx.controller.start_editing(&"missing".to_string()));
    assert_eq!(ctx.controller.state().draft, None);
}

#[tokio::test]
async fn cancel_discards_draft() {
    let mut ctx = TestContext::new();
    ctx.controller.start_new_reminder().await;

    ctx.controller.cancel_draft();

    assert_eq!(ctx.controller.state().draft, None);
}

#[tokio::test]
async fn delete_removes_locally_without_refetching() {
    let mut ctx = TestContext::new();
    let dentist = ctx.seed("Dentist").await;
    ctx.seed("Gym").await;
    let calls_before = ctx.storage.calls().len();

    ctx.controller.delete(&dentist).await.unwrap();

    let titles: Vec<_> = ctx
        .controller
        .state()
        .reminders
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Gym"]);
    assert_eq!(&ctx.storage.calls()[calls_before..], &["delete"]);
}

#[tokio::test]
async fn delete_transport_failure_keeps_list() {
    let mut ctx = TestContext::new();
    let id = ctx.seed("Dentist").await;

    ctx.storage.fail_with(Failure::Transport);
    let error = ctx.controller.delete(&id).await.unwrap_err();

    assert!(matches!(error, DeleteError::Network(_)));
    assert_eq!(ctx.controller.state().reminders.len(), 1);
}

#[tokio::test]
async fn delete_of_already_removed_reminder_still_drops_it() {
    let mut ctx = TestContext::new();
    let id = ctx.seed("Dentist").await;

    ctx.storage.fail_with(Failure::Rejected(404, Some("Reminder not found")));
    ctx.controller.delete(&id).await.unwrap();

    assert!(ctx.controller.state().reminders.is_empty());
}

#[tokio::test]
async fn rejected_delete_keeps_list() {
    let mut ctx = TestContext::new();
    let id = ctx.seed("Dentist").await;

    ctx.storage.fail_with(Failure::Rejected(500, Some("Failed to delete reminder")));
    let error = ctx.controller.delete(&id).await.unwrap_err();

    assert_eq!(error.to_string(), "Failed to delete reminder");
    assert_eq!(ctx.controller.state().reminders.len(), 1);
}

#[tokio::test]
async fn new_draft_captures_default_recipients_once() {
    let mut ctx = TestContext::new();
    ctx.controller.save_default_recipients("me@home.net, you@home.net").await;

    ctx.controller.start_new_reminder().await;
    ctx.preferences.set("somebody@else.org").await;

    let draft = ctx.controller.state().draft.clone().unwrap();
    assert_eq!(draft.email, "me@home.net, you@home.net");
    assert_eq!(draft.channel, NotificationChannel::Email);
}

#[tokio::test]
async fn refreshing_one_reminder_picks_up_delivery_status() {
    let mut ctx = TestContext::new();
    let id = ctx.seed("Dentist").await;

    ctx.storage.inner.set_status(&id, DeliveryStatus::Sent).await;
    ctx.controller.refresh_reminder(&id).await.unwrap();

    assert_eq!(
        ctx.controller.state().reminders[0].status,
        DeliveryStatus::Sent
    );
}

#[tokio::test]
async fn refreshing_vanished_reminder_removes_it() {
    let mut ctx = TestContext::new();
    let id = ctx.seed("Dentist").await;

    ctx.storage.inner.delete(&USER.to_string(), &id).await.unwrap();
    ctx.controller.refresh_reminder(&id).await.unwrap();

    assert!(ctx.controller.state().reminders.is_empty());
}

#[tokio::test]
async fn filter_narrows_views() {
    let mut ctx = TestContext::new();
    let sms = ctx.seed("Call mom").await;
    ctx.seed("Newsletter").await;
    ctx.controller.start_editing(&sms);
    ctx.controller.edit_draft(|draft| {
        draft.channel = NotificationChannel::Sms;
        draft.phone = "+1555".to_string();
    });
    ctx.controller.submit().await.unwrap();

    ctx.controller.select_filter(Filter::Sms);
    let views = ctx.controller.views();

    assert_eq!(views.len(), 1);
    assert_eq!(views[0].reminder.title, "Call mom");
    assert_eq!(views[0].scheduled_at, "Nov 5, 2026, 08:00 AM");
}
