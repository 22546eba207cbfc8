use super::*;
use crate::issues::{CreatedIssue, FALLBACK_MESSAGE, IssueError};
use crate::state::test_helpers::ScriptedTracker;

fn valid_form() -> RequestForm {
    RequestForm {
        category: "Interface".into(),
        links: "https://dribbble.com/shots/42".into(),
        handle: "@octocat".into(),
    }
}

fn created(url: &str) -> CreatedIssue {
    CreatedIssue { url: url.to_owned(), number: 1 }
}

#[test]
fn open_resets_outcome_state() {
    let mut dialog = RequestDialog::new();
    dialog.open();
    assert!(dialog.start_submit());
    dialog.resolve(Err(IssueError::Rejected { message: "nope".into() }));
    assert!(dialog.error().is_some());

    dialog.close();
    dialog.open();
    assert!(dialog.is_open());
    assert!(!dialog.is_pending());
    assert!(dialog.error().is_none());
    assert!(dialog.success_url().is_none());
}

#[test]
fn open_resets_after_success_too() {
    let mut dialog = RequestDialog::new();
    dialog.open();
    assert!(dialog.start_submit());
    dialog.resolve(Ok(created("https://x/1")));
    dialog.close();

    dialog.open();
    assert!(dialog.success_url().is_none());
}

#[test]
fn close_and_backdrop_are_noops_while_pending() {
    let mut dialog = RequestDialog::new();
    dialog.open();
    assert!(dialog.start_submit());
    assert!(dialog.is_pending());

    dialog.close();
    assert!(dialog.is_open());
    dialog.backdrop_click();
    assert!(dialog.is_open());

    dialog.resolve(Ok(created("https://x/1")));
    assert!(!dialog.is_pending());
    dialog.close();
    assert!(!dialog.is_open());
}

#[test]
fn backdrop_closes_once_not_pending() {
    let mut dialog = RequestDialog::new();
    dialog.open();
    dialog.backdrop_click();
    assert!(!dialog.is_open());
}

#[test]
fn start_submit_refused_while_pending_or_closed() {
    let mut dialog = RequestDialog::new();
    assert!(!dialog.start_submit());

    dialog.open();
    assert!(dialog.start_submit());
    assert!(!dialog.start_submit());
}

#[tokio::test]
async fn submit_success_records_exact_url() {
    let tracker = ScriptedTracker::new(vec![Ok(created("https://x/1"))]);
    let mut dialog = RequestDialog::new();
    dialog.open();
    dialog.submit(&tracker, &valid_form()).await;

    assert_eq!(dialog.success_url(), Some("https://x/1"));
    assert!(dialog.error().is_none());
    assert!(!dialog.is_pending());
    assert_eq!(tracker.calls(), 1);
}

#[tokio::test]
async fn submit_rejection_shows_message_verbatim() {
    let tracker = ScriptedTracker::new(vec![Err(IssueError::Rejected { message: "bad category".into() })]);
    let mut dialog = RequestDialog::new();
    dialog.open();
    dialog.submit(&tracker, &valid_form()).await;

    assert_eq!(dialog.error(), Some("bad category"));
    assert!(dialog.success_url().is_none());
    // Back to editing: the dialog stays open and accepts another submit.
    assert!(dialog.is_open());
    assert!(!dialog.is_pending());
}

#[tokio::test]
async fn submit_transport_failure_uses_fallback_message() {
    let tracker = ScriptedTracker::new(vec![Err(IssueError::ApiRequest("connection reset".into()))]);
    let mut dialog = RequestDialog::new();
    dialog.open();
    dialog.submit(&tracker, &valid_form()).await;

    assert_eq!(dialog.error(), Some(FALLBACK_MESSAGE));
    assert!(dialog.is_open());
}

#[tokio::test]
async fn error_then_resubmit_can_succeed() {
    let tracker = ScriptedTracker::new(vec![
        Err(IssueError::ApiResponse { status: 500, body: String::new() }),
        Ok(created("https://x/2")),
    ]);
    let mut dialog = RequestDialog::new();
    dialog.open();

    dialog.submit(&tracker, &valid_form()).await;
    assert_eq!(dialog.error(), Some(FALLBACK_MESSAGE));

    dialog.submit(&tracker, &valid_form()).await;
    assert_eq!(dialog.success_url(), Some("https://x/2"));
    assert!(dialog.error().is_none());
    assert_eq!(tracker.calls(), 2);
}

#[tokio::test]
async fn submit_while_pending_makes_no_call() {
    let tracker = ScriptedTracker::new(vec![]);
    let mut dialog = RequestDialog::new();
    dialog.open();
    assert!(dialog.start_submit());

    dialog.submit(&tracker, &valid_form()).await;
    assert_eq!(tracker.calls(), 0);
    assert!(dialog.is_pending());
}

#[tokio::test]
async fn submit_on_closed_dialog_makes_no_call() {
    let tracker = ScriptedTracker::new(vec![]);
    let mut dialog = RequestDialog::new();
    dialog.submit(&tracker, &valid_form()).await;
    assert_eq!(tracker.calls(), 0);
}

#[tokio::test]
async fn invalid_category_is_rejected_without_tracker_call() {
    let tracker = ScriptedTracker::new(vec![]);
    let mut dialog = RequestDialog::new();
    dialog.open();
    let form = RequestForm { category: "Stickers".into(), ..RequestForm::default() };
    dialog.submit(&tracker, &form).await;

    assert_eq!(tracker.calls(), 0);
    assert_eq!(dialog.error(), Some("Please choose a valid category."));
    assert!(dialog.is_open());
}

#[test]
fn submit_clears_previous_error_on_retry() {
    let mut dialog = RequestDialog::new();
    dialog.open();
    assert!(dialog.start_submit());
    dialog.resolve(Err(IssueError::Rejected { message: "nope".into() }));
    assert!(dialog.error().is_some());

    assert!(dialog.start_submit());
    assert!(dialog.error().is_none());
}
