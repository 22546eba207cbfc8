//! Request dialog lifecycle.
//!
//! DESIGN
//! ======
//! Models the icon-request dialog as plain state, the way the site's front
//! end drives it: `Editing -> Pending -> resolved with a success URL or an
//! inline error`. An error returns the dialog to editing with the form
//! values untouched (the inputs are uncontrolled); success is terminal for
//! that opening. While a submission is pending the dialog refuses to close,
//! so an in-flight request cannot be abandoned.
//!
//! Each open dialog owns its own state; nothing is shared across instances
//! or across openings.

use crate::issues::{self, CreateIssue, RequestForm};

/// Per-opening dialog state. `Default` is the closed dialog.
#[derive(Debug, Default)]
pub struct RequestDialog {
    open: bool,
    pending: bool,
    success_url: Option<String>,
    error: Option<String>,
}

impl RequestDialog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the dialog. Always resets the outcome state, whatever the
    /// previous opening left behind.
    pub fn open(&mut self) {
        self.open = true;
        self.pending = false;
        self.success_url = None;
        self.error = None;
    }

    /// Close via the explicit control. A no-op while a submission is
    /// pending.
    pub fn close(&mut self) {
        if !self.pending {
            self.open = false;
        }
    }

    /// Close via a click on the backdrop. Same suppression rule as
    /// [`RequestDialog::close`].
    pub fn backdrop_click(&mut self) {
        self.close();
    }

    /// Submit the form: exactly one tracker call, no automatic retry.
    /// Ignored while a previous submission is pending or the dialog is
    /// closed.
    pub async fn submit(&mut self, tracker: &dyn CreateIssue, form: &RequestForm) {
        if !self.start_submit() {
            return;
        }
        let outcome = issues::submit_request(tracker, form).await;
        self.resolve(outcome);
    }

    /// Enter the pending state. Returns false when the submit control
    /// should have been disabled (already pending, or not open).
    pub fn start_submit(&mut self) -> bool {
        if self.pending || !self.open {
            return false;
        }
        self.pending = true;
        self.error = None;
        true
    }

    /// Apply the tracker outcome and leave the pending state.
    pub fn resolve(&mut self, outcome: Result<issues::CreatedIssue, issues::IssueError>) {
        match outcome {
            Ok(created) => self.success_url = Some(created.url),
            Err(err) => self.error = Some(err.user_message()),
        }
        self.pending = false;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// URL of the created issue, once resolved successfully.
    #[must_use]
    pub fn success_url(&self) -> Option<&str> {
        self.success_url.as_deref()
    }

    /// Inline error message, once resolved with a failure.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
#[path = "dialog_test.rs"]
mod tests;
