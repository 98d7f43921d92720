use std::future::Future;

use clenica_models::contact::{ContactSubmission, SubmissionRejection};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactService: Send + Sync + 'static {
    /// Whether the delivery provider and the forwarding address are
    /// configured. Submissions are rejected with
    /// [`ContactSubmitError::NotConfigured`] while this returns `false`.
    fn configured(&self) -> bool;

    /// Validates the submission and forwards it: one notification to the
    /// operator, one acknowledgement to the submitter. Partial delivery
    /// counts as failure.
    fn submit(
        &self,
        submission: ContactSubmission,
    ) -> impl Future<Output = Result<(), ContactSubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error(transparent)]
    Rejected(#[from] SubmissionRejection),
    #[error("Email service not configured.")]
    NotConfigured,
    #[error("Unable to send email just now.")]
    Send,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactService {
    pub fn with_configured(mut self, configured: bool) -> Self {
        self.expect_configured().return_const(configured);
        self
    }

    pub fn with_submit(
        mut self,
        submission: ContactSubmission,
        result: Result<(), ContactSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
