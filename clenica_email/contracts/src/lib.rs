use std::future::Future;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EmailService: Send + Sync + 'static {
    /// Whether the delivery provider is fully configured. [`EmailService::send`]
    /// must not be called while this returns `false`.
    fn available(&self) -> bool;

    /// Attempts delivery. `Ok(false)` means the provider rejected the
    /// message, `Err` means the provider could not be reached.
    fn send(&self, email: Email) -> impl Future<Output = anyhow::Result<bool>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub recipient: String,
    pub subject: String,
    /// Replies go to the configured sender identity when unset.
    pub reply_to: Option<String>,
    pub text: String,
    pub html: String,
}

#[cfg(feature = "mock")]
impl MockEmailService {
    pub fn with_available(mut self, available: bool) -> Self {
        self.expect_available().return_const(available);
        self
    }

    pub fn with_send(mut self, email: Email, result: bool) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_send_error(mut self, email: Email) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(move |_| {
                Box::pin(std::future::ready(Err(anyhow::anyhow!(
                    "provider unreachable"
                ))))
            });
        self
    }
}
