use mockall::automock;

/// Read-only session state the dashboard shares with the form.
///
/// The organization id seeds the draft's `organization_id` default
/// when present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionContext {
    pub organization_id: Option<String>,
}

impl SessionContext {
    pub fn new(organization_id: Option<String>) -> Self {
        Self { organization_id }
    }
}

/// Access credential source. The form never reads token storage
/// directly; the host hands it an implementation of this trait.
#[automock]
pub trait TokenProvider: Send + Sync {
    /// The stored access token, or `None` when the session holds no
    /// credential.
    fn access_token(&self) -> Option<String>;
}
