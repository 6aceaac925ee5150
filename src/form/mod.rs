mod draft;

pub use draft::{
    Field, FieldChange, StockDraft, DEFAULT_ORGANIZATION_ID, DEFAULT_PRODUCT_ID, FIELDS,
};

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, warn};

use crate::session::{SessionContext, TokenProvider};
use crate::stock;
use crate::stock::StockRecord;

/// Terminal result of one submission attempt. Consumed by the UI
/// feedback path and discarded; failures carry their classification so
/// the host renders [`stock::Error::user_notice`].
#[derive(Debug)]
pub enum SubmissionOutcome {
    Created(StockRecord),
    Failed(stock::Error),
}

/// The add-stock form. Owns the draft and the submit protocol; the
/// token source and the stock service are injected, and the host
/// controls visibility through [`StockEntryForm::set_open`].
pub struct StockEntryForm {
    token_provider: Arc<dyn TokenProvider>,
    stock_client: Arc<dyn stock::Interface>,
    session: SessionContext,
    draft: StockDraft,
    open: bool,
    submitting: bool,
}

impl StockEntryForm {
    pub fn new(
        token_provider: Arc<dyn TokenProvider>,
        stock_client: Arc<dyn stock::Interface>,
        session: SessionContext,
    ) -> Self {
        let draft = StockDraft::new(&session);

        Self {
            token_provider,
            stock_client,
            session,
            draft,
            open: false,
            submitting: false,
        }
    }

    pub fn draft(&self) -> &StockDraft {
        &self.draft
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Visibility is host-controlled. The closed-to-open transition
    /// re-applies the defaults, discarding any prior unsaved input.
    pub fn set_open(&mut self, open: bool) {
        if open && !self.open {
            self.draft = StockDraft::new(&self.session);
        }
        self.open = open;
    }

    /// Replaces the session context. An open form resets immediately
    /// so the organization default tracks the session.
    pub fn update_session(&mut self, session: SessionContext) {
        self.session = session;
        if self.open {
            self.draft = StockDraft::new(&self.session);
        }
    }

    pub fn apply_change(&mut self, change: FieldChange) {
        self.draft = self.draft.with_change(change);
    }

    pub fn increment_quantity(&mut self) {
        self.draft = self.draft.with_quantity_incremented();
    }

    pub fn decrement_quantity(&mut self) {
        self.draft = self.draft.with_quantity_decremented();
    }

    /// Whether the submit affordance is enabled: every field rule
    /// passes and no submission is in flight.
    pub fn can_submit(&self) -> bool {
        !self.submitting && self.draft.is_submittable()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Runs the submission protocol. Returns `None` when the submit
    /// affordance is disabled (invalid draft or a submission already
    /// in flight); the service is not contacted in that case, nor when
    /// the credential is absent. On success the draft resets to its
    /// defaults; on failure it is left untouched for a retry.
    pub async fn submit(&mut self) -> Option<SubmissionOutcome> {
        if !self.can_submit() {
            return None;
        }
        let payload = self.draft.to_payload(Utc::now())?;

        let access_token = match self.token_provider.access_token() {
            Some(token) => token,
            None => {
                warn!("stock submission aborted: no access token");
                return Some(SubmissionOutcome::Failed(stock::Error::MissingToken));
            }
        };

        self.submitting = true;
        let result = self.stock_client.create_stock(access_token, payload).await;
        self.submitting = false;

        let outcome = match result {
            Ok(record) => {
                self.draft = StockDraft::new(&self.session);
                SubmissionOutcome::Created(record)
            }
            Err(err) => {
                error!("failed to add stock: {err}");
                SubmissionOutcome::Failed(err)
            }
        };

        Some(outcome)
    }
}
