pub use crate::currency::{filter_currencies, CurrencyOption, DEFAULT_CURRENCY_CODE};
pub use crate::form::{FieldChange, StockDraft, StockEntryForm, SubmissionOutcome};
pub use crate::search::ProductSearch;
pub use crate::session::{SessionContext, TokenProvider};
pub use crate::stock::{StockPayload, StockRecord};
