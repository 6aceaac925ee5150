use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::currency::DEFAULT_CURRENCY_CODE;
use crate::session::SessionContext;
use crate::stock::StockPayload;

pub const DEFAULT_PRODUCT_ID: &str = "default-product-id";
pub const DEFAULT_ORGANIZATION_ID: &str = "default-org-id";

/// In-progress user input for a new stock item. Numeric fields stay
/// strings; [`StockDraft::with_change`] guarantees they are always
/// either empty or numeric-parseable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockDraft {
    pub name: String,
    pub buying_price: String,
    pub selling_price: String,
    pub quantity: String,
    pub currency_code: String,
    pub product_id: String,
    pub organization_id: String,
}

/// One user edit to a single draft field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldChange {
    Name(String),
    BuyingPrice(String),
    SellingPrice(String),
    Quantity(String),
    CurrencyCode(String),
    ProductId(String),
    OrganizationId(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    BuyingPrice,
    SellingPrice,
    Quantity,
    CurrencyCode,
    ProductId,
    OrganizationId,
}

pub const FIELDS: &[Field] = &[
    Field::Name,
    Field::BuyingPrice,
    Field::SellingPrice,
    Field::Quantity,
    Field::CurrencyCode,
    Field::ProductId,
    Field::OrganizationId,
];

fn numeric_text(value: &str) -> bool {
    value.is_empty() || value.parse::<f64>().map(f64::is_finite).unwrap_or(false)
}

// `Number(value) || 1` in the source form: empty, non-numeric, and
// zero all coerce to 1 before stepping.
fn stepper_base(value: &str) -> f64 {
    match value.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() && parsed != 0.0 => parsed,
        _ => 1.0,
    }
}

fn price_rule(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        Some("Price is required")
    } else if !value.parse::<f64>().map(f64::is_finite).unwrap_or(false) {
        Some("Must be a number")
    } else {
        None
    }
}

impl StockDraft {
    /// Defaults applied whenever the form opens: quantity 1, the
    /// default currency, and the organization id from the session when
    /// present.
    pub fn new(session: &SessionContext) -> Self {
        Self {
            name: String::new(),
            buying_price: String::new(),
            selling_price: String::new(),
            quantity: "1".to_string(),
            currency_code: DEFAULT_CURRENCY_CODE.to_string(),
            product_id: DEFAULT_PRODUCT_ID.to_string(),
            organization_id: session
                .organization_id
                .clone()
                .unwrap_or_else(|| DEFAULT_ORGANIZATION_ID.to_string()),
        }
    }

    /// Pure field transition. Price and quantity edits that would make
    /// the field non-numeric and non-empty are dropped at this point,
    /// not at validation time.
    pub fn with_change(&self, change: FieldChange) -> StockDraft {
        let mut next = self.clone();

        match change {
            FieldChange::Name(value) => next.name = value,
            FieldChange::BuyingPrice(value) => {
                if numeric_text(&value) {
                    next.buying_price = value;
                }
            }
            FieldChange::SellingPrice(value) => {
                if numeric_text(&value) {
                    next.selling_price = value;
                }
            }
            FieldChange::Quantity(value) => {
                if numeric_text(&value) {
                    next.quantity = value;
                }
            }
            FieldChange::CurrencyCode(value) => next.currency_code = value,
            FieldChange::ProductId(value) => next.product_id = value,
            FieldChange::OrganizationId(value) => next.organization_id = value,
        }

        next
    }

    /// Quantity stepper, upward. No upper bound.
    pub fn with_quantity_incremented(&self) -> StockDraft {
        let mut next = self.clone();
        next.quantity = format!("{}", stepper_base(&self.quantity) + 1.0);
        next
    }

    /// Quantity stepper, downward. Clamped to a floor of 1.
    pub fn with_quantity_decremented(&self) -> StockDraft {
        let mut next = self.clone();
        next.quantity = format!("{}", (stepper_base(&self.quantity) - 1.0).max(1.0));
        next
    }

    /// Field-level rule evaluation. `None` means the field passes.
    pub fn validate(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Name => {
                if self.name.is_empty() {
                    Some("Product name is required")
                } else {
                    None
                }
            }
            Field::BuyingPrice => price_rule(&self.buying_price),
            Field::SellingPrice => price_rule(&self.selling_price),
            Field::Quantity => {
                if self.quantity.is_empty() {
                    Some("Quantity is required")
                } else {
                    match self.quantity.parse::<f64>() {
                        Ok(parsed) if parsed.is_finite() && parsed.fract() == 0.0 && parsed >= 1.0 => {
                            None
                        }
                        _ => Some("Must be at least 1"),
                    }
                }
            }
            Field::CurrencyCode => {
                if self.currency_code.is_empty() {
                    Some("Currency is required")
                } else {
                    None
                }
            }
            Field::ProductId => {
                if self.product_id.is_empty() {
                    Some("Product ID is required")
                } else {
                    None
                }
            }
            Field::OrganizationId => {
                if self.organization_id.is_empty() {
                    Some("Organization ID is required")
                } else {
                    None
                }
            }
        }
    }

    /// Every failing field with its inline message, in field order.
    pub fn field_errors(&self) -> Vec<(Field, &'static str)> {
        FIELDS
            .iter()
            .filter_map(|field| self.validate(*field).map(|message| (*field, message)))
            .collect()
    }

    /// The submit affordance is enabled exactly when this holds.
    pub fn is_submittable(&self) -> bool {
        FIELDS.iter().all(|field| self.validate(*field).is_none())
    }

    /// One-way transformation into the submission body. `None` when
    /// any field still fails its rule.
    pub fn to_payload(&self, date_created: DateTime<Utc>) -> Option<StockPayload> {
        if !self.is_submittable() {
            return None;
        }

        Some(StockPayload {
            name: self.name.clone(),
            buying_price: self.buying_price.parse().ok()?,
            selling_price: self.selling_price.parse().ok()?,
            quantity: self.quantity.parse::<f64>().ok()? as u32,
            currency_code: self.currency_code.clone(),
            product_id: self.product_id.clone(),
            organization_id: self.organization_id.clone(),
            date_created,
        })
    }
}
