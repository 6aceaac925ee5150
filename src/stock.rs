use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::automock;
use reqwest::Client as HTTPClient;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error as ThisError;

const STOCKS_PATH: &str = "/stocks";

// The service call has no cancellation, so a hung request would leave
// the form's in-flight guard stuck without this bound.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Notice shown when the credential is absent or the service answers 401.
pub const SESSION_EXPIRED_NOTICE: &str = "Your session has expired. Please log in again.";

/// Fallback notice for rejections without a service-provided detail.
pub const SUBMIT_FAILED_NOTICE: &str = "Failed to add stock. Please try again.";

#[derive(ThisError, Debug)]
pub enum Error {
    /// No access token at submit time; the service is never contacted.
    #[error("No access token found")]
    MissingToken,
    /// The service answered with a non-success status.
    #[error("stock submission rejected with status {status}")]
    Rejected { status: u16, detail: Option<String> },
    /// Transport-level failure, including the request timeout.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// User-visible notice for this failure. A 401 from the service is
    /// mapped the same as a missing credential.
    pub fn user_notice(&self) -> String {
        match self {
            Error::MissingToken => SESSION_EXPIRED_NOTICE.to_string(),
            Error::Rejected { status: 401, .. } => SESSION_EXPIRED_NOTICE.to_string(),
            Error::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => SUBMIT_FAILED_NOTICE.to_string(),
        }
    }
}

/// Normalized submission body: numeric strings from the draft parsed
/// into numbers, plus the creation timestamp attached at submit time.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StockPayload {
    pub name: String,
    pub buying_price: f64,
    pub selling_price: f64,
    pub quantity: u32,
    pub currency_code: String,
    pub product_id: String,
    pub organization_id: String,
    pub date_created: DateTime<Utc>,
}

/// Record the service returns for a created stock item.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StockRecord {
    pub id: String,
    pub name: String,
    pub buying_price: f64,
    pub quantity: u32,
    pub currency_code: String,
    pub date_created: DateTime<Utc>,
}

#[derive(Deserialize)]
struct RejectionBody {
    detail: Option<String>,
}

#[automock]
#[async_trait]
pub trait Interface: Send + Sync {
    async fn create_stock(
        &self,
        access_token: String,
        payload: StockPayload,
    ) -> Result<StockRecord, Error>;
}

#[derive(Clone)]
pub struct Client {
    base_url: String,
    http_client: HTTPClient,
}

impl Client {
    pub fn new(base_url: String) -> Self {
        let http_client = HTTPClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Client {
            base_url,
            http_client,
        }
    }
}

#[async_trait]
impl Interface for Client {
    async fn create_stock(
        &self,
        access_token: String,
        payload: StockPayload,
    ) -> Result<StockRecord, Error> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), STOCKS_PATH);

        let response = self
            .http_client
            .post(url)
            .bearer_auth(&access_token)
            .header("accept", "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<RejectionBody>()
                .await
                .ok()
                .and_then(|body| body.detail);

            return Err(Error::Rejected {
                status: status.as_u16(),
                detail,
            });
        }

        let record = response.json::<StockRecord>().await?;

        Ok(record)
    }
}
