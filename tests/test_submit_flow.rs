use std::sync::Arc;

use serde_json::json;
use stockroom::form::{FieldChange, StockDraft, StockEntryForm, SubmissionOutcome};
use stockroom::session::{MockTokenProvider, SessionContext, TokenProvider};
use stockroom::stock;

fn token_provider() -> Arc<dyn TokenProvider> {
    let mut provider = MockTokenProvider::new();
    provider
        .expect_access_token()
        .returning(|| Some("access-token".to_string()));
    Arc::new(provider)
}

fn fill_valid(form: &mut StockEntryForm) {
    form.apply_change(FieldChange::Name("Bag of rice".to_string()));
    form.apply_change(FieldChange::BuyingPrice("45000".to_string()));
    form.apply_change(FieldChange::SellingPrice("52000".to_string()));
    form.apply_change(FieldChange::Quantity("3".to_string()));
}

#[tokio::test]
async fn test_full_submit_flow_against_the_service() {
    let mut mock_server = tokio::task::spawn_blocking(|| mockito::Server::new())
        .await
        .unwrap();

    let created = mock_server
        .mock("POST", "/stocks")
        .match_header("authorization", "Bearer access-token")
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": "stock-1",
                "name": "Bag of rice",
                "buying_price": 45000.0,
                "quantity": 3,
                "currency_code": "NGN",
                "date_created": "2025-03-01T12:00:00Z"
            })
            .to_string(),
        )
        .create();

    std::env::set_var("STOCKROOM_API_URL", mock_server.url());
    let client = stockroom::config::Config::from_env().stock_client();

    let session = SessionContext::new(Some("org-1".to_string()));
    let mut form = StockEntryForm::new(token_provider(), Arc::new(client), session.clone());

    form.set_open(true);
    fill_valid(&mut form);

    match form.submit().await.unwrap() {
        SubmissionOutcome::Created(record) => {
            assert_eq!(record.id, "stock-1");
            assert_eq!(record.quantity, 3);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }

    created.assert();
    assert_eq!(form.draft(), &StockDraft::new(&session));
}

#[tokio::test]
async fn test_rejected_submit_keeps_the_draft_for_a_retry() {
    let mut mock_server = tokio::task::spawn_blocking(|| mockito::Server::new())
        .await
        .unwrap();

    mock_server
        .mock("POST", "/stocks")
        .with_status(422)
        .with_header("content-type", "application/json")
        .with_body(json!({"detail": "Product ID does not exist"}).to_string())
        .create();

    let session = SessionContext::new(Some("org-1".to_string()));
    let client = stock::Client::new(mock_server.url().to_string());
    let mut form = StockEntryForm::new(token_provider(), Arc::new(client), session);

    form.set_open(true);
    fill_valid(&mut form);
    let draft_before = form.draft().clone();

    match form.submit().await.unwrap() {
        SubmissionOutcome::Failed(err) => {
            assert_eq!(err.user_notice(), "Product ID does not exist");
        }
        other => panic!("unexpected outcome: {:?}", other),
    }

    assert_eq!(form.draft(), &draft_before);
    assert!(form.can_submit());
}

#[tokio::test]
async fn test_missing_token_aborts_before_the_network() {
    let mut mock_server = tokio::task::spawn_blocking(|| mockito::Server::new())
        .await
        .unwrap();

    let never_hit = mock_server.mock("POST", "/stocks").expect(0).create();

    let mut provider = MockTokenProvider::new();
    provider.expect_access_token().returning(|| None);

    let client = stock::Client::new(mock_server.url().to_string());
    let mut form = StockEntryForm::new(
        Arc::new(provider),
        Arc::new(client),
        SessionContext::default(),
    );

    form.set_open(true);
    fill_valid(&mut form);

    match form.submit().await.unwrap() {
        SubmissionOutcome::Failed(err) => {
            assert_eq!(err.user_notice(), stock::SESSION_EXPIRED_NOTICE);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }

    never_hit.assert();
}
