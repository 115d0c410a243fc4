//! Tests against a real Cvent sandbox account.
//!
//! Run with:
//!   CVENT_ACCOUNT_NUMBER=... CVENT_USERNAME=... CVENT_PASSWORD=... \
//!   cargo test --test integration live -- --ignored --nocapture

use cvent_api::{AccountCredentials, ClientConfig, CventClient, Predicate, SearchType};

async fn sandbox_client() -> CventClient {
    let credentials = AccountCredentials::from_env().unwrap_or_else(|e| {
        panic!(
            "\n\nLive tests need a Cvent sandbox account: {e}\n\
             Export CVENT_ACCOUNT_NUMBER, CVENT_USERNAME and CVENT_PASSWORD.\n\n"
        )
    });

    let mut client = CventClient::new(ClientConfig::sandbox()).expect("client");
    client
        .login_with_credentials(&credentials)
        .await
        .expect("sandbox login failed");
    client
}

#[tokio::test]
#[ignore]
async fn test_live_describe_event() {
    let client = sandbox_client().await;
    let fields = client.describe_fields("Event", false).await.unwrap();
    assert!(fields.iter().any(|f| f == "Id"));
}

#[tokio::test]
#[ignore]
async fn test_live_search_and_retrieve_events() {
    let client = sandbox_client().await;
    let records = client
        .search_and_retrieve(
            "Event",
            Vec::<Predicate>::new(),
            &["EventCode", "EventTitle"],
            SearchType::AndSearch,
        )
        .await
        .unwrap();

    for (id, record) in &records {
        assert_eq!(record["Id"], serde_json::json!(id));
    }
}
