//! Login over HTTP against a fake Cvent endpoint.

use super::common::*;
use cvent_api::auth::ErrorKind as AuthKind;
use cvent_api::soap::ErrorKind;
use cvent_api::SearchType;
use serde_json::json;
use wiremock::matchers::{body_string_contains, path};
use wiremock::MockServer;

fn login_result(attributes: &str) -> String {
    envelope(&format!(
        r#"<LoginResponse xmlns="http://api.cvent.com/2006-11"><LoginResult {attributes}/></LoginResponse>"#
    ))
}

#[tokio::test]
async fn test_login_pins_endpoint_and_attaches_session() {
    let server = MockServer::start().await;
    mount_login(&server, "sess-abc").await;

    soap_call("Search")
        .and(path("/pinned"))
        .and(body_string_contains("<CventSessionValue>sess-abc</CventSessionValue>"))
        .respond_with(xml(
            200,
            envelope("<SearchResponse><SearchResult><Id>E-1</Id></SearchResult></SearchResponse>"),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = http_client(&server);
    assert!(client.login(ACCOUNT, USERNAME, PASSWORD).await.unwrap());

    let session = client.connection().session().unwrap();
    assert_eq!(session.value(), "sess-abc");
    assert_eq!(session.server_url(), format!("{}/pinned", server.uri()));

    let ids = client
        .search("Event", Vec::<cvent_api::Predicate>::new(), SearchType::AndSearch)
        .await
        .unwrap();
    assert_eq!(ids, vec!["E-1"]);
}

#[tokio::test]
async fn test_access_denied() {
    let server = MockServer::start().await;
    soap_call("Login")
        .respond_with(xml(200, login_result(r#"LoginSuccess="false" ErrorMessage="Access is denied.""#)))
        .mount(&server)
        .await;

    let mut client = http_client(&server);
    let err = client.login(ACCOUNT, USERNAME, PASSWORD).await.unwrap_err();

    assert!(matches!(err.kind, ErrorKind::Auth(AuthKind::AuthorizationFailure(_))));
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn test_lockout() {
    let server = MockServer::start().await;
    soap_call("Login")
        .respond_with(xml(
            200,
            login_result(
                r#"LoginSuccess="false" ErrorMessage="Your account has been locked out. Please contact Customer care or wait for 30 minutes""#,
            ),
        ))
        .mount(&server)
        .await;

    let mut client = http_client(&server);
    let err = client.login(ACCOUNT, USERNAME, PASSWORD).await.unwrap_err();

    match err.kind {
        ErrorKind::Auth(AuthKind::AuthorizationLockout(message)) => assert_eq!(message, "Account Locked"),
        other => panic!("unexpected error kind: {:?}", other),
    }
}

fn assert_no_credentials(text: &str) {
    for secret in [ACCOUNT, USERNAME, PASSWORD] {
        assert!(!text.contains(secret), "{secret:?} leaked into {text:?}");
    }
}

#[tokio::test]
async fn test_credentials_never_leak_into_error_text() {
    let failures = [
        xml(
            200,
            login_result(&format!(
                r#"LoginSuccess="false" ErrorMessage="Unknown user {USERNAME} for account {ACCOUNT}""#
            )),
        ),
        xml(200, login_result(r#"LoginSuccess="false""#)),
        xml(500, fault("soap:Client", &format!("Bad password {PASSWORD} for {USERNAME}"))),
        xml(503, "<html>Service Unavailable</html>".to_string()),
    ];

    for response in failures {
        let server = MockServer::start().await;
        soap_call("Login").respond_with(response).mount(&server).await;

        let mut client = http_client(&server);
        let err = client.login(ACCOUNT, USERNAME, PASSWORD).await.unwrap_err();

        assert!(matches!(err.kind, ErrorKind::Auth(AuthKind::Authentication(_))));
        assert_no_credentials(&err.to_string());
        assert_no_credentials(&format!("{:?}", err));
    }
}

#[tokio::test]
async fn test_login_with_scripted_transport() {
    let transport = ScriptedTransport::new().reply(
        "Login",
        json!({"LoginResult": {"LoginSuccess": "true", "CventSessionHeader": "sess-1", "ServerURL": "https://pinned.example/soap"}}),
    );
    let mut client = scripted_client(transport);

    client.login(ACCOUNT, USERNAME, PASSWORD).await.unwrap();
    client
        .retrieve("Event", "E-1", &["Id"])
        .await
        .unwrap();

    let calls = client.connection().transport().calls();
    assert_eq!(calls[0].endpoint, cvent_api::client::SANDBOX_ENDPOINT);
    assert_eq!(calls[0].session, None);
    assert_eq!(calls[1].endpoint, "https://pinned.example/soap");
    assert_eq!(calls[1].session.as_deref(), Some("sess-1"));

    assert!(client.logout());
    client.retrieve("Event", "E-1", &["Id"]).await.unwrap();
    let calls = client.connection().transport().calls();
    assert_eq!(calls[2].endpoint, cvent_api::client::SANDBOX_ENDPOINT);
    assert_eq!(calls[2].session, None);
}
