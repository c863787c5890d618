//! Integration tests for the identity gate using wiremock.

use serde_json::json;
use skycast_auth::{AuthError, AuthGate, Session};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_signed_in_principal_array() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/.auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "user_id": "abc123",
                "provider_name": "google",
                "user_details": "user@example.com"
            }
        ])))
        .mount(&server)
        .await;

    let gate = AuthGate::new(&server.uri()).unwrap();
    let identity = gate.current_user().await.unwrap().expect("signed in");

    assert_eq!(identity.user_id, "abc123");
    assert_eq!(identity.identity_provider.as_deref(), Some("google"));
}

#[tokio::test]
async fn test_empty_array_means_signed_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/.auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let gate = AuthGate::new(&server.uri()).unwrap();
    assert!(gate.current_user().await.unwrap().is_none());
}

#[tokio::test]
async fn test_endpoint_failure_carries_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/.auth/me"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1) // no retries
        .mount(&server)
        .await;

    let gate = AuthGate::new(&server.uri()).unwrap();
    let err = gate.current_user().await.unwrap_err();

    assert!(matches!(err, AuthError::Endpoint { status: 500 }));
}

#[tokio::test]
async fn test_client_principal_object_shape_is_rejected() {
    // The historical clientPrincipal-object variant is not the supported
    // contract; it should surface as a parse error, not a silent sign-in.
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/.auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "clientPrincipal": {
                "userId": "abc123",
                "identityProvider": "aad"
            }
        })))
        .mount(&server)
        .await;

    let gate = AuthGate::new(&server.uri()).unwrap();
    assert!(matches!(
        gate.current_user().await.unwrap_err(),
        AuthError::Parse(_)
    ));
}

#[tokio::test]
async fn test_session_caches_identity_across_reads() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/.auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "user_id": "abc123" }
        ])))
        .expect(1) // one refresh, many reads
        .mount(&server)
        .await;

    let session = Session::new(AuthGate::new(&server.uri()).unwrap());
    assert!(!session.is_signed_in());

    session.refresh().await.unwrap();

    assert!(session.is_signed_in());
    let cached = session.current().expect("cached identity");
    assert_eq!(cached.user_id, "abc123");
    // Second read must not hit the endpoint again.
    assert!(session.current().is_some());
}

#[tokio::test]
async fn test_failed_refresh_leaves_cache_untouched() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/.auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "user_id": "abc123" }
        ])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/.auth/me"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let session = Session::new(AuthGate::new(&server.uri()).unwrap());
    session.refresh().await.unwrap();
    assert!(session.is_signed_in());

    assert!(session.refresh().await.is_err());
    // Last-known identity survives the failed check.
    assert!(session.is_signed_in());
}
