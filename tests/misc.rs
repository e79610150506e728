//! Tests for miscellaneous actions.

mod common;

use common::{anki_error, anki_response, mock_action, mock_action_with_params, setup_mock_server};
use ranki::{AnkiClient, Error, MultiAction};

#[tokio::test]
async fn test_version() {
    let server = setup_mock_server().await;
    mock_action(&server, "version", anki_response(6)).await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let version = client.misc().version().await.unwrap();

    assert_eq!(version, 6);
}

#[tokio::test]
async fn test_version_error() {
    let server = setup_mock_server().await;
    mock_action(&server, "version", anki_error("internal error")).await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let err = client.misc().version().await.unwrap_err();

    assert!(err.to_string().contains("internal error"));
}

#[tokio::test]
async fn test_connection_refused() {
    // a port that's almost certainly not in use
    let client = AnkiClient::builder().url("http://127.0.0.1:59999").build();

    let result = client.misc().version().await;
    assert!(matches!(result, Err(Error::ConnectionRefused)));
}

#[tokio::test]
async fn test_request_permission() {
    let server = setup_mock_server().await;
    mock_action(
        &server,
        "requestPermission",
        anki_response(serde_json::json!({
            "permission": "granted",
            "requireApiKey": false,
            "version": 6
        })),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let result = client.misc().request_permission().await.unwrap();

    assert_eq!(result.permission, "granted");
    assert!(!result.require_api_key);
    assert_eq!(result.version, Some(6));
}

#[tokio::test]
async fn test_permission_denied_is_typed() {
    let server = setup_mock_server().await;
    mock_action(
        &server,
        "deckNames",
        anki_error("valid api key must be provided, permission denied"),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let result = client.decks().names().await;

    assert!(matches!(result, Err(Error::PermissionDenied)));
}

#[tokio::test]
async fn test_api_key_is_sent_when_configured() {
    let server = setup_mock_server().await;
    mock_action_with_params(
        &server,
        "findCards",
        serde_json::json!({"query": "is:due"}),
        anki_response(Vec::<i64>::new()),
    )
    .await;

    let client = AnkiClient::builder()
        .url(server.uri())
        .api_key("secret")
        .build();
    client.cards().find("is:due").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["key"], "secret");
}

#[tokio::test]
async fn test_api_reflect() {
    let server = setup_mock_server().await;
    mock_action(
        &server,
        "apiReflect",
        anki_response(serde_json::json!({
            "scopes": ["actions"],
            "actions": ["findCards"]
        })),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let result = client
        .misc()
        .api_reflect(Some(&["actions"]), Some(&["findCards", "bogus"]))
        .await
        .unwrap();

    assert_eq!(result.actions, vec!["findCards"]);
}

#[tokio::test]
async fn test_sync_and_reload() {
    let server = setup_mock_server().await;
    mock_action(&server, "sync", anki_response(serde_json::Value::Null)).await;
    mock_action(
        &server,
        "reloadCollection",
        anki_response(serde_json::Value::Null),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    client.misc().sync().await.unwrap();
    client.misc().reload_collection().await.unwrap();
}

#[tokio::test]
async fn test_profiles() {
    let server = setup_mock_server().await;
    mock_action(
        &server,
        "getProfiles",
        anki_response(vec!["User 1", "Work"]),
    )
    .await;
    mock_action(&server, "getActiveProfile", anki_response("User 1")).await;
    mock_action_with_params(
        &server,
        "loadProfile",
        serde_json::json!({"name": "Work"}),
        anki_response(true),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    assert_eq!(client.misc().profiles().await.unwrap().len(), 2);
    assert_eq!(client.misc().active_profile().await.unwrap(), "User 1");
    assert!(client.misc().load_profile("Work").await.unwrap());
}

#[tokio::test]
async fn test_packages() {
    let server = setup_mock_server().await;
    mock_action_with_params(
        &server,
        "exportPackage",
        serde_json::json!({"deck": "Japanese", "path": "/tmp/japanese.apkg", "includeSched": true}),
        anki_response(true),
    )
    .await;
    mock_action_with_params(
        &server,
        "importPackage",
        serde_json::json!({"path": "backup.apkg"}),
        anki_response(true),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    assert!(
        client
            .misc()
            .export_package("Japanese", "/tmp/japanese.apkg", true)
            .await
            .unwrap()
    );
    assert!(client.misc().import_package("backup.apkg").await.unwrap());
}

#[tokio::test]
async fn test_raw_multi_passthrough() {
    let server = setup_mock_server().await;
    mock_action(
        &server,
        "multi",
        anki_response(serde_json::json!([
            {"result": ["Default"], "error": null},
            {"result": 6, "error": null}
        ])),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let actions = [
        MultiAction::new("deckNames"),
        MultiAction::new("version"),
    ];
    let results = client.misc().multi(&actions).await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[1]["result"], 6);
}
