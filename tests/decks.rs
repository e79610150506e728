//! Tests for deck actions.

mod common;

use common::{anki_response, mock_action, mock_action_with_params, setup_mock_server};
use ranki::AnkiClient;

#[tokio::test]
async fn test_deck_names() {
    let server = setup_mock_server().await;
    mock_action(
        &server,
        "deckNames",
        anki_response(vec!["Default", "Japanese", "Japanese::Vocab"]),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let names = client.decks().names().await.unwrap();

    assert_eq!(names.len(), 3);
    assert!(names.contains(&"Japanese::Vocab".to_string()));
}

#[tokio::test]
async fn test_deck_names_and_ids() {
    let server = setup_mock_server().await;
    mock_action(
        &server,
        "deckNamesAndIds",
        anki_response(serde_json::json!({"Default": 1, "Japanese": 1651445861967_i64})),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let decks = client.decks().names_and_ids().await.unwrap();

    assert_eq!(decks["Default"], 1);
    assert_eq!(decks["Japanese"], 1651445861967);
}

#[tokio::test]
async fn test_decks_of_cards() {
    let server = setup_mock_server().await;
    mock_action(
        &server,
        "getDecks",
        anki_response(serde_json::json!({
            "Default": [100, 101],
            "Japanese": [200]
        })),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let decks = client.decks().of_cards(&[100, 101, 200]).await.unwrap();

    assert_eq!(decks["Default"], vec![100, 101]);
    assert_eq!(decks["Japanese"], vec![200]);
}

#[tokio::test]
async fn test_create_deck() {
    let server = setup_mock_server().await;
    mock_action_with_params(
        &server,
        "createDeck",
        serde_json::json!({"deck": "Japanese::Grammar"}),
        anki_response(1651445861967_i64),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let id = client.decks().create("Japanese::Grammar").await.unwrap();

    assert_eq!(id, 1651445861967);
}

#[tokio::test]
async fn test_change_deck() {
    let server = setup_mock_server().await;
    mock_action_with_params(
        &server,
        "changeDeck",
        serde_json::json!({"cards": [100, 101], "deck": "Archive"}),
        anki_response(serde_json::Value::Null),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    client.decks().change(&[100, 101], "Archive").await.unwrap();
}

#[tokio::test]
async fn test_delete_decks() {
    let server = setup_mock_server().await;
    mock_action_with_params(
        &server,
        "deleteDecks",
        serde_json::json!({"decks": ["Old"], "cardsToo": true}),
        anki_response(serde_json::Value::Null),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    client.decks().delete(&["Old"], true).await.unwrap();
}

#[tokio::test]
async fn test_deck_config_round_trips_unknown_fields() {
    let server = setup_mock_server().await;
    mock_action(
        &server,
        "getDeckConfig",
        anki_response(serde_json::json!({
            "id": 1,
            "name": "Default",
            "maxTaken": 60,
            "replayq": true,
            "autoplay": true,
            "timer": 0,
            "new": {"delays": [1.0, 10.0], "order": 1, "initialFactor": 2500, "ints": [1, 4], "perDay": 20, "bury": false},
            "rev": {"perDay": 200, "ease4": 1.3, "maxIvl": 36500, "hardFactor": 1.2, "bury": false},
            "lapse": {"delays": [10.0], "leechFails": 8, "leechAction": 0, "mult": 0.0, "minInt": 1},
            "dyn": false,
            "usn": 12
        })),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let config = client.decks().config("Default").await.unwrap();

    assert_eq!(config.id, 1);
    assert_eq!(config.new.per_day, 20);
    assert_eq!(config.lapse.leech_fails, 8);
    // fields this crate does not type survive in `extra`
    assert_eq!(config.extra["usn"], 12);
    assert_eq!(config.new.extra["bury"], false);

    let body = serde_json::to_value(&config).unwrap();
    assert_eq!(body["usn"], 12);
    assert_eq!(body["new"]["bury"], false);
}

#[tokio::test]
async fn test_set_and_remove_config() {
    let server = setup_mock_server().await;
    mock_action_with_params(
        &server,
        "setDeckConfigId",
        serde_json::json!({"decks": ["Default"], "configId": 7}),
        anki_response(true),
    )
    .await;
    mock_action_with_params(
        &server,
        "removeDeckConfigId",
        serde_json::json!({"configId": 7}),
        anki_response(true),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    assert!(client.decks().set_config_id(&["Default"], 7).await.unwrap());
    assert!(client.decks().remove_config(7).await.unwrap());
}

#[tokio::test]
async fn test_clone_config_without_source() {
    let server = setup_mock_server().await;
    mock_action_with_params(
        &server,
        "cloneDeckConfigId",
        serde_json::json!({"name": "Hard decks"}),
        anki_response(1652346570000_i64),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let id = client.decks().clone_config("Hard decks", None).await.unwrap();

    assert_eq!(id, 1652346570000);

    // cloneFrom is omitted, not sent as null
    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(body["params"].get("cloneFrom").is_none());
}

#[tokio::test]
async fn test_deck_stats() {
    let server = setup_mock_server().await;
    mock_action(
        &server,
        "getDeckStats",
        anki_response(serde_json::json!({
            "1651445861967": {
                "deck_id": 1651445861967_i64,
                "name": "Japanese",
                "new_count": 20,
                "learn_count": 5,
                "review_count": 60,
                "total_in_deck": 1024
            }
        })),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let stats = client.decks().stats(&["Japanese"]).await.unwrap();

    let deck = &stats["1651445861967"];
    assert_eq!(deck.name, "Japanese");
    assert_eq!(deck.review_count, 60);
    assert_eq!(deck.total_in_deck, 1024);
}
