//! Tests for GUI actions.

mod common;

use common::{anki_response, mock_action, mock_action_with_params, setup_mock_server};
use ranki::{AnkiClient, BrowserColumn, Ease, NoteBuilder, Reordering};

#[tokio::test]
async fn test_browse() {
    let server = setup_mock_server().await;
    mock_action_with_params(
        &server,
        "guiBrowse",
        serde_json::json!({"query": "deck:Default"}),
        anki_response(vec![1494723142483_i64, 1494703460437]),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let cards = client.gui().browse("deck:Default").await.unwrap();

    assert_eq!(cards.len(), 2);
}

#[tokio::test]
async fn test_browse_ordered_sends_reordering() {
    let server = setup_mock_server().await;
    mock_action_with_params(
        &server,
        "guiBrowse",
        serde_json::json!({
            "query": "deck:Japanese",
            "reorderCards": {"order": "descending", "columnId": "cardLapses"}
        }),
        anki_response(vec![7_i64]),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let order = Reordering::by(BrowserColumn::Lapses).descending();
    let cards = client
        .gui()
        .browse_ordered("deck:Japanese", &order)
        .await
        .unwrap();

    assert_eq!(cards, vec![7]);
}

#[tokio::test]
async fn test_select_card() {
    let server = setup_mock_server().await;
    mock_action_with_params(
        &server,
        "guiSelectCard",
        serde_json::json!({"card": 1494723142483_i64}),
        anki_response(true),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    assert!(client.gui().select_card(1494723142483).await.unwrap());
}

#[tokio::test]
async fn test_selected_notes() {
    let server = setup_mock_server().await;
    mock_action(
        &server,
        "guiSelectedNotes",
        anki_response(vec![1494723142483_i64]),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let notes = client.gui().selected_notes().await.unwrap();

    assert_eq!(notes, vec![1494723142483]);
}

#[tokio::test]
async fn test_add_cards_dialog() {
    let server = setup_mock_server().await;
    mock_action(&server, "guiAddCards", anki_response(1496198395707_i64)).await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let note = NoteBuilder::new("Default", "Basic")
        .field("Front", "question")
        .field("Back", "answer")
        .build();
    let id = client.gui().add_cards(&note).await.unwrap();

    assert_eq!(id, 1496198395707);
}

#[tokio::test]
async fn test_current_card_null_outside_review() {
    let server = setup_mock_server().await;
    mock_action(
        &server,
        "guiCurrentCard",
        anki_response(serde_json::Value::Null),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let card = client.gui().current_card().await.unwrap();

    assert!(card.is_none());
}

#[tokio::test]
async fn test_current_card_in_review() {
    let server = setup_mock_server().await;
    mock_action(
        &server,
        "guiCurrentCard",
        anki_response(serde_json::json!({
            "cardId": 1498938915662_i64,
            "deckName": "Default",
            "modelName": "Basic",
            "question": "...",
            "answer": "...",
            "fields": {"Front": {"value": "q", "order": 0}},
            "buttons": [1, 2, 3],
            "nextReviews": ["<1m", "<10m", "4d"]
        })),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let card = client.gui().current_card().await.unwrap().unwrap();

    assert_eq!(card.card_id, 1498938915662);
    assert_eq!(card.buttons, vec![1, 2, 3]);
    assert_eq!(card.next_reviews.len(), 3);
}

#[tokio::test]
async fn test_review_flow() {
    let server = setup_mock_server().await;
    mock_action(&server, "guiShowQuestion", anki_response(true)).await;
    mock_action(&server, "guiShowAnswer", anki_response(true)).await;
    mock_action_with_params(
        &server,
        "guiAnswerCard",
        serde_json::json!({"ease": 3}),
        anki_response(true),
    )
    .await;
    mock_action(&server, "guiStartCardTimer", anki_response(true)).await;
    mock_action(&server, "guiUndo", anki_response(true)).await;

    let client = AnkiClient::builder().url(server.uri()).build();
    assert!(client.gui().show_question().await.unwrap());
    assert!(client.gui().show_answer().await.unwrap());
    assert!(client.gui().answer_card(Ease::Good).await.unwrap());
    assert!(client.gui().start_card_timer().await.unwrap());
    assert!(client.gui().undo().await.unwrap());
}

#[tokio::test]
async fn test_deck_screens() {
    let server = setup_mock_server().await;
    mock_action_with_params(
        &server,
        "guiDeckOverview",
        serde_json::json!({"name": "Default"}),
        anki_response(true),
    )
    .await;
    mock_action(&server, "guiDeckBrowser", anki_response(serde_json::Value::Null)).await;
    mock_action_with_params(
        &server,
        "guiDeckReview",
        serde_json::json!({"name": "Default"}),
        anki_response(true),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    assert!(client.gui().deck_overview("Default").await.unwrap());
    client.gui().deck_browser().await.unwrap();
    assert!(client.gui().deck_review("Default").await.unwrap());
}

#[tokio::test]
async fn test_edit_note_and_import_file() {
    let server = setup_mock_server().await;
    mock_action_with_params(
        &server,
        "guiEditNote",
        serde_json::json!({"note": 1649198355435_i64}),
        anki_response(serde_json::Value::Null),
    )
    .await;
    mock_action_with_params(
        &server,
        "guiImportFile",
        serde_json::json!({"path": "/data/deck.apkg"}),
        anki_response(serde_json::Value::Null),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    client.gui().edit_note(1649198355435).await.unwrap();
    client.gui().import_file("/data/deck.apkg").await.unwrap();
}

#[tokio::test]
async fn test_check_database_and_exit() {
    let server = setup_mock_server().await;
    mock_action(&server, "guiCheckDatabase", anki_response(true)).await;
    mock_action(&server, "guiExitAnki", anki_response(serde_json::Value::Null)).await;

    let client = AnkiClient::builder().url(server.uri()).build();
    assert!(client.gui().check_database().await.unwrap());
    client.gui().exit_anki().await.unwrap();
}
