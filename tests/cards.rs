//! Tests for card actions.

mod common;

use common::{anki_error, anki_response, mock_action, mock_action_with_params, setup_mock_server};
use ranki::AnkiClient;

#[tokio::test]
async fn test_find_cards_sends_one_request_with_query() {
    let server = setup_mock_server().await;
    mock_action_with_params(
        &server,
        "findCards",
        serde_json::json!({"query": "is:due"}),
        anki_response(vec![1_i64, 2, 3]),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let cards = client.cards().find("is:due").await.unwrap();

    assert_eq!(cards, vec![1, 2, 3]);
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_find_cards_empty() {
    let server = setup_mock_server().await;
    mock_action(&server, "findCards", anki_response(Vec::<i64>::new())).await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let cards = client.cards().find("deck:NonExistent").await.unwrap();

    assert!(cards.is_empty());
}

#[tokio::test]
async fn test_in_deck_quotes_the_deck_name() {
    let server = setup_mock_server().await;
    mock_action_with_params(
        &server,
        "findCards",
        serde_json::json!({"query": "deck:\"My Deck\""}),
        anki_response(vec![7_i64]),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let cards = client.cards().in_deck("My Deck").await.unwrap();

    assert_eq!(cards, vec![7]);
}

#[tokio::test]
async fn test_cards_info() {
    let server = setup_mock_server().await;
    mock_action(
        &server,
        "cardsInfo",
        anki_response(vec![serde_json::json!({
            "cardId": 1234567890_i64,
            "note": 9876543210_i64,
            "deckName": "Default",
            "modelName": "Basic",
            "question": "<div>Front</div>",
            "answer": "<div>Back</div>",
            "fields": {
                "Front": {"value": "Hello", "order": 0},
                "Back": {"value": "World", "order": 1}
            },
            "css": ".card { font-family: arial; }",
            "fieldOrder": 0,
            "ord": 0,
            "type": 2,
            "queue": 2,
            "due": 100,
            "interval": 10,
            "factor": 2500,
            "reps": 5,
            "lapses": 1,
            "left": 0,
            "mod": 1234567890
        })]),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let cards = client.cards().info(&[1234567890]).await.unwrap();

    assert_eq!(cards.len(), 1);
    let card = &cards[0];
    assert_eq!(card.card_id, 1234567890);
    assert_eq!(card.note_id, 9876543210);
    assert_eq!(card.deck_name, "Default");
    assert_eq!(card.fields["Front"].value, "Hello");
    assert_eq!(card.ease_factor, 2500);
    assert_eq!(card.interval, 10);
    assert_eq!(card.lapses, 1);
}

#[tokio::test]
async fn test_cards_to_notes() {
    let server = setup_mock_server().await;
    mock_action(
        &server,
        "cardsToNotes",
        anki_response(vec![1000_i64, 1001, 1002]),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let notes = client.cards().to_notes(&[1, 2, 3]).await.unwrap();

    assert_eq!(notes, vec![1000, 1001, 1002]);
}

#[tokio::test]
async fn test_cards_mod_time() {
    let server = setup_mock_server().await;
    mock_action(
        &server,
        "cardsModTime",
        anki_response(vec![
            serde_json::json!({"cardId": 123, "mod": 1705330000}),
            serde_json::json!({"cardId": 456, "mod": 1705330100}),
        ]),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let times = client.cards().mod_time(&[123, 456]).await.unwrap();

    assert_eq!(times.len(), 2);
    assert_eq!(times[0].card_id, 123);
    assert_eq!(times[1].mod_time, 1705330100);
}

#[tokio::test]
async fn test_suspend_and_unsuspend() {
    let server = setup_mock_server().await;
    mock_action(&server, "suspend", anki_response(true)).await;
    mock_action(&server, "unsuspend", anki_response(true)).await;

    let client = AnkiClient::builder().url(server.uri()).build();
    assert!(client.cards().suspend(&[1234567890]).await.unwrap());
    assert!(client.cards().unsuspend(&[1234567890]).await.unwrap());
}

#[tokio::test]
async fn test_are_suspended_marks_missing_cards() {
    let server = setup_mock_server().await;
    mock_action(
        &server,
        "areSuspended",
        anki_response(serde_json::json!([true, false, null])),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let states = client.cards().are_suspended(&[1, 2, 3]).await.unwrap();

    assert_eq!(states, vec![Some(true), Some(false), None]);
}

#[tokio::test]
async fn test_are_due() {
    let server = setup_mock_server().await;
    mock_action(&server, "areDue", anki_response(vec![true, false])).await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let due = client.cards().are_due(&[1, 2]).await.unwrap();

    assert_eq!(due, vec![true, false]);
}

#[tokio::test]
async fn test_intervals_current_and_history() {
    let server = setup_mock_server().await;
    mock_action_with_params(
        &server,
        "getIntervals",
        serde_json::json!({"cards": [100], "complete": false}),
        anki_response(vec![21_i64]),
    )
    .await;
    mock_action_with_params(
        &server,
        "getIntervals",
        serde_json::json!({"cards": [100], "complete": true}),
        anki_response(vec![vec![-60_i64, 1, 4, 21]]),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    assert_eq!(client.cards().intervals(&[100]).await.unwrap(), vec![21]);
    assert_eq!(
        client.cards().interval_history(&[100]).await.unwrap(),
        vec![vec![-60, 1, 4, 21]]
    );
}

#[tokio::test]
async fn test_ease_factors_round_trip() {
    let server = setup_mock_server().await;
    mock_action(&server, "getEaseFactors", anki_response(vec![2500_i64, 2100])).await;
    mock_action_with_params(
        &server,
        "setEaseFactors",
        serde_json::json!({"cards": [1, 2], "easeFactors": [2300, 2300]}),
        anki_response(vec![true, true]),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    assert_eq!(
        client.cards().ease_factors(&[1, 2]).await.unwrap(),
        vec![2500, 2100]
    );
    assert_eq!(
        client
            .cards()
            .set_ease_factors(&[1, 2], &[2300, 2300])
            .await
            .unwrap(),
        vec![true, true]
    );
}

#[tokio::test]
async fn test_forget_and_relearn_return_unit() {
    let server = setup_mock_server().await;
    mock_action(&server, "forgetCards", anki_response(serde_json::Value::Null)).await;
    mock_action(&server, "relearnCards", anki_response(serde_json::Value::Null)).await;

    let client = AnkiClient::builder().url(server.uri()).build();
    client.cards().forget(&[1]).await.unwrap();
    client.cards().relearn(&[1]).await.unwrap();
}

#[tokio::test]
async fn test_answer_cards_serializes_ease_numbers() {
    use ranki::{CardAnswer, Ease};

    let server = setup_mock_server().await;
    mock_action_with_params(
        &server,
        "answerCards",
        serde_json::json!({"answers": [
            {"cardId": 10, "ease": 3},
            {"cardId": 11, "ease": 1}
        ]}),
        anki_response(vec![true, true]),
    )
    .await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let answers = [
        CardAnswer::new(10, Ease::Good),
        CardAnswer::new(11, Ease::Again),
    ];
    let ok = client.cards().answer(&answers).await.unwrap();

    assert_eq!(ok, vec![true, true]);
}

#[tokio::test]
async fn test_api_error_propagates() {
    let server = setup_mock_server().await;
    mock_action(&server, "findCards", anki_error("query syntax error")).await;

    let client = AnkiClient::builder().url(server.uri()).build();
    let err = client.cards().find("is:").await.unwrap_err();

    assert!(err.to_string().contains("query syntax error"));
}
