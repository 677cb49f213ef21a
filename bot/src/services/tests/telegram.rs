//! Tests for TelegramTransport against a mocked Bot API

use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shared::{ChatId, IncomingMessage, MessageContent, OutgoingMessage, ReplyKeyboard, UserId};

use crate::error::BotError;
use crate::services::TelegramTransport;
use crate::traits::ChatTransport;

const TOKEN: &str = "123:test";

fn transport_for(server: &MockServer) -> TelegramTransport {
    TelegramTransport::new(TOKEN, 0).unwrap().with_api_base(server.uri())
}

fn ok(result: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ok": true, "result": result }))
}

#[tokio::test]
async fn test_receive_parses_text_and_voice() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/bot{TOKEN}/getUpdates")))
        .and(body_partial_json(serde_json::json!({ "offset": 0 })))
        .respond_with(ok(serde_json::json!([
            {
                "update_id": 10,
                "message": {
                    "message_id": 1,
                    "from": { "id": 42, "first_name": "Оля" },
                    "chat": { "id": 42 },
                    "text": "/start"
                }
            },
            {
                "update_id": 11,
                "message": {
                    "message_id": 2,
                    "from": { "id": 43, "first_name": "Ігор" },
                    "chat": { "id": 43 },
                    "voice": { "file_id": "voice-1", "duration": 2 }
                }
            },
            {
                "update_id": 12,
                "message": {
                    "message_id": 3,
                    "from": { "id": 44, "first_name": "Sticker" },
                    "chat": { "id": 44 },
                    "sticker": {}
                }
            }
        ])))
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    let messages = transport.receive().await.unwrap();

    assert_eq!(
        messages,
        vec![
            IncomingMessage::text(UserId::new(42), "Оля", "/start"),
            IncomingMessage::voice(UserId::new(43), "Ігор", "voice-1"),
        ]
    );
}

#[tokio::test]
async fn test_receive_advances_offset() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/bot{TOKEN}/getUpdates")))
        .and(body_partial_json(serde_json::json!({ "offset": 0 })))
        .respond_with(ok(serde_json::json!([{ "update_id": 7 }])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("/bot{TOKEN}/getUpdates")))
        .and(body_partial_json(serde_json::json!({ "offset": 8 })))
        .respond_with(ok(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    assert!(transport.receive().await.unwrap().is_empty());
    assert!(transport.receive().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_send_with_keyboard() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/bot{TOKEN}/sendMessage")))
        .and(body_partial_json(serde_json::json!({
            "chat_id": 42,
            "text": "Головне меню:",
            "reply_markup": {
                "keyboard": [[{ "text": "A" }, { "text": "B" }]],
                "resize_keyboard": true,
                "one_time_keyboard": false
            }
        })))
        .respond_with(ok(serde_json::json!({ "message_id": 5 })))
        .expect(1)
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    let message = OutgoingMessage::new(ChatId::new(42), "Головне меню:")
        .with_keyboard(ReplyKeyboard::row(["A", "B"]).resized());
    transport.send(message).await.unwrap();
}

#[tokio::test]
async fn test_api_error_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ok": false,
            "description": "Forbidden: bot was blocked by the user"
        })))
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    let result = transport.send(OutgoingMessage::new(ChatId::new(1), "hi")).await;
    match result {
        Err(BotError::TransportError { message }) => assert!(message.contains("blocked")),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_download_file() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/bot{TOKEN}/getFile")))
        .and(body_partial_json(serde_json::json!({ "file_id": "voice-1" })))
        .respond_with(ok(serde_json::json!({ "file_id": "voice-1", "file_path": "voice/file_3.oga" })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/file/bot{TOKEN}/voice/file_3.oga")))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1u8, 2, 3]))
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    assert_eq!(transport.download_file("voice-1").await.unwrap(), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_send_voice_with_caption() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/bot{TOKEN}/sendVoice")))
        .and(body_partial_json(serde_json::json!({
            "chat_id": 7,
            "voice": "voice-1",
            "caption": "Оля"
        })))
        .respond_with(ok(serde_json::json!({ "message_id": 9 })))
        .expect(1)
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    transport
        .send_voice(ChatId::new(7), "voice-1", Some("Оля".to_string()))
        .await
        .unwrap();
}

#[test]
fn test_incoming_voice_content() {
    let message = IncomingMessage::voice(UserId::new(1), "A", "f");
    assert_eq!(message.content, MessageContent::Voice { file_id: "f".to_string() });
}
