// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//! Transport tests against a mock Bot API server.
use mockito::Matcher;
use serde_json::json;
use std::time::Duration;
use telegram::{
  methods::{GetMeRequest, SendDocumentRequest, SendOptions},
  types::InputFile,
  Bot, Error, RequestOptions,
};

const TOKEN: &str = "123456:test-token";

fn bot_for(server: &mockito::ServerGuard) -> Bot {
  Bot::builder()
    .token(TOKEN)
    .api_url(server.url())
    .build()
    .expect("bot must build")
}

#[tokio::test]
async fn get_me_parses_result() {
  let mut server = mockito::Server::new_async().await;
  let mock = server
    .mock("POST", format!("/bot{}/getMe", TOKEN).as_str())
    .with_status(200)
    .with_header("content-type", "application/json")
    .with_body(r#"{"ok":true,"result":{"id":1,"is_bot":true,"first_name":"Test","username":"test_bot"}}"#)
    .create_async()
    .await;

  let me = bot_for(&server).call(&GetMeRequest::default()).await.unwrap();

  assert_eq!(me.id, 1);
  assert_eq!(me.username.as_deref(), Some("test_bot"));
  mock.assert_async().await;
}

#[tokio::test]
async fn api_error_is_surfaced() {
  let mut server = mockito::Server::new_async().await;
  let _mock = server
    .mock("POST", format!("/bot{}/getMe", TOKEN).as_str())
    .with_status(401)
    .with_body(r#"{"ok":false,"error_code":401,"description":"Unauthorized"}"#)
    .create_async()
    .await;

  let err = bot_for(&server)
    .call(&GetMeRequest::default())
    .await
    .unwrap_err();

  assert!(matches!(err, Error::Api { code: 401, .. }));
}

#[tokio::test]
async fn bare_429_is_rate_limit() {
  let mut server = mockito::Server::new_async().await;
  let _mock = server
    .mock("POST", format!("/bot{}/getMe", TOKEN).as_str())
    .with_status(429)
    .with_body("Too Many Requests")
    .create_async()
    .await;

  let err = bot_for(&server)
    .call(&GetMeRequest::default())
    .await
    .unwrap_err();

  assert!(matches!(err, Error::RateLimitExceeded));
}

#[tokio::test]
async fn request_options_override_api_url() {
  let mut default_server = mockito::Server::new_async().await;
  let unused = default_server
    .mock("POST", Matcher::Any)
    .expect(0)
    .create_async()
    .await;

  let mut other = mockito::Server::new_async().await;
  let used = other
    .mock("POST", format!("/bot{}/getMe", TOKEN).as_str())
    .with_body(r#"{"ok":true,"result":{"id":2,"is_bot":true,"first_name":"Other"}}"#)
    .create_async()
    .await;

  let options = RequestOptions {
    timeout: Some(Duration::from_secs(5)),
    api_url: Some(other.url()),
  };
  let me = bot_for(&default_server)
    .call_with(&GetMeRequest::default(), &options)
    .await
    .unwrap();

  assert_eq!(me.first_name, "Other");
  used.assert_async().await;
  unused.assert_async().await;
}

#[tokio::test]
async fn uploads_go_as_multipart() {
  let mut server = mockito::Server::new_async().await;
  let mock = server
    .mock("POST", format!("/bot{}/sendDocument", TOKEN).as_str())
    .match_header(
      "content-type",
      Matcher::Regex("multipart/form-data".to_string()),
    )
    .match_body(Matcher::AllOf(vec![
      Matcher::Regex(r#"name="chat_id""#.to_string()),
      Matcher::Regex(r#"name="document"; filename="notes.txt""#.to_string()),
      Matcher::Regex("hello from memory".to_string()),
    ]))
    .with_body(json!({
      "ok": true,
      "result": {
        "message_id": 10,
        "date": 1,
        "chat": {"id": 77, "type": "private"},
        "document": {"file_id": "BQAD", "file_unique_id": "u1", "file_name": "notes.txt"}
      }
    }).to_string())
    .create_async()
    .await;

  let request = SendDocumentRequest {
    chat_id: 77.into(),
    document: InputFile::memory("notes.txt", b"hello from memory".to_vec()),
    caption: Default::default(),
    disable_content_type_detection: None,
    options: SendOptions::default(),
  };
  let message = bot_for(&server).call(&request).await.unwrap();

  assert_eq!(message.message_id, 10);
  assert_eq!(
    message.document.and_then(|d| d.file_name).as_deref(),
    Some("notes.txt")
  );
  mock.assert_async().await;
}
