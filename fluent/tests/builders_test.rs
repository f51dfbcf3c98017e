// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//! Builders against a mock Bot API server.
mod common;

use chrono::{TimeZone, Utc};
use common::*;
use fluent::{
  types::{InputFile, MessageEntity, ParseMode},
  BanChatMember, DeleteMessages, Error, InlineKeyboard, SendMessage, SendPhoto,
};
use mockito::Matcher;
use serde_json::json;
use std::time::{Duration, Instant};

#[tokio::test]
async fn reply_targets_context_chat_and_message() {
  let mut server = mockito::Server::new_async().await;
  let mock = server
    .mock("POST", path("sendMessage").as_str())
    .match_body(Matcher::PartialJson(json!({
      "chat_id": -100,
      "text": "pong",
      "reply_parameters": {"message_id": 10}
    })))
    .with_body(ok(message(11, -100)))
    .create_async()
    .await;

  let ctx = context_for(&server, text_update("/ping"));
  let sent = ctx.reply("pong").send().await.unwrap();

  assert_eq!(sent.message_id, 11);
  mock.assert_async().await;
}

#[tokio::test]
async fn explicit_chat_beats_context_chat() {
  let mut server = mockito::Server::new_async().await;
  let mock = server
    .mock("POST", path("sendMessage").as_str())
    .match_body(Matcher::PartialJson(json!({"chat_id": "@announcements"})))
    .with_body(ok(message(3, -200)))
    .create_async()
    .await;

  let ctx = context_for(&server, text_update("hi"));
  ctx
    .send_message("release notes")
    .to("@announcements")
    .send()
    .await
    .unwrap();

  mock.assert_async().await;
}

#[tokio::test]
async fn no_chat_means_no_request() {
  let mut server = mockito::Server::new_async().await;
  let mock = server
    .mock("POST", Matcher::Any)
    .expect(0)
    .create_async()
    .await;

  let err = SendMessage::new(bot_for(&server), "lost")
    .send()
    .await
    .unwrap_err();

  assert!(matches!(err, Error::MissingChat));
  mock.assert_async().await;
}

#[tokio::test]
async fn context_parse_mode_is_a_default() {
  let mut server = mockito::Server::new_async().await;
  let html = server
    .mock("POST", path("sendMessage").as_str())
    .match_body(Matcher::PartialJson(json!({"text": "<b>a</b>", "parse_mode": "HTML"})))
    .with_body(ok(message(1, -100)))
    .create_async()
    .await;
  let markdown = server
    .mock("POST", path("sendMessage").as_str())
    .match_body(Matcher::PartialJson(json!({"text": "*b*", "parse_mode": "MarkdownV2"})))
    .with_body(ok(message(2, -100)))
    .create_async()
    .await;

  let ctx = context_for(&server, text_update("hi")).with_parse_mode(ParseMode::Html);
  ctx.send_message("<b>a</b>").send().await.unwrap();
  ctx.send_message("*b*").markdown().send().await.unwrap();

  html.assert_async().await;
  markdown.assert_async().await;
}

#[tokio::test]
async fn explicit_entities_skip_context_parse_mode() {
  let mut server = mockito::Server::new_async().await;
  let mock = server
    .mock("POST", path("sendMessage").as_str())
    .match_body(Matcher::Json(json!({
      "chat_id": -100,
      "text": "a < b",
      "entities": [{"type": "bold", "offset": 0, "length": 1}]
    })))
    .with_body(ok(message(4, -100)))
    .create_async()
    .await;

  let bold = MessageEntity {
    kind: "bold".into(),
    offset: 0,
    length: 1,
    url: None,
    user: None,
    language: None,
    custom_emoji_id: None,
  };
  let ctx = context_for(&server, text_update("hi")).with_parse_mode(ParseMode::Html);
  ctx
    .send_message("a < b")
    .entities(vec![bold])
    .send()
    .await
    .unwrap();

  mock.assert_async().await;
}

#[tokio::test]
async fn button_rows_join_inline_markup() {
  let mut server = mockito::Server::new_async().await;
  let mock = server
    .mock("POST", path("sendMessage").as_str())
    .match_body(Matcher::PartialJson(json!({
      "reply_markup": {"inline_keyboard": [
        [{"text": "Yes", "callback_data": "vote:yes"}],
        [{"text": "Docs", "url": "https://core.telegram.org/bots/api"}]
      ]}
    })))
    .with_body(ok(message(6, -100)))
    .create_async()
    .await;

  let ctx = context_for(&server, text_update("/vote"));
  ctx
    .send_message("Agree?")
    .markup(InlineKeyboard::new().text("Yes", "vote:yes"))
    .button_row(vec![("Docs", "https://core.telegram.org/bots/api")])
    .send()
    .await
    .unwrap();

  mock.assert_async().await;
}

#[tokio::test]
async fn keyboard_is_sent_as_reply_markup() {
  let mut server = mockito::Server::new_async().await;
  let mock = server
    .mock("POST", path("sendMessage").as_str())
    .match_body(Matcher::PartialJson(json!({
      "reply_markup": {"inline_keyboard": [[{"text": "Yes", "callback_data": "vote:yes"}]]}
    })))
    .with_body(ok(message(5, -100)))
    .create_async()
    .await;

  let ctx = context_for(&server, text_update("/vote"));
  ctx
    .send_message("Agree?")
    .markup(InlineKeyboard::new().text("Yes", "vote:yes"))
    .send()
    .await
    .unwrap();

  mock.assert_async().await;
}

#[tokio::test]
async fn message_id_bounds_checked_before_sending() {
  let mut server = mockito::Server::new_async().await;
  let mock = server
    .mock("POST", Matcher::Any)
    .expect(0)
    .create_async()
    .await;
  let bot = bot_for(&server);

  let empty = DeleteMessages::new(bot.clone(), Vec::new())
    .to(-100)
    .send()
    .await;
  let too_many = DeleteMessages::new(bot, 1..=101).to(-100).send().await;

  assert!(matches!(empty, Err(Error::Validation(_))));
  assert!(matches!(too_many, Err(Error::Validation(_))));
  mock.assert_async().await;
}

#[tokio::test]
async fn ban_until_is_sent_as_unix_time() {
  let mut server = mockito::Server::new_async().await;
  let mock = server
    .mock("POST", path("banChatMember").as_str())
    .match_body(Matcher::PartialJson(json!({
      "chat_id": -100,
      "user_id": 42,
      "until_date": 1_893_456_000
    })))
    .with_body(ok(json!(true)))
    .create_async()
    .await;

  let until = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
  let banned = BanChatMember::new(bot_for(&server), 42)
    .to(-100)
    .until(until)
    .send()
    .await
    .unwrap();

  assert!(banned);
  mock.assert_async().await;
}

#[tokio::test]
async fn copy_lands_in_the_current_chat() {
  let mut server = mockito::Server::new_async().await;
  let mock = server
    .mock("POST", path("copyMessage").as_str())
    .match_body(Matcher::PartialJson(json!({
      "chat_id": -100,
      "from_chat_id": "@source",
      "message_id": 5
    })))
    .with_body(ok(json!({"message_id": 99})))
    .create_async()
    .await;

  let ctx = context_for(&server, text_update("copy"));
  let copied = ctx.copy_message("@source", 5).send().await.unwrap();

  assert_eq!(copied.message_id, 99);
  mock.assert_async().await;
}

#[tokio::test]
async fn photo_upload_is_multipart() {
  let mut server = mockito::Server::new_async().await;
  let mock = server
    .mock("POST", path("sendPhoto").as_str())
    .match_header(
      "content-type",
      Matcher::Regex("multipart/form-data".to_string()),
    )
    .match_body(Matcher::AllOf(vec![
      Matcher::Regex(r#"name="photo"; filename="cat.jpg""#.to_string()),
      Matcher::Regex(r#"name="caption""#.to_string()),
      Matcher::Regex("meow".to_string()),
    ]))
    .with_body(ok(message(12, 1)))
    .create_async()
    .await;

  SendPhoto::new(bot_for(&server), InputFile::memory("cat.jpg", b"not really a jpeg".to_vec()))
    .to(1)
    .caption("meow")
    .send()
    .await
    .unwrap();

  mock.assert_async().await;
}

#[tokio::test]
async fn after_holds_the_request_back() {
  let mut server = mockito::Server::new_async().await;
  let _mock = server
    .mock("POST", path("sendMessage").as_str())
    .with_body(ok(message(1, 1)))
    .create_async()
    .await;

  let started = Instant::now();
  SendMessage::new(bot_for(&server), "later")
    .to(1)
    .after(Duration::from_millis(200))
    .send()
    .await
    .unwrap();

  assert!(started.elapsed() >= Duration::from_millis(200));
}

#[tokio::test]
async fn delete_after_removes_the_sent_message() {
  let mut server = mockito::Server::new_async().await;
  let _send = server
    .mock("POST", path("sendMessage").as_str())
    .with_body(ok(message(77, -100)))
    .create_async()
    .await;
  let delete = server
    .mock("POST", path("deleteMessage").as_str())
    .match_body(Matcher::PartialJson(json!({"chat_id": -100, "message_id": 77})))
    .with_body(ok(json!(true)))
    .expect(1)
    .create_async()
    .await;

  let ctx = context_for(&server, text_update("temp"));
  ctx
    .send_message("self-destructing")
    .delete_after(Duration::from_millis(50))
    .send()
    .await
    .unwrap();

  tokio::time::sleep(Duration::from_millis(500)).await;
  delete.assert_async().await;
}

#[tokio::test]
async fn api_url_overrides_one_request() {
  let mut default_server = mockito::Server::new_async().await;
  let unused = default_server
    .mock("POST", Matcher::Any)
    .expect(0)
    .create_async()
    .await;

  let mut local = mockito::Server::new_async().await;
  let used = local
    .mock("POST", path("sendMessage").as_str())
    .with_body(ok(message(1, 1)))
    .create_async()
    .await;

  SendMessage::new(bot_for(&default_server), "local api")
    .to(1)
    .api_url(local.url())
    .send()
    .await
    .unwrap();

  used.assert_async().await;
  unused.assert_async().await;
}

#[tokio::test]
async fn spawn_runs_detached() {
  let mut server = mockito::Server::new_async().await;
  let _mock = server
    .mock("POST", path("sendMessage").as_str())
    .with_body(ok(message(8, 1)))
    .create_async()
    .await;

  let handle = SendMessage::new(bot_for(&server), "background").to(1).spawn();
  let sent = handle.await.unwrap().unwrap();

  assert_eq!(sent.message_id, 8);
}

#[tokio::test]
async fn callback_edit_and_answer() {
  let mut server = mockito::Server::new_async().await;
  let edit = server
    .mock("POST", path("editMessageText").as_str())
    .match_body(Matcher::PartialJson(json!({
      "chat_id": -100,
      "message_id": 10,
      "text": "Voted"
    })))
    .with_body(ok(message(10, -100)))
    .create_async()
    .await;
  let answer = server
    .mock("POST", path("answerCallbackQuery").as_str())
    .match_body(Matcher::PartialJson(json!({"callback_query_id": "q1", "text": "Thanks"})))
    .with_body(ok(json!(true)))
    .create_async()
    .await;

  let ctx = context_for(
    &server,
    json!({
      "update_id": 5,
      "callback_query": {
        "id": "q1",
        "from": {"id": 7, "is_bot": false, "first_name": "Ann"},
        "message": message(10, -100),
        "chat_instance": "ci",
        "data": "vote:yes"
      }
    }),
  );

  let edited = ctx.edit_message_text("Voted").send().await.unwrap();
  assert_eq!(edited.message().map(|m| m.message_id), Some(10));
  assert!(ctx.answer_callback("Thanks").send().await.unwrap());

  edit.assert_async().await;
  answer.assert_async().await;
}

#[tokio::test]
async fn answer_without_callback_query_fails() {
  let server = mockito::Server::new_async().await;
  let ctx = context_for(&server, text_update("hi"));

  let err = ctx.answer_callback("nope").send().await.unwrap_err();
  assert!(matches!(err, Error::Validation(_)));
}

#[tokio::test]
async fn flood_control_is_reported() {
  let mut server = mockito::Server::new_async().await;
  let _mock = server
    .mock("POST", path("sendMessage").as_str())
    .with_status(429)
    .with_body(
      json!({
        "ok": false,
        "error_code": 429,
        "description": "Too Many Requests: retry after 7",
        "parameters": {"retry_after": 7}
      })
      .to_string(),
    )
    .create_async()
    .await;

  let err = SendMessage::new(bot_for(&server), "spam")
    .to(1)
    .send()
    .await
    .unwrap_err();

  assert!(matches!(err, Error::RetryAfter(7)));
}
