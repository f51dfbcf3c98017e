// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
#![allow(dead_code)]

use fluent::{Bot, Context};
use serde_json::{json, Value};

pub const TOKEN: &str = "123456:test-token";

pub fn bot_for(server: &mockito::ServerGuard) -> Bot {
  Bot::builder()
    .token(TOKEN)
    .api_url(server.url())
    .build()
    .expect("bot must build")
}

pub fn path(method: &str) -> String {
  format!("/bot{}/{}", TOKEN, method)
}

pub fn ok(result: Value) -> String {
  json!({ "ok": true, "result": result }).to_string()
}

pub fn message(message_id: i64, chat_id: i64) -> Value {
  json!({
    "message_id": message_id,
    "date": 1,
    "chat": {"id": chat_id, "type": "supergroup", "title": "Test"}
  })
}

/// Text message `10` from user `7` in chat `-100`.
pub fn text_update(text: &str) -> Value {
  json!({
    "update_id": 1,
    "message": {
      "message_id": 10,
      "date": 1,
      "chat": {"id": -100, "type": "supergroup", "title": "Test"},
      "from": {"id": 7, "is_bot": false, "first_name": "Ann"},
      "text": text
    }
  })
}

pub fn context_for(server: &mockito::ServerGuard, update: Value) -> Context {
  Context::new(
    bot_for(server),
    serde_json::from_value(update).expect("update must parse"),
  )
}
