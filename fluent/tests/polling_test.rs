// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
mod common;

use common::*;
use fluent::{handler_fn, Context, Error, Polling};
use mockito::Matcher;
use serde_json::json;
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn update(update_id: i64, text: &str) -> serde_json::Value {
  let mut update = text_update(text);
  update["update_id"] = json!(update_id);
  update
}

#[tokio::test]
async fn handler_sees_every_update_and_offset_advances() {
  let mut server = mockito::Server::new_async().await;
  let first = server
    .mock("POST", path("getUpdates").as_str())
    .match_body(Matcher::PartialJson(json!({"offset": 0, "timeout": 1})))
    .with_body(ok(json!([update(5, "one"), update(6, "two")])))
    .create_async()
    .await;
  let second = server
    .mock("POST", path("getUpdates").as_str())
    .match_body(Matcher::PartialJson(json!({"offset": 7})))
    .with_body(ok(json!([])))
    .create_async()
    .await;

  let seen = Arc::new(Mutex::new(Vec::new()));
  let handler = {
    let seen = seen.clone();
    handler_fn(move |ctx: Context| {
      let seen = seen.clone();
      async move {
        let text = ctx.effective_message().and_then(|m| m.text.clone());
        seen.lock().unwrap().push(text.unwrap_or_default());
        Ok::<(), Error>(())
      }
    })
  };

  let mut polling = Polling::new(bot_for(&server)).timeout(Duration::from_secs(1));
  assert_eq!(polling.poll_once(&handler).await.unwrap(), 2);
  assert_eq!(polling.poll_once(&handler).await.unwrap(), 0);

  assert_eq!(*seen.lock().unwrap(), vec!["one", "two"]);
  first.assert_async().await;
  second.assert_async().await;
}

#[tokio::test]
async fn handler_errors_do_not_stop_the_batch() {
  let mut server = mockito::Server::new_async().await;
  let _mock = server
    .mock("POST", path("getUpdates").as_str())
    .with_body(ok(json!([update(1, "fail"), update(2, "ok")])))
    .create_async()
    .await;

  let handled = Arc::new(Mutex::new(0));
  let handler = {
    let handled = handled.clone();
    handler_fn(move |ctx: Context| {
      let handled = handled.clone();
      async move {
        *handled.lock().unwrap() += 1;
        match ctx.effective_message().and_then(|m| m.text.as_deref()) {
          Some("fail") => Err(Error::validation("boom")),
          _ => Ok(()),
        }
      }
    })
  };

  let mut polling = Polling::new(bot_for(&server));
  assert_eq!(polling.poll_once(&handler).await.unwrap(), 2);
  assert_eq!(*handled.lock().unwrap(), 2);
}

#[tokio::test]
async fn transport_errors_surface_from_poll_once() {
  let mut server = mockito::Server::new_async().await;
  let _mock = server
    .mock("POST", path("getUpdates").as_str())
    .with_status(409)
    .with_body(
      json!({
        "ok": false,
        "error_code": 409,
        "description": "Conflict: terminated by other getUpdates request"
      })
      .to_string(),
    )
    .create_async()
    .await;

  let handler = handler_fn(|_ctx: Context| async { Ok::<(), Error>(()) });
  let err = Polling::new(bot_for(&server))
    .poll_once(&handler)
    .await
    .unwrap_err();

  assert!(matches!(err, Error::Api { code: 409, .. }));
}
