// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//! Length and count limits, checked on both sides of each bound.
mod common;

use common::*;
use fluent::{
  types::InputFile, AnswerCallbackQuery, Error, SendMediaGroup, SetChatDescription, SetChatTitle,
};
use mockito::Matcher;
use serde_json::json;

fn album(bot: fluent::Bot, items: usize) -> SendMediaGroup {
  (0..items).fold(SendMediaGroup::new(bot).to(-100), |group, i| {
    group.photo(InputFile::id(format!("photo{}", i)))
  })
}

#[tokio::test]
async fn media_group_takes_two_to_ten_items() {
  let mut server = mockito::Server::new_async().await;
  let mock = server
    .mock("POST", path("sendMediaGroup").as_str())
    .with_body(ok(json!([message(1, -100), message(2, -100)])))
    .expect(2)
    .create_async()
    .await;
  let bot = bot_for(&server);

  let one = album(bot.clone(), 1).send().await;
  let eleven = album(bot.clone(), 11).send().await;
  assert!(matches!(one, Err(Error::Validation(_))));
  assert!(matches!(eleven, Err(Error::Validation(_))));

  assert!(album(bot.clone(), 2).send().await.is_ok());
  assert!(album(bot, 10).send().await.is_ok());
  mock.assert_async().await;
}

#[tokio::test]
async fn chat_title_takes_one_to_128_chars() {
  let mut server = mockito::Server::new_async().await;
  let mock = server
    .mock("POST", path("setChatTitle").as_str())
    .with_body(ok(json!(true)))
    .expect(2)
    .create_async()
    .await;
  let bot = bot_for(&server);

  let empty = SetChatTitle::new(bot.clone(), "").to(-100).send().await;
  let long = SetChatTitle::new(bot.clone(), "я".repeat(129))
    .to(-100)
    .send()
    .await;
  assert!(matches!(empty, Err(Error::Validation(_))));
  assert!(matches!(long, Err(Error::Validation(_))));

  assert!(SetChatTitle::new(bot.clone(), "a").to(-100).send().await.unwrap());
  assert!(SetChatTitle::new(bot, "я".repeat(128))
    .to(-100)
    .send()
    .await
    .unwrap());
  mock.assert_async().await;
}

#[tokio::test]
async fn chat_description_takes_up_to_255_chars() {
  let mut server = mockito::Server::new_async().await;
  let mock = server
    .mock("POST", path("setChatDescription").as_str())
    .with_body(ok(json!(true)))
    .expect(2)
    .create_async()
    .await;
  let bot = bot_for(&server);

  let long = SetChatDescription::new(bot.clone())
    .to(-100)
    .description("d".repeat(256))
    .send()
    .await;
  assert!(matches!(long, Err(Error::Validation(_))));

  assert!(SetChatDescription::new(bot.clone())
    .to(-100)
    .description("d".repeat(255))
    .send()
    .await
    .unwrap());
  assert!(SetChatDescription::new(bot).to(-100).send().await.unwrap());
  mock.assert_async().await;
}

#[tokio::test]
async fn callback_answer_text_takes_up_to_200_chars() {
  let mut server = mockito::Server::new_async().await;
  let mock = server
    .mock("POST", path("answerCallbackQuery").as_str())
    .match_body(Matcher::PartialJson(json!({"callback_query_id": "q1"})))
    .with_body(ok(json!(true)))
    .expect(1)
    .create_async()
    .await;
  let bot = bot_for(&server);

  let long = AnswerCallbackQuery::new(bot.clone(), "q1")
    .text("t".repeat(201))
    .send()
    .await;
  assert!(matches!(long, Err(Error::Validation(_))));

  assert!(AnswerCallbackQuery::new(bot, "q1")
    .text("t".repeat(200))
    .send()
    .await
    .unwrap());
  mock.assert_async().await;
}
