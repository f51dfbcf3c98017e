// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  options::{execute, Options},
  validate::{self, MAX_CALLBACK_TEXT_LENGTH},
};
use error::Error;
use std::time::Duration;
use telegram::{methods::AnswerCallbackQueryRequest, Bot};
use tracing::instrument;

/// `answerCallbackQuery`: stops the button's loading spinner, optionally with a toast or alert.
pub struct AnswerCallbackQuery {
  bot: Bot,
  query_id: Option<String>,
  text: Option<String>,
  alert: Option<bool>,
  url: Option<String>,
  cache_time: Option<i64>,
  opts: Options,
}

impl AnswerCallbackQuery {
  pub fn new(bot: Bot, query_id: impl Into<String>) -> Self {
    Self::current(bot, Some(query_id.into()))
  }

  pub(crate) fn current(bot: Bot, query_id: Option<String>) -> Self {
    Self {
      bot,
      query_id,
      text: None,
      alert: None,
      url: None,
      cache_time: None,
      opts: Options::default(),
    }
  }

  pub fn text(mut self, text: impl Into<String>) -> Self {
    self.text = Some(text.into());
    self
  }

  /// Shows the text as a modal alert instead of a toast.
  pub fn alert(mut self) -> Self {
    self.alert = Some(true);
    self
  }

  pub fn url(mut self, url: impl Into<String>) -> Self {
    self.url = Some(url.into());
    self
  }

  /// Lets clients cache the answer.
  pub fn cache_for(mut self, duration: Duration) -> Self {
    self.cache_time = Some(i64::try_from(duration.as_secs()).unwrap_or(i64::MAX));
    self
  }

  #[instrument(skip(self))]
  pub async fn send(self) -> Result<bool, Error> {
    let query_id = self
      .query_id
      .ok_or_else(|| Error::validation("no callback query to answer"))?;
    if let Some(text) = &self.text {
      validate::length("text", text, 0, MAX_CALLBACK_TEXT_LENGTH)?;
    }
    let request = AnswerCallbackQueryRequest {
      callback_query_id: query_id,
      text: self.text,
      show_alert: self.alert,
      url: self.url,
      cache_time: self.cache_time,
    };
    execute(&self.bot, &request, &self.opts).await
  }
}

request_options!(AnswerCallbackQuery => bool);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn cache_time_saturates() {
    let bot = Bot::new("1:test").unwrap();
    let hour = AnswerCallbackQuery::new(bot.clone(), "q").cache_for(Duration::from_secs(3600));
    let forever = AnswerCallbackQuery::new(bot, "q").cache_for(Duration::MAX);

    assert_eq!(hour.cache_time, Some(3600));
    assert_eq!(forever.cache_time, Some(i64::MAX));
  }
}
