// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{client::Bot, config::BotConfig};
use error::Error;
use std::{sync::Arc, time::Duration};
use url::Url;

#[derive(Default)]
pub struct BotBuilder {
  pub(crate) config: BotConfig,
}

impl BotBuilder {
  pub fn token(mut self, token: impl Into<String>) -> Self {
    self.config.token = token.into();
    self
  }

  /// Base URL of a self-hosted Bot API server.
  pub fn api_url(mut self, url: impl Into<String>) -> Self {
    self.config.api_url = url.into();
    self
  }

  pub fn timeout(mut self, timeout: Duration) -> Self {
    self.config.timeout = timeout;
    self
  }

  pub fn build(self) -> Result<Bot, Error> {
    if self.config.token.is_empty() {
      return Err(Error::Config("Bot token cannot be empty".into()));
    }

    let url = Url::parse(&self.config.api_url)?;
    if !matches!(url.scheme(), "http" | "https") {
      return Err(Error::Config(format!(
        "Unsupported API URL scheme: {}",
        url.scheme()
      )));
    }

    let client = reqwest::Client::builder()
      .timeout(self.config.timeout)
      .build()
      .map_err(Error::Http)?;

    Ok(Bot {
      config: Arc::new(self.config),
      client,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_token_is_rejected() {
    assert!(matches!(Bot::builder().build(), Err(Error::Config(_))));
  }

  #[test]
  fn api_url_must_be_http() {
    let result = Bot::builder()
      .token("1:x")
      .api_url("ftp://example.com")
      .build();
    assert!(matches!(result, Err(Error::Config(_))));

    let result = Bot::builder().token("1:x").api_url("not a url").build();
    assert!(matches!(result, Err(Error::Url(_))));
  }
}
