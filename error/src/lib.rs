// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use thiserror::Error as ThisError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(ThisError, Debug)]
pub enum Error {
  /// The Bot API answered with `ok: false`.
  #[error("API error {code}: {description}")]
  Api { code: i64, description: String },
  #[error("Flood control exceeded, retry after {0}s")]
  RetryAfter(u64),
  #[error("Group migrated to supergroup {0}")]
  MigrateToChat(i64),
  #[error("Rate limit exceeded")]
  RateLimitExceeded,
  #[error("Configuration error: {0}")]
  Config(String),
  #[error("Invalid request: {0}")]
  Validation(String),
  #[error("No chat to send to: set one explicitly or use a context with an effective chat")]
  MissingChat,
  #[error("No message to act on: set a message id or an inline message id")]
  MissingMessage,
  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),
  #[error("HTTP error: {0}")]
  Http(#[from] reqwest::Error),
  #[error("Failed to parse response: {0}")]
  Json(#[from] serde_json::Error),
  #[error("Invalid URL: {0}")]
  Url(#[from] url::ParseError),
  #[error("Invalid settings file: {0}")]
  Toml(#[from] toml::de::Error),
}

impl Error {
  pub fn validation(message: impl Into<String>) -> Self {
    Self::Validation(message.into())
  }

  /// Whether the Bot API asked to slow down.
  pub fn is_flood(&self) -> bool {
    matches!(self, Self::RetryAfter(_) | Self::RateLimitExceeded)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn api_error_message_includes_code() {
    let err = Error::Api {
      code: 400,
      description: "Bad Request: chat not found".into(),
    };
    assert_eq!(err.to_string(), "API error 400: Bad Request: chat not found");
  }

  #[test]
  fn flood_detection() {
    assert!(Error::RetryAfter(3).is_flood());
    assert!(Error::RateLimitExceeded.is_flood());
    assert!(!Error::MissingChat.is_flood());
  }
}
