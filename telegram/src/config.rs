// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use std::time::Duration;

pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug)]
pub struct BotConfig {
  pub(crate) token: String,
  pub(crate) api_url: String,
  pub(crate) timeout: Duration,
}

impl Default for BotConfig {
  fn default() -> Self {
    Self {
      token: String::new(),
      api_url: TELEGRAM_API_BASE.to_string(),
      timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
    }
  }
}

/// Per-request overrides of the bot-wide settings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
  pub timeout: Option<Duration>,
  pub api_url: Option<String>,
}
