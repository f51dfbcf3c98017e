// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use error::Error;
use serde::Deserialize;
use std::{env, fs, path::Path, time::Duration};
use telegram::{types::ParseMode, Bot, TELEGRAM_API_BASE};
use tracing::instrument;

pub const TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";
pub const API_URL_ENV: &str = "TELEGRAM_API_URL";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
  #[serde(default)]
  pub bot: BotSettings,
  #[serde(default)]
  pub polling: PollingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BotSettings {
  #[serde(default)]
  pub token: String,
  #[serde(default = "default_api_url")]
  pub api_url: String,
  #[serde(default = "default_timeout_secs")]
  pub timeout_secs: u64,
  #[serde(default)]
  pub parse_mode: Option<ParseMode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PollingSettings {
  #[serde(default = "default_poll_timeout_secs")]
  pub timeout_secs: u64,
  #[serde(default)]
  pub allowed_updates: Vec<String>,
}

fn default_api_url() -> String {
  TELEGRAM_API_BASE.to_string()
}

fn default_timeout_secs() -> u64 {
  30
}

fn default_poll_timeout_secs() -> u64 {
  25
}

impl Default for BotSettings {
  fn default() -> Self {
    Self {
      token: String::new(),
      api_url: default_api_url(),
      timeout_secs: default_timeout_secs(),
      parse_mode: None,
    }
  }
}

impl Default for PollingSettings {
  fn default() -> Self {
    Self {
      timeout_secs: default_poll_timeout_secs(),
      allowed_updates: Vec::new(),
    }
  }
}

impl Settings {
  #[instrument(skip(path))]
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
    let content = fs::read_to_string(path)?;
    let settings: Self = toml::from_str(&content)?;
    tracing::debug!("Loaded configuration successfully");
    Ok(settings)
  }

  /// Reads the file if it exists, then applies environment overrides.
  pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
    let mut settings = if path.as_ref().exists() {
      Self::from_file(path)?
    } else {
      tracing::debug!("No settings file, using defaults");
      Self::default()
    };
    settings.apply_env();
    Ok(settings)
  }

  pub fn apply_env(&mut self) {
    if let Ok(token) = env::var(TOKEN_ENV) {
      if !token.trim().is_empty() {
        self.bot.token = token.trim().to_string();
      }
    }
    if let Ok(url) = env::var(API_URL_ENV) {
      if !url.trim().is_empty() {
        self.bot.api_url = url.trim().to_string();
      }
    }
  }

  pub fn bot(&self) -> Result<Bot, Error> {
    if self.bot.token.is_empty() {
      return Err(Error::Config(format!(
        "Bot token missing: set [bot].token or {}",
        TOKEN_ENV
      )));
    }

    Bot::builder()
      .token(self.bot.token.clone())
      .api_url(self.bot.api_url.clone())
      .timeout(Duration::from_secs(self.bot.timeout_secs))
      .build()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_full_file() {
    let settings: Settings = toml::from_str(
      r#"
        [bot]
        token = "1:abc"
        api_url = "http://localhost:8081"
        timeout_secs = 5
        parse_mode = "HTML"

        [polling]
        timeout_secs = 10
        allowed_updates = ["message", "callback_query"]
      "#,
    )
    .unwrap();

    assert_eq!(settings.bot.token, "1:abc");
    assert_eq!(settings.bot.parse_mode, Some(ParseMode::Html));
    assert_eq!(settings.polling.allowed_updates.len(), 2);
    assert_eq!(settings.bot().unwrap().api_url(), "http://localhost:8081");
  }

  #[test]
  fn defaults_fill_missing_sections() {
    let settings: Settings = toml::from_str("[bot]\ntoken = \"1:abc\"\n").unwrap();
    assert_eq!(settings.bot.api_url, TELEGRAM_API_BASE);
    assert_eq!(settings.bot.timeout_secs, 30);
    assert_eq!(settings.polling.timeout_secs, 25);
  }

  #[test]
  fn missing_token_is_config_error() {
    assert!(matches!(Settings::default().bot(), Err(Error::Config(_))));
  }
}
