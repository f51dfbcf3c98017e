// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
mod chat;
mod file;
mod markup;
mod message;
mod update;

pub use chat::*;
pub use file::*;
pub use markup::*;
pub use message::*;
pub use update::*;

use serde::Deserialize;

/// Envelope every Bot API response comes in.
#[derive(Debug, Deserialize)]
pub(crate) struct TelegramResponse<T> {
  pub ok: bool,
  pub result: Option<T>,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub error_code: Option<i64>,
  #[serde(default)]
  pub parameters: Option<ResponseParameters>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseParameters {
  #[serde(default)]
  pub migrate_to_chat_id: Option<i64>,
  #[serde(default)]
  pub retry_after: Option<u64>,
}
