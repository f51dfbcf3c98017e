// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::types::{BotCommand, BotCommandScope, File, Update, User};
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetMeRequest {}

method!(GetMeRequest, "getMe", User);

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetUpdatesRequest {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub offset: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub limit: Option<u32>,
  /// Long polling timeout in seconds.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub timeout: Option<u64>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub allowed_updates: Vec<String>,
}

method!(GetUpdatesRequest, "getUpdates", Vec<Update>);

#[derive(Debug, Clone, Serialize)]
pub struct SetMyCommandsRequest {
  pub commands: Vec<BotCommand>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub scope: Option<BotCommandScope>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub language_code: Option<String>,
}

method!(SetMyCommandsRequest, "setMyCommands", bool);

#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteMyCommandsRequest {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub scope: Option<BotCommandScope>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub language_code: Option<String>,
}

method!(DeleteMyCommandsRequest, "deleteMyCommands", bool);

#[derive(Debug, Clone, Serialize)]
pub struct GetFileRequest {
  pub file_id: String,
}

method!(GetFileRequest, "getFile", File);

#[derive(Debug, Clone, Serialize)]
pub struct AnswerCallbackQueryRequest {
  pub callback_query_id: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub text: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub show_alert: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub cache_time: Option<i64>,
}

method!(AnswerCallbackQueryRequest, "answerCallbackQuery", bool);
