// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReplyMarkup {
  InlineKeyboard(InlineKeyboardMarkup),
  Keyboard(ReplyKeyboardMarkup),
  Remove(ReplyKeyboardRemove),
  ForceReply(ForceReply),
}

impl From<InlineKeyboardMarkup> for ReplyMarkup {
  fn from(markup: InlineKeyboardMarkup) -> Self {
    Self::InlineKeyboard(markup)
  }
}

impl From<ReplyKeyboardMarkup> for ReplyMarkup {
  fn from(markup: ReplyKeyboardMarkup) -> Self {
    Self::Keyboard(markup)
  }
}

impl From<ReplyKeyboardRemove> for ReplyMarkup {
  fn from(markup: ReplyKeyboardRemove) -> Self {
    Self::Remove(markup)
  }
}

impl From<ForceReply> for ReplyMarkup {
  fn from(markup: ForceReply) -> Self {
    Self::ForceReply(markup)
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InlineKeyboardMarkup {
  pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InlineKeyboardButton {
  pub text: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub callback_data: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub switch_inline_query: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub switch_inline_query_current_chat: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReplyKeyboardMarkup {
  pub keyboard: Vec<Vec<KeyboardButton>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub is_persistent: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub resize_keyboard: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub one_time_keyboard: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub input_field_placeholder: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub selective: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct KeyboardButton {
  pub text: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub request_contact: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub request_location: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplyKeyboardRemove {
  pub remove_keyboard: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub selective: Option<bool>,
}

impl Default for ReplyKeyboardRemove {
  fn default() -> Self {
    Self {
      remove_keyboard: true,
      selective: None,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForceReply {
  pub force_reply: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub input_field_placeholder: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub selective: Option<bool>,
}

impl Default for ForceReply {
  fn default() -> Self {
    Self {
      force_reply: true,
      input_field_placeholder: None,
      selective: None,
    }
  }
}
