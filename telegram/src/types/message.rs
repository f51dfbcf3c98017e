// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::{
  chat::{Chat, User},
  markup::InlineKeyboardMarkup,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
  #[serde(rename = "HTML")]
  Html,
  Markdown,
  MarkdownV2,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
  pub message_id: i64,
  #[serde(default)]
  pub message_thread_id: Option<i64>,
  #[serde(default)]
  pub from: Option<User>,
  #[serde(default)]
  pub sender_chat: Option<Chat>,
  #[serde(default)]
  pub date: i64,
  pub chat: Chat,
  #[serde(default)]
  pub is_topic_message: bool,
  #[serde(default)]
  pub reply_to_message: Option<Box<Message>>,
  #[serde(default)]
  pub text: Option<String>,
  #[serde(default)]
  pub entities: Vec<MessageEntity>,
  #[serde(default)]
  pub caption: Option<String>,
  #[serde(default)]
  pub caption_entities: Vec<MessageEntity>,
  #[serde(default)]
  pub photo: Vec<PhotoSize>,
  #[serde(default)]
  pub document: Option<Document>,
  #[serde(default)]
  pub sticker: Option<Sticker>,
  #[serde(default)]
  pub poll: Option<Poll>,
  #[serde(default)]
  pub location: Option<Location>,
  #[serde(default)]
  pub contact: Option<Contact>,
  #[serde(default)]
  pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl Message {
  /// Text or caption, whichever the message carries.
  pub fn content(&self) -> Option<&str> {
    self.text.as_deref().or(self.caption.as_deref())
  }

  /// Splits `/command@bot rest` into `("command", "rest")`.
  pub fn command(&self) -> Option<(&str, &str)> {
    let text = self.text.as_deref()?.strip_prefix('/')?;
    let (head, rest) = text.split_once(char::is_whitespace).unwrap_or((text, ""));
    let name = head.split('@').next().unwrap_or(head);
    if name.is_empty() {
      return None;
    }
    Some((name, rest.trim()))
  }
}

/// Result of `copyMessage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MessageId {
  pub message_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageEntity {
  #[serde(rename = "type")]
  pub kind: String,
  pub offset: i64,
  pub length: i64,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub user: Option<User>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub language: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub custom_emoji_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhotoSize {
  pub file_id: String,
  pub file_unique_id: String,
  pub width: i64,
  pub height: i64,
  #[serde(default)]
  pub file_size: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Document {
  pub file_id: String,
  pub file_unique_id: String,
  #[serde(default)]
  pub file_name: Option<String>,
  #[serde(default)]
  pub mime_type: Option<String>,
  #[serde(default)]
  pub file_size: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sticker {
  pub file_id: String,
  pub file_unique_id: String,
  #[serde(default)]
  pub emoji: Option<String>,
  #[serde(default)]
  pub set_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Poll {
  pub id: String,
  pub question: String,
  pub options: Vec<PollOption>,
  pub total_voter_count: i64,
  pub is_closed: bool,
  pub is_anonymous: bool,
  #[serde(rename = "type")]
  pub kind: String,
  pub allows_multiple_answers: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PollOption {
  pub text: String,
  pub voter_count: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Location {
  pub latitude: f64,
  pub longitude: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Contact {
  pub phone_number: String,
  pub first_name: String,
  #[serde(default)]
  pub last_name: Option<String>,
  #[serde(default)]
  pub user_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplyParameters {
  pub message_id: i64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub chat_id: Option<super::ChatId>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub allow_sending_without_reply: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub quote: Option<String>,
}

impl ReplyParameters {
  pub fn to(message_id: i64) -> Self {
    Self {
      message_id,
      chat_id: None,
      allow_sending_without_reply: None,
      quote: None,
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LinkPreviewOptions {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub is_disabled: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub prefer_small_media: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub prefer_large_media: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub show_above_text: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReactionType {
  Emoji { emoji: String },
  CustomEmoji { custom_emoji_id: String },
}

impl ReactionType {
  pub fn emoji(emoji: impl Into<String>) -> Self {
    Self::Emoji {
      emoji: emoji.into(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputPollOption {
  pub text: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn text_message(text: &str) -> Message {
    serde_json::from_value(serde_json::json!({
      "message_id": 7,
      "date": 1,
      "chat": {"id": 5, "type": "private"},
      "text": text,
    }))
    .unwrap()
  }

  #[test]
  fn command_with_bot_mention() {
    let msg = text_message("/ban@my_bot 42 spam");
    assert_eq!(msg.command(), Some(("ban", "42 spam")));
  }

  #[test]
  fn command_without_arguments() {
    assert_eq!(text_message("/start").command(), Some(("start", "")));
  }

  #[test]
  fn plain_text_is_not_a_command() {
    assert_eq!(text_message("hello").command(), None);
    assert_eq!(text_message("/ ").command(), None);
  }

  #[test]
  fn parse_mode_wire_names() {
    assert_eq!(serde_json::to_string(&ParseMode::Html).unwrap(), "\"HTML\"");
    assert_eq!(
      serde_json::to_string(&ParseMode::MarkdownV2).unwrap(),
      "\"MarkdownV2\""
    );
  }

  #[test]
  fn reaction_is_tagged() {
    let value = serde_json::to_value(ReactionType::emoji("👍")).unwrap();
    assert_eq!(value, serde_json::json!({"type": "emoji", "emoji": "👍"}));
  }
}
