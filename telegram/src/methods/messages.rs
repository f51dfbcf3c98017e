// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::{Caption, Edited, SendOptions};
use crate::types::{
  ChatAction, ChatId, InlineKeyboardMarkup, LinkPreviewOptions, Message, MessageEntity, MessageId,
  ParseMode, ReactionType,
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest {
  pub chat_id: ChatId,
  pub text: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parse_mode: Option<ParseMode>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub entities: Vec<MessageEntity>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub link_preview_options: Option<LinkPreviewOptions>,
  #[serde(flatten)]
  pub options: SendOptions,
}

method!(SendMessageRequest, "sendMessage", Message);

#[derive(Debug, Clone, Serialize)]
pub struct EditMessageTextRequest {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub chat_id: Option<ChatId>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message_id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub inline_message_id: Option<String>,
  pub text: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parse_mode: Option<ParseMode>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub entities: Vec<MessageEntity>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub link_preview_options: Option<LinkPreviewOptions>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<InlineKeyboardMarkup>,
}

method!(EditMessageTextRequest, "editMessageText", Edited);

#[derive(Debug, Clone, Serialize)]
pub struct EditMessageCaptionRequest {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub chat_id: Option<ChatId>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message_id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub inline_message_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub caption: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parse_mode: Option<ParseMode>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub caption_entities: Vec<MessageEntity>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub show_caption_above_media: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<InlineKeyboardMarkup>,
}

method!(EditMessageCaptionRequest, "editMessageCaption", Edited);

#[derive(Debug, Clone, Serialize)]
pub struct EditMessageReplyMarkupRequest {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub chat_id: Option<ChatId>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message_id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub inline_message_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<InlineKeyboardMarkup>,
}

method!(EditMessageReplyMarkupRequest, "editMessageReplyMarkup", Edited);

#[derive(Debug, Clone, Serialize)]
pub struct DeleteMessageRequest {
  pub chat_id: ChatId,
  pub message_id: i64,
}

method!(DeleteMessageRequest, "deleteMessage", bool);

#[derive(Debug, Clone, Serialize)]
pub struct DeleteMessagesRequest {
  pub chat_id: ChatId,
  pub message_ids: Vec<i64>,
}

method!(DeleteMessagesRequest, "deleteMessages", bool);

#[derive(Debug, Clone, Serialize)]
pub struct ForwardMessageRequest {
  pub chat_id: ChatId,
  pub from_chat_id: ChatId,
  pub message_id: i64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message_thread_id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub disable_notification: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub protect_content: Option<bool>,
}

method!(ForwardMessageRequest, "forwardMessage", Message);

#[derive(Debug, Clone, Serialize)]
pub struct ForwardMessagesRequest {
  pub chat_id: ChatId,
  pub from_chat_id: ChatId,
  pub message_ids: Vec<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message_thread_id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub disable_notification: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub protect_content: Option<bool>,
}

method!(ForwardMessagesRequest, "forwardMessages", Vec<MessageId>);

#[derive(Debug, Clone, Serialize)]
pub struct CopyMessageRequest {
  pub chat_id: ChatId,
  pub from_chat_id: ChatId,
  pub message_id: i64,
  #[serde(flatten)]
  pub caption: Caption,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub show_caption_above_media: Option<bool>,
  #[serde(flatten)]
  pub options: SendOptions,
}

method!(CopyMessageRequest, "copyMessage", MessageId);

#[derive(Debug, Clone, Serialize)]
pub struct CopyMessagesRequest {
  pub chat_id: ChatId,
  pub from_chat_id: ChatId,
  pub message_ids: Vec<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message_thread_id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub disable_notification: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub protect_content: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub remove_caption: Option<bool>,
}

method!(CopyMessagesRequest, "copyMessages", Vec<MessageId>);

#[derive(Debug, Clone, Serialize)]
pub struct PinChatMessageRequest {
  pub chat_id: ChatId,
  pub message_id: i64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub disable_notification: Option<bool>,
}

method!(PinChatMessageRequest, "pinChatMessage", bool);

#[derive(Debug, Clone, Serialize)]
pub struct UnpinChatMessageRequest {
  pub chat_id: ChatId,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message_id: Option<i64>,
}

method!(UnpinChatMessageRequest, "unpinChatMessage", bool);

#[derive(Debug, Clone, Serialize)]
pub struct UnpinAllChatMessagesRequest {
  pub chat_id: ChatId,
}

method!(UnpinAllChatMessagesRequest, "unpinAllChatMessages", bool);

#[derive(Debug, Clone, Serialize)]
pub struct SendChatActionRequest {
  pub chat_id: ChatId,
  pub action: ChatAction,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message_thread_id: Option<i64>,
}

method!(SendChatActionRequest, "sendChatAction", bool);

#[derive(Debug, Clone, Serialize)]
pub struct SetMessageReactionRequest {
  pub chat_id: ChatId,
  pub message_id: i64,
  pub reaction: Vec<ReactionType>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub is_big: Option<bool>,
}

method!(SetMessageReactionRequest, "setMessageReaction", bool);

#[cfg(test)]
mod tests {
  use super::*;
  use crate::methods::Method;
  use serde_json::json;

  #[test]
  fn unset_options_are_left_out() {
    let request = SendMessageRequest {
      chat_id: 42.into(),
      text: "hi".into(),
      parse_mode: Some(ParseMode::Html),
      entities: Vec::new(),
      link_preview_options: None,
      options: SendOptions::default(),
    };

    assert_eq!(
      serde_json::to_value(&request).unwrap(),
      json!({"chat_id": 42, "text": "hi", "parse_mode": "HTML"})
    );
    assert_eq!(SendMessageRequest::NAME, "sendMessage");
    assert!(request.files().is_empty());
  }

  #[test]
  fn edited_inline_message_is_true() {
    let edited: Edited = serde_json::from_value(json!(true)).unwrap();
    assert!(edited.message().is_none());
  }
}
