// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::{
  chat::{Chat, ChatJoinRequest, User},
  message::Message,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct Update {
  pub update_id: i64,
  #[serde(default)]
  pub message: Option<Message>,
  #[serde(default)]
  pub edited_message: Option<Message>,
  #[serde(default)]
  pub channel_post: Option<Message>,
  #[serde(default)]
  pub edited_channel_post: Option<Message>,
  #[serde(default)]
  pub callback_query: Option<CallbackQuery>,
  #[serde(default)]
  pub chat_join_request: Option<ChatJoinRequest>,
}

impl Update {
  /// The message this update is about, wherever it sits in the update.
  pub fn effective_message(&self) -> Option<&Message> {
    self
      .message
      .as_ref()
      .or(self.edited_message.as_ref())
      .or(self.channel_post.as_ref())
      .or(self.edited_channel_post.as_ref())
      .or_else(|| self.callback_query.as_ref()?.message.as_ref())
  }

  pub fn effective_chat(&self) -> Option<&Chat> {
    self
      .effective_message()
      .map(|msg| &msg.chat)
      .or_else(|| self.chat_join_request.as_ref().map(|req| &req.chat))
  }

  pub fn effective_user(&self) -> Option<&User> {
    if let Some(query) = &self.callback_query {
      return Some(&query.from);
    }
    if let Some(request) = &self.chat_join_request {
      return Some(&request.from);
    }
    self.effective_message()?.from.as_ref()
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CallbackQuery {
  pub id: String,
  pub from: User,
  #[serde(default)]
  pub message: Option<Message>,
  #[serde(default)]
  pub inline_message_id: Option<String>,
  #[serde(default)]
  pub chat_instance: String,
  #[serde(default)]
  pub data: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotCommand {
  pub command: String,
  pub description: String,
}

impl BotCommand {
  pub fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
    Self {
      command: command.into(),
      description: description.into(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BotCommandScope {
  Default,
  AllPrivateChats,
  AllGroupChats,
  AllChatAdministrators,
  Chat { chat_id: super::ChatId },
  ChatAdministrators { chat_id: super::ChatId },
  ChatMember { chat_id: super::ChatId, user_id: i64 },
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn callback_update_exposes_message_chat_and_presser() {
    let update: Update = serde_json::from_value(json!({
      "update_id": 10,
      "callback_query": {
        "id": "q1",
        "from": {"id": 77, "is_bot": false, "first_name": "Presser"},
        "chat_instance": "ci",
        "data": "yes",
        "message": {
          "message_id": 3,
          "date": 0,
          "chat": {"id": -100, "type": "supergroup", "title": "G"},
          "from": {"id": 1, "is_bot": true, "first_name": "Bot"}
        }
      }
    }))
    .unwrap();

    assert_eq!(update.effective_message().map(|m| m.message_id), Some(3));
    assert_eq!(update.effective_chat().map(|c| c.id), Some(-100));
    assert_eq!(update.effective_user().map(|u| u.id), Some(77));
  }

  #[test]
  fn join_request_has_chat_without_message() {
    let update: Update = serde_json::from_value(json!({
      "update_id": 11,
      "chat_join_request": {
        "chat": {"id": -200, "type": "supergroup"},
        "from": {"id": 5, "first_name": "New"},
        "user_chat_id": 5,
        "date": 1700000000
      }
    }))
    .unwrap();

    assert!(update.effective_message().is_none());
    assert_eq!(update.effective_chat().map(|c| c.id), Some(-200));
    assert_eq!(update.effective_user().map(|u| u.id), Some(5));
  }

  #[test]
  fn command_scope_tagging() {
    let scope = BotCommandScope::ChatAdministrators {
      chat_id: (-5).into(),
    };
    assert_eq!(
      serde_json::to_value(scope).unwrap(),
      json!({"type": "chat_administrators", "chat_id": -5})
    );
  }
}
