// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Target of a request: a numeric chat id or a public `@username`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatId {
  Id(i64),
  Username(String),
}

impl From<i64> for ChatId {
  fn from(id: i64) -> Self {
    Self::Id(id)
  }
}

impl From<&str> for ChatId {
  fn from(username: &str) -> Self {
    Self::Username(username.to_string())
  }
}

impl From<String> for ChatId {
  fn from(username: String) -> Self {
    Self::Username(username)
  }
}

impl fmt::Display for ChatId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ChatId::Id(id) => write!(f, "{}", id),
      ChatId::Username(name) => write!(f, "{}", name),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
  pub id: i64,
  #[serde(default)]
  pub is_bot: bool,
  pub first_name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub last_name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub username: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub language_code: Option<String>,
}

impl User {
  pub fn full_name(&self) -> String {
    match &self.last_name {
      Some(last) => format!("{} {}", self.first_name, last),
      None => self.first_name.clone(),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatKind {
  Private,
  Group,
  Supergroup,
  Channel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
  pub id: i64,
  #[serde(rename = "type")]
  pub kind: ChatKind,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub username: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub first_name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub last_name: Option<String>,
  #[serde(default)]
  pub is_forum: bool,
}

impl Chat {
  pub fn is_private(&self) -> bool {
    self.kind == ChatKind::Private
  }
}

/// Result of `getChat`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatFullInfo {
  #[serde(flatten)]
  pub chat: Chat,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub invite_link: Option<String>,
  #[serde(default)]
  pub bio: Option<String>,
  #[serde(default)]
  pub permissions: Option<ChatPermissions>,
  #[serde(default)]
  pub slow_mode_delay: Option<i64>,
  #[serde(default)]
  pub linked_chat_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatPermissions {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub can_send_messages: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub can_send_audios: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub can_send_documents: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub can_send_photos: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub can_send_videos: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub can_send_voice_notes: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub can_send_polls: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub can_send_other_messages: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub can_add_web_page_previews: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub can_change_info: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub can_invite_users: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub can_pin_messages: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub can_manage_topics: Option<bool>,
}

impl ChatPermissions {
  /// Everything allowed.
  pub fn all() -> Self {
    Self::uniform(true)
  }

  /// Read-only member.
  pub fn none() -> Self {
    Self::uniform(false)
  }

  fn uniform(value: bool) -> Self {
    Self {
      can_send_messages: Some(value),
      can_send_audios: Some(value),
      can_send_documents: Some(value),
      can_send_photos: Some(value),
      can_send_videos: Some(value),
      can_send_voice_notes: Some(value),
      can_send_polls: Some(value),
      can_send_other_messages: Some(value),
      can_add_web_page_previews: Some(value),
      can_change_info: Some(value),
      can_invite_users: Some(value),
      can_pin_messages: Some(value),
      can_manage_topics: Some(value),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMemberStatus {
  Creator,
  Administrator,
  Member,
  Restricted,
  Left,
  Kicked,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatMember {
  pub status: ChatMemberStatus,
  pub user: User,
  #[serde(default)]
  pub until_date: Option<i64>,
  #[serde(default)]
  pub custom_title: Option<String>,
  #[serde(default)]
  pub is_anonymous: Option<bool>,
}

impl ChatMember {
  pub fn is_admin(&self) -> bool {
    matches!(
      self.status,
      ChatMemberStatus::Creator | ChatMemberStatus::Administrator
    )
  }

  pub fn is_present(&self) -> bool {
    !matches!(self.status, ChatMemberStatus::Left | ChatMemberStatus::Kicked)
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatInviteLink {
  pub invite_link: String,
  pub creator: User,
  #[serde(default)]
  pub creates_join_request: bool,
  #[serde(default)]
  pub is_primary: bool,
  #[serde(default)]
  pub is_revoked: bool,
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub expire_date: Option<i64>,
  #[serde(default)]
  pub member_limit: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatJoinRequest {
  pub chat: Chat,
  pub from: User,
  pub user_chat_id: i64,
  pub date: i64,
  #[serde(default)]
  pub bio: Option<String>,
  #[serde(default)]
  pub invite_link: Option<ChatInviteLink>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatAction {
  Typing,
  UploadPhoto,
  RecordVideo,
  UploadVideo,
  RecordVoice,
  UploadVoice,
  UploadDocument,
  ChooseSticker,
  FindLocation,
  RecordVideoNote,
  UploadVideoNote,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn chat_id_serializes_untagged() {
    assert_eq!(serde_json::to_string(&ChatId::from(-100123)).unwrap(), "-100123");
    assert_eq!(
      serde_json::to_string(&ChatId::from("@channel")).unwrap(),
      "\"@channel\""
    );
  }

  #[test]
  fn chat_member_status() {
    let member: ChatMember = serde_json::from_str(
      r#"{"status":"kicked","user":{"id":1,"is_bot":false,"first_name":"A"},"until_date":0}"#,
    )
    .unwrap();
    assert!(!member.is_present());
    assert!(!member.is_admin());
  }

  #[test]
  fn chat_action_names() {
    assert_eq!(
      serde_json::to_string(&ChatAction::UploadDocument).unwrap(),
      "\"upload_document\""
    );
  }
}
