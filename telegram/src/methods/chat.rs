// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::types::{ChatFullInfo, ChatId, ChatInviteLink, ChatPermissions};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct GetChatRequest {
  pub chat_id: ChatId,
}

method!(GetChatRequest, "getChat", ChatFullInfo);

#[derive(Debug, Clone, Serialize)]
pub struct SetChatTitleRequest {
  pub chat_id: ChatId,
  pub title: String,
}

method!(SetChatTitleRequest, "setChatTitle", bool);

#[derive(Debug, Clone, Serialize)]
pub struct SetChatDescriptionRequest {
  pub chat_id: ChatId,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

method!(SetChatDescriptionRequest, "setChatDescription", bool);

#[derive(Debug, Clone, Serialize)]
pub struct SetChatPermissionsRequest {
  pub chat_id: ChatId,
  pub permissions: ChatPermissions,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub use_independent_chat_permissions: Option<bool>,
}

method!(SetChatPermissionsRequest, "setChatPermissions", bool);

#[derive(Debug, Clone, Serialize)]
pub struct LeaveChatRequest {
  pub chat_id: ChatId,
}

method!(LeaveChatRequest, "leaveChat", bool);

#[derive(Debug, Clone, Serialize)]
pub struct ExportChatInviteLinkRequest {
  pub chat_id: ChatId,
}

method!(ExportChatInviteLinkRequest, "exportChatInviteLink", String);

#[derive(Debug, Clone, Serialize)]
pub struct CreateChatInviteLinkRequest {
  pub chat_id: ChatId,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub expire_date: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub member_limit: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub creates_join_request: Option<bool>,
}

method!(CreateChatInviteLinkRequest, "createChatInviteLink", ChatInviteLink);

#[derive(Debug, Clone, Serialize)]
pub struct RevokeChatInviteLinkRequest {
  pub chat_id: ChatId,
  pub invite_link: String,
}

method!(RevokeChatInviteLinkRequest, "revokeChatInviteLink", ChatInviteLink);
