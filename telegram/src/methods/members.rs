// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::types::{ChatId, ChatMember, ChatPermissions};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct BanChatMemberRequest {
  pub chat_id: ChatId,
  pub user_id: i64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub until_date: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub revoke_messages: Option<bool>,
}

method!(BanChatMemberRequest, "banChatMember", bool);

#[derive(Debug, Clone, Serialize)]
pub struct UnbanChatMemberRequest {
  pub chat_id: ChatId,
  pub user_id: i64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub only_if_banned: Option<bool>,
}

method!(UnbanChatMemberRequest, "unbanChatMember", bool);

#[derive(Debug, Clone, Serialize)]
pub struct RestrictChatMemberRequest {
  pub chat_id: ChatId,
  pub user_id: i64,
  pub permissions: ChatPermissions,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub use_independent_chat_permissions: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub until_date: Option<i64>,
}

method!(RestrictChatMemberRequest, "restrictChatMember", bool);

/// Administrator rights; unset rights are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AdminRights {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub is_anonymous: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub can_manage_chat: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub can_delete_messages: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub can_manage_video_chats: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub can_restrict_members: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub can_promote_members: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub can_change_info: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub can_invite_users: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub can_post_messages: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub can_edit_messages: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub can_pin_messages: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub can_manage_topics: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PromoteChatMemberRequest {
  pub chat_id: ChatId,
  pub user_id: i64,
  #[serde(flatten)]
  pub rights: AdminRights,
}

method!(PromoteChatMemberRequest, "promoteChatMember", bool);

#[derive(Debug, Clone, Serialize)]
pub struct BanChatSenderChatRequest {
  pub chat_id: ChatId,
  pub sender_chat_id: i64,
}

method!(BanChatSenderChatRequest, "banChatSenderChat", bool);

#[derive(Debug, Clone, Serialize)]
pub struct UnbanChatSenderChatRequest {
  pub chat_id: ChatId,
  pub sender_chat_id: i64,
}

method!(UnbanChatSenderChatRequest, "unbanChatSenderChat", bool);

#[derive(Debug, Clone, Serialize)]
pub struct ApproveChatJoinRequestRequest {
  pub chat_id: ChatId,
  pub user_id: i64,
}

method!(ApproveChatJoinRequestRequest, "approveChatJoinRequest", bool);

#[derive(Debug, Clone, Serialize)]
pub struct DeclineChatJoinRequestRequest {
  pub chat_id: ChatId,
  pub user_id: i64,
}

method!(DeclineChatJoinRequestRequest, "declineChatJoinRequest", bool);

#[derive(Debug, Clone, Serialize)]
pub struct GetChatMemberRequest {
  pub chat_id: ChatId,
  pub user_id: i64,
}

method!(GetChatMemberRequest, "getChatMember", ChatMember);

#[derive(Debug, Clone, Serialize)]
pub struct GetChatMemberCountRequest {
  pub chat_id: ChatId,
}

method!(GetChatMemberCountRequest, "getChatMemberCount", i64);
