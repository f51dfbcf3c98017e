// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//! Per-update façade handed to handlers.
//!
//! Every factory returns a builder already pointed at the chat of the update, and where it makes
//! sense at its message too. Anything set explicitly on the builder wins.
//!
//! ```ignore
//! ctx.reply("pong").delete_after(Duration::from_secs(30)).send().await?;
//! ctx.ban_member(user_id).for_duration(Duration::from_secs(3600)).send().await?;
//! ```
use crate::builders::*;
use std::sync::Arc;
use telegram::{
  types::{
    BotCommand, CallbackQuery, Chat, ChatAction, ChatId, ChatPermissions, InputFile, Message,
    ParseMode, ReplyParameters, Update, User,
  },
  Bot,
};

#[derive(Debug, Clone)]
pub struct Context {
  bot: Bot,
  update: Arc<Update>,
  parse_mode: Option<ParseMode>,
}

impl Context {
  pub fn new(bot: Bot, update: Update) -> Self {
    Self {
      bot,
      update: Arc::new(update),
      parse_mode: None,
    }
  }

  /// Parse mode for every text and caption built from this context that sets none itself.
  pub fn with_parse_mode(mut self, mode: ParseMode) -> Self {
    self.parse_mode = Some(mode);
    self
  }

  pub fn bot(&self) -> &Bot {
    &self.bot
  }

  pub fn update(&self) -> &Update {
    &self.update
  }

  pub fn effective_chat(&self) -> Option<&Chat> {
    self.update.effective_chat()
  }

  pub fn effective_message(&self) -> Option<&Message> {
    self.update.effective_message()
  }

  pub fn effective_user(&self) -> Option<&User> {
    self.update.effective_user()
  }

  pub fn callback_query(&self) -> Option<&CallbackQuery> {
    self.update.callback_query.as_ref()
  }

  /// Whitespace-separated arguments after a `/command`.
  pub fn args(&self) -> Vec<&str> {
    self
      .update
      .message
      .as_ref()
      .and_then(Message::command)
      .map(|(_, rest)| rest.split_whitespace().collect())
      .unwrap_or_default()
  }

  fn chat_id(&self) -> Option<ChatId> {
    self.effective_chat().map(|chat| ChatId::from(chat.id))
  }

  fn message_id(&self) -> Option<i64> {
    self.effective_message().map(|msg| msg.message_id)
  }

  fn edit_target(&self) -> EditTarget {
    let mut target = EditTarget {
      message_id: self.message_id(),
      ..EditTarget::default()
    };
    target.chat.fallback = self.chat_id();
    if target.message_id.is_none() {
      target.inline_message_id = self
        .callback_query()
        .and_then(|query| query.inline_message_id.clone());
    }
    target
  }

  fn bot_handle(&self) -> Bot {
    self.bot.clone()
  }

  // Messages

  pub fn send_message(&self, text: impl Into<String>) -> SendMessage {
    SendMessage::new(self.bot_handle(), text)
      .fallback_chat(self.chat_id())
      .default_parse_mode(self.parse_mode)
  }

  /// `send_message` answering the current message.
  pub fn reply(&self, text: impl Into<String>) -> SendMessage {
    let builder = self.send_message(text);
    match self.message_id() {
      Some(id) => builder.reply_parameters(ReplyParameters::to(id)),
      None => builder,
    }
  }

  pub fn edit_message_text(&self, text: impl Into<String>) -> EditMessageText {
    EditMessageText::new(self.bot_handle(), text)
      .target(self.edit_target())
      .default_parse_mode(self.parse_mode)
  }

  pub fn edit_message_caption(&self) -> EditMessageCaption {
    EditMessageCaption::new(self.bot_handle())
      .target(self.edit_target())
      .default_parse_mode(self.parse_mode)
  }

  pub fn edit_message_reply_markup(&self) -> EditMessageReplyMarkup {
    EditMessageReplyMarkup::new(self.bot_handle()).target(self.edit_target())
  }

  /// Deletes the current message unless `message()` picks another.
  pub fn delete_message(&self) -> DeleteMessage {
    DeleteMessage::current(self.bot_handle(), self.message_id()).fallback_chat(self.chat_id())
  }

  pub fn delete_messages(&self, message_ids: impl IntoIterator<Item = i64>) -> DeleteMessages {
    DeleteMessages::new(self.bot_handle(), message_ids).fallback_chat(self.chat_id())
  }

  /// Forwards a message of another chat into the current one.
  pub fn forward_message(&self, from_chat: impl Into<ChatId>, message_id: i64) -> ForwardMessage {
    ForwardMessage::new(self.bot_handle(), from_chat, message_id).fallback_chat(self.chat_id())
  }

  pub fn forward_messages(
    &self,
    from_chat: impl Into<ChatId>,
    message_ids: impl IntoIterator<Item = i64>,
  ) -> ForwardMessages {
    ForwardMessages::new(self.bot_handle(), from_chat, message_ids).fallback_chat(self.chat_id())
  }

  pub fn copy_message(&self, from_chat: impl Into<ChatId>, message_id: i64) -> CopyMessage {
    CopyMessage::new(self.bot_handle(), from_chat, message_id)
      .fallback_chat(self.chat_id())
      .default_parse_mode(self.parse_mode)
  }

  pub fn copy_messages(
    &self,
    from_chat: impl Into<ChatId>,
    message_ids: impl IntoIterator<Item = i64>,
  ) -> CopyMessages {
    CopyMessages::new(self.bot_handle(), from_chat, message_ids).fallback_chat(self.chat_id())
  }

  pub fn pin_message(&self) -> PinChatMessage {
    PinChatMessage::current(self.bot_handle(), self.message_id()).fallback_chat(self.chat_id())
  }

  pub fn unpin_message(&self) -> UnpinChatMessage {
    UnpinChatMessage::new(self.bot_handle()).fallback_chat(self.chat_id())
  }

  pub fn unpin_all_messages(&self) -> UnpinAllChatMessages {
    UnpinAllChatMessages::new(self.bot_handle()).fallback_chat(self.chat_id())
  }

  pub fn send_chat_action(&self, action: ChatAction) -> SendChatAction {
    SendChatAction::new(self.bot_handle(), action).fallback_chat(self.chat_id())
  }

  /// Reacts to the current message.
  pub fn react(&self, emoji: impl Into<String>) -> SetMessageReaction {
    SetMessageReaction::current(self.bot_handle(), self.message_id())
      .fallback_chat(self.chat_id())
      .emoji(emoji)
  }

  // Media

  pub fn send_photo(&self, photo: impl Into<InputFile>) -> SendPhoto {
    SendPhoto::new(self.bot_handle(), photo)
      .fallback_chat(self.chat_id())
      .default_parse_mode(self.parse_mode)
  }

  pub fn send_document(&self, document: impl Into<InputFile>) -> SendDocument {
    SendDocument::new(self.bot_handle(), document)
      .fallback_chat(self.chat_id())
      .default_parse_mode(self.parse_mode)
  }

  pub fn send_video(&self, video: impl Into<InputFile>) -> SendVideo {
    SendVideo::new(self.bot_handle(), video)
      .fallback_chat(self.chat_id())
      .default_parse_mode(self.parse_mode)
  }

  pub fn send_audio(&self, audio: impl Into<InputFile>) -> SendAudio {
    SendAudio::new(self.bot_handle(), audio)
      .fallback_chat(self.chat_id())
      .default_parse_mode(self.parse_mode)
  }

  pub fn send_voice(&self, voice: impl Into<InputFile>) -> SendVoice {
    SendVoice::new(self.bot_handle(), voice)
      .fallback_chat(self.chat_id())
      .default_parse_mode(self.parse_mode)
  }

  pub fn send_animation(&self, animation: impl Into<InputFile>) -> SendAnimation {
    SendAnimation::new(self.bot_handle(), animation)
      .fallback_chat(self.chat_id())
      .default_parse_mode(self.parse_mode)
  }

  pub fn send_sticker(&self, sticker: impl Into<InputFile>) -> SendSticker {
    SendSticker::new(self.bot_handle(), sticker).fallback_chat(self.chat_id())
  }

  pub fn send_media_group(&self) -> SendMediaGroup {
    SendMediaGroup::new(self.bot_handle())
      .fallback_chat(self.chat_id())
      .default_parse_mode(self.parse_mode)
  }

  pub fn send_location(&self, latitude: f64, longitude: f64) -> SendLocation {
    SendLocation::new(self.bot_handle(), latitude, longitude).fallback_chat(self.chat_id())
  }

  pub fn send_venue(
    &self,
    latitude: f64,
    longitude: f64,
    title: impl Into<String>,
    address: impl Into<String>,
  ) -> SendVenue {
    SendVenue::new(self.bot_handle(), latitude, longitude, title, address)
      .fallback_chat(self.chat_id())
  }

  pub fn send_contact(
    &self,
    phone_number: impl Into<String>,
    first_name: impl Into<String>,
  ) -> SendContact {
    SendContact::new(self.bot_handle(), phone_number, first_name).fallback_chat(self.chat_id())
  }

  pub fn send_dice(&self) -> SendDice {
    SendDice::new(self.bot_handle()).fallback_chat(self.chat_id())
  }

  pub fn send_poll(
    &self,
    question: impl Into<String>,
    options: impl IntoIterator<Item = impl Into<String>>,
  ) -> SendPoll {
    SendPoll::new(self.bot_handle(), question, options).fallback_chat(self.chat_id())
  }

  pub fn stop_poll(&self, message_id: i64) -> StopPoll {
    StopPoll::new(self.bot_handle(), message_id).fallback_chat(self.chat_id())
  }

  // Members

  pub fn ban_member(&self, user_id: i64) -> BanChatMember {
    BanChatMember::new(self.bot_handle(), user_id).fallback_chat(self.chat_id())
  }

  pub fn unban_member(&self, user_id: i64) -> UnbanChatMember {
    UnbanChatMember::new(self.bot_handle(), user_id).fallback_chat(self.chat_id())
  }

  pub fn restrict_member(&self, user_id: i64) -> RestrictChatMember {
    RestrictChatMember::new(self.bot_handle(), user_id).fallback_chat(self.chat_id())
  }

  pub fn promote_member(&self, user_id: i64) -> PromoteChatMember {
    PromoteChatMember::new(self.bot_handle(), user_id).fallback_chat(self.chat_id())
  }

  pub fn ban_sender_chat(&self, sender_chat_id: i64) -> BanChatSenderChat {
    BanChatSenderChat::new(self.bot_handle(), sender_chat_id).fallback_chat(self.chat_id())
  }

  pub fn unban_sender_chat(&self, sender_chat_id: i64) -> UnbanChatSenderChat {
    UnbanChatSenderChat::new(self.bot_handle(), sender_chat_id).fallback_chat(self.chat_id())
  }

  pub fn approve_join_request(&self, user_id: i64) -> ApproveChatJoinRequest {
    ApproveChatJoinRequest::new(self.bot_handle(), user_id).fallback_chat(self.chat_id())
  }

  pub fn decline_join_request(&self, user_id: i64) -> DeclineChatJoinRequest {
    DeclineChatJoinRequest::new(self.bot_handle(), user_id).fallback_chat(self.chat_id())
  }

  pub fn get_chat_member(&self, user_id: i64) -> GetChatMember {
    GetChatMember::new(self.bot_handle(), user_id).fallback_chat(self.chat_id())
  }

  pub fn get_chat_member_count(&self) -> GetChatMemberCount {
    GetChatMemberCount::new(self.bot_handle()).fallback_chat(self.chat_id())
  }

  // Chat

  pub fn get_chat(&self) -> GetChat {
    GetChat::new(self.bot_handle()).fallback_chat(self.chat_id())
  }

  pub fn set_chat_title(&self, title: impl Into<String>) -> SetChatTitle {
    SetChatTitle::new(self.bot_handle(), title).fallback_chat(self.chat_id())
  }

  pub fn set_chat_description(&self) -> SetChatDescription {
    SetChatDescription::new(self.bot_handle()).fallback_chat(self.chat_id())
  }

  pub fn set_chat_permissions(&self, permissions: ChatPermissions) -> SetChatPermissions {
    SetChatPermissions::new(self.bot_handle(), permissions).fallback_chat(self.chat_id())
  }

  pub fn leave_chat(&self) -> LeaveChat {
    LeaveChat::new(self.bot_handle()).fallback_chat(self.chat_id())
  }

  pub fn export_invite_link(&self) -> ExportChatInviteLink {
    ExportChatInviteLink::new(self.bot_handle()).fallback_chat(self.chat_id())
  }

  pub fn create_invite_link(&self) -> CreateChatInviteLink {
    CreateChatInviteLink::new(self.bot_handle()).fallback_chat(self.chat_id())
  }

  pub fn revoke_invite_link(&self, invite_link: impl Into<String>) -> RevokeChatInviteLink {
    RevokeChatInviteLink::new(self.bot_handle(), invite_link).fallback_chat(self.chat_id())
  }

  // Callbacks

  /// Answers the callback query of this update.
  pub fn answer_callback(&self, text: impl Into<String>) -> AnswerCallbackQuery {
    let query_id = self.callback_query().map(|query| query.id.clone());
    AnswerCallbackQuery::current(self.bot_handle(), query_id).text(text)
  }

  // Bot

  pub fn get_me(&self) -> GetMe {
    GetMe::new(self.bot_handle())
  }

  pub fn get_updates(&self) -> GetUpdates {
    GetUpdates::new(self.bot_handle())
  }

  pub fn set_my_commands(&self, commands: impl IntoIterator<Item = BotCommand>) -> SetMyCommands {
    SetMyCommands::new(self.bot_handle(), commands)
  }

  pub fn delete_my_commands(&self) -> DeleteMyCommands {
    DeleteMyCommands::new(self.bot_handle())
  }

  pub fn get_file(&self, file_id: impl Into<String>) -> GetFile {
    GetFile::new(self.bot_handle(), file_id)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn context(update: serde_json::Value) -> Context {
    let bot = Bot::new("1:test").unwrap();
    Context::new(bot, serde_json::from_value(update).unwrap())
  }

  fn text_update(text: &str) -> serde_json::Value {
    json!({
      "update_id": 1,
      "message": {
        "message_id": 10,
        "date": 0,
        "chat": {"id": -100, "type": "supergroup", "title": "Test"},
        "from": {"id": 7, "is_bot": false, "first_name": "Ann"},
        "text": text
      }
    })
  }

  #[test]
  fn args_split_after_command() {
    let ctx = context(text_update("/ban@my_bot 42 spam  links"));
    assert_eq!(ctx.args(), vec!["42", "spam", "links"]);
  }

  #[test]
  fn no_args_without_command() {
    assert!(context(text_update("hello there")).args().is_empty());
  }

  #[test]
  fn ids_come_from_the_message() {
    let ctx = context(text_update("hi"));
    assert_eq!(ctx.chat_id(), Some(ChatId::from(-100)));
    assert_eq!(ctx.message_id(), Some(10));
    assert_eq!(ctx.effective_user().map(|u| u.id), Some(7));
  }

  #[test]
  fn inline_callback_edits_by_inline_id() {
    let ctx = context(json!({
      "update_id": 2,
      "callback_query": {
        "id": "q1",
        "from": {"id": 7, "is_bot": false, "first_name": "Ann"},
        "inline_message_id": "AAQ",
        "chat_instance": "1",
        "data": "x"
      }
    }));
    let target = ctx.edit_target();
    assert_eq!(target.inline_message_id.as_deref(), Some("AAQ"));
    assert!(target.message_id.is_none());
  }
}
