// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//! One builder per Bot API method.
//!
//! Constructors take the required parameters, setters consume and return the builder,
//! and `send()` performs the call.
mod action;
mod bot;
mod callback;
mod chat;
mod delete;
mod edit;
mod forward;
mod location;
mod media;
mod media_group;
mod members;
mod message;
mod pin;
mod poll;

pub use action::{SendChatAction, SetMessageReaction};
pub use bot::{DeleteMyCommands, GetFile, GetMe, GetUpdates, SetMyCommands};
pub use callback::AnswerCallbackQuery;
pub use chat::{
  CreateChatInviteLink, ExportChatInviteLink, GetChat, LeaveChat, RevokeChatInviteLink,
  SetChatDescription, SetChatPermissions, SetChatTitle,
};
pub use delete::{DeleteMessage, DeleteMessages};
pub(crate) use edit::EditTarget;
pub use edit::{EditMessageCaption, EditMessageReplyMarkup, EditMessageText};
pub use forward::{CopyMessage, CopyMessages, ForwardMessage, ForwardMessages};
pub use location::{SendContact, SendDice, SendLocation, SendVenue};
pub use media::{
  SendAnimation, SendAudio, SendDocument, SendPhoto, SendSticker, SendVideo, SendVoice,
};
pub use media_group::SendMediaGroup;
pub use members::{
  ApproveChatJoinRequest, BanChatMember, BanChatSenderChat, DeclineChatJoinRequest,
  GetChatMember, GetChatMemberCount, PromoteChatMember, RestrictChatMember, UnbanChatMember,
  UnbanChatSenderChat,
};
pub use message::SendMessage;
pub use pin::{PinChatMessage, UnpinAllChatMessages, UnpinChatMessage};
pub use poll::{SendPoll, StopPoll};
