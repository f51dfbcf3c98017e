// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//! One request struct per Bot API method.
//!
//! Structs serialize straight into the JSON body of the call; `None` fields are left out.
use crate::types::{InputFile, Message, ReplyMarkup, ReplyParameters};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

pub trait Method: Serialize + Send + Sync {
  type Response: DeserializeOwned + Send;

  /// Method name as it appears in the URL.
  const NAME: &'static str;

  /// Fields holding files; uploads among them are sent as multipart parts.
  fn files(&self) -> Vec<(&str, &InputFile)> {
    Vec::new()
  }
}

macro_rules! method {
  ($request:ty, $name:literal, $response:ty) => {
    impl $crate::methods::Method for $request {
      type Response = $response;
      const NAME: &'static str = $name;
    }
  };
  ($request:ty, $name:literal, $response:ty, files: [$($field:ident),+]) => {
    impl $crate::methods::Method for $request {
      type Response = $response;
      const NAME: &'static str = $name;

      fn files(&self) -> Vec<(&str, &$crate::types::InputFile)> {
        vec![$((stringify!($field), &self.$field)),+]
      }
    }
  };
}

mod bot;
mod chat;
mod media;
mod members;
mod messages;

pub use bot::*;
pub use chat::*;
pub use media::*;
pub use members::*;
pub use messages::*;

/// Delivery options shared by every `send*` method.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SendOptions {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message_thread_id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub disable_notification: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub protect_content: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_parameters: Option<ReplyParameters>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<ReplyMarkup>,
}

/// Edits of inline messages return `true` instead of the message.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Edited {
  Message(Box<Message>),
  Inline(bool),
}

impl Edited {
  pub fn message(self) -> Option<Message> {
    match self {
      Edited::Message(msg) => Some(*msg),
      Edited::Inline(_) => None,
    }
  }
}
