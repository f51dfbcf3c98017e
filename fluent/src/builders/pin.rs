// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::options::{execute, Options, Target};
use error::Error;
use telegram::{
  methods::{PinChatMessageRequest, UnpinAllChatMessagesRequest, UnpinChatMessageRequest},
  Bot,
};
use tracing::instrument;

/// `pinChatMessage`.
pub struct PinChatMessage {
  bot: Bot,
  chat: Target,
  message_id: Option<i64>,
  silent: Option<bool>,
  opts: Options,
}

impl PinChatMessage {
  pub fn new(bot: Bot, message_id: i64) -> Self {
    Self::current(bot, Some(message_id))
  }

  pub(crate) fn current(bot: Bot, message_id: Option<i64>) -> Self {
    Self {
      bot,
      chat: Target::default(),
      message_id,
      silent: None,
      opts: Options::default(),
    }
  }

  pub fn message(mut self, message_id: i64) -> Self {
    self.message_id = Some(message_id);
    self
  }

  /// Pins without notifying chat members.
  pub fn silent(mut self) -> Self {
    self.silent = Some(true);
    self
  }

  #[instrument(skip(self))]
  pub async fn send(self) -> Result<bool, Error> {
    let message_id = self.message_id.ok_or(Error::MissingMessage)?;
    let request = PinChatMessageRequest {
      chat_id: self.chat.resolve()?,
      message_id,
      disable_notification: self.silent,
    };
    execute(&self.bot, &request, &self.opts).await
  }
}

request_options!(PinChatMessage => bool);
chat_target!(PinChatMessage);

/// `unpinChatMessage`. Without a message id the most recent pin is removed.
pub struct UnpinChatMessage {
  bot: Bot,
  chat: Target,
  message_id: Option<i64>,
  opts: Options,
}

impl UnpinChatMessage {
  pub fn new(bot: Bot) -> Self {
    Self {
      bot,
      chat: Target::default(),
      message_id: None,
      opts: Options::default(),
    }
  }

  pub fn message(mut self, message_id: i64) -> Self {
    self.message_id = Some(message_id);
    self
  }

  #[instrument(skip(self))]
  pub async fn send(self) -> Result<bool, Error> {
    let request = UnpinChatMessageRequest {
      chat_id: self.chat.resolve()?,
      message_id: self.message_id,
    };
    execute(&self.bot, &request, &self.opts).await
  }
}

request_options!(UnpinChatMessage => bool);
chat_target!(UnpinChatMessage);

/// `unpinAllChatMessages`.
pub struct UnpinAllChatMessages {
  bot: Bot,
  chat: Target,
  opts: Options,
}

impl UnpinAllChatMessages {
  pub fn new(bot: Bot) -> Self {
    Self {
      bot,
      chat: Target::default(),
      opts: Options::default(),
    }
  }

  #[instrument(skip(self))]
  pub async fn send(self) -> Result<bool, Error> {
    let request = UnpinAllChatMessagesRequest {
      chat_id: self.chat.resolve()?,
    };
    execute(&self.bot, &request, &self.opts).await
  }
}

request_options!(UnpinAllChatMessages => bool);
chat_target!(UnpinAllChatMessages);
