// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  options::{execute, Options, Target},
  validate,
};
use error::Error;
use telegram::{
  methods::{DeleteMessageRequest, DeleteMessagesRequest},
  Bot,
};
use tracing::instrument;

/// `deleteMessage`.
pub struct DeleteMessage {
  bot: Bot,
  chat: Target,
  message_id: Option<i64>,
  opts: Options,
}

impl DeleteMessage {
  pub fn new(bot: Bot, message_id: i64) -> Self {
    Self {
      bot,
      chat: Target::default(),
      message_id: Some(message_id),
      opts: Options::default(),
    }
  }

  pub(crate) fn current(bot: Bot, message_id: Option<i64>) -> Self {
    Self {
      message_id,
      ..Self::new(bot, 0)
    }
  }

  pub fn message(mut self, message_id: i64) -> Self {
    self.message_id = Some(message_id);
    self
  }

  #[instrument(skip(self))]
  pub async fn send(self) -> Result<bool, Error> {
    let message_id = self.message_id.ok_or(Error::MissingMessage)?;
    let request = DeleteMessageRequest {
      chat_id: self.chat.resolve()?,
      message_id,
    };
    execute(&self.bot, &request, &self.opts).await
  }
}

request_options!(DeleteMessage => bool);
chat_target!(DeleteMessage);

/// `deleteMessages`: 1 to 100 messages at once.
pub struct DeleteMessages {
  bot: Bot,
  chat: Target,
  message_ids: Vec<i64>,
  opts: Options,
}

impl DeleteMessages {
  pub fn new(bot: Bot, message_ids: impl IntoIterator<Item = i64>) -> Self {
    Self {
      bot,
      chat: Target::default(),
      message_ids: message_ids.into_iter().collect(),
      opts: Options::default(),
    }
  }

  pub fn add(mut self, message_id: i64) -> Self {
    self.message_ids.push(message_id);
    self
  }

  #[instrument(skip(self))]
  pub async fn send(self) -> Result<bool, Error> {
    validate::message_ids(&self.message_ids)?;
    let request = DeleteMessagesRequest {
      chat_id: self.chat.resolve()?,
      message_ids: self.message_ids,
    };
    execute(&self.bot, &request, &self.opts).await
  }
}

request_options!(DeleteMessages => bool);
chat_target!(DeleteMessages);
