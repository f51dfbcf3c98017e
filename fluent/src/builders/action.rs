// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::options::{execute, Options, Target};
use error::Error;
use telegram::{
  methods::{SendChatActionRequest, SetMessageReactionRequest},
  types::{ChatAction, ReactionType},
  Bot,
};
use tracing::instrument;

/// `sendChatAction`: "typing…" and friends, shown for about five seconds.
pub struct SendChatAction {
  bot: Bot,
  chat: Target,
  action: ChatAction,
  thread: Option<i64>,
  opts: Options,
}

impl SendChatAction {
  pub fn new(bot: Bot, action: ChatAction) -> Self {
    Self {
      bot,
      chat: Target::default(),
      action,
      thread: None,
      opts: Options::default(),
    }
  }

  pub fn thread(mut self, thread_id: i64) -> Self {
    self.thread = Some(thread_id);
    self
  }

  #[instrument(skip(self))]
  pub async fn send(self) -> Result<bool, Error> {
    let request = SendChatActionRequest {
      chat_id: self.chat.resolve()?,
      action: self.action,
      message_thread_id: self.thread,
    };
    execute(&self.bot, &request, &self.opts).await
  }
}

request_options!(SendChatAction => bool);
chat_target!(SendChatAction);

/// `setMessageReaction`. No reactions clears the bot's reaction.
pub struct SetMessageReaction {
  bot: Bot,
  chat: Target,
  message_id: Option<i64>,
  reactions: Vec<ReactionType>,
  big: Option<bool>,
  opts: Options,
}

impl SetMessageReaction {
  pub fn new(bot: Bot, message_id: i64) -> Self {
    Self::current(bot, Some(message_id))
  }

  pub(crate) fn current(bot: Bot, message_id: Option<i64>) -> Self {
    Self {
      bot,
      chat: Target::default(),
      message_id,
      reactions: Vec::new(),
      big: None,
      opts: Options::default(),
    }
  }

  pub fn message(mut self, message_id: i64) -> Self {
    self.message_id = Some(message_id);
    self
  }

  pub fn emoji(mut self, emoji: impl Into<String>) -> Self {
    self.reactions.push(ReactionType::emoji(emoji));
    self
  }

  pub fn reaction(mut self, reaction: ReactionType) -> Self {
    self.reactions.push(reaction);
    self
  }

  pub fn big(mut self) -> Self {
    self.big = Some(true);
    self
  }

  #[instrument(skip(self))]
  pub async fn send(self) -> Result<bool, Error> {
    let message_id = self.message_id.ok_or(Error::MissingMessage)?;
    let request = SetMessageReactionRequest {
      chat_id: self.chat.resolve()?,
      message_id,
      reaction: self.reactions,
      is_big: self.big,
    };
    execute(&self.bot, &request, &self.opts).await
  }
}

request_options!(SetMessageReaction => bool);
chat_target!(SetMessageReaction);
