// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use error::Error;
use std::time::Duration;
use telegram::{
  methods::{DeleteMessageRequest, Method},
  types::{ChatId, Message, MessageEntity, ParseMode},
  Bot, RequestOptions,
};
use tracing::{debug, warn};

/// Cross-cutting options every builder carries.
#[derive(Debug, Clone, Default)]
pub(crate) struct Options {
  pub(crate) request: RequestOptions,
  pub(crate) after: Option<Duration>,
  pub(crate) delete_after: Option<Duration>,
  /// Used when the builder has no parse mode of its own.
  pub(crate) parse_mode: Option<ParseMode>,
}

impl Options {
  /// The default never applies over explicit entities, which the Bot API would ignore.
  pub(crate) fn parse_mode(
    &self,
    explicit: Option<ParseMode>,
    entities: &[MessageEntity],
  ) -> Option<ParseMode> {
    match explicit {
      Some(mode) => Some(mode),
      None if entities.is_empty() => self.parse_mode,
      None => None,
    }
  }
}

/// Explicit chat, else the chat of the current update.
#[derive(Debug, Clone, Default)]
pub(crate) struct Target {
  pub(crate) explicit: Option<ChatId>,
  pub(crate) fallback: Option<ChatId>,
}

impl Target {
  pub(crate) fn resolve(self) -> Result<ChatId, Error> {
    self.explicit.or(self.fallback).ok_or(Error::MissingChat)
  }
}

pub(crate) async fn execute<M: Method>(
  bot: &Bot,
  request: &M,
  opts: &Options,
) -> Result<M::Response, Error> {
  if let Some(delay) = opts.after {
    debug!(method = M::NAME, ?delay, "Delaying request");
    tokio::time::sleep(delay).await;
  }
  bot.call_with(request, &opts.request).await
}

/// `execute` for methods answering with a message; arms `delete_after` on it.
pub(crate) async fn deliver<M>(
  bot: &Bot,
  chat_id: ChatId,
  request: &M,
  opts: &Options,
) -> Result<Message, Error>
where
  M: Method<Response = Message>,
{
  let message = execute(bot, request, opts).await?;
  schedule_delete(bot, chat_id, message.message_id, opts);
  Ok(message)
}

/// Fires a detached deletion of `message_id` if the builder asked for one.
pub(crate) fn schedule_delete(bot: &Bot, chat_id: ChatId, message_id: i64, opts: &Options) {
  let Some(delay) = opts.delete_after else {
    return;
  };

  let bot = bot.clone();
  let request_options = opts.request.clone();
  tokio::spawn(async move {
    tokio::time::sleep(delay).await;
    let request = DeleteMessageRequest {
      chat_id: chat_id.clone(),
      message_id,
    };
    match bot.call_with(&request, &request_options).await {
      Ok(_) => debug!(%chat_id, message_id, "Deleted message after delay"),
      Err(e) => warn!(%chat_id, message_id, "Delayed deletion failed: {}", e),
    }
  });
}
