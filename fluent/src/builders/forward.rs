// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  options::{deliver, execute, schedule_delete, Options, Target},
  validate,
};
use error::Error;
use telegram::{
  methods::{
    Caption, CopyMessageRequest, CopyMessagesRequest, ForwardMessageRequest,
    ForwardMessagesRequest, SendOptions,
  },
  types::{ChatId, Message, MessageEntity, MessageId, ParseMode},
  Bot,
};
use tracing::instrument;

/// Thread and notification flags of forwards, which take no reply or markup.
#[derive(Debug, Clone, Default)]
struct Delivery {
  thread: Option<i64>,
  silent: Option<bool>,
  protect: Option<bool>,
}

macro_rules! delivery {
  ($builder:ident) => {
    impl $builder {
      pub fn thread(mut self, thread_id: i64) -> Self {
        self.delivery.thread = Some(thread_id);
        self
      }

      pub fn silent(mut self) -> Self {
        self.delivery.silent = Some(true);
        self
      }

      pub fn protect(mut self) -> Self {
        self.delivery.protect = Some(true);
        self
      }
    }
  };
}

/// `forwardMessage`: forwards `message_id` from `from_chat` into the target chat.
pub struct ForwardMessage {
  bot: Bot,
  chat: Target,
  from_chat: ChatId,
  message_id: i64,
  delivery: Delivery,
  opts: Options,
}

impl ForwardMessage {
  pub fn new(bot: Bot, from_chat: impl Into<ChatId>, message_id: i64) -> Self {
    Self {
      bot,
      chat: Target::default(),
      from_chat: from_chat.into(),
      message_id,
      delivery: Delivery::default(),
      opts: Options::default(),
    }
  }

  #[instrument(skip(self))]
  pub async fn send(self) -> Result<Message, Error> {
    let chat_id = self.chat.resolve()?;
    let request = ForwardMessageRequest {
      chat_id: chat_id.clone(),
      from_chat_id: self.from_chat,
      message_id: self.message_id,
      message_thread_id: self.delivery.thread,
      disable_notification: self.delivery.silent,
      protect_content: self.delivery.protect,
    };

    deliver(&self.bot, chat_id, &request, &self.opts).await
  }
}

request_options!(ForwardMessage => Message);
chat_target!(ForwardMessage);
delivery!(ForwardMessage);
delete_after!(ForwardMessage);

/// `forwardMessages`: 1 to 100 messages, album grouping is kept.
pub struct ForwardMessages {
  bot: Bot,
  chat: Target,
  from_chat: ChatId,
  message_ids: Vec<i64>,
  delivery: Delivery,
  opts: Options,
}

impl ForwardMessages {
  pub fn new(
    bot: Bot,
    from_chat: impl Into<ChatId>,
    message_ids: impl IntoIterator<Item = i64>,
  ) -> Self {
    Self {
      bot,
      chat: Target::default(),
      from_chat: from_chat.into(),
      message_ids: message_ids.into_iter().collect(),
      delivery: Delivery::default(),
      opts: Options::default(),
    }
  }

  #[instrument(skip(self))]
  pub async fn send(self) -> Result<Vec<MessageId>, Error> {
    validate::message_ids(&self.message_ids)?;
    let request = ForwardMessagesRequest {
      chat_id: self.chat.resolve()?,
      from_chat_id: self.from_chat,
      message_ids: self.message_ids,
      message_thread_id: self.delivery.thread,
      disable_notification: self.delivery.silent,
      protect_content: self.delivery.protect,
    };
    execute(&self.bot, &request, &self.opts).await
  }
}

request_options!(ForwardMessages => Vec<MessageId>);
chat_target!(ForwardMessages);
delivery!(ForwardMessages);

/// `copyMessage`: like a forward, without the link to the original.
pub struct CopyMessage {
  bot: Bot,
  chat: Target,
  from_chat: ChatId,
  message_id: i64,
  caption: Option<String>,
  parse_mode: Option<ParseMode>,
  entities: Vec<MessageEntity>,
  above_media: Option<bool>,
  send: SendOptions,
  opts: Options,
}

impl CopyMessage {
  pub fn new(bot: Bot, from_chat: impl Into<ChatId>, message_id: i64) -> Self {
    Self {
      bot,
      chat: Target::default(),
      from_chat: from_chat.into(),
      message_id,
      caption: None,
      parse_mode: None,
      entities: Vec::new(),
      above_media: None,
      send: SendOptions::default(),
      opts: Options::default(),
    }
  }

  /// Replaces the caption of the copied media.
  pub fn caption(mut self, caption: impl Into<String>) -> Self {
    self.caption = Some(caption.into());
    self
  }

  pub fn entities(mut self, entities: Vec<MessageEntity>) -> Self {
    self.entities = entities;
    self
  }

  pub fn show_above_media(mut self) -> Self {
    self.above_media = Some(true);
    self
  }

  #[instrument(skip(self))]
  pub async fn send(self) -> Result<MessageId, Error> {
    validate::caption(self.caption.as_deref())?;
    let chat_id = self.chat.resolve()?;

    let parse_mode = if self.caption.is_some() {
      self.opts.parse_mode(self.parse_mode, &self.entities)
    } else {
      self.parse_mode
    };

    let request = CopyMessageRequest {
      chat_id: chat_id.clone(),
      from_chat_id: self.from_chat,
      message_id: self.message_id,
      caption: Caption {
        caption: self.caption,
        parse_mode,
        caption_entities: self.entities,
      },
      show_caption_above_media: self.above_media,
      options: self.send,
    };

    let copied = execute(&self.bot, &request, &self.opts).await?;
    schedule_delete(&self.bot, chat_id, copied.message_id, &self.opts);
    Ok(copied)
  }
}

request_options!(CopyMessage => MessageId);
chat_target!(CopyMessage);
parse_mode!(CopyMessage);
send_options!(CopyMessage);
delete_after!(CopyMessage);

/// `copyMessages`: 1 to 100 messages.
pub struct CopyMessages {
  bot: Bot,
  chat: Target,
  from_chat: ChatId,
  message_ids: Vec<i64>,
  remove_caption: Option<bool>,
  delivery: Delivery,
  opts: Options,
}

impl CopyMessages {
  pub fn new(
    bot: Bot,
    from_chat: impl Into<ChatId>,
    message_ids: impl IntoIterator<Item = i64>,
  ) -> Self {
    Self {
      bot,
      chat: Target::default(),
      from_chat: from_chat.into(),
      message_ids: message_ids.into_iter().collect(),
      remove_caption: None,
      delivery: Delivery::default(),
      opts: Options::default(),
    }
  }

  pub fn remove_caption(mut self) -> Self {
    self.remove_caption = Some(true);
    self
  }

  #[instrument(skip(self))]
  pub async fn send(self) -> Result<Vec<MessageId>, Error> {
    validate::message_ids(&self.message_ids)?;
    let request = CopyMessagesRequest {
      chat_id: self.chat.resolve()?,
      from_chat_id: self.from_chat,
      message_ids: self.message_ids,
      message_thread_id: self.delivery.thread,
      disable_notification: self.delivery.silent,
      protect_content: self.delivery.protect,
      remove_caption: self.remove_caption,
    };
    execute(&self.bot, &request, &self.opts).await
  }
}

request_options!(CopyMessages => Vec<MessageId>);
chat_target!(CopyMessages);
delivery!(CopyMessages);
