// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  options::{execute, schedule_delete, Options, Target},
  validate,
};
use error::Error;
use telegram::{
  methods::{SendMediaGroupRequest, SendOptions},
  types::{InputFile, InputMedia, InputMediaBody, Message, ParseMode, ReplyParameters},
  Bot,
};
use tracing::instrument;

const MIN_ITEMS: usize = 2;
const MAX_ITEMS: usize = 10;

/// `sendMediaGroup`: an album of 2 to 10 items.
pub struct SendMediaGroup {
  bot: Bot,
  chat: Target,
  media: Vec<InputMedia>,
  parse_mode: Option<ParseMode>,
  send: SendOptions,
  opts: Options,
}

impl SendMediaGroup {
  pub fn new(bot: Bot) -> Self {
    Self {
      bot,
      chat: Target::default(),
      media: Vec::new(),
      parse_mode: None,
      send: SendOptions::default(),
      opts: Options::default(),
    }
  }

  pub fn media(mut self, media: InputMedia) -> Self {
    self.media.push(media);
    self
  }

  pub fn photo(self, file: impl Into<InputFile>) -> Self {
    self.media(InputMedia::Photo(InputMediaBody::new(file.into())))
  }

  pub fn video(self, file: impl Into<InputFile>) -> Self {
    self.media(InputMedia::Video(InputMediaBody::new(file.into())))
  }

  pub fn document(self, file: impl Into<InputFile>) -> Self {
    self.media(InputMedia::Document(InputMediaBody::new(file.into())))
  }

  pub fn audio(self, file: impl Into<InputFile>) -> Self {
    self.media(InputMedia::Audio(InputMediaBody::new(file.into())))
  }

  /// Captions the most recently added item.
  pub fn caption(mut self, caption: impl Into<String>) -> Self {
    if let Some(item) = self.media.last_mut() {
      item.body_mut().caption = Some(caption.into());
    }
    self
  }

  pub fn thread(mut self, thread_id: i64) -> Self {
    self.send.message_thread_id = Some(thread_id);
    self
  }

  pub fn silent(mut self) -> Self {
    self.send.disable_notification = Some(true);
    self
  }

  pub fn protect(mut self) -> Self {
    self.send.protect_content = Some(true);
    self
  }

  pub fn reply_to(mut self, message_id: i64) -> Self {
    self.send.reply_parameters = Some(ReplyParameters::to(message_id));
    self
  }

  pub fn reply_parameters(mut self, parameters: ReplyParameters) -> Self {
    self.send.reply_parameters = Some(parameters);
    self
  }

  #[instrument(skip(self))]
  pub async fn send(self) -> Result<Vec<Message>, Error> {
    validate::count("media", self.media.len(), MIN_ITEMS, MAX_ITEMS)?;
    let chat_id = self.chat.resolve()?;

    let mut media = self.media;
    for item in &mut media {
      let body = item.body_mut();
      validate::caption(body.caption.as_deref())?;
      if body.caption.is_some() && body.parse_mode.is_none() {
        body.parse_mode = self.opts.parse_mode(self.parse_mode, &body.caption_entities);
      }
    }

    let request = SendMediaGroupRequest::new(chat_id.clone(), media, self.send);
    let messages = execute(&self.bot, &request, &self.opts).await?;
    for message in &messages {
      schedule_delete(&self.bot, chat_id.clone(), message.message_id, &self.opts);
    }
    Ok(messages)
  }
}

request_options!(SendMediaGroup => Vec<Message>);
chat_target!(SendMediaGroup);
parse_mode!(SendMediaGroup);
delete_after!(SendMediaGroup);
