// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  keyboard::InlineKeyboard,
  options::{deliver, Options, Target},
  validate::{self, MAX_MESSAGE_LENGTH},
};
use error::Error;
use telegram::{
  methods::{SendMessageRequest, SendOptions},
  types::{LinkPreviewOptions, Message, MessageEntity, ParseMode, ReplyMarkup},
  Bot,
};
use tracing::{instrument, warn};

/// `sendMessage`.
pub struct SendMessage {
  bot: Bot,
  chat: Target,
  text: String,
  parse_mode: Option<ParseMode>,
  entities: Vec<MessageEntity>,
  link_preview: Option<LinkPreviewOptions>,
  buttons: Option<InlineKeyboard>,
  send: SendOptions,
  opts: Options,
}

impl SendMessage {
  pub fn new(bot: Bot, text: impl Into<String>) -> Self {
    Self {
      bot,
      chat: Target::default(),
      text: text.into(),
      parse_mode: None,
      entities: Vec::new(),
      link_preview: None,
      buttons: None,
      send: SendOptions::default(),
      opts: Options::default(),
    }
  }

  /// Formatting entities; use instead of a parse mode.
  pub fn entities(mut self, entities: Vec<MessageEntity>) -> Self {
    self.entities = entities;
    self
  }

  pub fn disable_preview(mut self) -> Self {
    self.link_preview = Some(LinkPreviewOptions {
      is_disabled: Some(true),
      ..LinkPreviewOptions::default()
    });
    self
  }

  pub fn link_preview(mut self, options: LinkPreviewOptions) -> Self {
    self.link_preview = Some(options);
    self
  }

  /// Appends a row of URL buttons. Rows go below an inline keyboard set with `markup`;
  /// any other kind of markup wins and the rows are dropped.
  pub fn button_row(mut self, buttons: Vec<(impl Into<String>, impl Into<String>)>) -> Self {
    let mut keyboard = self.buttons.take().unwrap_or_default().row();
    for (text, url) in buttons {
      keyboard = keyboard.url(text, url);
    }
    self.buttons = Some(keyboard);
    self
  }

  #[instrument(skip(self), fields(chat = ?self.chat.explicit))]
  pub async fn send(self) -> Result<Message, Error> {
    let chat_id = self.chat.resolve()?;
    validate::length("text", &self.text, 1, MAX_MESSAGE_LENGTH)?;

    let mut send = self.send;
    if let Some(keyboard) = self.buttons {
      send.reply_markup = Some(match send.reply_markup.take() {
        None => keyboard.into(),
        Some(ReplyMarkup::InlineKeyboard(mut markup)) => {
          markup.inline_keyboard.extend(keyboard.build().inline_keyboard);
          ReplyMarkup::InlineKeyboard(markup)
        }
        Some(other) => {
          warn!("Button rows dropped: reply markup is not an inline keyboard");
          other
        }
      });
    }

    let request = SendMessageRequest {
      chat_id: chat_id.clone(),
      text: self.text,
      parse_mode: self.opts.parse_mode(self.parse_mode, &self.entities),
      entities: self.entities,
      link_preview_options: self.link_preview,
      options: send,
    };

    deliver(&self.bot, chat_id, &request, &self.opts).await
  }
}

request_options!(SendMessage => Message);
chat_target!(SendMessage);
parse_mode!(SendMessage);
send_options!(SendMessage);
delete_after!(SendMessage);
