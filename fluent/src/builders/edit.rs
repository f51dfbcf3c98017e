// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  options::{execute, Options, Target},
  validate::{self, MAX_MESSAGE_LENGTH},
};
use error::Error;
use telegram::{
  methods::{
    EditMessageCaptionRequest, EditMessageReplyMarkupRequest, EditMessageTextRequest, Edited,
  },
  types::{ChatId, InlineKeyboardMarkup, LinkPreviewOptions, MessageEntity, ParseMode},
  Bot,
};
use tracing::instrument;

/// Which message an edit applies to.
#[derive(Debug, Clone, Default)]
pub(crate) struct EditTarget {
  pub(crate) chat: Target,
  pub(crate) message_id: Option<i64>,
  pub(crate) inline_message_id: Option<String>,
}

struct Located {
  chat_id: Option<ChatId>,
  message_id: Option<i64>,
  inline_message_id: Option<String>,
}

impl EditTarget {
  /// An inline message id alone is enough; otherwise both chat and message are needed.
  fn locate(self) -> Result<Located, Error> {
    if let Some(inline) = self.inline_message_id {
      return Ok(Located {
        chat_id: None,
        message_id: None,
        inline_message_id: Some(inline),
      });
    }

    let message_id = self.message_id.ok_or(Error::MissingMessage)?;
    let chat_id = self.chat.resolve()?;
    Ok(Located {
      chat_id: Some(chat_id),
      message_id: Some(message_id),
      inline_message_id: None,
    })
  }
}

macro_rules! edit_target {
  ($builder:ident) => {
    impl $builder {
      pub fn to(mut self, chat: impl Into<ChatId>) -> Self {
        self.target.chat.explicit = Some(chat.into());
        self
      }

      pub fn message(mut self, message_id: i64) -> Self {
        self.target.message_id = Some(message_id);
        self
      }

      /// Edits a message sent via inline mode instead.
      pub fn inline(mut self, inline_message_id: impl Into<String>) -> Self {
        self.target.inline_message_id = Some(inline_message_id.into());
        self
      }

      pub fn markup(mut self, markup: impl Into<InlineKeyboardMarkup>) -> Self {
        self.markup = Some(markup.into());
        self
      }

      pub(crate) fn target(mut self, target: EditTarget) -> Self {
        self.target = target;
        self
      }
    }
  };
}

/// `editMessageText`.
pub struct EditMessageText {
  bot: Bot,
  target: EditTarget,
  text: String,
  parse_mode: Option<ParseMode>,
  entities: Vec<MessageEntity>,
  link_preview: Option<LinkPreviewOptions>,
  markup: Option<InlineKeyboardMarkup>,
  opts: Options,
}

impl EditMessageText {
  pub fn new(bot: Bot, text: impl Into<String>) -> Self {
    Self {
      bot,
      target: EditTarget::default(),
      text: text.into(),
      parse_mode: None,
      entities: Vec::new(),
      link_preview: None,
      markup: None,
      opts: Options::default(),
    }
  }

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

  #[instrument(skip(self))]
  pub async fn send(self) -> Result<Edited, Error> {
    validate::length("text", &self.text, 1, MAX_MESSAGE_LENGTH)?;
    let located = self.target.locate()?;

    let request = EditMessageTextRequest {
      chat_id: located.chat_id,
      message_id: located.message_id,
      inline_message_id: located.inline_message_id,
      text: self.text,
      parse_mode: self.opts.parse_mode(self.parse_mode, &self.entities),
      entities: self.entities,
      link_preview_options: self.link_preview,
      reply_markup: self.markup,
    };

    execute(&self.bot, &request, &self.opts).await
  }
}

request_options!(EditMessageText => Edited);
parse_mode!(EditMessageText);
edit_target!(EditMessageText);

/// `editMessageCaption`. Without `caption()` the caption is removed.
pub struct EditMessageCaption {
  bot: Bot,
  target: EditTarget,
  caption: Option<String>,
  parse_mode: Option<ParseMode>,
  entities: Vec<MessageEntity>,
  above_media: Option<bool>,
  markup: Option<InlineKeyboardMarkup>,
  opts: Options,
}

impl EditMessageCaption {
  pub fn new(bot: Bot) -> Self {
    Self {
      bot,
      target: EditTarget::default(),
      caption: None,
      parse_mode: None,
      entities: Vec::new(),
      above_media: None,
      markup: None,
      opts: Options::default(),
    }
  }

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
  pub async fn send(self) -> Result<Edited, Error> {
    validate::caption(self.caption.as_deref())?;
    let located = self.target.locate()?;

    let request = EditMessageCaptionRequest {
      chat_id: located.chat_id,
      message_id: located.message_id,
      inline_message_id: located.inline_message_id,
      caption: self.caption,
      parse_mode: self.opts.parse_mode(self.parse_mode, &self.entities),
      caption_entities: self.entities,
      show_caption_above_media: self.above_media,
      reply_markup: self.markup,
    };

    execute(&self.bot, &request, &self.opts).await
  }
}

request_options!(EditMessageCaption => Edited);
parse_mode!(EditMessageCaption);
edit_target!(EditMessageCaption);

/// `editMessageReplyMarkup`. Without `markup()` the keyboard is removed.
pub struct EditMessageReplyMarkup {
  bot: Bot,
  target: EditTarget,
  markup: Option<InlineKeyboardMarkup>,
  opts: Options,
}

impl EditMessageReplyMarkup {
  pub fn new(bot: Bot) -> Self {
    Self {
      bot,
      target: EditTarget::default(),
      markup: None,
      opts: Options::default(),
    }
  }

  #[instrument(skip(self))]
  pub async fn send(self) -> Result<Edited, Error> {
    let located = self.target.locate()?;

    let request = EditMessageReplyMarkupRequest {
      chat_id: located.chat_id,
      message_id: located.message_id,
      inline_message_id: located.inline_message_id,
      reply_markup: self.markup,
    };

    execute(&self.bot, &request, &self.opts).await
  }
}

request_options!(EditMessageReplyMarkup => Edited);
edit_target!(EditMessageReplyMarkup);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn inline_id_needs_no_chat() {
    let located = EditTarget {
      inline_message_id: Some("AQAAA".into()),
      ..EditTarget::default()
    }
    .locate()
    .unwrap();
    assert!(located.chat_id.is_none());
    assert_eq!(located.inline_message_id.as_deref(), Some("AQAAA"));
  }

  #[test]
  fn chat_message_requires_message_id() {
    let target = EditTarget {
      chat: Target {
        explicit: Some(1.into()),
        fallback: None,
      },
      ..EditTarget::default()
    };
    assert!(matches!(target.locate(), Err(Error::MissingMessage)));
  }
}
