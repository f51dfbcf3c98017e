// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//! Single-file media: photos, documents, videos, audio, voice notes, animations and stickers.
//!
//! Files are anything convertible into [`InputFile`]: a `file_id`, an URL, a local path or
//! in-memory bytes. Local files are uploaded as multipart parts by the binding.
use crate::{
  options::{deliver, Options, Target},
  validate,
};
use error::Error;
use telegram::{
  methods::{
    Caption, SendAnimationRequest, SendAudioRequest, SendDocumentRequest, SendOptions,
    SendPhotoRequest, SendStickerRequest, SendVideoRequest, SendVoiceRequest,
  },
  types::{InputFile, Message, MessageEntity, ParseMode},
  Bot,
};
use tracing::instrument;

/// Validates the caption and applies the parse mode only when there is one.
fn caption(
  text: Option<String>,
  entities: Vec<MessageEntity>,
  explicit: Option<ParseMode>,
  opts: &Options,
) -> Result<Caption, Error> {
  validate::caption(text.as_deref())?;
  Ok(Caption {
    parse_mode: text.as_ref().and(opts.parse_mode(explicit, &entities)),
    caption: text,
    caption_entities: entities,
  })
}

macro_rules! captioned {
  ($builder:ident) => {
    impl $builder {
      /// Caption, up to 1024 characters.
      pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
      }

      pub fn entities(mut self, entities: Vec<MessageEntity>) -> Self {
        self.entities = entities;
        self
      }
    }

    request_options!($builder => Message);
    chat_target!($builder);
    parse_mode!($builder);
    send_options!($builder);
    delete_after!($builder);
  };
}

/// `sendPhoto`.
pub struct SendPhoto {
  bot: Bot,
  chat: Target,
  photo: InputFile,
  caption: Option<String>,
  parse_mode: Option<ParseMode>,
  entities: Vec<MessageEntity>,
  above_media: Option<bool>,
  spoiler: Option<bool>,
  send: SendOptions,
  opts: Options,
}

impl SendPhoto {
  pub fn new(bot: Bot, photo: impl Into<InputFile>) -> Self {
    Self {
      bot,
      chat: Target::default(),
      photo: photo.into(),
      caption: None,
      parse_mode: None,
      entities: Vec::new(),
      above_media: None,
      spoiler: None,
      send: SendOptions::default(),
      opts: Options::default(),
    }
  }

  pub fn show_above_media(mut self) -> Self {
    self.above_media = Some(true);
    self
  }

  /// Covers the photo with a spoiler animation.
  pub fn spoiler(mut self) -> Self {
    self.spoiler = Some(true);
    self
  }

  #[instrument(skip(self), fields(chat = ?self.chat.explicit))]
  pub async fn send(self) -> Result<Message, Error> {
    let chat_id = self.chat.resolve()?;
    let request = SendPhotoRequest {
      chat_id: chat_id.clone(),
      photo: self.photo,
      caption: caption(self.caption, self.entities, self.parse_mode, &self.opts)?,
      show_caption_above_media: self.above_media,
      has_spoiler: self.spoiler,
      options: self.send,
    };
    deliver(&self.bot, chat_id, &request, &self.opts).await
  }
}

captioned!(SendPhoto);

/// `sendDocument`.
pub struct SendDocument {
  bot: Bot,
  chat: Target,
  document: InputFile,
  caption: Option<String>,
  parse_mode: Option<ParseMode>,
  entities: Vec<MessageEntity>,
  no_type_detection: Option<bool>,
  send: SendOptions,
  opts: Options,
}

impl SendDocument {
  pub fn new(bot: Bot, document: impl Into<InputFile>) -> Self {
    Self {
      bot,
      chat: Target::default(),
      document: document.into(),
      caption: None,
      parse_mode: None,
      entities: Vec::new(),
      no_type_detection: None,
      send: SendOptions::default(),
      opts: Options::default(),
    }
  }

  /// Keeps Telegram from turning the upload into a photo or video.
  pub fn disable_type_detection(mut self) -> Self {
    self.no_type_detection = Some(true);
    self
  }

  #[instrument(skip(self), fields(chat = ?self.chat.explicit))]
  pub async fn send(self) -> Result<Message, Error> {
    let chat_id = self.chat.resolve()?;
    let request = SendDocumentRequest {
      chat_id: chat_id.clone(),
      document: self.document,
      caption: caption(self.caption, self.entities, self.parse_mode, &self.opts)?,
      disable_content_type_detection: self.no_type_detection,
      options: self.send,
    };
    deliver(&self.bot, chat_id, &request, &self.opts).await
  }
}

captioned!(SendDocument);

/// `sendVideo`.
pub struct SendVideo {
  bot: Bot,
  chat: Target,
  video: InputFile,
  caption: Option<String>,
  parse_mode: Option<ParseMode>,
  entities: Vec<MessageEntity>,
  duration: Option<i64>,
  size: Option<(i64, i64)>,
  spoiler: Option<bool>,
  streaming: Option<bool>,
  send: SendOptions,
  opts: Options,
}

impl SendVideo {
  pub fn new(bot: Bot, video: impl Into<InputFile>) -> Self {
    Self {
      bot,
      chat: Target::default(),
      video: video.into(),
      caption: None,
      parse_mode: None,
      entities: Vec::new(),
      duration: None,
      size: None,
      spoiler: None,
      streaming: None,
      send: SendOptions::default(),
      opts: Options::default(),
    }
  }

  /// Duration in seconds.
  pub fn duration(mut self, seconds: i64) -> Self {
    self.duration = Some(seconds);
    self
  }

  pub fn size(mut self, width: i64, height: i64) -> Self {
    self.size = Some((width, height));
    self
  }

  pub fn spoiler(mut self) -> Self {
    self.spoiler = Some(true);
    self
  }

  pub fn streaming(mut self) -> Self {
    self.streaming = Some(true);
    self
  }

  #[instrument(skip(self), fields(chat = ?self.chat.explicit))]
  pub async fn send(self) -> Result<Message, Error> {
    let chat_id = self.chat.resolve()?;
    let request = SendVideoRequest {
      chat_id: chat_id.clone(),
      video: self.video,
      caption: caption(self.caption, self.entities, self.parse_mode, &self.opts)?,
      duration: self.duration,
      width: self.size.map(|(width, _)| width),
      height: self.size.map(|(_, height)| height),
      has_spoiler: self.spoiler,
      supports_streaming: self.streaming,
      options: self.send,
    };
    deliver(&self.bot, chat_id, &request, &self.opts).await
  }
}

captioned!(SendVideo);

/// `sendAudio`: music shown in the player.
pub struct SendAudio {
  bot: Bot,
  chat: Target,
  audio: InputFile,
  caption: Option<String>,
  parse_mode: Option<ParseMode>,
  entities: Vec<MessageEntity>,
  duration: Option<i64>,
  performer: Option<String>,
  title: Option<String>,
  send: SendOptions,
  opts: Options,
}

impl SendAudio {
  pub fn new(bot: Bot, audio: impl Into<InputFile>) -> Self {
    Self {
      bot,
      chat: Target::default(),
      audio: audio.into(),
      caption: None,
      parse_mode: None,
      entities: Vec::new(),
      duration: None,
      performer: None,
      title: None,
      send: SendOptions::default(),
      opts: Options::default(),
    }
  }

  pub fn duration(mut self, seconds: i64) -> Self {
    self.duration = Some(seconds);
    self
  }

  pub fn performer(mut self, performer: impl Into<String>) -> Self {
    self.performer = Some(performer.into());
    self
  }

  pub fn title(mut self, title: impl Into<String>) -> Self {
    self.title = Some(title.into());
    self
  }

  #[instrument(skip(self), fields(chat = ?self.chat.explicit))]
  pub async fn send(self) -> Result<Message, Error> {
    let chat_id = self.chat.resolve()?;
    let request = SendAudioRequest {
      chat_id: chat_id.clone(),
      audio: self.audio,
      caption: caption(self.caption, self.entities, self.parse_mode, &self.opts)?,
      duration: self.duration,
      performer: self.performer,
      title: self.title,
      options: self.send,
    };
    deliver(&self.bot, chat_id, &request, &self.opts).await
  }
}

captioned!(SendAudio);

/// `sendVoice`: OGG/OPUS, MP3 or M4A voice notes.
pub struct SendVoice {
  bot: Bot,
  chat: Target,
  voice: InputFile,
  caption: Option<String>,
  parse_mode: Option<ParseMode>,
  entities: Vec<MessageEntity>,
  duration: Option<i64>,
  send: SendOptions,
  opts: Options,
}

impl SendVoice {
  pub fn new(bot: Bot, voice: impl Into<InputFile>) -> Self {
    Self {
      bot,
      chat: Target::default(),
      voice: voice.into(),
      caption: None,
      parse_mode: None,
      entities: Vec::new(),
      duration: None,
      send: SendOptions::default(),
      opts: Options::default(),
    }
  }

  pub fn duration(mut self, seconds: i64) -> Self {
    self.duration = Some(seconds);
    self
  }

  #[instrument(skip(self), fields(chat = ?self.chat.explicit))]
  pub async fn send(self) -> Result<Message, Error> {
    let chat_id = self.chat.resolve()?;
    let request = SendVoiceRequest {
      chat_id: chat_id.clone(),
      voice: self.voice,
      caption: caption(self.caption, self.entities, self.parse_mode, &self.opts)?,
      duration: self.duration,
      options: self.send,
    };
    deliver(&self.bot, chat_id, &request, &self.opts).await
  }
}

captioned!(SendVoice);

/// `sendAnimation`: GIF or soundless H.264 video.
pub struct SendAnimation {
  bot: Bot,
  chat: Target,
  animation: InputFile,
  caption: Option<String>,
  parse_mode: Option<ParseMode>,
  entities: Vec<MessageEntity>,
  spoiler: Option<bool>,
  send: SendOptions,
  opts: Options,
}

impl SendAnimation {
  pub fn new(bot: Bot, animation: impl Into<InputFile>) -> Self {
    Self {
      bot,
      chat: Target::default(),
      animation: animation.into(),
      caption: None,
      parse_mode: None,
      entities: Vec::new(),
      spoiler: None,
      send: SendOptions::default(),
      opts: Options::default(),
    }
  }

  pub fn spoiler(mut self) -> Self {
    self.spoiler = Some(true);
    self
  }

  #[instrument(skip(self), fields(chat = ?self.chat.explicit))]
  pub async fn send(self) -> Result<Message, Error> {
    let chat_id = self.chat.resolve()?;
    let request = SendAnimationRequest {
      chat_id: chat_id.clone(),
      animation: self.animation,
      caption: caption(self.caption, self.entities, self.parse_mode, &self.opts)?,
      has_spoiler: self.spoiler,
      options: self.send,
    };
    deliver(&self.bot, chat_id, &request, &self.opts).await
  }
}

captioned!(SendAnimation);

/// `sendSticker`.
pub struct SendSticker {
  bot: Bot,
  chat: Target,
  sticker: InputFile,
  emoji: Option<String>,
  send: SendOptions,
  opts: Options,
}

impl SendSticker {
  pub fn new(bot: Bot, sticker: impl Into<InputFile>) -> Self {
    Self {
      bot,
      chat: Target::default(),
      sticker: sticker.into(),
      emoji: None,
      send: SendOptions::default(),
      opts: Options::default(),
    }
  }

  /// Emoji associated with a freshly uploaded sticker.
  pub fn emoji(mut self, emoji: impl Into<String>) -> Self {
    self.emoji = Some(emoji.into());
    self
  }

  #[instrument(skip(self))]
  pub async fn send(self) -> Result<Message, Error> {
    let chat_id = self.chat.resolve()?;
    let request = SendStickerRequest {
      chat_id: chat_id.clone(),
      sticker: self.sticker,
      emoji: self.emoji,
      options: self.send,
    };
    deliver(&self.bot, chat_id, &request, &self.opts).await
  }
}

request_options!(SendSticker => Message);
chat_target!(SendSticker);
send_options!(SendSticker);
delete_after!(SendSticker);

#[cfg(test)]
mod tests {
  use super::*;

  fn html_default() -> Options {
    Options {
      parse_mode: Some(ParseMode::Html),
      ..Options::default()
    }
  }

  #[test]
  fn parse_mode_dropped_without_caption() {
    let caption = caption(None, Vec::new(), Some(ParseMode::Html), &html_default()).unwrap();
    assert_eq!(caption.parse_mode, None);
    assert_eq!(caption.caption, None);
  }

  #[test]
  fn caption_entities_keep_default_parse_mode_out() {
    let italic = MessageEntity {
      kind: "italic".into(),
      offset: 0,
      length: 3,
      url: None,
      user: None,
      language: None,
      custom_emoji_id: None,
    };

    let plain = caption(Some("a<b".into()), Vec::new(), None, &html_default()).unwrap();
    let styled = caption(Some("a<b".into()), vec![italic], None, &html_default()).unwrap();

    assert_eq!(plain.parse_mode, Some(ParseMode::Html));
    assert_eq!(styled.parse_mode, None);
    assert_eq!(styled.caption_entities.len(), 1);
  }

  #[test]
  fn long_caption_rejected() {
    let text = "a".repeat(validate::MAX_CAPTION_LENGTH + 1);
    assert!(matches!(
      caption(Some(text), Vec::new(), None, &Options::default()),
      Err(Error::Validation(_))
    ));
  }
}
