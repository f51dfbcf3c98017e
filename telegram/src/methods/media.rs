// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::{Method, SendOptions};
use crate::types::{
  ChatId, InputFile, InputMedia, InputPollOption, InlineKeyboardMarkup, Message, MessageEntity,
  ParseMode, Poll,
};
use serde::Serialize;

/// Caption fields shared by media methods.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Caption {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub caption: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parse_mode: Option<ParseMode>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub caption_entities: Vec<MessageEntity>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SendPhotoRequest {
  pub chat_id: ChatId,
  pub photo: InputFile,
  #[serde(flatten)]
  pub caption: Caption,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub show_caption_above_media: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub has_spoiler: Option<bool>,
  #[serde(flatten)]
  pub options: SendOptions,
}

method!(SendPhotoRequest, "sendPhoto", Message, files: [photo]);

#[derive(Debug, Clone, Serialize)]
pub struct SendDocumentRequest {
  pub chat_id: ChatId,
  pub document: InputFile,
  #[serde(flatten)]
  pub caption: Caption,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub disable_content_type_detection: Option<bool>,
  #[serde(flatten)]
  pub options: SendOptions,
}

method!(SendDocumentRequest, "sendDocument", Message, files: [document]);

#[derive(Debug, Clone, Serialize)]
pub struct SendVideoRequest {
  pub chat_id: ChatId,
  pub video: InputFile,
  #[serde(flatten)]
  pub caption: Caption,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub duration: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub width: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub height: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub has_spoiler: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub supports_streaming: Option<bool>,
  #[serde(flatten)]
  pub options: SendOptions,
}

method!(SendVideoRequest, "sendVideo", Message, files: [video]);

#[derive(Debug, Clone, Serialize)]
pub struct SendAudioRequest {
  pub chat_id: ChatId,
  pub audio: InputFile,
  #[serde(flatten)]
  pub caption: Caption,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub duration: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub performer: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
  #[serde(flatten)]
  pub options: SendOptions,
}

method!(SendAudioRequest, "sendAudio", Message, files: [audio]);

#[derive(Debug, Clone, Serialize)]
pub struct SendVoiceRequest {
  pub chat_id: ChatId,
  pub voice: InputFile,
  #[serde(flatten)]
  pub caption: Caption,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub duration: Option<i64>,
  #[serde(flatten)]
  pub options: SendOptions,
}

method!(SendVoiceRequest, "sendVoice", Message, files: [voice]);

#[derive(Debug, Clone, Serialize)]
pub struct SendAnimationRequest {
  pub chat_id: ChatId,
  pub animation: InputFile,
  #[serde(flatten)]
  pub caption: Caption,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub has_spoiler: Option<bool>,
  #[serde(flatten)]
  pub options: SendOptions,
}

method!(SendAnimationRequest, "sendAnimation", Message, files: [animation]);

#[derive(Debug, Clone, Serialize)]
pub struct SendStickerRequest {
  pub chat_id: ChatId,
  pub sticker: InputFile,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub emoji: Option<String>,
  #[serde(flatten)]
  pub options: SendOptions,
}

method!(SendStickerRequest, "sendSticker", Message, files: [sticker]);

#[derive(Debug, Clone, Serialize)]
pub struct SendMediaGroupRequest {
  pub chat_id: ChatId,
  pub media: Vec<InputMedia>,
  #[serde(skip)]
  attachments: Vec<(String, InputFile)>,
  #[serde(flatten)]
  pub options: SendOptions,
}

impl SendMediaGroupRequest {
  /// Moves uploads out of `media` into separate parts referenced via `attach://`.
  pub fn new(chat_id: ChatId, mut media: Vec<InputMedia>, options: SendOptions) -> Self {
    let mut attachments = Vec::new();
    for (index, item) in media.iter_mut().enumerate() {
      let body = item.body_mut();
      if body.media.is_upload() {
        let name = format!("file{}", index);
        let file = std::mem::replace(&mut body.media, InputFile::Attach(name.clone()));
        attachments.push((name, file));
      }
    }

    Self {
      chat_id,
      media,
      attachments,
      options,
    }
  }
}

impl Method for SendMediaGroupRequest {
  type Response = Vec<Message>;
  const NAME: &'static str = "sendMediaGroup";

  fn files(&self) -> Vec<(&str, &InputFile)> {
    self
      .attachments
      .iter()
      .map(|(name, file)| (name.as_str(), file))
      .collect()
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct SendLocationRequest {
  pub chat_id: ChatId,
  pub latitude: f64,
  pub longitude: f64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub horizontal_accuracy: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub live_period: Option<i64>,
  #[serde(flatten)]
  pub options: SendOptions,
}

method!(SendLocationRequest, "sendLocation", Message);

#[derive(Debug, Clone, Serialize)]
pub struct SendVenueRequest {
  pub chat_id: ChatId,
  pub latitude: f64,
  pub longitude: f64,
  pub title: String,
  pub address: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub foursquare_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub google_place_id: Option<String>,
  #[serde(flatten)]
  pub options: SendOptions,
}

method!(SendVenueRequest, "sendVenue", Message);

#[derive(Debug, Clone, Serialize)]
pub struct SendContactRequest {
  pub chat_id: ChatId,
  pub phone_number: String,
  pub first_name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub last_name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub vcard: Option<String>,
  #[serde(flatten)]
  pub options: SendOptions,
}

method!(SendContactRequest, "sendContact", Message);

#[derive(Debug, Clone, Serialize)]
pub struct SendDiceRequest {
  pub chat_id: ChatId,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub emoji: Option<String>,
  #[serde(flatten)]
  pub options: SendOptions,
}

method!(SendDiceRequest, "sendDice", Message);

#[derive(Debug, Clone, Serialize)]
pub struct SendPollRequest {
  pub chat_id: ChatId,
  pub question: String,
  pub options: Vec<InputPollOption>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub is_anonymous: Option<bool>,
  #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
  pub kind: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub allows_multiple_answers: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub correct_option_id: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub explanation: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub open_period: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub is_closed: Option<bool>,
  #[serde(flatten)]
  pub send: SendOptions,
}

method!(SendPollRequest, "sendPoll", Message);

#[derive(Debug, Clone, Serialize)]
pub struct StopPollRequest {
  pub chat_id: ChatId,
  pub message_id: i64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_markup: Option<InlineKeyboardMarkup>,
}

method!(StopPollRequest, "stopPoll", Poll);

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::InputMediaBody;
  use serde_json::json;

  #[test]
  fn media_group_moves_uploads_to_attachments() {
    let request = SendMediaGroupRequest::new(
      1.into(),
      vec![
        InputMedia::Photo(InputMediaBody::new(InputFile::id("AgAD"))),
        InputMedia::Photo(InputMediaBody::new(InputFile::memory("b.png", vec![1, 2]))),
      ],
      SendOptions::default(),
    );

    let files = request.files();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].0, "file1");

    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(body["media"][0], json!({"type": "photo", "media": "AgAD"}));
    assert_eq!(body["media"][1]["media"], json!("attach://file1"));
  }

  #[test]
  fn captions_compare_by_entities() {
    let bold = MessageEntity {
      kind: "bold".into(),
      offset: 0,
      length: 4,
      url: None,
      user: None,
      language: None,
      custom_emoji_id: None,
    };
    let caption = Caption {
      caption: Some("look".into()),
      parse_mode: None,
      caption_entities: vec![bold.clone()],
    };

    assert_eq!(caption, caption.clone());
    assert_ne!(caption, Caption {
      caption_entities: vec![MessageEntity { length: 2, ..bold }],
      ..caption.clone()
    });
  }

  #[test]
  fn flattened_options_sit_at_top_level() {
    let request = SendPhotoRequest {
      chat_id: 9.into(),
      photo: InputFile::url("https://example.com/a.jpg"),
      caption: Caption {
        caption: Some("look".into()),
        ..Caption::default()
      },
      show_caption_above_media: None,
      has_spoiler: Some(true),
      options: SendOptions {
        protect_content: Some(true),
        ..SendOptions::default()
      },
    };

    assert_eq!(
      serde_json::to_value(&request).unwrap(),
      json!({
        "chat_id": 9,
        "photo": "https://example.com/a.jpg",
        "caption": "look",
        "has_spoiler": true,
        "protect_content": true,
      })
    );
    assert_eq!(request.files()[0].0, "photo");
  }
}
