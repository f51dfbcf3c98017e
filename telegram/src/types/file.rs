// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::message::{MessageEntity, ParseMode};
use serde::{Deserialize, Serialize, Serializer};
use std::path::PathBuf;

/// A file to send: either already known to Telegram or uploaded with the request.
#[derive(Debug, Clone, PartialEq)]
pub enum InputFile {
  /// `file_id` of a file stored on Telegram servers.
  Id(String),
  /// HTTP URL Telegram fetches itself.
  Url(String),
  /// Local file read at send time.
  Path(PathBuf),
  Memory { name: String, data: Vec<u8> },
  /// Reference to another multipart part of the same request.
  Attach(String),
}

impl InputFile {
  pub fn id(id: impl Into<String>) -> Self {
    Self::Id(id.into())
  }

  pub fn url(url: impl Into<String>) -> Self {
    Self::Url(url.into())
  }

  pub fn path(path: impl Into<PathBuf>) -> Self {
    Self::Path(path.into())
  }

  pub fn memory(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
    Self::Memory {
      name: name.into(),
      data: data.into(),
    }
  }

  /// Whether the file has to travel as a multipart part.
  pub fn is_upload(&self) -> bool {
    matches!(self, Self::Path(_) | Self::Memory { .. })
  }

  /// Name used for the multipart part.
  pub fn file_name(&self) -> String {
    match self {
      InputFile::Path(path) => path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("file")
        .to_string(),
      InputFile::Memory { name, .. } => name.clone(),
      InputFile::Id(_) | InputFile::Url(_) | InputFile::Attach(_) => "file".to_string(),
    }
  }
}

/// Heuristic used by the fluent layer: URLs and paths are recognised, anything else is a `file_id`.
impl From<&str> for InputFile {
  fn from(value: &str) -> Self {
    if value.starts_with("http://") || value.starts_with("https://") {
      Self::Url(value.to_string())
    } else if std::path::Path::new(value).exists() {
      Self::Path(value.into())
    } else {
      Self::Id(value.to_string())
    }
  }
}

impl From<String> for InputFile {
  fn from(value: String) -> Self {
    Self::from(value.as_str())
  }
}

impl From<PathBuf> for InputFile {
  fn from(path: PathBuf) -> Self {
    Self::Path(path)
  }
}

impl Serialize for InputFile {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      InputFile::Id(value) | InputFile::Url(value) => serializer.serialize_str(value),
      InputFile::Attach(name) => serializer.serialize_str(&format!("attach://{}", name)),
      InputFile::Path(_) | InputFile::Memory { .. } => {
        serializer.serialize_str(&format!("attach://{}", self.file_name()))
      }
    }
  }
}

/// Result of `getFile`.
#[derive(Debug, Clone, Deserialize)]
pub struct File {
  pub file_id: String,
  pub file_unique_id: String,
  #[serde(default)]
  pub file_size: Option<i64>,
  #[serde(default)]
  pub file_path: Option<String>,
}

impl File {
  /// Download link; valid for at least an hour after `getFile`.
  pub fn download_url(&self, api_url: &str, token: &str) -> Option<String> {
    self
      .file_path
      .as_ref()
      .map(|path| format!("{}/file/bot{}/{}", api_url.trim_end_matches('/'), token, path))
  }
}

/// Element of `sendMediaGroup`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputMedia {
  Photo(InputMediaBody),
  Video(InputMediaBody),
  Document(InputMediaBody),
  Audio(InputMediaBody),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputMediaBody {
  pub media: InputFile,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub caption: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub parse_mode: Option<ParseMode>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub caption_entities: Vec<MessageEntity>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub has_spoiler: Option<bool>,
}

impl InputMediaBody {
  pub fn new(media: InputFile) -> Self {
    Self {
      media,
      caption: None,
      parse_mode: None,
      caption_entities: Vec::new(),
      has_spoiler: None,
    }
  }
}

impl InputMedia {
  pub fn body(&self) -> &InputMediaBody {
    match self {
      InputMedia::Photo(body)
      | InputMedia::Video(body)
      | InputMedia::Document(body)
      | InputMedia::Audio(body) => body,
    }
  }

  pub fn body_mut(&mut self) -> &mut InputMediaBody {
    match self {
      InputMedia::Photo(body)
      | InputMedia::Video(body)
      | InputMedia::Document(body)
      | InputMedia::Audio(body) => body,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn remote_files_serialize_as_strings() {
    assert_eq!(
      serde_json::to_string(&InputFile::id("AgAD")).unwrap(),
      "\"AgAD\""
    );
    assert_eq!(
      serde_json::to_string(&InputFile::Attach("file0".into())).unwrap(),
      "\"attach://file0\""
    );
  }

  #[test]
  fn str_conversion_detects_urls() {
    assert_eq!(
      InputFile::from("https://example.com/cat.jpg"),
      InputFile::Url("https://example.com/cat.jpg".into())
    );
    assert_eq!(
      InputFile::from("no-such-file-AgACAgIAAxkBAAI"),
      InputFile::Id("no-such-file-AgACAgIAAxkBAAI".into())
    );
  }

  #[test]
  fn upload_file_name() {
    let file = InputFile::path("/tmp/report.pdf");
    assert!(file.is_upload());
    assert_eq!(file.file_name(), "report.pdf");
  }

  #[test]
  fn download_url_trims_slash() {
    let file = File {
      file_id: "x".into(),
      file_unique_id: "y".into(),
      file_size: None,
      file_path: Some("photos/file_1.jpg".into()),
    };
    assert_eq!(
      file.download_url("https://api.telegram.org/", "T").as_deref(),
      Some("https://api.telegram.org/file/botT/photos/file_1.jpg")
    );
  }
}
