// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use error::Error;

pub(crate) const MAX_MESSAGE_LENGTH: usize = 4096;
pub(crate) const MAX_CAPTION_LENGTH: usize = 1024;
pub(crate) const MAX_CALLBACK_TEXT_LENGTH: usize = 200;
pub(crate) const MAX_MESSAGE_IDS: usize = 100;

/// Length in characters, bounds inclusive.
pub(crate) fn length(field: &str, value: &str, min: usize, max: usize) -> Result<(), Error> {
  let len = value.chars().count();
  if len < min || len > max {
    return Err(Error::validation(format!(
      "{} must be {}..={} characters, got {}",
      field, min, max, len
    )));
  }
  Ok(())
}

pub(crate) fn caption(value: Option<&str>) -> Result<(), Error> {
  match value {
    Some(caption) => length("caption", caption, 0, MAX_CAPTION_LENGTH),
    None => Ok(()),
  }
}

pub(crate) fn count(field: &str, len: usize, min: usize, max: usize) -> Result<(), Error> {
  if len < min || len > max {
    return Err(Error::validation(format!(
      "{} needs {}..={} entries, got {}",
      field, min, max, len
    )));
  }
  Ok(())
}

pub(crate) fn message_ids(ids: &[i64]) -> Result<(), Error> {
  count("message_ids", ids.len(), 1, MAX_MESSAGE_IDS)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn counts_characters_not_bytes() {
    let text = "я".repeat(MAX_MESSAGE_LENGTH);
    assert!(length("text", &text, 1, MAX_MESSAGE_LENGTH).is_ok());
    assert!(length("text", &format!("{}!", text), 1, MAX_MESSAGE_LENGTH).is_err());
  }

  #[test]
  fn empty_text_rejected() {
    let err = length("text", "", 1, MAX_MESSAGE_LENGTH).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
  }

  #[test]
  fn message_id_bounds() {
    assert!(message_ids(&[]).is_err());
    assert!(message_ids(&[1]).is_ok());
    assert!(message_ids(&(1..=100).collect::<Vec<_>>()).is_ok());
    assert!(message_ids(&(1..=101).collect::<Vec<_>>()).is_err());
  }
}
