// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//! Keyboard builders.
//!
//! Buttons go into the current row; `row()` starts a new one.
//!
//! ```ignore
//! let keyboard = InlineKeyboard::new()
//!   .text("Yes", "vote:yes")
//!   .text("No", "vote:no")
//!   .row()
//!   .url("Rules", "https://example.com/rules");
//! ```
use telegram::types::{
  ForceReply, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, ReplyKeyboardMarkup,
  ReplyKeyboardRemove, ReplyMarkup,
};

#[derive(Debug, Clone, Default)]
pub struct InlineKeyboard {
  rows: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboard {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn row(mut self) -> Self {
    if self.rows.last().map_or(true, |row| !row.is_empty()) {
      self.rows.push(Vec::new());
    }
    self
  }

  pub fn button(mut self, button: InlineKeyboardButton) -> Self {
    match self.rows.last_mut() {
      Some(row) => row.push(button),
      None => self.rows.push(vec![button]),
    }
    self
  }

  pub fn url(self, text: impl Into<String>, url: impl Into<String>) -> Self {
    self.button(InlineKeyboardButton {
      text: text.into(),
      url: Some(url.into()),
      ..InlineKeyboardButton::default()
    })
  }

  /// Button sending `data` back as a callback query.
  pub fn text(self, text: impl Into<String>, data: impl Into<String>) -> Self {
    self.button(InlineKeyboardButton {
      text: text.into(),
      callback_data: Some(data.into()),
      ..InlineKeyboardButton::default()
    })
  }

  pub fn switch_inline(self, text: impl Into<String>, query: impl Into<String>) -> Self {
    self.button(InlineKeyboardButton {
      text: text.into(),
      switch_inline_query_current_chat: Some(query.into()),
      ..InlineKeyboardButton::default()
    })
  }

  pub fn is_empty(&self) -> bool {
    self.rows.iter().all(Vec::is_empty)
  }

  pub fn build(self) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup {
      inline_keyboard: self.rows.into_iter().filter(|row| !row.is_empty()).collect(),
    }
  }
}

impl From<InlineKeyboard> for InlineKeyboardMarkup {
  fn from(keyboard: InlineKeyboard) -> Self {
    keyboard.build()
  }
}

impl From<InlineKeyboard> for ReplyMarkup {
  fn from(keyboard: InlineKeyboard) -> Self {
    ReplyMarkup::InlineKeyboard(keyboard.build())
  }
}

/// Custom keyboard replacing the user's regular one.
#[derive(Debug, Clone, Default)]
pub struct ReplyKeyboard {
  rows: Vec<Vec<KeyboardButton>>,
  markup: ReplyKeyboardMarkup,
}

impl ReplyKeyboard {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn row(mut self) -> Self {
    if self.rows.last().map_or(true, |row| !row.is_empty()) {
      self.rows.push(Vec::new());
    }
    self
  }

  fn push(mut self, button: KeyboardButton) -> Self {
    match self.rows.last_mut() {
      Some(row) => row.push(button),
      None => self.rows.push(vec![button]),
    }
    self
  }

  pub fn button(self, text: impl Into<String>) -> Self {
    self.push(KeyboardButton {
      text: text.into(),
      ..KeyboardButton::default()
    })
  }

  pub fn contact(self, text: impl Into<String>) -> Self {
    self.push(KeyboardButton {
      text: text.into(),
      request_contact: Some(true),
      ..KeyboardButton::default()
    })
  }

  pub fn location(self, text: impl Into<String>) -> Self {
    self.push(KeyboardButton {
      text: text.into(),
      request_location: Some(true),
      ..KeyboardButton::default()
    })
  }

  pub fn resize(mut self) -> Self {
    self.markup.resize_keyboard = Some(true);
    self
  }

  pub fn one_time(mut self) -> Self {
    self.markup.one_time_keyboard = Some(true);
    self
  }

  pub fn persistent(mut self) -> Self {
    self.markup.is_persistent = Some(true);
    self
  }

  pub fn placeholder(mut self, text: impl Into<String>) -> Self {
    self.markup.input_field_placeholder = Some(text.into());
    self
  }

  pub fn build(self) -> ReplyKeyboardMarkup {
    ReplyKeyboardMarkup {
      keyboard: self.rows.into_iter().filter(|row| !row.is_empty()).collect(),
      ..self.markup
    }
  }
}

impl From<ReplyKeyboard> for ReplyMarkup {
  fn from(keyboard: ReplyKeyboard) -> Self {
    ReplyMarkup::Keyboard(keyboard.build())
  }
}

pub fn remove_keyboard() -> ReplyMarkup {
  ReplyMarkup::Remove(ReplyKeyboardRemove::default())
}

pub fn force_reply(placeholder: Option<&str>) -> ReplyMarkup {
  ReplyMarkup::ForceReply(ForceReply {
    input_field_placeholder: placeholder.map(str::to_string),
    ..ForceReply::default()
  })
}
