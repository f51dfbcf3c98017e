// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//! Fluent builders over the Bot API binding.
//!
//! ```ignore
//! let bot = Bot::new(token)?;
//! SendMessage::new(bot.clone(), "<b>Deploy finished</b>")
//!   .to(-100123)
//!   .html()
//!   .silent()
//!   .delete_after(Duration::from_secs(600))
//!   .send()
//!   .await?;
//! ```
#[macro_use]
mod macros;

pub mod builders;
mod context;
pub mod format;
pub mod keyboard;
mod options;
mod polling;
mod validate;

pub use builders::*;
pub use context::Context;
pub use keyboard::{force_reply, remove_keyboard, InlineKeyboard, ReplyKeyboard};
pub use polling::{handler_fn, FnHandler, Handler, Polling};

pub use error::{Error, Result};
pub use telegram::{types, Bot};
