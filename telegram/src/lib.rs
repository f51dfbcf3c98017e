// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
mod builders;
mod client;
mod config;
pub mod methods;
pub mod types;

pub use crate::{
  builders::BotBuilder,
  client::Bot,
  config::{RequestOptions, TELEGRAM_API_BASE},
  methods::Method,
};
pub use error::Error;
