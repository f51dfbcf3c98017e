// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
mod config;
pub mod dotenv;

pub use crate::config::{BotSettings, PollingSettings, Settings, API_URL_ENV, TOKEN_ENV};
