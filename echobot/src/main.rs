// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use anyhow::{Context as _, Result};
use config::Settings;
use fluent::{
  format::{escape_html, mention_html},
  handler_fn,
  types::ChatAction,
  Context, InlineKeyboard, Polling,
};
use std::time::Duration;
use tracing::{info, instrument};

const SETTINGS_PATH: &str = "echobot.toml";

const HELP: &str = "<b>Echo bot</b>\n\
  /start - greeting\n\
  /help - this message\n\
  /echo <i>text</i> - repeat the text\n\
  /flash <i>text</i> - repeat and delete after ten seconds\n\
  Anything else is echoed back.";

#[cfg(debug_assertions)]
fn setup_logging() {
  tracing_subscriber::fmt()
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .init();
}

#[cfg(not(debug_assertions))]
fn setup_logging() {
  tracing_subscriber::fmt().init();
}

#[tokio::main]
async fn main() -> Result<()> {
  #[cfg(debug_assertions)]
  config::dotenv::load()?;
  setup_logging();

  let settings = Settings::load(SETTINGS_PATH).context("Failed to load settings")?;
  let bot = settings.bot().context("Failed to build bot")?;

  let me = fluent::GetMe::new(bot.clone())
    .send()
    .await
    .context("Token rejected by getMe")?;
  info!("Running as @{}", me.username.as_deref().unwrap_or(&me.first_name));

  let mut polling = Polling::new(bot)
    .timeout(Duration::from_secs(settings.polling.timeout_secs))
    .allowed_updates(settings.polling.allowed_updates.iter().cloned());
  if let Some(mode) = settings.bot.parse_mode {
    polling = polling.parse_mode(mode);
  }

  polling.run(handler_fn(handle)).await;
  Ok(())
}

#[instrument(skip_all, fields(update_id = ctx.update().update_id))]
async fn handle(ctx: Context) -> fluent::Result<()> {
  if let Some(query) = ctx.callback_query() {
    let data = query.data.clone().unwrap_or_default();
    ctx.answer_callback(format!("You pressed {}", data)).send().await?;
    return Ok(());
  }

  let Some(message) = ctx.effective_message() else {
    return Ok(());
  };

  match message.command() {
    Some(("start", _)) => {
      let greeting = match ctx.effective_user() {
        Some(user) => format!("Hello, {}!", mention_html(user.id, &user.first_name)),
        None => "Hello!".to_string(),
      };
      ctx
        .reply(greeting)
        .html()
        .markup(InlineKeyboard::new().text("Ping", "ping"))
        .send()
        .await?;
    }
    Some(("help", _)) => {
      ctx.reply(HELP).html().send().await?;
    }
    Some(("echo", rest)) if !rest.is_empty() => {
      ctx.send_chat_action(ChatAction::Typing).send().await?;
      ctx.send_message(escape_html(rest)).html().send().await?;
    }
    Some(("flash", rest)) if !rest.is_empty() => {
      ctx
        .send_message(escape_html(rest))
        .html()
        .delete_after(Duration::from_secs(10))
        .send()
        .await?;
    }
    Some(_) => {
      ctx.reply("Unknown command, try /help").send().await?;
    }
    None => {
      if let Some(text) = message.text.as_deref() {
        ctx.reply(escape_html(text)).html().send().await?;
      } else {
        ctx
          .copy_message(message.chat.id, message.message_id)
          .send()
          .await?;
      }
    }
  }
  Ok(())
}
