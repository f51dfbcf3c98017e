// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//! Long polling of `getUpdates`.
use crate::{builders::GetUpdates, context::Context};
use async_trait::async_trait;
use error::Error;
use std::{future::Future, time::Duration};
use telegram::{types::ParseMode, Bot};
use tracing::{debug, error, info, instrument, warn};

const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_secs(25);
const BACKOFF: Duration = Duration::from_secs(1);

#[async_trait]
pub trait Handler: Send + Sync {
  async fn handle(&self, ctx: Context) -> Result<(), Error>;
}

/// Adapts an async closure into a [`Handler`].
pub struct FnHandler<F>(F);

pub fn handler_fn<F, Fut>(f: F) -> FnHandler<F>
where
  F: Fn(Context) -> Fut + Send + Sync + 'static,
  Fut: Future<Output = Result<(), Error>> + Send + 'static,
{
  FnHandler(f)
}

#[async_trait]
impl<F, Fut> Handler for FnHandler<F>
where
  F: Fn(Context) -> Fut + Send + Sync + 'static,
  Fut: Future<Output = Result<(), Error>> + Send + 'static,
{
  async fn handle(&self, ctx: Context) -> Result<(), Error> {
    (self.0)(ctx).await
  }
}

pub struct Polling {
  bot: Bot,
  timeout: Duration,
  allowed_updates: Vec<String>,
  parse_mode: Option<ParseMode>,
  offset: i64,
}

impl Polling {
  pub fn new(bot: Bot) -> Self {
    Self {
      bot,
      timeout: DEFAULT_POLL_TIMEOUT,
      allowed_updates: Vec::new(),
      parse_mode: None,
      offset: 0,
    }
  }

  /// Server-side long polling timeout.
  pub fn timeout(mut self, timeout: Duration) -> Self {
    self.timeout = timeout;
    self
  }

  /// Update kinds to receive, e.g. `"message"` or `"callback_query"`; empty means the server default.
  pub fn allowed_updates(mut self, kinds: impl IntoIterator<Item = impl Into<String>>) -> Self {
    self.allowed_updates = kinds.into_iter().map(Into::into).collect();
    self
  }

  /// Default parse mode of every [`Context`] handed to the handler.
  pub fn parse_mode(mut self, mode: ParseMode) -> Self {
    self.parse_mode = Some(mode);
    self
  }

  /// Id of the first update to fetch.
  pub fn offset(mut self, offset: i64) -> Self {
    self.offset = offset;
    self
  }

  /// Fetches one batch and runs the handler over it in order. Returns how many updates came in.
  #[instrument(skip(self, handler), fields(offset = self.offset))]
  pub async fn poll_once<H: Handler + ?Sized>(&mut self, handler: &H) -> Result<usize, Error> {
    let updates = GetUpdates::new(self.bot.clone())
      .offset(self.offset)
      .poll_timeout(self.timeout)
      .allowed_updates(self.allowed_updates.iter().cloned())
      .send()
      .await?;

    let count = updates.len();
    for update in updates {
      self.offset = self.offset.max(update.update_id + 1);
      let update_id = update.update_id;

      let mut ctx = Context::new(self.bot.clone(), update);
      if let Some(mode) = self.parse_mode {
        ctx = ctx.with_parse_mode(mode);
      }

      debug!(update_id, "Dispatching update");
      if let Err(e) = handler.handle(ctx).await {
        error!(update_id, "Handler failed: {}", e);
      }
    }
    Ok(count)
  }

  /// Polls forever. Transport errors are logged and retried after a short pause.
  pub async fn run<H: Handler>(mut self, handler: H) {
    info!("Starting long polling");
    loop {
      if let Err(e) = self.poll_once(&handler).await {
        warn!("Polling failed: {}", e);
        tokio::time::sleep(BACKOFF).await;
      }
    }
  }
}
