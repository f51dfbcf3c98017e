// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::options::{execute, Options};
use error::Error;
use std::time::Duration;
use telegram::{
  methods::{
    DeleteMyCommandsRequest, GetFileRequest, GetMeRequest, GetUpdatesRequest,
    SetMyCommandsRequest,
  },
  types::{BotCommand, BotCommandScope, File, Update, User},
  Bot,
};
use tracing::instrument;

/// `getMe`.
pub struct GetMe {
  bot: Bot,
  opts: Options,
}

impl GetMe {
  pub fn new(bot: Bot) -> Self {
    Self {
      bot,
      opts: Options::default(),
    }
  }

  #[instrument(skip(self))]
  pub async fn send(self) -> Result<User, Error> {
    execute(&self.bot, &GetMeRequest {}, &self.opts).await
  }
}

request_options!(GetMe => User);

const POLL_GRACE_SECS: u64 = 10;

/// `getUpdates`: one long-polling round.
pub struct GetUpdates {
  bot: Bot,
  request: GetUpdatesRequest,
  opts: Options,
}

impl GetUpdates {
  pub fn new(bot: Bot) -> Self {
    Self {
      bot,
      request: GetUpdatesRequest::default(),
      opts: Options::default(),
    }
  }

  /// First update to return; everything before it is confirmed.
  pub fn offset(mut self, offset: i64) -> Self {
    self.request.offset = Some(offset);
    self
  }

  pub fn limit(mut self, limit: u32) -> Self {
    self.request.limit = Some(limit);
    self
  }

  /// How long the server holds the request open when nothing is pending.
  pub fn poll_timeout(mut self, timeout: Duration) -> Self {
    self.request.timeout = Some(timeout.as_secs());
    self
  }

  pub fn allowed_updates(mut self, kinds: impl IntoIterator<Item = impl Into<String>>) -> Self {
    self.request.allowed_updates = kinds.into_iter().map(Into::into).collect();
    self
  }

  /// An explicit timeout wins; otherwise the HTTP timeout has to outlast the long poll.
  fn http_timeout(&self) -> Option<Duration> {
    self.opts.request.timeout.or_else(|| {
      self
        .request
        .timeout
        .map(|secs| Duration::from_secs(secs.saturating_add(POLL_GRACE_SECS)))
    })
  }

  #[instrument(skip(self))]
  pub async fn send(self) -> Result<Vec<Update>, Error> {
    let timeout = self.http_timeout();
    let mut opts = self.opts;
    opts.request.timeout = timeout;
    execute(&self.bot, &self.request, &opts).await
  }
}

request_options!(GetUpdates => Vec<Update>);

/// `setMyCommands`: the command list shown in the client menu.
pub struct SetMyCommands {
  bot: Bot,
  commands: Vec<BotCommand>,
  scope: Option<BotCommandScope>,
  language_code: Option<String>,
  opts: Options,
}

impl SetMyCommands {
  pub fn new(bot: Bot, commands: impl IntoIterator<Item = BotCommand>) -> Self {
    Self {
      bot,
      commands: commands.into_iter().collect(),
      scope: None,
      language_code: None,
      opts: Options::default(),
    }
  }

  pub fn command(mut self, command: impl Into<String>, description: impl Into<String>) -> Self {
    self.commands.push(BotCommand::new(command, description));
    self
  }

  pub fn scope(mut self, scope: BotCommandScope) -> Self {
    self.scope = Some(scope);
    self
  }

  /// Two-letter ISO 639-1 code; users with that language see this list.
  pub fn language(mut self, code: impl Into<String>) -> Self {
    self.language_code = Some(code.into());
    self
  }

  #[instrument(skip(self))]
  pub async fn send(self) -> Result<bool, Error> {
    let request = SetMyCommandsRequest {
      commands: self.commands,
      scope: self.scope,
      language_code: self.language_code,
    };
    execute(&self.bot, &request, &self.opts).await
  }
}

request_options!(SetMyCommands => bool);

/// `deleteMyCommands`.
pub struct DeleteMyCommands {
  bot: Bot,
  request: DeleteMyCommandsRequest,
  opts: Options,
}

impl DeleteMyCommands {
  pub fn new(bot: Bot) -> Self {
    Self {
      bot,
      request: DeleteMyCommandsRequest::default(),
      opts: Options::default(),
    }
  }

  pub fn scope(mut self, scope: BotCommandScope) -> Self {
    self.request.scope = Some(scope);
    self
  }

  pub fn language(mut self, code: impl Into<String>) -> Self {
    self.request.language_code = Some(code.into());
    self
  }

  #[instrument(skip(self))]
  pub async fn send(self) -> Result<bool, Error> {
    execute(&self.bot, &self.request, &self.opts).await
  }
}

request_options!(DeleteMyCommands => bool);

/// `getFile`: resolves a `file_id` into a downloadable path.
pub struct GetFile {
  bot: Bot,
  file_id: String,
  opts: Options,
}

impl GetFile {
  pub fn new(bot: Bot, file_id: impl Into<String>) -> Self {
    Self {
      bot,
      file_id: file_id.into(),
      opts: Options::default(),
    }
  }

  #[instrument(skip(self))]
  pub async fn send(self) -> Result<File, Error> {
    let request = GetFileRequest {
      file_id: self.file_id,
    };
    execute(&self.bot, &request, &self.opts).await
  }
}

request_options!(GetFile => File);

#[cfg(test)]
mod tests {
  use super::*;

  fn updates() -> GetUpdates {
    GetUpdates::new(Bot::new("1:test").unwrap())
  }

  #[test]
  fn http_timeout_outlasts_poll() {
    assert_eq!(updates().http_timeout(), None);
    assert_eq!(
      updates().poll_timeout(Duration::from_secs(25)).http_timeout(),
      Some(Duration::from_secs(35))
    );
    assert_eq!(
      updates().poll_timeout(Duration::MAX).http_timeout(),
      Some(Duration::from_secs(u64::MAX))
    );
  }

  #[test]
  fn explicit_timeout_wins() {
    let request = updates()
      .poll_timeout(Duration::from_secs(25))
      .timeout(Duration::from_secs(5));
    assert_eq!(request.http_timeout(), Some(Duration::from_secs(5)));
  }
}
