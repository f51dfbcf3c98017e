// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  options::{execute, Options, Target},
  validate,
};
use chrono::{DateTime, Utc};
use error::Error;
use telegram::{
  methods::{
    CreateChatInviteLinkRequest, ExportChatInviteLinkRequest, GetChatRequest, LeaveChatRequest,
    RevokeChatInviteLinkRequest, SetChatDescriptionRequest, SetChatPermissionsRequest,
    SetChatTitleRequest,
  },
  types::{ChatFullInfo, ChatInviteLink, ChatPermissions},
  Bot,
};
use tracing::instrument;

const MAX_TITLE_LENGTH: usize = 128;
const MAX_DESCRIPTION_LENGTH: usize = 255;
const MAX_INVITE_NAME_LENGTH: usize = 32;
const MAX_MEMBER_LIMIT: i64 = 99_999;

/// Builders that take nothing but the chat.
macro_rules! chat_only {
  ($(#[$doc:meta])* $builder:ident => $request:ident, $output:ty) => {
    $(#[$doc])*
    pub struct $builder {
      bot: Bot,
      chat: Target,
      opts: Options,
    }

    impl $builder {
      pub fn new(bot: Bot) -> Self {
        Self {
          bot,
          chat: Target::default(),
          opts: Options::default(),
        }
      }

      #[instrument(skip(self))]
      pub async fn send(self) -> Result<$output, Error> {
        let request = $request {
          chat_id: self.chat.resolve()?,
        };
        execute(&self.bot, &request, &self.opts).await
      }
    }

    request_options!($builder => $output);
    chat_target!($builder);
  };
}

chat_only!(
  /// `getChat`: full information about the chat.
  GetChat => GetChatRequest, ChatFullInfo
);
chat_only!(
  /// `leaveChat`.
  LeaveChat => LeaveChatRequest, bool
);
chat_only!(
  /// `exportChatInviteLink`: replaces the primary invite link with a new one.
  ExportChatInviteLink => ExportChatInviteLinkRequest, String
);

/// `setChatTitle`.
pub struct SetChatTitle {
  bot: Bot,
  chat: Target,
  title: String,
  opts: Options,
}

impl SetChatTitle {
  pub fn new(bot: Bot, title: impl Into<String>) -> Self {
    Self {
      bot,
      chat: Target::default(),
      title: title.into(),
      opts: Options::default(),
    }
  }

  #[instrument(skip(self))]
  pub async fn send(self) -> Result<bool, Error> {
    validate::length("title", &self.title, 1, MAX_TITLE_LENGTH)?;
    let request = SetChatTitleRequest {
      chat_id: self.chat.resolve()?,
      title: self.title,
    };
    execute(&self.bot, &request, &self.opts).await
  }
}

request_options!(SetChatTitle => bool);
chat_target!(SetChatTitle);

/// `setChatDescription`. Without a description the current one is cleared.
pub struct SetChatDescription {
  bot: Bot,
  chat: Target,
  description: Option<String>,
  opts: Options,
}

impl SetChatDescription {
  pub fn new(bot: Bot) -> Self {
    Self {
      bot,
      chat: Target::default(),
      description: None,
      opts: Options::default(),
    }
  }

  pub fn description(mut self, description: impl Into<String>) -> Self {
    self.description = Some(description.into());
    self
  }

  #[instrument(skip(self))]
  pub async fn send(self) -> Result<bool, Error> {
    if let Some(description) = &self.description {
      validate::length("description", description, 0, MAX_DESCRIPTION_LENGTH)?;
    }
    let request = SetChatDescriptionRequest {
      chat_id: self.chat.resolve()?,
      description: self.description,
    };
    execute(&self.bot, &request, &self.opts).await
  }
}

request_options!(SetChatDescription => bool);
chat_target!(SetChatDescription);

/// `setChatPermissions`: default permissions of all members.
pub struct SetChatPermissions {
  bot: Bot,
  chat: Target,
  permissions: ChatPermissions,
  independent: Option<bool>,
  opts: Options,
}

impl SetChatPermissions {
  pub fn new(bot: Bot, permissions: ChatPermissions) -> Self {
    Self {
      bot,
      chat: Target::default(),
      permissions,
      independent: None,
      opts: Options::default(),
    }
  }

  pub fn independent(mut self) -> Self {
    self.independent = Some(true);
    self
  }

  #[instrument(skip(self))]
  pub async fn send(self) -> Result<bool, Error> {
    let request = SetChatPermissionsRequest {
      chat_id: self.chat.resolve()?,
      permissions: self.permissions,
      use_independent_chat_permissions: self.independent,
    };
    execute(&self.bot, &request, &self.opts).await
  }
}

request_options!(SetChatPermissions => bool);
chat_target!(SetChatPermissions);

/// `createChatInviteLink`: an additional link, revocable on its own.
pub struct CreateChatInviteLink {
  bot: Bot,
  chat: Target,
  name: Option<String>,
  expires: Option<DateTime<Utc>>,
  member_limit: Option<i64>,
  join_request: Option<bool>,
  opts: Options,
}

impl CreateChatInviteLink {
  pub fn new(bot: Bot) -> Self {
    Self {
      bot,
      chat: Target::default(),
      name: None,
      expires: None,
      member_limit: None,
      join_request: None,
      opts: Options::default(),
    }
  }

  /// Label shown to admins, up to 32 characters.
  pub fn name(mut self, name: impl Into<String>) -> Self {
    self.name = Some(name.into());
    self
  }

  pub fn expires(mut self, date: DateTime<Utc>) -> Self {
    self.expires = Some(date);
    self
  }

  /// How many users may join through the link, 1 to 99999.
  pub fn member_limit(mut self, limit: i64) -> Self {
    self.member_limit = Some(limit);
    self
  }

  /// Users joining via the link need approval; excludes `member_limit`.
  pub fn join_request(mut self) -> Self {
    self.join_request = Some(true);
    self
  }

  fn validate(&self) -> Result<(), Error> {
    if let Some(name) = &self.name {
      validate::length("name", name, 0, MAX_INVITE_NAME_LENGTH)?;
    }
    if let Some(limit) = self.member_limit {
      if !(1..=MAX_MEMBER_LIMIT).contains(&limit) {
        return Err(Error::validation(format!(
          "member_limit must be 1..={}, got {}",
          MAX_MEMBER_LIMIT, limit
        )));
      }
      if self.join_request == Some(true) {
        return Err(Error::validation(
          "member_limit cannot be combined with join requests",
        ));
      }
    }
    Ok(())
  }

  #[instrument(skip(self))]
  pub async fn send(self) -> Result<ChatInviteLink, Error> {
    self.validate()?;
    let request = CreateChatInviteLinkRequest {
      chat_id: self.chat.resolve()?,
      name: self.name,
      expire_date: self.expires.map(|date| date.timestamp()),
      member_limit: self.member_limit,
      creates_join_request: self.join_request,
    };
    execute(&self.bot, &request, &self.opts).await
  }
}

request_options!(CreateChatInviteLink => ChatInviteLink);
chat_target!(CreateChatInviteLink);

/// `revokeChatInviteLink`.
pub struct RevokeChatInviteLink {
  bot: Bot,
  chat: Target,
  invite_link: String,
  opts: Options,
}

impl RevokeChatInviteLink {
  pub fn new(bot: Bot, invite_link: impl Into<String>) -> Self {
    Self {
      bot,
      chat: Target::default(),
      invite_link: invite_link.into(),
      opts: Options::default(),
    }
  }

  #[instrument(skip(self))]
  pub async fn send(self) -> Result<ChatInviteLink, Error> {
    let request = RevokeChatInviteLinkRequest {
      chat_id: self.chat.resolve()?,
      invite_link: self.invite_link,
    };
    execute(&self.bot, &request, &self.opts).await
  }
}

request_options!(RevokeChatInviteLink => ChatInviteLink);
chat_target!(RevokeChatInviteLink);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn member_limit_excludes_join_requests() {
    let link = CreateChatInviteLink::new(Bot::new("1:test").unwrap())
      .member_limit(10)
      .join_request();
    assert!(matches!(link.validate(), Err(Error::Validation(_))));
  }

  #[test]
  fn member_limit_range() {
    let bot = Bot::new("1:test").unwrap();
    assert!(CreateChatInviteLink::new(bot.clone()).member_limit(0).validate().is_err());
    assert!(CreateChatInviteLink::new(bot).member_limit(500).validate().is_ok());
  }
}
