// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//! Moderation: bans, restrictions, promotions and join requests.
use crate::options::{execute, Options, Target};
use chrono::{DateTime, TimeDelta, Utc};
use error::Error;
use std::time::Duration;
use telegram::{
  methods::{
    AdminRights, ApproveChatJoinRequestRequest, BanChatMemberRequest, BanChatSenderChatRequest,
    DeclineChatJoinRequestRequest, GetChatMemberCountRequest, GetChatMemberRequest,
    PromoteChatMemberRequest, RestrictChatMemberRequest, UnbanChatMemberRequest,
    UnbanChatSenderChatRequest,
  },
  types::{ChatMember, ChatPermissions},
  Bot,
};
use tracing::instrument;

/// End of a ban or restriction. Relative durations are measured from the moment of sending.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Until {
  At(DateTime<Utc>),
  For(Duration),
}

impl Until {
  pub(crate) fn unix(self, now: DateTime<Utc>) -> Result<i64, Error> {
    match self {
      Until::At(date) => Ok(date.timestamp()),
      Until::For(duration) => {
        TimeDelta::from_std(duration)
          .ok()
          .and_then(|delta| now.checked_add_signed(delta))
          .map(|date| date.timestamp())
          .ok_or_else(|| Error::validation(format!("duration {:?} is too long", duration)))
      }
    }
  }
}

fn until_date(until: Option<Until>) -> Result<Option<i64>, Error> {
  until.map(|until| until.unix(Utc::now())).transpose()
}

macro_rules! until {
  ($builder:ident) => {
    impl $builder {
      /// Lifts automatically at `date`; less than 30 seconds or over 366 days is forever.
      pub fn until(mut self, date: DateTime<Utc>) -> Self {
        self.until = Some(Until::At(date));
        self
      }

      pub fn for_duration(mut self, duration: Duration) -> Self {
        self.until = Some(Until::For(duration));
        self
      }
    }
  };
}

/// `banChatMember`.
pub struct BanChatMember {
  bot: Bot,
  chat: Target,
  user_id: i64,
  until: Option<Until>,
  revoke_messages: Option<bool>,
  opts: Options,
}

impl BanChatMember {
  pub fn new(bot: Bot, user_id: i64) -> Self {
    Self {
      bot,
      chat: Target::default(),
      user_id,
      until: None,
      revoke_messages: None,
      opts: Options::default(),
    }
  }

  /// Also deletes every message of the user in the chat.
  pub fn revoke_messages(mut self) -> Self {
    self.revoke_messages = Some(true);
    self
  }

  #[instrument(skip(self))]
  pub async fn send(self) -> Result<bool, Error> {
    let request = BanChatMemberRequest {
      chat_id: self.chat.resolve()?,
      user_id: self.user_id,
      until_date: until_date(self.until)?,
      revoke_messages: self.revoke_messages,
    };
    execute(&self.bot, &request, &self.opts).await
  }
}

request_options!(BanChatMember => bool);
chat_target!(BanChatMember);
until!(BanChatMember);

/// `unbanChatMember`.
pub struct UnbanChatMember {
  bot: Bot,
  chat: Target,
  user_id: i64,
  only_if_banned: Option<bool>,
  opts: Options,
}

impl UnbanChatMember {
  pub fn new(bot: Bot, user_id: i64) -> Self {
    Self {
      bot,
      chat: Target::default(),
      user_id,
      only_if_banned: None,
      opts: Options::default(),
    }
  }

  /// Without this a member that was never banned is kicked out.
  pub fn only_if_banned(mut self) -> Self {
    self.only_if_banned = Some(true);
    self
  }

  #[instrument(skip(self))]
  pub async fn send(self) -> Result<bool, Error> {
    let request = UnbanChatMemberRequest {
      chat_id: self.chat.resolve()?,
      user_id: self.user_id,
      only_if_banned: self.only_if_banned,
    };
    execute(&self.bot, &request, &self.opts).await
  }
}

request_options!(UnbanChatMember => bool);
chat_target!(UnbanChatMember);

/// `restrictChatMember`. Defaults to a full mute.
pub struct RestrictChatMember {
  bot: Bot,
  chat: Target,
  user_id: i64,
  permissions: ChatPermissions,
  independent: Option<bool>,
  until: Option<Until>,
  opts: Options,
}

impl RestrictChatMember {
  pub fn new(bot: Bot, user_id: i64) -> Self {
    Self {
      bot,
      chat: Target::default(),
      user_id,
      permissions: ChatPermissions::none(),
      independent: None,
      until: None,
      opts: Options::default(),
    }
  }

  pub fn permissions(mut self, permissions: ChatPermissions) -> Self {
    self.permissions = permissions;
    self
  }

  /// Applies every permission as given instead of letting related ones imply each other.
  pub fn independent(mut self) -> Self {
    self.independent = Some(true);
    self
  }

  #[instrument(skip(self))]
  pub async fn send(self) -> Result<bool, Error> {
    let request = RestrictChatMemberRequest {
      chat_id: self.chat.resolve()?,
      user_id: self.user_id,
      permissions: self.permissions,
      use_independent_chat_permissions: self.independent,
      until_date: until_date(self.until)?,
    };
    execute(&self.bot, &request, &self.opts).await
  }
}

request_options!(RestrictChatMember => bool);
chat_target!(RestrictChatMember);
until!(RestrictChatMember);

/// `promoteChatMember`. Sending with no rights set demotes the user.
pub struct PromoteChatMember {
  bot: Bot,
  chat: Target,
  user_id: i64,
  rights: AdminRights,
  opts: Options,
}

impl PromoteChatMember {
  pub fn new(bot: Bot, user_id: i64) -> Self {
    Self {
      bot,
      chat: Target::default(),
      user_id,
      rights: AdminRights::default(),
      opts: Options::default(),
    }
  }

  pub fn rights(mut self, rights: AdminRights) -> Self {
    self.rights = rights;
    self
  }

  pub fn anonymous(mut self) -> Self {
    self.rights.is_anonymous = Some(true);
    self
  }

  pub fn manage_chat(mut self) -> Self {
    self.rights.can_manage_chat = Some(true);
    self
  }

  pub fn delete_messages(mut self) -> Self {
    self.rights.can_delete_messages = Some(true);
    self
  }

  pub fn restrict_members(mut self) -> Self {
    self.rights.can_restrict_members = Some(true);
    self
  }

  pub fn promote_members(mut self) -> Self {
    self.rights.can_promote_members = Some(true);
    self
  }

  pub fn change_info(mut self) -> Self {
    self.rights.can_change_info = Some(true);
    self
  }

  pub fn invite_users(mut self) -> Self {
    self.rights.can_invite_users = Some(true);
    self
  }

  pub fn pin_messages(mut self) -> Self {
    self.rights.can_pin_messages = Some(true);
    self
  }

  #[instrument(skip(self))]
  pub async fn send(self) -> Result<bool, Error> {
    let request = PromoteChatMemberRequest {
      chat_id: self.chat.resolve()?,
      user_id: self.user_id,
      rights: self.rights,
    };
    execute(&self.bot, &request, &self.opts).await
  }
}

request_options!(PromoteChatMember => bool);
chat_target!(PromoteChatMember);

/// Builders taking a chat and a single id, and nothing else.
macro_rules! chat_and_id {
  ($(#[$doc:meta])* $builder:ident($field:ident) => $request:ident, $output:ty) => {
    $(#[$doc])*
    pub struct $builder {
      bot: Bot,
      chat: Target,
      $field: i64,
      opts: Options,
    }

    impl $builder {
      pub fn new(bot: Bot, $field: i64) -> Self {
        Self {
          bot,
          chat: Target::default(),
          $field,
          opts: Options::default(),
        }
      }

      #[instrument(skip(self))]
      pub async fn send(self) -> Result<$output, Error> {
        let request = $request {
          chat_id: self.chat.resolve()?,
          $field: self.$field,
        };
        execute(&self.bot, &request, &self.opts).await
      }
    }

    request_options!($builder => $output);
    chat_target!($builder);
  };
}

chat_and_id!(
  /// `banChatSenderChat`: bans a channel posting on behalf of itself.
  BanChatSenderChat(sender_chat_id) => BanChatSenderChatRequest, bool
);
chat_and_id!(
  /// `unbanChatSenderChat`.
  UnbanChatSenderChat(sender_chat_id) => UnbanChatSenderChatRequest, bool
);
chat_and_id!(
  /// `approveChatJoinRequest`.
  ApproveChatJoinRequest(user_id) => ApproveChatJoinRequestRequest, bool
);
chat_and_id!(
  /// `declineChatJoinRequest`.
  DeclineChatJoinRequest(user_id) => DeclineChatJoinRequestRequest, bool
);
chat_and_id!(
  /// `getChatMember`.
  GetChatMember(user_id) => GetChatMemberRequest, ChatMember
);

/// `getChatMemberCount`.
pub struct GetChatMemberCount {
  bot: Bot,
  chat: Target,
  opts: Options,
}

impl GetChatMemberCount {
  pub fn new(bot: Bot) -> Self {
    Self {
      bot,
      chat: Target::default(),
      opts: Options::default(),
    }
  }

  #[instrument(skip(self))]
  pub async fn send(self) -> Result<i64, Error> {
    let request = GetChatMemberCountRequest {
      chat_id: self.chat.resolve()?,
    };
    execute(&self.bot, &request, &self.opts).await
  }
}

request_options!(GetChatMemberCount => i64);
chat_target!(GetChatMemberCount);

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;

  #[test]
  fn absolute_until_is_unix_seconds() {
    let date = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(Until::At(date).unix(Utc::now()).unwrap(), 1_893_456_000);
  }

  #[test]
  fn relative_until_counts_from_now() {
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let until = Until::For(Duration::from_secs(3600)).unix(now).unwrap();
    assert_eq!(until, now.timestamp() + 3600);
  }

  #[test]
  fn overflowing_duration_is_rejected() {
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let year = Duration::from_secs(366 * 24 * 3600);
    // Fits a TimeDelta but lands past the last representable date.
    let far = Duration::from_secs(10_000_000_000_000);

    assert!(Until::For(year).unix(now).is_ok());
    assert!(matches!(Until::For(far).unix(now), Err(Error::Validation(_))));
    assert!(matches!(
      Until::For(Duration::MAX).unix(now),
      Err(Error::Validation(_))
    ));
  }
}
