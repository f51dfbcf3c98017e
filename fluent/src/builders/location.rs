// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::options::{deliver, Options, Target};
use error::Error;
use telegram::{
  methods::{
    SendContactRequest, SendDiceRequest, SendLocationRequest, SendOptions, SendVenueRequest,
  },
  types::Message,
  Bot,
};
use tracing::instrument;

macro_rules! message_builder {
  ($builder:ident) => {
    request_options!($builder => Message);
    chat_target!($builder);
    send_options!($builder);
    delete_after!($builder);
  };
}

/// `sendLocation`.
pub struct SendLocation {
  bot: Bot,
  chat: Target,
  latitude: f64,
  longitude: f64,
  accuracy: Option<f64>,
  live_period: Option<i64>,
  send: SendOptions,
  opts: Options,
}

impl SendLocation {
  pub fn new(bot: Bot, latitude: f64, longitude: f64) -> Self {
    Self {
      bot,
      chat: Target::default(),
      latitude,
      longitude,
      accuracy: None,
      live_period: None,
      send: SendOptions::default(),
      opts: Options::default(),
    }
  }

  /// Radius of uncertainty in meters, 0 to 1500.
  pub fn accuracy(mut self, meters: f64) -> Self {
    self.accuracy = Some(meters);
    self
  }

  /// Shares a live location that can be updated for `seconds`.
  pub fn live_for(mut self, seconds: i64) -> Self {
    self.live_period = Some(seconds);
    self
  }

  #[instrument(skip(self))]
  pub async fn send(self) -> Result<Message, Error> {
    let chat_id = self.chat.resolve()?;
    let request = SendLocationRequest {
      chat_id: chat_id.clone(),
      latitude: self.latitude,
      longitude: self.longitude,
      horizontal_accuracy: self.accuracy,
      live_period: self.live_period,
      options: self.send,
    };
    deliver(&self.bot, chat_id, &request, &self.opts).await
  }
}

message_builder!(SendLocation);

/// `sendVenue`.
pub struct SendVenue {
  bot: Bot,
  chat: Target,
  latitude: f64,
  longitude: f64,
  title: String,
  address: String,
  foursquare_id: Option<String>,
  google_place_id: Option<String>,
  send: SendOptions,
  opts: Options,
}

impl SendVenue {
  pub fn new(
    bot: Bot,
    latitude: f64,
    longitude: f64,
    title: impl Into<String>,
    address: impl Into<String>,
  ) -> Self {
    Self {
      bot,
      chat: Target::default(),
      latitude,
      longitude,
      title: title.into(),
      address: address.into(),
      foursquare_id: None,
      google_place_id: None,
      send: SendOptions::default(),
      opts: Options::default(),
    }
  }

  pub fn foursquare(mut self, id: impl Into<String>) -> Self {
    self.foursquare_id = Some(id.into());
    self
  }

  pub fn google_place(mut self, id: impl Into<String>) -> Self {
    self.google_place_id = Some(id.into());
    self
  }

  #[instrument(skip(self))]
  pub async fn send(self) -> Result<Message, Error> {
    let chat_id = self.chat.resolve()?;
    let request = SendVenueRequest {
      chat_id: chat_id.clone(),
      latitude: self.latitude,
      longitude: self.longitude,
      title: self.title,
      address: self.address,
      foursquare_id: self.foursquare_id,
      google_place_id: self.google_place_id,
      options: self.send,
    };
    deliver(&self.bot, chat_id, &request, &self.opts).await
  }
}

message_builder!(SendVenue);

/// `sendContact`.
pub struct SendContact {
  bot: Bot,
  chat: Target,
  phone_number: String,
  first_name: String,
  last_name: Option<String>,
  vcard: Option<String>,
  send: SendOptions,
  opts: Options,
}

impl SendContact {
  pub fn new(bot: Bot, phone_number: impl Into<String>, first_name: impl Into<String>) -> Self {
    Self {
      bot,
      chat: Target::default(),
      phone_number: phone_number.into(),
      first_name: first_name.into(),
      last_name: None,
      vcard: None,
      send: SendOptions::default(),
      opts: Options::default(),
    }
  }

  pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
    self.last_name = Some(last_name.into());
    self
  }

  pub fn vcard(mut self, vcard: impl Into<String>) -> Self {
    self.vcard = Some(vcard.into());
    self
  }

  #[instrument(skip(self))]
  pub async fn send(self) -> Result<Message, Error> {
    let chat_id = self.chat.resolve()?;
    let request = SendContactRequest {
      chat_id: chat_id.clone(),
      phone_number: self.phone_number,
      first_name: self.first_name,
      last_name: self.last_name,
      vcard: self.vcard,
      options: self.send,
    };
    deliver(&self.bot, chat_id, &request, &self.opts).await
  }
}

message_builder!(SendContact);

/// `sendDice`: an animated emoji with a random value.
pub struct SendDice {
  bot: Bot,
  chat: Target,
  emoji: Option<String>,
  send: SendOptions,
  opts: Options,
}

impl SendDice {
  pub fn new(bot: Bot) -> Self {
    Self {
      bot,
      chat: Target::default(),
      emoji: None,
      send: SendOptions::default(),
      opts: Options::default(),
    }
  }

  /// One of 🎲 🎯 🏀 ⚽ 🎳 🎰; the server defaults to 🎲.
  pub fn emoji(mut self, emoji: impl Into<String>) -> Self {
    self.emoji = Some(emoji.into());
    self
  }

  #[instrument(skip(self))]
  pub async fn send(self) -> Result<Message, Error> {
    let chat_id = self.chat.resolve()?;
    let request = SendDiceRequest {
      chat_id: chat_id.clone(),
      emoji: self.emoji,
      options: self.send,
    };
    deliver(&self.bot, chat_id, &request, &self.opts).await
  }
}

message_builder!(SendDice);
