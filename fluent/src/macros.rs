// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.

/// Timeout, API URL, delay and detached execution; every builder has them.
macro_rules! request_options {
  ($builder:ident => $output:ty) => {
    impl $builder {
      /// HTTP timeout for this request only.
      pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.opts.request.timeout = Some(timeout);
        self
      }

      /// Sends this request to another Bot API server.
      pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.opts.request.api_url = Some(url.into());
        self
      }

      /// Holds the request back for `delay` before sending it.
      pub fn after(mut self, delay: std::time::Duration) -> Self {
        self.opts.after = Some(delay);
        self
      }

      /// Sends on a detached task; drop the handle to fire and forget.
      pub fn spawn(self) -> tokio::task::JoinHandle<Result<$output, error::Error>> {
        tokio::spawn(self.send())
      }
    }
  };
}

/// `to()` for builders whose chat falls back to the context chat.
macro_rules! chat_target {
  ($builder:ident) => {
    impl $builder {
      /// Target chat; wins over the chat of the current update.
      pub fn to(mut self, chat: impl Into<telegram::types::ChatId>) -> Self {
        self.chat.explicit = Some(chat.into());
        self
      }

      pub(crate) fn fallback_chat(mut self, chat: Option<telegram::types::ChatId>) -> Self {
        self.chat.fallback = chat;
        self
      }
    }
  };
}

/// Parse mode setters for builders carrying text or a caption.
macro_rules! parse_mode {
  ($builder:ident) => {
    impl $builder {
      pub fn html(self) -> Self {
        self.parse_mode(telegram::types::ParseMode::Html)
      }

      pub fn markdown(self) -> Self {
        self.parse_mode(telegram::types::ParseMode::MarkdownV2)
      }

      pub fn parse_mode(mut self, mode: telegram::types::ParseMode) -> Self {
        self.parse_mode = Some(mode);
        self
      }

      pub(crate) fn default_parse_mode(mut self, mode: Option<telegram::types::ParseMode>) -> Self {
        self.opts.parse_mode = mode;
        self
      }
    }
  };
}

/// Delivery setters backed by a `SendOptions` field named `send`.
macro_rules! send_options {
  ($builder:ident) => {
    impl $builder {
      /// Forum topic to post into.
      pub fn thread(mut self, thread_id: i64) -> Self {
        self.send.message_thread_id = Some(thread_id);
        self
      }

      /// Delivers without a notification sound.
      pub fn silent(mut self) -> Self {
        self.send.disable_notification = Some(true);
        self
      }

      /// Forbids forwarding and saving of the sent message.
      pub fn protect(mut self) -> Self {
        self.send.protect_content = Some(true);
        self
      }

      pub fn reply_to(mut self, message_id: i64) -> Self {
        self.send.reply_parameters = Some(telegram::types::ReplyParameters::to(message_id));
        self
      }

      pub fn reply_parameters(mut self, parameters: telegram::types::ReplyParameters) -> Self {
        self.send.reply_parameters = Some(parameters);
        self
      }

      pub fn markup(mut self, markup: impl Into<telegram::types::ReplyMarkup>) -> Self {
        self.send.reply_markup = Some(markup.into());
        self
      }
    }
  };
}

/// `delete_after()` for builders that produce a message.
macro_rules! delete_after {
  ($builder:ident) => {
    impl $builder {
      /// Deletes the sent message once `delay` has passed.
      pub fn delete_after(mut self, delay: std::time::Duration) -> Self {
        self.opts.delete_after = Some(delay);
        self
      }
    }
  };
}
