// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  options::{deliver, execute, Options, Target},
  validate,
};
use error::Error;
use telegram::{
  methods::{SendOptions, SendPollRequest, StopPollRequest},
  types::{InlineKeyboardMarkup, InputPollOption, Message, Poll},
  Bot,
};
use tracing::instrument;

const MAX_QUESTION_LENGTH: usize = 300;
const MAX_OPTION_LENGTH: usize = 100;
const MIN_OPTIONS: usize = 2;
const MAX_OPTIONS: usize = 12;

/// `sendPoll`: a regular poll, or a quiz once `quiz()` is set.
pub struct SendPoll {
  bot: Bot,
  chat: Target,
  question: String,
  options: Vec<String>,
  anonymous: Option<bool>,
  quiz: Option<i64>,
  multiple_answers: Option<bool>,
  explanation: Option<String>,
  open_period: Option<i64>,
  closed: Option<bool>,
  send: SendOptions,
  opts: Options,
}

impl SendPoll {
  pub fn new(
    bot: Bot,
    question: impl Into<String>,
    options: impl IntoIterator<Item = impl Into<String>>,
  ) -> Self {
    Self {
      bot,
      chat: Target::default(),
      question: question.into(),
      options: options.into_iter().map(Into::into).collect(),
      anonymous: None,
      quiz: None,
      multiple_answers: None,
      explanation: None,
      open_period: None,
      closed: None,
      send: SendOptions::default(),
      opts: Options::default(),
    }
  }

  pub fn option(mut self, option: impl Into<String>) -> Self {
    self.options.push(option.into());
    self
  }

  /// Polls are anonymous unless told otherwise.
  pub fn anonymous(mut self, anonymous: bool) -> Self {
    self.anonymous = Some(anonymous);
    self
  }

  /// Turns the poll into a quiz; `correct` is the 0-based index of the right option.
  pub fn quiz(mut self, correct: i64) -> Self {
    self.quiz = Some(correct);
    self
  }

  /// Shown after a wrong quiz answer.
  pub fn explanation(mut self, text: impl Into<String>) -> Self {
    self.explanation = Some(text.into());
    self
  }

  pub fn multiple_answers(mut self) -> Self {
    self.multiple_answers = Some(true);
    self
  }

  /// Closes the poll automatically after `seconds` (5 to 600).
  pub fn open_for(mut self, seconds: i64) -> Self {
    self.open_period = Some(seconds);
    self
  }

  pub fn closed(mut self) -> Self {
    self.closed = Some(true);
    self
  }

  fn validate(&self) -> Result<(), Error> {
    validate::length("question", &self.question, 1, MAX_QUESTION_LENGTH)?;
    validate::count("options", self.options.len(), MIN_OPTIONS, MAX_OPTIONS)?;
    for option in &self.options {
      validate::length("option", option, 1, MAX_OPTION_LENGTH)?;
    }
    if let Some(correct) = self.quiz {
      if correct < 0 || correct as usize >= self.options.len() {
        return Err(Error::validation(format!(
          "correct option {} is out of range",
          correct
        )));
      }
    }
    Ok(())
  }

  #[instrument(skip(self))]
  pub async fn send(self) -> Result<Message, Error> {
    self.validate()?;
    let chat_id = self.chat.resolve()?;

    let request = SendPollRequest {
      chat_id: chat_id.clone(),
      question: self.question,
      options: self
        .options
        .into_iter()
        .map(|text| InputPollOption { text })
        .collect(),
      is_anonymous: self.anonymous,
      kind: self.quiz.map(|_| "quiz".to_string()),
      allows_multiple_answers: self.multiple_answers,
      correct_option_id: self.quiz,
      explanation: self.explanation,
      open_period: self.open_period,
      is_closed: self.closed,
      send: self.send,
    };

    deliver(&self.bot, chat_id, &request, &self.opts).await
  }
}

request_options!(SendPoll => Message);
chat_target!(SendPoll);
send_options!(SendPoll);
delete_after!(SendPoll);

/// `stopPoll`: closes a poll the bot sent.
pub struct StopPoll {
  bot: Bot,
  chat: Target,
  message_id: i64,
  markup: Option<InlineKeyboardMarkup>,
  opts: Options,
}

impl StopPoll {
  pub fn new(bot: Bot, message_id: i64) -> Self {
    Self {
      bot,
      chat: Target::default(),
      message_id,
      markup: None,
      opts: Options::default(),
    }
  }

  pub fn markup(mut self, markup: impl Into<InlineKeyboardMarkup>) -> Self {
    self.markup = Some(markup.into());
    self
  }

  #[instrument(skip(self))]
  pub async fn send(self) -> Result<Poll, Error> {
    let request = StopPollRequest {
      chat_id: self.chat.resolve()?,
      message_id: self.message_id,
      reply_markup: self.markup,
    };
    execute(&self.bot, &request, &self.opts).await
  }
}

request_options!(StopPoll => Poll);
chat_target!(StopPoll);
