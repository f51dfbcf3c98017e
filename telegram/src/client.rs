// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  builders::BotBuilder,
  config::{BotConfig, RequestOptions},
  methods::Method,
  types::{InputFile, TelegramResponse},
};
use error::Error;
use reqwest::{
  multipart::{Form, Part},
  Client, StatusCode,
};
use serde_json::Value;
use std::sync::Arc;
use tokio::{fs::File, io::AsyncReadExt};
use tracing::{debug, instrument, warn};

/// Handle to the Bot API. Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct Bot {
  pub(crate) config: Arc<BotConfig>,
  pub(crate) client: Client,
}

impl std::fmt::Debug for Bot {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Bot")
      .field("api_url", &self.config.api_url)
      .field("timeout", &self.config.timeout)
      .finish_non_exhaustive()
  }
}

impl Bot {
  pub fn builder() -> BotBuilder {
    BotBuilder::default()
  }

  pub fn new(token: impl Into<String>) -> Result<Self, Error> {
    Self::builder().token(token).build()
  }

  pub fn token(&self) -> &str {
    &self.config.token
  }

  pub fn api_url(&self) -> &str {
    &self.config.api_url
  }

  pub async fn call<M: Method>(&self, method: &M) -> Result<M::Response, Error> {
    self.call_with(method, &RequestOptions::default()).await
  }

  #[instrument(skip(self, method, options), fields(method = M::NAME))]
  pub async fn call_with<M: Method>(
    &self,
    method: &M,
    options: &RequestOptions,
  ) -> Result<M::Response, Error> {
    let url = self.method_url(M::NAME, options.api_url.as_deref());

    let uploads: Vec<(&str, &InputFile)> = method
      .files()
      .into_iter()
      .filter(|(_, file)| file.is_upload())
      .collect();

    let mut request = self.client.post(&url);
    if let Some(timeout) = options.timeout {
      request = request.timeout(timeout);
    }

    let request = if uploads.is_empty() {
      request.json(method)
    } else {
      debug!("Uploading {} file(s)", uploads.len());
      request.multipart(build_form(method, &uploads).await?)
    };

    let response = request.send().await.map_err(Error::Http)?;
    let status = response.status();
    let body = response.bytes().await.map_err(Error::Http)?;

    let parsed: TelegramResponse<M::Response> = match serde_json::from_slice(&body) {
      Ok(parsed) => parsed,
      Err(_) if status == StatusCode::TOO_MANY_REQUESTS => return Err(Error::RateLimitExceeded),
      Err(e) => return Err(Error::Json(e)),
    };

    into_result(parsed)
  }

  pub(crate) fn method_url(&self, method: &str, api_url: Option<&str>) -> String {
    let base = api_url.unwrap_or(&self.config.api_url).trim_end_matches('/');
    format!("{}/bot{}/{}", base, self.config.token, method)
  }
}

fn into_result<T>(response: TelegramResponse<T>) -> Result<T, Error> {
  if response.ok {
    return response.result.ok_or_else(|| Error::Api {
      code: 0,
      description: "Response is missing result".into(),
    });
  }

  if let Some(parameters) = &response.parameters {
    if let Some(secs) = parameters.retry_after {
      warn!("Flood control hit, retry after {}s", secs);
      return Err(Error::RetryAfter(secs));
    }
    if let Some(chat_id) = parameters.migrate_to_chat_id {
      return Err(Error::MigrateToChat(chat_id));
    }
  }

  Err(Error::Api {
    code: response.error_code.unwrap_or_default(),
    description: response.description,
  })
}

async fn build_form<M: Method>(method: &M, uploads: &[(&str, &InputFile)]) -> Result<Form, Error> {
  let mut form = Form::new();

  if let Value::Object(fields) = serde_json::to_value(method)? {
    for (key, value) in fields {
      if uploads.iter().any(|(name, _)| *name == key) {
        continue;
      }
      let text = match value {
        Value::Null => continue,
        Value::String(text) => text,
        other => other.to_string(),
      };
      form = form.text(key, text);
    }
  }

  for (name, file) in uploads {
    let data = match file {
      InputFile::Path(path) => {
        let mut buffer = Vec::new();
        File::open(path)
          .await
          .map_err(Error::Io)?
          .read_to_end(&mut buffer)
          .await
          .map_err(Error::Io)?;
        buffer
      }
      InputFile::Memory { data, .. } => data.clone(),
      InputFile::Id(_) | InputFile::Url(_) | InputFile::Attach(_) => continue,
    };

    form = form.part(name.to_string(), Part::bytes(data).file_name(file.file_name()));
  }

  Ok(form)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn method_url_respects_override() {
    let bot = Bot::new("123:abc").unwrap();
    assert_eq!(
      bot.method_url("getMe", None),
      "https://api.telegram.org/bot123:abc/getMe"
    );
    assert_eq!(
      bot.method_url("getMe", Some("http://localhost:8081/")),
      "http://localhost:8081/bot123:abc/getMe"
    );
  }

  #[test]
  fn failed_response_maps_to_api_error() {
    let response: TelegramResponse<bool> = serde_json::from_str(
      r#"{"ok":false,"error_code":403,"description":"Forbidden: bot was blocked by the user"}"#,
    )
    .unwrap();
    match into_result(response) {
      Err(Error::Api { code, description }) => {
        assert_eq!(code, 403);
        assert!(description.starts_with("Forbidden"));
      }
      other => panic!("unexpected: {other:?}"),
    }
  }

  #[test]
  fn retry_after_and_migration_are_distinguished() {
    let flood: TelegramResponse<bool> = serde_json::from_str(
      r#"{"ok":false,"error_code":429,"description":"Too Many Requests","parameters":{"retry_after":7}}"#,
    )
    .unwrap();
    assert!(matches!(into_result(flood), Err(Error::RetryAfter(7))));

    let migrated: TelegramResponse<bool> = serde_json::from_str(
      r#"{"ok":false,"error_code":400,"description":"migrated","parameters":{"migrate_to_chat_id":-1001}}"#,
    )
    .unwrap();
    assert!(matches!(
      into_result(migrated),
      Err(Error::MigrateToChat(-1001))
    ));
  }
}
