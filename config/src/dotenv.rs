// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use error::Error;
use std::{collections::HashMap, env, fs, path::Path, sync::Once};

static INIT: Once = Once::new();
const DEFAULT_FILENAME: &str = ".env";

/// `KEY=value` pairs read from a `.env` file.
#[derive(Debug, Default)]
pub struct Dotenv {
  vars: HashMap<String, String>,
}

impl Dotenv {
  pub fn parse(content: &str) -> Result<Self, Error> {
    let mut vars = HashMap::new();

    for (line_num, line) in content.lines().enumerate() {
      let trimmed = line.trim();
      if trimmed.is_empty() || trimmed.starts_with('#') {
        continue;
      }

      let trimmed = trimmed.strip_prefix("export ").unwrap_or(trimmed);
      let (key, value) = trimmed.split_once('=').ok_or_else(|| {
        Error::Config(format!("line {}: missing '='", line_num + 1))
      })?;

      let key = key.trim();
      if key.is_empty() {
        return Err(Error::Config(format!("line {}: empty key", line_num + 1)));
      }

      let value = value.trim().trim_matches('"').trim_matches('\'');
      vars.insert(key.to_string(), value.to_string());
    }

    Ok(Self { vars })
  }

  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
    Self::parse(&fs::read_to_string(path)?)
  }

  pub fn get(&self, key: &str) -> Option<&str> {
    self.vars.get(key).map(String::as_str)
  }

  /// Exports the variables, keeping values already present in the environment.
  pub fn apply(&self) {
    for (key, value) in &self.vars {
      if env::var_os(key).is_none() {
        env::set_var(key, value);
      }
    }
  }
}

/// Loads `.env` from the working directory once per process. A missing file is not an error.
pub fn load() -> Result<(), Error> {
  let mut result = Ok(());
  INIT.call_once(|| {
    if !Path::new(DEFAULT_FILENAME).exists() {
      tracing::debug!("No {} file found", DEFAULT_FILENAME);
      return;
    }
    match Dotenv::from_file(DEFAULT_FILENAME) {
      Ok(dotenv) => dotenv.apply(),
      Err(err) => result = Err(err),
    }
  });
  result
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_quotes_comments_and_export() {
    let dotenv = Dotenv::parse(
      "# bot\nTELEGRAM_BOT_TOKEN=\"1:abc\"\n\nexport RUST_LOG='debug'\n",
    )
    .unwrap();
    assert_eq!(dotenv.get("TELEGRAM_BOT_TOKEN"), Some("1:abc"));
    assert_eq!(dotenv.get("RUST_LOG"), Some("debug"));
  }

  #[test]
  fn reports_line_of_bad_entry() {
    let err = Dotenv::parse("A=1\nBROKEN\n").unwrap_err();
    assert!(err.to_string().contains("line 2"));
  }
}
