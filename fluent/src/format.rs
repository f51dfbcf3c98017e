// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//! Escaping of user text for the HTML and MarkdownV2 parse modes.
use regex::Regex;
use std::sync::LazyLock;

static MARKDOWN_SPECIAL: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"[_*\[\]()~`>#+\-=|{}.!\\]").expect("MarkdownV2 character class is valid")
});

static CODE_SPECIAL: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"[`\\]").expect("code character class is valid"));

/// Escapes every MarkdownV2 special character outside of code entities.
pub fn escape_markdown(text: &str) -> String {
  MARKDOWN_SPECIAL.replace_all(text, r"\$0").into_owned()
}

/// Escapes text placed inside `code` or `pre` entities.
pub fn escape_markdown_code(text: &str) -> String {
  CODE_SPECIAL.replace_all(text, r"\$0").into_owned()
}

pub fn escape_html(text: &str) -> String {
  text
    .replace('&', "&amp;")
    .replace('<', "&lt;")
    .replace('>', "&gt;")
}

/// Inline mention that works without a username.
pub fn mention_html(user_id: i64, name: &str) -> String {
  format!(r#"<a href="tg://user?id={}">{}</a>"#, user_id, escape_html(name))
}

pub fn mention_markdown(user_id: i64, name: &str) -> String {
  format!("[{}](tg://user?id={})", escape_markdown(name), user_id)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn markdown_specials_get_backslashes() {
    assert_eq!(escape_markdown("Hello *world*!"), r"Hello \*world\*\!");
    assert_eq!(
      escape_markdown("Visit [site](https://example.com)"),
      r"Visit \[site\]\(https://example\.com\)"
    );
    assert_eq!(escape_markdown(r"a\b"), r"a\\b");
  }

  #[test]
  fn plain_text_untouched() {
    assert_eq!(escape_markdown("Привет 123"), "Привет 123");
    assert_eq!(escape_markdown(""), "");
  }

  #[test]
  fn code_only_escapes_backticks_and_backslashes() {
    assert_eq!(escape_markdown_code("a`b*c\\"), r"a\`b*c\\");
  }

  #[test]
  fn html_escaping() {
    assert_eq!(escape_html("<b>Tom & Jerry</b>"), "&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;");
  }

  #[test]
  fn mentions() {
    assert_eq!(mention_html(7, "<Ann>"), r#"<a href="tg://user?id=7">&lt;Ann&gt;</a>"#);
    assert_eq!(mention_markdown(7, "a.b"), r"[a\.b](tg://user?id=7)");
  }
}
