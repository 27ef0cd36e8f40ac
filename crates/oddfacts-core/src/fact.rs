//! Fact records and the language preference.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

// ─── Language ────────────────────────────────────────────────────────────────

/// The language facts are displayed in.
///
/// English is the *native* language: the fact source serves it directly.
/// Italian is the *secondary* language: facts are fetched in English and
/// translated on the client.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Default,
  Display,
  EnumString,
  Serialize,
  Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Language {
  #[default]
  #[strum(serialize = "en")]
  #[serde(rename = "en")]
  English,
  #[strum(serialize = "it")]
  #[serde(rename = "it")]
  Italian,
}

impl Language {
  /// The language the fact source supports directly.
  pub const NATIVE: Language = Language::English;

  /// Every supported language, native first.
  pub const ALL: [Language; 2] = [Language::English, Language::Italian];

  /// Two-letter code, as sent to the remote services.
  pub fn code(self) -> &'static str {
    match self {
      Self::English => "en",
      Self::Italian => "it",
    }
  }

  pub fn is_native(self) -> bool { self == Self::NATIVE }

  /// The language to request from the fact source when displaying `self`.
  pub fn source_language(self) -> Language {
    if self.is_native() { self } else { Self::NATIVE }
  }

  /// The other language; used by the UI's toggle key.
  pub fn toggled(self) -> Language {
    match self {
      Self::English => Self::Italian,
      Self::Italian => Self::English,
    }
  }
}

// ─── Fact ────────────────────────────────────────────────────────────────────

/// One retrieved fact with its attribution.
///
/// Fields are read-only to consumers. The only mutation is the text
/// substitution the [`Retriever`](crate::Retriever) performs after a
/// successful translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
  id:         String,
  text:       String,
  source:     String,
  source_url: String,
  language:   String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  permalink:  Option<String>,
}

impl Fact {
  /// A fact with empty attribution, tagged with the native language.
  pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
    Self {
      id:         id.into(),
      text:       text.into(),
      source:     String::new(),
      source_url: String::new(),
      language:   Language::NATIVE.code().to_string(),
      permalink:  None,
    }
  }

  pub fn with_attribution(
    mut self,
    source: impl Into<String>,
    source_url: impl Into<String>,
  ) -> Self {
    self.source = source.into();
    self.source_url = source_url.into();
    self
  }

  pub fn with_language(mut self, language: impl Into<String>) -> Self {
    self.language = language.into();
    self
  }

  pub fn with_permalink(mut self, permalink: impl Into<String>) -> Self {
    self.permalink = Some(permalink.into());
    self
  }

  pub fn id(&self) -> &str { &self.id }

  pub fn text(&self) -> &str { &self.text }

  /// Attribution name, e.g. `djtech.net`.
  pub fn source(&self) -> &str { &self.source }

  pub fn source_url(&self) -> &str { &self.source_url }

  /// Language tag reported by the fact source. Not updated by translation.
  pub fn language(&self) -> &str { &self.language }

  /// Permalink, if the source sent a non-empty one.
  pub fn permalink(&self) -> Option<&str> {
    self.permalink.as_deref().filter(|p| !p.is_empty())
  }

  pub(crate) fn replace_text(&mut self, text: String) { self.text = text; }
}
