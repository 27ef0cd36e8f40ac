//! The fact retrieval pipeline: fetch, then translate when needed.

use tracing::{debug, warn};

use crate::{
  Result,
  fact::{Fact, Language},
  source::{FactSource, Translator},
};

/// Fetches facts and translates them into non-native languages.
///
/// Makes one request for the native language and two sequential requests
/// otherwise. Never retries.
pub struct Retriever<S, T> {
  source:     S,
  translator: T,
}

impl<S, T> Retriever<S, T>
where
  S: FactSource,
  T: Translator,
{
  pub fn new(source: S, translator: T) -> Self { Self { source, translator } }

  /// Obtain one fact for display in `language`.
  ///
  /// Fails only when the primary fetch fails. A translation failure keeps
  /// the native-language text and is logged, not returned.
  pub async fn retrieve(&self, language: Language) -> Result<Fact> {
    let source_language = language.source_language();
    debug!(%language, %source_language, "fetching fact");

    let mut fact = self.source.fetch(source_language).await?;
    if language == source_language {
      return Ok(fact);
    }

    match self
      .translator
      .translate(fact.text(), source_language, language)
      .await
    {
      Ok(text) if !text.trim().is_empty() => {
        debug!(fact_id = fact.id(), "translated fact");
        fact.replace_text(text);
      }
      Ok(_) => {
        warn!(fact_id = fact.id(), "blank translation, keeping original text");
      }
      Err(e) => {
        warn!(fact_id = fact.id(), error = %e, "translation failed, keeping original text");
      }
    }
    Ok(fact)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    RetrievalError,
    testing::{FakeTranslator, ScriptedSource, fact},
  };

  #[tokio::test]
  async fn native_language_makes_a_single_request() {
    let source = ScriptedSource::new([Ok(fact("1", "Fact A"))]);
    let translator = FakeTranslator::translating("non usare");
    let retriever = Retriever::new(source.clone(), translator.clone());

    let got = retriever.retrieve(Language::English).await.unwrap();
    assert_eq!(got.text(), "Fact A");
    assert_eq!(source.requested(), vec![Language::English]);
    assert_eq!(translator.calls(), 0);
  }

  #[tokio::test]
  async fn secondary_language_fetches_native_then_translates() {
    let source = ScriptedSource::new([Ok(fact("7", "Cats sleep 70% of their lives"))]);
    let translator = FakeTranslator::translating("I gatti dormono il 70% della loro vita");
    let retriever = Retriever::new(source.clone(), translator.clone());

    let got = retriever.retrieve(Language::Italian).await.unwrap();
    assert_eq!(got.text(), "I gatti dormono il 70% della loro vita");
    assert_eq!(got.id(), "7");
    assert_eq!(source.requested(), vec![Language::English]);
    assert_eq!(
      translator.seen(),
      vec![(
        "Cats sleep 70% of their lives".to_string(),
        Language::English,
        Language::Italian
      )]
    );
  }

  #[tokio::test]
  async fn translation_timeout_keeps_native_text() {
    let source = ScriptedSource::new([Ok(fact("7", "Cats sleep 70% of their lives"))]);
    let retriever = Retriever::new(source, FakeTranslator::failing("timed out"));

    let got = retriever.retrieve(Language::Italian).await.unwrap();
    assert_eq!(got.text(), "Cats sleep 70% of their lives");
  }

  #[tokio::test]
  async fn blank_translation_keeps_native_text() {
    let source = ScriptedSource::new([Ok(fact("7", "Original"))]);
    let retriever = Retriever::new(source, FakeTranslator::translating("   "));

    let got = retriever.retrieve(Language::Italian).await.unwrap();
    assert_eq!(got.text(), "Original");
  }

  #[tokio::test]
  async fn primary_failure_skips_translation() {
    let source = ScriptedSource::new([Err(RetrievalError::Status {
      status: 500,
      reason: "Internal Server Error".into(),
    })]);
    let translator = FakeTranslator::translating("x");
    let retriever = Retriever::new(source, translator.clone());

    let err = retriever.retrieve(Language::Italian).await.unwrap_err();
    assert_eq!(err.to_string(), "Error: 500 Internal Server Error");
    assert_eq!(translator.calls(), 0);
  }
}
