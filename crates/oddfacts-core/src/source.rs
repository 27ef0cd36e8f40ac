//! The remote collaborators of the retrieval pipeline.
//!
//! Implemented over HTTP by `oddfacts-http`. Tests implement them in memory.

use std::future::Future;

use crate::{
  error::{RetrievalError, TranslationUnavailable},
  fact::{Fact, Language},
};

/// A service that hands out one random fact per request.
///
/// Futures are `Send` so fetches can run on spawned tokio tasks.
pub trait FactSource: Send + Sync {
  /// Fetch one fact in `language`.
  ///
  /// Callers only ask for languages the source serves natively; see
  /// [`Language::source_language`].
  fn fetch(
    &self,
    language: Language,
  ) -> impl Future<Output = Result<Fact, RetrievalError>> + Send + '_;
}

/// A machine-translation service.
pub trait Translator: Send + Sync {
  /// Translate `text` from `from` into `to`.
  ///
  /// Any failure, including a response with no translated text, is a
  /// [`TranslationUnavailable`].
  fn translate<'a>(
    &'a self,
    text: &'a str,
    from: Language,
    to: Language,
  ) -> impl Future<Output = Result<String, TranslationUnavailable>> + Send + 'a;
}
