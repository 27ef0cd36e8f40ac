//! Error type for `oddfacts-http`.

use thiserror::Error;

/// Failure to set up the HTTP clients.
///
/// Request failures are not reported here: they map onto
/// [`oddfacts_core::RetrievalError`] and
/// [`oddfacts_core::TranslationUnavailable`].
#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to build HTTP client: {0}")]
  Client(#[from] reqwest::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
