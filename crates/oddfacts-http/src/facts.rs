//! Client for the uselessfacts.jsph.pl random fact endpoint.

use std::future::Future;

use oddfacts_core::{Fact, FactSource, Language, RetrievalError};
use reqwest::Client;
use tracing::{debug, warn};

/// `GET {url}?language=<code>` returning one fact record.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Debug, Clone)]
pub struct FactsClient {
  client: Client,
  url:    String,
}

impl FactsClient {
  pub fn new(client: Client, url: impl Into<String>) -> Self {
    Self { client, url: url.into() }
  }

  async fn random(&self, language: Language) -> Result<Fact, RetrievalError> {
    debug!(url = %self.url, %language, "GET random fact");
    let resp = self
      .client
      .get(&self.url)
      .query(&[("language", language.code())])
      .send()
      .await
      .map_err(|e| {
        warn!(error = %e, "fact request failed");
        RetrievalError::Connectivity { detail: e.to_string() }
      })?;

    let status = resp.status();
    if !status.is_success() {
      warn!(%status, "fact source returned an error status");
      return Err(RetrievalError::Status {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or_default().to_string(),
      });
    }

    resp.json::<Fact>().await.map_err(|e| {
      warn!(error = %e, "reading fact response failed");
      if e.is_decode() {
        RetrievalError::Decode(e.to_string())
      } else {
        RetrievalError::Connectivity { detail: e.to_string() }
      }
    })
  }
}

impl FactSource for FactsClient {
  fn fetch(
    &self,
    language: Language,
  ) -> impl Future<Output = Result<Fact, RetrievalError>> + Send + '_ {
    self.random(language)
  }
}
