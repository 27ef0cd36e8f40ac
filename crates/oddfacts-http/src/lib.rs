//! HTTP implementations of the oddfacts remote collaborators.
//!
//! [`FactsClient`] talks to uselessfacts.jsph.pl and [`MyMemoryClient`] to
//! the MyMemory translation API. Both wrap a shared [`reqwest::Client`].

pub mod error;
pub mod facts;
pub mod translate;

#[cfg(test)]
mod stub;

use std::time::Duration;

pub use error::{Error, Result};
pub use facts::FactsClient;
pub use translate::MyMemoryClient;

use reqwest::Client;

pub const DEFAULT_FACTS_URL: &str = "https://uselessfacts.jsph.pl/random.json";
pub const DEFAULT_TRANSLATE_URL: &str = "https://api.mymemory.translated.net/get";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("oddfacts/", env!("CARGO_PKG_VERSION"));

/// Endpoints and timeouts for both remote services.
#[derive(Debug, Clone)]
pub struct HttpConfig {
  pub facts_url:     String,
  pub translate_url: String,
  /// Per-request timeout, applied to both services.
  pub timeout:       Duration,
}

impl Default for HttpConfig {
  fn default() -> Self {
    Self {
      facts_url:     DEFAULT_FACTS_URL.to_string(),
      translate_url: DEFAULT_TRANSLATE_URL.to_string(),
      timeout:       DEFAULT_TIMEOUT,
    }
  }
}

impl HttpConfig {
  /// Build both clients over one connection pool.
  pub fn clients(&self) -> Result<(FactsClient, MyMemoryClient)> {
    let client = Client::builder()
      .timeout(self.timeout)
      .user_agent(USER_AGENT)
      .build()?;
    Ok((
      FactsClient::new(client.clone(), &self.facts_url),
      MyMemoryClient::new(client, &self.translate_url),
    ))
  }
}
