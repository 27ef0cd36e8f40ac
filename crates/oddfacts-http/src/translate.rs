//! Client for the MyMemory translation API.

use std::future::Future;

use oddfacts_core::{Language, TranslationUnavailable, Translator};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// `GET {url}?q=<text>&langpair=<from>|<to>`.
#[derive(Debug, Clone)]
pub struct MyMemoryClient {
  client: Client,
  url:    String,
}

/// The part of a MyMemory response we read. Everything is optional: a
/// missing field means "no translation".
#[derive(Debug, Deserialize)]
struct TranslateResponse {
  #[serde(rename = "responseData", default)]
  response_data: Option<ResponseData>,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
  #[serde(rename = "translatedText", default)]
  translated_text: Option<String>,
}

impl MyMemoryClient {
  pub fn new(client: Client, url: impl Into<String>) -> Self {
    Self { client, url: url.into() }
  }

  async fn lookup(
    &self,
    text: &str,
    from: Language,
    to: Language,
  ) -> Result<String, TranslationUnavailable> {
    let langpair = format!("{}|{}", from.code(), to.code());
    debug!(url = %self.url, %langpair, "GET translation");

    let resp = self
      .client
      .get(&self.url)
      .query(&[("q", text), ("langpair", langpair.as_str())])
      .send()
      .await
      .map_err(|e| TranslationUnavailable::new(format!("request failed: {e}")))?;

    let status = resp.status();
    if !status.is_success() {
      return Err(TranslationUnavailable::new(format!("status {status}")));
    }

    let body: TranslateResponse = resp
      .json()
      .await
      .map_err(|e| TranslationUnavailable::new(format!("malformed response: {e}")))?;

    body
      .response_data
      .and_then(|d| d.translated_text)
      .filter(|t| !t.trim().is_empty())
      .ok_or_else(|| TranslationUnavailable::new("no translated text in response"))
  }
}

impl Translator for MyMemoryClient {
  fn translate<'a>(
    &'a self,
    text: &'a str,
    from: Language,
    to: Language,
  ) -> impl Future<Output = Result<String, TranslationUnavailable>> + Send + 'a
  {
    self.lookup(text, from, to)
  }
}
