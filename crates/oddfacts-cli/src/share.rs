//! Share links for the current fact.

use oddfacts_core::Fact;
use reqwest::Url;

/// Shared when the fact has no usable permalink.
pub const FALLBACK_SHARE_URL: &str = "https://uselessfacts.jsph.pl";

const TWEET_INTENT_URL: &str = "https://twitter.com/intent/tweet";

/// The page a share should point at: the permalink if it is an absolute
/// URL, the fact site otherwise.
pub fn share_target(fact: &Fact) -> String {
  fact
    .permalink()
    .and_then(|p| Url::parse(p).ok())
    .map(String::from)
    .unwrap_or_else(|| FALLBACK_SHARE_URL.to_string())
}

/// A tweet-intent link carrying the fact text and its share target.
pub fn tweet_intent(fact: &Fact) -> Option<Url> {
  let target = share_target(fact);
  Url::parse_with_params(TWEET_INTENT_URL, &[
    ("text", fact.text()),
    ("url", target.as_str()),
  ])
  .ok()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn permalink_is_the_share_target() {
    let fact = Fact::new("1", "A")
      .with_permalink("https://uselessfacts.jsph.pl/api/v2/facts/1");
    assert_eq!(
      share_target(&fact),
      "https://uselessfacts.jsph.pl/api/v2/facts/1"
    );
  }

  #[test]
  fn relative_or_missing_permalink_falls_back() {
    let relative = Fact::new("1", "A").with_permalink("/facts/1");
    assert_eq!(share_target(&relative), FALLBACK_SHARE_URL);

    let missing = Fact::new("1", "A");
    assert_eq!(share_target(&missing), FALLBACK_SHARE_URL);
  }

  #[test]
  fn tweet_intent_encodes_text_and_url() {
    let fact = Fact::new("1", "Cats sleep 70% of their lives & more");
    let url = tweet_intent(&fact).unwrap();
    assert_eq!(url.host_str(), Some("twitter.com"));

    let pairs: Vec<(String, String)> = url
      .query_pairs()
      .map(|(k, v)| (k.into_owned(), v.into_owned()))
      .collect();
    assert_eq!(pairs, vec![
      ("text".to_string(), "Cats sleep 70% of their lives & more".to_string()),
      ("url".to_string(), FALLBACK_SHARE_URL.to_string()),
    ]);
  }
}
