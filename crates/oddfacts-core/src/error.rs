//! Error types for `oddfacts-core`.

use thiserror::Error;

/// The primary fact fetch did not succeed.
///
/// This is the only failure that crosses the controller boundary; its
/// `Display` output is what the presentation layer shows to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RetrievalError {
  /// The fact source answered with a non-success status.
  #[error("Error: {}", status_line(.status, .reason))]
  Status { status: u16, reason: String },

  /// The request never produced a response.
  #[error("Failed to load fact. Please check your internet connection.")]
  Connectivity { detail: String },

  /// The response body was not a fact record.
  #[error("unexpected response from fact source: {0}")]
  Decode(String),
}

fn status_line(status: &u16, reason: &str) -> String {
  if reason.is_empty() {
    status.to_string()
  } else {
    format!("{status} {reason}")
  }
}

/// No usable translation could be obtained.
///
/// Never surfaced to the user: the retriever logs it and keeps the
/// native-language text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("translation unavailable: {reason}")]
pub struct TranslationUnavailable {
  pub reason: String,
}

impl TranslationUnavailable {
  pub fn new(reason: impl Into<String>) -> Self {
    Self { reason: reason.into() }
  }
}

pub type Result<T, E = RetrievalError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn status_error_includes_code_and_reason() {
    let e = RetrievalError::Status {
      status: 503,
      reason: "Service Unavailable".into(),
    };
    assert_eq!(e.to_string(), "Error: 503 Service Unavailable");
  }

  #[test]
  fn status_error_without_reason_has_no_trailing_space() {
    let e = RetrievalError::Status { status: 599, reason: String::new() };
    assert_eq!(e.to_string(), "Error: 599");
  }

  #[test]
  fn connectivity_error_hides_transport_detail() {
    let e = RetrievalError::Connectivity {
      detail: "dns error: no record found".into(),
    };
    let msg = e.to_string();
    assert!(msg.contains("internet connection"), "{msg}");
    assert!(!msg.contains("dns"), "{msg}");
  }
}
