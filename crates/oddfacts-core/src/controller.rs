//! The history/navigation state machine.
//!
//! The controller never performs I/O. Operations that need the network
//! return a [`FetchRequest`]; whoever owns the controller runs it and feeds
//! the result back through [`Controller::complete`], then calls
//! [`Controller::settle`] once the request should stop counting as pending.

use std::{collections::BTreeSet, fmt};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::{debug, info, warn};

use crate::{
  RetrievalError,
  fact::{Fact, Language},
  history::History,
};

// ─── Requests ────────────────────────────────────────────────────────────────

/// Identifies one fetch issued by a [`Controller`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl fmt::Display for RequestId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "#{}", self.0)
  }
}

/// A fetch the controller wants run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
  pub id:         RequestId,
  /// Language to retrieve in.
  pub language:   Language,
  /// Language generation at issue time. Bumped by every language change.
  pub generation: u64,
}

/// What to do with a response issued before the latest language change.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
  Display,
  EnumString,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StalePolicy {
  /// Drop it. The log, cursor and error are left untouched.
  #[default]
  Discard,
  /// Apply it as if it were current, possibly appending a fact in the
  /// previous language to the fresh log.
  Apply,
}

/// How [`Controller::complete`] handled a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
  Appended,
  Failed,
  DiscardedStale,
}

// ─── Controller ──────────────────────────────────────────────────────────────

/// Owns the fact history, the language preference and the request state.
#[derive(Debug)]
pub struct Controller {
  history:      History,
  language:     Language,
  generation:   u64,
  next_id:      u64,
  /// Requests issued and not yet settled.
  outstanding:  BTreeSet<RequestId>,
  last_error:   Option<String>,
  stale_policy: StalePolicy,
}

impl Controller {
  /// An empty controller browsing in `language`.
  pub fn new(language: Language) -> Self {
    Self {
      history: History::new(),
      language,
      generation: 0,
      next_id: 0,
      outstanding: BTreeSet::new(),
      last_error: None,
      stale_policy: StalePolicy::default(),
    }
  }

  pub fn with_stale_policy(mut self, policy: StalePolicy) -> Self {
    self.stale_policy = policy;
    self
  }

  // ── Operations ────────────────────────────────────────────────────────────

  /// Start fetching a new fact in the current language.
  ///
  /// There is no in-flight guard: calling this while a request is pending
  /// issues a second, independent request.
  pub fn fetch_new(&mut self) -> FetchRequest {
    self.last_error = None;
    let id = RequestId(self.next_id);
    self.next_id += 1;
    self.outstanding.insert(id);
    debug!(request = %id, language = %self.language, "fetch issued");
    FetchRequest {
      id,
      language: self.language,
      generation: self.generation,
    }
  }

  /// Switch to `language`, clearing the history.
  ///
  /// Returns `None` when `language` is already active. Otherwise the
  /// history is emptied and the returned request is the automatic fetch
  /// that repopulates it.
  pub fn set_language(&mut self, language: Language) -> Option<FetchRequest> {
    if language == self.language {
      return None;
    }
    info!(from = %self.language, to = %language, "language changed, clearing history");
    self.language = language;
    self.generation += 1;
    self.history.clear();
    Some(self.fetch_new())
  }

  /// Apply the result of `request`.
  pub fn complete(
    &mut self,
    request: &FetchRequest,
    result: Result<Fact, RetrievalError>,
  ) -> Applied {
    if request.generation != self.generation {
      match self.stale_policy {
        StalePolicy::Discard => {
          debug!(request = %request.id, "discarding response from a previous language");
          return Applied::DiscardedStale;
        }
        StalePolicy::Apply => {
          warn!(
            request = %request.id,
            language = %request.language,
            "applying response from a previous language"
          );
        }
      }
    }

    match result {
      Ok(fact) => {
        debug!(request = %request.id, fact_id = fact.id(), "fact appended");
        self.history.push(fact);
        Applied::Appended
      }
      Err(e) => {
        debug!(request = %request.id, error = %e, "fetch failed");
        self.last_error = Some(e.to_string());
        Applied::Failed
      }
    }
  }

  /// Stop counting `id` as in flight. Unknown ids are ignored.
  pub fn settle(&mut self, id: RequestId) { self.outstanding.remove(&id); }

  /// Move to the previous fact. Returns whether the cursor moved.
  pub fn go_back(&mut self) -> bool { self.history.back() }

  /// Move to the next fact. Returns whether the cursor moved.
  pub fn go_forward(&mut self) -> bool { self.history.forward() }

  // ── Observed state ────────────────────────────────────────────────────────

  pub fn current(&self) -> Option<&Fact> { self.history.current() }

  /// Whether any request is in flight or inside its minimum visible delay.
  pub fn is_pending(&self) -> bool { !self.outstanding.is_empty() }

  /// Message of the most recent failed fetch, cleared by the next fetch.
  pub fn last_error(&self) -> Option<&str> { self.last_error.as_deref() }

  pub fn can_go_back(&self) -> bool { self.history.can_go_back() }

  pub fn can_go_forward(&self) -> bool { self.history.can_go_forward() }

  pub fn language(&self) -> Language { self.language }

  pub fn history(&self) -> &History { &self.history }

  pub fn stale_policy(&self) -> StalePolicy { self.stale_policy }
}
