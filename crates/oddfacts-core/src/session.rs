//! Drives a [`Controller`] against a [`Retriever`] on the tokio runtime.
//!
//! Every [`FetchRequest`] runs on its own spawned task. The task reports
//! [`SessionEvent::Completed`] as soon as the retrieval resolves, waits out
//! the minimum visible delay, then reports [`SessionEvent::Settled`]. Events
//! are applied on the caller's thread by [`Session::pump`], so the
//! controller has a single owner and needs no locking.

use std::{sync::Arc, time::Duration};

use tokio::sync::mpsc;
use tracing::debug;

use crate::{
  RetrievalError,
  controller::{Applied, Controller, FetchRequest, RequestId},
  fact::{Fact, Language},
  retrieve::Retriever,
  source::{FactSource, Translator},
};

/// How long `pending` stays set after a fetch resolves.
pub const DEFAULT_MIN_VISIBLE: Duration = Duration::from_millis(300);

/// Progress of a spawned fetch.
#[derive(Debug)]
pub enum SessionEvent {
  Completed {
    request: FetchRequest,
    result:  Result<Fact, RetrievalError>,
  },
  Settled(RequestId),
}

/// The presentation layer's handle on the fact browser.
pub struct Session<S, T> {
  controller:  Controller,
  retriever:   Arc<Retriever<S, T>>,
  min_visible: Duration,
  tx:          mpsc::UnboundedSender<SessionEvent>,
  rx:          mpsc::UnboundedReceiver<SessionEvent>,
}

impl<S, T> Session<S, T>
where
  S: FactSource + 'static,
  T: Translator + 'static,
{
  pub fn new(controller: Controller, retriever: Retriever<S, T>) -> Self {
    let (tx, rx) = mpsc::unbounded_channel();
    Self {
      controller,
      retriever: Arc::new(retriever),
      min_visible: DEFAULT_MIN_VISIBLE,
      tx,
      rx,
    }
  }

  pub fn with_min_visible(mut self, min_visible: Duration) -> Self {
    self.min_visible = min_visible;
    self
  }

  // ── Operations ────────────────────────────────────────────────────────────

  /// Fetch a new fact in the background.
  pub fn fetch_new(&mut self) {
    let request = self.controller.fetch_new();
    self.dispatch(request);
  }

  /// Switch language. Returns `false` if `language` was already active.
  pub fn set_language(&mut self, language: Language) -> bool {
    match self.controller.set_language(language) {
      Some(request) => {
        self.dispatch(request);
        true
      }
      None => false,
    }
  }

  pub fn go_back(&mut self) -> bool { self.controller.go_back() }

  pub fn go_forward(&mut self) -> bool { self.controller.go_forward() }

  fn dispatch(&self, request: FetchRequest) {
    let retriever = Arc::clone(&self.retriever);
    let tx = self.tx.clone();
    let min_visible = self.min_visible;
    tokio::spawn(async move {
      let result = retriever.retrieve(request.language).await;
      let id = request.id;
      if tx.send(SessionEvent::Completed { request, result }).is_err() {
        return;
      }
      tokio::time::sleep(min_visible).await;
      let _ = tx.send(SessionEvent::Settled(id));
    });
  }

  // ── Event handling ────────────────────────────────────────────────────────

  /// Apply one event to the controller.
  pub fn apply(&mut self, event: SessionEvent) -> Option<Applied> {
    match event {
      SessionEvent::Completed { request, result } => {
        Some(self.controller.complete(&request, result))
      }
      SessionEvent::Settled(id) => {
        debug!(request = %id, "request settled");
        self.controller.settle(id);
        None
      }
    }
  }

  /// Apply every event that has already arrived. Never waits.
  ///
  /// Returns the number of events applied.
  pub fn pump(&mut self) -> usize {
    let mut applied = 0;
    while let Ok(event) = self.rx.try_recv() {
      self.apply(event);
      applied += 1;
    }
    applied
  }

  /// Wait for the next event without applying it.
  pub async fn recv(&mut self) -> Option<SessionEvent> { self.rx.recv().await }

  /// Apply events until nothing is pending.
  pub async fn wait_idle(&mut self) {
    while self.controller.is_pending() {
      match self.rx.recv().await {
        Some(event) => {
          self.apply(event);
        }
        None => break,
      }
    }
  }
}

impl<S, T> Session<S, T> {
  // ── Observed state ────────────────────────────────────────────────────────

  pub fn controller(&self) -> &Controller { &self.controller }

  pub fn current(&self) -> Option<&Fact> { self.controller.current() }

  pub fn is_pending(&self) -> bool { self.controller.is_pending() }

  pub fn last_error(&self) -> Option<&str> { self.controller.last_error() }

  pub fn can_go_back(&self) -> bool { self.controller.can_go_back() }

  pub fn can_go_forward(&self) -> bool { self.controller.can_go_forward() }

  pub fn language(&self) -> Language { self.controller.language() }
}
