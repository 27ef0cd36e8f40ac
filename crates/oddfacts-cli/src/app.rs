//! Application state and key dispatcher.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use oddfacts_core::{Fact, FactSource, Language, Session, Translator};
use tracing::debug;

use crate::share;

/// Top-level application state.
pub struct App<S, T> {
  /// The fact browser; owns history, language and request state.
  pub session: Session<S, T>,

  /// One-line status message shown in the status bar.
  pub status_msg: String,
}

/// Everything the UI needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
  pub fact:           Option<&'a Fact>,
  pub pending:        bool,
  pub error:          Option<&'a str>,
  pub language:       Language,
  pub can_go_back:    bool,
  pub can_go_forward: bool,
  /// 1-based position of the displayed fact and the history length.
  pub position:       Option<(usize, usize)>,
  pub status_msg:     &'a str,
}

impl<S, T> App<S, T>
where
  S: FactSource + 'static,
  T: Translator + 'static,
{
  pub fn new(session: Session<S, T>) -> Self {
    Self { session, status_msg: String::new() }
  }

  /// Issue the initial fetch. The history starts empty.
  pub fn start(&mut self) { self.session.fetch_new(); }

  /// Apply fetch progress that arrived since the last frame.
  pub fn tick(&mut self) {
    let applied = self.session.pump();
    if applied > 0 {
      debug!(applied, "session events applied");
    }
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub fn handle_key(&mut self, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return false;
    }

    match key.code {
      KeyCode::Char('q') | KeyCode::Esc => return false,

      // Fetching, history navigation and sharing are disabled while loading.
      KeyCode::Char('n') | KeyCode::Char(' ') | KeyCode::Enter => {
        if !self.session.is_pending() {
          self.fetch_new();
        }
      }
      KeyCode::Char('r') => {
        if !self.session.is_pending() && self.session.last_error().is_some() {
          self.fetch_new();
        }
      }

      KeyCode::Left | KeyCode::Char('h') => {
        if !self.session.is_pending() && self.session.go_back() {
          self.status_msg.clear();
        }
      }
      KeyCode::Right | KeyCode::Char('l') => {
        if !self.session.is_pending() && self.session.go_forward() {
          self.status_msg.clear();
        }
      }

      KeyCode::Char('e') => self.switch_language(Language::English),
      KeyCode::Char('i') => self.switch_language(Language::Italian),
      KeyCode::Char('t') => self.switch_language(self.session.language().toggled()),

      KeyCode::Char('s') => {
        if !self.session.is_pending() {
          self.share();
        }
      }

      _ => {}
    }
    true
  }

  fn fetch_new(&mut self) {
    self.status_msg.clear();
    self.session.fetch_new();
  }

  fn switch_language(&mut self, language: Language) {
    if self.session.set_language(language) {
      self.status_msg.clear();
    }
  }

  fn share(&mut self) {
    self.status_msg = match self.session.current().and_then(share::tweet_intent) {
      Some(url) => format!("Share: {url}"),
      None => "Nothing to share yet".to_string(),
    };
  }
}

impl<S, T> App<S, T> {
  pub fn view(&self) -> View<'_> {
    let history = self.session.controller().history();
    View {
      fact:           self.session.current(),
      pending:        self.session.is_pending(),
      error:          self.session.last_error(),
      language:       self.session.language(),
      can_go_back:    self.session.can_go_back(),
      can_go_forward: self.session.can_go_forward(),
      position:       history.cursor().map(|c| (c + 1, history.len())),
      status_msg:     &self.status_msg,
    }
  }
}
