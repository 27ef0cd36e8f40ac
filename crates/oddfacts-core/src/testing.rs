//! In-memory fakes for the remote collaborators.

use std::{
  collections::VecDeque,
  future::Future,
  sync::{Arc, Mutex},
};

use crate::{
  RetrievalError, TranslationUnavailable,
  fact::{Fact, Language},
  source::{FactSource, Translator},
};

pub fn fact(id: &str, text: &str) -> Fact {
  Fact::new(id, text).with_attribution("djtech.net", "http://www.djtech.net/")
}

#[derive(Default)]
struct SourceState {
  script:    VecDeque<Result<Fact, RetrievalError>>,
  requested: Vec<Language>,
}

/// Replays scripted responses, then generates `Fact <n>` records.
#[derive(Clone, Default)]
pub struct ScriptedSource {
  state: Arc<Mutex<SourceState>>,
}

impl ScriptedSource {
  pub fn new(
    script: impl IntoIterator<Item = Result<Fact, RetrievalError>>,
  ) -> Self {
    let state = SourceState {
      script:    script.into_iter().collect(),
      requested: Vec::new(),
    };
    Self { state: Arc::new(Mutex::new(state)) }
  }

  pub fn requested(&self) -> Vec<Language> {
    self.state.lock().unwrap().requested.clone()
  }
}

impl FactSource for ScriptedSource {
  fn fetch(
    &self,
    language: Language,
  ) -> impl Future<Output = Result<Fact, RetrievalError>> + Send + '_ {
    let next = {
      let mut state = self.state.lock().unwrap();
      state.requested.push(language);
      let n = state.requested.len();
      state.script.pop_front().unwrap_or_else(|| {
        Ok(fact(&format!("auto-{n}"), &format!("Fact {n}")))
      })
    };
    async move { next }
  }
}

type Seen = Vec<(String, Language, Language)>;

/// Answers every translation request the same way.
#[derive(Clone)]
pub struct FakeTranslator {
  reply: Result<String, TranslationUnavailable>,
  seen:  Arc<Mutex<Seen>>,
}

impl FakeTranslator {
  pub fn translating(text: &str) -> Self {
    Self { reply: Ok(text.to_string()), seen: Arc::default() }
  }

  pub fn failing(reason: &str) -> Self {
    Self {
      reply: Err(TranslationUnavailable::new(reason)),
      seen:  Arc::default(),
    }
  }

  pub fn seen(&self) -> Seen { self.seen.lock().unwrap().clone() }

  pub fn calls(&self) -> usize { self.seen.lock().unwrap().len() }
}

impl Translator for FakeTranslator {
  fn translate<'a>(
    &'a self,
    text: &'a str,
    from: Language,
    to: Language,
  ) -> impl Future<Output = Result<String, TranslationUnavailable>> + Send + 'a
  {
    self.seen.lock().unwrap().push((text.to_string(), from, to));
    let reply = self.reply.clone();
    async move { reply }
  }
}
