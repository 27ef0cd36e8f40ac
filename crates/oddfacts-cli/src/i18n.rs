//! UI labels in each display language.

use oddfacts_core::Language;

pub struct Labels {
  pub badge:   &'static str,
  pub tagline: &'static str,
  pub another: &'static str,
  pub loading: &'static str,
  pub retry:   &'static str,
  pub error:   &'static str,
  pub back:    &'static str,
  pub forward: &'static str,
  pub share:   &'static str,
  pub quit:    &'static str,
}

static EN: Labels = Labels {
  badge:   "Daily Knowledge",
  tagline: "Facts you will likely never need, delivered daily.",
  another: "Give me another fact",
  loading: "Loading...",
  retry:   "Try again",
  error:   "Error",
  back:    "previous",
  forward: "next",
  share:   "share",
  quit:    "quit",
};

static IT: Labels = Labels {
  badge:   "Curiosità Quotidiane",
  tagline: "Fatti di cui probabilmente non avrai mai bisogno, ogni giorno.",
  another: "Un'altra curiosità",
  loading: "Caricamento...",
  retry:   "Riprova",
  error:   "Errore",
  back:    "precedente",
  forward: "successivo",
  share:   "condividi",
  quit:    "esci",
};

pub fn labels(language: Language) -> &'static Labels {
  match language {
    Language::English => &EN,
    Language::Italian => &IT,
  }
}
