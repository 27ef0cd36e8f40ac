//! Core types and state machines for the oddfacts client.
//!
//! This crate is deliberately free of HTTP and terminal dependencies. The
//! remote fact source and translator are reached through the traits in
//! [`source`]; `oddfacts-http` implements them and `oddfacts-cli` drives the
//! [`Session`] from its event loop.

pub mod controller;
pub mod error;
pub mod fact;
pub mod history;
pub mod retrieve;
pub mod session;
pub mod source;

#[cfg(test)]
mod testing;

pub use controller::{Applied, Controller, FetchRequest, RequestId, StalePolicy};
pub use error::{Result, RetrievalError, TranslationUnavailable};
pub use fact::{Fact, Language};
pub use history::History;
pub use retrieve::Retriever;
pub use session::{Session, SessionEvent};
pub use source::{FactSource, Translator};
