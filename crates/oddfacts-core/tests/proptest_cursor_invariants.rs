//! Property-based invariant tests for the navigation controller.
//!
//! 1. The cursor is `None` exactly when the log is empty, otherwise in range
//! 2. Back/forward move the cursor by at most one position
//! 3. A successful fetch appends exactly one entry and selects it
//! 4. A failed fetch leaves log and cursor untouched
//! 5. A language switch empties the log and yields exactly one fetch

use oddfacts_core::{Controller, Fact, Language, RetrievalError, StalePolicy};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Op {
  FetchOk,
  FetchErr,
  Back,
  Forward,
  SetLanguage(Language),
}

fn op_strategy() -> impl Strategy<Value = Op> {
  prop_oneof![
    3 => Just(Op::FetchOk),
    1 => Just(Op::FetchErr),
    3 => Just(Op::Back),
    3 => Just(Op::Forward),
    1 => prop_oneof![Just(Language::English), Just(Language::Italian)]
      .prop_map(Op::SetLanguage),
  ]
}

fn policy_strategy() -> impl Strategy<Value = StalePolicy> {
  prop_oneof![Just(StalePolicy::Discard), Just(StalePolicy::Apply)]
}

fn cursor_as_int(c: &Controller) -> i64 {
  c.history().cursor().map_or(-1, |i| i as i64)
}

fn assert_cursor_in_range(c: &Controller) {
  let len = c.history().len() as i64;
  let cursor = cursor_as_int(c);
  assert!(cursor >= -1 && cursor < len, "cursor {cursor} len {len}");
  assert_eq!(cursor == -1, len == 0);
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
  #[test]
  fn cursor_invariants_hold(
    policy in policy_strategy(),
    ops in prop::collection::vec(op_strategy(), 0..120),
  ) {
    let mut c = Controller::new(Language::English).with_stale_policy(policy);
    let mut n = 0u32;

    for op in ops {
      let before_len = c.history().len();
      let before_cursor = cursor_as_int(&c);

      match op {
        Op::FetchOk => {
          n += 1;
          let req = c.fetch_new();
          c.complete(&req, Ok(Fact::new(n.to_string(), format!("Fact {n}"))));
          c.settle(req.id);
          prop_assert_eq!(c.history().len(), before_len + 1);
          prop_assert_eq!(c.history().cursor(), Some(before_len));
          let id = n.to_string();
          prop_assert_eq!(c.history().entries().last().map(Fact::id), Some(id.as_str()));
        }
        Op::FetchErr => {
          let req = c.fetch_new();
          c.complete(&req, Err(RetrievalError::Decode("bad json".into())));
          c.settle(req.id);
          prop_assert_eq!(c.history().len(), before_len);
          prop_assert_eq!(cursor_as_int(&c), before_cursor);
          prop_assert!(c.last_error().is_some_and(|e| !e.is_empty()));
        }
        Op::Back => {
          let moved = c.go_back();
          let after = cursor_as_int(&c);
          prop_assert_eq!(after, if moved { before_cursor - 1 } else { before_cursor });
        }
        Op::Forward => {
          let moved = c.go_forward();
          let after = cursor_as_int(&c);
          prop_assert_eq!(after, if moved { before_cursor + 1 } else { before_cursor });
        }
        Op::SetLanguage(lang) => {
          let was = c.language();
          let req = c.set_language(lang);
          if lang == was {
            prop_assert!(req.is_none());
            prop_assert_eq!(c.history().len(), before_len);
            prop_assert_eq!(cursor_as_int(&c), before_cursor);
          } else {
            let req = req.expect("one automatic fetch");
            prop_assert_eq!(req.language, lang);
            prop_assert!(c.history().is_empty());
            prop_assert_eq!(cursor_as_int(&c), -1);
            n += 1;
            c.complete(&req, Ok(Fact::new(n.to_string(), "auto")));
            c.settle(req.id);
            prop_assert_eq!(c.history().len(), 1);
          }
        }
      }

      assert_cursor_in_range(&c);
      prop_assert!(!c.is_pending());
    }
  }
}
