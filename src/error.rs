/*!

Error types (C8). `NoTerm` is an internal control-flow signal raised by the matcher and unifier and
is never exposed past the crate boundary. `Contradiction` is the one error type callers observe: it
propagates out of [`crate::axiom::FunctionModule::update`] unchanged whenever the blackboard reports
that an asserted clause is inconsistent with existing facts.

*/

use thiserror::Error;

/// Raised internally when [`crate::matcher::find_problem_term`] or [`crate::unify::unify`] cannot
/// identify a term with any problem term. Always caught within the crate; `pub(crate)` because it
/// must never be observed by callers.
#[derive(Error, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[error("no matching problem term")]
pub struct NoTerm;

/// Raised by a [`crate::blackboard::Blackboard`] implementation when an asserted clause contradicts
/// the existing fact set. Propagated unchanged out of `update`; the caller treats this as "problem
/// solved, UNSAT".
#[derive(Error, Debug, Clone)]
#[error("contradiction{}", message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
pub struct Contradiction {
  pub message: Option<String>,
}

impl Contradiction {
  pub fn new() -> Self {
    Contradiction { message: None }
  }

  pub fn with_message(message: impl Into<String>) -> Self {
    Contradiction { message: Some(message.into()) }
  }
}

impl Default for Contradiction {
  fn default() -> Self {
    Self::new()
  }
}
