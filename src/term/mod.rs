/*!

The canonicalized term algebra (C1). Terms are immutable values shared behind `Rc` so that
canonicalization and substitution can clone cheaply instead of deep-copying subtrees; equality and
ordering are always by structural [`TermKey`], never by pointer identity, so sharing is purely an
optimization.

*/

mod key;
mod canon;
mod comparison;
mod ops;
mod subst;

#[cfg(test)]
mod tests;

pub use key::TermKey;
pub use comparison::{Comparison, CompOp};
pub use subst::{reduce_term, substitute, Env};
pub(crate) use canon::pow_rational;

use std::rc::Rc;

use once_cell::unsync::Lazy;

use crate::{
  abstractions::IString,
  blackboard::{IVarIndex, UVarIndex},
  rational::{Rational, Exponent, int},
};

/// A term in the language: constants, variables, sums, products, absolute value, min/max, and
/// uninterpreted function application.
#[derive(Clone, Debug)]
pub enum Term {
  /// The constant `1`.
  One,
  /// A user-facing, uninterpreted variable.
  Var(IString),
  /// A named problem term, i.e. an index into the blackboard's interning table.
  IVar(IVarIndex),
  /// An axiom-scoped unification variable.
  UVar(UVarIndex),
  /// `Σ cᵢ·sᵢ`.
  Add(Vec<Scaled>),
  /// `Π sᵢ^{nᵢ}`.
  Mul(Vec<MulPair>),
  /// `|t|`.
  Abs(Rc<Term>),
  /// `min(t1, ..., tn)`; `max` is represented as `-Min(-t1, ..., -tn)`.
  Min(Vec<Scaled>),
  /// An uninterpreted function application.
  App(IString, Vec<Scaled>),
}

/// `coeff * term`. When `coeff` is zero the term field is normalized to [`Term::One`], matching
/// the canonical representative of zero used throughout the matcher.
#[derive(Clone, Debug)]
pub struct Scaled {
  pub coeff: Rational,
  pub term: Rc<Term>,
}

/// `term ^ exponent`, appearing only inside [`Term::Mul`].
#[derive(Clone, Debug)]
pub struct MulPair {
  pub term: Rc<Term>,
  pub exponent: Exponent,
}

thread_local! {
  pub static ONE: Lazy<Rc<Term>> = Lazy::new(|| Rc::new(Term::One));
  pub static ZERO: Lazy<Scaled> = Lazy::new(|| Scaled { coeff: Rational::from_integer(0.into()), term: ONE.with(|one| (**one).clone()) });
}

impl Term {
  pub fn one() -> Rc<Term> {
    ONE.with(|one| (**one).clone())
  }

  pub fn var(name: impl Into<IString>) -> Rc<Term> {
    Rc::new(Term::Var(name.into()))
  }

  pub fn ivar(index: impl Into<IVarIndex>) -> Rc<Term> {
    Rc::new(Term::IVar(index.into()))
  }

  pub fn uvar(index: impl Into<UVarIndex>) -> Rc<Term> {
    Rc::new(Term::UVar(index.into()))
  }

  pub fn app(name: impl Into<IString>, args: Vec<Scaled>) -> Rc<Term> {
    Rc::new(Term::App(name.into(), args))
  }

  pub fn abs(arg: Rc<Term>) -> Rc<Term> {
    match &*arg {
      Term::Abs(_) => arg,
      _ => Rc::new(Term::Abs(arg)),
    }
  }

  /// Puts the term in canonical normal form. Always returns a [`Scaled`]. See [`canon`] for the
  /// per-variant rules.
  pub fn canonize(&self) -> Scaled {
    canon::canonize(self)
  }

  pub fn is_one(&self) -> bool {
    matches!(self, Term::One)
  }
}

impl Scaled {
  pub fn new(coeff: Rational, term: Rc<Term>) -> Self {
    if coeff.is_zero_value() {
      Scaled { coeff, term: ONE.with(|one| (**one).clone()) }
    } else {
      Scaled { coeff, term }
    }
  }

  pub fn canonize(&self) -> Scaled {
    let t = self.term.canonize();
    Scaled::new(&self.coeff * &t.coeff, t.term)
  }
}

impl MulPair {
  pub fn new(term: Rc<Term>, exponent: Exponent) -> Self {
    MulPair { term, exponent }
  }
}

// Small helper trait used only to spell `coeff.is_zero_value()` without pulling `num_traits::Zero`
// into every call site (it collides with `Term`'s own builder methods when glob-imported).
trait IsZero {
  fn is_zero_value(&self) -> bool;
}

impl IsZero for Rational {
  fn is_zero_value(&self) -> bool {
    use num_traits::Zero;
    Rational::is_zero(self)
  }
}

#[allow(unused)]
pub(crate) fn one_coeff() -> Rational {
  int(1)
}
