/*!

Structural comparison keys. Every [`Term`] has a stable, lexicographically-comparable `TermKey`
computed from its shape: a fixed discriminant per variant, a per-variant discriminator (name or
index), and the keys of its children (coefficients and exponents included, since two terms that
differ only in a scalar are not the same key). Keys — never the terms themselves — are what `Add`
and `Mul` sort their arguments by, and what the matcher and unifier use for equality tests.

*/

use crate::{
  abstractions::IString,
  rational::Rational,
  term::{Term, Scaled, MulPair},
};

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum TermKey {
  One,
  Var(IString),
  IVar(usize),
  UVar(usize),
  Add(Vec<(TermKey, Rational)>),
  Mul(Vec<(TermKey, Rational)>),
  Abs(Box<TermKey>),
  Min(Vec<(TermKey, Rational)>),
  App(IString, Vec<(TermKey, Rational)>),
}

impl Term {
  /// Computes this term's structural key. `O(size of term)`; callers that need the key repeatedly
  /// should cache it alongside the term rather than recompute.
  pub fn key(&self) -> TermKey {
    match self {
      Term::One => TermKey::One,
      Term::Var(name) => TermKey::Var(*name),
      Term::IVar(i) => TermKey::IVar(i.0),
      Term::UVar(i) => TermKey::UVar(i.0),
      Term::Add(args) => TermKey::Add(args.iter().map(Scaled::key).collect()),
      Term::Mul(args) => TermKey::Mul(args.iter().map(MulPair::key).collect()),
      Term::Abs(arg) => TermKey::Abs(Box::new(arg.key())),
      Term::Min(args) => TermKey::Min(args.iter().map(Scaled::key).collect()),
      Term::App(name, args) => TermKey::App(*name, args.iter().map(Scaled::key).collect()),
    }
  }
}

impl Scaled {
  pub fn key(&self) -> (TermKey, Rational) {
    (self.term.key(), self.coeff.clone())
  }
}

impl MulPair {
  /// `MulPair`'s key stores the exponent as a `Rational` so it shares shape with `Scaled::key`;
  /// the exponent is always an integer value.
  pub fn key(&self) -> (TermKey, Rational) {
    (self.term.key(), crate::rational::int(self.exponent))
  }
}
