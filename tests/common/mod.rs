//! A minimal in-memory `Blackboard` for exercising the axiom-instantiation engine in isolation.
//! Test-only: a real deployment's blackboard also does sign inference and additive/multiplicative
//! saturation, neither of which this crate performs or this mock attempts to simulate.

use std::collections::{BTreeMap, HashSet};

use polya::{
  rational::int, Blackboard, CompOp, Comparison, Contradiction, EqualityFact, IVarIndex, Rational, Term, TermKey,
};

#[derive(Default)]
pub struct MockBlackboard {
  defs: Vec<Term>,
  names: BTreeMap<TermKey, IVarIndex>,
  equalities: Vec<EqualityFact>,
  zero: HashSet<usize>,
  nonzero: HashSet<usize>,
  pub asserted: Vec<Vec<Comparison>>,
}

impl MockBlackboard {
  pub fn new() -> Self {
    let mut b = MockBlackboard::default();
    b.term_name(&Term::One);
    b
  }

  /// Interns `term` as a named problem term, returning its index.
  pub fn define(&mut self, term: Term) -> IVarIndex {
    self.term_name(&term)
  }

  /// Records `IVar(i) = coeff * IVar(j)` as a known fact.
  pub fn assert_equal(&mut self, i: IVarIndex, coeff: Rational, j: IVarIndex) {
    self.equalities.push(EqualityFact { term1: i, coeff, term2: j });
  }

  /// Records `IVar(i) != 0` as a known fact.
  pub fn assert_nonzero(&mut self, i: IVarIndex) {
    self.nonzero.insert(i.0);
  }

  /// Records `IVar(i) == 0` as a known fact.
  pub fn assert_zero(&mut self, i: IVarIndex) {
    self.zero.insert(i.0);
  }
}

impl Blackboard for MockBlackboard {
  fn num_terms(&self) -> usize {
    self.defs.len()
  }

  fn term_def(&self, index: IVarIndex) -> &Term {
    &self.defs[index.0]
  }

  fn has_name(&self, term: &Term) -> Option<IVarIndex> {
    self.names.get(&term.key()).copied()
  }

  fn term_name(&mut self, term: &Term) -> IVarIndex {
    let key = term.key();
    if let Some(&i) = self.names.get(&key) {
      return i;
    }
    let index = IVarIndex(self.defs.len());
    self.defs.push(term.clone());
    self.names.insert(key, index);
    index
  }

  fn equalities(&self) -> Vec<EqualityFact> {
    self.equalities.clone()
  }

  fn equality_coefficient(&self, i: IVarIndex, j: IVarIndex) -> Option<Rational> {
    let (lo, hi) = if i < j { (i, j) } else { (j, i) };
    self
      .equalities
      .iter()
      .find(|e| {
        let (a, b) = if e.term1 < e.term2 { (e.term1, e.term2) } else { (e.term2, e.term1) };
        a == lo && b == hi
      })
      .map(|e| e.coeff.clone())
  }

  fn is_zero(&self, i: IVarIndex) -> bool {
    self.zero.contains(&i.0)
  }

  fn implies(&self, i: IVarIndex, comp: CompOp, c: Rational, j: IVarIndex) -> bool {
    match (comp, j.0) {
      (CompOp::Ne, 0) if c == int(0) => self.nonzero.contains(&i.0),
      _ => false,
    }
  }

  fn assert_clause(&mut self, literals: &[Comparison]) -> Result<(), Contradiction> {
    self.asserted.push(literals.to_vec());
    Ok(())
  }
}
