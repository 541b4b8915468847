/*!

The contract the core relies on (C2). The blackboard is the shared fact store external to this
crate: a concrete arithmetic engine (sign inference, additive/multiplicative saturation) implements
[`Blackboard`] and owns the actual term interning table and fact store. This crate never implements
`Blackboard` itself outside of test code (`tests/common`).

*/

use crate::{
  rational::Rational,
  term::{Term, CompOp},
  error::Contradiction,
};

/// Index of a named problem term (`IVar`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IVarIndex(pub usize);

/// Index of an axiom-scoped unification variable (`UVar`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UVarIndex(pub usize);

impl From<usize> for IVarIndex {
  fn from(i: usize) -> Self {
    IVarIndex(i)
  }
}

impl From<usize> for UVarIndex {
  fn from(i: usize) -> Self {
    UVarIndex(i)
  }
}

/// A known fact `IVar(term1) = coeff * IVar(term2)`. When `coeff` is zero, `term2` is the sentinel
/// index `num_terms`, meaning the fact is really `IVar(term1) = 0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EqualityFact {
  pub term1: IVarIndex,
  pub coeff: Rational,
  pub term2: IVarIndex,
}

/// The capability the axiom-instantiation engine requires of its host. Implementations own the
/// problem-term interning table and the fact store; this crate only ever reads through this trait
/// and writes back through `assert_clause`/`assert_comparisons`.
pub trait Blackboard {
  /// Number of named problem terms, i.e. one past the highest valid `IVarIndex`.
  fn num_terms(&self) -> usize;

  /// The defining term of `IVar(i)`. Index 0 is always the constant `One`.
  fn term_def(&self, index: IVarIndex) -> &Term;

  /// Look up a canonical term by structural key among the named problem terms.
  fn has_name(&self, term: &Term) -> Option<IVarIndex>;

  /// Intern `term`, returning its existing index if already named or creating a fresh one.
  fn term_name(&mut self, term: &Term) -> IVarIndex;

  /// All known equality facts between named problem terms.
  fn equalities(&self) -> Vec<EqualityFact>;

  /// Direct lookup of the coefficient `c` such that `t_min(i,j) = c * t_max(i,j)`, if known.
  fn equality_coefficient(&self, i: IVarIndex, j: IVarIndex) -> Option<Rational>;

  /// Is `IVar(i)` known to be exactly zero?
  fn is_zero(&self, i: IVarIndex) -> bool;

  /// Is `IVar(i) comp c * IVar(j)` entailed by the current fact set?
  fn implies(&self, i: IVarIndex, comp: CompOp, c: Rational, j: IVarIndex) -> bool;

  /// Assert a disjunctive clause. Returns `Err(Contradiction)` if the clause conflicts with the
  /// existing fact set.
  fn assert_clause(&mut self, literals: &[crate::term::Comparison]) -> Result<(), Contradiction>;

  /// Convenience wrapper over `assert_clause` accepting any iterable of comparisons. Generic, so it
  /// is only callable on a concrete `Self`, never through `dyn Blackboard` — callers holding a trait
  /// object use `assert_clause` directly.
  fn assert_comparisons(
    &mut self,
    literals: impl IntoIterator<Item = crate::term::Comparison>,
  ) -> Result<(), Contradiction>
  where
    Self: Sized,
  {
    let literals: Vec<_> = literals.into_iter().collect();
    self.assert_clause(&literals)
  }
}
