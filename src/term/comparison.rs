/*!

Relational expressions between terms (C1). Rust's `PartialEq`/`PartialOrd` cannot return anything
but `bool`, so unlike the dynamically-typed reference, comparison construction is a separate surface
from term construction: see [`crate::term::ops`] for the named constructors (`Term::lt`, `le`,
`eq_to`, `ge`, `gt`, `ne`) that build [`Comparison`] values. `Term`'s own `PartialEq`/`Ord` impls (via
[`super::TermKey`]) are reserved for structural identity.

*/

use crate::{
  rational::{Rational, int},
  term::{Term, Scaled},
};

/// A relational operator between two terms.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CompOp {
  Gt,
  Ge,
  Eq,
  Le,
  Lt,
  Ne,
}

impl CompOp {
  /// Swaps `>`/`<` and `≥`/`≤`; `=` and `≠` are fixed. Used when the two sides of a comparison are
  /// swapped during canonicalization.
  pub fn reverse(self) -> CompOp {
    match self {
      CompOp::Gt => CompOp::Lt,
      CompOp::Ge => CompOp::Le,
      CompOp::Eq => CompOp::Eq,
      CompOp::Le => CompOp::Ge,
      CompOp::Lt => CompOp::Gt,
      CompOp::Ne => CompOp::Ne,
    }
  }

  /// Swaps `>`/`≤` and `≥`/`<`, and `=`/`≠`. The logical negation of the relation.
  pub fn negate(self) -> CompOp {
    match self {
      CompOp::Gt => CompOp::Le,
      CompOp::Ge => CompOp::Lt,
      CompOp::Eq => CompOp::Ne,
      CompOp::Le => CompOp::Gt,
      CompOp::Lt => CompOp::Ge,
      CompOp::Ne => CompOp::Eq,
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      CompOp::Gt => ">",
      CompOp::Ge => ">=",
      CompOp::Eq => "==",
      CompOp::Le => "<=",
      CompOp::Lt => "<",
      CompOp::Ne => "!=",
    }
  }
}

/// `term1 comp term2`. Built via [`Term::lt`]/[`Term::le`]/[`Term::eq_to`]/[`Term::ge`]/
/// [`Term::gt`]/[`Term::ne`], never via `PartialOrd`/`PartialEq`.
#[derive(Clone, Debug)]
pub struct Comparison {
  pub term1: Scaled,
  pub comp: CompOp,
  pub term2: Scaled,
}

impl Comparison {
  pub fn new(term1: Scaled, comp: CompOp, term2: Scaled) -> Self {
    Comparison { term1, comp, term2 }
  }

  /// Returns a comparison `t1 comp t2` where `t2` is either the zero `Scaled`, or
  /// `t1.term.key() < t2.term.key()`, with the scalar sign folded into `comp` (a negative leading
  /// coefficient reverses strict/nonstrict ordering; `=`/`≠` are unaffected).
  pub fn canonize(&self) -> Comparison {
    let mut t1 = self.term1.canonize();
    let mut t2 = self.term2.canonize();
    let mut comp = self.comp;

    if t1.term.key() == t2.term.key() {
      let t = t1.term.clone();
      let diff_coeff = &t1.coeff - &t2.coeff;
      if diff_coeff == int(0) {
        let canonical_comp = match comp {
          CompOp::Lt | CompOp::Gt | CompOp::Ne => comp,
          _ => CompOp::Eq,
        };
        return Comparison::new(Scaled::new(int(1), t.clone()), canonical_comp, Scaled::new(int(1), t));
      }
      t1 = Scaled::new(diff_coeff, t);
      t2 = Scaled::new(int(0), Term::one());
    }

    if t1.term.key() > t2.term.key() {
      std::mem::swap(&mut t1, &mut t2);
      comp = comp.reverse();
    }
    if t1.coeff == int(0) {
      t1 = t2;
      t2 = Scaled::new(int(0), Term::one());
      comp = comp.reverse();
    }
    if t1.coeff < int(0) {
      comp = comp.reverse();
    }

    let leading = t1.coeff.clone();
    Comparison::new(Scaled::new(int(1), t1.term), comp, Scaled::new(&t2.coeff / &leading, t2.term))
  }
}

pub(crate) fn scalar(value: Rational) -> Scaled {
  Scaled::new(value, Term::one())
}
