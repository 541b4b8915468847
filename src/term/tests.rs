use super::*;
use crate::rational::int;
use crate::term::ops::Comparable;

fn var(name: &str) -> Term {
  Term::Var(name.into())
}

#[test]
fn canonicalization_is_idempotent() {
  let x = var("x");
  let y = var("y");
  let sum = x + y;
  let once = sum.canonize();
  let twice = once.term.canonize();
  assert_eq!(once.term.key(), twice.term.key());
  assert_eq!(twice.coeff, int(1));
}

#[test]
fn addition_is_commutative_by_key() {
  let x = var("x");
  let y = var("y");
  let lhs = (x.clone() + y.clone()).canonize();
  let rhs = (y + x).canonize();
  assert_eq!(lhs.term.key(), rhs.term.key());
  assert_eq!(lhs.coeff, rhs.coeff);
}

#[test]
fn squaring_matches_explicit_exponent() {
  let x = var("x");
  let lhs = (x.clone() * x.clone()).canonize();
  let rhs = x.pow(2).canonize();
  assert_eq!(lhs.term.key(), rhs.term.key());
}

#[test]
fn adding_zero_collapses_to_bare_term() {
  let x = var("x");
  let zero = Scaled::new(int(0), Term::one());
  let result = (x.clone() + zero).canonize();
  assert_eq!(result.term.key(), x.key());
  assert_eq!(result.coeff, int(1));
}

#[test]
fn repeated_addition_merges_like_terms() {
  let x = var("x");
  let result = (x.clone() + x.clone()).canonize();
  match &*result.term {
    Term::Var(_) => assert_eq!(result.coeff, int(2)),
    other => panic!("expected a bare Var after merging, got {other:?}"),
  }
}

#[test]
fn abs_pulls_out_sign_and_avoids_double_wrap() {
  let x = var("x");
  let once = x.abs_builder().canonize();
  let twice = once.term.as_ref().clone().abs_builder().canonize();
  assert_eq!(once.term.key(), twice.term.key());
}

#[test]
fn comparison_canonize_moves_everything_to_one_side() {
  let x = var("x");
  let y = var("y");
  let comparison = x.lt(y).canonize();
  assert!(matches!(comparison.term2.term.as_ref(), Term::Add(_) | Term::Var(_)));
}

#[test]
fn substitution_resolves_bound_uvars() {
  use crate::blackboard::{IVarIndex, UVarIndex};
  let u = Term::UVar(UVarIndex(0));
  let env: Env = vec![(UVarIndex(0), (int(3), IVarIndex(5)))];
  let (result, closed) = reduce_term(&u, &env);
  assert!(closed);
  assert_eq!(result.coeff, int(3));
  assert_eq!(result.term.key(), Term::IVar(IVarIndex(5)).key());
}

#[test]
fn substitution_leaves_unbound_uvars_open() {
  use crate::blackboard::UVarIndex;
  let u = Term::UVar(UVarIndex(7));
  let (_, closed) = reduce_term(&u, &Env::new());
  assert!(!closed);
}
