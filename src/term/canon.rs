/*!

Canonicalization (C1). Every variant has a fixed normal form: `Add` and `Mul` merge arguments that
share a term-key and sort the rest; `App` canonicalizes its arguments in place without reordering;
`Abs` pulls the coefficient's absolute value out and collapses double-wrapping; `Min` canonicalizes
and sorts its arguments with no further simplification (there is no algebraic identity analogous to
`Add`'s that would let two `Min` arguments combine).

*/

use std::rc::Rc;

use num_traits::{Zero, Signed};

use crate::{
  rational::{Rational, int},
  term::{Term, Scaled, MulPair},
};

pub fn canonize(term: &Term) -> Scaled {
  match term {
    Term::One => Scaled::new(int(1), Term::one()),
    Term::Var(_) | Term::IVar(_) | Term::UVar(_) => Scaled::new(int(1), Rc::new(term.clone())),
    Term::Add(args) => canonize_add(args),
    Term::Mul(args) => canonize_mul(args),
    Term::Abs(arg) => canonize_abs(arg),
    Term::Min(args) => canonize_min(args),
    Term::App(name, args) => canonize_app(*name, args),
  }
}

/// Folds `item` into `acc`, merging with any existing entry that shares a term-key by summing
/// coefficients (dropping the entry if the sum is zero).
fn merge_add(acc: &mut Vec<Scaled>, item: Scaled) {
  if item.coeff.is_zero() {
    return;
  }
  if let Term::Add(inner) = &*item.term {
    for a in inner {
      merge_add(acc, Scaled::new(&item.coeff * &a.coeff, a.term.clone()));
    }
    return;
  }
  let key = item.term.key();
  if let Some(pos) = acc.iter().position(|a| a.term.key() == key) {
    let existing = acc.remove(pos);
    let new_coeff = &existing.coeff + &item.coeff;
    if !new_coeff.is_zero() {
      acc.push(Scaled::new(new_coeff, existing.term));
    }
  } else {
    acc.push(item);
  }
}

fn canonize_add(args: &[Scaled]) -> Scaled {
  let mut acc: Vec<Scaled> = Vec::new();
  for a in args {
    let c = a.term.canonize();
    merge_add(&mut acc, Scaled::new(&a.coeff * &c.coeff, c.term));
  }
  if acc.is_empty() {
    return Scaled::new(int(0), Term::one());
  }
  acc.sort_by(|x, y| x.term.key().cmp(&y.term.key()));
  if acc.len() == 1 {
    let only = acc.into_iter().next().unwrap();
    return Scaled::new(only.coeff, only.term);
  }
  let first_coeff = acc[0].coeff.clone();
  let new_args: Vec<Scaled> =
    acc.into_iter().map(|a| Scaled::new(&a.coeff / &first_coeff, a.term)).collect();
  Scaled::new(first_coeff, Rc::new(Term::Add(new_args)))
}

/// Folds `item` into `acc`, merging with any existing entry that shares a term-key by summing
/// exponents (dropping the entry if the sum is zero).
fn merge_mul(acc: &mut Vec<MulPair>, item: MulPair) {
  if item.exponent == 0 {
    return;
  }
  if let Term::Mul(inner) = &*item.term {
    for p in inner {
      merge_mul(acc, MulPair::new(p.term.clone(), p.exponent * item.exponent));
    }
    return;
  }
  let key = item.term.key();
  if let Some(pos) = acc.iter().position(|a| a.term.key() == key) {
    let existing = acc.remove(pos);
    let new_exponent = existing.exponent + item.exponent;
    if new_exponent != 0 {
      acc.push(MulPair::new(existing.term, new_exponent));
    }
  } else {
    acc.push(item);
  }
}

fn canonize_mul(args: &[MulPair]) -> Scaled {
  let mut scalar = int(1);
  let mut acc: Vec<MulPair> = Vec::new();
  for p in args {
    let c = p.term.canonize();
    scalar = &scalar * &pow_rational(&c.coeff, p.exponent);
    merge_mul(&mut acc, MulPair::new(c.term, p.exponent));
  }
  if scalar.is_zero() {
    return Scaled::new(int(0), Term::one());
  }
  acc.sort_by(|x, y| x.term.key().cmp(&y.term.key()));
  if acc.is_empty() {
    return Scaled::new(scalar, Term::one());
  }
  Scaled::new(scalar, Rc::new(Term::Mul(acc)))
}

/// Raises an exact rational to an integer power, including negative exponents, by repeated
/// squaring.
pub fn pow_rational(base: &Rational, exponent: crate::rational::Exponent) -> Rational {
  if exponent == 0 {
    return int(1);
  }
  let mut result = int(1);
  let mut b = base.clone();
  let mut e = exponent.unsigned_abs();
  while e > 0 {
    if e & 1 == 1 {
      result = &result * &b;
    }
    b = &b * &b;
    e >>= 1;
  }
  if exponent < 0 {
    int(1) / result
  } else {
    result
  }
}

fn canonize_abs(arg: &Rc<Term>) -> Scaled {
  let inner = arg.canonize();
  let coeff = inner.coeff.abs();
  let term = match &*inner.term {
    Term::Abs(_) => inner.term,
    _ => Rc::new(Term::Abs(inner.term)),
  };
  Scaled::new(coeff, term)
}

fn canonize_min(args: &[Scaled]) -> Scaled {
  let mut cargs: Vec<Scaled> = args.iter().map(Scaled::canonize).collect();
  cargs.sort_by(|x, y| x.term.key().cmp(&y.term.key()));
  Scaled::new(int(1), Rc::new(Term::Min(cargs)))
}

fn canonize_app(name: crate::abstractions::IString, args: &[Scaled]) -> Scaled {
  let cargs: Vec<Scaled> = args.iter().map(Scaled::canonize).collect();
  Scaled::new(int(1), Rc::new(Term::App(name, cargs)))
}
