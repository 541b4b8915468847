/*!

The builder layer (C1). `std::ops::{Add, Sub, Mul, Neg}` are implemented on [`Term`]/[`Scaled`] for
natural `+ - * -` term-construction syntax, matching the reference's operator overloading for
*construction*. Comparison construction is a deliberately separate surface — `Term::lt`, `le`,
`eq_to`, `ge`, `gt`, `ne` — since Rust cannot let `<`/`<=`/`==` return anything but `bool`.

Builder operators do not canonicalize; they assemble a literal `Add`/`Mul` node. Simplification
(merging like terms, sorting, scalar extraction) happens only when [`Term::canonize`] is called,
matching C1's split between construction and normalization.

*/

use std::{ops, rc::Rc};

use num_traits::Signed;

use crate::{
  rational::{Rational, int},
  term::{Term, Scaled, MulPair, Comparison, CompOp},
};

/// Converts a builder-layer operand into a [`Scaled`], so `Term`, `Scaled`, and bare rationals can
/// all appear on either side of `+`/`*`/comparison construction.
pub trait IntoScaled {
  fn into_scaled(self) -> Scaled;
}

impl IntoScaled for Term {
  fn into_scaled(self) -> Scaled {
    Scaled::new(int(1), Rc::new(self))
  }
}

impl IntoScaled for Scaled {
  fn into_scaled(self) -> Scaled {
    self
  }
}

impl IntoScaled for Rational {
  fn into_scaled(self) -> Scaled {
    Scaled::new(self, Term::one())
  }
}

impl IntoScaled for i64 {
  fn into_scaled(self) -> Scaled {
    Scaled::new(int(self), Term::one())
  }
}

/// Named comparison constructors, available on anything convertible to a [`Scaled`].
pub trait Comparable: IntoScaled + Sized {
  fn lt(self, rhs: impl IntoScaled) -> Comparison {
    Comparison::new(self.into_scaled(), CompOp::Lt, rhs.into_scaled())
  }
  fn le(self, rhs: impl IntoScaled) -> Comparison {
    Comparison::new(self.into_scaled(), CompOp::Le, rhs.into_scaled())
  }
  fn eq_to(self, rhs: impl IntoScaled) -> Comparison {
    Comparison::new(self.into_scaled(), CompOp::Eq, rhs.into_scaled())
  }
  fn ge(self, rhs: impl IntoScaled) -> Comparison {
    Comparison::new(self.into_scaled(), CompOp::Ge, rhs.into_scaled())
  }
  fn gt(self, rhs: impl IntoScaled) -> Comparison {
    Comparison::new(self.into_scaled(), CompOp::Gt, rhs.into_scaled())
  }
  fn ne(self, rhs: impl IntoScaled) -> Comparison {
    Comparison::new(self.into_scaled(), CompOp::Ne, rhs.into_scaled())
  }
}

impl Comparable for Term {}
impl Comparable for Scaled {}

impl ops::Add<Term> for Term {
  type Output = Scaled;
  fn add(self, rhs: Term) -> Scaled {
    Scaled::new(int(1), Rc::new(Term::Add(vec![self.into_scaled(), rhs.into_scaled()])))
  }
}

impl ops::Add<Scaled> for Term {
  type Output = Scaled;
  fn add(self, rhs: Scaled) -> Scaled {
    Scaled::new(int(1), Rc::new(Term::Add(vec![self.into_scaled(), rhs])))
  }
}

impl ops::Add<Term> for Scaled {
  type Output = Scaled;
  fn add(self, rhs: Term) -> Scaled {
    Scaled::new(int(1), Rc::new(Term::Add(vec![self, rhs.into_scaled()])))
  }
}

impl ops::Add<Scaled> for Scaled {
  type Output = Scaled;
  fn add(self, rhs: Scaled) -> Scaled {
    Scaled::new(int(1), Rc::new(Term::Add(vec![self, rhs])))
  }
}

impl ops::Neg for Term {
  type Output = Scaled;
  fn neg(self) -> Scaled {
    Scaled::new(int(-1), Rc::new(self))
  }
}

impl ops::Neg for Scaled {
  type Output = Scaled;
  fn neg(self) -> Scaled {
    Scaled::new(-self.coeff, self.term)
  }
}

impl ops::Sub<Term> for Term {
  type Output = Scaled;
  fn sub(self, rhs: Term) -> Scaled {
    self + (-rhs)
  }
}

impl ops::Sub<Scaled> for Term {
  type Output = Scaled;
  fn sub(self, rhs: Scaled) -> Scaled {
    self + (-rhs)
  }
}

impl ops::Sub<Term> for Scaled {
  type Output = Scaled;
  fn sub(self, rhs: Term) -> Scaled {
    self + (-rhs)
  }
}

impl ops::Sub<Scaled> for Scaled {
  type Output = Scaled;
  fn sub(self, rhs: Scaled) -> Scaled {
    self + (-rhs)
  }
}

impl ops::Mul<Term> for Term {
  type Output = Scaled;
  fn mul(self, rhs: Term) -> Scaled {
    Scaled::new(int(1), Rc::new(Term::Mul(vec![MulPair::new(Rc::new(self), 1), MulPair::new(Rc::new(rhs), 1)])))
  }
}

impl ops::Mul<Rational> for Term {
  type Output = Scaled;
  fn mul(self, rhs: Rational) -> Scaled {
    Scaled::new(rhs, Rc::new(self))
  }
}

impl ops::Mul<i64> for Term {
  type Output = Scaled;
  fn mul(self, rhs: i64) -> Scaled {
    self * int(rhs)
  }
}

impl ops::Mul<Term> for Scaled {
  type Output = Scaled;
  fn mul(self, rhs: Term) -> Scaled {
    Scaled::new(self.coeff, Rc::new(Term::Mul(vec![MulPair::new(self.term, 1), MulPair::new(Rc::new(rhs), 1)])))
  }
}

impl ops::Mul<Scaled> for Scaled {
  type Output = Scaled;
  fn mul(self, rhs: Scaled) -> Scaled {
    Scaled::new(&self.coeff * &rhs.coeff, Rc::new(Term::Mul(vec![MulPair::new(self.term, 1), MulPair::new(rhs.term, 1)])))
  }
}

impl ops::Mul<Rational> for Scaled {
  type Output = Scaled;
  fn mul(self, rhs: Rational) -> Scaled {
    Scaled::new(&self.coeff * &rhs, self.term)
  }
}

impl Term {
  /// `t ^ n`, the builder-layer analogue of the reference's `__pow__` (not an operator in Rust,
  /// since `**` has no overloadable equivalent). Always wraps in `Mul`, matching the reference's
  /// `MulTerm([MulPair(self, n)])`.
  pub fn pow(self, exponent: crate::rational::Exponent) -> Scaled {
    Scaled::new(int(1), Rc::new(Term::Mul(vec![MulPair::new(Rc::new(self), exponent)])))
  }

  pub fn abs_builder(self) -> Scaled {
    Scaled::new(int(1), Term::abs(Rc::new(self)))
  }
}

impl Scaled {
  pub fn pow(self, exponent: crate::rational::Exponent) -> Scaled {
    Scaled::new(super::canon::pow_rational(&self.coeff, exponent), Rc::new(Term::Mul(vec![MulPair::new(self.term, exponent)])))
  }

  pub fn abs_builder(self) -> Scaled {
    Scaled::new(self.coeff.abs(), Term::abs(self.term))
  }
}
