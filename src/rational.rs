/*!

Exact-precision number types used throughout the core. All arithmetic in the matcher and linear
algebra (C6) is exact; floating point never appears.

`Rational` is an arbitrary-precision ratio, matching the reference implementation's use of Python's
unbounded `fractions.Fraction`. `Exponent` is the integer type used for `Mul` exponents (C1's
`MulPair`); it is bounded (`i64`) because exponents arise from user-written axioms and term
expressions, not from arithmetic that could overflow a fixed-width integer in practice.

*/

use num_bigint::BigInt;

pub use num_rational::BigRational as Rational;
pub use num_traits::{Zero, One as NumOne, Signed};

/// The integer type used for exponents inside `Mul`/`MulPair`.
pub type Exponent = i64;

#[inline(always)]
pub fn rational(numer: i64, denom: i64) -> Rational {
  Rational::new(BigInt::from(numer), BigInt::from(denom))
}

#[inline(always)]
pub fn int(value: i64) -> Rational {
  Rational::from_integer(BigInt::from(value))
}
