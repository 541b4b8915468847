/*!

Exact rational linear-algebra primitives (C6): vector arithmetic and the two pivot-elimination
steps the matcher (C3) builds its Fourier-Motzkin sweeps from. One step works over plain rational
coordinates (additive matching); the other works over exponent vectors representing
`c * t1^e1 * ... * tn^en = 1` identities (multiplicative matching), where eliminating a coordinate
means raising the pivot's constant to a rational power — this is where the "irrational guard"
([`eliminate_mul`]) lives.

All arithmetic here is exact; no floating point appears anywhere in the core.

*/

use crate::{
  rational::{Rational, int},
  term::pow_rational,
  error::NoTerm,
};

/// Componentwise vector addition. Panics (a programmer error, not a runtime condition) if the
/// vectors have different lengths.
pub fn add_vecs(a: &[Rational], b: &[Rational]) -> Vec<Rational> {
  assert_eq!(a.len(), b.len(), "add_vecs: mismatched row lengths");
  a.iter().zip(b.iter()).map(|(x, y)| x + y).collect()
}

/// Scales every coordinate of `v` by `c`.
pub fn scale_vec(c: &Rational, v: &[Rational]) -> Vec<Rational> {
  v.iter().map(|x| c * x).collect()
}

/// Additive pivot: replaces every row in `rows` with `row - (row[i] / pivot[i]) * pivot`, which
/// zeroes out coordinate `i`. `pivot[i]` must be nonzero — the caller is required to have selected a
/// usable pivot row; a zero pivot coordinate here is a bug in the caller, not a runtime condition.
pub fn eliminate(i: usize, pivot: &[Rational], rows: &[Vec<Rational>]) -> Vec<Vec<Rational>> {
  assert!(!pivot[i].is_zero_value(), "eliminate: pivot coordinate {i} is zero");
  rows
    .iter()
    .map(|row| {
      let scale = -(&row[i] / &pivot[i]);
      add_vecs(row, &scale_vec(&scale, pivot))
    })
    .collect()
}

/// Multiplicative pivot, in exponent space. `pivot` and each row in `rows` represent
/// `row[0] * t1^row[1] * ... * tn^row[n]` with the elimination target at coordinate `i`. The new
/// constant coordinate is `row[0] * pivot[0]^scale` where `scale = -row[i] / pivot[i]`; the exponent
/// coordinates combine additively, exactly like [`eliminate`]. Raises [`NoTerm`] when `pivot[0]` is
/// not `1` and `scale` is non-integer — that combination would require a non-integer power of a
/// non-unit constant, which is (usually, though not always: `4^(1/2) = 2`) irrational. The matcher
/// treats this conservatively rather than attempting to prove rationality of the result.
pub fn eliminate_mul(i: usize, pivot: &[Rational], rows: &[Vec<Rational>]) -> Result<Vec<Vec<Rational>>, NoTerm> {
  assert!(!pivot[i].is_zero_value(), "eliminate_mul: pivot coordinate {i} is zero");
  let mut new_rows = Vec::with_capacity(rows.len());
  for row in rows {
    let scale = -(&row[i] / &pivot[i]);
    let new_constant = if pivot[0] == int(1) {
      row[0].clone()
    } else if scale.is_integer() {
      &row[0] * pow_rational(&pivot[0], rational_to_exponent(&scale))
    } else {
      // A non-unit constant raised to a non-integer power would (usually) be irrational.
      return Err(NoTerm);
    };
    let mut new_row = vec![new_constant];
    new_row.extend(add_vecs(&row[1..], &scale_vec(&scale, &pivot[1..])));
    new_rows.push(new_row);
  }
  Ok(new_rows)
}

fn rational_to_exponent(r: &Rational) -> crate::rational::Exponent {
  debug_assert!(r.is_integer());
  r.to_integer().try_into().expect("exponent out of range")
}

trait IsZeroValue {
  fn is_zero_value(&self) -> bool;
}

impl IsZeroValue for Rational {
  fn is_zero_value(&self) -> bool {
    use num_traits::Zero;
    Rational::is_zero(self)
  }
}
