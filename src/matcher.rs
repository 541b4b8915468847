/*!

The term matcher (C3): `find_problem_term(B, t)` decides whether an arbitrary term — whose free
leaves are already-interned `IVar`s — is equal, up to a rational scalar, to some named problem term.
`App` terms match structurally (modulo known equalities between argument positions); `Add`/`Mul`
terms match via Fourier-Motzkin elimination on a matrix of linear relations between term indices
([`linalg`]), in plain coordinates for sums and in exponent space for products.

*/

use num_traits::Zero;

use crate::{
  abstractions::IString,
  rational::{Rational, int},
  term::{Term, Scaled, MulPair, CompOp},
  blackboard::{Blackboard, IVarIndex},
  error::NoTerm,
  linalg,
};

fn is_zero(x: &Rational) -> bool {
  Rational::is_zero(x)
}

/// `term` must have all variable occurrences already reduced to `IVar`s. Returns `(c, i)` such that
/// `term = c * IVar(i)`, or `Err(NoTerm)` if no such named term can be identified.
pub fn find_problem_term(b: &dyn Blackboard, term: &Term) -> Result<(Rational, IVarIndex), NoTerm> {
  tracing::trace!(?term, "finding problem term");
  let sterm = term.canonize();
  let coeff = sterm.coeff.clone();
  let t: &Term = &sterm.term;

  if let Term::IVar(i) = t {
    return Ok((coeff, *i));
  }

  if let Some(i) = b.has_name(t) {
    return Ok((coeff, i));
  }

  match t {
    Term::App(name, args) => find_problem_app(b, *name, args, coeff),
    Term::Add(args) => add_fm_eq_elim(coeff, args, b),
    Term::Mul(args) => mul_fm_eq_elim(coeff, args, b),
    // Abs and Min have no elimination path beyond "already interned" (checked above).
    _ => Err(NoTerm),
  }
}

/// The coefficient `c'` such that `IVar(uarg_index) = c' * IVar(targ_index)`, derived from
/// [`Blackboard::equality_coefficient`]'s `t_min = c * t_max` convention.
fn reconcile_coeff(b: &dyn Blackboard, targ_index: IVarIndex, uarg_index: IVarIndex) -> Option<Rational> {
  let c = b.equality_coefficient(targ_index, uarg_index)?;
  if uarg_index < targ_index {
    Some(c)
  } else {
    Some(int(1) / c)
  }
}

fn find_problem_app(
  b: &dyn Blackboard,
  name: IString,
  args: &[Scaled],
  coeff: Rational,
) -> Result<(Rational, IVarIndex), NoTerm> {
  let mut nargs: Vec<(Rational, IVarIndex)> = Vec::with_capacity(args.len());
  for a in args {
    let (c, i) = find_problem_term(b, &a.term)?;
    nargs.push((&a.coeff * &c, i));
  }

  for idx in 0..b.num_terms() {
    let candidate = IVarIndex(idx);
    let def = b.term_def(candidate);
    let dargs = match def {
      Term::App(dname, dargs) if *dname == name && dargs.len() == nargs.len() => dargs,
      _ => continue,
    };

    let mut matched = true;
    for (d, uarg) in dargs.iter().zip(nargs.iter()) {
      let targ_index = match &*d.term {
        Term::IVar(i) => *i,
        _ => {
          matched = false;
          break;
        }
      };
      let targ = (d.coeff.clone(), targ_index);
      if targ == *uarg {
        continue;
      }
      if targ.1 == uarg.1 {
        if b.is_zero(targ.1) {
          continue;
        }
      } else if let Some(c) = reconcile_coeff(b, targ.1, uarg.1) {
        if &uarg.0 * &c == targ.0 {
          continue;
        }
      }
      matched = false;
      break;
    }

    if matched {
      return Ok((coeff, candidate));
    }
  }

  Err(NoTerm)
}

/// Additive Fourier-Motzkin elimination (C3 step 4): decides whether a sum of already-matched
/// summands equals a named problem term, using known equalities and the definitions of other
/// additive problem terms as a system of linear relations between indices.
fn add_fm_eq_elim(coeff: Rational, args: &[Scaled], b: &dyn Blackboard) -> Result<(Rational, IVarIndex), NoTerm> {
  let mut nargs: Vec<(Rational, usize)> = Vec::with_capacity(args.len());
  for a in args {
    let (c, i) = find_problem_term(b, &a.term)?;
    nargs.push((&a.coeff * &c, i.0));
  }

  let num_terms = b.num_terms();
  let sentinel = num_terms;
  let width = num_terms + 1;

  let mut urow = vec![int(0); width];
  urow[sentinel] = int(-1);
  for (c, i) in &nargs {
    urow[*i] = &urow[*i] + c;
  }

  let mut mat: Vec<Vec<Rational>> = Vec::new();
  for eq in b.equalities() {
    let mut row = vec![int(0); width];
    row[eq.term1.0] = int(-1);
    let j = if eq.coeff.is_zero() { sentinel } else { eq.term2.0 };
    row[j] = eq.coeff;
    mat.push(row);
  }
  for i in 0..num_terms {
    if let Term::Add(def_args) = b.term_def(IVarIndex(i)) {
      let mut row = vec![int(0); width];
      row[i] = int(-1);
      for p in def_args {
        if let Term::IVar(pidx) = &*p.term {
          row[pidx.0] = p.coeff.clone();
        }
      }
      mat.push(row);
    }
  }
  mat.push(urow);

  let mut rows_i = mat;
  for i in 0..num_terms {
    let mut rows_j = rows_i.clone();
    for j in (i + 1)..num_terms {
      if let Some(pos) = rows_j.iter().position(|r| !is_zero(&r[j]) && is_zero(&r[sentinel])) {
        let pivot = rows_j.remove(pos);
        rows_j = linalg::eliminate(j, &pivot, &rows_j);
      }
    }

    let row = match rows_j.iter().find(|r| !is_zero(&r[sentinel])) {
      Some(row) => row,
      None => return Err(NoTerm),
    };
    let nonzero: Vec<usize> = (0..width).filter(|&k| !is_zero(&row[k])).collect();
    if nonzero.len() == 1 {
      return Ok((int(0), IVarIndex(0)));
    } else if nonzero.len() == 2 {
      let ind = *nonzero.iter().find(|&&k| k != sentinel).ok_or(NoTerm)?;
      let scale = -(&row[ind] / &row[sentinel]);
      return Ok((&scale * &coeff, IVarIndex(ind)));
    } else {
      match rows_i.iter().position(|r| !is_zero(&r[i]) && is_zero(&r[sentinel])) {
        Some(pos) => {
          let pivot = rows_i.remove(pos);
          rows_i = linalg::eliminate(i, &pivot, &rows_i);
        }
        None => {
          if !is_zero(&rows_i.last().expect("urow always present")[i]) {
            return Err(NoTerm);
          }
        }
      }
    }
  }

  Err(NoTerm)
}

fn find_pivot(rows: &[Vec<Rational>], col: usize, sentinel: usize) -> Option<usize> {
  rows
    .iter()
    .position(|r| !is_zero(&r[col]) && is_zero(&r[sentinel]) && r[0] == int(1))
    .or_else(|| rows.iter().position(|r| !is_zero(&r[col]) && is_zero(&r[sentinel])))
}

/// Multiplicative Fourier-Motzkin elimination (C3 step 5), in exponent space: a row
/// `[c, e1, ..., e_{n-1}, sentinel]` represents the identity `c * t1^e1 * ... * t_{n-1}^e_{n-1} = 1`.
/// Column 0 is never a genuine exponent column (`IVar(0)` is always the constant `1`); it carries
/// each row's own constant scalar instead.
fn mul_fm_eq_elim(coeff: Rational, args: &[MulPair], b: &dyn Blackboard) -> Result<(Rational, IVarIndex), NoTerm> {
  if args.len() == 1 && args[0].exponent == 1 {
    let (c, i) = find_problem_term(b, &args[0].term)?;
    return Ok((&coeff * &c, i));
  }

  let first = &args[0];
  let (p0, p1) = find_problem_term(b, &first.term)?;
  let mut nt = Scaled::new(p0, Term::ivar(p1)).pow(first.exponent) * coeff.clone();
  for a in &args[1..] {
    let (pc, pi) = find_problem_term(b, &a.term)?;
    let factor = Scaled::new(pc, Term::ivar(pi)).pow(a.exponent);
    nt = nt * factor;
  }
  let nt = nt.canonize();
  let (coeff2, term2) = (nt.coeff.clone(), nt.term.clone());

  if let Some(idx) = b.has_name(&term2) {
    return Ok((coeff2, idx));
  }

  let factors: &[MulPair] = match &*term2 {
    Term::Mul(fs) => fs.as_slice(),
    Term::One => return Ok((coeff2, IVarIndex(0))),
    _ => return Err(NoTerm),
  };

  let all_nonzero = factors.iter().all(|p| match &*p.term {
    Term::IVar(idx) => b.implies(*idx, CompOp::Ne, int(0), IVarIndex(0)),
    _ => false,
  });
  if !all_nonzero {
    return Err(NoTerm);
  }

  let num_terms = b.num_terms();
  let sentinel = num_terms;
  let width = num_terms + 1;

  let mut urow = vec![int(0); width];
  urow[sentinel] = int(-1);
  for p in factors {
    if let Term::IVar(idx) = &*p.term {
      urow[idx.0] = int(p.exponent);
    }
  }
  urow[0] = int(1);

  let mut mat: Vec<Vec<Rational>> = Vec::new();
  for eq in b.equalities().into_iter().filter(|e| !e.coeff.is_zero()) {
    if b.implies(eq.term1, CompOp::Ne, int(0), IVarIndex(0)) {
      let mut row = vec![int(0); width];
      row[eq.term1.0] = int(-1);
      row[eq.term2.0] = int(1);
      row[0] = eq.coeff;
      mat.push(row);
    }
  }
  for i in 0..num_terms {
    if let Term::Mul(def_args) = b.term_def(IVarIndex(i)) {
      if b.implies(IVarIndex(i), CompOp::Ne, int(0), IVarIndex(0)) {
        let mut row = vec![int(0); width];
        row[i] = int(-1);
        for p in def_args {
          if let Term::IVar(pidx) = &*p.term {
            if pidx.0 != 0 {
              row[pidx.0] = int(p.exponent);
            }
          }
        }
        row[0] = int(1);
        mat.push(row);
      }
    }
  }
  mat.push(urow);

  let mut rows_i = mat;
  for i in 1..num_terms {
    let mut rows_j = rows_i.clone();
    for j in (i + 1)..num_terms {
      if let Some(pos) = find_pivot(&rows_j, j, sentinel) {
        let pivot = rows_j.remove(pos);
        rows_j = linalg::eliminate_mul(j, &pivot, &rows_j)?;
      }
    }

    for row in rows_j.iter().filter(|r| !is_zero(&r[sentinel])) {
      let nonzero_count = row.iter().filter(|x| !is_zero(x)).count();
      if nonzero_count == 1 || is_zero(&row[0]) {
        return Ok((int(0), IVarIndex(0)));
      } else if nonzero_count == 2 {
        return Ok((&coeff * &row[0], IVarIndex(0)));
      } else if nonzero_count == 3 {
        if let Some(ind) = (1..width - 1).find(|&k| !is_zero(&row[k])) {
          if row[ind] == int(1) {
            return Ok((&coeff * &row[0], IVarIndex(ind)));
          }
        }
      }
    }

    match find_pivot(&rows_i, i, sentinel) {
      Some(pos) => {
        let pivot = rows_i.remove(pos);
        rows_i = linalg::eliminate_mul(i, &pivot, &rows_i)?;
      }
      None => {
        if !is_zero(&rows_i.last().expect("urow always present")[i]) {
          return Err(NoTerm);
        }
      }
    }
  }

  Err(NoTerm)
}
