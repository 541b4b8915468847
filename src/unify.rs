/*!

The trigger unifier (C4). Given a list of trigger terms mentioning a set of axiom-scoped `UVar`s,
finds every environment under which each trigger resolves to a named problem term, by picking a
`UVar` that occurs alone as a function argument, trying every problem term that could fill that
argument slot, and recursing on the remaining variables.

*/

use crate::{
  blackboard::{Blackboard, IVarIndex, UVarIndex},
  matcher::find_problem_term,
  rational::Rational,
  term::{substitute, Env, Term},
};

/// `true` iff `term` is a function application with `UVar(var)` occurring, unscaled, as one of its
/// arguments.
pub(crate) fn occurs_as_arg(term: &Term, var: UVarIndex) -> bool {
  match term {
    Term::App(_, args) => args.iter().any(|a| matches!(&*a.term, Term::UVar(v) if *v == var)),
    _ => false,
  }
}

/// Extends `envs` with bindings that unify `termlist` against the problem terms known to `b`.
/// `uvars` is the full set of variables remaining to bind; `arg_uvars` is the subset of those that
/// still occur alone as a trigger argument, in the order they should be resolved.
///
/// If `arg_uvars` runs out before `uvars` does, the remaining variables are left unconstrained
/// (`envs` is returned unchanged) rather than failing the whole axiom — matching the reference
/// implementation, which does not attempt to unify variables that never occur alone as an argument.
pub fn unify(b: &dyn Blackboard, termlist: &[Term], uvars: &[UVarIndex], arg_uvars: &[UVarIndex], envs: &[Env]) -> Vec<Env> {
  if uvars.is_empty() || arg_uvars.is_empty() {
    return envs.to_vec();
  }

  let v = arg_uvars[0];

  let (name, args) = match termlist.iter().find(|t| occurs_as_arg(t, v)) {
    Some(Term::App(name, args)) => (*name, args),
    Some(_) => unreachable!("occurs_as_arg only returns true for App terms"),
    None => panic!(
      "arg_uvars not set up right: {v:?} is not a bare argument of any trigger term; \
       Axiom::new computes trig_arg_vars specifically to prevent this"
    ),
  };

  let ind = args
    .iter()
    .position(|a| matches!(&*a.term, Term::UVar(v2) if *v2 == v))
    .expect("occurs_as_arg guarantees a matching position");
  let c = args[ind].coeff.clone();
  let arity = args.len();

  let mut candidates: Vec<(Rational, IVarIndex)> = Vec::new();
  for i in 0..b.num_terms() {
    if let Term::App(dname, dargs) = b.term_def(IVarIndex(i)) {
      if *dname == name && dargs.len() == arity {
        if let Term::IVar(j) = &*dargs[ind].term {
          candidates.push((&dargs[ind].coeff / &c, *j));
        }
      }
    }
  }

  let remaining_uvars: Vec<UVarIndex> = uvars.iter().copied().filter(|v0| *v0 != v).collect();

  let mut nenvs = Vec::new();
  for (coeff, j) in candidates {
    let mut closed_terms = Vec::new();
    let mut open_terms = Vec::new();
    for t in termlist {
      let (s, closed) = substitute(t, v, coeff.clone(), j);
      if closed {
        closed_terms.push(s);
      } else {
        open_terms.push(s);
      }
    }

    // The matched values of the closed terms aren't needed again here — only their existence as
    // named problem terms matters, to rule this candidate out if any of them isn't one.
    if closed_terms.iter().any(|ct| find_problem_term(b, &ct.term).is_err()) {
      continue;
    }

    let cenvs: Vec<Env> = envs
      .iter()
      .map(|e| {
        let mut e = e.clone();
        e.push((v, (coeff.clone(), j)));
        e
      })
      .collect();

    let open_term_values: Vec<Term> = open_terms.into_iter().map(|s| (*s.term).clone()).collect();
    let maps = unify(b, &open_term_values, &remaining_uvars, &arg_uvars[1..], &cenvs);
    nenvs.extend(maps);
  }

  nenvs
}
