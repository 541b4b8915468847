/*!

Substitution of unification-variable bindings into trigger terms, used by the unifier (C4) while
testing candidate environments and by the axiom module (C5) while reducing literals. This duplicates
a little of `canonize`'s structural recursion but additionally tracks whether every `UVar` occurrence
was resolved, which the unifier needs to distinguish "closed" terms (ready for matching) from "open"
ones (needing further binding).

*/

use std::rc::Rc;

use crate::{
  rational::{Rational, int},
  blackboard::{IVarIndex, UVarIndex},
  term::{Term, Scaled},
};

/// A (partial) map from `UVar` index to the `(coefficient, IVar index)` pair it's bound to. A flat
/// sorted `Vec` rather than a hash map: axiom variable counts are small (reference axioms never
/// exceed a handful), matching the teacher's own preference for flat structures over maps in small,
/// hot collections.
pub type Env = Vec<(UVarIndex, (Rational, IVarIndex))>;

fn env_lookup(env: &Env, v: UVarIndex) -> Option<(Rational, IVarIndex)> {
  env.iter().find(|(k, _)| *k == v).map(|(_, val)| val.clone())
}

/// Replaces all instances of `UVar(u_index)` in `term` with `coeff * IVar(i_index)`.
pub fn substitute(term: &Term, u_index: UVarIndex, coeff: Rational, i_index: IVarIndex) -> (Scaled, bool) {
  reduce_term(term, &vec![(u_index, (coeff, i_index))])
}

/// Replaces every `UVar` bound in `env` with its designated value. Returns the resulting `Scaled`
/// plus a flag: `true` iff every `UVar` occurrence in `term` was resolved by `env`.
pub fn reduce_term(term: &Term, env: &Env) -> (Scaled, bool) {
  match term {
    Term::UVar(v) => {
      if let Some((c, j)) = env_lookup(env, *v) {
        (Scaled::new(c, Term::ivar(j)), true)
      } else {
        (Scaled::new(int(1), Rc::new(term.clone())), false)
      }
    }

    Term::One | Term::Var(_) | Term::IVar(_) => {
      (Scaled::new(int(1), Rc::new(term.clone())), true)
    }

    Term::Add(args) => {
      let mut flag = true;
      let mut acc = Scaled::new(int(0), Term::one());
      for a in args {
        let (s, f) = reduce_term(&a.term, env);
        flag = flag && f;
        acc = acc + Scaled::new(&a.coeff * &s.coeff, s.term);
      }
      (acc, flag)
    }

    Term::Mul(args) => {
      let mut flag = true;
      let mut acc = Scaled::new(int(1), Term::one());
      for p in args {
        let (s, f) = reduce_term(&p.term, env);
        flag = flag && f;
        acc = acc * s.pow(p.exponent);
      }
      (acc, flag)
    }

    Term::App(name, args) => {
      let mut flag = true;
      let mut nargs = Vec::with_capacity(args.len());
      for a in args {
        let (s, f) = reduce_term(&a.term, env);
        flag = flag && f;
        nargs.push(Scaled::new(&a.coeff * &s.coeff, s.term));
      }
      (Scaled::new(int(1), Term::app(*name, nargs)), flag)
    }

    Term::Abs(arg) => {
      let (s, flag) = reduce_term(arg, env);
      (s.abs_builder(), flag)
    }

    Term::Min(args) => {
      let mut flag = true;
      let mut nargs = Vec::with_capacity(args.len());
      for a in args {
        let (s, f) = reduce_term(&a.term, env);
        flag = flag && f;
        nargs.push(Scaled::new(&a.coeff * &s.coeff, s.term));
      }
      (Scaled::new(int(1), Rc::new(Term::Min(nargs))), flag)
    }
  }
}
