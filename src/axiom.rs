/*!

The axiom module (C5): `Axiom` packages a universally-quantified clause's trigger terms and literals;
`FunctionModule` drives instantiation, turning each axiom into ground clauses asserted back to the
[`Blackboard`] via [`unify`] and [`find_problem_term`](crate::matcher::find_problem_term).

CNF conversion from a general first-order formula into `Axiom`s is out of scope for this crate — it
assumes axioms have already been skolemized and clausified by an external formula layer, and
constructs `Axiom` values directly from their triggers and literals.

*/

use crate::{
  blackboard::{Blackboard, IVarIndex, UVarIndex},
  error::Contradiction,
  matcher::find_problem_term,
  rational::Rational,
  term::{reduce_term, Comparison, Env, Scaled, Term},
  unify::{occurs_as_arg, unify},
};

/// A universally-quantified axiom clause, ready for instantiation.
#[derive(Clone, Debug)]
pub struct Axiom {
  /// All `UVar`s bound by this axiom.
  pub vars: Vec<UVarIndex>,
  /// The trigger terms — function applications whose arguments mention `vars` — that drive
  /// unification.
  pub triggers: Vec<Term>,
  /// The subset of `vars` that occur alone as an argument in some trigger, in the order unification
  /// should resolve them. Computed automatically from `vars` and `triggers`.
  pub trig_arg_vars: Vec<UVarIndex>,
  /// The disjunctive clause's literals, with `UVar`s from `vars` standing for the bound variables.
  pub literals: Vec<Comparison>,
}

impl Axiom {
  pub fn new(vars: Vec<UVarIndex>, triggers: Vec<Term>, literals: Vec<Comparison>) -> Self {
    let trig_arg_vars = vars
      .iter()
      .copied()
      .filter(|v| triggers.iter().any(|t| occurs_as_arg(t, *v)))
      .collect();
    Axiom { vars, triggers, trig_arg_vars, literals }
  }
}

/// Resolves one side of a literal under `env`, then identifies it with a named problem term,
/// interning a fresh one if no match is found (C5's "every literal becomes ground" guarantee).
fn reduce_side(b: &mut dyn Blackboard, side: &Scaled, env: &Env) -> (Rational, IVarIndex) {
  let (reduced, _closed) = reduce_term(&side.term, env);
  let combined = Scaled::new(&side.coeff * &reduced.coeff, reduced.term).canonize();
  match find_problem_term(&*b, &combined.term) {
    Ok((c, i)) => (&c * &combined.coeff, i),
    Err(_) => {
      let i = b.term_name(&combined.term);
      (combined.coeff.clone(), i)
    }
  }
}

/// Instantiates `axiom` against `b`: finds every environment unifying its triggers with named
/// problem terms, and for each, reduces its literals to ground comparisons between `IVar`s. Caps the
/// number of environments considered at `max_environments`, logging when the cap is hit.
pub fn instantiate(axiom: &Axiom, b: &mut dyn Blackboard, max_environments: Option<usize>) -> Vec<Vec<Comparison>> {
  let initial = vec![Env::new()];
  let mut envs = unify(&*b, &axiom.triggers, &axiom.vars, &axiom.trig_arg_vars, &initial);

  if let Some(cap) = max_environments {
    if envs.len() > cap {
      tracing::warn!(found = envs.len(), cap, "truncating axiom environments at configured cap");
      envs.truncate(cap);
    }
  }

  tracing::trace!(count = envs.len(), "instantiating axiom over environments");

  let mut clauses = Vec::with_capacity(envs.len());
  for env in &envs {
    let literals = axiom
      .literals
      .iter()
      .map(|lit| {
        let (l_coeff, l_index) = reduce_side(b, &lit.term1, env);
        let (r_coeff, r_index) = reduce_side(b, &lit.term2, env);
        Comparison::new(Scaled::new(l_coeff, Term::ivar(l_index)), lit.comp, Scaled::new(r_coeff, Term::ivar(r_index)))
      })
      .collect();
    clauses.push(literals);
  }
  clauses
}

/// Holds a set of axioms and drives their repeated instantiation against a [`Blackboard`].
#[derive(Clone, Debug, Default)]
pub struct FunctionModule {
  axioms: Vec<Axiom>,
  max_environments_per_axiom: Option<usize>,
}

impl FunctionModule {
  pub fn new(axioms: Vec<Axiom>) -> Self {
    FunctionModule { axioms, max_environments_per_axiom: None }
  }

  /// Bounds how many unification environments an axiom may instantiate to, guarding against
  /// combinatorial blowup from axioms whose triggers admit many matches.
  pub fn with_max_environments_per_axiom(mut self, cap: usize) -> Self {
    self.max_environments_per_axiom = Some(cap);
    self
  }

  pub fn add_axiom(&mut self, axiom: Axiom) {
    self.axioms.push(axiom);
  }

  /// Instantiates every held axiom against `b` and asserts the resulting clauses. Stops at the
  /// first contradiction `b` reports.
  pub fn update(&mut self, b: &mut dyn Blackboard) -> Result<(), Contradiction> {
    let _span = tracing::debug_span!("function_module_update", axioms = self.axioms.len()).entered();
    for (i, axiom) in self.axioms.iter().enumerate() {
      let _span = tracing::debug_span!("instantiate_axiom", index = i).entered();
      let clauses = instantiate(axiom, b, self.max_environments_per_axiom);
      for clause in clauses {
        b.assert_clause(&clause)?;
      }
    }
    Ok(())
  }
}
