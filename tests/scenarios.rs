//! Axiom-instantiation-level tests for the reference's end-to-end scenarios (§8 of the design
//! document). The arithmetic-saturation collaborator that would turn these into full contradictions
//! is out of scope for this crate (see the crate's top-level docs), so these tests check that the
//! right ground clause gets asserted against a `MockBlackboard`, not that a solver derives UNSAT.
//! S1 is pure arithmetic with no axioms and is out of scope entirely.

mod common;

use common::MockBlackboard;
use polya::rational::int;
use polya::{Axiom, Blackboard, Comparison, CompOp, FunctionModule, Scaled, Term, UVarIndex};

fn var(name: &str) -> Term {
  Term::Var(name.into())
}

fn lit_matches(lit: &Comparison, comp: CompOp, i: polya::IVarIndex, j: polya::IVarIndex) -> bool {
  lit.comp == comp
    && matches!(&*lit.term1.term, Term::IVar(a) if *a == i)
    && lit.term1.coeff == int(1)
    && matches!(&*lit.term2.term, Term::IVar(b) if *b == j)
    && lit.term2.coeff == int(1)
}

/// S2: `x < y` and `∀u v. u < v ⇒ f(u) < f(v)`, together with `f(x) > f(y)`, are jointly
/// unsatisfiable. At the instantiation level: binding `u = x, v = y` must produce the ground clause
/// `x ≥ y ∨ f(x) < f(y)`, which together with the hypotheses `x < y` and `f(x) > f(y)` is the
/// contradiction (derived by the out-of-scope arithmetic collaborator, not this crate).
#[test]
fn s2_monotonic_function_axiom_instantiates_expected_clause() {
  let mut b = MockBlackboard::new();
  let x = b.define(var("x"));
  let y = b.define(var("y"));
  let fx = b.define(Term::App("f".into(), vec![Scaled::new(int(1), Term::ivar(x))]));
  let fy = b.define(Term::App("f".into(), vec![Scaled::new(int(1), Term::ivar(y))]));

  let u = UVarIndex(0);
  let v = UVarIndex(1);
  let trig_u = Term::App("f".into(), vec![Scaled::new(int(1), Term::uvar(u))]);
  let trig_v = Term::App("f".into(), vec![Scaled::new(int(1), Term::uvar(v))]);

  // Clausified form of `u < v => f(u) < f(v)`: `u >= v \/ f(u) < f(v)`.
  let literals = vec![
    Comparison::new(Scaled::new(int(1), Term::uvar(u)), CompOp::Ge, Scaled::new(int(1), Term::uvar(v))),
    Comparison::new(
      Scaled::new(int(1), Term::app("f", vec![Scaled::new(int(1), Term::uvar(u))])),
      CompOp::Lt,
      Scaled::new(int(1), Term::app("f", vec![Scaled::new(int(1), Term::uvar(v))])),
    ),
  ];
  let axiom = Axiom::new(vec![u, v], vec![trig_u, trig_v], literals);

  let mut fm = FunctionModule::new(Vec::new());
  fm.add_axiom(axiom);
  fm.update(&mut b).expect("the mock blackboard never reports a contradiction");

  let found = b.asserted.iter().any(|clause| {
    clause.len() == 2 && lit_matches(&clause[0], CompOp::Ge, x, y) && lit_matches(&clause[1], CompOp::Lt, fx, fy)
  });
  assert!(found, "expected the u=x, v=y instantiation among asserted clauses: {:#?}", b.asserted);
}

/// S4: `∀u v. f(u·v) = f(u)·f(v)`, applied with `u = x, v = y`, instantiates a ground equality
/// between `f(x·y)` and `f(x)·f(y)` once both sides are named problem terms.
#[test]
fn s4_multiplicative_homomorphism_axiom_instantiates_expected_clause() {
  let mut b = MockBlackboard::new();
  let x = b.define(var("x"));
  let y = b.define(var("y"));
  let xy = b.define(Term::Mul(vec![polya::MulPair::new(Term::ivar(x), 1), polya::MulPair::new(Term::ivar(y), 1)]));
  let fxy = b.define(Term::App("f".into(), vec![Scaled::new(int(1), Term::ivar(xy))]));
  let fx = b.define(Term::App("f".into(), vec![Scaled::new(int(1), Term::ivar(x))]));
  let fy = b.define(Term::App("f".into(), vec![Scaled::new(int(1), Term::ivar(y))]));

  let u = UVarIndex(0);
  let v = UVarIndex(1);
  let trig_u = Term::App("f".into(), vec![Scaled::new(int(1), Term::uvar(u))]);
  let trig_v = Term::App("f".into(), vec![Scaled::new(int(1), Term::uvar(v))]);

  let uv_term = Term::Mul(vec![polya::MulPair::new(Term::uvar(u), 1), polya::MulPair::new(Term::uvar(v), 1)]);
  let literals = vec![Comparison::new(
    Scaled::new(int(1), Term::app("f", vec![Scaled::new(int(1), std::rc::Rc::new(uv_term))])),
    CompOp::Eq,
    Scaled::new(
      int(1),
      Term::Mul(vec![
        polya::MulPair::new(Term::app("f", vec![Scaled::new(int(1), Term::uvar(u))]), 1),
        polya::MulPair::new(Term::app("f", vec![Scaled::new(int(1), Term::uvar(v))]), 1),
      ])
      .into(),
    ),
  )];
  let axiom = Axiom::new(vec![u, v], vec![trig_u, trig_v], literals);

  let mut fm = FunctionModule::new(Vec::new());
  fm.add_axiom(axiom);
  fm.update(&mut b).expect("the mock blackboard never reports a contradiction");

  let found = b.asserted.iter().any(|clause| {
    clause.len() == 1 && lit_matches(&clause[0], CompOp::Eq, fxy, b.has_name(&Term::Mul(vec![
      polya::MulPair::new(Term::ivar(fx), 1),
      polya::MulPair::new(Term::ivar(fy), 1),
    ])).unwrap_or(polya::IVarIndex(usize::MAX)))
  });
  assert!(found, "expected f(x*y) = f(x)*f(y) among asserted clauses: {:#?}", b.asserted);
}
