/*!

Polya is a heuristic decision procedure for nonlinear arithmetic over the ordered reals extended
with uninterpreted function symbols. This crate implements the *axiom-instantiation engine*: given
universally-quantified axioms and a shared [`Blackboard`](blackboard::Blackboard) of known term
facts, it discovers instantiations of each axiom whose trigger terms can be identified with existing
problem terms, and asserts the resulting ground clauses back to the blackboard.

The crate is deliberately narrow. It does not perform sign inference, additive/multiplicative
saturation, CNF conversion, or provide a solver driver or CLI — those are external collaborators
that consume and populate a `Blackboard` implementation. See the `Blackboard` trait for the exact
contract this crate relies on.

# Layout

- [`term`] — the canonicalized term algebra (C1): `Term`, `Scaled`, `MulPair`, `TermKey`,
  `Comparison`.
- [`rational`] — exact rational/integer type aliases used throughout (C6 support).
- [`blackboard`] — the `Blackboard` trait this crate consumes (C2).
- [`matcher`] — `find_problem_term`, the term-matching procedure (C3).
- [`linalg`] — vector and Fourier-Motzkin pivot primitives (C6).
- [`unify`] — the trigger-unification procedure (C4).
- [`axiom`] — `Axiom` and `FunctionModule`, the axiom-instantiation driver (C5).
- [`error`] — `NoTerm` (internal) and `Contradiction` (public) error types (C8).

*/
#![allow(unused)]

pub mod abstractions;
pub mod rational;
pub mod term;
pub mod blackboard;
pub mod linalg;
pub mod matcher;
pub mod unify;
pub mod axiom;
pub mod error;

pub use crate::{
  term::{Term, Scaled, MulPair, TermKey, Comparison, CompOp},
  blackboard::{Blackboard, EqualityFact, IVarIndex, UVarIndex},
  axiom::{Axiom, FunctionModule},
  error::Contradiction,
  rational::Rational,
};
