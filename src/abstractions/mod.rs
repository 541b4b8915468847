#![allow(unused)]

// A fast hash map, used for term-name interning caches in test/example blackboards.
pub use rustc_hash::FxHashMap as HashMap;
pub use rustc_hash::FxHashSet as HashSet;

use ustr::Ustr;
/// Interned strings. Create an interned string with `IString::from(..)`.
pub type IString = Ustr;
