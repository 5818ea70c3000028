/*! Provides a set of tools for parsing propositional formulae, evaluating them by truth tables,
and rewriting them into equivalent formulae over restricted bases of operators. */
#[macro_use]
extern crate lalrpop_util;
#[macro_use]
extern crate tracing;

pub mod parser;
pub mod semantics;
pub mod syntax;
#[cfg(test)]
pub mod test_macros;
pub mod trace;
pub mod transform;
