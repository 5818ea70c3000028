/*! Defines an abstract syntax tree (AST) for propositional formulae. */

pub mod formula;
mod macros;
mod prop;
mod symbol;
mod theory;

pub use formula::Formula;
pub use prop::Prop;
pub use symbol::{BinaryOp, Operator, Var, PLACEHOLDERS};
pub use theory::Theory;
