/*! Implements transformations of propositional formulae into equivalent formulae over
restricted bases of operators.

Every transformation first eliminates the derived operators and constants of its input,
leaving a [`NotAndOr`], and then rewrites that formula structurally into its target basis.

[`NotAndOr`]: crate::transform::NotAndOr
*/
mod basis;
mod implies_false;
mod implies_not;
mod nand;
mod not_and;
mod not_and_or;
mod substitution;

pub use basis::Basis;
pub use implies_false::{ImpliesFalse, ToImpliesFalse};
pub use implies_not::{ImpliesNot, ToImpliesNot};
pub use nand::{NandOnly, ToNandOnly};
pub use not_and::{NotAnd, ToNotAnd};
pub use not_and_or::{NotAndOr, ToNotAndOr};
pub use substitution::{OperatorRules, VarSubstitution};

use crate::syntax::Prop;
use thiserror::Error;

/// Is the type of errors arising from inconsistencies when converting between formula types.
#[derive(Error, Debug)]
pub enum Error {
    /// Is returned when a [`Prop`] is forced into a formula type whose basis it is not in.
    #[error("formula `{}` is not in the `{}` basis", .formula.to_string(), .basis)]
    NotInBasis { formula: Prop, basis: Basis },
}
