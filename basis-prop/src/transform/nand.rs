/*! Defines formulae over the single negated-conjunction connective and implements the
transformation of a [`Prop`] into such a formula.

[`Prop`]: crate::syntax::Prop
*/
use super::{Basis, Error, NotAndOr, ToNotAndOr};
use crate::{
    syntax::{formula::*, BinaryOp, Operator, Prop, Var},
    trace::REDUCE,
};
use std::{collections::BTreeSet, convert::TryFrom, fmt};

/// Represents a formula whose only connective is the negated conjunction (↑).
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum NandOnly {
    /// Is a propositional variable, wrapping a [`Var`].
    Var(Var),

    /// Is the negated conjunction of two formulae, wrapping a [`Nand`].
    Nand(Box<Nand<NandOnly>>),
}

impl From<Var> for NandOnly {
    fn from(value: Var) -> Self {
        Self::Var(value)
    }
}

impl From<Nand<NandOnly>> for NandOnly {
    fn from(value: Nand<NandOnly>) -> Self {
        Self::Nand(Box::new(value))
    }
}

/// Is the trait of [`Formula`] types that can be transformed to [`NandOnly`].
pub trait ToNandOnly: Formula {
    /// Transforms `self` to an equivalent formula whose only connective is `↑`. A formula
    /// that is already over `↑` is returned unchanged.
    ///
    /// **Example**:
    /// ```rust
    /// # use basis_prop::syntax::Prop;
    /// use basis_prop::transform::ToNandOnly;
    ///
    /// let formula: Prop = "(p|~q)".parse().unwrap();
    /// assert_eq!(
    ///     "((p ↑ p) ↑ ((q ↑ q) ↑ (q ↑ q)))",
    ///     formula.nand_only().to_string()
    /// );
    /// ```
    fn nand_only(&self) -> NandOnly;
}

impl ToNandOnly for Prop {
    fn nand_only(&self) -> NandOnly {
        debug!(event = REDUCE, basis = %Basis::Nand, formula = ?self);
        if Basis::Nand.admits(self) {
            return lower(self.clone());
        }
        nand_only(self.not_and_or())
    }
}

impl TryFrom<Prop> for NandOnly {
    type Error = Error;

    fn try_from(value: Prop) -> Result<Self, Self::Error> {
        if Basis::Nand.admits(&value) {
            Ok(lower(value))
        } else {
            Err(Error::NotInBasis {
                formula: value,
                basis: Basis::Nand,
            })
        }
    }
}

impl NandOnly {
    #[inline(always)]
    fn nand(self, other: Self) -> Self {
        Nand {
            left: self,
            right: other,
        }
        .into()
    }

    // Negation is the negated conjunction of a formula with itself.
    fn negate(self) -> Self {
        self.clone().nand(self)
    }
}

impl Formula for NandOnly {
    fn variables(&self) -> BTreeSet<&Var> {
        match self {
            Self::Var(this) => std::iter::once(this).collect(),
            Self::Nand(this) => this.variables(),
        }
    }

    fn operators(&self) -> BTreeSet<Operator> {
        match self {
            Self::Var(_) => BTreeSet::new(),
            Self::Nand(this) => this.operators(),
        }
    }
}

impl From<NandOnly> for Prop {
    fn from(value: NandOnly) -> Self {
        match value {
            NandOnly::Var(this) => this.into(),
            NandOnly::Nand(this) => Prop::from(this.left).nand(this.right.into()),
        }
    }
}

impl From<&NandOnly> for Prop {
    fn from(value: &NandOnly) -> Self {
        value.clone().into()
    }
}

impl fmt::Display for NandOnly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Prop::from(self), f)
    }
}

impl fmt::Debug for NandOnly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&Prop::from(self), f)
    }
}

fn nand_only(formula: NotAndOr) -> NandOnly {
    match formula {
        NotAndOr::Var(this) => this.into(),
        NotAndOr::Not(this) => nand_only(this.formula).negate(),
        NotAndOr::And(this) => {
            let And { left, right } = *this;
            nand_only(left).nand(nand_only(right)).negate()
        }
        NotAndOr::Or(this) => {
            let Or { left, right } = *this;
            nand_only(left).negate().nand(nand_only(right).negate())
        }
    }
}

fn lower(formula: Prop) -> NandOnly {
    match formula {
        Prop::Var(this) => this.into(),
        Prop::Binary(this) => {
            let Binary { op, left, right } = *this;
            match op {
                BinaryOp::Nand => lower(left).nand(lower(right)),
                _ => unreachable!(), // `formula` is in the basis
            }
        }
        Prop::Not(_) | Prop::Top | Prop::Bottom => unreachable!(), // `formula` is in the basis
    }
}
