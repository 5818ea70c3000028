/*! Defines formulae over implication and negation and implements the transformation of a
[`Prop`] into such a formula.

[`Prop`]: crate::syntax::Prop
*/
use super::{Basis, Error, NotAndOr, ToNotAndOr};
use crate::{
    syntax::{formula::*, BinaryOp, Operator, Prop, Var},
    trace::REDUCE,
};
use std::{collections::BTreeSet, convert::TryFrom, fmt};

/// Represents a formula whose only connectives are implication (→) and negation (¬).
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum ImpliesNot {
    /// Is a propositional variable, wrapping a [`Var`].
    Var(Var),

    /// Is the negation of a formula, wrapping a [`Not`].
    Not(Box<Not<ImpliesNot>>),

    /// Is an implication between two formulae, wrapping an [`Implies`].
    Implies(Box<Implies<ImpliesNot>>),
}

impl From<Var> for ImpliesNot {
    fn from(value: Var) -> Self {
        Self::Var(value)
    }
}

impl From<Not<ImpliesNot>> for ImpliesNot {
    fn from(value: Not<ImpliesNot>) -> Self {
        Self::Not(Box::new(value))
    }
}

impl From<Implies<ImpliesNot>> for ImpliesNot {
    fn from(value: Implies<ImpliesNot>) -> Self {
        Self::Implies(Box::new(value))
    }
}

/// Is the trait of [`Formula`] types that can be transformed to [`ImpliesNot`].
pub trait ToImpliesNot: Formula {
    /// Transforms `self` to an equivalent formula over implication and negation.
    ///
    /// **Example**:
    /// ```rust
    /// # use basis_prop::syntax::Prop;
    /// use basis_prop::transform::ToImpliesNot;
    ///
    /// let formula: Prop = "(p&(q|r))".parse().unwrap();
    /// assert_eq!("¬(p → ¬(¬q → r))", formula.implies_not().to_string());
    /// ```
    fn implies_not(&self) -> ImpliesNot;
}

impl ToImpliesNot for Prop {
    fn implies_not(&self) -> ImpliesNot {
        debug!(event = REDUCE, basis = %Basis::ImpliesNot, formula = ?self);
        implies_not(self.not_and_or())
    }
}

impl TryFrom<Prop> for ImpliesNot {
    type Error = Error;

    fn try_from(value: Prop) -> Result<Self, Self::Error> {
        if Basis::ImpliesNot.admits(&value) {
            Ok(lower(value))
        } else {
            Err(Error::NotInBasis {
                formula: value,
                basis: Basis::ImpliesNot,
            })
        }
    }
}

impl ImpliesNot {
    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    fn not(formula: Self) -> Self {
        Not { formula }.into()
    }

    #[inline(always)]
    fn implies(self, other: Self) -> Self {
        Implies {
            premise: self,
            consequence: other,
        }
        .into()
    }
}

impl Formula for ImpliesNot {
    fn variables(&self) -> BTreeSet<&Var> {
        match self {
            Self::Var(this) => std::iter::once(this).collect(),
            Self::Not(this) => this.variables(),
            Self::Implies(this) => this.variables(),
        }
    }

    fn operators(&self) -> BTreeSet<Operator> {
        match self {
            Self::Var(_) => BTreeSet::new(),
            Self::Not(this) => this.operators(),
            Self::Implies(this) => this.operators(),
        }
    }
}

impl From<ImpliesNot> for Prop {
    fn from(value: ImpliesNot) -> Self {
        match value {
            ImpliesNot::Var(this) => this.into(),
            ImpliesNot::Not(this) => Prop::not(this.formula.into()),
            ImpliesNot::Implies(this) => {
                Prop::from(this.premise).implies(this.consequence.into())
            }
        }
    }
}

impl From<&ImpliesNot> for Prop {
    fn from(value: &ImpliesNot) -> Self {
        value.clone().into()
    }
}

impl fmt::Display for ImpliesNot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Prop::from(self), f)
    }
}

impl fmt::Debug for ImpliesNot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&Prop::from(self), f)
    }
}

fn implies_not(formula: NotAndOr) -> ImpliesNot {
    match formula {
        NotAndOr::Var(this) => this.into(),
        NotAndOr::Not(this) => ImpliesNot::not(implies_not(this.formula)),
        NotAndOr::And(this) => {
            let And { left, right } = *this;
            let right = ImpliesNot::not(implies_not(right));
            ImpliesNot::not(implies_not(left).implies(right))
        }
        NotAndOr::Or(this) => {
            let Or { left, right } = *this;
            ImpliesNot::not(implies_not(left)).implies(implies_not(right))
        }
    }
}

fn lower(formula: Prop) -> ImpliesNot {
    match formula {
        Prop::Var(this) => this.into(),
        Prop::Not(this) => ImpliesNot::not(lower(this.formula)),
        Prop::Binary(this) => {
            let Binary { op, left, right } = *this;
            match op {
                BinaryOp::Implies => lower(left).implies(lower(right)),
                _ => unreachable!(), // `formula` is in the basis
            }
        }
        Prop::Top | Prop::Bottom => unreachable!(), // `formula` is in the basis
    }
}
