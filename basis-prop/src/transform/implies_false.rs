/*! Defines formulae over implication and falsehood and implements the transformation of a
[`Prop`] into such a formula.

[`Prop`]: crate::syntax::Prop
*/
use super::{Basis, Error, NotAndOr, ToNotAndOr};
use crate::{
    syntax::{formula::*, BinaryOp, Operator, Prop, Var},
    trace::REDUCE,
};
use std::{collections::BTreeSet, convert::TryFrom, fmt};

/// Represents a formula whose only connective is implication (→) and whose only constant is
/// falsehood (⟘).
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum ImpliesFalse {
    /// Is logical falsehood (⟘).
    Bottom,

    /// Is a propositional variable, wrapping a [`Var`].
    Var(Var),

    /// Is an implication between two formulae, wrapping an [`Implies`].
    Implies(Box<Implies<ImpliesFalse>>),
}

impl From<Var> for ImpliesFalse {
    fn from(value: Var) -> Self {
        Self::Var(value)
    }
}

impl From<Implies<ImpliesFalse>> for ImpliesFalse {
    fn from(value: Implies<ImpliesFalse>) -> Self {
        Self::Implies(Box::new(value))
    }
}

/// Is the trait of [`Formula`] types that can be transformed to [`ImpliesFalse`].
pub trait ToImpliesFalse: Formula {
    /// Transforms `self` to an equivalent formula over implication and falsehood.
    ///
    /// **Example**:
    /// ```rust
    /// # use basis_prop::syntax::Prop;
    /// use basis_prop::transform::ToImpliesFalse;
    ///
    /// let formula: Prop = "(~p|q)".parse().unwrap();
    /// assert_eq!("(((p → ⟘) → ⟘) → q)", formula.implies_false().to_string());
    /// ```
    fn implies_false(&self) -> ImpliesFalse;
}

impl ToImpliesFalse for Prop {
    fn implies_false(&self) -> ImpliesFalse {
        debug!(event = REDUCE, basis = %Basis::ImpliesFalse, formula = ?self);
        implies_false(self.not_and_or())
    }
}

impl TryFrom<Prop> for ImpliesFalse {
    type Error = Error;

    fn try_from(value: Prop) -> Result<Self, Self::Error> {
        if Basis::ImpliesFalse.admits(&value) {
            Ok(lower(value))
        } else {
            Err(Error::NotInBasis {
                formula: value,
                basis: Basis::ImpliesFalse,
            })
        }
    }
}

impl ImpliesFalse {
    /// Returns `(⟘ → ⟘)`, the closed formula of the basis denoting truth.
    pub fn top() -> Self {
        Self::Bottom.implies(Self::Bottom)
    }

    #[inline(always)]
    fn implies(self, other: Self) -> Self {
        Implies {
            premise: self,
            consequence: other,
        }
        .into()
    }

    #[inline(always)]
    fn negate(self) -> Self {
        self.implies(Self::Bottom)
    }
}

impl Formula for ImpliesFalse {
    fn variables(&self) -> BTreeSet<&Var> {
        match self {
            Self::Bottom => BTreeSet::new(),
            Self::Var(this) => std::iter::once(this).collect(),
            Self::Implies(this) => this.variables(),
        }
    }

    fn operators(&self) -> BTreeSet<Operator> {
        match self {
            Self::Bottom => std::iter::once(Operator::Bottom).collect(),
            Self::Var(_) => BTreeSet::new(),
            Self::Implies(this) => this.operators(),
        }
    }
}

impl From<ImpliesFalse> for Prop {
    fn from(value: ImpliesFalse) -> Self {
        match value {
            ImpliesFalse::Bottom => Prop::Bottom,
            ImpliesFalse::Var(this) => this.into(),
            ImpliesFalse::Implies(this) => {
                Prop::from(this.premise).implies(this.consequence.into())
            }
        }
    }
}

impl From<&ImpliesFalse> for Prop {
    fn from(value: &ImpliesFalse) -> Self {
        value.clone().into()
    }
}

impl fmt::Display for ImpliesFalse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Prop::from(self), f)
    }
}

impl fmt::Debug for ImpliesFalse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&Prop::from(self), f)
    }
}

fn implies_false(formula: NotAndOr) -> ImpliesFalse {
    match formula {
        NotAndOr::Var(this) => this.into(),
        NotAndOr::Not(this) => implies_false(this.formula).negate(),
        NotAndOr::And(this) => {
            let And { left, right } = *this;
            implies_false(left)
                .implies(implies_false(right).negate())
                .negate()
        }
        NotAndOr::Or(this) => {
            let Or { left, right } = *this;
            implies_false(left).negate().implies(implies_false(right))
        }
    }
}

fn lower(formula: Prop) -> ImpliesFalse {
    match formula {
        Prop::Bottom => ImpliesFalse::Bottom,
        Prop::Var(this) => this.into(),
        Prop::Binary(this) => {
            let Binary { op, left, right } = *this;
            match op {
                BinaryOp::Implies => lower(left).implies(lower(right)),
                _ => unreachable!(), // `formula` is in the basis
            }
        }
        Prop::Not(_) | Prop::Top => unreachable!(), // `formula` is in the basis
    }
}
