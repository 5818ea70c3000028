/*! Defines formulae over negation and conjunction and implements the transformation of a
[`Prop`] into such a formula.

[`Prop`]: crate::syntax::Prop
*/
use super::{Basis, Error, NotAndOr, ToNotAndOr};
use crate::{
    syntax::{formula::*, BinaryOp, Operator, Prop, Var},
    trace::REDUCE,
};
use std::{collections::BTreeSet, convert::TryFrom, fmt};

/// Represents a formula whose only connectives are negation (¬) and conjunction (∧).
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum NotAnd {
    /// Is a propositional variable, wrapping a [`Var`].
    Var(Var),

    /// Is the negation of a formula, wrapping a [`Not`].
    Not(Box<Not<NotAnd>>),

    /// Is a conjunction of two formulae, wrapping an [`And`].
    And(Box<And<NotAnd>>),
}

impl From<Var> for NotAnd {
    fn from(value: Var) -> Self {
        Self::Var(value)
    }
}

impl From<Not<NotAnd>> for NotAnd {
    fn from(value: Not<NotAnd>) -> Self {
        Self::Not(Box::new(value))
    }
}

impl From<And<NotAnd>> for NotAnd {
    fn from(value: And<NotAnd>) -> Self {
        Self::And(Box::new(value))
    }
}

/// Is the trait of [`Formula`] types that can be transformed to [`NotAnd`].
pub trait ToNotAnd: Formula {
    /// Transforms `self` to an equivalent formula over negation and conjunction.
    ///
    /// **Example**:
    /// ```rust
    /// # use basis_prop::syntax::Prop;
    /// use basis_prop::transform::ToNotAnd;
    ///
    /// let formula: Prop = "(p|(q&r))".parse().unwrap();
    /// assert_eq!("¬(¬p ∧ ¬(q ∧ r))", formula.not_and().to_string());
    /// ```
    fn not_and(&self) -> NotAnd;
}

impl ToNotAnd for Prop {
    fn not_and(&self) -> NotAnd {
        debug!(event = REDUCE, basis = %Basis::NotAnd, formula = ?self);
        not_and(self.not_and_or())
    }
}

impl TryFrom<Prop> for NotAnd {
    type Error = Error;

    fn try_from(value: Prop) -> Result<Self, Self::Error> {
        if Basis::NotAnd.admits(&value) {
            Ok(lower(value))
        } else {
            Err(Error::NotInBasis {
                formula: value,
                basis: Basis::NotAnd,
            })
        }
    }
}

impl NotAnd {
    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    fn not(formula: Self) -> Self {
        Not { formula }.into()
    }

    #[inline(always)]
    fn and(self, other: Self) -> Self {
        And {
            left: self,
            right: other,
        }
        .into()
    }
}

impl Formula for NotAnd {
    fn variables(&self) -> BTreeSet<&Var> {
        match self {
            Self::Var(this) => std::iter::once(this).collect(),
            Self::Not(this) => this.variables(),
            Self::And(this) => this.variables(),
        }
    }

    fn operators(&self) -> BTreeSet<Operator> {
        match self {
            Self::Var(_) => BTreeSet::new(),
            Self::Not(this) => this.operators(),
            Self::And(this) => this.operators(),
        }
    }
}

impl From<NotAnd> for Prop {
    fn from(value: NotAnd) -> Self {
        match value {
            NotAnd::Var(this) => this.into(),
            NotAnd::Not(this) => Prop::not(this.formula.into()),
            NotAnd::And(this) => Prop::from(this.left).and(this.right.into()),
        }
    }
}

impl From<&NotAnd> for Prop {
    fn from(value: &NotAnd) -> Self {
        value.clone().into()
    }
}

impl fmt::Display for NotAnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Prop::from(self), f)
    }
}

impl fmt::Debug for NotAnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&Prop::from(self), f)
    }
}

fn not_and(formula: NotAndOr) -> NotAnd {
    match formula {
        NotAndOr::Var(this) => this.into(),
        NotAndOr::Not(this) => NotAnd::not(not_and(this.formula)),
        NotAndOr::And(this) => {
            let And { left, right } = *this;
            not_and(left).and(not_and(right))
        }
        NotAndOr::Or(this) => {
            let Or { left, right } = *this;
            let left = NotAnd::not(not_and(left));
            let right = NotAnd::not(not_and(right));
            NotAnd::not(left.and(right))
        }
    }
}

fn lower(formula: Prop) -> NotAnd {
    match formula {
        Prop::Var(this) => this.into(),
        Prop::Not(this) => NotAnd::not(lower(this.formula)),
        Prop::Binary(this) => {
            let Binary { op, left, right } = *this;
            match op {
                BinaryOp::And => lower(left).and(lower(right)),
                _ => unreachable!(), // `formula` is in the basis
            }
        }
        Prop::Top | Prop::Bottom => unreachable!(), // `formula` is in the basis
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_debug_string, assert_equivalent, prop};

    fn not_and(formula: &Prop) -> Prop {
        formula.not_and().into()
    }

    #[test]
    fn test_not_and() {
        assert_debug_string!("p", not_and(&prop!("p")));
        assert_debug_string!("~q", not_and(&prop!("~q")));
        assert_debug_string!("~~q", not_and(&prop!("~~q")));
        assert_debug_string!("(p&q)", not_and(&prop!("(p&q)")));
        assert_debug_string!("~(~p&~q)", not_and(&prop!("(p|q)")));
        assert_debug_string!("~(~~p&~q)", not_and(&prop!("(p->q)")));
        assert_debug_string!("~(~p&~~p)", not_and(&prop!("T")));
        assert_debug_string!("(p&~p)", not_and(&prop!("F")));
        assert_debug_string!("~(p&q)", not_and(&prop!("(p-&q)")));
        assert_debug_string!("~~(~p&~q)", not_and(&prop!("(p-|q)")));
    }

    #[test]
    fn test_not_and_iff() {
        let formula = prop!("(p<->q)");
        let reduced = not_and(&formula);
        assert_debug_string!("~(~(p&q)&~(~p&~q))", reduced);
        assert!(Basis::NotAnd.admits(&reduced));
        assert_equivalent!(formula, reduced);
    }

    #[test]
    fn test_not_and_nested() {
        let formula = prop!("(((p|q)|r)&~(s|p))");
        assert_debug_string!(
            "(~(~~(~p&~q)&~r)&~~(~s&~p))",
            not_and(&formula)
        );
        assert_equivalent!(formula, not_and(&formula));
    }

    #[test]
    fn test_not_and_basis() {
        let formula = prop!("((p+q)->(r-|(T<->s)))");
        let reduced = formula.not_and();
        assert!(reduced.operators().is_subset(&Basis::NotAnd.operators()));
        assert!(!reduced.operators().contains(&Operator::OR));
        assert_equivalent!(formula, reduced);
    }

    #[test]
    fn test_not_and_try_from() {
        let formula = prop!("~(p&~q)");
        assert_eq!(
            formula.clone(),
            Prop::from(NotAnd::try_from(formula).unwrap())
        );
        assert_eq!(
            "formula `(p ∨ q)` is not in the `not-and` basis",
            NotAnd::try_from(prop!("(p|q)")).err().unwrap().to_string()
        );
    }

    #[test]
    fn test_not_and_to_string() {
        let formula = prop!("(p|q)").not_and();
        assert_eq!("¬(¬p ∧ ¬q)", formula.to_string());
        assert_debug_string!("~(~p&~q)", formula);
    }
}
