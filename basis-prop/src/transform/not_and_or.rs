/*! Defines formulae over negation, conjunction and disjunction and implements the elimination
of every other operator and constant of a [`Prop`].

[`Prop`]: crate::syntax::Prop
*/
use super::{Basis, Error};
use crate::{
    syntax::{formula::*, BinaryOp, Operator, Prop, Var},
    trace::REDUCE,
};
use std::{collections::BTreeSet, collections::HashMap, convert::TryFrom, fmt};

/// Represents a formula whose only connectives are negation (¬), conjunction (∧) and
/// disjunction (∨).
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum NotAndOr {
    /// Is a propositional variable, wrapping a [`Var`].
    Var(Var),

    /// Is the negation of a formula, wrapping a [`Not`].
    Not(Box<Not<NotAndOr>>),

    /// Is a conjunction of two formulae, wrapping an [`And`].
    And(Box<And<NotAndOr>>),

    /// Is a disjunction of two formulae, wrapping an [`Or`].
    Or(Box<Or<NotAndOr>>),
}

impl From<Var> for NotAndOr {
    fn from(value: Var) -> Self {
        Self::Var(value)
    }
}

impl From<Not<NotAndOr>> for NotAndOr {
    fn from(value: Not<NotAndOr>) -> Self {
        Self::Not(Box::new(value))
    }
}

impl From<And<NotAndOr>> for NotAndOr {
    fn from(value: And<NotAndOr>) -> Self {
        Self::And(Box::new(value))
    }
}

impl From<Or<NotAndOr>> for NotAndOr {
    fn from(value: Or<NotAndOr>) -> Self {
        Self::Or(Box::new(value))
    }
}

/// Is the trait of [`Formula`] types that can be transformed to [`NotAndOr`].
pub trait ToNotAndOr: Formula {
    /// Eliminates every operator and constant of `self` other than negation, conjunction and
    /// disjunction.
    ///
    /// **Note**: The constants `⊤` and `⟘` are replaced by `(p ∨ ¬p)` and `(p ∧ ¬p)`, which
    /// mention the placeholder variable `p` regardless of the variables of `self`.
    ///
    /// **Example**:
    /// ```rust
    /// # use basis_prop::syntax::Prop;
    /// use basis_prop::transform::ToNotAndOr;
    ///
    /// let formula: Prop = "((p->q)+r)".parse().unwrap();
    /// let not_and_or = formula.not_and_or();
    ///
    /// assert_eq!(
    ///     "(((¬p ∨ q) ∧ ¬r) ∨ (¬(¬p ∨ q) ∧ r))",
    ///     not_and_or.to_string()
    /// );
    /// ```
    fn not_and_or(&self) -> NotAndOr;
}

impl ToNotAndOr for Prop {
    fn not_and_or(&self) -> NotAndOr {
        debug!(event = REDUCE, basis = %Basis::NotAndOr, formula = ?self);
        lower(self.substitute_operators(&rules()))
    }
}

impl TryFrom<Prop> for NotAndOr {
    type Error = Error;

    fn try_from(value: Prop) -> Result<Self, Self::Error> {
        if Basis::NotAndOr.admits(&value) {
            Ok(lower(value))
        } else {
            Err(Error::NotInBasis {
                formula: value,
                basis: Basis::NotAndOr,
            })
        }
    }
}

impl NotAndOr {
    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub(crate) fn not(formula: Self) -> Self {
        Not { formula }.into()
    }

    #[inline(always)]
    pub(crate) fn and(self, other: Self) -> Self {
        And {
            left: self,
            right: other,
        }
        .into()
    }

    #[inline(always)]
    pub(crate) fn or(self, other: Self) -> Self {
        Or {
            left: self,
            right: other,
        }
        .into()
    }
}

impl Formula for NotAndOr {
    fn variables(&self) -> BTreeSet<&Var> {
        match self {
            Self::Var(this) => std::iter::once(this).collect(),
            Self::Not(this) => this.variables(),
            Self::And(this) => this.variables(),
            Self::Or(this) => this.variables(),
        }
    }

    fn operators(&self) -> BTreeSet<Operator> {
        match self {
            Self::Var(_) => BTreeSet::new(),
            Self::Not(this) => this.operators(),
            Self::And(this) => this.operators(),
            Self::Or(this) => this.operators(),
        }
    }
}

impl From<NotAndOr> for Prop {
    fn from(value: NotAndOr) -> Self {
        match value {
            NotAndOr::Var(this) => this.into(),
            NotAndOr::Not(this) => Prop::not(this.formula.into()),
            NotAndOr::And(this) => Prop::from(this.left).and(this.right.into()),
            NotAndOr::Or(this) => Prop::from(this.left).or(this.right.into()),
        }
    }
}

impl From<&NotAndOr> for Prop {
    fn from(value: &NotAndOr) -> Self {
        value.clone().into()
    }
}

impl fmt::Display for NotAndOr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Prop::from(self), f)
    }
}

impl fmt::Debug for NotAndOr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&Prop::from(self), f)
    }
}

// The rule table eliminating derived operators; templates are over the placeholders `p`, `q`.
fn rules() -> HashMap<Operator, Prop> {
    let p = || Prop::var("p");
    let q = || Prop::var("q");

    let mut rules = HashMap::new();
    rules.insert(Operator::IMPLIES, Prop::not(p()).or(q()));
    rules.insert(
        Operator::IFF,
        p().and(q()).or(Prop::not(p()).and(Prop::not(q()))),
    );
    rules.insert(
        Operator::XOR,
        p().and(Prop::not(q())).or(Prop::not(p()).and(q())),
    );
    rules.insert(Operator::NAND, Prop::not(p().and(q())));
    rules.insert(Operator::NOR, Prop::not(p().or(q())));
    rules.insert(Operator::Top, p().or(Prop::not(p())));
    rules.insert(Operator::Bottom, p().and(Prop::not(p())));
    rules
}

// Converts a formula over negation, conjunction and disjunction to a `NotAndOr`.
fn lower(formula: Prop) -> NotAndOr {
    match formula {
        Prop::Var(this) => this.into(),
        Prop::Not(this) => NotAndOr::not(lower(this.formula)),
        Prop::Binary(this) => {
            let Binary { op, left, right } = *this;
            match op {
                BinaryOp::And => lower(left).and(lower(right)),
                BinaryOp::Or => lower(left).or(lower(right)),
                _ => unreachable!(), // `formula` has no derived operators
            }
        }
        Prop::Top | Prop::Bottom => unreachable!(), // `formula` has no constants
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_debug_string, assert_equivalent, prop, semantics::equivalent};

    fn not_and_or(formula: &Prop) -> Prop {
        formula.not_and_or().into()
    }

    #[test]
    fn test_not_and_or() {
        assert_debug_string!("p", not_and_or(&prop!("p")));
        assert_debug_string!("(p|~p)", not_and_or(&prop!("T")));
        assert_debug_string!("(p&~p)", not_and_or(&prop!("F")));
        assert_debug_string!("~q", not_and_or(&prop!("~q")));
        assert_debug_string!("(p&q)", not_and_or(&prop!("(p&q)")));
        assert_debug_string!("(p|q)", not_and_or(&prop!("(p|q)")));
        assert_debug_string!("(~p|q)", not_and_or(&prop!("(p->q)")));
        assert_debug_string!("((p&q)|(~p&~q))", not_and_or(&prop!("(p<->q)")));
        assert_debug_string!("((p&~q)|(~p&q))", not_and_or(&prop!("(p+q)")));
        assert_debug_string!("~(p&q)", not_and_or(&prop!("(p-&q)")));
        assert_debug_string!("~(p|q)", not_and_or(&prop!("(p-|q)")));
    }

    #[test]
    fn test_not_and_or_binds_operands() {
        assert_debug_string!("(~r1|s)", not_and_or(&prop!("(r1->s)")));
        assert_debug_string!(
            "(~~(s|t)|~(q&r))",
            not_and_or(&prop!("(~(s|t)->(q-&r))"))
        );
        assert_debug_string!(
            "(((~p|q)&~(q|~q))|(~(~p|q)&(q|~q)))",
            not_and_or(&prop!("((p->q)+(q|~q))"))
        );
        // constants bind no placeholder:
        assert_debug_string!("~(q&(p|~p))", not_and_or(&prop!("(q-&T)")));
    }

    #[test]
    fn test_not_and_or_equivalence() {
        let formulae = vec![
            prop!("(p->q)"),
            prop!("((p<->q)+(r-|~p))"),
            prop!("~((p-&T)->(F<->q))"),
            prop!("((p&q)|F)"),
        ];
        for formula in formulae {
            assert_equivalent!(formula, not_and_or(&formula));
        }
        assert_eq!(Ok(true), equivalent(&prop!("(~p|q)"), &not_and_or(&prop!("(p->q)"))));
    }

    #[test]
    fn test_not_and_or_basis() {
        let formula = prop!("((p<->T)+~(q-|(F->r)))");
        let reduced = formula.not_and_or();
        assert!(reduced
            .operators()
            .is_subset(&Basis::NotAndOr.operators()));
        assert!(Basis::NotAndOr.admits(&reduced.into()));
    }

    #[test]
    fn test_not_and_or_idempotent() {
        let formula = prop!("(~(p&q)|(~r&(p|s)))");
        assert_eq!(formula, not_and_or(&formula));
        assert_eq!(not_and_or(&formula), not_and_or(&not_and_or(&formula)));
        // semantically idempotent on its own output with constants:
        let with_constants = not_and_or(&prop!("(T&(p-&F))"));
        assert_equivalent!(with_constants, not_and_or(&with_constants));
    }

    #[test]
    fn test_not_and_or_deterministic() {
        let formula = prop!("((p->q)<->(r+s))");
        assert_eq!(formula.not_and_or(), formula.clone().not_and_or());
    }

    #[test]
    fn test_not_and_or_try_from() {
        {
            let formula = prop!("(~p|(q&r))");
            let converted = NotAndOr::try_from(formula.clone()).unwrap();
            assert_eq!(formula, Prop::from(converted));
        }
        {
            let result = NotAndOr::try_from(prop!("(p->q)"));
            assert_eq!(
                "formula `(p → q)` is not in the `not-and-or` basis",
                result.err().unwrap().to_string()
            );
        }
        assert!(NotAndOr::try_from(prop!("T")).is_err());
    }

    #[test]
    fn test_not_and_or_to_string() {
        let formula = prop!("(p-|q)").not_and_or();
        assert_eq!("¬(p ∨ q)", formula.to_string());
        assert_debug_string!("~(p|q)", formula);
    }
}
