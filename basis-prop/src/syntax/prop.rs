/*! Defines the syntax of propositional formulae over the full set of connectives.*/
use super::{formula::*, BinaryOp, Operator, Var};
use std::{collections::BTreeSet, fmt};

/// Is an abstract syntax tree (AST) for propositional formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Prop {
    /// Is logical top (⊤) or truth.
    Top,

    /// Is logical bottom (⟘) or falsehood.
    Bottom,

    /// Is a propositional variable, wrapping a [`Var`].
    Var(Var),

    /// Is the negation of a formula, wrapping a [`Not`].
    Not(Box<Not<Prop>>),

    /// Is a binary connective applied on two formulae, wrapping a [`Binary`].
    Binary(Box<Binary<Prop>>),
}

impl From<Var> for Prop {
    fn from(value: Var) -> Self {
        Self::Var(value)
    }
}

impl From<Not<Prop>> for Prop {
    fn from(value: Not<Prop>) -> Self {
        Self::Not(Box::new(value))
    }
}

impl From<Binary<Prop>> for Prop {
    fn from(value: Binary<Prop>) -> Self {
        Self::Binary(Box::new(value))
    }
}

impl From<bool> for Prop {
    fn from(value: bool) -> Self {
        if value {
            Self::Top
        } else {
            Self::Bottom
        }
    }
}

impl Prop {
    /// Returns a variable with the given `name`.
    #[inline(always)]
    pub fn var<S: Into<String>>(name: S) -> Self {
        Var::from(name).into()
    }

    /// Returns the negation of `formula`.
    #[allow(clippy::should_implement_trait)]
    // Disallow `formula.not()` intentionally:
    #[inline(always)]
    pub fn not(formula: Self) -> Self {
        Not { formula }.into()
    }

    /// Returns the application of `op` on `left` and `right`.
    #[inline(always)]
    pub fn binary(op: BinaryOp, left: Self, right: Self) -> Self {
        Binary { op, left, right }.into()
    }

    /// Returns a conjunction of `self` and `other`.
    #[inline(always)]
    pub fn and(self, other: Self) -> Self {
        Self::binary(BinaryOp::And, self, other)
    }

    /// Returns a disjunction of `self` and `other`.
    #[inline(always)]
    pub fn or(self, other: Self) -> Self {
        Self::binary(BinaryOp::Or, self, other)
    }

    /// Returns an implication between `self` and `other`.
    #[inline(always)]
    pub fn implies(self, other: Self) -> Self {
        Self::binary(BinaryOp::Implies, self, other)
    }

    /// Returns a bi-implication between `self` and `other`.
    #[inline(always)]
    pub fn iff(self, other: Self) -> Self {
        Self::binary(BinaryOp::Iff, self, other)
    }

    /// Returns the exclusive disjunction of `self` and `other`.
    #[inline(always)]
    pub fn xor(self, other: Self) -> Self {
        Self::binary(BinaryOp::Xor, self, other)
    }

    /// Returns the negated conjunction of `self` and `other`.
    #[inline(always)]
    pub fn nand(self, other: Self) -> Self {
        Self::binary(BinaryOp::Nand, self, other)
    }

    /// Returns the negated disjunction of `self` and `other`.
    #[inline(always)]
    pub fn nor(self, other: Self) -> Self {
        Self::binary(BinaryOp::Nor, self, other)
    }

    /// Returns the operator at the root of the receiver or `None` if the receiver is a
    /// variable.
    pub fn root(&self) -> Option<Operator> {
        match self {
            Self::Top => Some(Operator::Top),
            Self::Bottom => Some(Operator::Bottom),
            Self::Var(_) => None,
            Self::Not(_) => Some(Operator::Not),
            Self::Binary(this) => Some(this.op.into()),
        }
    }

    /// Returns the immediate sub-formulae of the receiver in left-to-right order.
    pub fn operands(&self) -> Vec<&Prop> {
        match self {
            Self::Top | Self::Bottom | Self::Var(_) => Vec::new(),
            Self::Not(this) => vec![&this.formula],
            Self::Binary(this) => vec![&this.left, &this.right],
        }
    }
}

impl Formula for Prop {
    fn variables(&self) -> BTreeSet<&Var> {
        match self {
            Self::Top | Self::Bottom => BTreeSet::new(),
            Self::Var(this) => std::iter::once(this).collect(),
            Self::Not(this) => this.variables(),
            Self::Binary(this) => this.variables(),
        }
    }

    fn operators(&self) -> BTreeSet<Operator> {
        match self {
            Self::Top => std::iter::once(Operator::Top).collect(),
            Self::Bottom => std::iter::once(Operator::Bottom).collect(),
            Self::Var(_) => BTreeSet::new(),
            Self::Not(this) => this.operators(),
            Self::Binary(this) => this.operators(),
        }
    }
}

impl fmt::Display for Prop {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Self::Top => write!(f, "⊤"),
            Self::Bottom => write!(f, "⟘"),
            Self::Var(this) => write!(f, "{}", this),
            Self::Not(this) => write!(f, "¬{}", this.formula),
            Self::Binary(this) => write!(f, "({} {} {})", this.left, this.op, this.right),
        }
    }
}

impl fmt::Debug for Prop {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Self::Top => write!(f, "T"),
            Self::Bottom => write!(f, "F"),
            Self::Var(this) => write!(f, "{}", this),
            Self::Not(this) => write!(f, "~{:?}", this.formula),
            Self::Binary(this) => write!(f, "({:?}{}{:?})", this.left, this.op.ascii(), this.right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Prop::*, *};
    use crate::{assert_debug_string, v};

    fn p() -> Prop {
        Prop::var("p")
    }

    fn q() -> Prop {
        Prop::var("q")
    }

    #[test]
    fn top_to_string() {
        assert_eq!("⊤", Top.to_string());
        assert_debug_string!("T", Top);
    }

    #[test]
    fn bottom_to_string() {
        assert_eq!("⟘", Bottom.to_string());
        assert_debug_string!("F", Bottom);
    }

    #[test]
    fn not_to_string() {
        assert_eq!("¬p", Prop::not(p()).to_string());
        assert_eq!("¬¬p", Prop::not(Prop::not(p())).to_string());
        assert_eq!("¬(p ∧ q)", Prop::not(p().and(q())).to_string());
        assert_debug_string!("~~p", Prop::not(Prop::not(p())));
        assert_debug_string!("~(p|q)", Prop::not(p().or(q())));
    }

    #[test]
    fn binary_to_string() {
        assert_eq!("(p ∧ q)", p().and(q()).to_string());
        assert_eq!("(p ∨ q)", p().or(q()).to_string());
        assert_eq!("(p → q)", p().implies(q()).to_string());
        assert_eq!("(p ↔ q)", p().iff(q()).to_string());
        assert_eq!("(p ⊕ q)", p().xor(q()).to_string());
        assert_eq!("(p ↑ q)", p().nand(q()).to_string());
        assert_eq!("(p ↓ q)", p().nor(q()).to_string());
        assert_eq!("((p ∧ ⊤) → ¬q)", p().and(Top).implies(Prop::not(q())).to_string());

        assert_debug_string!("(p&q)", p().and(q()));
        assert_debug_string!("(p|q)", p().or(q()));
        assert_debug_string!("(p->q)", p().implies(q()));
        assert_debug_string!("(p<->q)", p().iff(q()));
        assert_debug_string!("(p+q)", p().xor(q()));
        assert_debug_string!("(p-&q)", p().nand(q()));
        assert_debug_string!("(p-|q)", p().nor(q()));
    }

    #[test]
    fn prop_variables() {
        assert!(Top.variables().is_empty());
        assert!(Bottom.variables().is_empty());
        assert_eq!(vec![&v!(p)], p().variables().into_iter().collect::<Vec<_>>());
        assert_eq!(
            vec![&v!(p), &v!(q)],
            Prop::not(q().xor(p().and(q())))
                .variables()
                .into_iter()
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn prop_operators() {
        assert!(p().operators().is_empty());
        assert_eq!(
            vec![Operator::Bottom],
            Bottom.operators().into_iter().collect::<Vec<_>>()
        );
        assert_eq!(
            vec![Operator::Top, Operator::Not, Operator::AND, Operator::NOR],
            Prop::not(p().and(Top).nor(q()))
                .operators()
                .into_iter()
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn prop_root_and_operands() {
        assert_eq!(None, p().root());
        assert_eq!(Some(Operator::Top), Top.root());
        assert_eq!(Some(Operator::Not), Prop::not(p()).root());
        assert_eq!(Some(Operator::XOR), p().xor(q()).root());

        assert!(Top.operands().is_empty());
        assert_eq!(vec![&p()], Prop::not(p()).operands());
        assert_eq!(vec![&q(), &p()], q().iff(p()).operands());
    }

    #[test]
    fn prop_from_bool() {
        assert_eq!(Top, Prop::from(true));
        assert_eq!(Bottom, Prop::from(false));
    }
}
