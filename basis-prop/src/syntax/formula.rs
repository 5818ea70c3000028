/*! Introduces an abstraction for formulae and the connectives used as ingredients for
constructing formulae.*/
use super::{BinaryOp, Operator, Var};
use std::collections::BTreeSet;

/// Is the trait of propositional formulae, including formulae restricted to a basis.
pub trait Formula {
    /// Returns the set of variables in the receiver formula.
    ///
    /// **Example**:
    /// ```rust
    /// # use basis_prop::syntax::{Prop, Var};
    /// use basis_prop::syntax::Formula;
    ///
    /// let formula: Prop = "((p&q)|~p)".parse().unwrap();
    /// let p = Var::from("p");
    /// let q = Var::from("q");
    /// assert_eq!(vec![&p, &q], formula.variables().into_iter().collect::<Vec<_>>());
    /// ```
    fn variables(&self) -> BTreeSet<&Var>;

    /// Returns the set of operators and constants that appear in the receiver formula.
    ///
    /// **Example**:
    /// ```rust
    /// # use basis_prop::syntax::{Operator, Prop};
    /// use basis_prop::syntax::Formula;
    ///
    /// let formula: Prop = "(~(p-&q)->T)".parse().unwrap();
    /// let ops = formula.operators().into_iter().collect::<Vec<_>>();
    /// assert_eq!(vec![Operator::Top, Operator::Not, Operator::IMPLIES, Operator::NAND], ops);
    /// ```
    fn operators(&self) -> BTreeSet<Operator>;
}

/// Represents the negation of a formula.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Not<F: Formula> {
    pub formula: F,
}

impl<F: Formula> Not<F> {
    /// Wraps `formula` in a new instance of [`Not`].
    pub fn new(formula: F) -> Self {
        Self { formula }
    }

    /// Returns the formula wrapped in the receiver.
    #[inline(always)]
    pub fn formula(&self) -> &F {
        &self.formula
    }
}

impl<F: Formula> Formula for Not<F> {
    fn variables(&self) -> BTreeSet<&Var> {
        self.formula.variables()
    }

    fn operators(&self) -> BTreeSet<Operator> {
        let mut ops = self.formula.operators();
        ops.insert(Operator::Not);
        ops
    }
}

/// Represents a connective between two formulae.
///
/// **Note**: The connective of a [`Binary`] is unconstrained; types that restrict formulae to
/// a basis only construct the connectives of their basis.
///
/// [`Binary`]: crate::syntax::formula::Binary
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Binary<F: Formula> {
    pub op: BinaryOp,
    pub left: F,
    pub right: F,
}

impl<F: Formula> Binary<F> {
    /// Returns the application of `op` on `left` and `right`.
    pub fn new(op: BinaryOp, left: F, right: F) -> Self {
        Self { op, left, right }
    }

    /// Returns the connective of the receiver.
    #[inline(always)]
    pub fn op(&self) -> BinaryOp {
        self.op
    }

    /// Returns the formula on the left of the receiver.
    #[inline(always)]
    pub fn left(&self) -> &F {
        &self.left
    }

    /// Returns the formula on the right of the receiver.
    #[inline(always)]
    pub fn right(&self) -> &F {
        &self.right
    }
}

impl<F: Formula> Formula for Binary<F> {
    fn variables(&self) -> BTreeSet<&Var> {
        let mut vs = self.left.variables();
        vs.extend(self.right.variables());
        vs
    }

    fn operators(&self) -> BTreeSet<Operator> {
        let mut ops = self.left.operators();
        ops.extend(self.right.operators());
        ops.insert(self.op.into());
        ops
    }
}

/// Represents the conjunction of two formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct And<F: Formula> {
    pub left: F,
    pub right: F,
}

impl<F: Formula> And<F> {
    /// Returns the conjunction of `left` and `right`.
    pub fn new(left: F, right: F) -> Self {
        Self { left, right }
    }

    /// Returns the formula on the left of the receiver.
    #[inline(always)]
    pub fn left(&self) -> &F {
        &self.left
    }

    /// Returns the formula on the right of the receiver.
    #[inline(always)]
    pub fn right(&self) -> &F {
        &self.right
    }
}

impl<F: Formula> Formula for And<F> {
    fn variables(&self) -> BTreeSet<&Var> {
        let mut vs = self.left.variables();
        vs.extend(self.right.variables());
        vs
    }

    fn operators(&self) -> BTreeSet<Operator> {
        let mut ops = self.left.operators();
        ops.extend(self.right.operators());
        ops.insert(Operator::AND);
        ops
    }
}

/// Represents the disjunction of two formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Or<F: Formula> {
    pub left: F,
    pub right: F,
}

impl<F: Formula> Or<F> {
    /// Returns the disjunction of `left` and `right`.
    pub fn new(left: F, right: F) -> Self {
        Self { left, right }
    }

    /// Returns the formula on the left of the receiver.
    #[inline(always)]
    pub fn left(&self) -> &F {
        &self.left
    }

    /// Returns the formula on the right of the receiver.
    #[inline(always)]
    pub fn right(&self) -> &F {
        &self.right
    }
}

impl<F: Formula> Formula for Or<F> {
    fn variables(&self) -> BTreeSet<&Var> {
        let mut vs = self.left.variables();
        vs.extend(self.right.variables());
        vs
    }

    fn operators(&self) -> BTreeSet<Operator> {
        let mut ops = self.left.operators();
        ops.extend(self.right.operators());
        ops.insert(Operator::OR);
        ops
    }
}

/// Represents an implication between two formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Implies<F: Formula> {
    pub premise: F,
    pub consequence: F,
}

impl<F: Formula> Implies<F> {
    /// Returns an implication with a `premise` and a `consequence`.
    pub fn new(premise: F, consequence: F) -> Self {
        Self {
            premise,
            consequence,
        }
    }

    /// Returns the premise of the receiver.
    #[inline(always)]
    pub fn premise(&self) -> &F {
        &self.premise
    }

    /// Returns the consequence of the receiver.
    #[inline(always)]
    pub fn consequence(&self) -> &F {
        &self.consequence
    }
}

impl<F: Formula> Formula for Implies<F> {
    fn variables(&self) -> BTreeSet<&Var> {
        let mut vs = self.premise.variables();
        vs.extend(self.consequence.variables());
        vs
    }

    fn operators(&self) -> BTreeSet<Operator> {
        let mut ops = self.premise.operators();
        ops.extend(self.consequence.operators());
        ops.insert(Operator::IMPLIES);
        ops
    }
}

/// Represents the negated conjunction (Sheffer stroke) of two formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nand<F: Formula> {
    pub left: F,
    pub right: F,
}

impl<F: Formula> Nand<F> {
    /// Returns the negated conjunction of `left` and `right`.
    pub fn new(left: F, right: F) -> Self {
        Self { left, right }
    }

    /// Returns the formula on the left of the receiver.
    #[inline(always)]
    pub fn left(&self) -> &F {
        &self.left
    }

    /// Returns the formula on the right of the receiver.
    #[inline(always)]
    pub fn right(&self) -> &F {
        &self.right
    }
}

impl<F: Formula> Formula for Nand<F> {
    fn variables(&self) -> BTreeSet<&Var> {
        let mut vs = self.left.variables();
        vs.extend(self.right.variables());
        vs
    }

    fn operators(&self) -> BTreeSet<Operator> {
        let mut ops = self.left.operators();
        ops.extend(self.right.operators());
        ops.insert(Operator::NAND);
        ops
    }
}
