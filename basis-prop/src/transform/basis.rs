/*! Names the restricted bases of operators that formulae can be transformed into. */
use super::{ToImpliesFalse, ToImpliesNot, ToNandOnly, ToNotAnd, ToNotAndOr};
use crate::{
    syntax::{Formula, Operator, Prop},
    trace::REDUCED,
};
use std::{collections::BTreeSet, fmt, str::FromStr};

/// Is a restricted set of operators and constants.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Basis {
    /// Is negation, conjunction and disjunction.
    NotAndOr,

    /// Is negation and conjunction.
    NotAnd,

    /// Is the negated conjunction alone.
    Nand,

    /// Is implication and negation.
    ImpliesNot,

    /// Is implication and the falsehood constant.
    ImpliesFalse,
}

impl Basis {
    /// Lists every basis.
    pub const ALL: [Basis; 5] = [
        Self::NotAndOr,
        Self::NotAnd,
        Self::Nand,
        Self::ImpliesNot,
        Self::ImpliesFalse,
    ];

    /// Returns the operators and constants of the receiver.
    pub fn operators(&self) -> BTreeSet<Operator> {
        let ops: &[Operator] = match self {
            Self::NotAndOr => &[Operator::Not, Operator::AND, Operator::OR],
            Self::NotAnd => &[Operator::Not, Operator::AND],
            Self::Nand => &[Operator::NAND],
            Self::ImpliesNot => &[Operator::Not, Operator::IMPLIES],
            Self::ImpliesFalse => &[Operator::Bottom, Operator::IMPLIES],
        };
        ops.iter().copied().collect()
    }

    /// Returns true if every operator and constant of `formula` belongs to the receiver.
    ///
    /// **Example**:
    /// ```rust
    /// # use basis_prop::syntax::Prop;
    /// use basis_prop::transform::Basis;
    ///
    /// let formula: Prop = "((p->F)->q)".parse().unwrap();
    /// assert!(Basis::ImpliesFalse.admits(&formula));
    /// assert!(!Basis::ImpliesNot.admits(&formula));
    /// ```
    pub fn admits(&self, formula: &Prop) -> bool {
        formula.operators().is_subset(&self.operators())
    }

    /// Transforms `formula` into an equivalent formula over the receiver.
    ///
    /// **Example**:
    /// ```rust
    /// # use basis_prop::syntax::Prop;
    /// use basis_prop::transform::Basis;
    ///
    /// let formula: Prop = "(p|q)".parse().unwrap();
    /// assert_eq!("(¬p → q)", Basis::ImpliesNot.reduce(&formula).to_string());
    /// ```
    pub fn reduce(&self, formula: &Prop) -> Prop {
        let reduced: Prop = match self {
            Self::NotAndOr => formula.not_and_or().into(),
            Self::NotAnd => formula.not_and().into(),
            Self::Nand => formula.nand_only().into(),
            Self::ImpliesNot => formula.implies_not().into(),
            Self::ImpliesFalse => formula.implies_false().into(),
        };
        debug!(event = REDUCED, basis = %self, formula = ?reduced);
        reduced
    }

    /// Returns the name of the receiver, as accepted by [`FromStr`].
    ///
    /// [`FromStr`]: std::str::FromStr
    pub fn name(&self) -> &'static str {
        match self {
            Self::NotAndOr => "not-and-or",
            Self::NotAnd => "not-and",
            Self::Nand => "nand",
            Self::ImpliesNot => "implies-not",
            Self::ImpliesFalse => "implies-false",
        }
    }
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Basis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.to_lowercase();
        Self::ALL
            .iter()
            .find(|b| b.name() == name)
            .copied()
            .ok_or_else(|| format!("invalid basis '{}'", s))
    }
}
