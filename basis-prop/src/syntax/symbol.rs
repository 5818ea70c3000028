/*! Defines the symbols of [`Var`], [`BinaryOp`] and [`Operator`] for making propositional
formulae.

[`Var`]: crate::syntax::Var
[`BinaryOp`]: crate::syntax::BinaryOp
[`Operator`]: crate::syntax::Operator
*/
use std::fmt;

/// Represents a propositional variable with a given name.
///
/// **Note**: The parser only accepts names made of a letter between `p` and `z` followed by
/// an optional sequence of digits, but [`Var`] itself does not restrict its name.
///
/// [`Var`]: crate::syntax::Var
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct Var(pub String);

impl Var {
    /// Returns the name of the receiver.
    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl<S: Into<String>> From<S> for Var {
    fn from(name: S) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

/// Is the set of binary connectives of propositional formulae.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum BinaryOp {
    /// Is conjunction (`&`).
    And,

    /// Is disjunction (`|`).
    Or,

    /// Is implication (`->`).
    Implies,

    /// Is bi-implication (`<->`).
    Iff,

    /// Is exclusive disjunction (`+`).
    Xor,

    /// Is the negation of conjunction (`-&`).
    Nand,

    /// Is the negation of disjunction (`-|`).
    Nor,
}

impl BinaryOp {
    /// Lists every binary connective.
    pub const ALL: [BinaryOp; 7] = [
        Self::And,
        Self::Or,
        Self::Implies,
        Self::Iff,
        Self::Xor,
        Self::Nand,
        Self::Nor,
    ];

    /// Applies the receiver on two truth values.
    pub fn apply(&self, left: bool, right: bool) -> bool {
        match self {
            Self::And => left && right,
            Self::Or => left || right,
            Self::Implies => !left || right,
            Self::Iff => left == right,
            Self::Xor => left != right,
            Self::Nand => !(left && right),
            Self::Nor => !(left || right),
        }
    }

    /// Returns the ASCII symbol of the receiver, as accepted by the parser.
    pub fn ascii(&self) -> &'static str {
        match self {
            Self::And => "&",
            Self::Or => "|",
            Self::Implies => "->",
            Self::Iff => "<->",
            Self::Xor => "+",
            Self::Nand => "-&",
            Self::Nor => "-|",
        }
    }

    /// Returns the mathematical symbol of the receiver.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::And => "∧",
            Self::Or => "∨",
            Self::Implies => "→",
            Self::Iff => "↔",
            Self::Xor => "⊕",
            Self::Nand => "↑",
            Self::Nor => "↓",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol())
    }
}

/// Is the tag of every operator and constant that may appear at the root of a
/// [`Prop`]. Operators are the keys of rule tables for operator substitution.
///
/// [`Prop`]: crate::syntax::Prop
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operator {
    /// Is the truth constant (`T`).
    Top,

    /// Is the falsehood constant (`F`).
    Bottom,

    /// Is negation (`~`).
    Not,

    /// Is a binary connective.
    Binary(BinaryOp),
}

impl Operator {
    /// Is conjunction.
    pub const AND: Self = Self::Binary(BinaryOp::And);
    /// Is disjunction.
    pub const OR: Self = Self::Binary(BinaryOp::Or);
    /// Is implication.
    pub const IMPLIES: Self = Self::Binary(BinaryOp::Implies);
    /// Is bi-implication.
    pub const IFF: Self = Self::Binary(BinaryOp::Iff);
    /// Is exclusive disjunction.
    pub const XOR: Self = Self::Binary(BinaryOp::Xor);
    /// Is the negation of conjunction.
    pub const NAND: Self = Self::Binary(BinaryOp::Nand);
    /// Is the negation of disjunction.
    pub const NOR: Self = Self::Binary(BinaryOp::Nor);

    /// Returns the number of operands the receiver takes.
    pub fn arity(&self) -> usize {
        match self {
            Self::Top | Self::Bottom => 0,
            Self::Not => 1,
            Self::Binary(_) => 2,
        }
    }

    /// Returns the ASCII symbol of the receiver, as accepted by the parser.
    pub fn ascii(&self) -> &'static str {
        match self {
            Self::Top => "T",
            Self::Bottom => "F",
            Self::Not => "~",
            Self::Binary(op) => op.ascii(),
        }
    }
}

impl From<BinaryOp> for Operator {
    fn from(value: BinaryOp) -> Self {
        Self::Binary(value)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Self::Top => write!(f, "⊤"),
            Self::Bottom => write!(f, "⟘"),
            Self::Not => write!(f, "¬"),
            Self::Binary(op) => fmt::Display::fmt(op, f),
        }
    }
}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.ascii())
    }
}

/// Placeholder variables of operator templates, bound in order to the operands of the
/// operator being substituted.
pub const PLACEHOLDERS: [&str; 2] = ["p", "q"];
