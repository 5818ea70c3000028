//! Implements a parser for propositional formulae and theories.
//!
//! The module provides a parser for propositional formulae by implementing [`FromStr`] for
//! [`Prop`] and [`Theory`]. The parser is often used implicitly through [`parse`] method.
//!
//! **Example**:
//! The following example parses a string into a [`Prop`]:
//! ```rust
//! use basis_prop::syntax::Prop;
//!
//! // parse a string into `Prop`:
//! let formula: Prop = "((p&q)->~(r-|T))".parse().unwrap();
//!
//! assert_eq!("((p ∧ q) → ¬(r ↓ ⊤))", formula.to_string());
//! ```
//!
//! Binary connectives are always parenthesized. A [`Theory`] is written one formula per line;
//! blank lines and lines starting with `//` are ignored:
//! ```rust
//! use basis_prop::syntax::{Prop, Theory};
//!
//! let theory: Theory<Prop> = r#"
//!    // material implication:
//!    (p->q)
//!    (p+q)
//! "#.parse().unwrap();
//!
//! assert_eq!("(p → q)\n(p ⊕ q)", theory.to_string());
//! ```
//!
//! [`Prop`]: crate::syntax::Prop
//! [`Theory`]: crate::syntax::Theory
//! [`FromStr`]: std::str::FromStr
//! [`parse`]: ::std::str#parse
use super::syntax::{Prop, Theory};
use lalrpop_util::ParseError;
use std::str::FromStr;
use thiserror::Error;

lalrpop_mod!(pub grammar); // synthesized by LALRPOP

const COMMENT: &str = "//";

#[derive(PartialEq, Debug)]
pub enum TokenType {
    LParen,
    RParen,
    True,
    False,
    Not,
    And,
    Or,
    Implies,
    Iff,
    Xor,
    Nand,
    Nor,
    Var,
    Unknown,
}

impl<S: AsRef<str>> From<S> for TokenType {
    fn from(s: S) -> Self {
        // LALRPOP reports expected terminals quoted:
        match s.as_ref().trim_matches('"') {
            "_LPAREN_" => Self::LParen,
            "_RPAREN_" => Self::RParen,
            "_TRUE_" => Self::True,
            "_FALSE_" => Self::False,
            "_NOT_" => Self::Not,
            "_AND_" => Self::And,
            "_OR_" => Self::Or,
            "_IMPLIES_" => Self::Implies,
            "_IFF_" => Self::Iff,
            "_XOR_" => Self::Xor,
            "_NAND_" => Self::Nand,
            "_NOR_" => Self::Nor,
            "_VAR_" => Self::Var,
            _ => Self::Unknown,
        }
    }
}

impl ToString for TokenType {
    fn to_string(&self) -> String {
        match self {
            Self::LParen => "`(`",
            Self::RParen => "`)`",
            Self::True => "`T`",
            Self::False => "`F`",
            Self::Not => "`~`",
            Self::And => "`&`",
            Self::Or => "`|`",
            Self::Implies => "`->`",
            Self::Iff => "`<->`",
            Self::Xor => "`+`",
            Self::Nand => "`-&`",
            Self::Nor => "`-|`",
            Self::Var => "`variable`",
            Self::Unknown => "`unknown token`",
        }
        .into()
    }
}

/// Is the type of errors returned by the parser.
#[derive(Error, PartialEq, Debug)]
pub enum Error {
    #[error("found `{found:?}` at line {}, column {}; expecting {}",
            (*.position).line,
            (*.position).column,
            Error::pretty_expected_tokens(&*.expected),
    )]
    UnrecognizedToken {
        position: Position,
        expected: Vec<TokenType>,
        found: String,
    },
    #[error("invalid token at line {}, column {}", (*.position).line, (*.position).column)]
    InvalidToken { position: Position },
    #[error("unexpected end of input at line {}, column {}; expecting {}",
            (*.position).line,
            (*.position).column,
            Error::pretty_expected_tokens(&*.expected)
    )]
    UnrecognizedEOF {
        position: Position,
        expected: Vec<TokenType>,
    },
    #[error("unexpected token `{found:?}` at line {}, column {}", (*.position).line, (*.position).column)]
    ExtraToken { position: Position, found: String },
    #[error("{message}")]
    User { message: String },
}

impl Error {
    fn pretty_expected_tokens(items: &[TokenType]) -> String {
        let strs = items.iter().map(ToString::to_string).collect::<Vec<_>>();
        match items.len() {
            0 => "".into(),
            1 => strs[0].to_string(),
            2 => format!("{} or {}", strs[0], strs[1]),
            n => format!("{}, or {}", strs[0..n - 1].join(", "), strs[n - 1]),
        }
    }
}

#[derive(PartialEq, Debug)]
pub struct Position {
    line: usize,
    column: usize,
}

impl Position {
    /// Returns the line number of the receiver, starting from `1`.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the column number of the receiver, starting from `1`.
    pub fn column(&self) -> usize {
        self.column
    }
}

// Stores source information to retrieve token positions in the source.
struct SourceInfo<'s> {
    lines: Vec<usize>,
    source: &'s str,
}

impl<'s> SourceInfo<'s> {
    fn new(source: &'s str) -> Self {
        let lines = source
            .bytes()
            .enumerate()
            .filter(|&(_, ch)| ch == b'\n')
            .map(|(i, _)| i + 1);
        Self {
            lines: std::iter::once(0).chain(lines).collect(),
            source,
        }
    }

    fn position(&self, location: usize) -> Position {
        let index = self
            .lines
            .iter()
            .enumerate()
            .find(|&(_, l)| location < *l)
            .map(|(i, _)| i);
        let line = index.unwrap_or_else(|| self.lines.len());
        let column = self.source[self.lines[line - 1]..location].chars().count() + 1;

        Position { line, column }
    }

    // `offset` is the location in the source where the failed parse started.
    fn convert_error<T: ToString>(
        &self,
        error: ParseError<usize, T, &'static str>,
        offset: usize,
    ) -> Error {
        match error {
            ParseError::InvalidToken { location } => Error::InvalidToken {
                position: self.position(offset + location),
            },
            ParseError::UnrecognizedEOF { location, expected } => Error::UnrecognizedEOF {
                position: self.position(offset + location),
                expected: expected.into_iter().map(From::from).collect(),
            },
            ParseError::UnrecognizedToken { token, expected } => Error::UnrecognizedToken {
                position: self.position(offset + token.0),
                expected: expected.into_iter().map(From::from).collect(),
                found: token.1.to_string(),
            },
            ParseError::ExtraToken { token } => Error::ExtraToken {
                position: self.position(offset + token.0),
                found: token.1.to_string(),
            },
            ParseError::User { error } => Error::User {
                message: error.to_string(),
            },
        }
    }
}

impl FromStr for Prop {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let info = SourceInfo::new(s);
        grammar::FormulaParser::new()
            .parse(s)
            .map_err(|e| info.convert_error(e, 0))
    }
}

impl FromStr for Theory<Prop> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let info = SourceInfo::new(s);
        let parser = grammar::FormulaParser::new();
        let mut formulae = Vec::new();
        let mut offset = 0;
        for line in s.split('\n') {
            let trimmed = line.trim();
            if !trimmed.is_empty() && !trimmed.starts_with(COMMENT) {
                let formula = parser
                    .parse(line)
                    .map_err(|e| info.convert_error(e, offset))?;
                formulae.push(formula);
            }
            offset += line.len() + 1;
        }
        Ok(formulae.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assert_debug_string,
        syntax::{BinaryOp, Var},
        v,
    };

    #[test]
    fn variable() {
        assert_eq!(grammar::VariableParser::new().parse("p").unwrap(), v!(p));
        assert_eq!(grammar::VariableParser::new().parse("   z").unwrap(), v!(z));
        assert_eq!(
            grammar::VariableParser::new().parse("q123").unwrap(),
            Var::from("q123")
        );

        assert!(grammar::VariableParser::new().parse("a").is_err());
        assert!(grammar::VariableParser::new().parse("P").is_err());
        assert!(grammar::VariableParser::new().parse("1p").is_err());
        assert!(grammar::VariableParser::new().parse("pq").is_err());
        assert!(grammar::VariableParser::new().parse("T").is_err());
    }

    #[test]
    fn connective() {
        let parse = |s: &str| grammar::ConnectiveParser::new().parse(s).unwrap();
        assert_eq!(BinaryOp::And, parse("&"));
        assert_eq!(BinaryOp::Or, parse("|"));
        assert_eq!(BinaryOp::Implies, parse("->"));
        assert_eq!(BinaryOp::Iff, parse("<->"));
        assert_eq!(BinaryOp::Xor, parse("+"));
        assert_eq!(BinaryOp::Nand, parse("-&"));
        assert_eq!(BinaryOp::Nor, parse("-|"));

        assert!(grammar::ConnectiveParser::new().parse("=>").is_err());
        assert!(grammar::ConnectiveParser::new().parse("<-").is_err());
    }

    #[test]
    fn formula() {
        assert_eq!(Prop::Top, "T".parse().unwrap());
        assert_eq!(Prop::Bottom, "F".parse().unwrap());
        assert_eq!(Prop::var("p"), "p".parse().unwrap());
        assert_eq!(Prop::not(Prop::var("p")), "~p".parse().unwrap());
        assert_eq!(
            Prop::not(Prop::not(Prop::var("p"))),
            "~ ~p".parse().unwrap()
        );
        assert_eq!(
            Prop::var("p").implies(Prop::var("q")),
            "(p->q)".parse().unwrap()
        );
        assert_eq!(
            Prop::var("p").nand(Prop::var("q")),
            "( p -& q )".parse().unwrap()
        );
        assert_eq!(
            Prop::not(Prop::var("p").iff(Prop::Bottom)).xor(Prop::var("r1").nor(Prop::Top)),
            "(~(p<->F)+(r1-|T))".parse().unwrap()
        );
    }

    #[test]
    fn formula_debug_round_trip() {
        let inputs = vec![
            "T",
            "~F",
            "(p&q)",
            "((p|q)->(~q<->r))",
            "((p+q)-&~(r-|s))",
            "~~(p->(q->(r->s)))",
        ];
        for input in inputs {
            let formula: Prop = input.parse().unwrap();
            assert_debug_string!(input, formula);
            let again: Prop = format!("{:?}", formula).parse().unwrap();
            assert_eq!(formula, again);
        }
    }

    #[test]
    fn formula_failure() {
        {
            let parsed: Result<Prop, _> = "p&q".parse();
            assert!(parsed.is_err());
        }
        {
            let parsed: Result<Prop, _> = "(p&q".parse();
            match parsed.err().unwrap() {
                Error::UnrecognizedEOF { position, expected } => {
                    assert_eq!(Position { line: 1, column: 5 }, position);
                    assert!(expected.contains(&TokenType::RParen));
                }
                e => panic!("unexpected error: {}", e),
            }
        }
        {
            let parsed: Result<Prop, _> = "(p q)".parse();
            assert!(matches!(
                parsed.err().unwrap(),
                Error::UnrecognizedToken { .. }
            ));
        }
        {
            let parsed: Result<Prop, _> = "(p & $)".parse();
            assert_eq!(
                Error::InvalidToken {
                    position: Position { line: 1, column: 6 }
                },
                parsed.err().unwrap()
            );
        }
        {
            let parsed: Result<Prop, _> = "".parse();
            assert!(matches!(
                parsed.err().unwrap(),
                Error::UnrecognizedEOF { .. }
            ));
        }
    }

    #[test]
    fn theory() {
        {
            let theory: Theory<Prop> = "".parse().unwrap();
            assert!(theory.formulae().is_empty());
        }
        {
            let theory: Theory<Prop> = "(p->q)\n\n  // comment\n~r\r\n(p+T)".parse().unwrap();
            assert_eq!(3, theory.formulae().len());
            assert_eq!("(p → q)\n¬r\n(p ⊕ ⊤)", theory.to_string());
        }
    }

    #[test]
    fn theory_failure() {
        let parsed: Result<Theory<Prop>, _> = "(p->q)\n// comment\n  (q & $)".parse();
        assert_eq!(
            Error::InvalidToken {
                position: Position { line: 3, column: 8 }
            },
            parsed.err().unwrap()
        );
    }
}
