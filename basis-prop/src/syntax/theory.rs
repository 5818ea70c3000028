/*! Defines theories of formulae. */

use super::{Formula, Operator, Var};
use itertools::Itertools;
use std::{collections::BTreeSet, fmt, iter::FromIterator, ops::Deref};

/// Is a propositional theory, containing a list of formulae.
#[derive(Clone)]
pub struct Theory<T: Formula>(Vec<T>);

impl<T: Formula> Theory<T> {
    /// Returns the formulae of this theory.
    pub fn formulae(&self) -> &[T] {
        &self.0
    }

    /// Extends this theory with additional formulae.
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<T: Formula> FromIterator<T> for Theory<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T: Formula> Deref for Theory<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: Formula> IntoIterator for Theory<T> {
    type Item = T;

    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<T: Formula> Formula for Theory<T> {
    fn variables(&self) -> BTreeSet<&Var> {
        self.iter().flat_map(|f| f.variables()).collect()
    }

    fn operators(&self) -> BTreeSet<Operator> {
        self.iter().flat_map(|f| f.operators()).collect()
    }
}

impl<T: Formula + fmt::Display> fmt::Display for Theory<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.iter().join("\n"))
    }
}
