/*! Provides the interfaces and the implementation for substituting variables and operators
of propositional formulae.*/

use crate::syntax::{Operator, Prop, Var, PLACEHOLDERS};
use std::collections::{BTreeMap, HashMap};

/// Is the trait of types that map variables to formulae.
pub trait VarSubstitution {
    /// Maps `v` to a [`Prop`].
    ///
    /// [`Prop`]: crate::syntax::Prop
    fn apply(&self, v: &Var) -> Prop;
}

/// Any function from [`Var`] to [`Prop`] is a substitution.
///
/// [`Var`]: crate::syntax::Var
/// [`Prop`]: crate::syntax::Prop
impl<F> VarSubstitution for F
where
    F: Fn(&Var) -> Prop,
{
    fn apply(&self, v: &Var) -> Prop {
        self(v)
    }
}

/// Any map from [`Var`] to [`Prop`] is a substitution; unmapped variables are kept.
///
/// [`Var`]: crate::syntax::Var
/// [`Prop`]: crate::syntax::Prop
impl VarSubstitution for HashMap<&Var, Prop> {
    fn apply(&self, v: &Var) -> Prop {
        self.get(v).cloned().unwrap_or_else(|| v.clone().into())
    }
}

/// Is the trait of rule tables, mapping operators to template formulae.
///
/// A template is a formula over the placeholder variables `p` and `q`. When an operator is
/// substituted, the placeholders of its template are bound in order to the operands of the
/// operator.
pub trait OperatorRules {
    /// Returns the template for `op` or `None` if `op` is to be kept.
    fn template(&self, op: Operator) -> Option<&Prop>;
}

impl OperatorRules for HashMap<Operator, Prop> {
    fn template(&self, op: Operator) -> Option<&Prop> {
        self.get(&op)
    }
}

impl OperatorRules for BTreeMap<Operator, Prop> {
    fn template(&self, op: Operator) -> Option<&Prop> {
        self.get(&op)
    }
}

impl<F> OperatorRules for F
where
    F: Fn(Operator) -> Option<&'static Prop>,
{
    fn template(&self, op: Operator) -> Option<&Prop> {
        self(op)
    }
}

impl Prop {
    /// Applies a [`VarSubstitution`] on the variables of the receiver.
    ///
    /// **Example**:
    /// ```rust
    /// # use basis_prop::syntax::{Prop, Var};
    /// use std::collections::HashMap;
    ///
    /// let p = Var::from("p");
    /// let mut sub = HashMap::new();
    /// sub.insert(&p, "(q&r)".parse::<Prop>().unwrap());
    ///
    /// let formula: Prop = "(p|~p)".parse().unwrap();
    /// assert_eq!("((q ∧ r) ∨ ¬(q ∧ r))", formula.substitute_vars(&sub).to_string());
    /// ```
    ///
    /// [`VarSubstitution`]: crate::transform::VarSubstitution
    pub fn substitute_vars(&self, sub: &impl VarSubstitution) -> Prop {
        match self {
            Self::Top | Self::Bottom => self.clone(),
            Self::Var(this) => sub.apply(this),
            Self::Not(this) => Self::not(this.formula.substitute_vars(sub)),
            Self::Binary(this) => Self::binary(
                this.op,
                this.left.substitute_vars(sub),
                this.right.substitute_vars(sub),
            ),
        }
    }

    /// Replaces every operator of the receiver that has a template in `rules` with its
    /// template, binding the placeholders of the template to the operands of the operator.
    ///
    /// The operands are substituted before their operator is, so a single call removes all
    /// nested occurrences of the substituted operators. Templates themselves are not
    /// substituted again.
    ///
    /// **Example**:
    /// ```rust
    /// # use basis_prop::syntax::{Operator, Prop};
    /// use std::collections::HashMap;
    ///
    /// let mut rules = HashMap::new();
    /// rules.insert(Operator::IMPLIES, "(~p|q)".parse::<Prop>().unwrap());
    ///
    /// let formula: Prop = "(r->(s->t))".parse().unwrap();
    /// assert_eq!("(¬r ∨ (¬s ∨ t))", formula.substitute_operators(&rules).to_string());
    /// ```
    pub fn substitute_operators(&self, rules: &impl OperatorRules) -> Prop {
        let substituted = match self {
            Self::Top | Self::Bottom | Self::Var(_) => self.clone(),
            Self::Not(this) => Self::not(this.formula.substitute_operators(rules)),
            Self::Binary(this) => Self::binary(
                this.op,
                this.left.substitute_operators(rules),
                this.right.substitute_operators(rules),
            ),
        };

        match substituted.root().and_then(|op| rules.template(op)) {
            Some(template) => {
                let placeholders: Vec<Var> = PLACEHOLDERS.iter().map(|&p| Var::from(p)).collect();
                let binding: HashMap<&Var, Prop> = placeholders
                    .iter()
                    .zip(substituted.operands().into_iter().cloned())
                    .collect();
                template.substitute_vars(&binding)
            }
            None => substituted,
        }
    }
}
