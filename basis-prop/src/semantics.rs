/*! Implements the truth-table semantics of propositional formulae.

Formulae are evaluated under a [`Model`], mapping each of their variables to a truth value.
The semantics is used to check that syntactic transformations preserve the truth table of
their input.

[`Model`]: crate::semantics::Model
*/
use crate::syntax::{Formula, Prop, Var};
use std::collections::BTreeMap;
use thiserror::Error;

/// Is an assignment of truth values to variables.
pub type Model = BTreeMap<Var, bool>;

/// Is the type of errors arising from evaluating formulae.
#[derive(Error, PartialEq, Debug)]
pub enum Error {
    /// Is returned when a formula is evaluated in a model that does not assign its variable.
    #[error("variable `{}` is not assigned a truth value", .variable.to_string())]
    UnassignedVariable { variable: Var },

    /// Is returned when the models over too many variables are requested.
    #[error("cannot enumerate the models of {count} variables; at most {} are supported", MAX_VARIABLES)]
    TooManyVariables { count: usize },
}

/// Is the largest number of variables whose models can be enumerated.
pub const MAX_VARIABLES: usize = 63;

/// Returns the truth value of `formula` in `model`.
///
/// **Example**:
/// ```rust
/// # use basis_prop::syntax::{Prop, Var};
/// use basis_prop::semantics::{evaluate, Model};
///
/// let formula: Prop = "(p->~q)".parse().unwrap();
/// let mut model = Model::new();
/// model.insert(Var::from("p"), true);
/// model.insert(Var::from("q"), true);
///
/// assert_eq!(Ok(false), evaluate(&formula, &model));
/// ```
pub fn evaluate(formula: &Prop, model: &Model) -> Result<bool, Error> {
    match formula {
        Prop::Top => Ok(true),
        Prop::Bottom => Ok(false),
        Prop::Var(this) => model
            .get(this)
            .copied()
            .ok_or_else(|| Error::UnassignedVariable {
                variable: this.clone(),
            }),
        Prop::Not(this) => evaluate(&this.formula, model).map(|v| !v),
        Prop::Binary(this) => {
            let left = evaluate(&this.left, model)?;
            let right = evaluate(&this.right, model)?;
            Ok(this.op.apply(left, right))
        }
    }
}

/// Returns every model over `variables`, in truth-table order: the first variable is the
/// most significant and `false` comes before `true`.
///
/// **Note**: The number of models is `2^n` for `n` variables; [`Error::TooManyVariables`] is
/// returned when `n` exceeds [`MAX_VARIABLES`].
///
/// **Example**:
/// ```rust
/// # use basis_prop::syntax::Var;
/// use basis_prop::semantics::all_models;
///
/// let vars = vec![Var::from("p"), Var::from("q")];
/// let values: Vec<Vec<bool>> = all_models(&vars)
///     .unwrap()
///     .map(|m| m.values().copied().collect())
///     .collect();
///
/// assert_eq!(
///     vec![
///         vec![false, false],
///         vec![false, true],
///         vec![true, false],
///         vec![true, true]
///     ],
///     values
/// );
/// ```
///
/// [`Error::TooManyVariables`]: crate::semantics::Error::TooManyVariables
/// [`MAX_VARIABLES`]: crate::semantics::MAX_VARIABLES
pub fn all_models<'a>(variables: &'a [Var]) -> Result<impl Iterator<Item = Model> + 'a, Error> {
    let n = variables.len();
    let rows = if n <= MAX_VARIABLES {
        1u64.checked_shl(n as u32)
    } else {
        None
    }
    .ok_or(Error::TooManyVariables { count: n })?;

    Ok((0..rows).map(move |row| {
        variables
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), (row >> (n - 1 - i)) & 1 == 1))
            .collect()
    }))
}

/// Returns the truth values of `formula` in each of `models`, in order.
pub fn truth_values<'m>(
    formula: &Prop,
    models: impl IntoIterator<Item = &'m Model>,
) -> Result<Vec<bool>, Error> {
    models
        .into_iter()
        .map(|m| evaluate(formula, m))
        .collect()
}

/// Returns the truth table of `formula` over its own variables, in the order of
/// [`all_models`].
///
/// [`all_models`]: crate::semantics::all_models
pub fn truth_table(formula: &Prop) -> Result<Vec<(Model, bool)>, Error> {
    let vars = variables_of(formula);
    let models = all_models(&vars)?;
    models
        .map(|m| evaluate(formula, &m).map(|value| (m, value)))
        .collect()
}

/// Returns true if `formula` is true in every model.
pub fn is_tautology(formula: &Prop) -> Result<bool, Error> {
    Ok(truth_table(formula)?.into_iter().all(|(_, v)| v))
}

/// Returns true if `formula` is false in every model.
pub fn is_contradiction(formula: &Prop) -> Result<bool, Error> {
    is_satisfiable(formula).map(|v| !v)
}

/// Returns true if `formula` is true in some model.
pub fn is_satisfiable(formula: &Prop) -> Result<bool, Error> {
    Ok(truth_table(formula)?.into_iter().any(|(_, v)| v))
}

/// Returns true if `first` and `second` have the same truth value in every model over the
/// union of their variables.
///
/// **Example**:
/// ```rust
/// # use basis_prop::syntax::Prop;
/// use basis_prop::semantics::equivalent;
///
/// let first: Prop = "(p->q)".parse().unwrap();
/// let second: Prop = "(~p|q)".parse().unwrap();
/// let third: Prop = "(q->p)".parse().unwrap();
///
/// assert_eq!(Ok(true), equivalent(&first, &second));
/// assert_eq!(Ok(false), equivalent(&first, &third));
/// ```
pub fn equivalent(first: &Prop, second: &Prop) -> Result<bool, Error> {
    let mut vars = first.variables();
    vars.extend(second.variables());
    let vars: Vec<Var> = vars.into_iter().cloned().collect();
    let mut models = all_models(&vars)?;
    let equal = models.all(|m| evaluate(first, &m) == evaluate(second, &m));
    Ok(equal)
}

fn variables_of(formula: &Prop) -> Vec<Var> {
    formula.variables().into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{prop, v};

    fn model(values: &[(Var, bool)]) -> Model {
        values.iter().cloned().collect()
    }

    #[test]
    fn test_evaluate() {
        let m = model(&[(v!(p), true), (v!(q), false)]);
        assert_eq!(Ok(true), evaluate(&prop!("T"), &m));
        assert_eq!(Ok(false), evaluate(&prop!("F"), &m));
        assert_eq!(Ok(true), evaluate(&prop!("p"), &m));
        assert_eq!(Ok(true), evaluate(&prop!("~q"), &m));
        assert_eq!(Ok(false), evaluate(&prop!("(p&q)"), &m));
        assert_eq!(Ok(true), evaluate(&prop!("(p|q)"), &m));
        assert_eq!(Ok(false), evaluate(&prop!("(p->q)"), &m));
        assert_eq!(Ok(true), evaluate(&prop!("(q->p)"), &m));
        assert_eq!(Ok(false), evaluate(&prop!("(p<->q)"), &m));
        assert_eq!(Ok(true), evaluate(&prop!("(p+q)"), &m));
        assert_eq!(Ok(true), evaluate(&prop!("(p-&q)"), &m));
        assert_eq!(Ok(false), evaluate(&prop!("(p-|q)"), &m));
        assert_eq!(Ok(true), evaluate(&prop!("~((p-|q)|(T->F))"), &m));
    }

    #[test]
    fn test_evaluate_unassigned() {
        let m = model(&[(v!(p), true)]);
        assert_eq!(
            Err(Error::UnassignedVariable { variable: v!(r) }),
            evaluate(&prop!("(p&r)"), &m)
        );
        assert_eq!(
            "variable `r` is not assigned a truth value",
            evaluate(&prop!("r"), &m).err().unwrap().to_string()
        );
    }

    #[test]
    fn test_all_models() {
        assert_eq!(vec![Model::new()], all_models(&[]).unwrap().collect::<Vec<_>>());
        {
            let vars = vec![v!(q), v!(p)];
            let models = all_models(&vars).unwrap().collect::<Vec<_>>();
            assert_eq!(
                vec![
                    model(&[(v!(q), false), (v!(p), false)]),
                    model(&[(v!(q), false), (v!(p), true)]),
                    model(&[(v!(q), true), (v!(p), false)]),
                    model(&[(v!(q), true), (v!(p), true)]),
                ],
                models
            );
        }
        {
            let vars = vec![v!(p), v!(q), v!(r), v!(s)];
            assert_eq!(16, all_models(&vars).unwrap().count());
        }
    }

    #[test]
    fn test_all_models_too_many_variables() {
        let vars = (0..64).map(|i| Var::from(format!("p{}", i))).collect::<Vec<_>>();
        assert_eq!(
            Some(Error::TooManyVariables { count: 64 }),
            all_models(&vars).err()
        );
        assert_eq!(
            "cannot enumerate the models of 64 variables; at most 63 are supported",
            all_models(&vars).err().unwrap().to_string()
        );
        assert!(all_models(&vars[..63]).is_ok());

        let formula = vars
            .iter()
            .cloned()
            .map(Prop::from)
            .fold(Prop::Top, |acc, v| acc.and(v));
        assert_eq!(
            Err(Error::TooManyVariables { count: 64 }),
            truth_table(&formula)
        );
        assert_eq!(
            Err(Error::TooManyVariables { count: 64 }),
            equivalent(&formula, &Prop::Top)
        );
        assert_eq!(
            Err(Error::TooManyVariables { count: 64 }),
            is_tautology(&formula)
        );
    }

    #[test]
    fn test_truth_values() {
        let vars = vec![v!(p), v!(q)];
        let models = all_models(&vars).unwrap().collect::<Vec<_>>();
        assert_eq!(
            Ok(vec![true, true, false, true]),
            truth_values(&prop!("(p->q)"), &models)
        );
        assert_eq!(
            Ok(vec![false, true, true, false]),
            truth_values(&prop!("(p+q)"), &models)
        );
        assert!(truth_values(&prop!("(p|r)"), &models).is_err());
    }

    #[test]
    fn test_truth_table() {
        assert_eq!(Ok(vec![(Model::new(), true)]), truth_table(&prop!("(F->F)")));
        let table = truth_table(&prop!("~p")).unwrap();
        assert_eq!(
            vec![(model(&[(v!(p), false)]), true), (model(&[(v!(p), true)]), false)],
            table
        );
    }

    #[test]
    fn test_tautology_and_contradiction() {
        assert_eq!(Ok(true), is_tautology(&prop!("T")));
        assert_eq!(Ok(true), is_tautology(&prop!("(p|~p)")));
        assert_eq!(Ok(true), is_tautology(&prop!("((p->q)<->(~q->~p))")));
        assert_eq!(Ok(false), is_tautology(&prop!("(p->q)")));

        assert_eq!(Ok(true), is_contradiction(&prop!("F")));
        assert_eq!(Ok(true), is_contradiction(&prop!("(p&~p)")));
        assert_eq!(Ok(false), is_contradiction(&prop!("(p+q)")));

        assert_eq!(Ok(true), is_satisfiable(&prop!("(p-&q)")));
        assert_eq!(Ok(false), is_satisfiable(&prop!("(p-|~p)")));
    }

    #[test]
    fn test_equivalent() {
        assert_eq!(Ok(true), equivalent(&prop!("(p->q)"), &prop!("(~p|q)")));
        assert_eq!(Ok(true), equivalent(&prop!("(p<->q)"), &prop!("~(p+q)")));
        assert_eq!(Ok(true), equivalent(&prop!("(p-&q)"), &prop!("~(p&q)")));
        assert_eq!(Ok(true), equivalent(&prop!("T"), &prop!("(r|~r)")));
        assert_eq!(Ok(true), equivalent(&prop!("((p&q)|F)"), &prop!("(p&q)")));
        assert_eq!(Ok(false), equivalent(&prop!("(p-|q)"), &prop!("(p-&q)")));
        assert_eq!(Ok(false), equivalent(&prop!("p"), &prop!("q")));
    }
}
