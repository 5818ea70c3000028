/// Creates a [`Var`] from an identifier.
///
/// **Example**:
/// ```rust
/// use basis_prop::{syntax::Var, v};
///
/// assert_eq!(Var::from("p1"), v!(p1));
/// ```
///
/// [`Var`]: crate::syntax::Var
#[macro_export]
macro_rules! v {
    ($v:ident) => {
        $crate::syntax::Var::from(stringify!($v))
    };
}

/// Parses a [`Prop`] from a string literal, panicking if the literal is not a formula.
///
/// **Example**:
/// ```rust
/// use basis_prop::{prop, syntax::Prop};
///
/// assert_eq!(Prop::var("p").implies(Prop::Top), prop!("(p->T)"));
/// ```
///
/// [`Prop`]: crate::syntax::Prop
#[macro_export]
macro_rules! prop {
    ($s:literal) => {
        $s.parse::<$crate::syntax::Prop>()
            .unwrap_or_else(|e| panic!("invalid formula `{}`: {}", $s, e))
    };
}
