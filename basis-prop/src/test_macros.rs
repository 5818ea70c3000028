#[macro_export]
macro_rules! assert_debug_string {
    ($expected:expr, $value:expr) => {{
        match (&$expected, &$value) {
            (expected_val, val) => assert_eq!(*expected_val, format!("{:?}", val)),
        }
    }};
    ($expected:expr, $value:expr ,) => {
        $crate::assert_debug_string!($expected, $value)
    };
}

#[macro_export]
macro_rules! assert_debug_strings {
    ($expected:expr, $value:expr) => {{
        match (&$expected, &$value) {
            (expected_val, val) => {
                let mut strings = val.iter().map(|v| format!("{:?}", v));
                assert_eq!(*expected_val, itertools::Itertools::join(&mut strings, "\n"))
            }
        }
    }};
    ($expected:expr, $value:expr ,) => {
        $crate::assert_debug_strings!($expected, $value)
    };
}

#[macro_export]
macro_rules! assert_equivalent {
    ($expected:expr, $value:expr) => {{
        let expected: $crate::syntax::Prop = $expected.clone().into();
        let value: $crate::syntax::Prop = $value.clone().into();
        assert_eq!(
            Ok(true),
            $crate::semantics::equivalent(&expected, &value),
            "`{:?}` is not equivalent to `{:?}`",
            value,
            expected
        )
    }};
    ($expected:expr, $value:expr ,) => {
        $crate::assert_equivalent!($expected, $value)
    };
}
