/// Construct a tree from the lisp expresion.
///
/// Identifiers become variables, literals become constants, and `(const
/// expr)` turns any `f64` expression into a constant.
///
/// ```
/// use exprtree::{deftree, Environment};
///
/// let tree = deftree!(+ (* 2.3 Xray) (* Yellow (- Zebra Xray))).unwrap();
/// let env: Environment = [("Xray", 1.), ("Yellow", 2.), ("Zebra", 3.)]
///     .into_iter()
///     .collect();
/// assert_eq!(tree.eval(&env), Ok(2.3 + 2. * (3. - 1.)));
/// ```
#[macro_export]
macro_rules! deftree {
    () => {}; // empty;
    (($($a:tt)*)) => { // Unwrap redundant parens.
        $crate::deftree!($($a)*)
    };
    ($a:block) => { // Block expressions.
        $a
    };
    // Derivatives.
    (sderiv $tree:tt $var:ident) => {
        $crate::derivative::symbolic_deriv($crate::deftree!($tree), stringify!($var))
    };
    // Constants.
    (const $tt:expr) => {{
        let out: Result<$crate::Tree, $crate::Error> = Ok($crate::Tree::constant(f64::from($tt)));
        out
    }};
    // Binary ops with function names.
    ($binary_op:ident $a:tt $b:tt) => {
        $crate::$binary_op($crate::deftree!($a), $crate::deftree!($b))
    };
    // Operators.
    (- $a:tt $b:tt) => {
        $crate::sub($crate::deftree!($a), $crate::deftree!($b))
    };
    (+ $a:tt $b:tt) => {
        $crate::add($crate::deftree!($a), $crate::deftree!($b))
    };
    (/ $a:tt $b:tt) => {
        $crate::div($crate::deftree!($a), $crate::deftree!($b))
    };
    (* $a:tt $b:tt) => {
        $crate::mul($crate::deftree!($a), $crate::deftree!($b))
    };
    // Constants
    ($a:literal) => {{
        let out: Result<$crate::Tree, $crate::Error> = Ok($crate::Tree::constant(f64::from($a)));
        out
    }};
    // Variables
    ($a:ident) => {{
        let out: Result<$crate::Tree, $crate::Error> = Ok($crate::Tree::variable(stringify!($a)));
        out
    }};
}

/// Assert that the floating point numbers are equal within the given epsilon.
#[macro_export]
macro_rules! assert_float_eq {
    ($a:expr, $b:expr, $eps:expr, $debug:expr) => {{
        // Make variables to avoid evaluating experssions multiple times.
        let a = $a;
        let b = $b;
        let eps = $eps;
        let error = f64::abs(a - b);
        if error > eps {
            eprintln!("{:?}", $debug);
        }
        assert!(
            error <= eps,
            "Assertion failed: |({}) - ({})| = {:e} <= {:e}",
            a,
            b,
            error,
            eps
        );
    }};
    ($a:expr, $b:expr, $eps:expr) => {
        $crate::assert_float_eq!($a, $b, $eps, "")
    };
    ($a:expr, $b:expr) => {
        $crate::assert_float_eq!($a, $b, f64::EPSILON)
    };
}
