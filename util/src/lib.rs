/// Poor man's approx assertion for tensors, or anything else exposing `as_slice()`
#[macro_export]
macro_rules! assert_approx_tensor_eq {
    ($x:expr, $y:expr, abstol = $tol:expr) => {{
        let (x, y) = (&$x, &$y);
        let max_absdiff = $crate::max_abs_diff(x.as_slice(), y.as_slice());
        let approx_eq = max_absdiff <= $tol;

        if !approx_eq {
            println!("abstol: {:e}", $tol);
            println!("left: {}", x);
            println!("right: {}", y);
            println!("max absdiff: {:e}", max_absdiff);
        }
        assert!(approx_eq);
    }};
}

#[macro_export]
macro_rules! assert_panics {
    ($e:expr) => {{
        use std::panic::catch_unwind;
        use std::stringify;
        let expr_string = stringify!($e);
        let result = catch_unwind(|| $e);
        if result.is_ok() {
            panic!("assert_panics!({}) failed.", expr_string);
        }
    }};
}

/// The largest absolute difference between corresponding entries.
///
/// # Panics
///
/// Panics if the slices have different lengths. A NaN in either slice propagates to the result.
pub fn max_abs_diff(x: &[f64], y: &[f64]) -> f64 {
    assert_eq!(x.len(), y.len(), "Slices must have the same length.");
    x.iter()
        .zip(y)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, |max, d| if d.is_nan() || d > max { d } else { max })
}
