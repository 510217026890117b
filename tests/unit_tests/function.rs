use matrixcompare::assert_scalar_eq;
use proptest::prelude::*;
use std::f64::consts::PI;
use std::thread;
use tessera::function::{Function, ScalarFunction};
use tessera::proptest::vector;
use tessera::tensor::Vector;

fn cosine() -> ScalarFunction<f64, 2> {
    Function::new(|x: &Vector<f64, 2>| (x[0] * x[1]).cos())
}

#[test]
fn sum_of_functions_evaluates_to_sum_of_values() {
    let f1 = cosine();
    let f2 = Function::constant(5.0);
    let f3 = &f1 + &f2;

    let x = Vector::from([1.0, PI]);
    assert_eq!(f1.evaluate(&x), -1.0);
    assert_eq!(f2.evaluate(&x), 5.0);
    assert_eq!(f3.evaluate(&x), 4.0);
    // Evaluation is pure
    assert_eq!(f3.evaluate(&x), f3.evaluate(&x));
}

#[test]
fn composition_identities_hold() {
    let three: f64 = 3.0;
    let half: f64 = 0.5;

    let f3 = cosine() + Function::constant(5.0);
    let x = Vector::from([1.0, PI]);

    let f4 = &f3 + &f3 + &f3;
    let f5 = three * &f3;
    assert_scalar_eq!(f4.evaluate(&x), f5.evaluate(&x), comp = abs, tol = 1e-15);

    let f6 = &f4 - &f3;
    let f7 = &f5 - &f3;
    assert_scalar_eq!(f6.evaluate(&x), f7.evaluate(&x), comp = abs, tol = 1e-15);

    let f8 = (&f7 * half) / half;
    assert_scalar_eq!(f7.evaluate(&x), f8.evaluate(&x), comp = abs, tol = 1e-15);

    let f9 = (half / &f7) * &f7;
    assert_scalar_eq!(f9.evaluate(&x), 0.5, comp = abs, tol = 1e-15);

    let f10 = (PI + &f7) - &f7;
    assert_scalar_eq!(f10.evaluate(&x), PI, comp = abs, tol = 1e-15);

    let f11 = (PI + &f7) - 2.0 * PI;
    assert_scalar_eq!(f11.evaluate(&x), f7.evaluate(&x) - PI, comp = abs, tol = 1e-15);
}

#[test]
fn scalar_operations_on_either_side() {
    let f = Function::new(|x: &f64| 2.0 * x);
    let a: f64 = 4.0;

    assert_eq!((&f + a).evaluate(&1.0), 6.0);
    assert_eq!((a + &f).evaluate(&1.0), 6.0);
    assert_eq!((&f - a).evaluate(&1.0), -2.0);
    assert_eq!((a - &f).evaluate(&1.0), 2.0);
    assert_eq!((&f * a).evaluate(&1.0), 8.0);
    assert_eq!((a * &f).evaluate(&1.0), 8.0);
    assert_eq!((&f / a).evaluate(&1.0), 0.5);
    assert_eq!((a / &f).evaluate(&1.0), 2.0);
    assert_eq!((-&f).evaluate(&1.0), -2.0);
    assert_eq!((-f).evaluate(&-1.0), 2.0);
}

#[test]
fn float_arithmetic_next_to_function_operators() {
    let f = Function::new(|x: &f64| x * 2.0);
    let (a, b): (f64, f64) = (2.0, 3.0);
    assert_eq!(a * b, 6.0);
    assert_eq!((a * &f).evaluate(&b), 12.0);
    assert_eq!((1.0f32 - Function::new(|x: &f32| *x)).evaluate(&0.25), 0.75);
}

#[test]
fn products_and_quotients_of_functions() {
    let f = Function::new(|x: &f64| x + 1.0);
    let g = Function::new(|x: &f64| x * x);

    assert_eq!((&f * &g).evaluate(&2.0), 12.0);
    assert_eq!((&f / &g).evaluate(&2.0), 0.75);
    assert_eq!((f.clone() - g.clone()).evaluate(&2.0), -1.0);
    assert_eq!((f + g).evaluate(&2.0), 7.0);
}

#[test]
fn compose_nests_evaluation() {
    let square = Function::new(|x: &f64| x * x);
    let norm = Function::new(|x: &Vector<f64, 2>| x.norm());

    let norm_squared = square.compose(&norm);
    assert_scalar_eq!(norm_squared.evaluate(&Vector::from([3.0, 4.0])), 25.0, comp = abs, tol = 1e-13);
}

#[test]
fn vector_valued_functions_compose_componentwise() {
    let f = Function::new(|x: &f64| Vector::from([*x, 2.0 * x]));
    let g = Function::constant(Vector::from([1.0, 1.0]));
    let scale: f64 = 3.0;

    let h = (&f + &g) * scale;
    assert_eq!(h.evaluate(&1.0), Vector::from([6.0, 9.0]));
    assert_eq!((scale * &f).evaluate(&1.0), Vector::from([3.0, 6.0]));
}

#[test]
fn functions_can_be_evaluated_from_several_threads() {
    let f = cosine();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let f = f.clone();
            thread::spawn(move || f.evaluate(&Vector::from([i as f64, 1.0])))
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), (i as f64).cos());
    }
}

#[test]
fn functions_have_opaque_debug_output() {
    assert_eq!(format!("{:?}", cosine()), "Function { .. }");
}

proptest! {
    #[test]
    fn arithmetic_laws_hold_at_sampled_points(x in vector::<2>(), a in 0.5..10.0f64) {
        let f = cosine();
        let g = Function::new(|x: &Vector<f64, 2>| x[0] - 2.0 * x[1]);
        let (fx, gx) = (f.evaluate(&x), g.evaluate(&x));

        prop_assert_eq!((&f + &g).evaluate(&x), fx + gx);
        prop_assert_eq!((&f - &g).evaluate(&x), fx - gx);
        prop_assert_eq!((&f * &g).evaluate(&x), fx * gx);
        prop_assert_eq!((a * &f).evaluate(&x), a * fx);
        prop_assert_eq!((&f * a).evaluate(&x), a * fx);
        prop_assert_eq!((&f / a).evaluate(&x), fx / a);
        prop_assert_eq!((a / &f).evaluate(&x), a / fx);
        prop_assert_eq!((a + &f).evaluate(&x), a + fx);
        prop_assert_eq!((a - &f).evaluate(&x), a - fx);
        prop_assert_eq!((&f + a).evaluate(&x), fx + a);
        prop_assert_eq!((&f - a).evaluate(&x), fx - a);
        prop_assert_eq!((-&f).evaluate(&x), -fx);
    }
}
