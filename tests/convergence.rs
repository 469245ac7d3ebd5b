use odeint::prelude::*;

mod common;
use common::decay_error;

/// Ratios of errors when the step is halved twice (h = 0.1, 0.05, 0.025).
fn ratios(method: Method) -> (f64, f64) {
    let e1 = decay_error(method, 10);
    let e2 = decay_error(method, 20);
    let e3 = decay_error(method, 40);
    (e1 / e2, e2 / e3)
}

#[test]
fn explicit_euler_is_first_order() {
    let (r1, r2) = ratios(Method::ExplicitEuler);
    assert!((1.8..2.2).contains(&r1), "ratio {}", r1);
    assert!((1.8..2.2).contains(&r2), "ratio {}", r2);
}

#[test]
fn runge_kutta_4_is_fourth_order() {
    let (r1, r2) = ratios(Method::RungeKutta4);
    assert!((14.0..18.0).contains(&r1), "ratio {}", r1);
    assert!((14.0..18.0).contains(&r2), "ratio {}", r2);
}

#[test]
fn adams_bashforth_2_is_second_order() {
    // The Euler bootstrap inflates the coarse-grid error a little.
    let (r1, r2) = ratios(Method::AdamsBashforth2);
    assert!((3.5..5.0).contains(&r1), "ratio {}", r1);
    assert!((3.5..5.0).contains(&r2), "ratio {}", r2);
}

#[test]
fn higher_order_is_more_accurate_on_the_same_grid() {
    let ee = decay_error(Method::ExplicitEuler, 20);
    let ab = decay_error(Method::AdamsBashforth2, 20);
    let rk = decay_error(Method::RungeKutta4, 20);
    assert!(rk < ab && ab < ee);
}
