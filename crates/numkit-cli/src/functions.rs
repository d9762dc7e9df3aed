//! Study functions of the experiments and their derivatives.

use numkit_math::sampling::Function;

/// Label of [`exp_sin`].
pub const EXP_SIN: &str = "e**(-x/5)-sin(x)";

/// Label of [`quartic_sin`].
pub const QUARTIC_SIN: &str = "(x-3)**4*sin(x)";

/// Label of [`runge`].
pub const RUNGE: &str = "1/(1+x**2)";

/// `e^(-x/5) - sin x`, with four roots on [0, 10].
pub fn exp_sin(x: f64) -> f64 {
    (-x / 5.0).exp() - x.sin()
}

pub fn exp_sin_derivative(x: f64) -> f64 {
    -(-x / 5.0).exp() / 5.0 - x.cos()
}

/// `(x - 3)⁴ sin x`, with a root of multiplicity 4 at 3.
pub fn quartic_sin(x: f64) -> f64 {
    (x - 3.0).powi(4) * x.sin()
}

pub fn quartic_sin_derivative(x: f64) -> f64 {
    (x - 3.0).powi(3) * (4.0 * x.sin() + (x - 3.0) * x.cos())
}

pub fn quartic_sin_second_derivative(x: f64) -> f64 {
    let u = x - 3.0;
    12.0 * u * u * x.sin() + 8.0 * u.powi(3) * x.cos() - u.powi(4) * x.sin()
}

/// Runge's function `1 / (1 + x²)`.
pub fn runge(x: f64) -> f64 {
    1.0 / (1.0 + x * x)
}

/// `(x - 4)^power · sin x` and its derivative.
pub fn repeated_root(power: i32) -> (Function<'static>, impl Fn(f64) -> f64 + Copy) {
    let p = f64::from(power);
    let f = Function::named(format!("(x-4)**{power}*sin(x)"), move |x: f64| {
        (x - 4.0).powi(power) * x.sin()
    });
    let df = move |x: f64| (x - 4.0).powi(power - 1) * (p * x.sin() + (x - 4.0) * x.cos());
    (f, df)
}
