pub mod bs;

/// Normal distribution helpers used by the pricing formulas
pub mod utils {
    use statrs::function::erf::erfc;
    use std::f64::consts::{PI, SQRT_2};

    /// Standard normal cumulative distribution function Φ(x)
    ///
    /// Written in terms of `erfc` so the left tail keeps its precision.
    pub fn norm_cdf(x: f64) -> f64 {
        0.5 * erfc(-x / SQRT_2)
    }

    /// Standard normal probability density function φ(x)
    pub fn norm_pdf(x: f64) -> f64 {
        (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
    }

}
