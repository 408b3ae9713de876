//! Closed-form Black-Scholes prices and Greeks for European options on a
//! non-dividend-paying underlying.
//!
//! Nothing here validates its inputs. σ = 0 or T = 0 divides by zero in d1 and
//! S ≤ 0 or K ≤ 0 takes the log of a non-positive number; the result is then
//! NaN or ±inf and it is up to the caller to reject such inputs beforehand
//! (see [`MarketParameters::new`]).

use crate::market::{GreekKind, Greeks, MarketParameters, OptionType};
use crate::models::utils::{norm_cdf, norm_pdf};

/// Calendar days used to express theta as a per-day decay.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Vega and rho are reported per one percentage point move.
pub const PERCENT: f64 = 100.0;

/// d1 and d2, computed once and shared by every formula below.
pub fn d1_d2(p: &MarketParameters) -> (f64, f64) {
    let vol_sqrt_t = p.vol_sqrt_time();
    let d1 = ((p.spot / p.strike).ln() + (p.rate + 0.5 * p.vol * p.vol) * p.time) / vol_sqrt_t;
    (d1, d1 - vol_sqrt_t)
}

/// d2 written directly with the (r − σ²/2) drift instead of d1 − σ√T.
///
/// Algebraically the same as the second element of [`d1_d2`]; kept so the
/// two floating-point paths can be compared.
pub fn drift_d2(p: &MarketParameters) -> f64 {
    ((p.spot / p.strike).ln() + (p.rate - 0.5 * p.vol * p.vol) * p.time) / p.vol_sqrt_time()
}

/// Option premium.
pub fn price(p: &MarketParameters, option_type: OptionType) -> f64 {
    let (d1, d2) = d1_d2(p);
    let df = p.discount_factor();
    match option_type {
        OptionType::Call => p.spot * norm_cdf(d1) - p.strike * df * norm_cdf(d2),
        OptionType::Put => p.strike * df * norm_cdf(-d2) - p.spot * norm_cdf(-d1),
    }
}

/// ∂V/∂S. Calls lie in [0, 1], puts in [−1, 0].
pub fn delta(p: &MarketParameters, option_type: OptionType) -> f64 {
    let (d1, _) = d1_d2(p);
    delta_from_d1(d1, option_type)
}

fn delta_from_d1(d1: f64, option_type: OptionType) -> f64 {
    match option_type {
        OptionType::Call => norm_cdf(d1),
        OptionType::Put => norm_cdf(d1) - 1.0,
    }
}

/// ∂²V/∂S², identical for calls and puts.
pub fn gamma(p: &MarketParameters) -> f64 {
    let (d1, _) = d1_d2(p);
    gamma_from_d1(p, d1)
}

fn gamma_from_d1(p: &MarketParameters, d1: f64) -> f64 {
    norm_pdf(d1) / (p.spot * p.vol_sqrt_time())
}

/// ∂V/∂σ per one volatility point, identical for calls and puts.
pub fn vega(p: &MarketParameters) -> f64 {
    let (d1, _) = d1_d2(p);
    vega_from_d1(p, d1)
}

fn vega_from_d1(p: &MarketParameters, d1: f64) -> f64 {
    p.spot * norm_pdf(d1) * p.time.sqrt() / PERCENT
}

/// Time decay per calendar day.
pub fn theta(p: &MarketParameters, option_type: OptionType) -> f64 {
    let (d1, d2) = d1_d2(p);
    theta_from_d(p, d1, d2, option_type)
}

fn theta_from_d(p: &MarketParameters, d1: f64, d2: f64, option_type: OptionType) -> f64 {
    let term1 = -(p.spot * norm_pdf(d1) * p.vol) / (2.0 * p.time.sqrt());
    let carry = p.rate * p.strike * p.discount_factor();
    let annual = match option_type {
        OptionType::Call => term1 - carry * norm_cdf(d2),
        OptionType::Put => term1 + carry * norm_cdf(-d2),
    };
    annual / DAYS_PER_YEAR
}

/// ∂V/∂r per one rate point.
pub fn rho(p: &MarketParameters, option_type: OptionType) -> f64 {
    let (_, d2) = d1_d2(p);
    rho_from_d2(p, d2, option_type)
}

fn rho_from_d2(p: &MarketParameters, d2: f64, option_type: OptionType) -> f64 {
    let factor = p.strike * p.time * p.discount_factor() / PERCENT;
    match option_type {
        OptionType::Call => factor * norm_cdf(d2),
        OptionType::Put => -factor * norm_cdf(-d2),
    }
}

/// Evaluates one Greek. `option_type` is ignored for gamma and vega.
pub fn greek(p: &MarketParameters, kind: GreekKind, option_type: OptionType) -> f64 {
    match kind {
        GreekKind::Delta => delta(p, option_type),
        GreekKind::Gamma => gamma(p),
        GreekKind::Vega => vega(p),
        GreekKind::Theta => theta(p, option_type),
        GreekKind::Rho => rho(p, option_type),
    }
}

/// All five Greeks from a single d1/d2 evaluation.
pub fn greeks(p: &MarketParameters, option_type: OptionType) -> Greeks {
    let (d1, d2) = d1_d2(p);
    Greeks {
        delta: delta_from_d1(d1, option_type),
        gamma: gamma_from_d1(p, d1),
        vega: vega_from_d1(p, d1),
        theta: theta_from_d(p, d1, d2, option_type),
        rho: rho_from_d2(p, d2, option_type),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atm() -> MarketParameters {
        MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap()
    }

    #[test]
    fn test_d1_d2_reference() {
        let (d1, d2) = d1_d2(&atm());
        assert!((d1 - 0.35).abs() < 1e-12);
        assert!((d2 - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_drift_d2_matches_shared_d2() {
        let spots = [50.0, 80.0, 100.0, 120.0, 200.0];
        let vols = [0.01, 0.05, 0.2, 0.6, 1.0];
        let times = [0.01, 0.25, 1.0, 10.0];
        let rates = [0.0, 0.05, 0.15];

        for &s in &spots {
            for &v in &vols {
                for &t in &times {
                    for &r in &rates {
                        let p = MarketParameters::new(s, 100.0, t, r, v).unwrap();
                        let (_, d2) = d1_d2(&p);
                        let alt = drift_d2(&p);
                        let scale = d2.abs().max(1.0);
                        assert!(
                            (d2 - alt).abs() <= 1e-9 * scale,
                            "d2 mismatch at S={} σ={} T={} r={}: {} vs {}",
                            s,
                            v,
                            t,
                            r,
                            d2,
                            alt
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_greeks_bundle_matches_single_calls() {
        let p = MarketParameters::new(87.0, 100.0, 0.75, 0.03, 0.35).unwrap();
        for option_type in OptionType::ALL {
            let g = greeks(&p, option_type);
            for kind in GreekKind::ALL {
                assert_eq!(g.get(kind), greek(&p, kind, option_type));
            }
        }
    }

    #[test]
    fn test_degenerate_inputs_are_not_finite() {
        let zero_vol = MarketParameters {
            vol: 0.0,
            ..atm()
        };
        assert!(!gamma(&zero_vol).is_finite());

        // ATM with T = 0 gives 0/0 in d1
        let expired = MarketParameters {
            time: 0.0,
            ..atm()
        };
        assert!(price(&expired, OptionType::Call).is_nan());
        assert!(delta(&expired, OptionType::Put).is_nan());

        let negative_spot = MarketParameters {
            spot: -1.0,
            ..atm()
        };
        assert!(price(&negative_spot, OptionType::Put).is_nan());
    }
}
