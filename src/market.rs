//! Market inputs and result value types shared by the pricing engine and the
//! grid evaluator.
//!
//! All types here are plain `Copy` values. They carry no state between
//! evaluations: build one, price it, drop it.

use anyhow::{anyhow, Result};
use std::fmt;
use std::str::FromStr;

/// European option side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    #[default]
    Call,
    Put,
}

impl OptionType {
    pub const ALL: [OptionType; 2] = [OptionType::Call, OptionType::Put];

    pub fn is_call(self) -> bool {
        matches!(self, OptionType::Call)
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            other => Err(anyhow!("Invalid option type: {}", other)),
        }
    }
}

/// Which sensitivity to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GreekKind {
    #[default]
    Delta,
    Gamma,
    Vega,
    Theta,
    Rho,
}

impl GreekKind {
    pub const ALL: [GreekKind; 5] = [
        GreekKind::Delta,
        GreekKind::Gamma,
        GreekKind::Vega,
        GreekKind::Theta,
        GreekKind::Rho,
    ];

    /// Gamma and vega are the same for calls and puts.
    pub fn depends_on_option_type(self) -> bool {
        !matches!(self, GreekKind::Gamma | GreekKind::Vega)
    }

    /// Human readable name, as used for chart titles.
    pub fn name(self) -> &'static str {
        match self {
            GreekKind::Delta => "Delta",
            GreekKind::Gamma => "Gamma",
            GreekKind::Vega => "Vega",
            GreekKind::Theta => "Theta",
            GreekKind::Rho => "Rho",
        }
    }

    /// One-line reading of the Greek for the dashboard's guide table.
    pub fn description(self) -> &'static str {
        match self {
            GreekKind::Delta => "Sensitivity of option value to the underlying asset price.",
            GreekKind::Gamma => "Rate of change of Delta with asset price. Impacts hedging.",
            GreekKind::Vega => "Sensitivity to volatility, per 1% change in volatility.",
            GreekKind::Theta => "Time decay. Value lost each day, especially near expiry.",
            GreekKind::Rho => "Sensitivity to interest rates. Matters most for long-dated options.",
        }
    }
}

impl fmt::Display for GreekKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GreekKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "delta" => Ok(GreekKind::Delta),
            "gamma" => Ok(GreekKind::Gamma),
            "vega" => Ok(GreekKind::Vega),
            "theta" => Ok(GreekKind::Theta),
            "rho" => Ok(GreekKind::Rho),
            other => Err(anyhow!("Invalid greek: {}", other)),
        }
    }
}

/// Inputs to the Black-Scholes formulas for a non-dividend-paying underlying.
///
/// Fields are public so callers can build unchecked values; the engine does
/// not validate and will return non-finite numbers for out-of-domain inputs.
/// Use [`MarketParameters::new`] to get a checked value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketParameters {
    /// Spot price of the underlying (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to maturity in years (T)
    pub time: f64,
    /// Continuously compounded risk-free rate (r)
    pub rate: f64,
    /// Annualised volatility as a decimal (σ)
    pub vol: f64,
}

fn validate_market_params(spot: f64, strike: f64, time: f64, rate: f64, vol: f64) -> Result<()> {
    if spot <= 0.0 || !spot.is_finite() {
        return Err(anyhow!(
            "MarketParameters validation: spot (spot={}) must be > 0 and finite",
            spot
        ));
    }
    if strike <= 0.0 || !strike.is_finite() {
        return Err(anyhow!(
            "MarketParameters validation: strike (strike={}) must be > 0 and finite",
            strike
        ));
    }
    if time <= 0.0 || !time.is_finite() {
        return Err(anyhow!(
            "MarketParameters validation: time to maturity (time={}) must be > 0 and finite",
            time
        ));
    }
    if rate < 0.0 || !rate.is_finite() {
        return Err(anyhow!(
            "MarketParameters validation: rate (rate={}) must be >= 0 and finite",
            rate
        ));
    }
    if vol <= 0.0 || !vol.is_finite() {
        return Err(anyhow!(
            "MarketParameters validation: volatility (vol={}) must be > 0 and finite",
            vol
        ));
    }
    Ok(())
}

impl MarketParameters {
    /// Creates a validated parameter set.
    pub fn new(spot: f64, strike: f64, time: f64, rate: f64, vol: f64) -> Result<Self> {
        validate_market_params(spot, strike, time, rate, vol)?;

        Ok(Self {
            spot,
            strike,
            time,
            rate,
            vol,
        })
    }

    /// Validates the current parameter set.
    pub fn validate(&self) -> Result<()> {
        validate_market_params(self.spot, self.strike, self.time, self.rate, self.vol)
    }

    /// Copy with a different spot price.
    pub fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }

    /// Copy with a different volatility.
    pub fn with_vol(self, vol: f64) -> Self {
        Self { vol, ..self }
    }

    /// σ·√T, the denominator of d1.
    pub fn vol_sqrt_time(&self) -> f64 {
        self.vol * self.time.sqrt()
    }

    /// Discount factor e^(−rT).
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.time).exp()
    }
}

/// All five first-order sensitivities for one option.
///
/// Vega and rho are per one percentage point, theta is per calendar day.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    pub delta: f64,
    pub gamma: f64,
    pub vega: f64,
    pub theta: f64,
    pub rho: f64,
}

impl Greeks {
    pub fn get(&self, kind: GreekKind) -> f64 {
        match kind {
            GreekKind::Delta => self.delta,
            GreekKind::Gamma => self.gamma,
            GreekKind::Vega => self.vega,
            GreekKind::Theta => self.theta,
            GreekKind::Rho => self.rho,
        }
    }
}
