//! Parameter-input layer for the visualizer.
//!
//! Collects the market inputs, grid ranges and Greek selection, loads them
//! from TOML, and enforces the input bounds before anything reaches the grid
//! evaluator. The engine and evaluator never validate; this is where bad input
//! is rejected.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use crate::grid::GridSpec;
use crate::market::{GreekKind, MarketParameters, OptionType};

/// Accepted spot and strike prices.
pub const PRICE_BOUNDS: (f64, f64) = (1.0, 10_000.0);
/// Accepted time to maturity in years.
pub const TIME_BOUNDS: (f64, f64) = (0.01, 10.0);
/// Smallest accepted volatility.
pub const MIN_VOL: f64 = 0.01;
/// Smallest accepted risk-free rate.
pub const MIN_RATE: f64 = 0.0;
/// Accepted bounds of the grid spot range.
pub const SPOT_RANGE_BOUNDS: (f64, f64) = (50.0, 200.0);
/// Accepted bounds of the grid volatility range.
pub const VOL_RANGE_BOUNDS: (f64, f64) = (0.05, 1.0);

/// Everything the dashboard needs to produce one report
///
/// Every field has a default, so an empty TOML document is a valid config.
///
/// ```toml
/// spot = 105.0
/// vol = 0.25
/// greek = "gamma"
/// option_type = "put"
///
/// [grid]
/// spot_min = 60.0
/// spot_max = 150.0
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct VisualizerConfig {
    /// Current asset price
    #[serde(default = "default_spot")]
    pub spot: f64,

    /// Strike price
    #[serde(default = "default_strike")]
    pub strike: f64,

    /// Time to maturity in years
    #[serde(default = "default_time")]
    pub time: f64,

    /// Risk-free rate as a decimal
    #[serde(default = "default_rate")]
    pub rate: f64,

    /// Volatility as a decimal
    #[serde(default = "default_vol")]
    pub vol: f64,

    /// Greek shown in the sweep chart
    #[serde(default)]
    pub greek: GreekKind,

    /// Option side used for the Greek sweep
    #[serde(default)]
    pub option_type: OptionType,

    /// Spot and volatility ranges for the heatmaps and sweep
    #[serde(default)]
    pub grid: GridSpec,

    /// Verbosity level (0=silent, 1=minimal, 2=normal)
    #[serde(default)]
    pub verbosity: u8,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            spot: default_spot(),
            strike: default_strike(),
            time: default_time(),
            rate: default_rate(),
            vol: default_vol(),
            greek: GreekKind::default(),
            option_type: OptionType::default(),
            grid: GridSpec::default(),
            verbosity: 0,
        }
    }
}

impl VisualizerConfig {
    /// Parses a config from TOML text. Missing fields take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse visualizer config")
    }

    /// Reads and parses a TOML config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&text)
    }

    /// The market inputs as engine parameters (unchecked).
    pub fn market(&self) -> MarketParameters {
        MarketParameters {
            spot: self.spot,
            strike: self.strike,
            time: self.time,
            rate: self.rate,
            vol: self.vol,
        }
    }

    /// Enforces the input bounds and range ordering.
    pub fn validate(&self) -> Result<()> {
        check_within("spot", self.spot, PRICE_BOUNDS)?;
        check_within("strike", self.strike, PRICE_BOUNDS)?;
        check_within("time", self.time, TIME_BOUNDS)?;
        check_at_least("rate", self.rate, MIN_RATE)?;
        check_at_least("vol", self.vol, MIN_VOL)?;

        check_within("grid.spot_min", self.grid.spot_min, SPOT_RANGE_BOUNDS)?;
        check_within("grid.spot_max", self.grid.spot_max, SPOT_RANGE_BOUNDS)?;
        check_within("grid.vol_min", self.grid.vol_min, VOL_RANGE_BOUNDS)?;
        check_within("grid.vol_max", self.grid.vol_max, VOL_RANGE_BOUNDS)?;

        self.grid.validate()?;
        self.market().validate()
    }

    /// Defaults of the interactive dashboard.
    pub fn dashboard() -> Self {
        Self::default()
    }

    /// The widest ranges the bounds allow.
    pub fn wide() -> Self {
        Self {
            grid: GridSpec {
                spot_min: SPOT_RANGE_BOUNDS.0,
                spot_max: SPOT_RANGE_BOUNDS.1,
                vol_min: VOL_RANGE_BOUNDS.0,
                vol_max: VOL_RANGE_BOUNDS.1,
                ..GridSpec::default()
            },
            ..Self::default()
        }
    }

    /// Smallest valid grid, for quick checks.
    pub fn minimal() -> Self {
        Self {
            grid: GridSpec {
                surface_samples: 2,
                sweep_samples: 2,
                ..GridSpec::default()
            },
            ..Self::default()
        }
    }
}

fn check_within(name: &str, value: f64, (lo, hi): (f64, f64)) -> Result<()> {
    if !value.is_finite() || !(lo..=hi).contains(&value) {
        return Err(anyhow!(
            "Config validation: {} ({}) must be within [{}, {}]",
            name,
            value,
            lo,
            hi
        ));
    }
    Ok(())
}

fn check_at_least(name: &str, value: f64, lo: f64) -> Result<()> {
    if !value.is_finite() || value < lo {
        return Err(anyhow!(
            "Config validation: {} ({}) must be >= {}",
            name,
            value,
            lo
        ));
    }
    Ok(())
}

fn default_spot() -> f64 {
    100.0
}

fn default_strike() -> f64 {
    100.0
}

fn default_time() -> f64 {
    1.0
}

fn default_rate() -> f64 {
    0.05
}

fn default_vol() -> f64 {
    0.2
}
