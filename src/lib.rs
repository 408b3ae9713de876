//! # bs-surface: Black-Scholes Pricing, Greeks and Sensitivity Grids
//!
//! `bs-surface` prices European options on a non-dividend-paying underlying
//! with the closed-form Black-Scholes formulas, computes the five standard
//! Greeks, and samples both over spot/volatility grids for visualization.
//!
//! ## Core Features
//!
//! - **Pricing & Greeks Engine**: premium, delta, gamma, vega, theta and rho
//!   sharing a single d1/d2 evaluation
//! - **Price Surfaces**: call and put prices over an evenly spaced
//!   volatility × spot grid
//! - **Greek Sweeps**: one Greek along an evenly spaced spot range
//! - **Presentation Helpers**: TOML-configured inputs with bound checks, SVG
//!   heatmaps and line charts, CSV export
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_surface::{
//!     build_greek_sweep, build_price_surfaces, price, GreekKind, GridSpec, MarketParameters,
//!     OptionType,
//! };
//!
//! let params = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.2)?;
//! let call = price(&params, OptionType::Call);
//! assert!((call - 10.4506).abs() < 1e-4);
//!
//! let grid = GridSpec::default();
//! let surfaces = build_price_surfaces(params.strike, params.time, params.rate, &grid);
//! assert_eq!(surfaces.call.dims(), (10, 10));
//!
//! let sweep = build_greek_sweep(
//!     &params,
//!     GreekKind::Gamma,
//!     OptionType::Call,
//!     grid.spot_min,
//!     grid.spot_max,
//!     grid.sweep_samples,
//! );
//! assert_eq!(sweep.len(), 100);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Numerical Domain
//!
//! The engine and the grid evaluator do not validate their inputs. σ ≤ 0,
//! T ≤ 0, S ≤ 0 or K ≤ 0 produce NaN or infinite results, and a grid range
//! with min ≥ max produces constant or descending samples. Validate first
//! with [`MarketParameters::new`], [`GridSpec::validate`] or
//! `VisualizerConfig::validate`.
//!
//! ## Configuration Presets
//!
//! With the default `serde` feature, [`default_configs`] provides:
//! - `dashboard()`: the interactive dashboard's defaults
//! - `wide()`: the widest accepted spot and volatility ranges
//! - `minimal()`: two samples per axis, for quick checks

// ================================================================================================
// MODULES
// ================================================================================================

#[cfg(feature = "serde")]
pub mod config;
pub mod export;
pub mod grid;
pub mod market;
pub mod models;
pub mod render;
#[cfg(feature = "serde")]
pub mod report;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Value types
pub use market::{GreekKind, Greeks, MarketParameters, OptionType};

// Pricing & Greeks engine
pub use models::bs::{d1_d2, delta, gamma, greek, greeks, price, rho, theta, vega};

// Grid evaluation
pub use grid::{
    build_greek_sweep, build_price_surfaces, linspace, GreekPoint, GreekSweep, GridSpec,
    PriceSurface, PriceSurfaces, SURFACE_SAMPLES, SWEEP_SAMPLES,
};

// Parameter input and reporting
#[cfg(feature = "serde")]
pub use config::VisualizerConfig;
#[cfg(feature = "serde")]
pub use report::{build_report, ValuationReport};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured visualizer settings.
///
/// # Available Configurations
///
/// - [`dashboard()`]: S = K = 100, T = 1, r = 5%, σ = 20%, spot 80–120,
///   volatility 10–40%, Delta of a call
/// - [`wide()`]: same inputs, spot 50–200 and volatility 5–100%
/// - [`minimal()`]: same inputs, two samples per axis
#[cfg(feature = "serde")]
pub mod default_configs {
    use crate::config::VisualizerConfig;

    /// Defaults of the interactive dashboard.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bs_surface::{build_report, default_configs};
    ///
    /// let report = build_report(&default_configs::dashboard())?;
    /// assert_eq!(report.sweep.len(), 100);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn dashboard() -> VisualizerConfig {
        VisualizerConfig::dashboard()
    }

    /// Widest spot and volatility ranges the input bounds allow.
    pub fn wide() -> VisualizerConfig {
        VisualizerConfig::wide()
    }

    /// Two samples per axis; useful for smoke tests.
    pub fn minimal() -> VisualizerConfig {
        VisualizerConfig::minimal()
    }
}
