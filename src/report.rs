use anyhow::Result;

use crate::config::VisualizerConfig;
use crate::grid::{build_greek_sweep, build_price_surfaces, GreekSweep, PriceSurfaces};
use crate::market::{Greeks, MarketParameters, OptionType};
use crate::models::bs;

/// Everything one dashboard refresh displays
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValuationReport {
    /// Market inputs the report was built from
    pub market: MarketParameters,
    /// Call premium at the current inputs
    pub call_price: f64,
    /// Put premium at the current inputs
    pub put_price: f64,
    /// Greeks of the call at the current inputs
    pub call_greeks: Greeks,
    /// Greeks of the put at the current inputs
    pub put_greeks: Greeks,
    /// Call and put prices over the spot × volatility grid
    pub surfaces: PriceSurfaces,
    /// The selected Greek over the spot range
    pub sweep: GreekSweep,
}

/// Validate a config and evaluate prices, Greeks, surfaces and the Greek sweep.
///
/// # Errors
///
/// * `anyhow::Error` if any input is outside the accepted bounds or a grid
///   range is not strictly increasing
pub fn build_report(config: &VisualizerConfig) -> Result<ValuationReport> {
    config.validate()?;

    let market = config.market();
    let grid = &config.grid;

    let call_price = bs::price(&market, OptionType::Call);
    let put_price = bs::price(&market, OptionType::Put);

    if config.verbosity >= 1 {
        println!(
            "Pricing S={:.2} K={:.2} T={:.2} σ={:.2} r={:.3}: call={:.4} put={:.4}",
            market.spot, market.strike, market.time, market.vol, market.rate, call_price, put_price
        );
    }

    let surfaces = build_price_surfaces(market.strike, market.time, market.rate, grid);

    if config.verbosity >= 2 {
        println!(
            "Built {}x{} price surfaces over spot [{:.2}, {:.2}] and vol [{:.2}, {:.2}]",
            grid.surface_samples,
            grid.surface_samples,
            grid.spot_min,
            grid.spot_max,
            grid.vol_min,
            grid.vol_max
        );
    }

    let sweep = build_greek_sweep(
        &market,
        config.greek,
        config.option_type,
        grid.spot_min,
        grid.spot_max,
        grid.sweep_samples,
    );

    if config.verbosity >= 2 {
        println!(
            "Built {} sweep ({}) with {} points",
            config.greek,
            config.option_type,
            sweep.len()
        );
    }

    Ok(ValuationReport {
        market,
        call_price,
        put_price,
        call_greeks: bs::greeks(&market, OptionType::Call),
        put_greeks: bs::greeks(&market, OptionType::Put),
        surfaces,
        sweep,
    })
}
