use super::sampling::linspace;
use super::types::{GridSpec, PriceSurface, PriceSurfaces};
use crate::market::{MarketParameters, OptionType};
use crate::models::bs;

/// Build call and put price surfaces over the grid's spot and volatility ranges
///
/// Strike, maturity and rate are held fixed. Each axis is sampled with
/// `grid.surface_samples` points, so the engine is invoked
/// `2 · surface_samples²` times. Row `i` corresponds to the `i`-th volatility
/// sample and column `j` to the `j`-th spot sample.
///
/// # Example
///
/// ```rust
/// use bs_surface::{build_price_surfaces, GridSpec};
///
/// let surfaces = build_price_surfaces(100.0, 1.0, 0.05, &GridSpec::default());
/// assert_eq!(surfaces.call.dims(), (10, 10));
/// assert_eq!(surfaces.put.dims(), (10, 10));
/// ```
pub fn build_price_surfaces(strike: f64, time: f64, rate: f64, grid: &GridSpec) -> PriceSurfaces {
    let spot_samples = linspace(grid.spot_min, grid.spot_max, grid.surface_samples);
    let vol_samples = linspace(grid.vol_min, grid.vol_max, grid.surface_samples);

    let mut call_values = Vec::with_capacity(vol_samples.len());
    let mut put_values = Vec::with_capacity(vol_samples.len());

    for &vol in &vol_samples {
        let mut call_row = Vec::with_capacity(spot_samples.len());
        let mut put_row = Vec::with_capacity(spot_samples.len());

        for &spot in &spot_samples {
            let params = MarketParameters {
                spot,
                strike,
                time,
                rate,
                vol,
            };
            call_row.push(bs::price(&params, OptionType::Call));
            put_row.push(bs::price(&params, OptionType::Put));
        }

        call_values.push(call_row);
        put_values.push(put_row);
    }

    PriceSurfaces {
        call: PriceSurface {
            option_type: OptionType::Call,
            spot_samples: spot_samples.clone(),
            vol_samples: vol_samples.clone(),
            values: call_values,
        },
        put: PriceSurface {
            option_type: OptionType::Put,
            spot_samples,
            vol_samples,
            values: put_values,
        },
    }
}
