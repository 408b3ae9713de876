use super::sampling::linspace;
use super::types::{GreekPoint, GreekSweep};
use crate::market::{GreekKind, MarketParameters, OptionType};
use crate::models::bs;

/// Evaluate one Greek at `samples` evenly spaced spots over `[spot_min, spot_max]`
///
/// Strike, maturity, rate and volatility come from `base`; its `spot` field
/// is ignored. Points are returned in sample order, which is ascending spot
/// for a valid range, and there are always exactly `samples` of them.
///
/// # Example
///
/// ```rust
/// use bs_surface::{build_greek_sweep, GreekKind, MarketParameters, OptionType};
///
/// let base = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.2)?;
/// let sweep = build_greek_sweep(&base, GreekKind::Delta, OptionType::Call, 80.0, 120.0, 100);
/// assert_eq!(sweep.len(), 100);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn build_greek_sweep(
    base: &MarketParameters,
    greek: GreekKind,
    option_type: OptionType,
    spot_min: f64,
    spot_max: f64,
    samples: usize,
) -> GreekSweep {
    let points = linspace(spot_min, spot_max, samples)
        .into_iter()
        .map(|spot| GreekPoint {
            spot,
            value: bs::greek(&base.with_spot(spot), greek, option_type),
        })
        .collect();

    GreekSweep {
        greek,
        option_type,
        points,
    }
}
