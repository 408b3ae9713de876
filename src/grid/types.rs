use anyhow::{anyhow, Result};

use crate::market::{GreekKind, OptionType};

/// Sample count for each axis of a price surface.
pub const SURFACE_SAMPLES: usize = 10;

/// Sample count for a Greek sweep over spot.
pub const SWEEP_SAMPLES: usize = 100;

/// Ranges and sample counts for grid evaluation
///
/// # Example
///
/// ```rust
/// # use bs_surface::GridSpec;
/// let grid = GridSpec {
///     spot_min: 90.0,
///     spot_max: 110.0,
///     ..GridSpec::default()
/// };
/// assert!(grid.validate().is_ok());
/// assert_eq!(grid.surface_samples, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridSpec {
    /// Lowest spot sample (inclusive)
    pub spot_min: f64,
    /// Highest spot sample (inclusive)
    pub spot_max: f64,
    /// Lowest volatility sample (inclusive)
    pub vol_min: f64,
    /// Highest volatility sample (inclusive)
    pub vol_max: f64,
    /// Samples per axis for the price surfaces
    pub surface_samples: usize,
    /// Spot samples for the Greek sweep
    pub sweep_samples: usize,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            spot_min: 80.0,
            spot_max: 120.0,
            vol_min: 0.1,
            vol_max: 0.4,
            surface_samples: SURFACE_SAMPLES,
            sweep_samples: SWEEP_SAMPLES,
        }
    }
}

impl GridSpec {
    /// Checks that both ranges are strictly increasing, positive and finite
    /// and that each axis has at least two samples.
    ///
    /// The evaluator itself never calls this: an invalid range simply produces
    /// degenerate sample vectors.
    pub fn validate(&self) -> Result<()> {
        if !self.spot_min.is_finite() || !self.spot_max.is_finite() {
            return Err(anyhow!(
                "GridSpec validation: spot range [{}, {}] must be finite",
                self.spot_min,
                self.spot_max
            ));
        }
        if self.spot_min <= 0.0 {
            return Err(anyhow!(
                "GridSpec validation: spot_min (spot_min={}) must be > 0",
                self.spot_min
            ));
        }
        if self.spot_min >= self.spot_max {
            return Err(anyhow!(
                "GridSpec validation: spot_min ({}) must be < spot_max ({})",
                self.spot_min,
                self.spot_max
            ));
        }
        if !self.vol_min.is_finite() || !self.vol_max.is_finite() {
            return Err(anyhow!(
                "GridSpec validation: volatility range [{}, {}] must be finite",
                self.vol_min,
                self.vol_max
            ));
        }
        if self.vol_min <= 0.0 {
            return Err(anyhow!(
                "GridSpec validation: vol_min (vol_min={}) must be > 0",
                self.vol_min
            ));
        }
        if self.vol_min >= self.vol_max {
            return Err(anyhow!(
                "GridSpec validation: vol_min ({}) must be < vol_max ({})",
                self.vol_min,
                self.vol_max
            ));
        }
        if self.surface_samples < 2 || self.sweep_samples < 2 {
            return Err(anyhow!(
                "GridSpec validation: sample counts (surface={}, sweep={}) must be >= 2",
                self.surface_samples,
                self.sweep_samples
            ));
        }
        Ok(())
    }
}

/// Option premiums over a volatility × spot grid.
///
/// `values[i][j]` is the price at `vol_samples[i]` and `spot_samples[j]`, so
/// rows run along volatility and columns along spot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceSurface {
    pub option_type: OptionType,
    pub spot_samples: Vec<f64>,
    pub vol_samples: Vec<f64>,
    pub values: Vec<Vec<f64>>,
}

impl PriceSurface {
    /// (rows, columns), i.e. (volatility samples, spot samples)
    pub fn dims(&self) -> (usize, usize) {
        (self.vol_samples.len(), self.spot_samples.len())
    }

    /// Price at volatility index `i` and spot index `j`.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.values.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Iterates rows together with their volatility coordinate.
    pub fn rows(&self) -> impl Iterator<Item = (f64, &[f64])> + '_ {
        self.vol_samples
            .iter()
            .copied()
            .zip(self.values.iter().map(Vec::as_slice))
    }

    /// Smallest and largest finite price, `None` if there is none.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        finite_min_max(self.values.iter().flatten().copied())
    }
}

/// The call and put surfaces built from one grid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceSurfaces {
    pub call: PriceSurface,
    pub put: PriceSurface,
}

impl PriceSurfaces {
    pub fn get(&self, option_type: OptionType) -> &PriceSurface {
        match option_type {
            OptionType::Call => &self.call,
            OptionType::Put => &self.put,
        }
    }
}

/// Spot/value pair of a Greek sweep
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreekPoint {
    pub spot: f64,
    pub value: f64,
}

/// One Greek evaluated along ascending spot samples.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreekSweep {
    pub greek: GreekKind,
    pub option_type: OptionType,
    pub points: Vec<GreekPoint>,
}

impl GreekSweep {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn spots(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.spot).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Smallest and largest finite value, `None` if there is none.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        finite_min_max(self.points.iter().map(|p| p.value))
    }
}

fn finite_min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}
