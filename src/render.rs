//! SVG rendering of price surfaces (annotated heatmaps) and Greek sweeps
//! (line charts).
//!
//! Only displays values already computed by the grid evaluator; nothing here
//! calls the pricing engine.

use std::path::Path;

use anyhow::{anyhow, Result};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::grid::{GreekSweep, PriceSurface};

/// Colour of the lowest price on a heatmap.
pub const LOW_COLOR: RGBColor = RGBColor(255, 0, 0);
/// Colour of the highest price on a heatmap.
pub const HIGH_COLOR: RGBColor = RGBColor(0, 128, 0);
/// Colour of cells holding a non-finite price.
pub const INVALID_COLOR: RGBColor = RGBColor(128, 128, 128);

const HEATMAP_SIZE: (u32, u32) = (640, 600);
const SWEEP_SIZE: (u32, u32) = (1000, 500);

/// Linear red → green map of `value` within `[lo, hi]`.
///
/// Values outside the range are clamped. A degenerate range (`hi <= lo`)
/// maps every finite value to the midpoint colour.
pub fn gradient_color(value: f64, lo: f64, hi: f64) -> RGBColor {
    if !value.is_finite() {
        return INVALID_COLOR;
    }
    let t = if hi > lo {
        ((value - lo) / (hi - lo)).clamp(0.0, 1.0)
    } else {
        0.5
    };
    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    RGBColor(
        mix(LOW_COLOR.0, HIGH_COLOR.0),
        mix(LOW_COLOR.1, HIGH_COLOR.1),
        mix(LOW_COLOR.2, HIGH_COLOR.2),
    )
}

/// Cell boundaries around evenly spaced sample centres.
fn cell_edges(samples: &[f64]) -> Vec<(f64, f64)> {
    let half = match samples {
        [a, b, ..] if a != b => (b - a).abs() / 2.0,
        [a, ..] => (a.abs() * 0.05).max(1e-3),
        [] => return Vec::new(),
    };
    samples.iter().map(|&c| (c - half, c + half)).collect()
}

/// Draw `surface` as a colour-mapped matrix with each cell annotated by its
/// price (two decimals), spot on the x axis and volatility on the y axis.
pub fn price_heatmap_svg(surface: &PriceSurface, path: impl AsRef<Path>, title: &str) -> Result<()> {
    let x_cells = cell_edges(&surface.spot_samples);
    let y_cells = cell_edges(&surface.vol_samples);
    let (x_first, x_last) = match (x_cells.first(), x_cells.last()) {
        (Some(first), Some(last)) => (first.0, last.1),
        _ => return Err(anyhow!("Cannot render an empty price surface")),
    };
    let (y_first, y_last) = match (y_cells.first(), y_cells.last()) {
        (Some(first), Some(last)) => (first.0, last.1),
        _ => return Err(anyhow!("Cannot render an empty price surface")),
    };
    let (lo, hi) = surface.min_max().unwrap_or((0.0, 0.0));

    let root = SVGBackend::new(path.as_ref(), HEATMAP_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(title, ("sans-serif", 24))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_first..x_last, y_first..y_last)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Spot Price")
        .y_desc("Volatility")
        .draw()?;

    let mut cells = Vec::new();
    for (i, &(y0, y1)) in y_cells.iter().enumerate() {
        for (j, &(x0, x1)) in x_cells.iter().enumerate() {
            if let Some(price) = surface.get(i, j) {
                cells.push(((x0, y0), (x1, y1), price));
            }
        }
    }

    chart.draw_series(cells.iter().map(|&(a, b, price)| {
        Rectangle::new([a, b], gradient_color(price, lo, hi).filled())
    }))?;

    let label_style = TextStyle::from(("sans-serif", 12).into_font())
        .color(&WHITE)
        .pos(Pos::new(HPos::Center, VPos::Center));
    chart.draw_series(cells.iter().map(|&((x0, y0), (x1, y1), price)| {
        Text::new(
            format!("{:.2}", price),
            ((x0 + x1) / 2.0, (y0 + y1) / 2.0),
            label_style.clone(),
        )
    }))?;

    root.present()?;
    Ok(())
}

/// Draw `sweep` as a line chart titled "<Greek> vs Spot Price".
pub fn greek_sweep_svg(sweep: &GreekSweep, path: impl AsRef<Path>) -> Result<()> {
    let (x_first, x_last) = match (sweep.points.first(), sweep.points.last()) {
        (Some(first), Some(last)) if first.spot < last.spot => (first.spot, last.spot),
        _ => return Err(anyhow!("Greek sweep needs at least two ascending spot samples")),
    };
    let (lo, hi) = sweep
        .min_max()
        .ok_or_else(|| anyhow!("Greek sweep has no finite values to plot"))?;

    // 5% padding, and a little room when the curve is flat
    let padding = ((hi - lo) * 0.05).max(lo.abs().max(hi.abs()) * 1e-3).max(1e-9);
    let (y_min, y_max) = (lo - padding, hi + padding);

    let root = SVGBackend::new(path.as_ref(), SWEEP_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(format!("{} vs Spot Price", sweep.greek), ("sans-serif", 28))
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(x_first..x_last, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Spot Price")
        .y_desc(format!("{} Value", sweep.greek))
        .draw()?;

    let line: Vec<(f64, f64)> = sweep
        .points
        .iter()
        .filter(|p| p.value.is_finite())
        .map(|p| (p.spot, p.value))
        .collect();

    chart
        .draw_series(std::iter::once(PathElement::new(line, BLUE)))?
        .label(format!("{} ({})", sweep.greek, sweep.option_type))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_endpoints() {
        assert_eq!(gradient_color(1.0, 1.0, 5.0), LOW_COLOR);
        assert_eq!(gradient_color(5.0, 1.0, 5.0), HIGH_COLOR);
        assert_eq!(gradient_color(-3.0, 1.0, 5.0), LOW_COLOR);
        assert_eq!(gradient_color(9.0, 1.0, 5.0), HIGH_COLOR);
    }

    #[test]
    fn test_gradient_degenerate_range_is_midpoint() {
        assert_eq!(gradient_color(2.0, 2.0, 2.0), gradient_color(3.0, 1.0, 5.0));
        assert_eq!(gradient_color(f64::NAN, 0.0, 1.0), INVALID_COLOR);
    }

    #[test]
    fn test_cell_edges_cover_samples() {
        let edges = cell_edges(&[1.0, 2.0, 3.0]);
        assert_eq!(edges, vec![(0.5, 1.5), (1.5, 2.5), (2.5, 3.5)]);
        assert!(cell_edges(&[]).is_empty());

        let flat = cell_edges(&[100.0, 100.0]);
        assert_eq!(flat, vec![(95.0, 105.0), (95.0, 105.0)]);
    }
}
