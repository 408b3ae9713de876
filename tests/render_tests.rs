use std::fs;
use std::path::PathBuf;

use bs_surface::render::{greek_sweep_svg, price_heatmap_svg};
use bs_surface::{
    build_greek_sweep, build_price_surfaces, GreekKind, GreekSweep, GridSpec, MarketParameters,
    OptionType, PriceSurface,
};

fn temp_svg(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("bs_surface_{}_{}.svg", name, std::process::id()))
}

/// The heatmap annotates every cell with its price to two decimals
#[test]
fn test_heatmap_labels_cells() {
    let surfaces = build_price_surfaces(100.0, 1.0, 0.05, &GridSpec::default());
    let surface = &surfaces.call;
    let path = temp_svg("call_heatmap");

    price_heatmap_svg(surface, &path, "CALL Option Heatmap").unwrap();
    let svg = fs::read_to_string(&path).unwrap();
    let _ = fs::remove_file(&path);

    let first = format!("{:.2}", surface.values[0][0]);
    let last = format!("{:.2}", surface.values[9][9]);
    assert!(svg.contains(&first), "missing label {}", first);
    assert!(svg.contains(&last), "missing label {}", last);
    assert!(svg.contains("CALL Option Heatmap"));
}

/// A single repeated price still renders (midpoint colour everywhere)
#[test]
fn test_heatmap_flat_surface() {
    let grid = GridSpec {
        spot_min: 100.0,
        spot_max: 100.0,
        vol_min: 0.2,
        vol_max: 0.2,
        surface_samples: 3,
        ..GridSpec::default()
    };
    let surfaces = build_price_surfaces(100.0, 1.0, 0.05, &grid);
    let path = temp_svg("flat_heatmap");

    let result = price_heatmap_svg(&surfaces.put, &path, "PUT Option Heatmap");
    let _ = fs::remove_file(&path);
    assert!(result.is_ok(), "flat surface failed: {:?}", result.err());
}

#[test]
fn test_heatmap_rejects_empty_surface() {
    let empty = PriceSurface {
        option_type: OptionType::Call,
        spot_samples: Vec::new(),
        vol_samples: Vec::new(),
        values: Vec::new(),
    };
    assert!(price_heatmap_svg(&empty, temp_svg("empty_heatmap"), "empty").is_err());
}

/// The sweep chart is written with its "<Greek> vs Spot Price" title
#[test]
fn test_sweep_chart_written() {
    let base = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
    let sweep = build_greek_sweep(&base, GreekKind::Gamma, OptionType::Call, 80.0, 120.0, 100);
    let path = temp_svg("gamma_sweep");

    greek_sweep_svg(&sweep, &path).unwrap();
    let svg = fs::read_to_string(&path).unwrap();
    let _ = fs::remove_file(&path);

    assert!(svg.contains("Gamma vs Spot Price"));
}

#[test]
fn test_sweep_chart_rejects_empty_sweep() {
    let empty = GreekSweep {
        greek: GreekKind::Rho,
        option_type: OptionType::Put,
        points: Vec::new(),
    };
    assert!(greek_sweep_svg(&empty, temp_svg("empty_sweep")).is_err());
}
