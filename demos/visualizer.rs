// Example: visualizer.rs
// Builds the full dashboard output for one set of inputs: option prices, the
// Greeks table, call/put price heatmaps and the selected Greek vs spot chart.
//
// Usage:
//     cargo run --example visualizer -- [config.toml] [output_dir]
//
// Without a config file the dashboard defaults are used. SVG charts and CSV
// tables are written to output_dir (default: ./bs_output).

use std::env;
use std::fs::{self, File};
use std::path::PathBuf;

use anyhow::Result;
use bs_surface::export::{write_surface_csv, write_sweep_csv};
use bs_surface::render::{greek_sweep_svg, price_heatmap_svg};
use bs_surface::{build_report, default_configs, GreekKind, VisualizerConfig};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let mut config = match args.get(1) {
        Some(path) => VisualizerConfig::from_file(path)?,
        None => default_configs::dashboard(),
    };
    config.verbosity = config.verbosity.max(1);

    let out_dir = PathBuf::from(args.get(2).map(String::as_str).unwrap_or("bs_output"));
    fs::create_dir_all(&out_dir)?;

    let report = build_report(&config)?;
    let m = &report.market;

    println!("\nBlack-Scholes Option Pricer & Greeks Visualizer");
    println!("================================================");
    println!(
        "{:>14} {:>14} {:>14} {:>14} {:>14}",
        "Spot", "Strike", "Maturity (y)", "Volatility", "Risk-Free"
    );
    println!(
        "{:>14.2} {:>14.2} {:>14.2} {:>14.2} {:>14.3}",
        m.spot, m.strike, m.time, m.vol, m.rate
    );

    println!("\nCALL value: ${:.2}    PUT value: ${:.2}", report.call_price, report.put_price);

    println!("\n{:<8} {:>12} {:>12}", "Greek", "Call", "Put");
    println!("{}", "-".repeat(34));
    for kind in GreekKind::ALL {
        println!(
            "{:<8} {:>12.6} {:>12.6}",
            kind.to_string(),
            report.call_greeks.get(kind),
            report.put_greeks.get(kind)
        );
    }

    for surface in [&report.surfaces.call, &report.surfaces.put] {
        let label = surface.option_type.to_string().to_uppercase();
        println!("\n{} prices (rows: volatility, columns: spot)", label);
        print!("{:>8}", "σ \\ S");
        for s in &surface.spot_samples {
            print!(" {:>8.2}", s);
        }
        println!();
        for (vol, row) in surface.rows() {
            print!("{:>8.3}", vol);
            for v in row {
                print!(" {:>8.2}", v);
            }
            println!();
        }

        let stem = surface.option_type.to_string();
        price_heatmap_svg(
            surface,
            out_dir.join(format!("{}_heatmap.svg", stem)),
            &format!("{} Option Heatmap", label),
        )?;
        write_surface_csv(surface, File::create(out_dir.join(format!("{}_surface.csv", stem)))?)?;
    }

    let sweep_stem = format!(
        "{}_{}_sweep",
        report.sweep.greek.name().to_lowercase(),
        report.sweep.option_type
    );
    greek_sweep_svg(&report.sweep, out_dir.join(format!("{}.svg", sweep_stem)))?;
    write_sweep_csv(
        &report.sweep,
        File::create(out_dir.join(format!("{}.csv", sweep_stem)))?,
    )?;

    if let Some((lo, hi)) = report.sweep.min_max() {
        println!(
            "\n{} vs Spot Price ({}): range [{:.6}, {:.6}] over {} points",
            report.sweep.greek,
            report.sweep.option_type.to_string().to_uppercase(),
            lo,
            hi,
            report.sweep.len()
        );
    }

    println!("\nInterpretation Guide");
    println!("{:<30} {}", "Category", "Description");
    println!("{}", "-".repeat(96));
    println!("{:<30} {}", "Red to Green", "Lower to higher option prices in the heatmaps.");
    println!("{:<30} {}", "Volatility: Low (0.05-0.15)", "Stable environments, options are cheaper.");
    println!("{:<30} {}", "Volatility: Medium (0.15-0.3)", "Options more sensitive to Vega, moderate pricing.");
    println!("{:<30} {}", "Volatility: High (0.3-1.0)", "Expensive options, Gamma becomes significant.");
    for kind in GreekKind::ALL {
        println!("{:<30} {}", kind.name(), kind.description());
    }

    println!("\nCharts and tables written to {}", out_dir.display());
    Ok(())
}
