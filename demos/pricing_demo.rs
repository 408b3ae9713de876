// demos/pricing_demo.rs

//! Demonstration of the pricing engine and grid evaluator
//!
//! This example shows how to:
//! 1. Price a call and put from validated market parameters
//! 2. Compute every Greek for both sides
//! 3. Check put-call parity
//! 4. Sweep a Greek across spot prices

use anyhow::Result;
use bs_surface::{
    build_greek_sweep, greeks, price, GreekKind, MarketParameters, OptionType, SWEEP_SAMPLES,
};

fn main() -> Result<()> {
    println!("Black-Scholes Pricing Demo");
    println!("==========================");

    let params = MarketParameters::new(100.0, 100.0, 1.0, 0.05, 0.2)?;
    println!(
        "S={} K={} T={}y r={:.1}% σ={:.1}%",
        params.spot,
        params.strike,
        params.time,
        params.rate * 100.0,
        params.vol * 100.0
    );

    println!("\nStep 1: Prices");
    let call = price(&params, OptionType::Call);
    let put = price(&params, OptionType::Put);
    println!("  Call: {:.4}", call);
    println!("  Put:  {:.4}", put);

    println!("\nStep 2: Greeks");
    println!("{:<8} {:>12} {:>12}", "Greek", "Call", "Put");
    println!("{}", "-".repeat(34));
    let call_greeks = greeks(&params, OptionType::Call);
    let put_greeks = greeks(&params, OptionType::Put);
    for kind in GreekKind::ALL {
        println!(
            "{:<8} {:>12.6} {:>12.6}",
            kind.to_string(),
            call_greeks.get(kind),
            put_greeks.get(kind)
        );
    }

    println!("\nStep 3: Put-call parity");
    let parity = params.spot - params.strike * params.discount_factor();
    println!("  C - P          = {:.10}", call - put);
    println!("  S - K·e^(-rT)  = {:.10}", parity);

    println!("\nStep 4: Gamma across spot");
    let sweep = build_greek_sweep(
        &params,
        GreekKind::Gamma,
        OptionType::Call,
        60.0,
        140.0,
        SWEEP_SAMPLES,
    );
    for point in sweep.points.iter().step_by(11) {
        println!("  S={:>7.2}  gamma={:.6}", point.spot, point.value);
    }

    Ok(())
}
