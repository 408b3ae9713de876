//! CSV export of evaluated grids.

use std::io::Write;

use anyhow::Result;
use csv::Writer;

use crate::grid::{GreekSweep, PriceSurface};

/// Write a surface as a table: header `vol,<spot_0>,<spot_1>,…`, then one row
/// per volatility sample.
pub fn write_surface_csv<W: Write>(surface: &PriceSurface, writer: W) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);

    let mut header = Vec::with_capacity(surface.spot_samples.len() + 1);
    header.push("vol".to_string());
    header.extend(surface.spot_samples.iter().map(|s| s.to_string()));
    wtr.write_record(&header)?;

    for (vol, row) in surface.rows() {
        let mut record = Vec::with_capacity(row.len() + 1);
        record.push(vol.to_string());
        record.extend(row.iter().map(|v| v.to_string()));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write a sweep as `spot,<greek>` rows in sample order.
pub fn write_sweep_csv<W: Write>(sweep: &GreekSweep, writer: W) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);

    let greek = sweep.greek.name().to_lowercase();
    wtr.write_record(["spot", greek.as_str()])?;
    for point in &sweep.points {
        wtr.write_record([point.spot.to_string(), point.value.to_string()])?;
    }

    wtr.flush()?;
    Ok(())
}
