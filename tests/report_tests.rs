#![cfg(feature = "serde")]

mod test_utils;

use bs_surface::export::{write_surface_csv, write_sweep_csv};
use bs_surface::{
    build_greek_sweep, build_report, default_configs, greeks, GreekKind, OptionType,
    VisualizerConfig,
};
use test_utils::{assert_close, reference_params};

#[test]
fn test_dashboard_report() {
    let report = build_report(&default_configs::dashboard()).expect("dashboard report");

    assert_eq!(report.market, reference_params());
    assert_close(report.call_price, 10.450_583_572, 1e-6, "call price");
    assert_close(report.put_price, 5.573_526_022, 1e-6, "put price");
    assert_eq!(report.call_greeks, greeks(&report.market, OptionType::Call));
    assert_eq!(report.put_greeks, greeks(&report.market, OptionType::Put));
    assert_close(report.call_greeks.delta, 0.636_830_651, 1e-6, "call delta");

    assert_eq!(report.surfaces.call.dims(), (10, 10));
    assert_eq!(report.surfaces.put.dims(), (10, 10));
    assert_eq!(report.sweep.len(), 100);
    assert_eq!(report.sweep.greek, GreekKind::Delta);
    assert_eq!(report.sweep.option_type, OptionType::Call);
}

#[test]
fn test_report_follows_selection() {
    let config = VisualizerConfig {
        greek: GreekKind::Vega,
        option_type: OptionType::Put,
        verbosity: 2,
        ..VisualizerConfig::wide()
    };
    let report = build_report(&config).unwrap();

    let expected = build_greek_sweep(
        &config.market(),
        GreekKind::Vega,
        OptionType::Put,
        50.0,
        200.0,
        100,
    );
    assert_eq!(report.sweep, expected);
    assert_eq!(report.surfaces.call.spot_samples.first(), Some(&50.0));
    assert_eq!(report.surfaces.call.spot_samples.last(), Some(&200.0));
}

#[test]
fn test_invalid_config_is_rejected_before_evaluation() {
    let mut config = VisualizerConfig::default();
    config.grid.vol_min = 0.4;
    config.grid.vol_max = 0.1;
    assert!(build_report(&config).is_err());

    let config = VisualizerConfig {
        vol: 0.0,
        ..VisualizerConfig::default()
    };
    assert!(build_report(&config).is_err());
}

#[test]
fn test_surface_csv_layout() {
    let report = build_report(&default_configs::dashboard()).unwrap();

    let mut buf = Vec::new();
    write_surface_csv(&report.surfaces.call, &mut buf).unwrap();

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(buf.as_slice());
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(headers.len(), 11);
    assert_eq!(&headers[0], "vol");
    assert_eq!(headers[1].parse::<f64>().unwrap(), 80.0);
    assert_eq!(headers[10].parse::<f64>().unwrap(), 120.0);

    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 10);
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row[0].parse::<f64>().unwrap(), report.surfaces.call.vol_samples[i]);
        for j in 0..10 {
            assert_eq!(
                row[j + 1].parse::<f64>().unwrap(),
                report.surfaces.call.values[i][j]
            );
        }
    }
}

#[test]
fn test_sweep_csv_layout() {
    let sweep = build_greek_sweep(
        &reference_params(),
        GreekKind::Theta,
        OptionType::Call,
        80.0,
        120.0,
        100,
    );

    let mut buf = Vec::new();
    write_sweep_csv(&sweep, &mut buf).unwrap();

    let mut rdr = csv::Reader::from_reader(buf.as_slice());
    assert_eq!(rdr.headers().unwrap(), vec!["spot", "theta"]);

    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 100);
    assert_eq!(rows[0][0].parse::<f64>().unwrap(), 80.0);
    assert_eq!(rows[99][1].parse::<f64>().unwrap(), sweep.points[99].value);
}
