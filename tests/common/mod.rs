#![allow(dead_code)]

use pinsight::candidates::Pin;
use pinsight::frequency::FrequencyTable;
use pinsight::geometry::{CaptureBounds, RawTap};
use std::io::Write;
use tempfile::NamedTempFile;

/// Every PIN gets a distinct count, highest for "0000", lowest for "9999".
pub fn descending_table() -> FrequencyTable {
    FrequencyTable::from_fn(|p| 10_000 - p.index() as u64).unwrap()
}

/// Flat table with a few well-known PINs boosted.
pub fn popular_table(boosted: &[(&str, u64)]) -> FrequencyTable {
    FrequencyTable::from_fn(|p| {
        boosted
            .iter()
            .find(|(pin, _)| p == *pin)
            .map(|(_, c)| *c)
            .unwrap_or(1)
    })
    .unwrap()
}

pub fn write_table_csv<F: Fn(Pin) -> u64>(count_of: F) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for pin in Pin::all() {
        writeln!(file, "{},{}", pin, count_of(pin)).unwrap();
    }
    file.flush().unwrap();
    file
}

pub fn taps(points: &[(f64, f64)]) -> Vec<RawTap> {
    points.iter().map(|&(x, y)| RawTap::new(x, y)).collect()
}

pub fn portrait_bounds() -> Option<CaptureBounds> {
    Some(CaptureBounds::new(300.0, 400.0))
}

pub fn corner_taps() -> Vec<RawTap> {
    taps(&[(50.0, 50.0), (250.0, 50.0), (50.0, 250.0), (250.0, 250.0)])
}

pub fn center_column_taps() -> Vec<RawTap> {
    taps(&[(150.0, 25.0), (150.0, 150.0), (150.0, 275.0), (150.0, 375.0)])
}
