//! Precomputed temperature envelopes per parameter combination.
//!
//! The simulation producing the dataset also published, for every
//! (albedo, latitude, eccentricity, obliquity, precession) combination, the
//! min/max temperature reached over the full run and the resulting
//! amplitude. The table is fixed for the process lifetime.

use crate::params::{Albedo, CycleMode, Latitude, ParameterSet};

use Albedo::{High, Low};
use Latitude::{Deg0, Deg50, Deg90};

const C: CycleMode = CycleMode::Constant;
const V: CycleMode = CycleMode::Variable;

/// Temperature envelope of a full run: extremes in °C, amplitude in K.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TemperatureRange {
    pub t_min: f64,
    pub t_max: f64,
    pub amplitude: f64,
}

struct RangeEntry {
    albedo: Albedo,
    latitude: Latitude,
    eccentricity: CycleMode,
    obliquity: CycleMode,
    precession: CycleMode,
    range: TemperatureRange,
}

const fn entry(
    albedo: Albedo,
    latitude: Latitude,
    eccentricity: CycleMode,
    obliquity: CycleMode,
    precession: CycleMode,
    t_min: f64,
    t_max: f64,
    amplitude: f64,
) -> RangeEntry {
    RangeEntry {
        albedo,
        latitude,
        eccentricity,
        obliquity,
        precession,
        range: TemperatureRange {
            t_min,
            t_max,
            amplitude,
        },
    }
}

static RANGE_TABLE: [RangeEntry; 48] = [
    entry(Low, Deg0, C, C, C, 19.6, 46.4, 26.8),
    entry(Low, Deg0, C, C, V, 19.6, 46.4, 26.9),
    entry(Low, Deg0, C, V, C, 14.9, 18.8, 3.9),
    entry(Low, Deg0, C, V, V, 14.9, 18.9, 4.0),
    entry(Low, Deg0, V, C, C, 19.6, 51.5, 31.9),
    entry(Low, Deg0, V, C, V, 19.6, 51.7, 32.1),
    entry(Low, Deg0, V, V, C, 11.9, 22.9, 11.0),
    entry(Low, Deg0, V, V, V, 11.8, 23.1, 11.4),
    entry(Low, Deg50, C, C, C, -28.6, 32.7, 61.3),
    entry(Low, Deg50, C, C, V, -28.7, 32.7, 61.3),
    entry(Low, Deg50, C, V, C, 14.9, 19.4, 4.5),
    entry(Low, Deg50, C, V, V, 14.9, 19.5, 4.5),
    entry(Low, Deg50, V, C, C, -31.9, 32.7, 64.5),
    entry(Low, Deg50, V, C, V, -32.1, 32.7, 64.7),
    entry(Low, Deg50, V, V, C, 11.5, 23.5, 12.0),
    entry(Low, Deg50, V, V, V, 11.3, 23.6, 12.3),
    entry(Low, Deg90, C, C, C, -69.5, 17.9, 87.4),
    entry(Low, Deg90, C, C, V, -69.6, 17.9, 87.5),
    entry(Low, Deg90, C, V, C, 14.9, 19.7, 4.8),
    entry(Low, Deg90, C, V, V, 14.9, 19.8, 4.9),
    entry(Low, Deg90, V, C, C, -71.6, 17.9, 89.4),
    entry(Low, Deg90, V, C, V, -71.8, 17.9, 89.6),
    entry(Low, Deg90, V, V, C, 11.5, 23.8, 12.4),
    entry(Low, Deg90, V, V, V, 11.0, 23.9, 12.9),
    entry(High, Deg0, C, C, C, 28.9, 108.0, 79.1),
    entry(High, Deg0, C, C, V, 28.9, 108.0, 79.2),
    entry(High, Deg0, C, V, C, 22.4, 68.6, 46.2),
    entry(High, Deg0, C, V, V, 22.4, 68.6, 46.2),
    entry(High, Deg0, V, C, C, 28.9, 115.2, 86.4),
    entry(High, Deg0, V, C, V, 28.9, 115.6, 86.7),
    entry(High, Deg0, V, V, C, 22.4, 74.4, 52.0),
    entry(High, Deg0, V, V, V, 22.4, 74.7, 52.3),
    entry(High, Deg50, C, C, C, 0.8, 75.7, 74.9),
    entry(High, Deg50, C, C, V, 0.7, 75.7, 75.0),
    entry(High, Deg50, C, V, C, 23.3, 69.4, 46.2),
    entry(High, Deg50, C, V, V, 23.3, 69.5, 46.2),
    entry(High, Deg50, V, C, C, -3.9, 77.6, 81.5),
    entry(High, Deg50, V, C, V, -4.1, 77.9, 82.1),
    entry(High, Deg50, V, V, C, 23.3, 75.3, 52.0),
    entry(High, Deg50, V, V, V, 23.3, 75.4, 52.2),
    entry(High, Deg90, C, C, C, -57.6, 52.4, 110.0),
    entry(High, Deg90, C, C, V, -57.7, 52.4, 110.1),
    entry(High, Deg90, C, V, C, 23.3, 69.9, 46.6),
    entry(High, Deg90, C, V, V, 23.3, 69.9, 46.7),
    entry(High, Deg90, V, C, C, -60.6, 52.4, 113.0),
    entry(High, Deg90, V, C, V, -60.8, 52.4, 113.3),
    entry(High, Deg90, V, V, C, 23.3, 75.7, 52.5),
    entry(High, Deg90, V, V, V, 23.3, 75.9, 52.6),
];

/// Envelope for the given parameters, if the combination was published.
///
/// Scenario and chart kind do not key the table.
pub fn range_for(params: &ParameterSet) -> Option<TemperatureRange> {
    RANGE_TABLE
        .iter()
        .find(|e| {
            e.albedo == params.albedo
                && e.latitude == params.latitude
                && e.eccentricity == params.eccentricity
                && e.obliquity == params.obliquity
                && e.precession == params.precession
        })
        .map(|e| e.range)
}

/// Number of published combinations.
pub fn table_len() -> usize {
    RANGE_TABLE.len()
}
