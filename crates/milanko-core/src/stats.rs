//! Parsing of the per-year temperature statistics files.
//!
//! The files are small comma-separated tables: an optional header line whose
//! first field starts with `year` (any case), then one `year, mean, max, min`
//! row per simulated year.

use crate::error::{MilankoError, Result};

/// Temperature statistics for a single simulated year, in °C.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TemperatureSample {
    pub mean: f64,
    pub max: f64,
    pub min: f64,
}

/// Scan `text` for the row matching `year`.
///
/// Blank lines and the header are skipped; the first row whose leading field
/// parses to `year` wins. A matching row with fewer than four fields or a
/// non-numeric temperature field is reported as [`MilankoError::MalformedRow`];
/// no matching row at all as [`MilankoError::YearMissing`].
pub fn find_year_row(text: &str, year: u32, resource: &str) -> Result<TemperatureSample> {
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || is_header(trimmed) {
            continue;
        }
        let mut fields = trimmed.split(',').map(str::trim);
        let Some(first) = fields.next() else {
            continue;
        };
        if first.parse::<u32>() != Ok(year) {
            continue;
        }

        let malformed = || MilankoError::MalformedRow {
            year,
            line: trimmed.to_string(),
        };
        let mut temp = || -> Result<f64> {
            fields
                .next()
                .and_then(|f| f.parse::<f64>().ok())
                .filter(|v| v.is_finite())
                .ok_or_else(malformed)
        };

        return Ok(TemperatureSample {
            mean: temp()?,
            max: temp()?,
            min: temp()?,
        });
    }

    Err(MilankoError::YearMissing {
        resource: resource.to_string(),
        year,
    })
}

fn is_header(line: &str) -> bool {
    let mut prefix = [0u8; 4];
    let bytes = line.as_bytes();
    if bytes.len() < 4 {
        return false;
    }
    for (dst, src) in prefix.iter_mut().zip(bytes) {
        *dst = src.to_ascii_lowercase();
    }
    &prefix == b"year"
}
