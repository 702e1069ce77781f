use std::fmt;

use crate::consts::{YEAR_MAX, YEAR_MIN, YEAR_STEP};

/// Simulation scenario family; selects which statistics dataset is read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Scenario {
    #[default]
    Base,
    Aqua,
    Dry,
}

impl Scenario {
    pub const ALL: &[Self] = &[Self::Base, Self::Aqua, Self::Dry];

    /// Encoding used in statistics file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Aqua => "aqua",
            Self::Dry => "dry",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => write!(f, "Base"),
            Self::Aqua => write!(f, "Aqua"),
            Self::Dry => write!(f, "Dry"),
        }
    }
}

/// Planetary albedo, one of the two values the dataset was generated with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Albedo {
    #[default]
    Low,
    High,
}

impl Albedo {
    pub const ALL: &[Self] = &[Self::Low, Self::High];

    /// Encoding used in resource names ("0.30" / "0.33").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "0.30",
            Self::High => "0.33",
        }
    }
}

impl fmt::Display for Albedo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether an orbital cycle is held constant or varies over the run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CycleMode {
    #[default]
    Constant,
    Variable,
}

impl CycleMode {
    pub const ALL: &[Self] = &[Self::Constant, Self::Variable];

    /// Single-character flag used in resource names.
    pub fn flag(&self) -> char {
        match self {
            Self::Constant => 'F',
            Self::Variable => 'V',
        }
    }
}

impl fmt::Display for CycleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant => write!(f, "Constant"),
            Self::Variable => write!(f, "Variable"),
        }
    }
}

/// Latitude band the simulation was sampled at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Latitude {
    #[default]
    Deg0,
    Deg50,
    Deg90,
}

impl Latitude {
    pub const ALL: &[Self] = &[Self::Deg0, Self::Deg50, Self::Deg90];

    pub fn degrees(&self) -> u16 {
        match self {
            Self::Deg0 => 0,
            Self::Deg50 => 50,
            Self::Deg90 => 90,
        }
    }
}

impl fmt::Display for Latitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// Which precomputed chart family an image is taken from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ChartKind {
    /// Absolute temperature over the year.
    #[default]
    Temperature,
    /// Year-over-year temperature variation.
    Variation,
}

impl ChartKind {
    pub const ALL: &[Self] = &[Self::Temperature, Self::Variation];

    /// Encoding used in image file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Temperature => "Temp",
            Self::Variation => "Var_temp",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "Temperature"),
            Self::Variation => write!(f, "Variation"),
        }
    }
}

/// Full set of simulation parameters selected by the user.
///
/// Every field holds exactly one value at all times; there is no partial
/// state after construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ParameterSet {
    pub scenario: Scenario,
    pub albedo: Albedo,
    pub obliquity: CycleMode,
    pub eccentricity: CycleMode,
    pub precession: CycleMode,
    pub latitude: Latitude,
    pub chart: ChartKind,
}

/// Snap a raw year entry onto the dataset grid.
///
/// Out-of-range input is rejected so the caller keeps its prior value;
/// in-range input rounds to the nearest [`YEAR_STEP`] multiple.
pub fn snap_year(raw: i64) -> Option<u32> {
    if raw < i64::from(YEAR_MIN) || raw > i64::from(YEAR_MAX) {
        return None;
    }
    let step = i64::from(YEAR_STEP);
    let snapped = (raw + step / 2) / step * step;
    Some((snapped as u32).clamp(YEAR_MIN, YEAR_MAX))
}
