/// Base URL of the static file host serving the precomputed dataset.
pub const DATASET_BASE_URL: &str =
    "https://raw.githubusercontent.com/Daltaxy/Milankovi-Cycles-and-their-effect-on-Temperature-Python-/main";

/// First simulated year available in the dataset.
pub const YEAR_MIN: u32 = 100;

/// Last simulated year available in the dataset.
pub const YEAR_MAX: u32 = 200_000;

/// Year granularity of the dataset; every valid year is a multiple of this.
pub const YEAR_STEP: u32 = 100;

/// Default year selected at startup.
pub const YEAR_DEFAULT: u32 = 10_000;

/// Lower bound of per-pane zoom, in percent.
pub const ZOOM_MIN_PERCENT: u16 = 50;

/// Upper bound of per-pane zoom, in percent.
pub const ZOOM_MAX_PERCENT: u16 = 200;

/// Zoom adjustment granularity, in percent.
pub const ZOOM_STEP_PERCENT: u16 = 5;

/// Zoom applied to a pane that has not been adjusted.
pub const ZOOM_DEFAULT_PERCENT: u16 = 100;

/// Panes shown by the two-way split layouts.
pub const SPLIT_PANE_CAPACITY: usize = 2;

/// Panes shown by the 2x2 grid layout.
pub const GRID_PANE_CAPACITY: usize = 4;

/// Smallest fraction of the split axis a resizable pane may occupy.
pub const PANE_MIN_FRACTION: f32 = 0.2;

/// Initial fraction of the split axis given to the first pane.
pub const SPLIT_DEFAULT_FRACTION: f32 = 0.5;

/// Timeout applied to every remote request.
pub const REQUEST_TIMEOUT_SECS: u64 = 20;
