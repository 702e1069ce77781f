//! Viewer arrangement: how many comparison entries are visible and at what
//! zoom.

use std::collections::HashMap;
use std::fmt;

use crate::consts::{
    GRID_PANE_CAPACITY, SPLIT_PANE_CAPACITY, ZOOM_DEFAULT_PERCENT, ZOOM_MAX_PERCENT,
    ZOOM_MIN_PERCENT, ZOOM_STEP_PERCENT,
};

/// Geometric arrangement of the comparison panes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Vertical scrollable stack, every entry visible.
    #[default]
    List,
    /// Two panes stacked top/bottom with a resizable divider.
    Horizontal,
    /// Two panes side by side with a resizable divider.
    Vertical,
    /// Up to four panes in a 2x2 grid.
    Grid,
}

impl LayoutMode {
    pub const ALL: &[Self] = &[Self::List, Self::Horizontal, Self::Vertical, Self::Grid];

    /// Maximum simultaneously visible panes, `None` meaning unbounded.
    pub fn capacity(&self) -> Option<usize> {
        match self {
            Self::List => None,
            Self::Horizontal | Self::Vertical => Some(SPLIT_PANE_CAPACITY),
            Self::Grid => Some(GRID_PANE_CAPACITY),
        }
    }

    /// Number of panes rendered for a comparison list of `total` entries.
    ///
    /// Visible panes are always the leading entries of the underlying list,
    /// so pane position and list index coincide.
    pub fn visible_count(&self, total: usize) -> usize {
        match self.capacity() {
            Some(cap) => total.min(cap),
            None => total,
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => write!(f, "List"),
            Self::Horizontal => write!(f, "Horizontal Split"),
            Self::Vertical => write!(f, "Vertical Split"),
            Self::Grid => write!(f, "Grid (2×2)"),
        }
    }
}

/// Clamp a zoom percentage into range and snap it to the step grid.
pub fn snap_zoom(percent: i32) -> u16 {
    let clamped = percent.clamp(i32::from(ZOOM_MIN_PERCENT), i32::from(ZOOM_MAX_PERCENT)) as u16;
    let step = ZOOM_STEP_PERCENT;
    let snapped = (clamped + step / 2) / step * step;
    snapped.clamp(ZOOM_MIN_PERCENT, ZOOM_MAX_PERCENT)
}

/// Per-pane zoom percentages, keyed by pane position.
///
/// Lives as long as the viewer does; switching layout mode resets every
/// pane to the default.
#[derive(Clone, Debug, Default)]
pub struct ZoomState {
    levels: HashMap<usize, u16>,
}

impl ZoomState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zoom for `pane`, defaulting to 100%.
    pub fn get(&self, pane: usize) -> u16 {
        self.levels
            .get(&pane)
            .copied()
            .unwrap_or(ZOOM_DEFAULT_PERCENT)
    }

    /// Set the zoom for `pane`, clamped and snapped to the step grid.
    pub fn set(&mut self, pane: usize, percent: i32) {
        self.levels.insert(pane, snap_zoom(percent));
    }

    /// Forget every pane's zoom (layout change).
    pub fn reset(&mut self) {
        self.levels.clear();
    }
}
