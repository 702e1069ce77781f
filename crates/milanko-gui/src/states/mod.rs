mod fetch;
mod images;
mod ui;

pub use fetch::{StatsFetch, StatsPhase};
pub use images::{ImageSlot, ImageStore};
pub use ui::UiState;
