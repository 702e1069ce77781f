use std::collections::HashMap;

/// Display state of one fetched chart image.
pub enum ImageSlot {
    Loading,
    Ready(egui::TextureHandle),
    Failed,
}

/// Session-scoped store of chart textures, keyed by URL.
///
/// The comparison list may hold the same URL several times; each distinct
/// URL is fetched and decoded once. A failed slot stays failed; the pane
/// shows its fallback and sibling panes are unaffected.
#[derive(Default)]
pub struct ImageStore {
    slots: HashMap<String, ImageSlot>,
}

impl ImageStore {
    pub fn slot(&self, url: &str) -> Option<&ImageSlot> {
        self.slots.get(url)
    }

    pub fn contains(&self, url: &str) -> bool {
        self.slots.contains_key(url)
    }

    pub fn mark_loading(&mut self, url: String) {
        self.slots.insert(url, ImageSlot::Loading);
    }

    pub fn insert_ready(&mut self, url: String, texture: egui::TextureHandle) {
        self.slots.insert(url, ImageSlot::Ready(texture));
    }

    pub fn mark_failed(&mut self, url: String) {
        self.slots.insert(url, ImageSlot::Failed);
    }
}
