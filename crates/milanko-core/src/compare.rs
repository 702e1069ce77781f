//! The ordered list of chart images picked for side-by-side viewing.

use tracing::warn;

/// Ordered sequence of image URLs. The same URL may appear more than once;
/// entries are distinguished only by position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComparisonList {
    items: Vec<String>,
}

impl ComparisonList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Append `url` at the tail.
    pub fn push(&mut self, url: String) {
        self.items.push(url);
    }

    /// Remove the entry at `index`, shifting successors down.
    ///
    /// Out-of-range indices are a no-op; the caller cannot observe a failure
    /// beyond the `None` return.
    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Replace the whole sequence with `new_order`.
    ///
    /// The replacement must be a permutation of the current contents; a
    /// sequence with a different multiset of URLs is rejected and the list
    /// left untouched. Returns whether the replacement was applied.
    pub fn reorder(&mut self, new_order: Vec<String>) -> bool {
        let mut current = self.items.clone();
        let mut proposed = new_order.clone();
        current.sort_unstable();
        proposed.sort_unstable();
        if current != proposed {
            warn!(
                current = self.items.len(),
                proposed = new_order.len(),
                "rejecting reorder that is not a permutation"
            );
            return false;
        }
        self.items = new_order;
        true
    }

    /// Move the entry at `from` so it lands at position `to`, shifting the
    /// entries in between. Out-of-range positions are a no-op.
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        let len = self.items.len();
        if from >= len || to >= len {
            return false;
        }
        if from != to {
            let item = self.items.remove(from);
            self.items.insert(to, item);
        }
        true
    }
}
