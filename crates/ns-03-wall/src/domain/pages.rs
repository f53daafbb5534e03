//! Page snapshots.

use serde::{Deserialize, Serialize};

/// Immutable, pre-joined pages of exposed values.
///
/// Built off-lock and published whole; readers never see a partial set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageSet {
    pages: Vec<String>,
    total_exposed: usize,
}

impl PageSet {
    /// Partition `values` into consecutive chunks of `page_size`, each joined by `\n`.
    pub fn build(values: &[String], page_size: usize) -> Self {
        let pages = values
            .chunks(page_size.max(1))
            .map(|chunk| chunk.join("\n"))
            .collect();
        Self {
            pages,
            total_exposed: values.len(),
        }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.pages.get(index).map(String::as_str)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn total_exposed(&self) -> usize {
        self.total_exposed
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// One page served to a reader.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallPage {
    /// Newline-joined exposed values
    pub text: String,
    pub page_index: usize,
    pub total_pages: usize,
    pub total_exposed: usize,
}

impl WallPage {
    /// Zero state: nothing has been exposed yet.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.total_exposed == 0
    }
}

/// Counts of the currently published snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallSnapshot {
    pub total_pages: usize,
    pub total_exposed: usize,
}

impl From<&PageSet> for WallSnapshot {
    fn from(set: &PageSet) -> Self {
        Self {
            total_pages: set.page_count(),
            total_exposed: set.total_exposed(),
        }
    }
}
