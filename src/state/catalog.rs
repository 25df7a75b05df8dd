use chrono::{DateTime, Local};

use super::data::{CatalogEntry, CatalogId};

/// In-memory mirror of the backend's saved-file list.
///
/// There is no merge logic: every successful refresh replaces the
/// whole sequence, and a successful clear empties it.
#[derive(Debug, Default)]
pub struct CatalogStore {
    entries: Vec<CatalogEntry>,
    /// When the list was last replaced from a backend reply
    refreshed_at: Option<DateTime<Local>>,
}

impl CatalogStore {
    /// Entries in the order the backend reported them
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn refreshed_at(&self) -> Option<DateTime<Local>> {
        self.refreshed_at
    }

    /// Replace the catalog wholesale with a fresh backend listing
    pub fn replace(&mut self, entries: Vec<CatalogEntry>) {
        tracing::info!("📁 Catalog refreshed: {} saved files", entries.len());
        self.entries = entries;
        self.refreshed_at = Some(Local::now());
    }

    /// Empty the catalog after the backend confirmed a clear
    pub fn clear(&mut self) {
        self.entries.clear();
        self.refreshed_at = Some(Local::now());
    }

    /// Find an entry by its backend ID
    pub fn lookup(&self, id: &CatalogId) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, filename: &str) -> CatalogEntry {
        CatalogEntry {
            id: CatalogId::new(id),
            filename: filename.to_string(),
        }
    }

    #[test]
    fn test_replace_is_wholesale_and_ordered() {
        let mut catalog = CatalogStore::default();
        catalog.replace(vec![entry("a1", "one.iq"), entry("b2", "two.bin")]);
        catalog.replace(vec![entry("c3", "three.iq")]);

        assert_eq!(catalog.entries(), &[entry("c3", "three.iq")]);
        assert!(catalog.refreshed_at().is_some());
    }

    #[test]
    fn test_lookup_and_clear() {
        let mut catalog = CatalogStore::default();
        catalog.replace(vec![entry("a1", "capture1.iq")]);

        assert_eq!(
            catalog.lookup(&CatalogId::new("a1")).map(|e| e.filename.as_str()),
            Some("capture1.iq")
        );
        assert!(catalog.lookup(&CatalogId::new("zz")).is_none());

        catalog.clear();
        assert!(catalog.is_empty());
    }
}
