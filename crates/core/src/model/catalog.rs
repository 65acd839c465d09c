use crate::model::entry::CatalogEntry;
use crate::model::ids::EntryIndex;

/// The fixed ordered sequence of vocabulary entries driving both the browse
/// and quiz components.
///
/// Built once at the loading boundary, then shared by reference; nothing in
/// the engine mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    #[must_use]
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: EntryIndex) -> Option<&CatalogEntry> {
        self.entries.get(index.value())
    }

    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// All valid entry indices, in catalog order.
    pub fn indices(&self) -> impl Iterator<Item = EntryIndex> + '_ {
        (0..self.entries.len()).map(EntryIndex::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entry::EntryDraft;

    fn build_catalog(n: usize) -> Catalog {
        let entries = (0..n)
            .map(|i| {
                EntryDraft::new(format!("S{i}"), format!("T{i}"))
                    .validate()
                    .unwrap()
            })
            .collect();
        Catalog::new(entries)
    }

    #[test]
    fn get_returns_entry_in_range() {
        let catalog = build_catalog(3);
        let entry = catalog.get(EntryIndex::new(2)).unwrap();
        assert_eq!(entry.source_text(), "S2");
    }

    #[test]
    fn get_returns_none_out_of_range() {
        let catalog = build_catalog(3);
        assert!(catalog.get(EntryIndex::new(3)).is_none());
    }

    #[test]
    fn indices_cover_every_position() {
        let catalog = build_catalog(4);
        let indices: Vec<usize> = catalog.indices().map(|i| i.value()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn empty_catalog_reports_empty() {
        let catalog = build_catalog(0);
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert_eq!(catalog.indices().count(), 0);
    }
}
