use std::sync::Arc;

use super::data::{DateRange, Dataset, Entry};
use super::filter::filter_by_range;

/// The Session owns everything loaded during one run of the app:
/// the cached feed and the entries currently shown in the gallery.
///
/// The dataset is fetched at most once per successful load and never
/// modified afterwards. The selection is replaced wholesale on every
/// filter, so positions are only meaningful for the gallery rendered
/// from the current selection.
#[derive(Debug, Default)]
pub struct Session {
    dataset: Option<Arc<Dataset>>,
    selection: Vec<Entry>,
    active_range: Option<DateRange>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.dataset.is_some()
    }

    /// Store a freshly fetched feed
    ///
    /// Concurrent fetches are not de-duplicated: whichever response
    /// resolves last wins.
    pub fn store_dataset(&mut self, dataset: Arc<Dataset>) {
        self.dataset = Some(dataset);
    }

    /// Replace the selection with the cached entries inside `range`
    ///
    /// Returns the number of selected entries, or `None` if no
    /// dataset has been loaded yet (the selection is left untouched).
    pub fn apply_range(&mut self, range: DateRange) -> Option<usize> {
        let dataset = self.dataset.as_ref()?;
        self.selection = filter_by_range(dataset, &range);
        self.active_range = Some(range);
        Some(self.selection.len())
    }

    pub fn selection(&self) -> &[Entry] {
        &self.selection
    }

    pub fn active_range(&self) -> Option<DateRange> {
        self.active_range
    }

    /// Look up the entry behind a gallery card
    pub fn entry_at(&self, position: usize) -> Option<&Entry> {
        self.selection.get(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::fixtures::*;

    #[test]
    fn test_apply_range_without_dataset() {
        let mut session = Session::new();
        let range = DateRange::parse("2024-04-01", "2024-04-02").unwrap();

        assert_eq!(session.apply_range(range), None);
        assert!(session.selection().is_empty());
        assert_eq!(session.active_range(), None);
    }

    #[test]
    fn test_apply_range_replaces_selection() {
        let mut session = Session::new();
        session.store_dataset(Arc::new(april_dataset()));

        let first = DateRange::parse("2024-04-01", "2024-04-05").unwrap();
        assert_eq!(session.apply_range(first), Some(5));

        let second = DateRange::parse("2024-04-09", "2024-04-10").unwrap();
        assert_eq!(session.apply_range(second), Some(2));

        assert_eq!(session.entry_at(0).map(|e| e.date), Some(date("2024-04-09")));
        assert_eq!(session.entry_at(2), None);
        assert_eq!(session.active_range(), Some(second));
    }

    #[test]
    fn test_store_dataset_overwrites_cache() {
        let mut session = Session::new();
        session.store_dataset(Arc::new(april_dataset()));
        session.store_dataset(Arc::new(vec![image("2024-05-01")]));

        assert!(session.is_loaded());
        let may = DateRange::parse("2024-05-01", "2024-05-31").unwrap();
        assert_eq!(session.apply_range(may), Some(1));
        let april = DateRange::parse("2024-04-01", "2024-04-30").unwrap();
        assert_eq!(session.apply_range(april), Some(0));
    }
}
