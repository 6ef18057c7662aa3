//! Date range filtering over the feed

use super::data::{DateRange, Entry};

/// Select the entries whose date falls within `range` (inclusive)
///
/// Entries keep the dataset order. An empty intersection is not an error.
pub fn filter_by_range(entries: &[Entry], range: &DateRange) -> Vec<Entry> {
    entries
        .iter()
        .filter(|entry| range.contains(entry.date))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::fixtures::*;
    use pretty_assertions::assert_eq;

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::parse(start, end).unwrap()
    }

    #[test]
    fn test_filter_example_range() {
        let dataset = april_dataset();

        let result = filter_by_range(&dataset, &range("2024-04-03", "2024-04-05"));

        let dates: Vec<_> = result.iter().map(|e| e.date).collect();
        assert_eq!(
            dates,
            vec![date("2024-04-03"), date("2024-04-04"), date("2024-04-05")]
        );
    }

    #[test]
    fn test_filter_preserves_feed_order() {
        // Feeds are not guaranteed to be sorted
        let mut dataset = april_dataset();
        dataset.reverse();

        let result = filter_by_range(&dataset, &range("2024-04-02", "2024-04-04"));

        let dates: Vec<_> = result.iter().map(|e| e.date).collect();
        assert_eq!(
            dates,
            vec![date("2024-04-04"), date("2024-04-03"), date("2024-04-02")]
        );
    }

    #[test]
    fn test_filter_is_faithful_subsequence() {
        let dataset = april_dataset();
        let r = range("2024-04-02", "2024-04-08");

        let result = filter_by_range(&dataset, &r);

        assert!(result.iter().all(|e| r.contains(e.date)));
        let expected: Vec<_> = dataset.iter().filter(|e| r.contains(e.date)).cloned().collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let dataset = april_dataset();
        let r = range("2024-04-04", "2024-04-09");

        let once = filter_by_range(&dataset, &r);
        let twice = filter_by_range(&once, &r);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_outside_dataset_is_empty() {
        let dataset = april_dataset();

        let result = filter_by_range(&dataset, &range("2023-01-01", "2023-12-31"));

        assert!(result.is_empty());
    }
}
