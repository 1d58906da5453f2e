//! Time-bounded cache for the dropdown option lists.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::sheets::{Result, SheetStore};

/// How long a memoized read stays valid.
const DEFAULT_TTL: Duration = Duration::from_secs(600);

/// Selectable values derived from the entry sheet, each list sorted,
/// distinct, and free of empty strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DropdownOptions {
    pub main_cats: Vec<String>,
    pub sub_cats: Vec<String>,
    pub payments: Vec<String>,
}

/// Memoizes one full-table read of the entry sheet.
///
/// The first lookup inside the TTL window hits the store; later
/// lookups return the memoized lists without a read. `invalidate`
/// drops the memo so newly added categories show up on the next
/// lookup. Session-owned, so a restart only affects its own session.
pub struct OptionCache {
    ttl: Duration,
    cached: Option<(Instant, DropdownOptions)>,
}

impl OptionCache {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self { ttl, cached: None }
    }

    /// Returns the option lists, reading from the store only when the
    /// memo is missing or stale. Read failures propagate unchanged.
    pub fn options(&mut self, store: &dyn SheetStore) -> Result<DropdownOptions> {
        if let Some((read_at, options)) = &self.cached {
            if read_at.elapsed() < self.ttl {
                return Ok(options.clone());
            }
        }

        debug!("dropdown cache stale, reading entry sheet");
        let records = store.entry_records()?;
        let options = DropdownOptions {
            main_cats: distinct_sorted(records.iter().map(|r| r.main_cat.as_str())),
            sub_cats: distinct_sorted(records.iter().map(|r| r.sub_cat.as_str())),
            payments: distinct_sorted(records.iter().map(|r| r.payment.as_str())),
        };
        self.cached = Some((Instant::now(), options.clone()));
        Ok(options)
    }

    /// Drops the memo so the next lookup performs a fresh read.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}

impl Default for OptionCache {
    fn default() -> Self {
        Self::new()
    }
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|value| !value.trim().is_empty())
        .map(|value| value.to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheets::MemorySheet;

    fn seeded_sheet() -> MemorySheet {
        let sheet = MemorySheet::new();
        sheet.push_row(["a", "b", "Travel", "Flights", "Debit Card", "1", "01/01/24"]);
        sheet.push_row(["c", "d", "General Spending", "Food", "Credit Card", "2", "01/02/24"]);
        sheet.push_row(["e", "f", "General Spending", "", "Credit Card", "3", "01/03/24"]);
        sheet
    }

    #[test]
    fn options_are_sorted_distinct_and_non_empty() {
        let sheet = seeded_sheet();
        let mut cache = OptionCache::new();
        let options = cache.options(&sheet).unwrap();
        assert_eq!(options.main_cats, vec!["General Spending", "Travel"]);
        assert_eq!(options.sub_cats, vec!["Flights", "Food"]);
        assert_eq!(options.payments, vec!["Credit Card", "Debit Card"]);
    }

    #[test]
    fn memoized_lookup_skips_the_read() {
        let sheet = seeded_sheet();
        let mut cache = OptionCache::new();
        cache.options(&sheet).unwrap();
        cache.options(&sheet).unwrap();
        assert_eq!(sheet.records_reads(), 1);
    }

    #[test]
    fn zero_ttl_reads_every_time() {
        let sheet = seeded_sheet();
        let mut cache = OptionCache::with_ttl(Duration::ZERO);
        cache.options(&sheet).unwrap();
        cache.options(&sheet).unwrap();
        assert_eq!(sheet.records_reads(), 2);
    }

    #[test]
    fn invalidate_forces_a_fresh_read() {
        let sheet = seeded_sheet();
        let mut cache = OptionCache::new();
        cache.options(&sheet).unwrap();
        cache.invalidate();
        cache.options(&sheet).unwrap();
        assert_eq!(sheet.records_reads(), 2);
    }

    #[test]
    fn read_failure_propagates() {
        let sheet = seeded_sheet();
        sheet.set_offline(true);
        let mut cache = OptionCache::new();
        assert!(cache.options(&sheet).is_err());
    }
}
