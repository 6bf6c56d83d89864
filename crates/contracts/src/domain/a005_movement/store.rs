use std::collections::BTreeMap;

use chrono::NaiveDate;
use thiserror::Error;

use super::aggregate::Movement;
use super::filter::MovementFilter;
use super::fixtures::{demo_movements, fallback_movement};

/// Record returned by [`DemoMovementStore::lookup_or_default`] on a miss.
pub const FALLBACK_MOVEMENT_ID: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("movement {0} not found")]
    NotFound(u32),
    #[error("fallback movement {0} is missing from the fixture table")]
    MissingFallback(u32),
}

/// Static, read-only table of demo movements keyed by id.
///
/// Saves and deletes never touch this table.
#[derive(Debug, Clone)]
pub struct DemoMovementStore {
    records: BTreeMap<u32, Movement>,
    fallback: Movement,
}

impl DemoMovementStore {
    /// Build a store over `records`. The table must contain the fallback id.
    pub fn new(records: Vec<Movement>) -> Result<Self, StoreError> {
        let records: BTreeMap<u32, Movement> =
            records.into_iter().map(|m| (m.id, m)).collect();
        let fallback = records
            .get(&FALLBACK_MOVEMENT_ID)
            .cloned()
            .ok_or(StoreError::MissingFallback(FALLBACK_MOVEMENT_ID))?;
        Ok(Self { records, fallback })
    }

    pub fn with_fixtures() -> Self {
        let records = demo_movements()
            .into_iter()
            .map(|m| (m.id, m))
            .collect();
        Self {
            records,
            fallback: fallback_movement(),
        }
    }

    pub fn get(&self, id: u32) -> Option<&Movement> {
        self.records.get(&id)
    }

    /// Strict lookup: a miss is reported as [`StoreError::NotFound`].
    pub fn lookup(&self, id: u32) -> Result<&Movement, StoreError> {
        self.get(id).ok_or(StoreError::NotFound(id))
    }

    pub fn fallback(&self) -> &Movement {
        &self.fallback
    }

    /// Demo-screen lookup: unknown ids resolve to the fallback record.
    pub fn lookup_or_default(&self, id: u32) -> &Movement {
        self.get(id).unwrap_or_else(|| self.fallback())
    }

    /// All movements, newest first.
    pub fn all(&self) -> Vec<&Movement> {
        let mut items: Vec<&Movement> = self.records.values().collect();
        items.sort_by(|a, b| b.date.cmp(&a.date).then(a.id.cmp(&b.id)));
        items
    }

    pub fn filter(&self, filter: &MovementFilter, today: NaiveDate) -> Vec<&Movement> {
        self.all()
            .into_iter()
            .filter(|m| filter.matches(m, today))
            .collect()
    }

    pub fn total_amount(&self, filter: &MovementFilter, today: NaiveDate) -> f64 {
        self.filter(filter, today).iter().map(|m| m.amount).sum()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for DemoMovementStore {
    fn default() -> Self {
        Self::with_fixtures()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_id() {
        let store = DemoMovementStore::with_fixtures();
        let aws = store.lookup(3).unwrap();
        assert_eq!(aws.description, "Suscripción AWS - Enero");
        assert_eq!(aws.amount, 450.0);
        assert_eq!(
            aws.project.as_ref().map(|p| p.name.as_str()),
            Some("E-commerce TechStore")
        );
    }

    #[test]
    fn test_lookup_miss_is_explicit() {
        let store = DemoMovementStore::with_fixtures();
        assert_eq!(store.lookup(999), Err(StoreError::NotFound(999)));
        assert!(store.get(999).is_none());
    }

    #[test]
    fn test_lookup_or_default_falls_back_to_first() {
        let store = DemoMovementStore::with_fixtures();
        assert_eq!(store.lookup_or_default(999), store.lookup_or_default(1));
        assert_eq!(store.lookup_or_default(999).id, 1);
        assert_eq!(store.lookup_or_default(4).id, 4);
    }

    #[test]
    fn test_new_requires_fallback_record() {
        let records: Vec<Movement> = demo_movements()
            .into_iter()
            .filter(|m| m.id != FALLBACK_MOVEMENT_ID)
            .collect();
        assert_eq!(
            DemoMovementStore::new(records).unwrap_err(),
            StoreError::MissingFallback(1)
        );
        assert_eq!(DemoMovementStore::new(demo_movements()).unwrap().len(), 7);
    }

    #[test]
    fn test_fixture_fallback_matches_table() {
        let fixtures = DemoMovementStore::with_fixtures();
        assert_eq!(fixtures.fallback().id, FALLBACK_MOVEMENT_ID);
        assert_eq!(fixtures.get(FALLBACK_MOVEMENT_ID), Some(fixtures.fallback()));

        let checked = DemoMovementStore::new(demo_movements()).unwrap();
        assert_eq!(checked.fallback(), fixtures.fallback());
        assert_eq!(DemoMovementStore::default().lookup_or_default(0), fixtures.fallback());
    }

    #[test]
    fn test_all_is_newest_first() {
        let store = DemoMovementStore::with_fixtures();
        let ids: Vec<u32> = store.all().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_total_amount() {
        let store = DemoMovementStore::with_fixtures();
        let today = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        assert_eq!(store.total_amount(&MovementFilter::default(), today), 5119.0);
    }
}
