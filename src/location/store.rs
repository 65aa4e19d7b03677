//! Storage for the single current reading.

use std::sync::RwLock;

use super::types::{Coordinates, Reading};
use crate::error_handling::ValidationError;

/// Holder of the latest reading.
///
/// Last write wins and no history is kept. A deployment with several service
/// instances needs an implementation backed by a shared store with the same
/// contract.
pub trait LocationStore: Send + Sync {
    /// Replaces the stored reading.
    fn replace(&self, reading: Reading);

    /// Current reading, or `None` if nothing was ever stored.
    fn read(&self) -> Option<Reading>;

    /// Validates a coordinate pair and stores it stamped with the current time.
    ///
    /// On error the stored reading is left untouched.
    fn update(&self, lat: f64, lng: f64) -> Result<Reading, ValidationError> {
        let reading = Reading::now(Coordinates::new(lat, lng)?);
        self.replace(reading.clone());
        Ok(reading)
    }
}

/// In-process store guarded by a read-write lock.
#[derive(Debug, Default)]
pub struct InMemoryLocationStore {
    current: RwLock<Option<Reading>>,
}

impl InMemoryLocationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocationStore for InMemoryLocationStore {
    fn replace(&self, reading: Reading) {
        // A panicked writer cannot leave a partial reading behind: the value is
        // swapped in a single assignment.
        let mut current = self.current.write().unwrap_or_else(|e| e.into_inner());
        *current = Some(reading);
    }

    fn read(&self) -> Option<Reading> {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_read_before_update_is_absent() {
        let store = InMemoryLocationStore::new();
        assert!(store.read().is_none());
    }

    #[test]
    fn test_update_then_read_returns_pair() {
        let store = InMemoryLocationStore::new();
        let before = chrono::Utc::now();
        let stored = store.update(48.8566, 2.3522).unwrap();

        let read = store.read().expect("reading should be present");
        assert_eq!(read, stored);
        assert_eq!(read.lat, 48.8566);
        assert_eq!(read.lng, 2.3522);
        assert!(read.timestamp >= before);
    }

    #[test]
    fn test_invalid_update_leaves_reading_unchanged() {
        let store = InMemoryLocationStore::new();
        let stored = store.update(10.0, 20.0).unwrap();

        assert_eq!(
            store.update(95.0, 20.0),
            Err(ValidationError::LatitudeOutOfRange)
        );
        assert_eq!(
            store.update(10.0, -200.0),
            Err(ValidationError::LongitudeOutOfRange)
        );
        assert_eq!(store.read(), Some(stored));
    }

    #[test]
    fn test_invalid_first_update_stays_absent() {
        let store = InMemoryLocationStore::new();
        assert!(store.update(f64::NAN, 0.0).is_err());
        assert!(store.read().is_none());
    }

    #[test]
    fn test_last_write_wins() {
        let store = InMemoryLocationStore::new();
        store.update(1.0, 1.0).unwrap();
        store.update(2.0, 2.0).unwrap();
        let read = store.read().unwrap();
        assert_eq!((read.lat, read.lng), (2.0, 2.0));
    }

    #[test]
    fn test_concurrent_updates_store_one_complete_pair() {
        let store = Arc::new(InMemoryLocationStore::new());
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    let v = i as f64;
                    store.update(v, v).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let read = store.read().unwrap();
        // both fields come from the same update
        assert_eq!(read.lat, read.lng);
    }
}
