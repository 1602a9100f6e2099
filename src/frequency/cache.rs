use super::{load_frequency_table, FrequencyTable};
use crate::error::PsResult;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

/// Owns the process's frequency table once it has been loaded.
///
/// Lazily filled on first use and shared read-only afterwards. `reset`
/// empties the slot so the next access reloads; `inject` installs a
/// prepared table and skips loading altogether.
#[derive(Debug, Default)]
pub struct FrequencyCache {
    slot: Mutex<Option<Arc<FrequencyTable>>>,
}

impl FrequencyCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache that starts out holding `table`.
    pub fn preloaded(table: FrequencyTable) -> Self {
        let cache = Self::new();
        cache.inject(table);
        cache
    }

    fn lock(&self) -> MutexGuard<'_, Option<Arc<FrequencyTable>>> {
        // The slot is only ever replaced wholesale, so a poisoned guard still holds a valid value.
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get_or_load<P: AsRef<Path>>(&self, path: P) -> PsResult<Arc<FrequencyTable>> {
        self.get_or_load_with(|| load_frequency_table(path))
    }

    /// Returns the cached table, running `load` only if the slot is empty.
    /// A failed load leaves the slot empty and is not retried here.
    pub fn get_or_load_with<F>(&self, load: F) -> PsResult<Arc<FrequencyTable>>
    where
        F: FnOnce() -> PsResult<FrequencyTable>,
    {
        let mut guard = self.lock();
        if let Some(table) = guard.as_ref() {
            debug!("Frequency table cache hit");
            return Ok(Arc::clone(table));
        }
        let table = Arc::new(load()?);
        *guard = Some(Arc::clone(&table));
        Ok(table)
    }

    pub fn get(&self) -> Option<Arc<FrequencyTable>> {
        self.lock().clone()
    }

    pub fn inject(&self, table: FrequencyTable) -> Arc<FrequencyTable> {
        let table = Arc::new(table);
        *self.lock() = Some(Arc::clone(&table));
        table
    }

    pub fn reset(&self) {
        if self.lock().take().is_some() {
            info!("Frequency table cache cleared");
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.lock().is_some()
    }
}
