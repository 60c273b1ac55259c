// Size-keyed memoization of generated datasets
use crate::application::dataset_source::DatasetSource;
use crate::domain::dataset::Dataset;
use crate::domain::error::Result;
use dashmap::DashMap;
use std::sync::Arc;

/// Generated datasets keyed by row count only; no eviction.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: DashMap<usize, Arc<Dataset>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, n_points: usize) -> Option<Arc<Dataset>> {
        self.entries.get(&n_points).map(|entry| entry.value().clone())
    }

    /// Store a dataset unless one is already cached for its size.
    /// Returns whichever dataset ends up cached.
    pub fn insert(&self, dataset: Arc<Dataset>) -> Arc<Dataset> {
        self.entries.entry(dataset.len()).or_insert(dataset).value().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}

/// Wraps a source so repeated requests for the same size reuse the first result.
pub struct MemoizedSource<S> {
    inner: S,
    cache: Arc<DatasetCache>,
}

impl<S: DatasetSource> MemoizedSource<S> {
    pub fn new(inner: S, cache: Arc<DatasetCache>) -> Self {
        Self { inner, cache }
    }
}

impl<S: DatasetSource> DatasetSource for MemoizedSource<S> {
    fn dataset(&self, n_points: i64) -> Result<Arc<Dataset>> {
        if let Ok(key) = usize::try_from(n_points) {
            if let Some(hit) = self.cache.get(key) {
                tracing::debug!("Dataset cache hit for {} points", key);
                return Ok(hit);
            }
        }

        let generated = self.inner.dataset(n_points)?;
        tracing::debug!("Dataset cache miss for {} points ({} cached sizes)", n_points, self.cache.len());
        Ok(self.cache.insert(generated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::generator::{GeneratorSettings, SyntheticGenerator};
    use crate::domain::error::DashboardError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSource {
        calls: AtomicUsize,
        generator: SyntheticGenerator,
    }

    impl DatasetSource for CountingSource {
        fn dataset(&self, n_points: i64) -> Result<Arc<Dataset>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.generator.dataset(n_points)
        }
    }

    fn counting() -> CountingSource {
        CountingSource {
            calls: AtomicUsize::new(0),
            // unseeded: identical results can only come from the cache
            generator: SyntheticGenerator::new(GeneratorSettings::default()).unwrap(),
        }
    }

    #[test]
    fn test_repeated_calls_are_memoized() {
        let source = MemoizedSource::new(counting(), Arc::new(DatasetCache::new()));

        let first = source.dataset(50).unwrap();
        let second = source.dataset(50).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first, second);
        assert_eq!(source.inner.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_cache_keyed_by_size() {
        let cache = Arc::new(DatasetCache::new());
        let source = MemoizedSource::new(counting(), cache.clone());

        source.dataset(10).unwrap();
        source.dataset(20).unwrap();
        source.dataset(10).unwrap();

        assert_eq!(cache.len(), 2);
        assert_eq!(source.inner.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_invalid_requests_not_cached() {
        let cache = Arc::new(DatasetCache::new());
        let source = MemoizedSource::new(counting(), cache.clone());

        assert!(matches!(source.dataset(0), Err(DashboardError::InvalidArgument(_))));
        assert!(matches!(source.dataset(-5), Err(DashboardError::InvalidArgument(_))));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clear_forces_regeneration() {
        let cache = Arc::new(DatasetCache::new());
        let source = MemoizedSource::new(counting(), cache.clone());

        let first = source.dataset(30).unwrap();
        cache.clear();
        let second = source.dataset(30).unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(source.inner.calls.load(Ordering::SeqCst), 2);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_first_insert_wins() {
        let cache = DatasetCache::new();
        let generator = SyntheticGenerator::new(GeneratorSettings::default()).unwrap();
        let a = Arc::new(generator.generate(5).unwrap());
        let b = Arc::new(generator.generate(5).unwrap());

        let kept = cache.insert(a.clone());
        let kept_again = cache.insert(b);

        assert!(Arc::ptr_eq(&kept, &a));
        assert!(Arc::ptr_eq(&kept_again, &a));
    }
}
