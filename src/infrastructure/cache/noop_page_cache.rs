use async_trait::async_trait;

use crate::domain::invoice::ports::PageCache;

/// Page cache that stores nothing.
/// Used when caching is disabled in configuration, so every view is rendered fresh.
pub struct NoOpPageCache;

impl NoOpPageCache {
  pub fn new() -> Self {
    Self
  }
}

impl Default for NoOpPageCache {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl PageCache for NoOpPageCache {
  async fn get(&self, _path: &str) -> Option<String> {
    None
  }

  async fn generation(&self, _path: &str) -> u64 {
    0
  }

  async fn put(&self, path: &str, _html: &str, _generation: u64) {
    tracing::debug!("NoOpPageCache: not storing {} (cache disabled)", path);
  }

  async fn invalidate(&self, path: &str) {
    tracing::debug!("NoOpPageCache: nothing to invalidate for {}", path);
  }
}
