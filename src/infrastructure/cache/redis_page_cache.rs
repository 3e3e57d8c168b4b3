use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Script};

use crate::domain::invoice::ports::PageCache;

/// Stores the page only if the generation counter still holds the value the
/// renderer read before loading its data.
///
/// KEYS[1] generation counter, KEYS[2] page
/// ARGV[1] expected generation, ARGV[2] html, ARGV[3] ttl seconds
const PUT_IF_CURRENT: &str = r#"
local current = tonumber(redis.call('GET', KEYS[1]) or '0')
if current == tonumber(ARGV[1]) then
  redis.call('SET', KEYS[2], ARGV[2], 'EX', ARGV[3])
  return 1
end
return 0
"#;

/// Rendered pages kept in Redis under `{key_prefix}{path}` with a TTL.
///
/// Each path also has a counter under `{key_prefix}generation:{path}`.
/// Invalidation bumps the counter before deleting the page, and writes are
/// compared against it inside a script, so a render that started before an
/// invalidation can never repopulate the cache with data it read earlier.
///
/// Redis failures never reach the caller: a failed read is a miss, and a
/// failed write or delete is logged and dropped.
pub struct RedisPageCache {
  conn: ConnectionManager,
  key_prefix: String,
  ttl_seconds: u64,
  put_if_current: Script,
}

impl RedisPageCache {
  pub fn new(conn: ConnectionManager, key_prefix: impl Into<String>, ttl_seconds: u64) -> Self {
    Self {
      conn,
      key_prefix: key_prefix.into(),
      ttl_seconds,
      put_if_current: Script::new(PUT_IF_CURRENT),
    }
  }

  fn page_key(&self, path: &str) -> String {
    page_key(&self.key_prefix, path)
  }

  fn generation_key(&self, path: &str) -> String {
    generation_key(&self.key_prefix, path)
  }
}

fn page_key(prefix: &str, path: &str) -> String {
  format!("{}{}", prefix, path)
}

fn generation_key(prefix: &str, path: &str) -> String {
  format!("{}generation:{}", prefix, path)
}

#[async_trait]
impl PageCache for RedisPageCache {
  async fn get(&self, path: &str) -> Option<String> {
    let mut conn = self.conn.clone();
    match conn.get::<_, Option<String>>(self.page_key(path)).await {
      Ok(html) => html,
      Err(e) => {
        tracing::warn!("Page cache read failed for {}: {}", path, e);
        None
      }
    }
  }

  async fn generation(&self, path: &str) -> u64 {
    let mut conn = self.conn.clone();
    match conn
      .get::<_, Option<u64>>(self.generation_key(path))
      .await
    {
      Ok(generation) => generation.unwrap_or(0),
      Err(e) => {
        // No page is stored for a generation that cannot be matched later
        tracing::warn!("Page cache generation read failed for {}: {}", path, e);
        u64::MAX
      }
    }
  }

  async fn put(&self, path: &str, html: &str, generation: u64) {
    let mut conn = self.conn.clone();
    let result: redis::RedisResult<i64> = self
      .put_if_current
      .key(self.generation_key(path))
      .key(self.page_key(path))
      .arg(generation)
      .arg(html)
      .arg(self.ttl_seconds)
      .invoke_async(&mut conn)
      .await;

    match result {
      Ok(1) => {}
      Ok(_) => tracing::debug!("Dropped stale render of {} (generation {})", path, generation),
      Err(e) => tracing::warn!("Page cache write failed for {}: {}", path, e),
    }
  }

  async fn invalidate(&self, path: &str) {
    let mut conn = self.conn.clone();
    // Bump first: a render that reads the old generation can no longer store
    if let Err(e) = conn.incr::<_, _, i64>(self.generation_key(path), 1).await {
      tracing::warn!("Page cache generation bump failed for {}: {}", path, e);
    }
    match conn.del::<_, i64>(self.page_key(path)).await {
      Ok(removed) => tracing::debug!("Invalidated {} ({} key(s) removed)", path, removed),
      Err(e) => tracing::warn!("Page cache invalidation failed for {}: {}", path, e),
    }
  }
}
