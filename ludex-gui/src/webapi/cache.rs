use std::{num::NonZeroUsize, sync::Arc};

use druid::ImageBuf;
use lru::LruCache;
use parking_lot::Mutex;

const CAPACITY: usize = 256;

/// Keeps recently downloaded cover images in memory. Old entries fall out
/// once the capacity is reached.
pub struct ImageCache {
    entries: Mutex<LruCache<Arc<str>, ImageBuf>>,
}

impl Default for ImageCache {
    fn default() -> Self {
        Self {
            entries: Mutex::new(LruCache::new(
                NonZeroUsize::new(CAPACITY).expect("Image cache capacity must be non-zero"),
            )),
        }
    }
}

impl ImageCache {
    pub fn lookup(&self, url: &str) -> Option<ImageBuf> {
        self.entries.lock().get(url).cloned()
    }

    pub fn store(&self, url: Arc<str>, image: ImageBuf) {
        self.entries.lock().put(url, image);
    }
}
