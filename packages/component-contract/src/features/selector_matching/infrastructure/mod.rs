pub mod selector_cache;

pub use selector_cache::{SelectorCache, SelectorCacheStats};
