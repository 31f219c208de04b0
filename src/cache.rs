//! Template text cache used by message length estimation.
//!
//! The library never evicts entries on its own; whoever constructs the cache
//! decides its lifetime. Share one instance between clients with
//! [`crate::QsmsClientBuilder::template_cache`].

use dashmap::DashMap;

use crate::domain::{AppId, TemplateId};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateCacheKey {
    pub app_id: AppId,
    pub template_id: TemplateId,
}

impl TemplateCacheKey {
    pub fn new(app_id: AppId, template_id: TemplateId) -> Self {
        Self {
            app_id,
            template_id,
        }
    }
}

/// Storage for placeholder-stripped template text.
///
/// Implementations must be safe to call from many tasks at once. Two callers
/// may race to `put` the same key; both write the same text.
pub trait TemplateCache: Send + Sync {
    fn get(&self, key: &TemplateCacheKey) -> Option<String>;
    fn put(&self, key: TemplateCacheKey, text: String);
}

#[derive(Debug, Default)]
/// Unbounded in-memory [`TemplateCache`].
pub struct InMemoryTemplateCache {
    entries: DashMap<TemplateCacheKey, String>,
}

impl InMemoryTemplateCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TemplateCache for InMemoryTemplateCache {
    fn get(&self, key: &TemplateCacheKey) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn put(&self, key: TemplateCacheKey, text: String) {
        self.entries.insert(key, text);
    }
}
