//! In-memory storage implementation of the document repository.
//!
//! This module provides a simple backend that keeps documents in a single
//! HashMap keyed by document id, guarded by a read-write lock.

use std::{collections::HashMap, sync::Arc};

use parking_lot::RwLock;
use uuid::Uuid;

use docshelf_core::{
    document::Document,
    query::SearchRequest,
    repository::DocumentRepository,
};

use crate::evaluator::DocumentEvaluator;

type StoreMap = HashMap<String, Document>;

/// In-memory document repository.
///
/// Documents live in one flat id-to-document map. Every search scans the
/// whole map; there is no indexing, no pagination, and no persistence.
/// The repository targets single-threaded use — the lock exists so that a
/// cloned handle observes the same data, not as a concurrency guarantee.
///
/// # Handles
///
/// `InMemoryStore` is cloneable and uses an `Arc`-wrapped internal map, so
/// clones of the same instance share the same underlying data. Separately
/// constructed stores share nothing.
///
/// # Example
///
/// ```ignore
/// use docshelf::{prelude::*, memory::InMemoryStore};
/// use chrono::Utc;
///
/// let store = InMemoryStore::new();
///
/// let saved = store.save(Document::new(
///     "Minutes",
///     "Meeting adjourned early.",
///     Author::new("bob", "Bob Howard"),
///     Utc::now(),
/// ));
///
/// let id = saved.id.as_deref().unwrap();
/// assert_eq!(store.find_by_id(id), Some(saved));
/// ```
#[derive(Default, Clone, Debug)]
pub struct InMemoryStore {
    /// The main storage map: document_id -> document
    documents: Arc<RwLock<StoreMap>>,
    /// Whether empty criterion sets are treated as absent when searching
    normalize_empty_criteria: bool,
}

impl InMemoryStore {
    /// Creates a new empty in-memory document store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder for constructing an `InMemoryStore` with custom
    /// options.
    pub fn builder() -> InMemoryStoreBuilder {
        InMemoryStoreBuilder::default()
    }

    /// Returns the number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    /// Returns `true` when the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }
}

impl DocumentRepository for InMemoryStore {
    fn save(&self, document: Document) -> Document {
        let id = match document.assigned_id() {
            Some(id) => id.to_string(),
            None => Uuid::new_v4().to_string(),
        };

        let stored = Document {
            id: Some(id.clone()),
            ..document
        };

        self.documents.write().insert(id, stored.clone());

        stored
    }

    fn search(&self, request: &SearchRequest) -> Vec<Document> {
        let expr = if self.normalize_empty_criteria {
            request.normalized().to_expr()
        } else {
            request.to_expr()
        };

        let documents = self.documents.read();

        match expr {
            Some(expr) => documents
                .values()
                .filter(|doc| DocumentEvaluator::new(doc).evaluate(&expr))
                .cloned()
                .collect(),
            None => documents.values().cloned().collect(),
        }
    }

    fn find_by_id(&self, id: &str) -> Option<Document> {
        self.documents.read().get(id).cloned()
    }
}

/// Builder for constructing [`InMemoryStore`] instances.
#[derive(Default)]
pub struct InMemoryStoreBuilder {
    normalize_empty_criteria: bool,
}

impl InMemoryStoreBuilder {
    /// Treats empty criterion sets as absent when searching.
    ///
    /// By default an empty `title_prefixes` or `author_ids` set matches no
    /// document while an empty `contains_contents` set matches every
    /// document. With normalization enabled, all three are ignored instead,
    /// as if the caller had not set them.
    pub fn normalize_empty_criteria(mut self, normalize: bool) -> Self {
        self.normalize_empty_criteria = normalize;
        self
    }

    /// Builds and returns a new [`InMemoryStore`] instance.
    pub fn build(self) -> InMemoryStore {
        InMemoryStore {
            documents: Arc::default(),
            normalize_empty_criteria: self.normalize_empty_criteria,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use docshelf_core::document::Author;

    fn document(title: &str) -> Document {
        Document::new(
            title,
            "body",
            Author::new("alice", "Alice Liddell"),
            Utc::now(),
        )
    }

    #[test]
    fn save_generates_distinct_ids() {
        let store = InMemoryStore::new();

        let first = store.save(document("One"));
        let second = store.save(document("Two"));

        let first_id = first.id.as_deref().unwrap();
        let second_id = second.id.as_deref().unwrap();
        assert!(!first_id.trim().is_empty());
        assert_ne!(first_id, second_id);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn save_with_explicit_id_overwrites() {
        let store = InMemoryStore::new();

        let mut doc = document("Original");
        doc.id = Some("fixed".to_string());
        store.save(doc);

        let mut replacement = document("Replacement");
        replacement.id = Some("fixed".to_string());
        let saved = store.save(replacement);

        assert_eq!(store.len(), 1);
        assert_eq!(saved.title, "Replacement");
        assert_eq!(store.find_by_id("fixed").unwrap().title, "Replacement");
    }

    #[test]
    fn save_does_not_mutate_caller_value() {
        let store = InMemoryStore::new();

        let doc = document("One");
        let saved = store.save(doc.clone());

        assert_eq!(doc.id, None);
        assert!(saved.id.is_some());
        assert_eq!(saved.created, doc.created);
    }

    #[test]
    fn cloned_handles_share_data() {
        let store = InMemoryStore::new();
        let handle = store.clone();

        let saved = store.save(document("Shared"));

        assert_eq!(handle.find_by_id(saved.id.as_deref().unwrap()), Some(saved));
    }

    #[test]
    fn independent_stores_share_nothing() {
        let first = InMemoryStore::new();
        let second = InMemoryStore::new();

        let saved = first.save(document("Private"));

        assert_eq!(second.find_by_id(saved.id.as_deref().unwrap()), None);
        assert!(second.is_empty());
    }

    #[test]
    fn normalization_flag_ignores_empty_sets() {
        let store = InMemoryStore::builder()
            .normalize_empty_criteria(true)
            .build();
        store.save(document("One"));

        let request = SearchRequest {
            author_ids: Some(vec![]),
            ..SearchRequest::default()
        };

        assert_eq!(store.search(&request).len(), 1);

        let reference = InMemoryStore::new();
        reference.save(document("One"));
        assert_eq!(reference.search(&request).len(), 0);
    }
}
