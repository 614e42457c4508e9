//! Main docshelf crate providing a unified interface for the document
//! repository.
//!
//! This crate is the primary entry point for users of docshelf. It re-exports
//! the core types from the sub-crates and provides access to the in-memory
//! storage backend.
//!
//! # Features
//!
//! - **Immutable document values** - `Document` and `Author` are plain value
//!   types; `save` returns a new value instead of mutating the caller's
//! - **Upsert with id generation** - documents without an identifier get a
//!   fresh UUID assigned on save
//! - **Multi-criteria search** - title prefixes, content substrings, author
//!   ids, and inclusive timestamp bounds, combined as a conjunction
//! - **Lookup by identifier** - exact-match retrieval returning `Option`
//!
//! # Quick Start
//!
//! ```ignore
//! use docshelf::{prelude::*, memory::InMemoryStore};
//! use chrono::Utc;
//!
//! let store = InMemoryStore::new();
//!
//! // Save a document; the id is generated because none was provided.
//! let saved = store.save(Document::new(
//!     "Field Notes",
//!     "Observed nothing unusual.",
//!     Author::new("alice", "Alice Liddell"),
//!     Utc::now(),
//! ));
//!
//! // Look it up by the assigned id.
//! let id = saved.id.as_deref().unwrap();
//! assert_eq!(store.find_by_id(id), Some(saved.clone()));
//!
//! // Search by attributes.
//! let found = store.search(
//!     &SearchRequest::builder()
//!         .title_prefixes(["Field"])
//!         .author_ids(["alice"])
//!         .build(),
//! );
//! assert_eq!(found, vec![saved]);
//! ```
//!
//! # Search semantics
//!
//! All present criteria must hold for a document to match; absent criteria
//! constrain nothing, so an empty request returns every stored document.
//! Within a criterion, `title_prefixes` and `author_ids` match any listed
//! value while `contains_contents` requires all listed substrings.
//!
//! A present-but-empty prefix or author set therefore matches no document,
//! while a present-but-empty content set matches every document. Stores
//! built with
//! [`normalize_empty_criteria`](memory::InMemoryStoreBuilder::normalize_empty_criteria)
//! treat all empty sets as absent instead.
//!
//! # Concurrency
//!
//! Operations are synchronous and blocking. The in-memory store hands out
//! cloneable handles over shared data, but the repository is designed for
//! single-threaded use; concurrent mutation safety is not a design goal.

pub mod prelude;

pub use docshelf_core::{document, error, query, repository};

// Re-export chrono for convenience
pub use chrono;

/// In-memory storage backend implementations.
pub mod memory {
    pub use docshelf_memory::{InMemoryStore, InMemoryStoreBuilder};
}
