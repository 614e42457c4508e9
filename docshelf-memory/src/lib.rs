//! In-memory document repository backend for docshelf.
//!
//! This crate provides the canonical implementation of the
//! `DocumentRepository` trait: a flat id-to-document map held in memory,
//! scanned linearly on every search.
//!
//! # Characteristics
//!
//! - **Synchronous** - All operations are plain blocking calls
//! - **Typed storage** - Documents are stored as-is, no serialization step
//! - **Shared handles** - Cloning a store yields a handle to the same data
//! - **No persistence** - Contents live until the process exits
//!
//! # Quick Start
//!
//! ```ignore
//! use docshelf::{prelude::*, memory::InMemoryStore};
//! use chrono::Utc;
//!
//! let store = InMemoryStore::new();
//!
//! store.save(Document::new(
//!     "Field Notes",
//!     "Observed nothing unusual.",
//!     Author::new("alice", "Alice Liddell"),
//!     Utc::now(),
//! ));
//!
//! let found = store.search(
//!     &SearchRequest::builder()
//!         .title_prefixes(["Field"])
//!         .build(),
//! );
//! assert_eq!(found.len(), 1);
//! ```

#[allow(unused_extern_crates)]
extern crate self as docshelf_memory;

pub mod evaluator;
pub mod store;

pub use store::{InMemoryStore, InMemoryStoreBuilder};
