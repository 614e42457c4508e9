//! A thin in-memory document repository that stores titled, authored documents
//! and retrieves them by identifier or by multi-criteria attribute search.
//!
//! This crate is the core of the docshelf project and provides:
//!
//! - **Document model** ([`document`]) - The `Document` and `Author` value types
//! - **Search API** ([`query`]) - `SearchRequest` construction and the filter expression tree
//! - **Repository abstraction** ([`repository`]) - The trait storage backends implement
//! - **Error handling** ([`error`]) - Error types for the fallible serialization surface
//!
//! # Example
//!
//! ```ignore
//! use docshelf::{prelude::*, memory::InMemoryStore};
//! use chrono::Utc;
//!
//! let store = InMemoryStore::new();
//!
//! let saved = store.save(Document::new(
//!     "Getting Started",
//!     "A short introduction.",
//!     Author::new("alice", "Alice Liddell"),
//!     Utc::now(),
//! ));
//!
//! assert!(store.find_by_id(saved.id.as_deref().unwrap()).is_some());
//! ```

#[allow(unused_extern_crates)]
extern crate self as docshelf_core;

pub mod document;
pub mod error;
pub mod query;
pub mod repository;
