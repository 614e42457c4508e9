//! Core value types for document representation and serialization.
//!
//! This module provides the [`Document`] and [`Author`] value types stored by
//! the repository, as well as utilities for converting documents to and from
//! JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, from_value, to_value};

use crate::error::{StoreError, StoreResult};

/// The author of a [`Document`].
///
/// An author is an immutable value embedded in a document. The `id` field is
/// the equality key used by author-based search criteria; `name` is display
/// data the repository never inspects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Stable author identifier.
    pub id: String,
    /// Human-readable display name.
    pub name: String,
}

impl Author {
    /// Creates a new author value.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }
}

/// A stored document.
///
/// Documents are immutable values constructed at once. The repository never
/// mutates a caller's instance: [`save`](crate::repository::DocumentRepository::save)
/// returns a new value with the final identifier filled in.
///
/// # Identifiers
///
/// `id` is `None` when the caller wants the repository to generate one.
/// An empty or whitespace-only id is treated the same as `None`. Once a
/// document is stored its id is populated, unique within the store, and
/// never changed by the repository.
///
/// # Example
///
/// ```ignore
/// use docshelf::prelude::*;
/// use chrono::Utc;
///
/// let doc = Document::new(
///     "Release Notes",
///     "Nothing of note.",
///     Author::new("alice", "Alice Liddell"),
///     Utc::now(),
/// );
/// assert!(doc.id.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Unique document identifier, absent until assigned by the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Document title.
    pub title: String,
    /// Free-text document body.
    pub content: String,
    /// The document's author.
    pub author: Author,
    /// Caller-supplied creation timestamp, opaque to the repository.
    pub created: DateTime<Utc>,
}

impl Document {
    /// Creates a document with no identifier assigned.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: Author,
        created: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
            author,
            created,
        }
    }

    /// Creates a document with an explicit identifier.
    pub fn with_id(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        author: Author,
        created: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            title: title.into(),
            content: content.into(),
            author,
            created,
        }
    }

    /// Returns the assigned identifier, if any.
    ///
    /// `None`, the empty string, and whitespace-only strings all count as
    /// "not assigned". A present identifier is returned verbatim.
    pub fn assigned_id(&self) -> Option<&str> {
        self.id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
    }

    /// Converts this document to a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> StoreResult<Value> {
        Ok(to_value(self)?)
    }

    /// Creates a document from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidArgument`] if the value is not a JSON
    /// object, or [`StoreError::Serialization`] if the structure is invalid.
    pub fn from_json(value: Value) -> StoreResult<Self> {
        if !value.is_object() {
            return Err(StoreError::InvalidArgument(
                "expected a JSON object".to_string(),
            ));
        }

        Ok(from_value(value)?)
    }
}
