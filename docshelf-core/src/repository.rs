//! Repository abstraction for document storage.
//!
//! This module defines the trait that storage implementations provide. The
//! shipped implementation is the in-memory store in `docshelf-memory`; the
//! trait is the seam a persistent implementation would plug into.

use crate::{document::Document, query::SearchRequest};

/// Abstract interface for document repositories.
///
/// All operations are synchronous, blocking, and total: they never fail and
/// never panic on any input. Implementations are not required to be safe for
/// concurrent mutation; the repository is designed for single-threaded use.
pub trait DocumentRepository {
    /// Upserts a document and returns it as stored.
    ///
    /// When the document carries no identifier (`None`, empty, or
    /// whitespace-only), a fresh unique id is generated and assigned. When an
    /// identifier is present it is used verbatim: a new id inserts, an
    /// existing id overwrites (last writer wins). The `created` field is
    /// never altered on either path.
    ///
    /// The caller's value is not mutated; the returned document carries the
    /// final identifier.
    fn save(&self, document: Document) -> Document;

    /// Returns all documents matching the request.
    ///
    /// Present criteria are AND-combined; absent criteria constrain nothing.
    /// A request with no criteria returns every stored document. Result
    /// order is unspecified.
    fn search(&self, request: &SearchRequest) -> Vec<Document>;

    /// Looks up a document by its exact identifier.
    fn find_by_id(&self, id: &str) -> Option<Document>;
}
