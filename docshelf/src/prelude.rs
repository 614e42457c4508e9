//! Convenient re-exports of commonly used types from docshelf.
//!
//! Import this prelude module to quickly access the most frequently used
//! types and traits without needing to import from multiple sub-modules:
//!
//! ```ignore
//! use docshelf::prelude::*;
//! ```

pub use docshelf_core::{
    document::{Author, Document},
    error::{StoreError, StoreResult},
    query::{Expr, Field, FieldOp, FieldValue, Filter, QueryVisitor, SearchRequest, SearchRequestBuilder},
    repository::DocumentRepository,
};
