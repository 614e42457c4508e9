//! Search request construction and the filter expression API.
//!
//! This module provides the [`SearchRequest`] value object, a fluent builder
//! for constructing it, and the filter expression tree a request compiles to.
//! Backends evaluate expressions through the [`QueryVisitor`] trait rather
//! than interpreting the request directly.
//!
//! # Request Building
//!
//! Every criterion is optional; an absent criterion constrains nothing.
//!
//! ```ignore
//! use docshelf::query::SearchRequest;
//! use chrono::Utc;
//!
//! let request = SearchRequest::builder()
//!     .title_prefixes(["Release"])
//!     .author_ids(["alice"])
//!     .created_to(Utc::now())
//!     .build();
//! ```
//!
//! # Filter Expression API
//!
//! The [`Filter`] struct provides static methods for building filter
//! expressions over document fields:
//!
//! - Comparison: `eq`, `gte`, `lte`
//! - String: `starts_with`, `contains`
//! - Logical: `and`, `or`
//!
//! Expressions can be combined using chainable methods for more complex
//! predicates. Note the short-circuit identities: an empty `Or` matches no
//! document and an empty `And` matches every document. Request compilation
//! relies on them — see [`SearchRequest::to_expr`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A document field a filter expression can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The document title.
    Title,
    /// The document body.
    Content,
    /// The embedded author's identifier.
    AuthorId,
    /// The creation timestamp.
    Created,
}

/// A comparison operand in a filter expression.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// String operand.
    Str(String),
    /// Timestamp operand.
    Time(DateTime<Utc>),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Str(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Str(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::Time(value)
    }
}

/// Field comparison operators for filter expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOp {
    /// Equal to (exact match).
    Eq,
    /// Greater than or equal to.
    Gte,
    /// Less than or equal to.
    Lte,
    /// String starts with value.
    StartsWith,
    /// String contains value as a substring.
    Contains,
}

/// A filter expression for matching documents.
///
/// Expressions combine field comparisons with logical `And`/`Or` nodes to
/// build the predicate a search evaluates.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Logical AND of multiple expressions (all must match).
    And(Vec<Expr>),
    /// Logical OR of multiple expressions (any must match).
    Or(Vec<Expr>),
    /// Field comparison expression.
    Field {
        /// The field to compare.
        field: Field,
        /// The comparison operator.
        op: FieldOp,
        /// The value to compare against.
        value: FieldValue,
    },
}

impl Expr {
    /// Creates a field comparison expression.
    pub fn field(field: Field, op: FieldOp, value: FieldValue) -> Self {
        Expr::Field { field, op, value }
    }

    /// Combines this expression with another using logical AND.
    ///
    /// If this expression is already an AND, the other expression is appended
    /// to the list. Otherwise, a new AND expression is created.
    pub fn and(self, other: Expr) -> Self {
        match self {
            Expr::And(mut list) => {
                list.push(other);
                Expr::And(list)
            }
            _ => Expr::And(vec![self, other]),
        }
    }

    /// Combines this expression with another using logical OR.
    ///
    /// If this expression is already an OR, the other expression is appended
    /// to the list. Otherwise, a new OR expression is created.
    pub fn or(self, other: Expr) -> Self {
        match self {
            Expr::Or(mut list) => {
                list.push(other);
                Expr::Or(list)
            }
            _ => Expr::Or(vec![self, other]),
        }
    }
}

/// Helper struct for constructing filter expressions.
///
/// Provides static methods to construct common filter expressions in a
/// type-safe manner.
///
/// # Example
///
/// ```ignore
/// use docshelf::query::{Field, Filter};
///
/// let expr = Filter::starts_with(Field::Title, "Release")
///     .and(Filter::eq(Field::AuthorId, "alice"));
/// ```
pub struct Filter;

impl Filter {
    /// Creates an equality filter expression.
    pub fn eq(field: Field, value: impl Into<FieldValue>) -> Expr {
        Expr::field(field, FieldOp::Eq, value.into())
    }

    /// Creates a greater-than-or-equal filter expression.
    pub fn gte(field: Field, value: impl Into<FieldValue>) -> Expr {
        Expr::field(field, FieldOp::Gte, value.into())
    }

    /// Creates a less-than-or-equal filter expression.
    pub fn lte(field: Field, value: impl Into<FieldValue>) -> Expr {
        Expr::field(field, FieldOp::Lte, value.into())
    }

    /// Creates a string prefix filter expression.
    pub fn starts_with(field: Field, value: impl Into<FieldValue>) -> Expr {
        Expr::field(field, FieldOp::StartsWith, value.into())
    }

    /// Creates a substring filter expression.
    pub fn contains(field: Field, value: impl Into<FieldValue>) -> Expr {
        Expr::field(field, FieldOp::Contains, value.into())
    }

    /// Creates a logical AND filter expression.
    pub fn and(exprs: impl IntoIterator<Item = Expr>) -> Expr {
        Expr::And(exprs.into_iter().collect())
    }

    /// Creates a logical OR filter expression.
    pub fn or(exprs: impl IntoIterator<Item = Expr>) -> Expr {
        Expr::Or(exprs.into_iter().collect())
    }
}

/// A multi-criteria search request.
///
/// Every field is optional; a `None` criterion constrains nothing, so a
/// request with no fields set matches every stored document.
///
/// # Criterion semantics
///
/// - `title_prefixes` - the title must start with **any** of the prefixes.
/// - `contains_contents` - the body must contain **all** of the substrings.
/// - `author_ids` - the author id must equal **any** of the ids.
/// - `created_from` / `created_to` - inclusive timestamp bounds.
///
/// A present-but-empty `title_prefixes` or `author_ids` matches no document,
/// while a present-but-empty `contains_contents` matches every document.
/// This asymmetry is part of the repository contract; callers that want
/// empty sets treated as absent can use [`SearchRequest::normalized`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Title prefixes, OR-matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_prefixes: Option<Vec<String>>,
    /// Body substrings, AND-matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_contents: Option<Vec<String>>,
    /// Author identifiers, OR-matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_ids: Option<Vec<String>>,
    /// Inclusive lower bound on the creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on the creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_to: Option<DateTime<Utc>>,
}

impl SearchRequest {
    /// Creates a request with no criteria set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new request builder for fluent construction.
    pub fn builder() -> SearchRequestBuilder {
        SearchRequestBuilder::new()
    }

    /// Compiles this request into a filter expression.
    ///
    /// Returns `None` when no criterion is set, in which case every document
    /// matches. Timestamp clauses come first; clause order has no observable
    /// effect on the result.
    ///
    /// The empty-set asymmetry described on [`SearchRequest`] falls out of
    /// the compilation: prefix and author criteria become `Or` nodes (empty
    /// `Or` matches nothing) while content criteria become an `And` node
    /// (empty `And` matches everything).
    pub fn to_expr(&self) -> Option<Expr> {
        let mut clauses = Vec::new();

        if let Some(from) = self.created_from {
            clauses.push(Filter::gte(Field::Created, from));
        }

        if let Some(to) = self.created_to {
            clauses.push(Filter::lte(Field::Created, to));
        }

        if let Some(prefixes) = &self.title_prefixes {
            clauses.push(Filter::or(
                prefixes
                    .iter()
                    .map(|prefix| Filter::starts_with(Field::Title, prefix.as_str())),
            ));
        }

        if let Some(ids) = &self.author_ids {
            clauses.push(Filter::or(
                ids.iter()
                    .map(|id| Filter::eq(Field::AuthorId, id.as_str())),
            ));
        }

        if let Some(needles) = &self.contains_contents {
            clauses.push(Filter::and(
                needles
                    .iter()
                    .map(|needle| Filter::contains(Field::Content, needle.as_str())),
            ));
        }

        if clauses.is_empty() {
            None
        } else {
            Some(Expr::And(clauses))
        }
    }

    /// Returns a copy of this request with empty criterion sets demoted to
    /// absent, so that an empty set constrains nothing instead of following
    /// the asymmetric reference semantics.
    pub fn normalized(&self) -> Self {
        fn demote(set: &Option<Vec<String>>) -> Option<Vec<String>> {
            set.as_ref().filter(|v| !v.is_empty()).cloned()
        }

        Self {
            title_prefixes: demote(&self.title_prefixes),
            contains_contents: demote(&self.contains_contents),
            author_ids: demote(&self.author_ids),
            created_from: self.created_from,
            created_to: self.created_to,
        }
    }
}

/// Builder for [`SearchRequest`] values.
#[derive(Debug, Clone, Default)]
pub struct SearchRequestBuilder {
    request: SearchRequest,
}

impl SearchRequestBuilder {
    /// Creates a new request builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title prefixes criterion.
    pub fn title_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.title_prefixes = Some(prefixes.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the content substrings criterion.
    pub fn contains_contents<I, S>(mut self, needles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.contains_contents = Some(needles.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the author identifiers criterion.
    pub fn author_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.author_ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the inclusive lower bound on the creation timestamp.
    pub fn created_from(mut self, from: DateTime<Utc>) -> Self {
        self.request.created_from = Some(from);
        self
    }

    /// Sets the inclusive upper bound on the creation timestamp.
    pub fn created_to(mut self, to: DateTime<Utc>) -> Self {
        self.request.created_to = Some(to);
        self
    }

    /// Builds and returns the final request.
    pub fn build(self) -> SearchRequest {
        self.request
    }
}

/// Visitor trait backends implement to interpret filter expressions.
///
/// Evaluation over the closed document schema is total, so visit methods
/// return `Self::Output` directly.
pub trait QueryVisitor {
    type Output;

    fn visit_and(&mut self, exprs: &[Expr]) -> Self::Output;
    fn visit_or(&mut self, exprs: &[Expr]) -> Self::Output;
    fn visit_field(&mut self, field: Field, op: &FieldOp, value: &FieldValue) -> Self::Output;

    fn visit_expr(&mut self, expr: &Expr) -> Self::Output {
        match expr {
            Expr::And(exprs) => self.visit_and(exprs),
            Expr::Or(exprs) => self.visit_or(exprs),
            Expr::Field { field, op, value } => self.visit_field(*field, op, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_request_compiles_to_none() {
        assert_eq!(SearchRequest::new().to_expr(), None);
    }

    #[test]
    fn title_prefixes_compile_to_or() {
        let request = SearchRequest::builder()
            .title_prefixes(["Draft", "Final"])
            .build();

        let expr = request.to_expr().unwrap();
        assert_eq!(
            expr,
            Expr::And(vec![Expr::Or(vec![
                Filter::starts_with(Field::Title, "Draft"),
                Filter::starts_with(Field::Title, "Final"),
            ])])
        );
    }

    #[test]
    fn contains_contents_compile_to_and() {
        let request = SearchRequest::builder()
            .contains_contents(["foo", "bar"])
            .build();

        let expr = request.to_expr().unwrap();
        assert_eq!(
            expr,
            Expr::And(vec![Expr::And(vec![
                Filter::contains(Field::Content, "foo"),
                Filter::contains(Field::Content, "bar"),
            ])])
        );
    }

    #[test]
    fn timestamp_clauses_come_first() {
        let now = Utc::now();
        let request = SearchRequest::builder()
            .title_prefixes(["x"])
            .created_from(now)
            .created_to(now)
            .build();

        let Some(Expr::And(clauses)) = request.to_expr() else {
            panic!("expected a conjunction");
        };
        assert_eq!(clauses[0], Filter::gte(Field::Created, now));
        assert_eq!(clauses[1], Filter::lte(Field::Created, now));
    }

    #[test]
    fn empty_sets_keep_their_identities() {
        let request = SearchRequest {
            title_prefixes: Some(vec![]),
            contains_contents: Some(vec![]),
            author_ids: Some(vec![]),
            ..SearchRequest::default()
        };

        let Some(Expr::And(clauses)) = request.to_expr() else {
            panic!("expected a conjunction");
        };
        assert_eq!(
            clauses,
            vec![Expr::Or(vec![]), Expr::Or(vec![]), Expr::And(vec![])]
        );
    }

    #[test]
    fn normalized_demotes_empty_sets_only() {
        let request = SearchRequest {
            title_prefixes: Some(vec![]),
            contains_contents: Some(vec!["keep".to_string()]),
            author_ids: Some(vec![]),
            created_from: Some(Utc::now()),
            ..SearchRequest::default()
        };

        let normalized = request.normalized();
        assert_eq!(normalized.title_prefixes, None);
        assert_eq!(normalized.author_ids, None);
        assert_eq!(normalized.contains_contents, Some(vec!["keep".to_string()]));
        assert_eq!(normalized.created_from, request.created_from);
    }

    #[test]
    fn expr_and_or_chaining_flattens() {
        let a = Filter::eq(Field::AuthorId, "a");
        let b = Filter::eq(Field::AuthorId, "b");
        let c = Filter::eq(Field::AuthorId, "c");

        let chained = a.clone().and(b.clone()).and(c.clone());
        assert_eq!(chained, Expr::And(vec![a.clone(), b.clone(), c.clone()]));

        let chained = a.clone().or(b.clone()).or(c.clone());
        assert_eq!(chained, Expr::Or(vec![a, b, c]));
    }
}
