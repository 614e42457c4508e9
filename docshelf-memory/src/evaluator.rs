//! Filter expression evaluation for in-memory document matching.
//!
//! This module provides the evaluation engine for filter expressions,
//! applying a compiled [`Expr`] tree to one typed document at a time.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use docshelf_core::{
    document::Document,
    query::{Expr, Field, FieldOp, FieldValue, QueryVisitor},
};

/// Comparable view over a document field or a filter operand.
///
/// Values of different kinds never compare equal and have no ordering, so a
/// kind-mismatched comparison simply fails the predicate.
#[derive(Debug)]
pub(crate) enum Comparable<'a> {
    /// String value
    Str(&'a str),
    /// Timestamp value
    Time(DateTime<Utc>),
}

impl<'a> From<&'a FieldValue> for Comparable<'a> {
    fn from(value: &'a FieldValue) -> Self {
        match value {
            FieldValue::Str(s) => Comparable::Str(s),
            FieldValue::Time(t) => Comparable::Time(*t),
        }
    }
}

impl<'a> PartialEq for Comparable<'a> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Comparable::Str(a), Comparable::Str(b)) => a == b,
            (Comparable::Time(a), Comparable::Time(b)) => a == b,
            _ => false,
        }
    }
}

impl<'a> PartialOrd for Comparable<'a> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Comparable::Str(a), Comparable::Str(b)) => a.partial_cmp(b),
            (Comparable::Time(a), Comparable::Time(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

/// Evaluates filter expressions against a single document.
pub(crate) struct DocumentEvaluator<'a> {
    document: &'a Document,
}

impl<'a> DocumentEvaluator<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    pub fn evaluate(&mut self, expr: &Expr) -> bool {
        self.visit_expr(expr)
    }

    fn resolve(&self, field: Field) -> Comparable<'a> {
        match field {
            Field::Title => Comparable::Str(&self.document.title),
            Field::Content => Comparable::Str(&self.document.content),
            Field::AuthorId => Comparable::Str(&self.document.author.id),
            Field::Created => Comparable::Time(self.document.created),
        }
    }
}

impl<'a> QueryVisitor for DocumentEvaluator<'a> {
    type Output = bool;

    fn visit_and(&mut self, exprs: &[Expr]) -> Self::Output {
        exprs.iter().all(|expr| self.visit_expr(expr))
    }

    fn visit_or(&mut self, exprs: &[Expr]) -> Self::Output {
        exprs.iter().any(|expr| self.visit_expr(expr))
    }

    fn visit_field(&mut self, field: Field, op: &FieldOp, value: &FieldValue) -> Self::Output {
        let left = self.resolve(field);
        let right = Comparable::from(value);

        match op {
            FieldOp::Eq => left == right,
            FieldOp::Gte => matches!(
                left.partial_cmp(&right),
                Some(Ordering::Greater | Ordering::Equal)
            ),
            FieldOp::Lte => matches!(
                left.partial_cmp(&right),
                Some(Ordering::Less | Ordering::Equal)
            ),
            FieldOp::StartsWith => match (left, right) {
                (Comparable::Str(l), Comparable::Str(r)) => l.starts_with(r),
                _ => false,
            },
            FieldOp::Contains => match (left, right) {
                (Comparable::Str(l), Comparable::Str(r)) => l.contains(r),
                _ => false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use docshelf_core::{document::Author, query::Filter};

    fn document() -> Document {
        Document::with_id(
            "doc-1",
            "Quarterly Report",
            "Revenue was flat.",
            Author::new("alice", "Alice Liddell"),
            Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        )
    }

    fn eval(expr: &Expr) -> bool {
        let doc = document();
        DocumentEvaluator::new(&doc).evaluate(expr)
    }

    #[test]
    fn title_prefix_match() {
        assert!(eval(&Filter::starts_with(Field::Title, "Quarter")));
        assert!(!eval(&Filter::starts_with(Field::Title, "Annual")));
    }

    #[test]
    fn content_substring_match() {
        assert!(eval(&Filter::contains(Field::Content, "was flat")));
        assert!(!eval(&Filter::contains(Field::Content, "growth")));
    }

    #[test]
    fn author_id_exact_match() {
        assert!(eval(&Filter::eq(Field::AuthorId, "alice")));
        assert!(!eval(&Filter::eq(Field::AuthorId, "alic")));
    }

    #[test]
    fn created_bounds_are_inclusive() {
        let created = document().created;
        assert!(eval(&Filter::gte(Field::Created, created)));
        assert!(eval(&Filter::lte(Field::Created, created)));
        assert!(!eval(&Filter::gte(
            Field::Created,
            created + chrono::Duration::seconds(1)
        )));
        assert!(!eval(&Filter::lte(
            Field::Created,
            created - chrono::Duration::seconds(1)
        )));
    }

    #[test]
    fn kind_mismatch_never_matches() {
        assert!(!eval(&Filter::eq(Field::Created, "2024-06-01")));
        assert!(!eval(&Filter::starts_with(Field::Created, "2024")));
        assert!(!eval(&Filter::gte(Field::Title, Utc::now())));
    }

    #[test]
    fn empty_or_matches_nothing() {
        assert!(!eval(&Expr::Or(vec![])));
    }

    #[test]
    fn empty_and_matches_everything() {
        assert!(eval(&Expr::And(vec![])));
    }

    #[test]
    fn nested_expressions() {
        let expr = Filter::starts_with(Field::Title, "Quarterly")
            .and(Filter::eq(Field::AuthorId, "bob").or(Filter::eq(Field::AuthorId, "alice")));
        assert!(eval(&expr));
    }
}
