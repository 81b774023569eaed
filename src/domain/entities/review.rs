//! Review view value.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A student review attached to the course detail view.
///
/// `reviewer_name` is resolved with the same fallback algorithm as
/// instructor names, with the literal "Student" when no name is stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    pub reviewer_name: String,
    pub reviewer_avatar: String,
    /// 1-5 as stored. Out-of-range values are a storage invariant this
    /// layer trusts rather than re-validates.
    pub rating: i32,
    pub comment: String,
    pub date: DateTime<Utc>,
}
