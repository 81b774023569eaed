//! Instructor view value.

use serde::Serialize;

/// Resolved instructor identity attached to every course view.
///
/// `name` is never empty: when the underlying profile has no usable name
/// the literal fallback "Instructor" is used.
///
/// The three aggregate counts are not computed by any query in this layer;
/// they read as zero until a real aggregation lands. Known limitation, kept
/// deliberately rather than guessed at.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Instructor {
    /// Profile id when a profile row was joined, else the course's raw
    /// instructor reference, else empty.
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub title: String,
    pub courses_count: u32,
    pub students_count: u32,
    pub reviews_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instructor_serializes_all_counts() {
        let instructor = Instructor {
            id: "42".to_string(),
            name: "Ada Lovelace".to_string(),
            avatar: String::new(),
            title: "Staff Engineer".to_string(),
            courses_count: 0,
            students_count: 0,
            reviews_count: 0,
        };

        let serialized = serde_json::to_string(&instructor).expect("Failed to serialize");

        assert!(serialized.contains("\"courses_count\":0"));
        assert!(serialized.contains("\"students_count\":0"));
        assert!(serialized.contains("\"reviews_count\":0"));
    }
}
