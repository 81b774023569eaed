//! Curriculum view values: modules, lessons, and the lesson vocabulary.

use serde::Serialize;

/// Lesson type vocabulary matching the storage VARCHAR values.
///
/// Unknown storage values fold into `Other` rather than failing the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LessonKind {
    Video,
    Reading,
    Quiz,
    Assignment,
    #[default]
    Other,
}

impl LessonKind {
    /// Convert from database string representation.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "video" => Self::Video,
            "reading" => Self::Reading,
            "quiz" => Self::Quiz,
            "assignment" => Self::Assignment,
            _ => Self::Other,
        }
    }

    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Reading => "reading",
            Self::Quiz => "quiz",
            Self::Assignment => "assignment",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for LessonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single lesson within a module.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lesson {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: LessonKind,
    pub duration: String,
}

/// A module of the course curriculum.
///
/// `lessons` preserves storage order exactly; no sorting is applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseModule {
    pub id: i64,
    pub title: String,
    pub duration: String,
    pub lessons: Vec<Lesson>,
}

impl CourseModule {
    /// Number of lessons in this module.
    pub fn lesson_count(&self) -> u32 {
        self.lessons.len() as u32
    }
}
