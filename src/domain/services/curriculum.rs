//! Curriculum assembly.
//!
//! Converts the flat list of module records (each carrying its nested
//! lesson records) into the ordered Module→Lesson tree. Ordering is a pure
//! pass-through of storage order; callers must not assume it is stable
//! across underlying storage reordering. No sorting, deduplication, or
//! grouping happens here.

use crate::domain::entities::{CourseModule, Lesson, LessonKind};
use crate::domain::records::{LessonRecord, ModuleRecord};
use crate::domain::services::normalize;

/// The assembled module tree plus the total lesson count.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Curriculum {
    pub modules: Vec<CourseModule>,
    pub total_lessons: u32,
}

/// Assemble the curriculum tree from module records.
pub fn assemble(records: &[ModuleRecord]) -> Curriculum {
    let modules: Vec<CourseModule> = records.iter().map(build_module).collect();
    let total_lessons = modules.iter().map(CourseModule::lesson_count).sum();

    Curriculum {
        modules,
        total_lessons,
    }
}

fn build_module(record: &ModuleRecord) -> CourseModule {
    CourseModule {
        id: record.id,
        title: normalize::text_or_empty(record.title.as_deref()),
        duration: normalize::text_or_empty(record.duration.as_deref()),
        lessons: record.lessons.iter().map(build_lesson).collect(),
    }
}

fn build_lesson(record: &LessonRecord) -> Lesson {
    Lesson {
        title: normalize::text_or_empty(record.title.as_deref()),
        kind: record
            .lesson_type
            .as_deref()
            .map(LessonKind::from_str)
            .unwrap_or_default(),
        duration: normalize::text_or_empty(record.duration.as_deref()),
    }
}
