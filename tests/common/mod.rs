//! Common Test Utilities
//!
//! In-memory repository implementations and fixtures for exercising the
//! catalog service without a database. The in-memory stores emulate the
//! storage contracts the Pg implementations provide: published/category/
//! trending filtering, newest-first ordering, the enrollment uniqueness
//! constraint, and the LEFT JOIN that may fail to resolve a course.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use catalog_server::application::services::CatalogServiceImpl;
use catalog_server::domain::entities::{
    CourseRepository, EnrollmentOutcome, EnrollmentRepository,
};
use catalog_server::domain::records::{
    CourseDetailRecord, CourseRecord, EnrollmentRecord, NewCourseRecord,
};
use catalog_server::shared::error::AppError;
use catalog_server::shared::snowflake::SnowflakeGenerator;

struct StoredCourse {
    detail: CourseDetailRecord,
    is_published: bool,
}

/// In-memory course store implementing the CourseRepository contract.
#[derive(Default)]
pub struct InMemoryCourseRepository {
    courses: Mutex<Vec<StoredCourse>>,
}

impl InMemoryCourseRepository {
    /// Seed a published course with its joined sub-records.
    pub fn add_published(&self, detail: CourseDetailRecord) {
        self.courses.lock().unwrap().push(StoredCourse {
            detail,
            is_published: true,
        });
    }

    /// Look up the summary record for a course id, like the enrollment
    /// listing's LEFT JOIN would.
    pub fn get_record(&self, course_id: i64) -> Option<CourseRecord> {
        self.courses
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.detail.course.id == course_id)
            .map(|c| c.detail.course.clone())
    }

    fn list_where<F>(&self, predicate: F) -> Vec<CourseRecord>
    where
        F: Fn(&StoredCourse) -> bool,
    {
        let mut records: Vec<CourseRecord> = self
            .courses
            .lock()
            .unwrap()
            .iter()
            .filter(|c| predicate(c))
            .map(|c| c.detail.course.clone())
            .collect();
        records.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        records
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn list_published(&self) -> Result<Vec<CourseRecord>, AppError> {
        Ok(self.list_where(|c| c.is_published))
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<CourseRecord>, AppError> {
        Ok(self.list_where(|c| {
            c.is_published && c.detail.course.category.as_deref() == Some(category)
        }))
    }

    async fn list_trending(&self) -> Result<Vec<CourseRecord>, AppError> {
        Ok(self.list_where(|c| c.is_published && c.detail.course.is_trending))
    }

    async fn find_detail_by_id(&self, id: i64) -> Result<Option<CourseDetailRecord>, AppError> {
        Ok(self
            .courses
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.detail.course.id == id)
            .map(|c| c.detail.clone()))
    }

    async fn insert(&self, course: &NewCourseRecord) -> Result<i64, AppError> {
        let record = CourseRecord {
            id: course.id,
            title: Some(course.title.clone()),
            description: course.description.clone(),
            thumbnail_url: course.thumbnail_url.clone(),
            category: course.category.clone(),
            level: course.level.clone(),
            price: course.price,
            duration: course.duration.clone(),
            instructor_id: Some(course.instructor_id),
            is_trending: false,
            updated_at: Utc::now(),
            instructor: None,
        };

        self.courses.lock().unwrap().push(StoredCourse {
            detail: CourseDetailRecord {
                course: record,
                ..CourseDetailRecord::default()
            },
            is_published: false,
        });

        Ok(course.id)
    }
}

struct StoredEnrollment {
    user_id: i64,
    course_id: i64,
    progress: i32,
    last_accessed_at: Option<DateTime<Utc>>,
    enrolled_at: DateTime<Utc>,
}

/// In-memory enrollment store with a (user, course) uniqueness constraint.
pub struct InMemoryEnrollmentRepository {
    courses: Arc<InMemoryCourseRepository>,
    rows: Mutex<Vec<StoredEnrollment>>,
}

impl InMemoryEnrollmentRepository {
    pub fn new(courses: Arc<InMemoryCourseRepository>) -> Self {
        Self {
            courses,
            rows: Mutex::new(Vec::new()),
        }
    }

    /// Seed an enrollment row directly, bypassing the insert path.
    pub fn add_enrollment(
        &self,
        user_id: i64,
        course_id: i64,
        progress: i32,
        last_accessed_at: Option<DateTime<Utc>>,
    ) {
        self.rows.lock().unwrap().push(StoredEnrollment {
            user_id,
            course_id,
            progress,
            last_accessed_at,
            enrolled_at: Utc::now(),
        });
    }

    /// Number of stored rows for a (user, course) pair.
    pub fn count_rows(&self, user_id: i64, course_id: i64) -> usize {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == user_id && r.course_id == course_id)
            .count()
    }
}

#[async_trait]
impl EnrollmentRepository for InMemoryEnrollmentRepository {
    async fn insert(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<EnrollmentOutcome, AppError> {
        let mut rows = self.rows.lock().unwrap();

        let exists = rows
            .iter()
            .any(|r| r.user_id == user_id && r.course_id == course_id);
        if exists {
            return Ok(EnrollmentOutcome::AlreadyEnrolled);
        }

        rows.push(StoredEnrollment {
            user_id,
            course_id,
            progress: 0,
            last_accessed_at: None,
            enrolled_at: Utc::now(),
        });

        Ok(EnrollmentOutcome::Enrolled)
    }

    async fn list_for_user(&self, user_id: i64) -> Result<Vec<EnrollmentRecord>, AppError> {
        let mut records: Vec<EnrollmentRecord> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == user_id)
            .map(|r| EnrollmentRecord {
                user_id: r.user_id,
                course_id: r.course_id,
                progress: r.progress,
                last_accessed_at: r.last_accessed_at,
                enrolled_at: r.enrolled_at,
                course: self.courses.get_record(r.course_id),
            })
            .collect();
        records.sort_by(|a, b| b.enrolled_at.cmp(&a.enrolled_at));
        Ok(records)
    }
}

pub type TestCatalogService =
    CatalogServiceImpl<InMemoryCourseRepository, InMemoryEnrollmentRepository>;

/// Build a catalog service over fresh in-memory stores.
pub fn test_service() -> (
    TestCatalogService,
    Arc<InMemoryCourseRepository>,
    Arc<InMemoryEnrollmentRepository>,
) {
    let courses = Arc::new(InMemoryCourseRepository::default());
    let enrollments = Arc::new(InMemoryEnrollmentRepository::new(courses.clone()));
    let service = CatalogServiceImpl::new(
        courses.clone(),
        enrollments.clone(),
        Arc::new(SnowflakeGenerator::new(1)),
    );

    (service, courses, enrollments)
}

/// A published course record with the given scalars.
pub fn course_record(id: i64, title: &str, category: &str) -> CourseRecord {
    CourseRecord {
        id,
        title: Some(title.to_string()),
        description: Some(format!("About {}", title)),
        thumbnail_url: None,
        category: Some(category.to_string()),
        level: Some("Beginner".to_string()),
        price: Some(29.0),
        duration: Some("6h".to_string()),
        instructor_id: Some(500),
        is_trending: false,
        updated_at: Utc::now(),
        instructor: None,
    }
}

/// Wrap a course record as a detail record with no joined sub-records.
pub fn detail_record(course: CourseRecord) -> CourseDetailRecord {
    CourseDetailRecord {
        course,
        ..CourseDetailRecord::default()
    }
}
