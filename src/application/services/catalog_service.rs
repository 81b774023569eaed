//! Catalog Service
//!
//! The public surface of the catalog layer: five read operations built on
//! the course view-model builder, plus the two mutations (create-course,
//! enroll-user). Each operation is one independent request/response
//! exchange with the persistence layer; results are internally consistent
//! per call but unordered across concurrent calls.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::{
    Course, CourseDetail, CourseRepository, EnrolledCourse, EnrollmentOutcome,
    EnrollmentRepository,
};
use crate::domain::records::{CourseRecord, NewCourseRecord};
use crate::domain::services::course_builder;
use crate::shared::error::AppError;
use crate::shared::snowflake::SnowflakeGenerator;

/// Catalog service trait
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// All published courses, newest first (summary views).
    async fn list_published(&self) -> Result<Vec<Course>, CatalogError>;

    /// Published courses in a category; unknown categories yield an empty
    /// list.
    async fn list_by_category(&self, category: &str) -> Result<Vec<Course>, CatalogError>;

    /// Published courses flagged as trending.
    async fn list_trending(&self) -> Result<Vec<Course>, CatalogError>;

    /// One fully-joined course by id.
    async fn get_by_id(&self, course_id: i64) -> Result<CourseDetail, CatalogError>;

    /// Create a course (unpublished) and return its new id.
    async fn create(
        &self,
        instructor_id: i64,
        request: CreateCourseDto,
    ) -> Result<i64, CatalogError>;

    /// Enroll a user in a course. Idempotent: repeating the same pair is
    /// success, not an error.
    async fn enroll(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<EnrollmentOutcome, CatalogError>;

    /// The user's enrolled courses, annotated with progress.
    async fn list_for_user(&self, user_id: i64) -> Result<Vec<EnrolledCourse>, CatalogError>;
}

/// Create course request
#[derive(Debug, Clone, Default)]
pub struct CreateCourseDto {
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub category: Option<String>,
    pub level: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<String>,
}

/// Catalog service errors
///
/// Four outcomes callers can tell apart: not-found, malformed stored
/// record, transient storage failure, and input validation. A storage
/// failure never masquerades as an empty catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Course not found")]
    NotFound,

    #[error("Malformed course record: {0}")]
    Malformed(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Storage failure: {0}")]
    Storage(String),
}

impl From<AppError> for CatalogError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::NotFound(_) => Self::NotFound,
            AppError::MalformedRecord(msg) => Self::Malformed(msg),
            AppError::Validation(msg) => Self::Validation(msg),
            e => Self::Storage(e.to_string()),
        }
    }
}

/// CatalogService implementation
pub struct CatalogServiceImpl<C, E>
where
    C: CourseRepository,
    E: EnrollmentRepository,
{
    courses: Arc<C>,
    enrollments: Arc<E>,
    id_generator: Arc<SnowflakeGenerator>,
}

impl<C, E> CatalogServiceImpl<C, E>
where
    C: CourseRepository,
    E: EnrollmentRepository,
{
    pub fn new(courses: Arc<C>, enrollments: Arc<E>, id_generator: Arc<SnowflakeGenerator>) -> Self {
        Self {
            courses,
            enrollments,
            id_generator,
        }
    }

    /// Build summaries for a listing, excluding malformed records.
    ///
    /// A single bad row must not fail the whole listing; it is skipped
    /// under a warning instead, which keeps the exclusion observable.
    fn build_summaries(records: &[CourseRecord]) -> Vec<Course> {
        records
            .iter()
            .filter_map(|record| match course_builder::build_summary(record) {
                Ok(course) => Some(course),
                Err(e) => {
                    tracing::warn!(
                        course_id = record.id,
                        error = %e,
                        "Excluding malformed course record from listing"
                    );
                    None
                }
            })
            .collect()
    }
}

#[async_trait]
impl<C, E> CatalogService for CatalogServiceImpl<C, E>
where
    C: CourseRepository + 'static,
    E: EnrollmentRepository + 'static,
{
    async fn list_published(&self) -> Result<Vec<Course>, CatalogError> {
        let records = self.courses.list_published().await?;
        Ok(Self::build_summaries(&records))
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Course>, CatalogError> {
        let records = self.courses.list_by_category(category).await?;
        Ok(Self::build_summaries(&records))
    }

    async fn list_trending(&self) -> Result<Vec<Course>, CatalogError> {
        let records = self.courses.list_trending().await?;
        Ok(Self::build_summaries(&records))
    }

    async fn get_by_id(&self, course_id: i64) -> Result<CourseDetail, CatalogError> {
        let record = self
            .courses
            .find_detail_by_id(course_id)
            .await?
            .ok_or(CatalogError::NotFound)?;

        // A malformed stored row fails closed: the caller gets the
        // distinct malformed outcome, never a partially-built course.
        Ok(course_builder::build_detail(&record)?)
    }

    async fn create(
        &self,
        instructor_id: i64,
        request: CreateCourseDto,
    ) -> Result<i64, CatalogError> {
        // Required-scalar presence is the only validation at this layer.
        let title = request.title.trim();
        if title.is_empty() {
            return Err(CatalogError::Validation("title is required".into()));
        }

        let record = NewCourseRecord {
            id: self.id_generator.generate(),
            title: title.to_string(),
            description: request.description,
            thumbnail_url: request.thumbnail_url,
            category: request.category,
            level: request.level,
            price: request.price,
            duration: request.duration,
            instructor_id,
        };

        let course_id = self.courses.insert(&record).await?;

        tracing::info!(course_id, instructor_id, "Course created (unpublished)");

        Ok(course_id)
    }

    async fn enroll(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<EnrollmentOutcome, CatalogError> {
        let outcome = self.enrollments.insert(user_id, course_id).await?;

        if outcome == EnrollmentOutcome::AlreadyEnrolled {
            tracing::debug!(user_id, course_id, "Enrollment already present");
        }

        Ok(outcome)
    }

    async fn list_for_user(&self, user_id: i64) -> Result<Vec<EnrolledCourse>, CatalogError> {
        let rows = self.enrollments.list_for_user(user_id).await?;

        let mut courses = Vec::with_capacity(rows.len());
        for row in rows {
            // Drop policy for rows whose course no longer resolves:
            // tolerated, but logged so data cleanup can find them.
            let Some(course) = row.course.as_ref() else {
                tracing::warn!(
                    user_id,
                    course_id = row.course_id,
                    "Dropping enrollment whose course row is missing"
                );
                continue;
            };

            match course_builder::build_enrolled(course, row.progress, row.last_accessed_at) {
                Ok(enrolled) => courses.push(enrolled),
                Err(e) => {
                    tracing::warn!(
                        user_id,
                        course_id = row.course_id,
                        error = %e,
                        "Dropping enrollment whose course record is malformed"
                    );
                }
            }
        }

        Ok(courses)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::eq;

    use crate::domain::records::{CourseDetailRecord, EnrollmentRecord};

    use super::*;

    mock! {
        pub Courses {}

        #[async_trait]
        impl CourseRepository for Courses {
            async fn list_published(&self) -> Result<Vec<CourseRecord>, AppError>;
            async fn list_by_category(&self, category: &str) -> Result<Vec<CourseRecord>, AppError>;
            async fn list_trending(&self) -> Result<Vec<CourseRecord>, AppError>;
            async fn find_detail_by_id(&self, id: i64) -> Result<Option<CourseDetailRecord>, AppError>;
            async fn insert(&self, course: &NewCourseRecord) -> Result<i64, AppError>;
        }
    }

    mock! {
        pub Enrollments {}

        #[async_trait]
        impl EnrollmentRepository for Enrollments {
            async fn insert(&self, user_id: i64, course_id: i64) -> Result<EnrollmentOutcome, AppError>;
            async fn list_for_user(&self, user_id: i64) -> Result<Vec<EnrollmentRecord>, AppError>;
        }
    }

    fn service(
        courses: MockCourses,
        enrollments: MockEnrollments,
    ) -> CatalogServiceImpl<MockCourses, MockEnrollments> {
        CatalogServiceImpl::new(
            Arc::new(courses),
            Arc::new(enrollments),
            Arc::new(SnowflakeGenerator::new(1)),
        )
    }

    fn titled_record(id: i64, title: &str) -> CourseRecord {
        CourseRecord {
            id,
            title: Some(title.to_string()),
            ..CourseRecord::default()
        }
    }

    #[tokio::test]
    async fn test_get_by_id_missing_row_is_not_found() {
        let mut courses = MockCourses::new();
        courses
            .expect_find_detail_by_id()
            .with(eq(404))
            .returning(|_| Ok(None));

        let result = service(courses, MockEnrollments::new()).get_by_id(404).await;

        assert!(matches!(result, Err(CatalogError::NotFound)));
    }

    #[tokio::test]
    async fn test_get_by_id_storage_failure_is_distinct_from_not_found() {
        let mut courses = MockCourses::new();
        courses
            .expect_find_detail_by_id()
            .returning(|_| Err(AppError::Database(sqlx::Error::PoolTimedOut)));

        let result = service(courses, MockEnrollments::new()).get_by_id(1).await;

        assert!(matches!(result, Err(CatalogError::Storage(_))));
    }

    #[tokio::test]
    async fn test_get_by_id_malformed_row_fails_closed() {
        let mut courses = MockCourses::new();
        courses.expect_find_detail_by_id().returning(|id| {
            Ok(Some(CourseDetailRecord {
                course: CourseRecord {
                    id,
                    title: None,
                    ..CourseRecord::default()
                },
                ..CourseDetailRecord::default()
            }))
        });

        let result = service(courses, MockEnrollments::new()).get_by_id(1).await;

        assert!(matches!(result, Err(CatalogError::Malformed(_))));
    }

    #[tokio::test]
    async fn test_listing_excludes_malformed_records() {
        let mut courses = MockCourses::new();
        courses.expect_list_published().returning(|| {
            Ok(vec![
                titled_record(1, "Good"),
                CourseRecord {
                    id: 2,
                    title: None,
                    ..CourseRecord::default()
                },
                titled_record(3, "Also good"),
            ])
        });

        let listed = service(courses, MockEnrollments::new())
            .list_published()
            .await
            .unwrap();

        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].title, "Good");
        assert_eq!(listed[1].title, "Also good");
    }

    #[tokio::test]
    async fn test_listing_storage_failure_is_not_an_empty_catalog() {
        let mut courses = MockCourses::new();
        courses
            .expect_list_trending()
            .returning(|| Err(AppError::Database(sqlx::Error::PoolTimedOut)));

        let result = service(courses, MockEnrollments::new()).list_trending().await;

        assert!(matches!(result, Err(CatalogError::Storage(_))));
    }

    #[tokio::test]
    async fn test_create_requires_title() {
        let result = service(MockCourses::new(), MockEnrollments::new())
            .create(42, CreateCourseDto::default())
            .await;

        assert!(matches!(result, Err(CatalogError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_inserts_trimmed_title_and_instructor() {
        let mut courses = MockCourses::new();
        courses
            .expect_insert()
            .withf(|record: &NewCourseRecord| {
                record.title == "New Course" && record.instructor_id == 42 && record.id != 0
            })
            .returning(|record| Ok(record.id));

        let dto = CreateCourseDto {
            title: "  New Course  ".to_string(),
            ..CreateCourseDto::default()
        };

        let id = service(courses, MockEnrollments::new())
            .create(42, dto)
            .await
            .unwrap();

        assert!(id > 0);
    }

    #[tokio::test]
    async fn test_enroll_passes_through_already_enrolled_as_success() {
        let mut enrollments = MockEnrollments::new();
        enrollments
            .expect_insert()
            .with(eq(7), eq(101))
            .returning(|_, _| Ok(EnrollmentOutcome::AlreadyEnrolled));

        let outcome = service(MockCourses::new(), enrollments)
            .enroll(7, 101)
            .await
            .unwrap();

        assert_eq!(outcome, EnrollmentOutcome::AlreadyEnrolled);
    }

    #[tokio::test]
    async fn test_list_for_user_drops_unresolvable_courses() {
        let mut enrollments = MockEnrollments::new();
        enrollments.expect_list_for_user().returning(|user_id| {
            Ok(vec![
                EnrollmentRecord {
                    user_id,
                    course_id: 1,
                    progress: 80,
                    last_accessed_at: None,
                    enrolled_at: chrono::Utc::now(),
                    course: Some(titled_record(1, "Kept")),
                },
                EnrollmentRecord {
                    user_id,
                    course_id: 2,
                    progress: 10,
                    last_accessed_at: None,
                    enrolled_at: chrono::Utc::now(),
                    course: None,
                },
            ])
        });

        let listed = service(MockCourses::new(), enrollments)
            .list_for_user(7)
            .await
            .unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].course.title, "Kept");
        assert_eq!(listed[0].progress, 80);
    }
}
