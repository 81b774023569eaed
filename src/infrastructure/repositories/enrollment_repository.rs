//! Enrollment Repository Implementation
//!
//! PostgreSQL implementation of the EnrollmentRepository trait. The
//! (user_id, course_id) primary key is what makes enrollment idempotent:
//! a uniqueness violation on insert is folded into the already-enrolled
//! outcome instead of surfacing as an error.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entities::{EnrollmentOutcome, EnrollmentRepository};
use crate::domain::records::{CourseRecord, EnrollmentRecord, InstructorProfileRecord};
use crate::shared::error::AppError;

/// Database row for an enrollment with its LEFT JOINed course and
/// instructor profile. Course columns are all nullable here: the course
/// row may no longer exist.
#[derive(Debug, sqlx::FromRow)]
struct EnrollmentRow {
    user_id: i64,
    course_id: i64,
    progress: i32,
    last_accessed_at: Option<DateTime<Utc>>,
    enrolled_at: DateTime<Utc>,
    joined_course_id: Option<i64>,
    title: Option<String>,
    description: Option<String>,
    thumbnail_url: Option<String>,
    category: Option<String>,
    level: Option<String>,
    price: Option<f64>,
    duration: Option<String>,
    instructor_id: Option<i64>,
    is_trending: Option<bool>,
    updated_at: Option<DateTime<Utc>>,
    profile_id: Option<i64>,
    profile_first_name: Option<String>,
    profile_last_name: Option<String>,
    profile_title: Option<String>,
    profile_avatar_url: Option<String>,
}

impl EnrollmentRow {
    /// Convert database row to the raw record shape. The joined course is
    /// only materialized when the course row still exists.
    fn into_record(self) -> EnrollmentRecord {
        let course = match (self.joined_course_id, self.updated_at) {
            (Some(id), Some(updated_at)) => Some(CourseRecord {
                id,
                title: self.title,
                description: self.description,
                thumbnail_url: self.thumbnail_url,
                category: self.category,
                level: self.level,
                price: self.price,
                duration: self.duration,
                instructor_id: self.instructor_id,
                is_trending: self.is_trending.unwrap_or(false),
                updated_at,
                instructor: self.profile_id.map(|profile_id| InstructorProfileRecord {
                    id: profile_id,
                    first_name: self.profile_first_name,
                    last_name: self.profile_last_name,
                    title: self.profile_title,
                    avatar_url: self.profile_avatar_url,
                }),
            }),
            _ => None,
        };

        EnrollmentRecord {
            user_id: self.user_id,
            course_id: self.course_id,
            progress: self.progress,
            last_accessed_at: self.last_accessed_at,
            enrolled_at: self.enrolled_at,
            course,
        }
    }
}

/// PostgreSQL enrollment repository implementation.
#[derive(Clone)]
pub struct PgEnrollmentRepository {
    pool: PgPool,
}

impl PgEnrollmentRepository {
    /// Create a new PgEnrollmentRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EnrollmentRepository for PgEnrollmentRepository {
    /// Insert an enrollment row.
    ///
    /// Two near-simultaneous calls for the same pair race here; the
    /// primary key decides the winner and the loser's uniqueness violation
    /// is reported as `AlreadyEnrolled`, the same success shape.
    async fn insert(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<EnrollmentOutcome, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO enrollments (user_id, course_id)
            VALUES ($1, $2)
            "#,
        )
        .bind(user_id)
        .bind(course_id)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(EnrollmentOutcome::Enrolled),
            Err(e) => match &e {
                sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                    Ok(EnrollmentOutcome::AlreadyEnrolled)
                }
                _ => Err(AppError::Database(e)),
            },
        }
    }

    /// All enrollment rows for a user, newest first, with the joined
    /// course when it still resolves.
    async fn list_for_user(&self, user_id: i64) -> Result<Vec<EnrollmentRecord>, AppError> {
        let rows = sqlx::query_as::<_, EnrollmentRow>(
            r#"
            SELECT e.user_id, e.course_id, e.progress, e.last_accessed_at,
                   e.enrolled_at,
                   c.id AS joined_course_id, c.title, c.description,
                   c.thumbnail_url, c.category, c.level, c.price, c.duration,
                   c.instructor_id, c.is_trending, c.updated_at,
                   p.id AS profile_id,
                   p.first_name AS profile_first_name,
                   p.last_name AS profile_last_name,
                   p.title AS profile_title,
                   p.avatar_url AS profile_avatar_url
            FROM enrollments e
            LEFT JOIN courses c ON e.course_id = c.id
            LEFT JOIN instructor_profiles p ON c.instructor_id = p.id
            WHERE e.user_id = $1
            ORDER BY e.enrolled_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(EnrollmentRow::into_record).collect())
    }
}
