//! Course Repository Implementation
//!
//! PostgreSQL implementation of the CourseRepository trait. Maps between
//! the database schema and the raw record shapes the domain builders
//! consume. Nullability of joined columns is preserved deliberately; the
//! builders own the defaulting rules.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entities::CourseRepository;
use crate::domain::records::{
    CourseDetailRecord, CourseRecord, InstructorProfileRecord, LessonRecord, ModuleRecord,
    NewCourseRecord, ReviewRecord, ReviewerRecord,
};
use crate::shared::error::AppError;

/// Shared select list for a course row with its LEFT JOINed instructor
/// profile.
const COURSE_SELECT: &str = r#"
    SELECT c.id, c.title, c.description, c.thumbnail_url, c.category,
           c.level, c.price, c.duration, c.instructor_id, c.is_trending,
           c.updated_at,
           p.id AS profile_id,
           p.first_name AS profile_first_name,
           p.last_name AS profile_last_name,
           p.title AS profile_title,
           p.avatar_url AS profile_avatar_url
    FROM courses c
    LEFT JOIN instructor_profiles p ON c.instructor_id = p.id
"#;

/// Database row for a course plus its optionally-joined instructor profile.
#[derive(Debug, sqlx::FromRow)]
struct CourseRow {
    id: i64,
    title: Option<String>,
    description: Option<String>,
    thumbnail_url: Option<String>,
    category: Option<String>,
    level: Option<String>,
    price: Option<f64>,
    duration: Option<String>,
    instructor_id: Option<i64>,
    is_trending: bool,
    updated_at: DateTime<Utc>,
    profile_id: Option<i64>,
    profile_first_name: Option<String>,
    profile_last_name: Option<String>,
    profile_title: Option<String>,
    profile_avatar_url: Option<String>,
}

impl CourseRow {
    /// Convert database row to the raw record shape. The profile is only
    /// materialized when the join found a row.
    fn into_record(self) -> CourseRecord {
        let instructor = self.profile_id.map(|id| InstructorProfileRecord {
            id,
            first_name: self.profile_first_name,
            last_name: self.profile_last_name,
            title: self.profile_title,
            avatar_url: self.profile_avatar_url,
        });

        CourseRecord {
            id: self.id,
            title: self.title,
            description: self.description,
            thumbnail_url: self.thumbnail_url,
            category: self.category,
            level: self.level,
            price: self.price,
            duration: self.duration,
            instructor_id: self.instructor_id,
            is_trending: self.is_trending,
            updated_at: self.updated_at,
            instructor,
        }
    }
}

/// Database row for a curriculum module.
#[derive(Debug, sqlx::FromRow)]
struct ModuleRow {
    id: i64,
    title: Option<String>,
    duration: Option<String>,
}

/// Database row for a lesson.
#[derive(Debug, sqlx::FromRow)]
struct LessonRow {
    title: Option<String>,
    lesson_type: Option<String>,
    duration: Option<String>,
}

/// Database row for a review with its inline reviewer snapshot.
#[derive(Debug, sqlx::FromRow)]
struct ReviewRow {
    rating: i32,
    comment: Option<String>,
    created_at: DateTime<Utc>,
    reviewer_first_name: Option<String>,
    reviewer_last_name: Option<String>,
    reviewer_avatar_url: Option<String>,
}

impl ReviewRow {
    fn into_record(self) -> ReviewRecord {
        let has_reviewer = self.reviewer_first_name.is_some()
            || self.reviewer_last_name.is_some()
            || self.reviewer_avatar_url.is_some();

        ReviewRecord {
            rating: self.rating,
            comment: self.comment,
            created_at: self.created_at,
            reviewer: has_reviewer.then(|| ReviewerRecord {
                first_name: self.reviewer_first_name,
                last_name: self.reviewer_last_name,
                avatar_url: self.reviewer_avatar_url,
            }),
        }
    }
}

/// PostgreSQL course repository implementation.
#[derive(Clone)]
pub struct PgCourseRepository {
    pool: PgPool,
}

impl PgCourseRepository {
    /// Create a new PgCourseRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Helper to load the lessons of one module, in storage order.
    async fn load_module_lessons(&self, module_id: i64) -> Result<Vec<LessonRecord>, AppError> {
        let rows = sqlx::query_as::<_, LessonRow>(
            r#"
            SELECT title, lesson_type, duration
            FROM lessons
            WHERE module_id = $1
            ORDER BY position ASC
            "#,
        )
        .bind(module_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| LessonRecord {
                title: row.title,
                lesson_type: row.lesson_type,
                duration: row.duration,
            })
            .collect())
    }

    /// Load the module tree for a course, lessons nested per module.
    async fn load_modules(&self, course_id: i64) -> Result<Vec<ModuleRecord>, AppError> {
        let rows = sqlx::query_as::<_, ModuleRow>(
            r#"
            SELECT id, title, duration
            FROM course_modules
            WHERE course_id = $1
            ORDER BY position ASC
            "#,
        )
        .bind(course_id)
        .fetch_all(&self.pool)
        .await?;

        let mut modules = Vec::with_capacity(rows.len());
        for row in rows {
            let lessons = self.load_module_lessons(row.id).await?;
            modules.push(ModuleRecord {
                id: row.id,
                title: row.title,
                duration: row.duration,
                lessons,
            });
        }

        Ok(modules)
    }

    /// Load reviews for a course, most recent first.
    async fn load_reviews(&self, course_id: i64) -> Result<Vec<ReviewRecord>, AppError> {
        let rows = sqlx::query_as::<_, ReviewRow>(
            r#"
            SELECT rating, comment, created_at,
                   reviewer_first_name, reviewer_last_name, reviewer_avatar_url
            FROM course_reviews
            WHERE course_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(course_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ReviewRow::into_record).collect())
    }

    /// Load a one-column joined collection (objectives, requirements).
    async fn load_text_column(
        &self,
        query: &str,
        course_id: i64,
    ) -> Result<Vec<String>, AppError> {
        let values = sqlx::query_scalar::<_, String>(query)
            .bind(course_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(values)
    }
}

#[async_trait]
impl CourseRepository for PgCourseRepository {
    /// All published courses, newest first.
    async fn list_published(&self) -> Result<Vec<CourseRecord>, AppError> {
        let rows = sqlx::query_as::<_, CourseRow>(&format!(
            "{COURSE_SELECT} WHERE c.is_published ORDER BY c.updated_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CourseRow::into_record).collect())
    }

    /// Published courses in one category. The filter runs in the query;
    /// an unknown category simply matches nothing.
    async fn list_by_category(&self, category: &str) -> Result<Vec<CourseRecord>, AppError> {
        let rows = sqlx::query_as::<_, CourseRow>(&format!(
            "{COURSE_SELECT} WHERE c.is_published AND c.category = $1 ORDER BY c.updated_at DESC"
        ))
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CourseRow::into_record).collect())
    }

    /// Published courses flagged as trending.
    async fn list_trending(&self) -> Result<Vec<CourseRecord>, AppError> {
        let rows = sqlx::query_as::<_, CourseRow>(&format!(
            "{COURSE_SELECT} WHERE c.is_published AND c.is_trending ORDER BY c.updated_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CourseRow::into_record).collect())
    }

    /// One course with all joined sub-records. No published filter: the
    /// detail read also serves freshly created (unpublished) courses.
    async fn find_detail_by_id(&self, id: i64) -> Result<Option<CourseDetailRecord>, AppError> {
        let row = sqlx::query_as::<_, CourseRow>(&format!("{COURSE_SELECT} WHERE c.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let course = row.into_record();
        let modules = self.load_modules(id).await?;
        let reviews = self.load_reviews(id).await?;
        let objectives = self
            .load_text_column(
                "SELECT objective FROM course_objectives WHERE course_id = $1 ORDER BY position ASC",
                id,
            )
            .await?;
        let requirements = self
            .load_text_column(
                "SELECT requirement FROM course_requirements WHERE course_id = $1 ORDER BY position ASC",
                id,
            )
            .await?;

        Ok(Some(CourseDetailRecord {
            course,
            objectives,
            requirements,
            modules,
            reviews,
        }))
    }

    /// Insert a new course row, unpublished and not trending.
    async fn insert(&self, course: &NewCourseRecord) -> Result<i64, AppError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO courses (id, title, description, thumbnail_url, category,
                                 level, price, duration, instructor_id,
                                 is_published, is_trending)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, FALSE, FALSE)
            RETURNING id
            "#,
        )
        .bind(course.id)
        .bind(&course.title)
        .bind(&course.description)
        .bind(&course.thumbnail_url)
        .bind(&course.category)
        .bind(&course.level)
        .bind(course.price)
        .bind(&course.duration)
        .bind(course.instructor_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                AppError::NotFound(format!(
                    "Instructor profile {} not found",
                    course.instructor_id
                ))
            }
            _ => AppError::Database(e),
        })?;

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests would go here, requiring a test database
}
