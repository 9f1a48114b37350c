use crate::models::{Application, CompetitionLevel, Student, University};
use crate::services::catalog::StoreError;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::time::Duration;

/// PostgreSQL-backed catalog
///
/// Holds the student profiles, the university catalog and per-application
/// marks overrides. Schema lives in `migrations/` and is applied on connect.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
        idle_timeout_secs: Option<u64>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            Duration::from_secs(acquire_timeout_secs.unwrap_or(5)),
            Duration::from_secs(idle_timeout_secs.unwrap_or(600)),
        )
        .await
    }

    pub async fn get_student(&self, student_id: &str) -> Result<Student, StoreError> {
        let query = r#"
            SELECT id, name, hsc_marks, unit, city
            FROM students
            WHERE id = $1
        "#;

        let row = sqlx::query(query)
            .bind(student_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("Student {}", student_id)))?;

        Ok(Student {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            hsc_marks: row.try_get("hsc_marks")?,
            unit: row.try_get("unit")?,
            city: row.try_get("city")?,
        })
    }

    /// Every university, in catalog order
    pub async fn list_universities(&self) -> Result<Vec<University>, StoreError> {
        let query = r#"
            SELECT id, name, city, acceptance_rate, competition_level,
                   application_fee, accepted_units, circular_text
            FROM universities
            ORDER BY position, id
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        let universities = rows
            .iter()
            .map(university_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!("Loaded {} universities from PostgreSQL", universities.len());

        Ok(universities)
    }

    pub async fn get_university(&self, university_id: &str) -> Result<University, StoreError> {
        let query = r#"
            SELECT id, name, city, acceptance_rate, competition_level,
                   application_fee, accepted_units, circular_text
            FROM universities
            WHERE id = $1
        "#;

        let row = sqlx::query(query)
            .bind(university_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("University {}", university_id)))?;

        Ok(university_from_row(&row)?)
    }

    pub async fn get_application(
        &self,
        student_id: &str,
        university_id: &str,
    ) -> Result<Option<Application>, StoreError> {
        let query = r#"
            SELECT id, student_id, university_id, status, marks_obtained, marks_required
            FROM applications
            WHERE student_id = $1 AND university_id = $2
            ORDER BY created_at DESC
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(student_id)
            .bind(university_id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(application_from_row).transpose().map_err(Into::into)
    }

    pub async fn list_applications(&self, student_id: &str) -> Result<Vec<Application>, StoreError> {
        let query = r#"
            SELECT id, student_id, university_id, status, marks_obtained, marks_required
            FROM applications
            WHERE student_id = $1
            ORDER BY created_at DESC
        "#;

        let rows = sqlx::query(query).bind(student_id).fetch_all(&self.pool).await?;

        let applications = rows
            .iter()
            .map(application_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!("Student {} has {} applications", student_id, applications.len());

        Ok(applications)
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

fn university_from_row(row: &PgRow) -> Result<University, sqlx::Error> {
    let competition_level: Option<String> = row.try_get("competition_level")?;
    let application_fee: Option<i32> = row.try_get("application_fee")?;

    Ok(University {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        city: row.try_get("city")?,
        acceptance_rate: row.try_get("acceptance_rate")?,
        competition_level: competition_level_from_column(competition_level),
        application_fee: application_fee.and_then(|fee| u32::try_from(fee).ok()),
        accepted_units: row.try_get("accepted_units")?,
        circular_text: row.try_get("circular_text")?,
    })
}

/// NULL and unknown strings both map to `Unspecified`, as in the JSON seed
fn competition_level_from_column(value: Option<String>) -> CompetitionLevel {
    value.map(CompetitionLevel::from).unwrap_or_default()
}

fn application_from_row(row: &PgRow) -> Result<Application, sqlx::Error> {
    Ok(Application {
        id: row.try_get("id")?,
        student_id: row.try_get("student_id")?,
        university_id: row.try_get("university_id")?,
        status: row.try_get("status")?,
        marks_obtained: row.try_get("marks_obtained")?,
        marks_required: row.try_get("marks_required")?,
    })
}
