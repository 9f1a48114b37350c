use crate::models::{Application, Student, University};
use crate::services::memory::MemoryCatalog;
use crate::services::postgres::PostgresClient;
use thiserror::Error;

/// Errors that can occur when reading profiles, universities or applications
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Seed file error: {0}")]
    SeedError(#[from] std::io::Error),

    #[error("Invalid seed data: {0}")]
    InvalidSeed(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

/// Keyed lookup over the student, university and application records
///
/// The scoring core never touches a store; handlers fetch records here and
/// hand plain data to the matcher.
pub enum CatalogStore {
    Memory(MemoryCatalog),
    Postgres(PostgresClient),
}

impl CatalogStore {
    pub fn backend_name(&self) -> &'static str {
        match self {
            CatalogStore::Memory(_) => "memory",
            CatalogStore::Postgres(_) => "postgres",
        }
    }

    pub async fn get_student(&self, student_id: &str) -> Result<Student, StoreError> {
        match self {
            CatalogStore::Memory(store) => store.get_student(student_id),
            CatalogStore::Postgres(client) => client.get_student(student_id).await,
        }
    }

    pub async fn list_universities(&self) -> Result<Vec<University>, StoreError> {
        match self {
            CatalogStore::Memory(store) => Ok(store.list_universities()),
            CatalogStore::Postgres(client) => client.list_universities().await,
        }
    }

    pub async fn get_university(&self, university_id: &str) -> Result<University, StoreError> {
        match self {
            CatalogStore::Memory(store) => store.get_university(university_id),
            CatalogStore::Postgres(client) => client.get_university(university_id).await,
        }
    }

    /// Application of a student to a university, if one exists
    pub async fn get_application(
        &self,
        student_id: &str,
        university_id: &str,
    ) -> Result<Option<Application>, StoreError> {
        match self {
            CatalogStore::Memory(store) => Ok(store.get_application(student_id, university_id)),
            CatalogStore::Postgres(client) => client.get_application(student_id, university_id).await,
        }
    }

    /// All applications of a student
    pub async fn list_applications(&self, student_id: &str) -> Result<Vec<Application>, StoreError> {
        match self {
            CatalogStore::Memory(store) => Ok(store.list_applications(student_id)),
            CatalogStore::Postgres(client) => client.list_applications(student_id).await,
        }
    }

    pub async fn health_check(&self) -> Result<bool, StoreError> {
        match self {
            CatalogStore::Memory(_) => Ok(true),
            CatalogStore::Postgres(client) => client.health_check().await,
        }
    }
}

impl From<MemoryCatalog> for CatalogStore {
    fn from(store: MemoryCatalog) -> Self {
        CatalogStore::Memory(store)
    }
}

impl From<PostgresClient> for CatalogStore {
    fn from(client: PostgresClient) -> Self {
        CatalogStore::Postgres(client)
    }
}
