use crate::models::{Application, Student, University};
use crate::services::catalog::StoreError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Catalog file contents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub students: Vec<Student>,
    #[serde(default)]
    pub universities: Vec<University>,
    #[serde(default)]
    pub applications: Vec<Application>,
}

/// In-memory catalog loaded once at startup
///
/// Universities keep their seed order, which is the tie-break order of the
/// ranking.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    students: HashMap<String, Student>,
    universities: Vec<University>,
    applications: Vec<Application>,
}

impl MemoryCatalog {
    pub fn new(seed: CatalogSeed) -> Self {
        let students = seed
            .students
            .into_iter()
            .map(|student| (student.id.clone(), student))
            .collect();

        Self {
            students,
            universities: seed.universities,
            applications: seed.applications,
        }
    }

    /// Load a JSON seed file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let seed: CatalogSeed = serde_json::from_str(&raw)?;

        tracing::info!(
            "Loaded catalog seed from {}: {} students, {} universities, {} applications",
            path.display(),
            seed.students.len(),
            seed.universities.len(),
            seed.applications.len()
        );

        Ok(Self::new(seed))
    }

    pub fn get_student(&self, student_id: &str) -> Result<Student, StoreError> {
        self.students
            .get(student_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("Student {}", student_id)))
    }

    pub fn list_universities(&self) -> Vec<University> {
        self.universities.clone()
    }

    pub fn get_university(&self, university_id: &str) -> Result<University, StoreError> {
        self.universities
            .iter()
            .find(|u| u.id == university_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("University {}", university_id)))
    }

    pub fn get_application(&self, student_id: &str, university_id: &str) -> Option<Application> {
        self.applications
            .iter()
            .find(|a| a.student_id == student_id && a.university_id == university_id)
            .cloned()
    }

    pub fn list_applications(&self, student_id: &str) -> Vec<Application> {
        self.applications
            .iter()
            .filter(|a| a.student_id == student_id)
            .cloned()
            .collect()
    }
}
