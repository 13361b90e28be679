//! Profile store capability and its implementations.
//!
//! The store is owned by another system and only read here. Two lookups are
//! needed: a student by id, and every job posting with a non-empty embedding.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::fs;
use tracing::debug;

use crate::error::{RecommendError, Result};
use crate::model::{JobPosting, StudentProfile};

/// File holding the exported `studentprofiles` collection.
pub const STUDENTS_FILE: &str = "studentprofiles.json";

/// File holding the exported `jobposts` collection.
pub const JOBS_FILE: &str = "jobposts.json";

/// Read-only access to student profiles and job postings.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Look up a student by id. `Ok(None)` means no such student.
    async fn find_student_by_id(&self, id: &str) -> Result<Option<StudentProfile>>;

    /// All job postings whose embedding is present and non-empty, in store
    /// order.
    async fn find_jobs_with_embedding(&self) -> Result<Vec<JobPosting>>;
}

/// Store backed by in-memory vectors.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    students: Vec<StudentProfile>,
    jobs: Vec<JobPosting>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_student(mut self, student: StudentProfile) -> Self {
        self.students.push(student);
        self
    }

    pub fn with_job(mut self, job: JobPosting) -> Self {
        self.jobs.push(job);
        self
    }
}

#[async_trait]
impl ProfileStore for InMemoryStore {
    async fn find_student_by_id(&self, id: &str) -> Result<Option<StudentProfile>> {
        Ok(self.students.iter().find(|s| s.id == id).cloned())
    }

    async fn find_jobs_with_embedding(&self) -> Result<Vec<JobPosting>> {
        Ok(self
            .jobs
            .iter()
            .filter(|job| job.has_embedding())
            .cloned()
            .collect())
    }
}

/// Store reading exported collections from a directory.
///
/// The directory holds [`STUDENTS_FILE`] and [`JOBS_FILE`], each a JSON array
/// of documents. Files are re-read on every lookup.
#[derive(Debug, Clone)]
pub struct JsonDocumentStore {
    root: PathBuf,
}

impl JsonDocumentStore {
    /// Open the store rooted at `root`, which must be an existing directory.
    pub async fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();

        let metadata = fs::metadata(&root)
            .await
            .map_err(|e| unavailable(&root, e))?;
        if !metadata.is_dir() {
            return Err(unavailable(&root, "not a directory"));
        }

        Ok(Self { root })
    }

    /// Read a collection as raw documents. Nothing is decoded into the typed
    /// model here, so a malformed document only matters once it is selected.
    async fn read_collection(&self, file: &str) -> Result<(PathBuf, Vec<Value>)> {
        let path = self.root.join(file);

        let content = fs::read_to_string(&path)
            .await
            .map_err(|e| unavailable(&path, e))?;

        let documents: Vec<Value> =
            serde_json::from_str(&content).map_err(|e| unavailable(&path, e))?;

        debug!(path = %path.display(), count = documents.len(), "read collection");
        Ok((path, documents))
    }
}

#[async_trait]
impl ProfileStore for JsonDocumentStore {
    async fn find_student_by_id(&self, id: &str) -> Result<Option<StudentProfile>> {
        let (path, students) = self.read_collection(STUDENTS_FILE).await?;

        students
            .into_iter()
            .find(|doc| document_id(doc) == Some(id))
            .map(|doc| decode(&path, doc))
            .transpose()
    }

    async fn find_jobs_with_embedding(&self) -> Result<Vec<JobPosting>> {
        let (path, jobs) = self.read_collection(JOBS_FILE).await?;

        jobs.into_iter()
            .filter(has_embedding)
            .map(|doc| decode(&path, doc))
            .collect()
    }
}

/// The `_id` of a raw document, either a plain string or `{"$oid": "..."}`.
fn document_id(doc: &Value) -> Option<&str> {
    match doc.get("_id")? {
        Value::String(id) => Some(id.as_str()),
        Value::Object(fields) => fields.get("$oid").and_then(Value::as_str),
        _ => None,
    }
}

/// Whether a raw document has a non-empty `embedding` array.
fn has_embedding(doc: &Value) -> bool {
    doc.get("embedding")
        .and_then(Value::as_array)
        .is_some_and(|embedding| !embedding.is_empty())
}

fn decode<T: DeserializeOwned>(path: &Path, doc: Value) -> Result<T> {
    serde_json::from_value(doc).map_err(|e| unavailable(path, e))
}

fn unavailable(path: &Path, err: impl std::fmt::Display) -> RecommendError {
    RecommendError::StoreUnavailable(format!("{}: {err}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write(dir: &TempDir, file: &str, content: &str) {
        std::fs::write(dir.path().join(file), content).unwrap();
    }

    #[tokio::test]
    async fn test_in_memory_filters_jobs_without_embedding() {
        let store = InMemoryStore::new()
            .with_job(JobPosting::new("a", "A").with_embedding(vec![1.0]))
            .with_job(JobPosting::new("b", "B").with_embedding(vec![]))
            .with_job(JobPosting::new("c", "C"))
            .with_job(JobPosting::new("d", "D").with_embedding(vec![0.0, 1.0]));

        let ids: Vec<String> = store
            .find_jobs_with_embedding()
            .await
            .unwrap()
            .into_iter()
            .map(|j| j.id)
            .collect();

        assert_eq!(ids, vec!["a", "d"]);
    }

    #[tokio::test]
    async fn test_in_memory_student_lookup() {
        let store = InMemoryStore::new().with_student(StudentProfile {
            id: "s1".to_string(),
            ..Default::default()
        });

        assert!(store.find_student_by_id("s1").await.unwrap().is_some());
        assert!(store.find_student_by_id("s2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_json_store_reads_exported_documents() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            STUDENTS_FILE,
            r#"[{ "_id": { "$oid": "665f1c" }, "skills": ["Rust"], "bio": "ignored" }]"#,
        );
        write(
            &dir,
            JOBS_FILE,
            r#"[
                {
                    "_id": { "$oid": "j1" },
                    "jobRole": "Backend",
                    "companyName": "Acme",
                    "embedding": [0.1, 0.2]
                },
                { "_id": "j2", "jobRole": "Frontend", "embedding": [] },
                { "_id": "j3", "jobRole": "Ops" }
            ]"#,
        );

        let store = JsonDocumentStore::open(dir.path()).await.unwrap();

        let student = store.find_student_by_id("665f1c").await.unwrap().unwrap();
        assert_eq!(student.skills, vec!["Rust"]);
        assert!(store.find_student_by_id("missing").await.unwrap().is_none());

        let jobs = store.find_jobs_with_embedding().await.unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].id, "j1");
        assert_eq!(jobs[0].company_name.as_deref(), Some("Acme"));
    }

    #[tokio::test]
    async fn test_json_store_ignores_unselected_malformed_documents() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            STUDENTS_FILE,
            r#"[
                { "_id": "s1", "skills": ["Go"] },
                { "_id": "s2", "skills": null }
            ]"#,
        );
        write(
            &dir,
            JOBS_FILE,
            r#"[
                { "_id": "j1", "jobRole": "Backend", "embedding": [1.0, 0.0] },
                { "_id": "draft", "embedding": [] },
                { "_id": "stub" }
            ]"#,
        );

        let store = JsonDocumentStore::open(dir.path()).await.unwrap();

        let student = store.find_student_by_id("s1").await.unwrap().unwrap();
        assert_eq!(student.skills, vec!["Go"]);
        assert!(matches!(
            store.find_student_by_id("s2").await,
            Err(RecommendError::StoreUnavailable(_))
        ));

        let jobs = store.find_jobs_with_embedding().await.unwrap();
        let ids: Vec<&str> = jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["j1"]);
    }

    #[tokio::test]
    async fn test_json_store_rejects_selected_malformed_job() {
        let dir = TempDir::new().unwrap();
        write(&dir, JOBS_FILE, r#"[{ "_id": "j1", "embedding": [1.0] }]"#);

        let store = JsonDocumentStore::open(dir.path()).await.unwrap();

        assert!(matches!(
            store.find_jobs_with_embedding().await,
            Err(RecommendError::StoreUnavailable(msg)) if msg.contains("jobRole")
        ));
    }

    #[tokio::test]
    async fn test_json_store_missing_directory() {
        let dir = TempDir::new().unwrap();
        let result = JsonDocumentStore::open(dir.path().join("nope")).await;
        assert!(matches!(result, Err(RecommendError::StoreUnavailable(_))));
    }

    #[tokio::test]
    async fn test_json_store_missing_or_malformed_file() {
        let dir = TempDir::new().unwrap();
        let store = JsonDocumentStore::open(dir.path()).await.unwrap();

        assert!(matches!(
            store.find_jobs_with_embedding().await,
            Err(RecommendError::StoreUnavailable(_))
        ));

        write(&dir, STUDENTS_FILE, "{ not json");
        assert!(matches!(
            store.find_student_by_id("x").await,
            Err(RecommendError::StoreUnavailable(_))
        ));
    }
}
