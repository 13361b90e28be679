//! Documents read from the profile store and the ranked output.

use jobmatch_embeddings::{Embedding, Scored};
use serde::{Deserialize, Deserializer, Serialize};

/// A student's profile as stored in the `studentprofiles` collection.
///
/// Only the fields that feed the profile text are modelled; anything else in
/// the stored document is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentProfile {
    #[serde(rename = "_id", deserialize_with = "document_id")]
    pub id: String,
    pub skills: Vec<String>,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
    pub licenses: Vec<License>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: Option<String>,
    pub field: Option<String>,
    pub school: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct License {
    pub name: Option<String>,
    pub organization: Option<String>,
}

/// A job posting as stored in the `jobposts` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    #[serde(rename = "_id", deserialize_with = "document_id")]
    pub id: String,

    pub job_role: String,

    #[serde(default)]
    pub company_name: Option<String>,

    /// Precomputed at job creation time. Empty or missing means the job
    /// cannot be ranked.
    #[serde(default)]
    pub embedding: Option<Embedding>,
}

impl JobPosting {
    pub fn new(id: impl Into<String>, job_role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            job_role: job_role.into(),
            company_name: None,
            embedding: None,
        }
    }

    pub fn with_company_name(mut self, company_name: impl Into<String>) -> Self {
        self.company_name = Some(company_name.into());
        self
    }

    pub fn with_embedding(mut self, embedding: Embedding) -> Self {
        self.embedding = Some(embedding);
        self
    }

    /// Whether the posting carries a non-empty embedding.
    pub fn has_embedding(&self) -> bool {
        self.embedding.as_ref().is_some_and(|e| !e.is_empty())
    }

    /// The stored embedding, or an empty slice when there is none.
    pub fn embedding(&self) -> &[f32] {
        self.embedding.as_deref().unwrap_or_default()
    }
}

/// One entry of the recommendation output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedJob {
    #[serde(rename = "_id")]
    pub id: String,
    pub job_role: String,
    pub company_name: String,
    pub similarity: f64,
}

impl From<Scored<JobPosting>> for RankedJob {
    fn from(scored: Scored<JobPosting>) -> Self {
        let Scored { item, similarity } = scored;
        Self {
            id: item.id,
            job_role: item.job_role,
            company_name: item.company_name.unwrap_or_default(),
            similarity,
        }
    }
}

/// Accepts both plain string ids and extended-JSON `{"$oid": "..."}` ids.
fn document_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Plain(String),
        ObjectId {
            #[serde(rename = "$oid")]
            oid: String,
        },
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Plain(id) => id,
        RawId::ObjectId { oid } => oid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_student_profile_from_document() {
        let doc = json!({
            "_id": { "$oid": "64b7f0c2a1b2c3d4e5f60718" },
            "name": "Ada",
            "skills": ["Python", "SQL"],
            "education": [{ "degree": "BSc", "field": "CS", "school": "X", "gpa": 3.8 }],
            "projects": [{ "name": "Parser" }],
        });

        let profile: StudentProfile = serde_json::from_value(doc).unwrap();

        assert_eq!(profile.id, "64b7f0c2a1b2c3d4e5f60718");
        assert_eq!(profile.skills, vec!["Python", "SQL"]);
        assert_eq!(profile.education[0].degree.as_deref(), Some("BSc"));
        assert_eq!(profile.projects[0].description, None);
        assert!(profile.licenses.is_empty());
    }

    #[test]
    fn test_job_posting_embedding_presence() {
        let with_vector: JobPosting = serde_json::from_value(json!({
            "_id": "j1", "jobRole": "Backend Engineer", "embedding": [0.5, 0.5]
        }))
        .unwrap();
        let empty: JobPosting = serde_json::from_value(json!({
            "_id": "j2", "jobRole": "Designer", "embedding": []
        }))
        .unwrap();
        let missing: JobPosting = serde_json::from_value(json!({
            "_id": "j3", "jobRole": "Analyst"
        }))
        .unwrap();

        assert!(with_vector.has_embedding());
        assert!(!empty.has_embedding());
        assert!(!missing.has_embedding());
        assert!(missing.embedding().is_empty());
    }

    #[test]
    fn test_ranked_job_similarity_keeps_full_precision() {
        let similarity = std::f64::consts::FRAC_1_SQRT_2;
        let scored = Scored {
            item: JobPosting::new("j1", "Data Engineer"),
            similarity,
        };

        let value = serde_json::to_value(RankedJob::from(scored)).unwrap();

        assert_eq!(value["similarity"].as_f64(), Some(similarity));
    }

    #[test]
    fn test_ranked_job_wire_format() {
        let scored = Scored {
            item: JobPosting::new("j1", "Data Engineer").with_embedding(vec![1.0]),
            similarity: 0.5,
        };

        let value = serde_json::to_value(RankedJob::from(scored)).unwrap();

        assert_eq!(
            value,
            json!({
                "_id": "j1",
                "jobRole": "Data Engineer",
                "companyName": "",
                "similarity": 0.5,
            })
        );
    }
}
