//! Alumni records - one directory entry per graduate

use serde::{Deserialize, Serialize};

/// A directory entry representing one graduate
///
/// Every field is defaulted on deserialization: stored and imported
/// documents are accepted without schema validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlumniRecord {
    pub id: u64,
    pub name: String,
    pub batch: i32,
    pub degree: String,
    pub role: String,
    pub company: String,
    pub industry: String,
    pub location: String,
    pub bio: String,
    pub linkedin: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub tags: Vec<String>,
    pub is_mentor: bool,
    pub is_mentee: bool,
    pub verified: bool,
    /// Activity score, used only for sorting
    pub activity: f64,
    /// Connection count, used only for sorting
    pub connections: f64,
}

impl AlumniRecord {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_batch(mut self, batch: i32) -> Self {
        self.batch = batch;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_verified(mut self, verified: bool) -> Self {
        self.verified = verified;
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Overwrite the editable profile fields, keeping identity, flags and scores
    pub fn apply_profile(&mut self, update: ProfileUpdate) {
        self.name = update.name;
        self.batch = update.batch;
        self.degree = update.degree;
        self.role = update.role;
        self.company = update.company;
        self.location = update.location;
        self.tags = update.tags;
        self.bio = update.bio;
        self.linkedin = update.linkedin;
        self.email = update.email;
    }
}

/// The full field set submitted by the profile edit form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileUpdate {
    pub name: String,
    pub batch: i32,
    pub degree: String,
    pub role: String,
    pub company: String,
    pub location: String,
    pub tags: Vec<String>,
    pub bio: String,
    pub linkedin: String,
    pub email: String,
}

impl ProfileUpdate {
    /// Prefill an update from the record being edited
    pub fn from_record(record: &AlumniRecord) -> Self {
        Self {
            name: record.name.clone(),
            batch: record.batch,
            degree: record.degree.clone(),
            role: record.role.clone(),
            company: record.company.clone(),
            location: record.location.clone(),
            tags: record.tags.clone(),
            bio: record.bio.clone(),
            linkedin: record.linkedin.clone(),
            email: record.email.clone(),
        }
    }
}

/// Split a comma-separated tag input into trimmed tags
pub fn parse_tag_list(input: &str) -> Vec<String> {
    input.split(',').map(|t| t.trim().to_string()).collect()
}
