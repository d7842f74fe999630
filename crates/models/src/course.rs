use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// Completion status of a tracked course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    InProgress,
    Finished,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Finished => "finished",
        }
    }
}

impl FromStr for Status {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in_progress" => Ok(Self::InProgress),
            "finished" => Ok(Self::Finished),
            _ => Err(()),
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// A tracked course entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Opaque unique identifier, assigned at creation
    pub id: String,
    pub course_name: String,
    pub hours: u32,
    /// Comma-separated tag labels, free text (e.g., "React, JavaScript")
    pub tags: String,
    pub instructor_name: String,
    pub status: Status,
}

impl Course {
    pub fn from_draft(id: String, draft: CourseDraft) -> Self {
        Self {
            id,
            course_name: draft.course_name,
            hours: draft.hours,
            tags: draft.tags,
            instructor_name: draft.instructor_name,
            status: draft.status,
        }
    }

    /// Case-insensitive (course_name, instructor_name) pair used for
    /// duplicate detection
    pub fn identity_key(&self) -> (String, String) {
        identity_key(&self.course_name, &self.instructor_name)
    }
}

/// A course as entered in the form, before an `id` is assigned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseDraft {
    pub course_name: String,
    pub hours: u32,
    pub tags: String,
    pub instructor_name: String,
    pub status: Status,
}

impl CourseDraft {
    pub fn identity_key(&self) -> (String, String) {
        identity_key(&self.course_name, &self.instructor_name)
    }
}

fn identity_key(course_name: &str, instructor_name: &str) -> (String, String) {
    (course_name.to_lowercase(), instructor_name.to_lowercase())
}
