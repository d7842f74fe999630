use models::Course;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracker::FacetCounts;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseResponse {
    pub id: String,
    pub course_name: String,
    pub hours: u32,
    pub tags: String,
    pub instructor_name: String,
    /// "in_progress" or "finished"
    pub status: String,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            course_name: course.course_name,
            hours: course.hours,
            tags: course.tags,
            instructor_name: course.instructor_name,
            status: course.status.as_str().to_string(),
        }
    }
}

/// Body of POST /courses: a course without an id
#[derive(Debug, Deserialize, ToSchema)]
pub struct CourseDraftRequest {
    pub course_name: String,
    pub hours: u32,
    #[serde(default)]
    pub tags: String,
    pub instructor_name: String,
    /// "in_progress" or "finished"
    pub status: String,
}

/// Body of PUT /courses: a full course including its id
#[derive(Debug, Deserialize, ToSchema)]
pub struct CourseUpdateRequest {
    pub id: String,
    pub course_name: String,
    pub hours: u32,
    #[serde(default)]
    pub tags: String,
    pub instructor_name: String,
    /// "in_progress" or "finished"
    pub status: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedCoursesResponse {
    pub courses: Vec<CourseResponse>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
    pub total_items: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct CourseQueryParams {
    #[serde(default = "default_page")]
    pub page: u64,

    #[serde(default = "default_per_page")]
    pub per_page: u64,

    /// Exact tag to filter on (case-sensitive)
    pub tag: Option<String>,
    /// Exact instructor name to filter on
    pub instructor: Option<String>,
    /// Status to filter on: "in_progress" or "finished"
    pub status: Option<String>,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    10
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct DeleteCourseParams {
    pub id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FacetsResponse {
    pub tags: BTreeMap<String, usize>,
    pub instructors: BTreeMap<String, usize>,
    pub statuses: BTreeMap<String, usize>,
}

impl From<FacetCounts> for FacetsResponse {
    fn from(counts: FacetCounts) -> Self {
        Self {
            tags: counts.tags,
            instructors: counts.instructors,
            statuses: counts.statuses,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClearStateResponse {
    pub armed: bool,
    /// Seconds left before confirmation is permitted; 0 when disarmed
    pub remaining: u8,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
