use thiserror::Error;

/// Errors raised by mutation operations on the course list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    /// Another record already uses the same (course_name, instructor_name)
    /// pair, compared case-insensitively
    #[error("this course with the same instructor already exists")]
    Duplicate {
        course_name: String,
        instructor_name: String,
    },

    /// The operation referenced an id that is not in the list
    #[error("course not found: {id}")]
    NotFound { id: String },
}
