pub mod course;
pub mod tags;

pub use course::{Course, CourseDraft, Status};
