use crate::{Persistence, PersistenceError};
use models::Course;
use std::sync::Mutex;

/// Volatile binding holding the persisted list in memory.
///
/// Useful as a runtime binding when no durability is wanted and, behind an
/// `Arc`, for tests that need to observe what was saved.
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: Mutex<Option<Vec<Course>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds a persisted list
    pub fn with_courses(courses: Vec<Course>) -> Self {
        Self {
            saved: Mutex::new(Some(courses)),
        }
    }

    /// The most recently saved list, if any save has happened
    pub fn saved(&self) -> Option<Vec<Course>> {
        self.saved.lock().expect("memory store lock poisoned").clone()
    }
}

impl Persistence for MemoryStore {
    fn load_all(&self) -> Result<Option<Vec<Course>>, PersistenceError> {
        Ok(self.saved())
    }

    fn save_all(&self, courses: &[Course]) -> Result<(), PersistenceError> {
        *self.saved.lock().expect("memory store lock poisoned") = Some(courses.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use models::Status;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert!(store.load_all().unwrap().is_none());

        let courses = vec![Course {
            id: "1".to_string(),
            course_name: "Intro".to_string(),
            hours: 5,
            tags: "A, B".to_string(),
            instructor_name: "X".to_string(),
            status: Status::InProgress,
        }];

        store.save_all(&courses).unwrap();
        assert_eq!(store.load_all().unwrap(), Some(courses));
    }

    #[test]
    fn test_with_courses_starts_populated() {
        let course = Course {
            id: "1".to_string(),
            course_name: "Intro".to_string(),
            hours: 5,
            tags: String::new(),
            instructor_name: "X".to_string(),
            status: Status::Finished,
        };

        let store = MemoryStore::with_courses(vec![course.clone()]);
        assert_eq!(store.load_all().unwrap(), Some(vec![course]));
    }
}
