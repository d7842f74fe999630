pub mod error;
pub mod local;
pub mod memory;

pub use error::PersistenceError;
pub use local::LocalStore;
pub use memory::MemoryStore;

use models::Course;
use std::sync::Arc;

/// Durable mirror of the course list.
///
/// Whole-list replace semantics: `save_all` overwrites the entire persisted
/// representation, `load_all` returns it (or `None` when nothing has been
/// persisted yet). There are no partial or incremental writes.
pub trait Persistence {
    fn load_all(&self) -> Result<Option<Vec<Course>>, PersistenceError>;
    fn save_all(&self, courses: &[Course]) -> Result<(), PersistenceError>;
}

impl<P: Persistence + ?Sized> Persistence for Arc<P> {
    fn load_all(&self) -> Result<Option<Vec<Course>>, PersistenceError> {
        (**self).load_all()
    }

    fn save_all(&self, courses: &[Course]) -> Result<(), PersistenceError> {
        (**self).save_all(courses)
    }
}
