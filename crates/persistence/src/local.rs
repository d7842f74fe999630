use crate::{Persistence, PersistenceError};
use models::Course;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default location of the persisted course list
pub const DEFAULT_DATA_PATH: &str = "data/courses.json";

/// Local binding: the whole course list as one JSON array document on disk
#[derive(Debug, Clone)]
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_PATH)
    }
}

impl Persistence for LocalStore {
    fn load_all(&self) -> Result<Option<Vec<Course>>, PersistenceError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)?;
        let courses = serde_json::from_str(&contents)?;
        Ok(Some(courses))
    }

    fn save_all(&self, courses: &[Course]) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(courses)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}
