use crate::{TrackerError, clear::ClearCountdown};
use log::{error, warn};
use models::{Course, CourseDraft};
use persistence::Persistence;
use uuid::Uuid;

/// Owns the canonical, insertion-ordered course list and applies every
/// mutation to it.
///
/// The list is mirrored through the persistence binding after each
/// successful mutation; a failed mirror is logged and the in-memory
/// mutation stands, since the list in memory is the session's source of
/// truth. Readers only ever receive copies of the list.
pub struct Tracker {
    courses: Vec<Course>,
    clear: ClearCountdown,
    persistence: Box<dyn Persistence + Send>,
}

impl Tracker {
    /// Seeds the tracker from the persisted list, starting empty when no
    /// list has been persisted yet or when loading fails
    pub fn load(persistence: Box<dyn Persistence + Send>) -> Self {
        let courses = match persistence.load_all() {
            Ok(courses) => courses.unwrap_or_default(),
            Err(e) => {
                warn!("failed to load persisted courses, starting empty: {e}");
                Vec::new()
            }
        };

        Self {
            courses,
            clear: ClearCountdown::default(),
            persistence,
        }
    }

    /// Full canonical list, insertion order preserved
    pub fn all(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Appends a new record built from `draft` with a freshly assigned id
    pub fn add(&mut self, draft: CourseDraft) -> Result<Course, TrackerError> {
        self.check_duplicate(&draft, None)?;

        let course = Course::from_draft(Uuid::new_v4().to_string(), draft);
        self.courses.push(course.clone());
        self.persist();
        Ok(course)
    }

    /// Replaces the record with `id` in place, keeping its position
    pub fn update(&mut self, id: &str, draft: CourseDraft) -> Result<Course, TrackerError> {
        let position = self
            .courses
            .iter()
            .position(|course| course.id == id)
            .ok_or_else(|| TrackerError::NotFound { id: id.to_string() })?;

        self.check_duplicate(&draft, Some(id))?;

        let course = Course::from_draft(id.to_string(), draft);
        self.courses[position] = course.clone();
        self.persist();
        Ok(course)
    }

    /// Removes the record with `id`
    pub fn delete(&mut self, id: &str) -> Result<(), TrackerError> {
        let position = self
            .courses
            .iter()
            .position(|course| course.id == id)
            .ok_or_else(|| TrackerError::NotFound { id: id.to_string() })?;

        self.courses.remove(position);
        self.persist();
        Ok(())
    }

    /// Arms the clear-all countdown; re-arming restarts it from the full
    /// duration
    pub fn begin_clear_all(&mut self) {
        self.clear.arm();
    }

    /// Advances the clear-all countdown by one tick; returns whether it is
    /// still running
    pub fn tick_clear_countdown(&mut self) -> bool {
        self.clear.tick()
    }

    /// Disarms the clear-all countdown, leaving the list untouched
    pub fn cancel_clear_all(&mut self) {
        self.clear.disarm();
    }

    /// Empties the list if the armed countdown has elapsed.
    ///
    /// Returns `false` (and leaves the list untouched) while disarmed or
    /// while the countdown is still running.
    pub fn confirm_clear_all(&mut self) -> bool {
        if !self.clear.is_ready() {
            return false;
        }

        self.courses.clear();
        self.clear.disarm();
        self.persist();
        true
    }

    pub fn clear_countdown(&self) -> ClearCountdown {
        self.clear
    }

    fn check_duplicate(
        &self,
        draft: &CourseDraft,
        updating_id: Option<&str>,
    ) -> Result<(), TrackerError> {
        let key = draft.identity_key();
        let duplicate = self.courses.iter().any(|course| {
            updating_id != Some(course.id.as_str()) && course.identity_key() == key
        });

        if duplicate {
            return Err(TrackerError::Duplicate {
                course_name: draft.course_name.clone(),
                instructor_name: draft.instructor_name.clone(),
            });
        }

        Ok(())
    }

    fn persist(&self) {
        if let Err(e) = self.persistence.save_all(&self.courses) {
            error!("failed to persist course list: {e}");
        }
    }
}
