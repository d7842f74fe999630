use log::info;
use models::{CourseDraft, Status};
use tracker::Tracker;

/// Fixed demonstration records loaded on first run when seeding is enabled.
/// Presentation convenience only; nothing else depends on these.
fn demo_drafts() -> Vec<CourseDraft> {
    vec![
        CourseDraft {
            course_name: "React Fundamentals".to_string(),
            hours: 12,
            tags: "React, JavaScript".to_string(),
            instructor_name: "Sarah Chen".to_string(),
            status: Status::InProgress,
        },
        CourseDraft {
            course_name: "Rust for Backend Engineers".to_string(),
            hours: 20,
            tags: "Rust, Systems".to_string(),
            instructor_name: "Miguel Ortiz".to_string(),
            status: Status::InProgress,
        },
        CourseDraft {
            course_name: "Database Design".to_string(),
            hours: 8,
            tags: "SQL, Modeling".to_string(),
            instructor_name: "Priya Nair".to_string(),
            status: Status::Finished,
        },
    ]
}

pub fn seed_demo_courses(tracker: &mut Tracker) {
    let mut seeded = 0;
    for draft in demo_drafts() {
        if tracker.add(draft).is_ok() {
            seeded += 1;
        }
    }
    info!("seeded {seeded} demo courses");
}

#[cfg(test)]
mod test {
    use super::*;
    use persistence::MemoryStore;

    #[test]
    fn test_seed_fills_an_empty_tracker() {
        let mut tracker = Tracker::load(Box::new(MemoryStore::new()));
        seed_demo_courses(&mut tracker);
        assert_eq!(tracker.len(), 3);

        // Seeding twice cannot duplicate records
        seed_demo_courses(&mut tracker);
        assert_eq!(tracker.len(), 3);
    }
}
