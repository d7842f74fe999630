//! Read-only projections of the course list.
//!
//! Facet counts, filtering, and pagination are pure functions of a given
//! list; they never touch the canonical state and always return owned
//! copies, so callers can recompute them whenever the list or the filter
//! selection changes.

use models::{Course, Status, tags};
use std::collections::BTreeMap;

/// Per-value record counts used to populate filter choices
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetCounts {
    pub tags: BTreeMap<String, usize>,
    pub instructors: BTreeMap<String, usize>,
    pub statuses: BTreeMap<String, usize>,
}

/// Transient filter criteria; `None` means "any"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub tag: Option<String>,
    pub instructor: Option<String>,
    pub status: Option<Status>,
}

/// One page of a list along with the page count for the whole list
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub items: Vec<Course>,
    pub total_pages: u64,
}

/// Counts records per distinct tag, instructor, and status
pub fn facet_counts(courses: &[Course]) -> FacetCounts {
    let mut counts = FacetCounts::default();

    for course in courses {
        for tag in tags::parse_tags(&course.tags) {
            *counts.tags.entry(tag).or_default() += 1;
        }
        *counts
            .instructors
            .entry(course.instructor_name.clone())
            .or_default() += 1;
        *counts
            .statuses
            .entry(course.status.as_str().to_string())
            .or_default() += 1;
    }

    counts
}

/// Keeps the records satisfying every set criterion, order preserved.
///
/// The tag criterion matches against the record's trimmed tag set,
/// case-sensitively; instructor and status are exact equality.
pub fn filtered(courses: &[Course], selection: &FilterSelection) -> Vec<Course> {
    courses
        .iter()
        .filter(|course| {
            selection
                .tag
                .as_ref()
                .is_none_or(|tag| tags::has_tag(&course.tags, tag))
                && selection
                    .instructor
                    .as_ref()
                    .is_none_or(|instructor| &course.instructor_name == instructor)
                && selection.status.is_none_or(|status| course.status == status)
        })
        .cloned()
        .collect()
}

/// Slices out the 1-based `page` of `courses` at `per_page` records a page.
///
/// An empty list has zero pages; an out-of-range page yields an empty slice.
pub fn paginate(courses: &[Course], per_page: u64, page: u64) -> Page {
    if per_page == 0 {
        return Page {
            items: Vec::new(),
            total_pages: 0,
        };
    }

    let total_pages = (courses.len() as u64).div_ceil(per_page);
    let start = page.saturating_sub(1).saturating_mul(per_page);
    let start = usize::try_from(start).unwrap_or(usize::MAX).min(courses.len());
    let end = usize::try_from(page.saturating_mul(per_page))
        .unwrap_or(usize::MAX)
        .min(courses.len());

    Page {
        items: courses[start..end].to_vec(),
        total_pages,
    }
}
