use crate::routes::{clear, course, health};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::root,
        health::health,
        course::list_courses,
        course::get_course_facets,
        course::create_course,
        course::update_course,
        course::delete_course,
        clear::begin_clear_all,
        clear::confirm_clear_all,
        clear::cancel_clear_all
    ),
    tags(
        (name = "Courses", description = "Course record endpoints"),
        (name = "Clear all", description = "Two-phase destructive clear with a confirmation countdown"),
        (name = "Health", description = "Liveness endpoints"),
    ),
    info(
        title = "Course Tracker API",
        version = "1.0.0",
        description = "Single-user course tracking list manager",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
