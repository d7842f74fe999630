use crate::dtos::course::{
    CourseDraftRequest, CourseQueryParams, CourseResponse, CourseUpdateRequest,
    DeleteCourseParams, ErrorResponse, FacetsResponse, MessageResponse, PaginatedCoursesResponse,
    PaginationMeta,
};
use crate::routes::{ApiError, api_error};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use models::{CourseDraft, Status};
use std::{
    str::FromStr,
    sync::{Mutex, MutexGuard},
};
use tracker::{FilterSelection, Tracker, TrackerError, facet_counts, filtered, paginate};

fn lock_tracker<'a>(
    tracker: &'a Mutex<Tracker>,
    failure_message: &str,
) -> Result<MutexGuard<'a, Tracker>, ApiError> {
    tracker
        .lock()
        .map_err(|_| api_error(StatusCode::INTERNAL_SERVER_ERROR, failure_message))
}

fn mutation_error(err: TrackerError) -> ApiError {
    match err {
        TrackerError::Duplicate { .. } => api_error(
            StatusCode::CONFLICT,
            "This course with the same instructor already exists!",
        ),
        TrackerError::NotFound { .. } => api_error(StatusCode::NOT_FOUND, "Course not found"),
    }
}

fn parse_status(status: &str) -> Result<Status, ApiError> {
    Status::from_str(status).map_err(|()| {
        api_error(
            StatusCode::BAD_REQUEST,
            "Status must be \"in_progress\" or \"finished\"",
        )
    })
}

fn validate_draft(
    course_name: String,
    hours: u32,
    tags: String,
    instructor_name: String,
    status: &str,
) -> Result<CourseDraft, ApiError> {
    if course_name.trim().is_empty() {
        return Err(api_error(StatusCode::BAD_REQUEST, "Course name is required"));
    }
    if instructor_name.trim().is_empty() {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "Instructor name is required",
        ));
    }

    Ok(CourseDraft {
        course_name,
        hours,
        tags,
        instructor_name,
        status: parse_status(status)?,
    })
}

/// Get the filtered, paginated list of courses
#[utoipa::path(
    get,
    path = "/courses",
    params(CourseQueryParams),
    responses(
        (status = 200, description = "List of courses retrieved successfully", body = PaginatedCoursesResponse),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
pub async fn list_courses(
    State(state): State<AppState>,
    Query(params): Query<CourseQueryParams>,
) -> Result<Json<PaginatedCoursesResponse>, ApiError> {
    // An empty query parameter (e.g. `?tag=`) means "any", not a literal
    // empty-string criterion
    let selection = FilterSelection {
        tag: params.tag.filter(|tag| !tag.is_empty()),
        instructor: params.instructor.filter(|instructor| !instructor.is_empty()),
        status: params
            .status
            .as_deref()
            .filter(|status| !status.is_empty())
            .map(parse_status)
            .transpose()?,
    };

    let tracker = lock_tracker(&state.tracker, "Failed to fetch courses")?;
    let matching = filtered(tracker.all(), &selection);
    drop(tracker);

    let total_items = matching.len() as u64;
    let page = paginate(&matching, params.per_page, params.page);

    let pagination = PaginationMeta {
        page: params.page,
        per_page: params.per_page,
        total_pages: page.total_pages,
        total_items,
        has_next: params.page < page.total_pages,
        has_prev: params.page > 1 && page.total_pages > 0,
    };

    Ok(Json(PaginatedCoursesResponse {
        courses: page.items.into_iter().map(CourseResponse::from).collect(),
        pagination,
    }))
}

/// Get per-tag, per-instructor, and per-status record counts
#[utoipa::path(
    get,
    path = "/courses/facets",
    responses(
        (status = 200, description = "Facet counts retrieved successfully", body = FacetsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
pub async fn get_course_facets(
    State(state): State<AppState>,
) -> Result<Json<FacetsResponse>, ApiError> {
    let tracker = lock_tracker(&state.tracker, "Failed to fetch courses")?;
    let counts = facet_counts(tracker.all());
    Ok(Json(counts.into()))
}

/// Create a course; the server performs the duplicate check
#[utoipa::path(
    post,
    path = "/courses",
    request_body = CourseDraftRequest,
    responses(
        (status = 200, description = "Course created", body = CourseResponse),
        (status = 400, description = "Invalid course body", body = ErrorResponse),
        (status = 409, description = "Duplicate course/instructor pair", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
pub async fn create_course(
    State(state): State<AppState>,
    Json(body): Json<CourseDraftRequest>,
) -> Result<Json<CourseResponse>, ApiError> {
    let draft = validate_draft(
        body.course_name,
        body.hours,
        body.tags,
        body.instructor_name,
        &body.status,
    )?;

    let mut tracker = lock_tracker(&state.tracker, "Failed to create course")?;
    let course = tracker.add(draft).map_err(mutation_error)?;
    Ok(Json(course.into()))
}

/// Replace a course identified by the id in the body
#[utoipa::path(
    put,
    path = "/courses",
    request_body = CourseUpdateRequest,
    responses(
        (status = 200, description = "Course updated", body = CourseResponse),
        (status = 400, description = "Invalid course body", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 409, description = "Duplicate course/instructor pair", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
pub async fn update_course(
    State(state): State<AppState>,
    Json(body): Json<CourseUpdateRequest>,
) -> Result<Json<CourseResponse>, ApiError> {
    let draft = validate_draft(
        body.course_name,
        body.hours,
        body.tags,
        body.instructor_name,
        &body.status,
    )?;

    let mut tracker = lock_tracker(&state.tracker, "Failed to update course")?;
    let course = tracker.update(&body.id, draft).map_err(mutation_error)?;
    Ok(Json(course.into()))
}

/// Delete the course named by the `id` query parameter
#[utoipa::path(
    delete,
    path = "/courses",
    params(DeleteCourseParams),
    responses(
        (status = 200, description = "Course deleted", body = MessageResponse),
        (status = 400, description = "Missing id parameter", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
pub async fn delete_course(
    State(state): State<AppState>,
    Query(params): Query<DeleteCourseParams>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = params
        .id
        .ok_or_else(|| api_error(StatusCode::BAD_REQUEST, "Course ID is required"))?;

    let mut tracker = lock_tracker(&state.tracker, "Failed to delete course")?;
    tracker.delete(&id).map_err(mutation_error)?;

    Ok(Json(MessageResponse {
        message: "Course deleted successfully".to_string(),
    }))
}

#[cfg(test)]
mod test {
    use super::*;
    use persistence::MemoryStore;
    use tracker::Tracker;

    fn test_state() -> AppState {
        AppState::new(Tracker::load(Box::new(MemoryStore::new())))
    }

    fn draft_body(name: &str, instructor: &str) -> CourseDraftRequest {
        CourseDraftRequest {
            course_name: name.to_string(),
            hours: 5,
            tags: "React, JavaScript".to_string(),
            instructor_name: instructor.to_string(),
            status: "in_progress".to_string(),
        }
    }

    fn query(params: CourseQueryParams) -> Query<CourseQueryParams> {
        Query(params)
    }

    fn default_query() -> CourseQueryParams {
        CourseQueryParams {
            page: 1,
            per_page: 10,
            tag: None,
            instructor: None,
            status: None,
        }
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let state = test_state();

        let created = create_course(State(state.clone()), Json(draft_body("Intro", "X")))
            .await
            .unwrap();
        assert_eq!(created.0.course_name, "Intro");
        assert_eq!(created.0.status, "in_progress");

        let listed = list_courses(State(state), query(default_query()))
            .await
            .unwrap();
        assert_eq!(listed.0.courses.len(), 1);
        assert_eq!(listed.0.pagination.total_items, 1);
        assert_eq!(listed.0.pagination.total_pages, 1);
    }

    #[tokio::test]
    async fn test_create_duplicate_conflicts() {
        let state = test_state();
        create_course(State(state.clone()), Json(draft_body("Intro", "X")))
            .await
            .unwrap();

        let (status, body) = create_course(State(state), Json(draft_body("INTRO", "x")))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(
            body.0.error,
            "This course with the same instructor already exists!"
        );
    }

    #[tokio::test]
    async fn test_create_rejects_blank_names_and_bad_status() {
        let state = test_state();

        let (status, _) = create_course(State(state.clone()), Json(draft_body("  ", "X")))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let mut body = draft_body("Intro", "X");
        body.status = "done".to_string();
        let (status, _) = create_course(State(state), Json(body)).await.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let state = test_state();

        let body = CourseUpdateRequest {
            id: "missing".to_string(),
            course_name: "Intro".to_string(),
            hours: 5,
            tags: String::new(),
            instructor_name: "X".to_string(),
            status: "finished".to_string(),
        };

        let (status, body) = update_course(State(state), Json(body)).await.unwrap_err();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.0.error, "Course not found");
    }

    #[tokio::test]
    async fn test_update_replaces_record() {
        let state = test_state();
        let created = create_course(State(state.clone()), Json(draft_body("Intro", "X")))
            .await
            .unwrap();

        let body = CourseUpdateRequest {
            id: created.0.id.clone(),
            course_name: "Intro".to_string(),
            hours: 40,
            tags: "Rust".to_string(),
            instructor_name: "X".to_string(),
            status: "finished".to_string(),
        };

        let updated = update_course(State(state), Json(body)).await.unwrap();
        assert_eq!(updated.0.id, created.0.id);
        assert_eq!(updated.0.hours, 40);
        assert_eq!(updated.0.status, "finished");
    }

    #[tokio::test]
    async fn test_delete_requires_id_parameter() {
        let state = test_state();

        let (status, body) = delete_course(State(state), Query(DeleteCourseParams { id: None }))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.error, "Course ID is required");
    }

    #[tokio::test]
    async fn test_delete_round_trip() {
        let state = test_state();
        let created = create_course(State(state.clone()), Json(draft_body("Intro", "X")))
            .await
            .unwrap();

        let deleted = delete_course(
            State(state.clone()),
            Query(DeleteCourseParams {
                id: Some(created.0.id.clone()),
            }),
        )
        .await
        .unwrap();
        assert_eq!(deleted.0.message, "Course deleted successfully");

        let (status, _) = delete_course(
            State(state),
            Query(DeleteCourseParams {
                id: Some(created.0.id),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_filters_by_status_and_tag() {
        let state = test_state();
        create_course(State(state.clone()), Json(draft_body("Intro", "X")))
            .await
            .unwrap();
        let mut finished = draft_body("Advanced", "Y");
        finished.status = "finished".to_string();
        finished.tags = "Rust".to_string();
        create_course(State(state.clone()), Json(finished))
            .await
            .unwrap();

        let mut params = default_query();
        params.status = Some("finished".to_string());
        let listed = list_courses(State(state.clone()), query(params)).await.unwrap();
        assert_eq!(listed.0.courses.len(), 1);
        assert_eq!(listed.0.courses[0].course_name, "Advanced");

        // Tag matching is case-sensitive
        let mut params = default_query();
        params.tag = Some("react".to_string());
        let listed = list_courses(State(state), query(params)).await.unwrap();
        assert!(listed.0.courses.is_empty());
    }

    #[tokio::test]
    async fn test_list_treats_empty_filter_params_as_any() {
        let state = test_state();
        create_course(State(state.clone()), Json(draft_body("Intro", "X")))
            .await
            .unwrap();

        let mut params = default_query();
        params.tag = Some(String::new());
        params.instructor = Some(String::new());
        params.status = Some(String::new());

        let listed = list_courses(State(state), query(params)).await.unwrap();
        assert_eq!(listed.0.courses.len(), 1);
    }

    #[tokio::test]
    async fn test_list_paginates() {
        let state = test_state();
        for i in 0..15 {
            create_course(State(state.clone()), Json(draft_body(&format!("C{i}"), "X")))
                .await
                .unwrap();
        }

        let mut params = default_query();
        params.page = 2;
        let listed = list_courses(State(state), query(params)).await.unwrap();
        assert_eq!(listed.0.pagination.total_pages, 2);
        assert_eq!(listed.0.courses.len(), 5);
        assert!(!listed.0.pagination.has_next);
        assert!(listed.0.pagination.has_prev);
    }

    #[tokio::test]
    async fn test_facets_reflect_records() {
        let state = test_state();
        create_course(State(state.clone()), Json(draft_body("Intro", "X")))
            .await
            .unwrap();

        let facets = get_course_facets(State(state)).await.unwrap();
        assert_eq!(facets.0.tags.get("React"), Some(&1));
        assert_eq!(facets.0.instructors.get("X"), Some(&1));
        assert_eq!(facets.0.statuses.get("in_progress"), Some(&1));
    }
}
