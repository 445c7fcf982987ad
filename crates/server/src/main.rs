// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};
use registrar_api::{
    AccountResponse, ApiError, AttachCoursesRequest, AttachCoursesResponse, AuthenticatedActor,
    CourseInfo, CreateAccountRequest, CreateCourseRequest, CreateProgramRequest,
    CreateStudentRequest, DeleteStudentResponse, EnrollStudentsRequest, EnrollStudentsResponse,
    GradeInfo, ImportGradeSheetResponse, ListCoursesResponse, ListProgramsResponse,
    ListStudentsResponse, ProgramInfo, RecordGradeRequest, StudentInfo, StudentProfileResponse,
    UpdateStudentRequest, authenticate_actor,
};
use registrar_persistence::{PersistenceError, SqlitePersistence};

/// Registrar Server - HTTP server for the academic records system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    address: String,
}

/// Application state shared across handlers.
///
/// The store is wrapped in a Mutex: the engine runs one invocation at a
/// time and the SQLite connection is not shareable.
#[derive(Clone)]
struct AppState {
    /// The persistence layer.
    persistence: Arc<Mutex<SqlitePersistence>>,
}

/// Actor identity carried on every request.
///
/// Identity resolution happens upstream; requests arrive with the
/// resolved email and claimed role, which the server still checks
/// against the account store.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ActorQuery {
    /// The actor's email address.
    actor_email: String,
    /// The actor's claimed role.
    actor_role: String,
}

/// API request for creating a student.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateStudentApiRequest {
    /// The actor's email address.
    actor_email: String,
    /// The actor's claimed role.
    actor_role: String,
    /// The student's enrollment number.
    enrollment_number: String,
    /// The student's first name.
    first_name: String,
    /// The student's last name.
    last_name: String,
    /// The student's email address.
    email: String,
}

/// API request for updating a student.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct UpdateStudentApiRequest {
    /// The actor's email address.
    actor_email: String,
    /// The actor's claimed role.
    actor_role: String,
    /// The student's enrollment number.
    enrollment_number: String,
    /// The student's first name.
    first_name: String,
    /// The student's last name.
    last_name: String,
    /// The student's email address.
    email: String,
}

/// API request for creating a program.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateProgramApiRequest {
    /// The actor's email address.
    actor_email: String,
    /// The actor's claimed role.
    actor_role: String,
    /// The program name.
    name: String,
    /// The formation year (1 or 2).
    formation_year: u8,
}

/// API request for creating a course.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateCourseApiRequest {
    /// The actor's email address.
    actor_email: String,
    /// The actor's claimed role.
    actor_role: String,
    /// The course code.
    code: String,
    /// The course title.
    title: String,
}

/// API request for enrolling students in a program.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct EnrollStudentsApiRequest {
    /// The actor's email address.
    actor_email: String,
    /// The actor's claimed role.
    actor_role: String,
    /// The students to enroll.
    student_ids: Vec<i64>,
}

/// API request for attaching courses to a program.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct AttachCoursesApiRequest {
    /// The actor's email address.
    actor_email: String,
    /// The actor's claimed role.
    actor_role: String,
    /// The courses to attach.
    course_ids: Vec<i64>,
}

/// API request for recording a grade.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct RecordGradeApiRequest {
    /// The actor's email address.
    actor_email: String,
    /// The actor's claimed role.
    actor_role: String,
    /// The graded student.
    student_id: i64,
    /// The graded course.
    course_id: i64,
    /// The grade value (0 to 20 inclusive).
    value: f64,
}

/// API request for importing a grade sheet.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ImportGradeSheetApiRequest {
    /// The actor's email address.
    actor_email: String,
    /// The actor's claimed role.
    actor_role: String,
    /// The grade sheet as CSV text, including the header line.
    csv: String,
}

/// API request for creating a login account.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateAccountApiRequest {
    /// The actor's email address.
    actor_email: String,
    /// The actor's claimed role.
    actor_role: String,
    /// The login email address.
    email: String,
    /// The plain password.
    password: String,
    /// The password confirmation.
    password_confirmation: String,
    /// The role the account holds.
    role: String,
    /// The linked student record, for student accounts.
    student_id: Option<i64>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
    /// Per-row messages for a rejected grade sheet.
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<String>>,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
    /// Per-row messages for a rejected grade sheet.
    errors: Option<Vec<String>>,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
            errors: self.errors,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::DomainRuleViolation { .. }
            | ApiError::SheetRejected { .. }
            | ApiError::PasswordPolicyViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let errors: Option<Vec<String>> = match &err {
            ApiError::SheetRejected { errors } => Some(errors.clone()),
            _ => None,
        };
        Self {
            status,
            message: err.to_string(),
            errors,
        }
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        error!(error = %err, "Persistence error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Persistence error: {err}"),
            errors: None,
        }
    }
}

/// Authenticates the actor named on a request against the account store.
fn authenticate(
    persistence: &mut SqlitePersistence,
    email: &str,
    role: &str,
) -> Result<AuthenticatedActor, HttpError> {
    authenticate_actor(persistence, email, role)
        .map_err(|e| HttpError::from(ApiError::from(e)))
}

/// Handler for POST `/students`.
async fn handle_create_student(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateStudentApiRequest>,
) -> Result<Json<StudentInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: AuthenticatedActor =
        authenticate(&mut persistence, &req.actor_email, &req.actor_role)?;

    let info: StudentInfo = registrar_api::create_student(
        &mut *persistence,
        &actor,
        &CreateStudentRequest {
            enrollment_number: req.enrollment_number,
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
        },
    )?;
    Ok(Json(info))
}

/// Handler for GET `/students`.
async fn handle_list_students(
    AxumState(app_state): AxumState<AppState>,
    Query(actor_query): Query<ActorQuery>,
) -> Result<Json<ListStudentsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: AuthenticatedActor = authenticate(
        &mut persistence,
        &actor_query.actor_email,
        &actor_query.actor_role,
    )?;

    let response: ListStudentsResponse =
        registrar_api::list_students(&mut *persistence, &actor)?;
    Ok(Json(response))
}

/// Handler for GET `/students/{student_id}`.
async fn handle_get_student(
    AxumState(app_state): AxumState<AppState>,
    Path(student_id): Path<i64>,
    Query(actor_query): Query<ActorQuery>,
) -> Result<Json<StudentInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: AuthenticatedActor = authenticate(
        &mut persistence,
        &actor_query.actor_email,
        &actor_query.actor_role,
    )?;

    let info: StudentInfo = registrar_api::get_student(&mut *persistence, &actor, student_id)?;
    Ok(Json(info))
}

/// Handler for GET `/students/{student_id}/profile`.
async fn handle_get_student_profile(
    AxumState(app_state): AxumState<AppState>,
    Path(student_id): Path<i64>,
    Query(actor_query): Query<ActorQuery>,
) -> Result<Json<StudentProfileResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: AuthenticatedActor = authenticate(
        &mut persistence,
        &actor_query.actor_email,
        &actor_query.actor_role,
    )?;

    let profile: StudentProfileResponse =
        registrar_api::get_student_profile(&mut *persistence, &actor, student_id)?;
    Ok(Json(profile))
}

/// Handler for PUT `/students/{student_id}`.
async fn handle_update_student(
    AxumState(app_state): AxumState<AppState>,
    Path(student_id): Path<i64>,
    Json(req): Json<UpdateStudentApiRequest>,
) -> Result<Json<StudentInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: AuthenticatedActor =
        authenticate(&mut persistence, &req.actor_email, &req.actor_role)?;

    let info: StudentInfo = registrar_api::update_student(
        &mut *persistence,
        &actor,
        student_id,
        &UpdateStudentRequest {
            enrollment_number: req.enrollment_number,
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
        },
    )?;
    Ok(Json(info))
}

/// Handler for DELETE `/students/{student_id}`.
async fn handle_delete_student(
    AxumState(app_state): AxumState<AppState>,
    Path(student_id): Path<i64>,
    Query(actor_query): Query<ActorQuery>,
) -> Result<Json<DeleteStudentResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: AuthenticatedActor = authenticate(
        &mut persistence,
        &actor_query.actor_email,
        &actor_query.actor_role,
    )?;

    let response: DeleteStudentResponse =
        registrar_api::delete_student(&mut *persistence, &actor, student_id)?;
    Ok(Json(response))
}

/// Handler for POST `/programs`.
async fn handle_create_program(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateProgramApiRequest>,
) -> Result<Json<ProgramInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: AuthenticatedActor =
        authenticate(&mut persistence, &req.actor_email, &req.actor_role)?;

    let info: ProgramInfo = registrar_api::create_program(
        &mut *persistence,
        &actor,
        &CreateProgramRequest {
            name: req.name,
            formation_year: req.formation_year,
        },
    )?;
    Ok(Json(info))
}

/// Handler for GET `/programs`.
async fn handle_list_programs(
    AxumState(app_state): AxumState<AppState>,
    Query(actor_query): Query<ActorQuery>,
) -> Result<Json<ListProgramsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: AuthenticatedActor = authenticate(
        &mut persistence,
        &actor_query.actor_email,
        &actor_query.actor_role,
    )?;

    let response: ListProgramsResponse =
        registrar_api::list_programs(&mut *persistence, &actor)?;
    Ok(Json(response))
}

/// Handler for POST `/programs/{program_id}/students`.
async fn handle_enroll_students(
    AxumState(app_state): AxumState<AppState>,
    Path(program_id): Path<i64>,
    Json(req): Json<EnrollStudentsApiRequest>,
) -> Result<Json<EnrollStudentsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: AuthenticatedActor =
        authenticate(&mut persistence, &req.actor_email, &req.actor_role)?;

    let response: EnrollStudentsResponse = registrar_api::enroll_students(
        &mut *persistence,
        &actor,
        program_id,
        &EnrollStudentsRequest {
            student_ids: req.student_ids,
        },
    )?;
    Ok(Json(response))
}

/// Handler for POST `/programs/{program_id}/courses`.
async fn handle_attach_courses(
    AxumState(app_state): AxumState<AppState>,
    Path(program_id): Path<i64>,
    Json(req): Json<AttachCoursesApiRequest>,
) -> Result<Json<AttachCoursesResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: AuthenticatedActor =
        authenticate(&mut persistence, &req.actor_email, &req.actor_role)?;

    let response: AttachCoursesResponse = registrar_api::attach_courses(
        &mut *persistence,
        &actor,
        program_id,
        &AttachCoursesRequest {
            course_ids: req.course_ids,
        },
    )?;
    Ok(Json(response))
}

/// Handler for GET `/programs/{program_id}/courses`.
async fn handle_list_program_courses(
    AxumState(app_state): AxumState<AppState>,
    Path(program_id): Path<i64>,
    Query(actor_query): Query<ActorQuery>,
) -> Result<Json<ListCoursesResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: AuthenticatedActor = authenticate(
        &mut persistence,
        &actor_query.actor_email,
        &actor_query.actor_role,
    )?;

    let response: ListCoursesResponse =
        registrar_api::list_program_courses(&mut *persistence, &actor, program_id)?;
    Ok(Json(response))
}

/// Handler for POST `/courses`.
async fn handle_create_course(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateCourseApiRequest>,
) -> Result<Json<CourseInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: AuthenticatedActor =
        authenticate(&mut persistence, &req.actor_email, &req.actor_role)?;

    let info: CourseInfo = registrar_api::create_course(
        &mut *persistence,
        &actor,
        &CreateCourseRequest {
            code: req.code,
            title: req.title,
        },
    )?;
    Ok(Json(info))
}

/// Handler for GET `/courses`.
async fn handle_list_courses(
    AxumState(app_state): AxumState<AppState>,
    Query(actor_query): Query<ActorQuery>,
) -> Result<Json<ListCoursesResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: AuthenticatedActor = authenticate(
        &mut persistence,
        &actor_query.actor_email,
        &actor_query.actor_role,
    )?;

    let response: ListCoursesResponse =
        registrar_api::list_courses(&mut *persistence, &actor)?;
    Ok(Json(response))
}

/// Handler for POST `/grades`.
async fn handle_record_grade(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RecordGradeApiRequest>,
) -> Result<Json<GradeInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: AuthenticatedActor =
        authenticate(&mut persistence, &req.actor_email, &req.actor_role)?;

    let info: GradeInfo = registrar_api::record_grade(
        &mut *persistence,
        &actor,
        &RecordGradeRequest {
            student_id: req.student_id,
            course_id: req.course_id,
            value: req.value,
        },
    )?;
    Ok(Json(info))
}

/// Handler for GET `/courses/{course_id}/grade_sheet`.
///
/// Returns the sheet as a CSV download rather than JSON.
async fn handle_export_grade_sheet(
    AxumState(app_state): AxumState<AppState>,
    Path(course_id): Path<i64>,
    Query(actor_query): Query<ActorQuery>,
) -> Result<Response, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: AuthenticatedActor = authenticate(
        &mut persistence,
        &actor_query.actor_email,
        &actor_query.actor_role,
    )?;

    let csv: String = registrar_api::export_grade_sheet(&mut *persistence, &actor, course_id)?;
    let response: Response = (
        [
            (header::CONTENT_TYPE, String::from("text/csv; charset=utf-8")),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"grade_sheet_course_{course_id}.csv\""),
            ),
        ],
        csv,
    )
        .into_response();
    Ok(response)
}

/// Handler for POST `/courses/{course_id}/grade_sheet`.
async fn handle_import_grade_sheet(
    AxumState(app_state): AxumState<AppState>,
    Path(course_id): Path<i64>,
    Json(req): Json<ImportGradeSheetApiRequest>,
) -> Result<Json<ImportGradeSheetResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: AuthenticatedActor =
        authenticate(&mut persistence, &req.actor_email, &req.actor_role)?;

    let response: ImportGradeSheetResponse =
        registrar_api::import_grade_sheet(&mut *persistence, &actor, course_id, &req.csv)?;
    Ok(Json(response))
}

/// Handler for POST `/accounts`.
async fn handle_create_account(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateAccountApiRequest>,
) -> Result<Json<AccountResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let actor: AuthenticatedActor =
        authenticate(&mut persistence, &req.actor_email, &req.actor_role)?;

    let response: AccountResponse = registrar_api::create_account(
        &mut *persistence,
        &actor,
        &CreateAccountRequest {
            email: req.email,
            password: req.password,
            password_confirmation: req.password_confirmation,
            role: req.role,
            student_id: req.student_id,
        },
    )?;
    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/students", post(handle_create_student))
        .route("/students", get(handle_list_students))
        .route("/students/{student_id}", get(handle_get_student))
        .route("/students/{student_id}", put(handle_update_student))
        .route("/students/{student_id}", delete(handle_delete_student))
        .route(
            "/students/{student_id}/profile",
            get(handle_get_student_profile),
        )
        .route("/programs", post(handle_create_program))
        .route("/programs", get(handle_list_programs))
        .route(
            "/programs/{program_id}/students",
            post(handle_enroll_students),
        )
        .route(
            "/programs/{program_id}/courses",
            post(handle_attach_courses),
        )
        .route(
            "/programs/{program_id}/courses",
            get(handle_list_program_courses),
        )
        .route("/courses", post(handle_create_course))
        .route("/courses", get(handle_list_courses))
        .route("/grades", post(handle_record_grade))
        .route(
            "/courses/{course_id}/grade_sheet",
            get(handle_export_grade_sheet),
        )
        .route(
            "/courses/{course_id}/grade_sheet",
            post(handle_import_grade_sheet),
        )
        .route("/accounts", post(handle_create_account))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Registrar Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: SqlitePersistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        SqlitePersistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        SqlitePersistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = args.address.parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use tower::ServiceExt;

    /// Helper to create test app state with in-memory persistence.
    fn create_test_app_state() -> AppState {
        let persistence: SqlitePersistence =
            SqlitePersistence::new_in_memory().expect("Failed to create in-memory persistence");
        AppState {
            persistence: Arc::new(Mutex::new(persistence)),
        }
    }

    fn post_json(uri: &str, body: &impl Serialize) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(body).unwrap()))
            .unwrap()
    }

    fn get_as(uri: &str, role: &str) -> Request<Body> {
        let email: &str = match role {
            "Scolarite" => "scolarite@u-picardie.fr",
            "Responsable" => "responsable@u-picardie.fr",
            _ => "etudiant@etud.u-picardie.fr",
        };
        Request::builder()
            .method("GET")
            .uri(format!(
                "{uri}?actor_email={email}&actor_role={role}"
            ))
            .body(Body::empty())
            .unwrap()
    }

    fn student_request(enrollment_number: &str) -> CreateStudentApiRequest {
        CreateStudentApiRequest {
            actor_email: String::from("scolarite@u-picardie.fr"),
            actor_role: String::from("Scolarite"),
            enrollment_number: enrollment_number.to_string(),
            first_name: String::from("Jean"),
            last_name: String::from("Dupont"),
            email: format!("{}@etud.u-picardie.fr", enrollment_number.to_lowercase()),
        }
    }

    async fn response_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Seeds a program teaching a course with two enrolled students.
    /// Returns (`program_id`, `course_id`, `student_ids`).
    async fn seed_roster(app: &Router) -> (i64, i64, Vec<i64>) {
        let program_req = CreateProgramApiRequest {
            actor_email: String::from("scolarite@u-picardie.fr"),
            actor_role: String::from("Scolarite"),
            name: String::from("Informatique L1"),
            formation_year: 1,
        };
        let response = app
            .clone()
            .oneshot(post_json("/programs", &program_req))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        let program_id: i64 = response_json(response).await["program_id"].as_i64().unwrap();

        let course_req = CreateCourseApiRequest {
            actor_email: String::from("scolarite@u-picardie.fr"),
            actor_role: String::from("Scolarite"),
            code: String::from("UE101"),
            title: String::from("Cours UE101"),
        };
        let response = app
            .clone()
            .oneshot(post_json("/courses", &course_req))
            .await
            .unwrap();
        let course_id: i64 = response_json(response).await["course_id"].as_i64().unwrap();

        let attach_req = AttachCoursesApiRequest {
            actor_email: String::from("scolarite@u-picardie.fr"),
            actor_role: String::from("Scolarite"),
            course_ids: vec![course_id],
        };
        let response = app
            .clone()
            .oneshot(post_json(
                &format!("/programs/{program_id}/courses"),
                &attach_req,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let mut student_ids: Vec<i64> = Vec::new();
        for number in ["ET1", "ET2"] {
            let response = app
                .clone()
                .oneshot(post_json("/students", &student_request(number)))
                .await
                .unwrap();
            assert_eq!(response.status(), HttpStatusCode::OK);
            student_ids.push(response_json(response).await["student_id"].as_i64().unwrap());
        }

        let enroll_req = EnrollStudentsApiRequest {
            actor_email: String::from("scolarite@u-picardie.fr"),
            actor_role: String::from("Scolarite"),
            student_ids: student_ids.clone(),
        };
        let response = app
            .clone()
            .oneshot(post_json(
                &format!("/programs/{program_id}/students"),
                &enroll_req,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        (program_id, course_id, student_ids)
    }

    #[tokio::test]
    async fn test_create_student_succeeds() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(post_json("/students", &student_request("et1")))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let body = response_json(response).await;
        assert_eq!(body["enrollment_number"], "ET1");
        assert!(body["student_id"].as_i64().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_duplicate_student_is_unprocessable() {
        let app: Router = build_router(create_test_app_state());

        app.clone()
            .oneshot(post_json("/students", &student_request("ET1")))
            .await
            .unwrap();

        let mut twin: CreateStudentApiRequest = student_request("ET1");
        twin.email = String::from("other@etud.u-picardie.fr");
        let response = app
            .oneshot(post_json("/students", &twin))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);

        let body = response_json(response).await;
        assert_eq!(body["error"], true);
    }

    #[tokio::test]
    async fn test_student_role_cannot_list_students() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(get_as("/students", "Etudiant"))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_unknown_role_is_forbidden() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(get_as("/students", "Directeur"))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_missing_student_is_not_found() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(get_as("/students/999", "Scolarite"))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_grade_flow_end_to_end() {
        let app: Router = build_router(create_test_app_state());
        let (_, course_id, student_ids) = seed_roster(&app).await;

        let grade_req = RecordGradeApiRequest {
            actor_email: String::from("responsable@u-picardie.fr"),
            actor_role: String::from("Responsable"),
            student_id: student_ids[0],
            course_id,
            value: 15.5,
        };
        let response = app
            .clone()
            .oneshot(post_json("/grades", &grade_req))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let profile = app
            .oneshot(get_as(
                &format!("/students/{}/profile", student_ids[0]),
                "Scolarite",
            ))
            .await
            .unwrap();
        assert_eq!(profile.status(), HttpStatusCode::OK);
        let body = response_json(profile).await;
        assert_eq!(body["grades"].as_array().unwrap().len(), 1);
        assert_eq!(body["program"]["name"], "Informatique L1");
    }

    #[tokio::test]
    async fn test_grade_without_enrollment_is_unprocessable() {
        let app: Router = build_router(create_test_app_state());
        let (_, course_id, _) = seed_roster(&app).await;

        let response = app
            .clone()
            .oneshot(post_json("/students", &student_request("ET3")))
            .await
            .unwrap();
        let outsider: i64 = response_json(response).await["student_id"].as_i64().unwrap();

        let grade_req = RecordGradeApiRequest {
            actor_email: String::from("scolarite@u-picardie.fr"),
            actor_role: String::from("Scolarite"),
            student_id: outsider,
            course_id,
            value: 10.0,
        };
        let response = app.oneshot(post_json("/grades", &grade_req)).await.unwrap();
        assert_eq!(response.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_export_grade_sheet_is_a_csv_download() {
        let app: Router = build_router(create_test_app_state());
        let (_, course_id, _) = seed_roster(&app).await;

        let response = app
            .oneshot(get_as(
                &format!("/courses/{course_id}/grade_sheet"),
                "Scolarite",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/csv; charset=utf-8"
        );

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text: String = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.starts_with(
            "enrollment_number;last_name;first_name;course_code;course_title;grade"
        ));
        assert_eq!(text.lines().count(), 3);
    }

    #[tokio::test]
    async fn test_export_is_denied_to_the_program_director() {
        let app: Router = build_router(create_test_app_state());
        let (_, course_id, _) = seed_roster(&app).await;

        let response = app
            .oneshot(get_as(
                &format!("/courses/{course_id}/grade_sheet"),
                "Responsable",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_import_rejects_the_sheet_with_all_errors() {
        let app: Router = build_router(create_test_app_state());
        let (_, course_id, _) = seed_roster(&app).await;

        let import_req = ImportGradeSheetApiRequest {
            actor_email: String::from("scolarite@u-picardie.fr"),
            actor_role: String::from("Scolarite"),
            csv: String::from(
                "enrollment_number;last_name;first_name;course_code;course_title;grade\n\
                 ET1;Dupont;Jean;UE101;Cours UE101;25\n\
                 ET9;Durand;Anne;UE101;Cours UE101;8\n",
            ),
        };
        let response = app
            .clone()
            .oneshot(post_json(
                &format!("/courses/{course_id}/grade_sheet"),
                &import_req,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);

        let body = response_json(response).await;
        let errors = body["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors[0],
            "invalid grade for ET1: 25 must be between 0 and 20"
        );
        assert_eq!(errors[1], "student not found: ET9");

        // Nothing was committed
        let export = app
            .oneshot(get_as(
                &format!("/courses/{course_id}/grade_sheet"),
                "Scolarite",
            ))
            .await
            .unwrap();
        let bytes = axum::body::to_bytes(export.into_body(), usize::MAX)
            .await
            .unwrap();
        let text: String = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.lines().skip(1).all(|line| line.ends_with(';')));
    }

    #[tokio::test]
    async fn test_corrected_sheet_overwrites_prior_grades() {
        let app: Router = build_router(create_test_app_state());
        let (_, course_id, _) = seed_roster(&app).await;

        let first = ImportGradeSheetApiRequest {
            actor_email: String::from("scolarite@u-picardie.fr"),
            actor_role: String::from("Scolarite"),
            csv: String::from(
                "enrollment_number;last_name;first_name;course_code;course_title;grade\n\
                 ET1;Dupont;Jean;UE101;Cours UE101;9\n",
            ),
        };
        let response = app
            .clone()
            .oneshot(post_json(
                &format!("/courses/{course_id}/grade_sheet"),
                &first,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["created"], 1);

        let corrected = ImportGradeSheetApiRequest {
            actor_email: String::from("scolarite@u-picardie.fr"),
            actor_role: String::from("Scolarite"),
            csv: String::from(
                "enrollment_number;last_name;first_name;course_code;course_title;grade\n\
                 ET1;Dupont;Jean;UE101;Cours UE101;14\n",
            ),
        };
        let response = app
            .clone()
            .oneshot(post_json(
                &format!("/courses/{course_id}/grade_sheet"),
                &corrected,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["updated"], 1);
        assert_eq!(body["created"], 0);

        let export = app
            .oneshot(get_as(
                &format!("/courses/{course_id}/grade_sheet"),
                "Scolarite",
            ))
            .await
            .unwrap();
        let bytes = axum::body::to_bytes(export.into_body(), usize::MAX)
            .await
            .unwrap();
        let text: String = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.contains("ET1;Dupont;Jean;UE101;Cours UE101;14"));
    }

    #[tokio::test]
    async fn test_student_account_views_only_its_own_record() {
        let app: Router = build_router(create_test_app_state());
        let (_, _, student_ids) = seed_roster(&app).await;

        // Register a student account linked to ET1
        let account_req = CreateAccountApiRequest {
            actor_email: String::from("scolarite@u-picardie.fr"),
            actor_role: String::from("Scolarite"),
            email: String::from("etudiant@etud.u-picardie.fr"),
            password: String::from("MyP@ssw0rd123"),
            password_confirmation: String::from("MyP@ssw0rd123"),
            role: String::from("Etudiant"),
            student_id: Some(student_ids[0]),
        };
        let response = app
            .clone()
            .oneshot(post_json("/accounts", &account_req))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let own = app
            .clone()
            .oneshot(get_as(&format!("/students/{}", student_ids[0]), "Etudiant"))
            .await
            .unwrap();
        assert_eq!(own.status(), HttpStatusCode::OK);

        let other = app
            .oneshot(get_as(&format!("/students/{}", student_ids[1]), "Etudiant"))
            .await
            .unwrap();
        assert_eq!(other.status(), HttpStatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_account_creation_enforces_the_password_policy() {
        let app: Router = build_router(create_test_app_state());

        let account_req = CreateAccountApiRequest {
            actor_email: String::from("scolarite@u-picardie.fr"),
            actor_role: String::from("Scolarite"),
            email: String::from("responsable@u-picardie.fr"),
            password: String::from("weak"),
            password_confirmation: String::from("weak"),
            role: String::from("Responsable"),
            student_id: None,
        };
        let response = app
            .oneshot(post_json("/accounts", &account_req))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_claimed_role_must_match_the_registered_account() {
        let app: Router = build_router(create_test_app_state());

        let account_req = CreateAccountApiRequest {
            actor_email: String::from("scolarite@u-picardie.fr"),
            actor_role: String::from("Scolarite"),
            email: String::from("responsable@u-picardie.fr"),
            password: String::from("MyP@ssw0rd123"),
            password_confirmation: String::from("MyP@ssw0rd123"),
            role: String::from("Responsable"),
            student_id: None,
        };
        app.clone()
            .oneshot(post_json("/accounts", &account_req))
            .await
            .unwrap();

        // The registered Responsable cannot claim Scolarite
        let request: Request<Body> = Request::builder()
            .method("GET")
            .uri("/students?actor_email=responsable@u-picardie.fr&actor_role=Scolarite")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), HttpStatusCode::UNAUTHORIZED);
    }
}
